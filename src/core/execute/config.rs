use crate::core::verbs;
use std::path::PathBuf;

/// Location of the target file used when none is configured
pub const DEFAULT_TARGET_PATH: &str = "src/data/medicaid_rules_2025.json";

/// Config for rewriting references
///
/// Use this to configure refpath when calling it from the library
/// # Example
/// ```no_run
/// use refpath::{Refpath, Config, Mode};
///
/// // Use the default config
/// let mut cfg = Config::default();
/// // Only report what would change
/// cfg.mode = Mode::Check;
/// cfg.target_path = "assets/rules.json".into();
/// Refpath::run(cfg).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory to scan. This is usually the current directory.
    pub root: PathBuf,
    /// Where the target file actually is, relative to `root` (or absolute). It does not need to exist.
    pub target_path: PathBuf,
    /// File name to look for inside references. `None` to use the file name of `target_path`
    pub target_name: Option<String>,
    /// Extensions of the files to scan, without the leading dot
    pub extensions: Vec<String>,
    /// The mode. See [`Mode`]
    pub mode: Mode,
    /// The verbosity. See [`Verbosity`]
    pub verbosity: Verbosity,
    /// Stop at the first file that cannot be processed, instead of continuing with the rest
    pub fail_fast: bool,
}

impl Default for Config {
    /// Get the default config.
    ///
    /// This means:
    /// - Scanning the current directory
    /// - Target file at `src/data/medicaid_rules_2025.json`
    /// - Looking for `.js` and `.ts` files
    /// - Rewriting files in place
    /// - Regular verbosity
    /// - Continuing past files that fail
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            target_path: PathBuf::from(DEFAULT_TARGET_PATH),
            target_name: None,
            extensions: vec!["js".to_string(), "ts".to_string()],
            mode: Mode::Fix,
            verbosity: Verbosity::Normal,
            fail_fast: false,
        }
    }
}

impl Config {
    /// The file name references are matched against.
    ///
    /// Returns `None` if it is not set and `target_path` has no file name.
    pub fn resolved_target_name(&self) -> Option<String> {
        match &self.target_name {
            Some(name) if !name.is_empty() => Some(name.clone()),
            Some(_) => None,
            None => self
                .target_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned()),
        }
    }

    /// Extensions with any leading dot removed and empty entries dropped
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect()
    }
}

/// The verbosity config options
#[derive(Debug, PartialEq, Clone)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

/// The mode config options
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Mode {
    /// Rewrite references in place
    ///
    /// This is the default mode. Every file with at least one match is written back,
    /// even if the rewritten content is the same as before.
    Fix,
    /// Report files whose references are not up to date
    ///
    /// Nothing is written. The run fails if any file would change.
    Check,
}

impl Mode {
    pub fn processing_verb(&self) -> &'static str {
        match self {
            Self::Fix => verbs::UPDATED,
            Self::Check => verbs::OUTDATED,
        }
    }
}
