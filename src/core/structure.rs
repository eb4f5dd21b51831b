//! Dump a directory structure to a text file
//!
//! Every directory is written as one line, followed by its files, then its
//! subdirectories, each indented one level deeper.

use crate::core::{scan_dir, verbs, ExecuteError, Progress, Verbosity};
use crate::error::RefpathError;
use crate::fs::{AbsPath, PathError, SourcePath};
use error_stack::{Result, ResultExt};
use std::fs;
use std::path::{Path, PathBuf};
use termcolor::Color;

const INDENT: &str = "    ";
const BRANCH_INDENT: &str = "│   ";
const BRANCH: &str = "├── ";

/// How nesting is drawn
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TreeStyle {
    /// Four spaces per level
    Indent,
    /// `│   ` per level, with `├── ` in front of directories
    Branch,
}

impl TreeStyle {
    /// Depth limit to use when none is given
    pub fn default_max_depth(&self) -> Option<usize> {
        match self {
            Self::Indent => None,
            Self::Branch => Some(6),
        }
    }

    fn dir_line(&self, depth: usize, name: &str) -> String {
        match self {
            Self::Indent => format!("{}{name}/\n", INDENT.repeat(depth)),
            Self::Branch => format!("{}{BRANCH}{name}/\n", BRANCH_INDENT.repeat(depth)),
        }
    }

    fn file_line(&self, depth: usize, name: &str) -> String {
        let indent = match self {
            Self::Indent => INDENT,
            Self::Branch => BRANCH_INDENT,
        };
        format!("{}{name}\n", indent.repeat(depth + 1))
    }
}

/// Config for dumping a directory structure
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Directory to dump
    pub root: PathBuf,
    /// File to write the structure to
    ///
    /// It is written after the structure is rendered. If it sits inside `root`
    /// and does not exist yet, it is not part of the listing until the next run.
    pub output: PathBuf,
    pub style: TreeStyle,
    /// Directories this deep or deeper are left out. The root is depth 0
    pub max_depth: Option<usize>,
    pub verbosity: Verbosity,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from("file_structure.txt"),
            style: TreeStyle::Indent,
            max_depth: None,
            verbosity: Verbosity::Normal,
        }
    }
}

/// Dump the structure with the given config, printing any error to stderr
pub fn tree(config: TreeConfig) -> std::result::Result<(), RefpathError> {
    dump_tree(&config).map_err(|e| {
        eprintln!("{:?}", e);
        RefpathError
    })
}

/// Render the structure of `config.root` and write it to `config.output`
pub fn dump_tree(config: &TreeConfig) -> Result<(), ExecuteError> {
    log::info!("dumping structure of {}", config.root.display());
    log::debug!("using config: {:?}", config);
    let mut progress = Progress::new(config.verbosity.clone());

    let text = render_tree(&config.root, config.style, config.max_depth).map_err(|e| {
        let _ = progress.print_status(
            verbs::FAILED,
            &config.root.display().to_string(),
            Color::Red,
            false,
        );
        e.change_context(ExecuteError)
            .attach_printable("cannot read directory structure")
    })?;

    fs::write(&config.output, &text)
        .change_context(ExecuteError)
        .attach_printable_lazy(|| {
            format!("cannot write structure to `{}`", config.output.display())
        })?;

    let _ = progress.print_status(
        verbs::WROTE,
        &format!("{} ({} line(s))", config.output.display(), text.lines().count()),
        Color::Green,
        false,
    );
    Ok(())
}

/// Render the structure of `root` as text, one entry per line.
///
/// Entries are in name order. Directories at `max_depth` or deeper are neither
/// listed nor scanned.
pub fn render_tree(
    root: &Path,
    style: TreeStyle,
    max_depth: Option<usize>,
) -> Result<String, PathError> {
    let root_abs = AbsPath::try_from(root.to_path_buf())?;
    let mut out = String::new();

    let mut pending = vec![(root_abs, 0usize, root.display_name())];
    while let Some((dir, depth, name)) = pending.pop() {
        if max_depth.map_or(false, |max| depth >= max) {
            continue;
        }
        let directory = scan_dir(&dir, |_| true)?;
        out.push_str(&style.dir_line(depth, &name));
        for file in &directory.files {
            out.push_str(&style.file_line(depth, &file.file_name_string()));
        }
        for sub in directory.subdirs.into_iter().rev() {
            let name = sub.file_name_string();
            pending.push((sub, depth + 1, name));
        }
    }

    Ok(out)
}
