use crate::core::{scan_dir, verbs, Progress};
use crate::error::RefpathError;
use crate::fs::{AbsPath, SourcePath};
use error_stack::{Report, Result};
use termcolor::Color;

mod config;
pub use config::*;
mod error;
pub use error::ExecuteError;
mod pattern;
pub use pattern::*;
mod rewrite;
pub use rewrite::*;

/// Run refpath with the given config
///
/// This is the main entry point for rewriting references. It takes a [`Config`] and runs it.
/// If an error occurs, it will be printed to stderr and the function will return [`Err`].
///
/// If you want to retrieve the error object instead of printing it, use [`Refpath::run`].
pub fn refpath(config: Config) -> std::result::Result<Summary, RefpathError> {
    match Refpath::run(config) {
        Ok(summary) => Ok(summary),
        Err(e) => {
            eprintln!("{:?}", e);
            Err(RefpathError)
        }
    }
}

/// Counts from one run
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    /// Files with a matching extension that were looked at
    pub scanned: usize,
    /// Files with at least one reference (written back in [`Mode::Fix`])
    pub updated: usize,
    /// Files without any reference
    pub unmatched: usize,
    /// Files with references that would change ([`Mode::Check`] only)
    pub outdated: Vec<AbsPath>,
    /// Files that could not be read or written
    pub failed: Vec<AbsPath>,
}

/// The runtime state when rewriting references
#[derive(Debug)]
pub struct Refpath {
    /// The Config
    config: Config,
    /// The Progress reporter
    progress: Progress,
    /// The matcher for the target name
    pattern: ReferencePattern,
    /// Extensions of files to process
    extensions: Vec<String>,
    /// Counts so far
    summary: Summary,
    /// Reports of files that failed, kept until the end
    failures: Vec<Report<RewriteError>>,
}

impl Refpath {
    /// Internal run function
    ///
    /// This is what [`refpath`] calls internally. The difference is that this function
    /// returns the error instead of printing it.
    pub fn run(config: Config) -> Result<Summary, ExecuteError> {
        log::info!("creating refpath");
        log::debug!("using config: {:?}", config);

        let target_name = config.resolved_target_name().ok_or_else(|| {
            Report::new(ExecuteError).attach_printable(format!(
                "cannot determine the target file name from `{}`",
                config.target_path.display()
            ))
        })?;
        let pattern = ReferencePattern::new(&target_name)?;

        let runtime = Self {
            progress: Progress::new(config.verbosity.clone()),
            extensions: config.normalized_extensions(),
            config,
            pattern,
            summary: Summary::default(),
            failures: vec![],
        };

        runtime.run_internal()
    }

    fn run_internal(mut self) -> Result<Summary, ExecuteError> {
        let root = AbsPath::try_from(self.config.root.clone()).map_err(|e| {
            e.change_context(ExecuteError)
                .attach_printable("cannot resolve root directory")
        })?;
        if !root.as_path().is_dir() {
            return Err(Report::new(ExecuteError)
                .attach_printable(format!("root `{root}` is not a directory")));
        }
        let target = root.join_lexical(&self.config.target_path);

        let _ = self.progress.print_status(
            verbs::USING,
            &format!("`{}` at {target}", self.pattern.target_name()),
            Color::Yellow,
            false,
        );
        let _ = self
            .progress
            .print_status(verbs::SCANNING, &root.to_string(), Color::Yellow, false);

        // depth first, in name order
        let mut pending = vec![root];
        while let Some(dir) = pending.pop() {
            self.execute_directory(&dir, &target, &mut pending)?;
        }

        self.finish()
    }

    fn execute_directory(
        &mut self,
        dir: &AbsPath,
        target: &AbsPath,
        pending: &mut Vec<AbsPath>,
    ) -> Result<(), ExecuteError> {
        log::info!("scanning directory: {dir}");
        let _ = self
            .progress
            .print_status(verbs::SCANNING, &dir.to_string(), Color::Yellow, true);

        let extensions = &self.extensions;
        let directory = scan_dir(dir, |p| p.has_extension_in(extensions)).map_err(|e| {
            let _ = self
                .progress
                .print_status(verbs::FAILED, &dir.to_string(), Color::Red, false);
            e.change_context(ExecuteError)
                .attach_printable("cannot scan directory")
        })?;

        for file in directory.files {
            self.execute_file(file, target)?;
        }
        pending.extend(directory.subdirs.into_iter().rev());
        Ok(())
    }

    fn execute_file(&mut self, file: AbsPath, target: &AbsPath) -> Result<(), ExecuteError> {
        log::info!("processing file: {file}");
        self.summary.scanned += 1;
        let mode = self.config.mode;

        let outcome = match rewrite_file(&file, target, &self.pattern, mode) {
            Ok(outcome) => outcome,
            Err(e) => {
                let _ = self
                    .progress
                    .print_status(verbs::FAILED, &file.to_string(), Color::Red, false);
                if self.config.fail_fast {
                    return Err(e
                        .change_context(ExecuteError)
                        .attach_printable("stopping at the first failed file"));
                }
                log::warn!("skipping {file}: {e}");
                self.summary.failed.push(file);
                self.failures.push(e);
                return Ok(());
            }
        };

        match outcome {
            RewriteOutcome::NoMatch => {
                self.summary.unmatched += 1;
                let _ = self.progress.print_status(
                    verbs::NO_MATCH,
                    &file.to_string(),
                    Color::White,
                    false,
                );
            }
            RewriteOutcome::Updated {
                replacements,
                changed,
            } => {
                if mode == Mode::Check && !changed {
                    let _ = self.progress.print_status(
                        verbs::UP_TO_DATE,
                        &file.to_string(),
                        Color::Green,
                        true,
                    );
                    return Ok(());
                }
                let _ = self.progress.print_status(
                    mode.processing_verb(),
                    &file.to_string(),
                    if mode == Mode::Fix {
                        Color::Green
                    } else {
                        Color::Red
                    },
                    false,
                );
                for r in &replacements {
                    let _ = self.progress.print_status(
                        verbs::REPLACED,
                        &r.to_string(),
                        Color::Cyan,
                        false,
                    );
                }
                match mode {
                    Mode::Fix => self.summary.updated += 1,
                    Mode::Check => self.summary.outdated.push(file),
                }
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Summary, ExecuteError> {
        let summary = std::mem::take(&mut self.summary);
        let message = match self.config.mode {
            Mode::Fix => format!(
                "{} file(s) scanned, {} updated, {} without match, {} failed",
                summary.scanned,
                summary.updated,
                summary.unmatched,
                summary.failed.len()
            ),
            Mode::Check => format!(
                "{} file(s) scanned, {} outdated, {} failed",
                summary.scanned,
                summary.outdated.len(),
                summary.failed.len()
            ),
        };

        let failures = std::mem::take(&mut self.failures);
        if let Some(report) = unsuccessful_report(failures, &summary.outdated) {
            let _ = self
                .progress
                .print_status(verbs::FAILED, &message, Color::Red, false);
            return Err(report);
        }

        let _ = self
            .progress
            .print_status(verbs::DONE, &message, Color::Green, false);
        Ok(summary)
    }
}

/// Combine failed files and outdated files into one report.
///
/// Returns `None` if there is nothing to report.
fn unsuccessful_report(
    failures: Vec<Report<RewriteError>>,
    outdated: &[AbsPath],
) -> Option<Report<ExecuteError>> {
    let failed_count = failures.len();
    let mut report: Option<Report<ExecuteError>> = None;
    for e in failures {
        let e = e.change_context(ExecuteError);
        match report.as_mut() {
            Some(r) => r.extend_one(e),
            None => report = Some(e),
        }
    }
    if let Some(r) = report {
        report = Some(r.attach_printable(format!(
            "{failed_count} file(s) could not be processed"
        )));
    }

    if !outdated.is_empty() {
        let mut r = report.unwrap_or_else(|| Report::new(ExecuteError)).attach_printable(
            format!("{} file(s) are not up to date:", outdated.len()),
        );
        for file in outdated {
            r = r.attach_printable(file.to_string());
        }
        report = Some(r);
    }

    report
}
