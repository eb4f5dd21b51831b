use super::pattern::{ReferencePattern, Replacement};
use crate::core::Mode;
use crate::fs::{relative_path, AbsPath};
use error_stack::{Result, ResultExt};
use std::error;
use std::fmt;
use std::fs;

/// What happened to one file
#[derive(Debug, Clone, PartialEq)]
pub enum RewriteOutcome {
    /// At least one reference was found.
    ///
    /// `changed` is false when every reference already pointed at the target.
    Updated {
        replacements: Vec<Replacement>,
        changed: bool,
    },
    /// No reference to the target in the file
    NoMatch,
}

/// Rewrite the references in one file so they point at `target`.
///
/// # Arguments
/// file: the file to rewrite, read fully as UTF-8
/// target: where the target file is, as absolute path
/// pattern: the matcher for the target file name
/// mode: in [`Mode::Fix`] the file is written back whenever there is a match,
/// in [`Mode::Check`] it is never written
pub fn rewrite_file(
    file: &AbsPath,
    target: &AbsPath,
    pattern: &ReferencePattern,
    mode: Mode,
) -> Result<RewriteOutcome, RewriteError> {
    let content = fs::read_to_string(file)
        .change_context_lazy(|| RewriteError::Read(file.clone()))
        .attach_printable("cannot read file as UTF-8 text.")?;

    let new_path = relative_path(file, target);
    log::debug!("reference from {file} should be `{new_path}`");

    let rewritten = pattern.rewrite(&content, &new_path);
    if rewritten.replacements.is_empty() {
        return Ok(RewriteOutcome::NoMatch);
    }

    let changed = rewritten.content != content;
    if mode == Mode::Fix {
        fs::write(file, &rewritten.content)
            .change_context_lazy(|| RewriteError::Write(file.clone()))
            .attach_printable("cannot write rewritten content.")?;
    }

    Ok(RewriteOutcome::Updated {
        replacements: rewritten.replacements,
        changed,
    })
}

#[derive(Debug)]
pub enum RewriteError {
    Read(AbsPath),
    Write(AbsPath),
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RewriteError::Read(p) => write!(f, "Could not read {p}"),
            RewriteError::Write(p) => write!(f, "Could not write {p}"),
        }
    }
}

impl error::Error for RewriteError {}
