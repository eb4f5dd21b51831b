//! Error types

use std::error;
use std::fmt;

pub use crate::core::{ExecuteError, RewriteError};
pub use crate::fs::PathError;

/// Top level error
///
/// The full report has already been printed to stderr when this is returned.
#[derive(Debug)]
pub struct RefpathError;

impl fmt::Display for RefpathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "refpath was unsuccessful! There might be error traces above."
        )
    }
}

impl error::Error for RefpathError {}
