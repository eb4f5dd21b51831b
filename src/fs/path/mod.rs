//! Wrapper around Path objects provided by the standard library
//!
//! In the program, we use several kinds of paths
//! - The root directory to scan, as given by the user
//! - The location of the target file, which may not exist
//! - The files and directories found while scanning, which are always absolute
//!
//! The wrapper makes sure that paths are always in the correct context.
//! It also adds some convenience methods and helpers to convert to and from
//! the standard library types.

use std::path::Path;

mod abs_path;
pub use abs_path::*;
mod directory;
pub use directory::*;
mod error;
pub use error::*;
mod rel_path;
pub use rel_path::*;

pub trait SourcePath {
    /// Check if the file name ends with `.{ext}` for one of `extensions`.
    ///
    /// This is a plain suffix check on the name, so a file called `.js`
    /// counts as a `js` file. Names that are not valid UTF-8 are compared lossily.
    fn has_extension_in(&self, extensions: &[String]) -> bool;

    /// Name to show for a directory the user pointed at.
    ///
    /// This is the last component, or the whole path as given when there is none (e.g. `.`).
    fn display_name(&self) -> String;
}

impl SourcePath for Path {
    fn has_extension_in(&self, extensions: &[String]) -> bool {
        // lossy, so names that are not UTF-8 are still considered
        let name = match self.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return false,
        };
        extensions.iter().any(|ext| {
            name.strip_suffix(ext.as_str())
                .map_or(false, |stem| stem.ends_with('.'))
        })
    }

    fn display_name(&self) -> String {
        match self.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.display().to_string(),
        }
    }
}
