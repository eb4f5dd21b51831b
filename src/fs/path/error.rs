use std::error;
use std::fmt;
use std::path::Path;

/// Error related to paths
#[derive(Debug)]
pub struct PathError {
    /// The path that caused the error, as a string
    pub path: String,
}

impl<P> From<&P> for PathError
where
    P: AsRef<Path> + ?Sized,
{
    fn from(p: &P) -> Self {
        Self {
            path: p.as_ref().display().to_string(),
        }
    }
}

impl fmt::Display for PathError {
    #[cfg(windows)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // canonicalized paths carry the verbatim `\\?\` prefix on windows
        let path = self.path.strip_prefix(r"\\?\").unwrap_or(&self.path);
        write!(f, "cannot use path `{path}`")
    }
    #[cfg(not(windows))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot use path `{}`", self.path)
    }
}

impl error::Error for PathError {}
