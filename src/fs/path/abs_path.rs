use super::{normalize_lexically, PathError};
use std::path::{Path, PathBuf};

use error_stack::{Report, Result, ResultExt};

/// Representation of an absolute path.
///
/// Using [`PathBuf`] directly in the program can be confusing,
/// since it can represent both relative and absolute paths in different contexts.
/// Hence, we use `AbsPath` wherever we can to indicate that a path is resolved and absolute.
///
/// We still use [`PathBuf`] in places that usually represent input from the user,
/// as it could be relative or absolute and may not exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AbsPath {
    p: PathBuf,
}

impl TryFrom<PathBuf> for AbsPath {
    type Error = Report<PathError>;

    /// Convert a [`PathBuf`] to an absolute path.
    ///
    /// This will error if:
    /// - the path doesn't exist
    /// - the path cannot be made absolute for some reason
    ///
    /// If the path is relative, it will be made absolute by
    /// using [`canonicalize`](std::path::Path::canonicalize)
    fn try_from(p: PathBuf) -> Result<Self, PathError> {
        if !p.exists() {
            return Err(Report::new(PathError::from(&p)).attach_printable("path does not exist"));
        }
        let p_abs = p
            .canonicalize()
            .change_context_lazy(|| PathError::from(&p))
            .attach_printable("cannot resolve path as absolute")?;

        Ok(Self { p: p_abs })
    }
}

/// Integration with [`PathBuf`] and [`Path`]
impl AbsPath {
    #[inline]
    pub fn as_path_buf(&self) -> &PathBuf {
        &self.p
    }
    #[inline]
    pub fn into_path_buf(self) -> PathBuf {
        self.p
    }
    #[inline]
    pub fn as_path(&self) -> &Path {
        self.p.as_path()
    }
}

impl From<AbsPath> for PathBuf {
    #[inline]
    fn from(p: AbsPath) -> Self {
        p.p
    }
}

impl AsRef<PathBuf> for AbsPath {
    #[inline]
    fn as_ref(&self) -> &PathBuf {
        self.as_path_buf()
    }
}

impl AsRef<Path> for AbsPath {
    #[inline]
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl AbsPath {
    /// Resolve `ext` against this path without touching the file system.
    ///
    /// If `ext` is absolute, it is only normalized. Otherwise it is joined onto
    /// the current path first. The result does not need to exist, and symlinks
    /// in `ext` are kept as they are.
    pub fn join_lexical<P>(&self, ext: P) -> Self
    where
        P: AsRef<Path>,
    {
        let path = ext.as_ref();
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.p.join(path)
        };
        Self {
            p: normalize_lexically(&joined),
        }
    }

    /// The last component of the path, lossily converted to a string.
    ///
    /// Returns an empty string for the file system root.
    pub fn file_name_string(&self) -> String {
        self.p
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for AbsPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.p.display())
    }
}
