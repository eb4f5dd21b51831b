use crate::fs::{AbsPath, Directory, PathError};
use error_stack::{Result, ResultExt};
use std::path::Path;

/// List one directory.
///
/// Subdirectories are always returned. Anything else is returned as a file if
/// `keep_file` accepts it. Symlinks to directories are skipped, so the scan
/// never follows them.
pub fn scan_dir<F>(dir: &AbsPath, mut keep_file: F) -> Result<Directory, PathError>
where
    F: FnMut(&Path) -> bool,
{
    let dir_path = dir.as_path_buf();
    let entries = dir_path
        .read_dir()
        .change_context_lazy(|| PathError::from(dir_path))
        .attach_printable("failed to read directory")?;

    let mut directory = Directory::new();

    for entry in entries {
        let entry = entry
            .change_context_lazy(|| PathError::from(dir_path))
            .attach_printable("failed to read directory entry")?;
        let file_type = entry
            .file_type()
            .change_context_lazy(|| PathError::from(&entry.path()))
            .attach_printable("failed to read file type")?;
        let path = entry.path();

        if file_type.is_dir() {
            directory.subdirs.push(dir.join_lexical(path));
        } else if file_type.is_symlink() && path.is_dir() {
            log::debug!("not following symlinked directory: {}", path.display());
        } else if keep_file(&path) {
            directory.files.push(dir.join_lexical(path));
        }
    }

    directory.sort();
    Ok(directory)
}
