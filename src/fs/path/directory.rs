use super::AbsPath;

/// Represents a scanned directory, with the files that passed the filter and subdirectories.
#[derive(Debug, Default)]
pub struct Directory {
    /// files, sorted by name
    pub files: Vec<AbsPath>,
    /// subdirectories, sorted by name
    pub subdirs: Vec<AbsPath>,
}

impl Directory {
    pub fn new() -> Self {
        Self {
            files: vec![],
            subdirs: vec![],
        }
    }

    /// Put entries in name order, since `read_dir` makes no promise about order
    pub fn sort(&mut self) {
        self.files.sort();
        self.subdirs.sort();
    }
}
