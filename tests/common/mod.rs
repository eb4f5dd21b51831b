//! Common utils for integration tests
//!
//! Every test copies its fixture directory into a fresh scratch directory
//! under `target/test_out`, so fixtures are never modified.

use copy_dir::copy_dir;
use murmur3::murmur3_32;
use refpath::{error::RefpathError, *};
use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

pub struct ItEnv {
    config: Config,
    tree_config: TreeConfig,
    test_description: String,
    test_dir: PathBuf,
}

impl ItEnv {
    pub fn new(test_name: &str, fixture_dir_name: &str) -> Self {
        let test_description = format!("{test_name} ({fixture_dir_name})");
        let test_name = format!(
            "test-{}",
            murmur3_32(&mut Cursor::new(test_description.as_bytes()), 0).unwrap()
        );
        // create test directory
        let root_path = Path::new("target/test_out");
        if !root_path.exists() {
            std::fs::create_dir_all(root_path).unwrap();
        }
        let path = root_path.join(test_name);
        if path.exists() {
            std::fs::remove_dir_all(&path).unwrap();
        }

        // copy fixture directory to test directory
        let fixture = Path::new("tests/fixtures").join(fixture_dir_name);
        copy_dir(&fixture, &path).unwrap();

        let mut config = Config::default();
        config.verbosity = Verbosity::Quiet;
        config.root = path.clone();

        let mut tree_config = TreeConfig::default();
        tree_config.verbosity = Verbosity::Quiet;
        tree_config.root = path.clone();
        tree_config.output = path.join("file_structure.txt");

        Self {
            test_description,
            test_dir: path,
            config,
            tree_config,
        }
    }

    #[inline]
    pub fn execute<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        f(self)
    }

    #[inline]
    pub fn cfg(&mut self) -> &mut Config {
        &mut self.config
    }

    #[inline]
    pub fn tree_cfg(&mut self) -> &mut TreeConfig {
        &mut self.tree_config
    }

    #[inline]
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.test_dir.join(file_name)
    }

    #[inline]
    pub fn run(&self) -> Result<Summary, RefpathError> {
        refpath(self.config.clone())
    }

    #[inline]
    pub fn run_tree(&self) -> Result<(), RefpathError> {
        tree(self.tree_config.clone())
    }

    #[inline]
    pub fn set_file(&self, file_name: &str, contents: &[u8]) {
        let path = self.test_dir.join(file_name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
    }

    #[inline]
    pub fn read_file(&self, file_name: &str) -> String {
        std::fs::read_to_string(self.test_dir.join(file_name)).unwrap()
    }

    pub fn assert_file_eq(&self, file_name: &str, expected_file_name: &str) {
        let expected_path = self.test_dir.join(expected_file_name);
        assert!(
            expected_path.exists(),
            "expected file `{}` does not exist in test `{}` ({})",
            expected_file_name,
            self.test_description,
            self.test_dir.display()
        );
        let actual_path = self.test_dir.join(file_name);
        assert!(
            actual_path.exists(),
            "output file `{}` does not exist in test `{}` ({})",
            file_name,
            self.test_description,
            self.test_dir.display()
        );
        let actual = std::fs::read(actual_path).unwrap();
        let expected = std::fs::read(expected_path).unwrap();
        assert_eq!(
            String::from_utf8_lossy(&actual),
            String::from_utf8_lossy(&expected),
            "file comparison failed for `{}` in test `{}` ({})",
            file_name,
            self.test_description,
            self.test_dir.display()
        );
    }

    #[inline]
    pub fn assert_path_exists(&self, path_name: &str, exists: bool) {
        assert_eq!(
            exists,
            self.test_dir.join(path_name).exists(),
            "file existence test failed in test `{}` ({})",
            self.test_description,
            self.test_dir.display()
        );
    }
}

/// Define a test that runs on a copy of a fixture directory.
///
/// The fixture is `tests/fixtures/<test name with __ as />`, unless given explicitly.
macro_rules! testit {
    ($test_name:ident, $fnonce:expr) => {
        #[test]
        #[allow(non_snake_case)]
        fn $test_name() {
            let name = stringify!($test_name);
            let mut env = ItEnv::new(name, &name.replace("__", "/"));
            env.execute($fnonce);
        }
    };
    ($test_name:ident, $fixture:literal, $fnonce:expr) => {
        #[test]
        #[allow(non_snake_case)]
        fn $test_name() {
            let mut env = ItEnv::new(stringify!($test_name), $fixture);
            env.execute($fnonce);
        }
    };
}

pub(crate) use testit;
