//! [`TestParent`] fixture for scaffold test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary parent directory for scaffolded projects, with helper
/// methods for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use scaffold_test_utils::TestParent;
///
/// let parent = TestParent::new();
/// // ... scaffold into parent.root() ...
/// parent.assert_file_exists("demo/.claude/CLAUDE.md");
/// ```
pub struct TestParent {
    temp_dir: TempDir,
}

impl Default for TestParent {
    fn default() -> Self {
        Self::new()
    }
}

impl TestParent {
    /// Create an empty temporary parent directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the parent directory path.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of a project that would be scaffolded under this parent.
    pub fn project(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Pre-create a project directory, for exercising the
    /// target-already-exists failure path.
    pub fn occupy(&self, name: &str) {
        fs::create_dir_all(self.project(name))
            .expect("TestParent::occupy: failed to create directory");
    }

    /// Assert that `path` (relative to the parent root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the parent root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }

    /// List the entry names directly under the parent root, sorted.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root())
            .expect("TestParent::entries: failed to read dir")
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}
