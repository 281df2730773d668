#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the chord-chart binary.
#[macro_export]
macro_rules! chord_chart {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("chord-chart"))
    };
}

pub const TWO_ENTITY_CHART: &str = r#"
width = 600
height = 600
name_by_index = ["A", "B"]
matrix = [[0, 5], [3, 0]]

[index_by_name]
A = 0
B = 1

[export]
width = 200
height = 200
"#;

/// Creates a temporary directory with chart files for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn create_chart(&self) -> PathBuf {
        self.create_file("chart.toml", TWO_ENTITY_CHART)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
