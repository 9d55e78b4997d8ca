#![allow(unused)] // Ignore due to all constants not being utilized across all environemnts

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static FIXTURE_FILE_EXTENSION: &str = "csv";

pub static EXPECTED_PREFIX: &str = "EXPECTED:";

pub static EXPECTED_FAILURE_PREFIX: &str = "EXPECTED_FAILURE:";

pub static COMMENT_PREFIX: &str = "COMMENT:";
