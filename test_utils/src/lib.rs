pub mod constants;

use boarding_sequencer::generate_boarding_sequence_from_csv;
use constants::{
    COMMENT_PREFIX, EXPECTED_FAILURE_PREFIX, EXPECTED_PREFIX, FIXTURE_FILE_EXTENSION,
    TEST_FILES_DIRECTORY,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a fixture manifest, dropping the `EXPECTED:`, `EXPECTED_FAILURE:` and
/// `COMMENT:` annotation lines so that only CSV remains.
pub fn load_manifest_fixture(file_path: &Path) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read test file");

    raw_text
        .lines()
        .filter(|line| !is_annotation(line))
        .collect::<Vec<&str>>()
        .join("\n")
}

// Helper function to get the expected booking order from the fixture
pub fn get_expected_booking_order(file_path: &Path) -> Vec<String> {
    annotation_values(file_path, EXPECTED_PREFIX)
}

// Helper function to check if the fixture has an EXPECTED_FAILURE line
pub fn get_expected_failure(file_path: &Path) -> Option<String> {
    annotation_values(file_path, EXPECTED_FAILURE_PREFIX)
        .into_iter()
        .next()
}

/// All CSV fixtures under `tests/test_files`, sorted by name.
pub fn list_fixture_files() -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(&*TEST_FILES_DIRECTORY)
        .expect("Failed to read test files directory")
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext == FIXTURE_FILE_EXTENSION)
        })
        .collect();

    files.sort();
    files
}

/// Sequences a fixture and asserts it against its annotations.
pub fn run_test_for_file(file_path: &Path) {
    let manifest = load_manifest_fixture(file_path);
    let result = generate_boarding_sequence_from_csv(&manifest);

    eprintln!("Testing file: {}", file_path.display());

    if let Some(expected_failure_message) = get_expected_failure(file_path) {
        match result {
            Ok(sequence) => panic!(
                "{} - Expected failure '{}', but got sequence {:?}",
                file_path.display(),
                expected_failure_message,
                sequence.booking_ids()
            ),
            Err(err) => assert_eq!(
                err.to_string(),
                expected_failure_message,
                "{} - Failure reason mismatch",
                file_path.display()
            ),
        }

        return;
    }

    let sequence = result.unwrap_or_else(|err| {
        panic!("{} - Unexpected failure: {}", file_path.display(), err)
    });

    assert_eq!(
        sequence.booking_ids(),
        get_expected_booking_order(file_path),
        "{} - Boarding order mismatch",
        file_path.display()
    );
}

/// Builds a manifest of `booking_count` bookings with distinct seats, cycling
/// through the standard layout and spilling into rows beyond it.
pub fn generate_manifest(booking_count: usize) -> String {
    const COLUMNS: [char; 4] = ['A', 'B', 'C', 'D'];

    let mut manifest = String::from("Booking_ID,Seats\n");

    for index in 0..booking_count {
        let row = index / COLUMNS.len() + 1;
        let column = COLUMNS[index % COLUMNS.len()];

        // Alternate row-first and column-first tokens
        if index % 2 == 0 {
            manifest.push_str(&format!("BK{:05},{}{}\n", index, row, column));
        } else {
            manifest.push_str(&format!("BK{:05},{}{}\n", index, column, row));
        }
    }

    manifest
}

fn is_annotation(line: &str) -> bool {
    let line = line.trim_start();

    line.starts_with(EXPECTED_PREFIX)
        || line.starts_with(EXPECTED_FAILURE_PREFIX)
        || line.starts_with(COMMENT_PREFIX)
}

fn annotation_values(file_path: &Path, prefix: &str) -> Vec<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            line.strip_prefix(prefix)
                .map(|value| value.trim().to_string())
        })
        .collect()
}
