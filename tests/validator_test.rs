//! Validation tests against structurally sound documents

mod common;

use common::write_pdf;
use pdf_triage::prelude::*;
use tempfile::NamedTempFile;

#[test]
fn test_one_page_pdf_is_valid() {
    let temp_file = NamedTempFile::new().unwrap();
    write_pdf(temp_file.path(), 1);

    match validate_pdf(temp_file.path()) {
        Validity::Valid { page_count } => assert_eq!(page_count, 1),
        other => panic!("expected valid, got {:?}", other),
    }
}

#[test]
fn test_zero_page_pdf_is_invalid() {
    let temp_file = NamedTempFile::new().unwrap();
    write_pdf(temp_file.path(), 0);

    assert_eq!(
        validate_pdf(temp_file.path()),
        Validity::Invalid(InvalidReason::NoPages)
    );
}

#[test]
fn test_validation_is_read_only() {
    let temp_file = NamedTempFile::new().unwrap();
    write_pdf(temp_file.path(), 2);

    let before = std::fs::read(temp_file.path()).unwrap();
    let _ = validate_pdf(temp_file.path());
    let after = std::fs::read(temp_file.path()).unwrap();
    assert_eq!(before, after);
}
