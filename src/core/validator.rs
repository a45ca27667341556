//! PDF validation logic

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// Why a file failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// The document parsed but contains no pages.
    NoPages,
    /// The file could not be opened or parsed as a PDF.
    Malformed(String),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::NoPages => write!(f, "no pages"),
            InvalidReason::Malformed(msg) => write!(f, "{}", msg),
        }
    }
}

/// Outcome of validating a single file.
///
/// Every failure mode collapses into `Invalid`; validation never returns
/// an error and never panics across this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Valid { page_count: usize },
    Invalid(InvalidReason),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid { .. })
    }
}

/// Validate a PDF file.
///
/// A file is valid when it loads through lopdf and reports at least one
/// page. Unreadable files, parse errors, and parser panics (isolated with
/// `catch_unwind` since lopdf can panic on pathological inputs) all map to
/// `Validity::Invalid`. Read-only; safe to call concurrently on different
/// paths.
pub fn validate_pdf(path: &Path) -> Validity {
    let path_buf = path.to_path_buf();
    let result = panic::catch_unwind(AssertUnwindSafe(|| lopdf::Document::load(&path_buf)));

    match result {
        Ok(Ok(doc)) => {
            let page_count = doc.get_pages().len();
            if page_count == 0 {
                Validity::Invalid(InvalidReason::NoPages)
            } else {
                Validity::Valid { page_count }
            }
        }
        Ok(Err(e)) => Validity::Invalid(InvalidReason::Malformed(e.to_string())),
        Err(_panic) => Validity::Invalid(InvalidReason::Malformed(
            "panic during PDF parsing".to_string(),
        )),
    }
}
