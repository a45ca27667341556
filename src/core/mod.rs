//! Per-file validation and naming checks

pub mod naming;
pub mod validator;

pub use naming::has_uppercase;
pub use validator::{validate_pdf, InvalidReason, Validity};
