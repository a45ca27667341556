//! Filename predicate for the match step

/// Check whether a filename contains at least one uppercase letter.
///
/// Pure character scan; non-alphabetic and lowercase characters are
/// ignored. An empty string never matches.
pub fn has_uppercase(name: &str) -> bool {
    name.chars().any(|c| c.is_uppercase())
}
