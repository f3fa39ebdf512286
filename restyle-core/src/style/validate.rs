//! Shared validation predicates used at operation boundaries.
//!
//! These report expected user-input problems as `Err` values carrying the
//! user-facing message; they never panic. The presentation layer renders the
//! message inline next to the triggering control and aborts the operation
//! with no state mutated.

use crate::style::error::StyleError;
use crate::style::model::StyleCollection;

/// A style name must be non-empty and unique (case-sensitive, exact match)
/// across the collection. Checked before both create and rename.
pub fn validate_style_name(name: &str, existing: &StyleCollection) -> Result<(), StyleError> {
    if name.is_empty() {
        return Err(StyleError::NameRequired);
    }
    if existing.names().any(|existing_name| existing_name == name) {
        return Err(StyleError::NameExists(name.to_string()));
    }
    Ok(())
}

/// An example must have both fields filled in before it is appended.
pub fn validate_example(input: &str, output: &str) -> Result<(), StyleError> {
    if input.is_empty() || output.is_empty() {
        return Err(StyleError::ExampleFieldsRequired);
    }
    Ok(())
}
