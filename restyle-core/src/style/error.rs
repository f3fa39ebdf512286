use thiserror::Error;

/// Failures from style operations, validation, and prompt compilation.
///
/// The validation variants (`NameRequired`, `NameExists`,
/// `ExampleFieldsRequired`) are expected user-input outcomes and carry the
/// message shown next to the triggering control. `EmptyExampleField` is a
/// data-integrity violation: the compiler was handed an example the caller
/// claimed was valid. `NotFound` and `ExampleIndexOutOfRange` indicate a bug
/// in the caller and should be propagated, not swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("a style name is required")]
    NameRequired,

    #[error("a style named \"{0}\" already exists")]
    NameExists(String),

    #[error("both the input and output example texts are required")]
    ExampleFieldsRequired,

    #[error("example index {index} is out of range for style \"{style}\" ({len} examples)")]
    ExampleIndexOutOfRange {
        style: String,
        index: usize,
        len: usize,
    },

    #[error("example {index} of style \"{style}\" has an empty input or output")]
    EmptyExampleField { style: String, index: usize },

    #[error("no style named \"{0}\" exists")]
    NotFound(String),
}
