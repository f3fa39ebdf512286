//! Pure transformations over styles and collections.
//!
//! Nothing here mutates an argument or touches ambient state: every mutation
//! returns a new value and the caller owns writing the updated collection
//! back through the store. Operations trust that their inputs were already
//! checked by `validate`; keeping validation at the call site keeps these
//! functions trivial to test in isolation.

use crate::style::error::StyleError;
use crate::style::model::{Example, Style, StyleCollection};

/// A new style with the given name and no examples. Callers validate the
/// name first via `validate::validate_style_name`.
pub fn create_style(name: impl Into<String>) -> Style {
    Style {
        name: name.into(),
        examples: Vec::new(),
    }
}

/// The style with one example appended. Field non-emptiness is the caller's
/// job via `validate::validate_example`.
pub fn add_example(style: &Style, input: impl Into<String>, output: impl Into<String>) -> Style {
    let mut examples = style.examples.clone();
    examples.push(Example::new(input, output));
    Style {
        name: style.name.clone(),
        examples,
    }
}

/// The style without the example at the 0-based `index`. An out-of-range
/// index is an error rather than a silent no-op so that a stale index in the
/// caller surfaces instead of masking a bug.
pub fn remove_example(style: &Style, index: usize) -> Result<Style, StyleError> {
    if index >= style.examples.len() {
        return Err(StyleError::ExampleIndexOutOfRange {
            style: style.name.clone(),
            index,
            len: style.examples.len(),
        });
    }

    let mut examples = style.examples.clone();
    examples.remove(index);
    Ok(Style {
        name: style.name.clone(),
        examples,
    })
}

/// The style under a new name, examples untouched. Uniqueness of the new
/// name is the caller's job.
pub fn rename_style(style: &Style, new_name: impl Into<String>) -> Style {
    Style {
        name: new_name.into(),
        examples: style.examples.clone(),
    }
}

/// First style whose name exactly equals `name`.
pub fn resolve_style<'a>(collection: &'a StyleCollection, name: &str) -> Option<&'a Style> {
    collection.styles().iter().find(|style| style.name == name)
}

/// Lookup for call sites where the style is expected to exist; absence
/// indicates the caller broke the collection invariant.
pub fn resolve_style_required<'a>(
    collection: &'a StyleCollection,
    name: &str,
) -> Result<&'a Style, StyleError> {
    resolve_style(collection, name).ok_or_else(|| StyleError::NotFound(name.to_string()))
}

/// The collection with `style` appended at the end of display order.
pub fn insert_style(collection: &StyleCollection, style: Style) -> StyleCollection {
    let mut styles = collection.styles().to_vec();
    styles.push(style);
    StyleCollection::from_styles(styles)
}

/// The collection with the style named `name` swapped for `replacement`,
/// keeping its position. Used after add/remove-example and rename.
pub fn replace_style(
    collection: &StyleCollection,
    name: &str,
    replacement: Style,
) -> Result<StyleCollection, StyleError> {
    let mut styles = collection.styles().to_vec();
    let index = styles
        .iter()
        .position(|style| style.name == name)
        .ok_or_else(|| StyleError::NotFound(name.to_string()))?;
    styles[index] = replacement;
    Ok(StyleCollection::from_styles(styles))
}

/// The collection without the style named `name`.
pub fn delete_style(collection: &StyleCollection, name: &str) -> Result<StyleCollection, StyleError> {
    let mut styles = collection.styles().to_vec();
    let index = styles
        .iter()
        .position(|style| style.name == name)
        .ok_or_else(|| StyleError::NotFound(name.to_string()))?;
    styles.remove(index);
    Ok(StyleCollection::from_styles(styles))
}
