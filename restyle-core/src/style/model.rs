use serde::{Deserialize, Serialize};

/// A single demonstration pair: text as written, and the same text rendered
/// in the target style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub input: String,
    pub output: String,
}

impl Example {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// An example is valid when both fields are non-empty. Invalid examples
    /// exist transiently (a half-filled form) and may linger in storage;
    /// display and conversion call sites filter on this before use.
    pub fn is_valid(&self) -> bool {
        !self.input.is_empty() && !self.output.is_empty()
    }
}

/// A named conversion target. The name doubles as the unique identifier
/// (case-sensitive, exact match) and as content rendered verbatim into the
/// generated prompt. Examples keep insertion order; ordering carries no
/// semantic weight for the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub name: String,
    pub examples: Vec<Example>,
}

impl Style {
    pub fn valid_examples(&self) -> impl Iterator<Item = &Example> {
        self.examples.iter().filter(|example| example.is_valid())
    }

    /// Copy of this style with invalid examples dropped. Call sites that
    /// want prompt compilation to succeed despite stale blank entries in
    /// storage compile this instead of the raw style.
    pub fn filtered(&self) -> Style {
        Style {
            name: self.name.clone(),
            examples: self.valid_examples().cloned().collect(),
        }
    }
}

/// Ordered sequence of styles; insertion order is display order. Name
/// uniqueness is an invariant enforced by validation at every insert/rename
/// boundary, never by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StyleCollection {
    styles: Vec<Style>,
}

impl StyleCollection {
    pub fn new() -> Self {
        Self { styles: Vec::new() }
    }

    pub fn from_styles(styles: Vec<Style>) -> Self {
        Self { styles }
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    pub fn into_styles(self) -> Vec<Style> {
        self.styles
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.iter().map(|style| style.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl From<Vec<Style>> for StyleCollection {
    fn from(styles: Vec<Style>) -> Self {
        Self::from_styles(styles)
    }
}

impl<'a> IntoIterator for &'a StyleCollection {
    type Item = &'a Style;
    type IntoIter = std::slice::Iter<'a, Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.styles.iter()
    }
}
