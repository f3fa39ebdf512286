//! Mapping between the in-memory model and the store's nested record shape.
//!
//! The store has no native ordered-list type, so order is carried by decimal
//! indices at two levels: styles under `0, 1, 2, …` and, inside each style,
//! examples under string keys `"0", "1", …`. Encoding reassigns both levels
//! fresh from current in-memory order on every save; decoding sorts keys
//! numerically and treats any non-decimal key as a format error.

use std::collections::BTreeMap;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::store::error::StoreError;
use crate::style::model::{Example, Style, StyleCollection};

/// Stored form of one example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleRecord {
    pub input: String,
    pub output: String,
}

/// Stored form of one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRecord {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub examples: ExamplesNode,
}

/// The examples node inside one style. Saved as a positionally-keyed map,
/// but the store collapses contiguous decimal keys to a JSON array at every
/// level on read, so this decodes from either shape; holes in the array form
/// decode as `None` and are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExamplesNode {
    List(Vec<Option<ExampleRecord>>),
    Map(BTreeMap<String, ExampleRecord>),
}

impl Default for ExamplesNode {
    fn default() -> Self {
        Self::Map(BTreeMap::new())
    }
}

/// The whole stored document. Like the example level, the style level
/// decodes from either the array or the map shape; holes decode as `None`
/// and are skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StylesDocument {
    List(Vec<Option<StyleRecord>>),
    Map(BTreeMap<String, StyleRecord>),
}

pub fn encode(collection: &StyleCollection) -> Vec<StyleRecord> {
    collection
        .styles()
        .iter()
        .map(|style| StyleRecord {
            name: style.name.clone(),
            examples: ExamplesNode::Map(
                style
                    .examples
                    .iter()
                    .enumerate()
                    .map(|(index, example)| {
                        (
                            index.to_string(),
                            ExampleRecord {
                                input: example.input.clone(),
                                output: example.output.clone(),
                            },
                        )
                    })
                    .collect(),
            ),
        })
        .collect()
}

pub fn decode(document: StylesDocument) -> Result<StyleCollection, StoreError> {
    let records: Vec<StyleRecord> = match document {
        StylesDocument::List(records) => records.into_iter().flatten().collect(),
        StylesDocument::Map(map) => sort_by_decimal_key(map)?,
    };

    let styles = records
        .into_iter()
        .map(decode_style)
        .collect::<Result<Vec<Style>, StoreError>>()?;

    Ok(StyleCollection::from_styles(styles))
}

fn decode_style(record: StyleRecord) -> Result<Style, StoreError> {
    let records: Vec<ExampleRecord> = match record.examples {
        ExamplesNode::List(records) => records.into_iter().flatten().collect(),
        ExamplesNode::Map(map) => sort_by_decimal_key(map)?,
    };

    let examples = records
        .into_iter()
        .map(|example| Example::new(example.input, example.output))
        .collect();

    Ok(Style {
        name: record.name,
        examples,
    })
}

/// Orders a positionally-keyed map by numeric key value. String keys sort
/// lexically in a `BTreeMap` ("10" before "2"), so iteration order alone is
/// not safe past nine entries.
fn sort_by_decimal_key<T>(map: BTreeMap<String, T>) -> Result<Vec<T>, StoreError> {
    let mut keyed = map
        .into_iter()
        .map(|(key, value)| {
            let index: usize = key.parse().map_err(|_| {
                StoreError::Format(anyhow!("non-positional key {key:?} in stored styles"))
            })?;
            Ok((index, value))
        })
        .collect::<Result<Vec<(usize, T)>, StoreError>>()?;

    keyed.sort_by_key(|(index, _)| *index);
    Ok(keyed.into_iter().map(|(_, value)| value).collect())
}
