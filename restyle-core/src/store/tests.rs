use std::collections::BTreeMap;

use anyhow::anyhow;
use tempfile::TempDir;

use crate::store::error::StoreError;
use crate::store::file::FileStore;
use crate::store::memory::MemoryStore;
use crate::store::record::{self, ExampleRecord, ExamplesNode, StyleRecord, StylesDocument};
use crate::store::{load_or_empty, StyleStore};
use crate::style::model::{Example, Style, StyleCollection};

fn style(name: &str, examples: usize) -> Style {
    Style {
        name: name.to_string(),
        examples: (0..examples)
            .map(|i| Example::new(format!("in-{i}"), format!("out-{i}")))
            .collect(),
    }
}

#[test]
fn encode_assigns_positional_example_keys() {
    let collection = StyleCollection::from_styles(vec![style("Formal", 2)]);

    let records = record::encode(&collection);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Formal");
    let ExamplesNode::Map(examples) = &records[0].examples else {
        panic!("encode must produce map-form examples");
    };
    assert_eq!(examples.keys().collect::<Vec<_>>(), vec!["0", "1"]);
    assert_eq!(
        examples["1"],
        ExampleRecord {
            input: "in-1".to_string(),
            output: "out-1".to_string(),
        }
    );
}

#[test]
fn round_trip_preserves_names_and_example_order() {
    for (styles, examples) in [(0usize, 0usize), (1, 0), (3, 2), (2, 12)] {
        let collection = StyleCollection::from_styles(
            (0..styles)
                .map(|i| style(&format!("style-{i}"), examples))
                .collect(),
        );

        let document = StylesDocument::List(
            record::encode(&collection).into_iter().map(Some).collect(),
        );

        assert_eq!(record::decode(document).unwrap(), collection);
    }
}

#[test]
fn decode_sorts_example_keys_numerically() {
    // Past nine entries, lexical key order ("10" < "2") diverges from
    // positional order.
    let mut examples = BTreeMap::new();
    for i in 0..12usize {
        examples.insert(
            i.to_string(),
            ExampleRecord {
                input: format!("in-{i}"),
                output: format!("out-{i}"),
            },
        );
    }
    let document = StylesDocument::List(vec![Some(StyleRecord {
        name: "Formal".to_string(),
        examples: ExamplesNode::Map(examples),
    })]);

    let collection = record::decode(document).unwrap();
    let inputs: Vec<&str> = collection.styles()[0]
        .examples
        .iter()
        .map(|example| example.input.as_str())
        .collect();

    assert_eq!(inputs[9..], ["in-9", "in-10", "in-11"]);
}

#[test]
fn decode_accepts_map_shaped_documents() {
    let mut map = BTreeMap::new();
    map.insert("1".to_string(), StyleRecord {
        name: "Second".to_string(),
        examples: ExamplesNode::default(),
    });
    map.insert("0".to_string(), StyleRecord {
        name: "First".to_string(),
        examples: ExamplesNode::default(),
    });

    let collection = record::decode(StylesDocument::Map(map)).unwrap();

    assert_eq!(collection.names().collect::<Vec<_>>(), vec!["First", "Second"]);
}

#[test]
fn decode_skips_holes_in_array_documents() {
    let document = StylesDocument::List(vec![
        Some(StyleRecord {
            name: "First".to_string(),
            examples: ExamplesNode::default(),
        }),
        None,
        Some(StyleRecord {
            name: "Third".to_string(),
            examples: ExamplesNode::default(),
        }),
    ]);

    let collection = record::decode(document).unwrap();

    assert_eq!(collection.names().collect::<Vec<_>>(), vec!["First", "Third"]);
}

#[test]
fn decode_rejects_non_positional_keys() {
    let mut examples = BTreeMap::new();
    examples.insert(
        "first".to_string(),
        ExampleRecord {
            input: "hi".to_string(),
            output: "Greetings.".to_string(),
        },
    );
    let document = StylesDocument::List(vec![Some(StyleRecord {
        name: "Formal".to_string(),
        examples: ExamplesNode::Map(examples),
    })]);

    assert!(matches!(
        record::decode(document),
        Err(StoreError::Format(_))
    ));
}

#[test]
fn decode_accepts_array_collapsed_examples() {
    // The remote store collapses contiguous decimal keys to a JSON array at
    // every level on read, so a saved style's examples come back as a list
    // even though they were written as a positionally-keyed map.
    let json = r#"[{"name":"Formal","examples":[{"input":"hi","output":"Greetings."}]}]"#;

    let document: Option<StylesDocument> = serde_json::from_str(json).unwrap();
    let collection = record::decode(document.unwrap()).unwrap();

    assert_eq!(collection.names().collect::<Vec<_>>(), vec!["Formal"]);
    assert_eq!(
        collection.styles()[0].examples,
        vec![Example::new("hi", "Greetings.")]
    );
}

#[test]
fn decode_accepts_array_form_at_both_levels_with_holes() {
    let json = r#"[
        {"name":"Formal","examples":[null,{"input":"hi","output":"Greetings."}]},
        null,
        {"name":"Pirate","examples":{"0":{"input":"hello","output":"ahoy"}}}
    ]"#;

    let document: StylesDocument = serde_json::from_str(json).unwrap();
    let collection = record::decode(document).unwrap();

    assert_eq!(
        collection.names().collect::<Vec<_>>(),
        vec!["Formal", "Pirate"]
    );
    assert_eq!(
        collection.styles()[0].examples,
        vec![Example::new("hi", "Greetings.")]
    );
    assert_eq!(
        collection.styles()[1].examples,
        vec![Example::new("hello", "ahoy")]
    );
}

#[tokio::test]
async fn file_store_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("styles.json");
    let store = FileStore::new(Some(path)).unwrap();

    let collection = StyleCollection::from_styles(vec![style("Formal", 2), style("Pirate", 0)]);

    store.save_styles(&collection).await.unwrap();
    assert_eq!(store.load_styles().await.unwrap(), collection);
}

#[tokio::test]
async fn file_store_missing_file_loads_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(Some(temp_dir.path().join("absent.json"))).unwrap();

    assert!(store.load_styles().await.unwrap().is_empty());
}

#[tokio::test]
async fn file_store_save_replaces_prior_content() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(Some(temp_dir.path().join("styles.json"))).unwrap();

    let first = StyleCollection::from_styles(vec![style("A", 3), style("B", 1)]);
    store.save_styles(&first).await.unwrap();

    let second = StyleCollection::from_styles(vec![style("C", 1)]);
    store.save_styles(&second).await.unwrap();

    // No orphaned positional keys from the first save survive.
    assert_eq!(store.load_styles().await.unwrap(), second);
}

struct UnreachableStore;

#[async_trait::async_trait]
impl StyleStore for UnreachableStore {
    fn name(&self) -> &'static str {
        "unreachable"
    }

    async fn load_styles(&self) -> Result<StyleCollection, StoreError> {
        Err(StoreError::Transport(anyhow!("connection refused")))
    }

    async fn save_styles(&self, _styles: &StyleCollection) -> Result<(), StoreError> {
        Err(StoreError::Transport(anyhow!("connection refused")))
    }
}

#[tokio::test]
async fn load_failure_degrades_to_empty_collection() {
    let collection = load_or_empty(&UnreachableStore).await;

    assert!(collection.is_empty());
}

#[tokio::test]
async fn failed_save_leaves_stored_collection_untouched() {
    let original = StyleCollection::from_styles(vec![style("Formal", 1)]);
    let store = MemoryStore::with_styles(&original);

    store.fail_next_save();
    let updated = StyleCollection::from_styles(vec![style("Formal", 1), style("Pirate", 0)]);
    assert!(store.save_styles(&updated).await.is_err());

    // The operation failed; durable state still holds the prior collection
    // and the next save goes through.
    assert_eq!(store.stored(), original);
    store.save_styles(&updated).await.unwrap();
    assert_eq!(store.stored(), updated);
}
