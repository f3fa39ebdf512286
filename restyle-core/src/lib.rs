pub mod completion;
pub mod prompt;
pub mod settings;
pub mod store;
pub mod style;

// Public library API - the presentation layer should only need these.
pub use completion::provider::{ChunkStream, CompletionProvider, ConversionRequest};
pub use settings::{Settings, SettingsManager};
pub use store::{StoreError, StyleStore};
pub use style::error::StyleError;
pub use style::model::{Example, Style, StyleCollection};
