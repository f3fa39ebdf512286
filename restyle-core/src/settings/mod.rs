pub mod config;
pub mod manager;


pub use config::{CompletionConfig, Settings, StoreConfig};
pub use manager::SettingsManager;
