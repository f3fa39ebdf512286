pub mod error;
pub mod model;
pub mod ops;
pub mod validate;


pub use error::StyleError;
pub use model::{Example, Style, StyleCollection};
