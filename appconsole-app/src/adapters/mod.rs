//! Storage adapters for front-ends without a platform store.

mod json_file_store;

pub use json_file_store::{JsonFileStore, STORE_FILE};
