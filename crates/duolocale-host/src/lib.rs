#![doc = include_str!("../README.md")]

mod file_store;
mod system;

pub use file_store::{FileStore, FileStoreError};
pub use system::SystemLanguage;
