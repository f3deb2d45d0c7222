pub mod config;

mod token;
pub use token::{FileTokenStore, MemoryTokenStore, StorageError, TokenStore};

pub use config::ClientConfig;
