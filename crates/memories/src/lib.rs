mod client;
mod error;
mod types;

pub use client::{MemoriesClient, MemoriesClientBuilder};
pub use error::Error;
pub use types::*;

pub const DEFAULT_API_BASE: &str = "https://api.memories.ai";
pub const DEFAULT_UNIQUE_ID: &str = "sign-language-api";
