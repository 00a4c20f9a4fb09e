// Public modules
pub mod cleanup;
pub mod config;
pub mod error;
pub mod git;
pub mod info;
pub mod paths;
pub mod scaffold;
pub mod tools;

// Re-export common types for convenience
pub use config::{ProjectConfig, ProjectLayout};
pub use error::{Error, ErrorCode, Result};
