//! Infrastructure - configuration
//!
//! - `config` - Application configuration (TOML loading, defaults)

pub mod config;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
