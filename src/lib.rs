//! # Instinct
//!
//! Instinct tracking and documentation write gating for AI coding assistants.
//!
//! Instinct records small behavioral patterns ("instincts") observed across
//! coding sessions, scores them by confidence, and surfaces clusters that are
//! ready to be promoted into reusable skill documents. It also ships a Claude
//! Code `PreToolUse` hook that gates markdown writes to an allow-list of
//! documentation locations.
//!
//! ## Example
//!
//! ```rust,ignore
//! use instinct::config::InstinctConfig;
//! use instinct::store::InstinctStore;
//!
//! let config = InstinctConfig::load_default();
//! let store = InstinctStore::new(config.instincts_path());
//! let records = store.load()?;
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
// multiple_crate_versions is inherently crate-level (detects duplicate transitive dependencies).
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod commands;
pub mod config;
pub mod hooks;
pub mod models;
pub mod store;

// Re-exports for convenience
pub use config::InstinctConfig;
pub use hooks::{GateDecision, HookHandler, PreToolUseHandler};
pub use models::{Instinct, InstinctId};
pub use store::InstinctStore;

/// Error type for instinct operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Malformed hook JSON, missing `tool_input.file_path`, malformed import files |
/// | `OperationFailed` | Filesystem I/O errors, store serialization failures |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - The hook's stdin document is not valid JSON
    /// - `tool_input.file_path` is missing or not a string
    /// - An import file does not contain a JSON array of records
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - The store file cannot be read or written
    /// - Serialization of the store fails
    /// - The configuration file cannot be read or parsed
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for instinct operations.
pub type Result<T> = std::result::Result<T, Error>;
