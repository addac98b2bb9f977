//! Claude Code hooks.
//!
//! Implements handlers for Claude Code hook events.
//!
//! # Hook Protocol
//!
//! `PreToolUse` hooks receive a JSON document on stdin describing the pending
//! tool invocation and signal their verdict through the process exit code:
//!
//! | Exit Code | Meaning |
//! |-----------|---------|
//! | 0 | Allow the tool invocation |
//! | 2 | Block the tool invocation |
//!
//! No stdout response body is required; the host interprets the exit code
//! alone. Input shape for file-writing tools:
//!
//! ```json
//! {
//!   "tool_input": {
//!     "file_path": "/path/to/target.md"
//!   }
//! }
//! ```
//!
//! Malformed input (invalid JSON, missing or non-string `file_path`) is a
//! hard failure rather than a silent allow or deny, so a misconfigured hook
//! surfaces immediately instead of quietly passing writes through.

mod gate;
mod pre_tool_use;

pub use gate::{ALLOWED_PATH_MARKERS, DOC_EXTENSION, GateDecision};
pub use pre_tool_use::PreToolUseHandler;

use crate::Result;

/// Trait for hook handlers.
pub trait HookHandler: Send + Sync {
    /// The hook event type this handler processes.
    fn event_type(&self) -> &'static str;

    /// Handles the hook event, returning the gate verdict.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be interpreted.
    fn handle(&self, input: &str) -> Result<GateDecision>;
}
