//! Pre tool use hook handler.

use super::{GateDecision, HookHandler};
use crate::{Error, Result};
use tracing::debug;

/// Handles `PreToolUse` hook events.
///
/// Gates markdown writes to documentation locations. The target path is read
/// from `tool_input.file_path` in the hook input document; all other fields
/// are ignored.
pub struct PreToolUseHandler;

impl PreToolUseHandler {
    /// Creates a new handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Extracts the target file path from the hook input document.
    fn file_path(input: &str) -> Result<String> {
        let document: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| Error::InvalidInput(format!("hook input is not valid JSON: {e}")))?;

        document
            .get("tool_input")
            .and_then(|tool_input| tool_input.get("file_path"))
            .and_then(serde_json::Value::as_str)
            .map(ToString::to_string)
            .ok_or_else(|| {
                Error::InvalidInput("hook input has no tool_input.file_path string".to_string())
            })
    }
}

impl Default for PreToolUseHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl HookHandler for PreToolUseHandler {
    fn event_type(&self) -> &'static str {
        "PreToolUse"
    }

    fn handle(&self, input: &str) -> Result<GateDecision> {
        let path = Self::file_path(input)?;
        let decision = GateDecision::for_path(&path);
        debug!(path = %path, ?decision, "gate verdict");
        Ok(decision)
    }
}
