//! Hook command handler.
//!
//! Contains the implementation of the `hook` CLI command for Claude Code
//! hook event handling. The hook input document is read from stdin; the
//! verdict is reported through the process exit code (0 allow, 2 deny).

use crate::hooks::{GateDecision, HookHandler, PreToolUseHandler};
use crate::{Error, Result};
use tracing::info;

/// Hook events this binary handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    /// Pre tool use hook (documentation write gate).
    PreToolUse,
}

impl HookEvent {
    /// Kebab-case event name, as used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreToolUse => "pre-tool-use",
        }
    }
}

/// Hook command.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or the input document is
/// malformed.
pub fn cmd_hook(event: HookEvent) -> Result<GateDecision> {
    let input = read_hook_input()?;

    let decision = match event {
        HookEvent::PreToolUse => PreToolUseHandler::new().handle(&input)?,
    };

    info!(hook = event.as_str(), ?decision, "hook handled");
    Ok(decision)
}

/// Reads hook input from stdin as a string.
fn read_hook_input() -> Result<String> {
    use std::io::Read;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| Error::OperationFailed {
            operation: "read_hook_input".to_string(),
            cause: e.to_string(),
        })?;

    if input.trim().is_empty() {
        Ok("{}".to_string())
    } else {
        Ok(input)
    }
}
