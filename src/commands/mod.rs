//! CLI command implementations.
//!
//! Each submodule implements a specific CLI command against the instinct
//! store. Commands are single-pass: load the store, compute, optionally save,
//! return. No state is carried between invocations beyond the persisted file.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `status` | List instincts sorted by confidence (default command) |
//! | `export` | Snapshot the store to a file |
//! | `import` | Merge records from a file, discounting their confidence |
//! | `evolve` | Report high-confidence clusters ready for skill promotion |
//! | `hook` | Claude Code hook handlers |

mod evolve;
mod hook;
mod io;
mod status;

pub use evolve::{Cluster, EVOLUTION_THRESHOLD, MIN_CLUSTER_SIZE, clusters, cmd_evolve};
pub use hook::{HookEvent, cmd_hook};
pub use io::{cmd_export, cmd_import, discounted_confidence};
pub use status::{cmd_status, status_lines};

/// Truncates a string to at most `max` characters.
///
/// Character-based, not byte-based, so multi-byte text never splits mid
/// code point.
pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
