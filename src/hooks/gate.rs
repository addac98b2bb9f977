//! Documentation write gate.
//!
//! Pure path-classification logic, separated from stdin parsing and exit-code
//! plumbing so it can be tested as a plain function.

/// Extension the gate constrains. Writes to any other file type pass through.
pub const DOC_EXTENSION: &str = ".md";

/// Substrings marking documentation locations where markdown writes are
/// permitted: the docs tree, top-level project-instruction files, the
/// changelog, skill definitions, and the rules/agents/memory directories.
pub const ALLOWED_PATH_MARKERS: &[&str] = &[
    "/docs/", "CLAUDE", "README", "CHANGELOG", "SKILL", "rules/", "agents/", "memory/",
];

/// Verdict of the documentation write gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// A markdown write into a permitted location.
    Allow,
    /// A markdown write outside every permitted location.
    Deny,
    /// Not a markdown write; the gate does not constrain it.
    NotApplicable,
}

impl GateDecision {
    /// Classifies a file path.
    ///
    /// Directory separators are normalized to `/` before matching, so
    /// Windows-style paths are judged by the same rules.
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        let normalized = path.replace('\\', "/");

        if !normalized.ends_with(DOC_EXTENSION) {
            return Self::NotApplicable;
        }

        if ALLOWED_PATH_MARKERS
            .iter()
            .any(|marker| normalized.contains(marker))
        {
            return Self::Allow;
        }

        Self::Deny
    }

    /// Whether the host should let the write proceed.
    #[must_use]
    pub const fn permits(self) -> bool {
        matches!(self, Self::Allow | Self::NotApplicable)
    }
}
