//! Error types.

/// Why a pattern and flag set could not be turned into a matcher.
///
/// The `Display` output is the diagnostic shown to the user; for
/// [`CompileError::Syntax`] it is the engine's message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// The regex engine rejected the pattern.
    #[error("{0}")]
    Syntax(String),

    /// The flag string contains an unknown or repeated flag.
    #[error("invalid flags '{flags}': {reason}")]
    InvalidFlags {
        /// The flag string as supplied.
        flags: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl CompileError {
    /// The diagnostic to surface inline next to the pattern.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<regex::Error> for CompileError {
    fn from(err: regex::Error) -> Self {
        CompileError::Syntax(err.to_string())
    }
}
