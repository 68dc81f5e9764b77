//! Session state.
//!
//! A [`Session`] is the current match sequence plus the active-match pointer.
//! Every transition consumes the previous value and returns the next one, so a
//! stale recompute can never be half-applied.
//!
//! Pointer rules:
//!
//! - empty sequence: pointer is `None`
//! - re-evaluation: pointer reset to 0 when it was `None` or out of range,
//!   kept otherwise
//! - `next`/`previous`: wrap around; no-op on an empty sequence
//! - `select(i)`: applied only when `i` is in range

use crate::engine::{self, MatchRecord, MatchSequence, PatternSpec};
use crate::error::CompileError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    matches: MatchSequence,
    active: Option<usize>,
    error: Option<CompileError>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompile `spec`, re-enumerate `text`, and carry the pointer over.
    ///
    /// A compile error leaves an empty sequence and records the error.
    pub fn reevaluate(self, spec: &PatternSpec, text: &str) -> Self {
        let (matches, error) = match engine::compile(spec) {
            Ok(Some(matcher)) => (engine::enumerate(&matcher, text), None),
            Ok(None) => (MatchSequence::new(), None),
            Err(err) => (MatchSequence::new(), Some(err)),
        };
        let mut next = self.with_matches(matches);
        next.error = error;
        next
    }

    /// Replace the sequence, applying the pointer rules.
    pub fn with_matches(self, matches: MatchSequence) -> Self {
        let active = match self.active {
            _ if matches.is_empty() => None,
            Some(idx) if idx < matches.len() => Some(idx),
            _ => Some(0),
        };
        Self { matches, active, error: None }
    }

    pub fn next(self) -> Self {
        if self.matches.is_empty() {
            return self;
        }
        let len = self.matches.len();
        let active = match self.active {
            Some(idx) if idx + 1 < len => idx + 1,
            _ => 0,
        };
        Self { active: Some(active), ..self }
    }

    pub fn previous(self) -> Self {
        if self.matches.is_empty() {
            return self;
        }
        let len = self.matches.len();
        let active = match self.active {
            Some(idx) if idx > 0 => idx - 1,
            _ => len - 1,
        };
        Self { active: Some(active), ..self }
    }

    pub fn select(self, index: usize) -> Self {
        if index >= self.matches.len() {
            return self;
        }
        Self { active: Some(index), ..self }
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_match(&self) -> Option<&MatchRecord> {
        self.active.and_then(|idx| self.matches.get(idx))
    }

    /// Compile error from the last re-evaluation, if any.
    pub fn error(&self) -> Option<&CompileError> {
        self.error.as_ref()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
