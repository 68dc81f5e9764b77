//! Match model.
//!
//! Engines report what they found as a [`RawMatch`]; the enumerator turns
//! every raw match into a [`MatchRecord`] via [`normalize`] before anything
//! else looks at it. Records are immutable once produced.
//!
//! ## Invariants
//!
//! - `end == start + text.len()`, so a zero-length match has `start == end`.
//! - `captures[0]` is always the full match text.
//! - `groups` is `None` iff the pattern defines no named groups. A named group
//!   that did not participate maps to `None`.

use std::collections::BTreeMap;
use std::ops::Range;

/// Named-group values keyed by group name.
pub type NamedGroups = BTreeMap<String, Option<String>>;

/// One occurrence exactly as an engine reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    /// Matched text.
    pub text: String,
    /// Byte offset of the match in the subject.
    pub start: usize,
    /// Positional groups, index 0 included. May be empty if the engine only
    /// reports the full match.
    pub captures: Vec<Option<String>>,
    /// Named groups, when the pattern has any.
    pub groups: Option<NamedGroups>,
}

/// A normalized match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// The full matched substring.
    pub text: String,
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Named captures, present only if the pattern defines named groups.
    pub groups: Option<NamedGroups>,
    /// Positional captures; index 0 is the full match.
    pub captures: Vec<Option<String>>,
}

/// Ordered matches from one enumeration pass (ascending `start`).
pub type MatchSequence = Vec<MatchRecord>;

impl MatchRecord {
    /// True for a zero-length match.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Positional capture `index`, if it exists and participated.
    pub fn capture(&self, index: usize) -> Option<&str> {
        self.captures.get(index).and_then(|c| c.as_deref())
    }

    /// Named capture `name`, if the group exists and participated.
    pub fn named(&self, name: &str) -> Option<&str> {
        self.groups.as_ref().and_then(|groups| groups.get(name)).and_then(|c| c.as_deref())
    }
}

/// Turn a raw engine match into a [`MatchRecord`].
///
/// Total over structurally valid input; the span is derived from the matched
/// text rather than trusted from the engine.
pub fn normalize(raw: RawMatch) -> MatchRecord {
    let RawMatch { text, start, mut captures, groups } = raw;
    let end = start + text.len();

    if captures.is_empty() {
        captures.push(Some(text.clone()));
    } else {
        captures[0] = Some(text.clone());
    }

    MatchRecord { text, start, end, groups, captures }
}
