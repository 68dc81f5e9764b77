//! Match enumeration.
//!
//! Drives an [`Engine`] over a subject and collects every match in scan order.
//!
//! ```text
//! non-global:  exec_at(0) ─> 0 or 1 record
//!
//! global:      cursor = 0
//!              loop:
//!                exec_at(cursor) ─ none ─> done
//!                    │
//!                    └─ record; cursor = end
//!                       if start == end: cursor = end + one char
//! ```
//!
//! The advance-by-one-char step after an empty match is what keeps patterns
//! such as `a*` or `` (empty) from matching the same position forever. The
//! cursor lives on the stack of a single pass; nothing survives across calls.

use super::compiler::Engine;
use super::model::{MatchSequence, normalize};
use crate::flags::Flags;

/// Counters collected during one pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Calls made to [`Engine::exec_at`].
    pub attempts: usize,
    /// Times the cursor was pushed past a zero-length match.
    pub empty_advances: usize,
}

/// Enumerate the matches of `engine` over `text`.
pub fn enumerate<E: Engine + ?Sized>(engine: &E, text: &str) -> MatchSequence {
    enumerate_with_stats(engine, text).0
}

/// [`enumerate`], also returning scan counters.
pub fn enumerate_with_stats<E: Engine + ?Sized>(engine: &E, text: &str) -> (MatchSequence, ScanStats) {
    let mut stats = ScanStats::default();
    let mut matches = MatchSequence::new();

    if !engine.flags().contains(Flags::GLOBAL) {
        stats.attempts += 1;
        if let Some(raw) = engine.exec_at(text, 0) {
            matches.push(normalize(raw));
        }
        return (matches, stats);
    }

    let mut cursor = 0;
    while cursor <= text.len() {
        stats.attempts += 1;
        let Some(raw) = engine.exec_at(text, cursor) else {
            break;
        };

        let record = normalize(raw);
        if record.start < cursor || record.end > text.len() {
            log::warn!(
                "enumerate: engine returned {}..{} outside {}..{}; stopping",
                record.start,
                record.end,
                cursor,
                text.len()
            );
            break;
        }

        cursor = if record.is_empty() {
            stats.empty_advances += 1;
            next_char_boundary(text, record.end)
        } else {
            record.end
        };
        matches.push(record);
    }

    log::trace!("enumerate: {} matches in {} attempts", matches.len(), stats.attempts);
    (matches, stats)
}

/// Offset one character past `at`, or `at + 1` at the end of `text`.
fn next_char_boundary(text: &str, at: usize) -> usize {
    match text.get(at..).and_then(|rest| rest.chars().next()) {
        Some(ch) => at + ch.len_utf8(),
        None => at + 1,
    }
}
