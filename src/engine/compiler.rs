//! Matcher compilation.
//!
//! Turns a [`PatternSpec`] into something the enumerator can drive. The
//! enumerator never talks to `regex` directly: it only sees the [`Engine`]
//! trait, which is the narrow seam between "find the next occurrence at or
//! after this offset" and the scan loop built on top of it.
//!
//! ## Flag mapping
//!
//! ```text
//! i  -> RegexBuilder::case_insensitive
//! m  -> RegexBuilder::multi_line
//! s  -> RegexBuilder::dot_matches_new_line
//! u  -> Unicode mode (always on for &str haystacks)
//! g  -> enumeration mode, read by the enumerator
//! y  -> Engine::exec_at only accepts matches starting at the cursor
//! ```

use super::model::{NamedGroups, RawMatch};
use crate::error::CompileError;
use crate::flags::Flags;
use regex::{Regex, RegexBuilder};

/// Immutable pattern + flag pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PatternSpec {
    pub pattern: String,
    pub flags: Flags,
}

impl PatternSpec {
    pub fn new(pattern: impl Into<String>, flags: Flags) -> Self {
        Self { pattern: pattern.into(), flags }
    }

    /// Build a spec from a flag string such as `"gi"`.
    pub fn parse(pattern: impl Into<String>, flags: &str) -> Result<Self, CompileError> {
        Ok(Self { pattern: pattern.into(), flags: Flags::parse(flags)? })
    }
}

/// A compiled matcher as seen by the enumerator.
///
/// Implementations must be stateless between calls: the scan cursor belongs
/// to the caller.
pub trait Engine {
    /// Flags the matcher was compiled with.
    fn flags(&self) -> Flags;

    /// Find the leftmost match starting at or after byte offset `cursor`.
    ///
    /// `cursor` is always `<= text.len()` and on a char boundary.
    fn exec_at(&self, text: &str, cursor: usize) -> Option<RawMatch>;
}

/// [`Engine`] backed by the `regex` crate.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    spec: PatternSpec,
    regex: Regex,
    has_named_groups: bool,
}

impl RegexMatcher {
    /// Compile `spec` unconditionally, including an empty pattern (which
    /// matches the empty string everywhere).
    pub fn new(spec: &PatternSpec) -> Result<Self, CompileError> {
        let flags = spec.flags;
        let regex = RegexBuilder::new(&spec.pattern)
            .case_insensitive(flags.contains(Flags::IGNORE_CASE))
            .multi_line(flags.contains(Flags::MULTILINE))
            .dot_matches_new_line(flags.contains(Flags::DOT_ALL))
            .unicode(true)
            .build()?;
        let has_named_groups = regex.capture_names().any(|name| name.is_some());

        Ok(Self { spec: spec.clone(), regex, has_named_groups })
    }

    pub fn spec(&self) -> &PatternSpec {
        &self.spec
    }

    /// Number of positional groups, including group 0.
    pub fn group_count(&self) -> usize {
        self.regex.captures_len()
    }

    /// Names of the named groups, in definition order.
    pub fn group_names(&self) -> Vec<&str> {
        self.regex.capture_names().flatten().collect()
    }
}

impl Engine for RegexMatcher {
    fn flags(&self) -> Flags {
        self.spec.flags
    }

    fn exec_at(&self, text: &str, cursor: usize) -> Option<RawMatch> {
        let caps = self.regex.captures_at(text, cursor)?;
        let whole = caps.get(0)?;
        if self.spec.flags.contains(Flags::STICKY) && whole.start() != cursor {
            return None;
        }

        let captures = caps.iter().map(|group| group.map(|m| m.as_str().to_string())).collect();
        let groups = self.has_named_groups.then(|| {
            self.regex
                .capture_names()
                .enumerate()
                .filter_map(|(idx, name)| {
                    name.map(|name| (name.to_string(), caps.get(idx).map(|m| m.as_str().to_string())))
                })
                .collect::<NamedGroups>()
        });

        Some(RawMatch { text: whole.as_str().to_string(), start: whole.start(), captures, groups })
    }
}

/// Compile a pattern for one evaluation cycle.
///
/// - empty pattern: `Ok(None)`; nothing to match and nothing to report
/// - rejected pattern: `Err(CompileError::Syntax)` with the engine message
pub fn compile(spec: &PatternSpec) -> Result<Option<RegexMatcher>, CompileError> {
    if spec.pattern.is_empty() {
        log::trace!("compile: empty pattern, no matcher");
        return Ok(None);
    }

    match RegexMatcher::new(spec) {
        Ok(matcher) => {
            log::debug!(
                "compile: /{}/{} ok ({} groups, named: {:?})",
                spec.pattern,
                spec.flags,
                matcher.group_count(),
                matcher.group_names()
            );
            Ok(Some(matcher))
        }
        Err(err) => {
            log::debug!("compile: /{}/{} rejected", spec.pattern, spec.flags);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(pattern: &str, flags: &str) -> PatternSpec {
        PatternSpec::parse(pattern, flags).unwrap()
    }

    #[test]
    fn empty_pattern_is_not_an_error() {
        let compiled = compile(&spec("", "g")).unwrap();
        assert!(compiled.is_none());
    }

    #[test]
    fn invalid_pattern_reports_engine_message() {
        let Err(CompileError::Syntax(message)) = compile(&spec("(", "g")) else {
            panic!("expected syntax error");
        };
        let expected = Regex::new("(").unwrap_err().to_string();
        assert_eq!(message, expected);
    }

    #[test]
    fn flags_change_matching() {
        let text = "Alpha\nbeta";

        let plain = compile(&spec("alpha", "")).unwrap().unwrap();
        assert!(plain.exec_at(text, 0).is_none());
        let folded = compile(&spec("alpha", "i")).unwrap().unwrap();
        assert_eq!(folded.exec_at(text, 0).unwrap().text, "Alpha");

        let single_line = compile(&spec("^beta", "")).unwrap().unwrap();
        assert!(single_line.exec_at(text, 0).is_none());
        let multi_line = compile(&spec("^beta", "m")).unwrap().unwrap();
        assert_eq!(multi_line.exec_at(text, 0).unwrap().start, 6);

        let dot = compile(&spec("a.b", "")).unwrap().unwrap();
        assert!(dot.exec_at(text, 0).is_none());
        let dot_all = compile(&spec("a.b", "s")).unwrap().unwrap();
        assert_eq!(dot_all.exec_at(text, 0).unwrap().text, "a\nb");
    }

    #[test]
    fn sticky_only_accepts_matches_at_cursor() {
        let sticky = compile(&spec("b", "y")).unwrap().unwrap();
        assert!(sticky.exec_at("ab", 0).is_none());
        assert_eq!(sticky.exec_at("ab", 1).unwrap().start, 1);
    }

    #[test]
    fn exec_at_reports_positional_and_named_groups() {
        let matcher = compile(&spec(r"(?<key>\w+)=(\d+)?", "")).unwrap().unwrap();
        assert_eq!(matcher.group_count(), 3);
        assert_eq!(matcher.group_names(), vec!["key"]);

        let raw = matcher.exec_at("  name=", 0).unwrap();
        assert_eq!(raw.start, 2);
        assert_eq!(raw.text, "name=");
        assert_eq!(raw.captures, vec![Some("name=".to_string()), Some("name".to_string()), None]);
        let groups = raw.groups.unwrap();
        assert_eq!(groups.get("key"), Some(&Some("name".to_string())));
    }

    #[test]
    fn groups_absent_without_named_captures() {
        let matcher = compile(&spec(r"(\d)", "")).unwrap().unwrap();
        let raw = matcher.exec_at("a1", 0).unwrap();
        assert!(raw.groups.is_none());
    }
}
