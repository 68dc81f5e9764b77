//! Playground façade.
//!
//! [`Playground`] holds every input a front end edits (pattern, flags,
//! subject text, output template, list filter) together with the current
//! [`Session`]. Changes to pattern, flags or text re-evaluate immediately;
//! template and filter changes only affect the derived views.
//!
//! The derived views are plain data: labels, the filtered match list, and a
//! segmentation of the subject for highlighting. Rendering them (HTML, ANSI,
//! ...) is the front end's job.

use crate::engine::{MatchRecord, PatternSpec, render_all};
use crate::flags::Flags;
use crate::session::Session;
use std::ops::Range;

/// Flags a fresh or cleared playground starts with.
pub const DEFAULT_FLAGS: Flags = Flags::GLOBAL;

/// Template a fresh or cleared playground starts with (escaped form).
pub const DEFAULT_TEMPLATE: &str = "$0\\n";

/// A known-good session used to demo the playground.
#[derive(Debug, Clone, Copy)]
pub struct SampleData {
    pub pattern: &'static str,
    pub flags: Flags,
    pub template: &'static str,
    pub text: &'static str,
}

/// The paragraph breaks in `text` are the two-character sequence `\n`, not
/// newlines, so spans line up with the web playground's sample.
pub const SAMPLE: SampleData = SampleData {
    pattern: r"([A-Z])\w+",
    flags: Flags::GLOBAL,
    template: "$0\\n",
    text: "DevUtils helps you with your tiny daily tasks with just a single click. \
           It works entirely offline and is open source!\\n\\n\
           Work Offline\\n\
           Stop pasting your JSON strings, JWT tokens, or any potentially sensitive data to random websites online.\\n\
           DevUtils.app helps you quickly do your tiny tasks entirely offline! \
           Everything you paste into the app never leaves your machine.",
};

/// A run of subject text, either plain or covered by a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Match { text: &'a str, index: usize, active: bool },
}

#[derive(Debug, Clone)]
pub struct Playground {
    pattern: String,
    flags: Flags,
    text: String,
    template: String,
    filter: String,
    highlight: bool,
    session: Session,
}

impl Default for Playground {
    fn default() -> Self {
        Self::new()
    }
}

impl Playground {
    pub fn new() -> Self {
        Self {
            pattern: String::new(),
            flags: DEFAULT_FLAGS,
            text: String::new(),
            template: DEFAULT_TEMPLATE.to_string(),
            filter: String::new(),
            highlight: true,
            session: Session::new(),
        }
    }

    // --- inputs --------------------------------------------------------------

    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
        self.update();
    }

    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
        self.update();
    }

    pub fn toggle_flag(&mut self, flag: Flags) {
        self.flags = self.flags.toggled(flag);
        self.update();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.update();
    }

    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// Turn match highlighting on or off. Matching itself is unaffected.
    pub fn set_highlight(&mut self, enabled: bool) {
        self.highlight = enabled;
    }

    /// Seed the playground with [`SAMPLE`].
    pub fn load_sample(&mut self) {
        self.pattern = SAMPLE.pattern.to_string();
        self.template = SAMPLE.template.to_string();
        self.text = SAMPLE.text.to_string();
        self.filter.clear();
        self.flags = SAMPLE.flags;
        self.update();
    }

    /// Reset every input to its default.
    pub fn clear(&mut self) {
        self.pattern.clear();
        self.template = DEFAULT_TEMPLATE.to_string();
        self.text.clear();
        self.filter.clear();
        self.flags = DEFAULT_FLAGS;
        self.update();
    }

    // --- navigation ----------------------------------------------------------

    pub fn next(&mut self) {
        self.transition(Session::next);
    }

    pub fn previous(&mut self) {
        self.transition(Session::previous);
    }

    pub fn select(&mut self, index: usize) {
        self.transition(|session| session.select(index));
    }

    fn transition(&mut self, step: impl FnOnce(Session) -> Session) {
        let session = std::mem::take(&mut self.session);
        self.session = step(session);
    }

    fn update(&mut self) {
        let spec = self.spec();
        let session = std::mem::take(&mut self.session);
        self.session = session.reevaluate(&spec, &self.text);
        if let Some(err) = self.session.error() {
            log::debug!("playground: {}", err);
        }
    }

    // --- state ---------------------------------------------------------------

    pub fn spec(&self) -> PatternSpec {
        PatternSpec::new(self.pattern.clone(), self.flags)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn highlight(&self) -> bool {
        self.highlight
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn matches(&self) -> &[MatchRecord] {
        self.session.matches()
    }

    pub fn active(&self) -> Option<usize> {
        self.session.active()
    }

    /// Diagnostic for the current pattern, if it failed to compile.
    pub fn error(&self) -> Option<String> {
        self.session.error().map(|err| err.message())
    }

    // --- derived views -------------------------------------------------------

    /// Template output over every match.
    pub fn output(&self) -> String {
        render_all(&self.template, self.matches())
    }

    pub fn output_meta(&self) -> String {
        items_label(self.matches().len())
    }

    pub fn match_count_label(&self) -> String {
        match self.matches().len() {
            0 => "0 matches".to_string(),
            1 => "1 match".to_string(),
            total => {
                let current = self.active().map_or(1, |idx| idx + 1);
                format!("{current} of {total} matches")
            }
        }
    }

    /// Whether stepping between matches makes sense.
    pub fn can_step(&self) -> bool {
        self.matches().len() > 1
    }

    /// Byte range of the active match, for selecting it in the subject.
    pub fn selected_range(&self) -> Option<Range<usize>> {
        self.session.active_match().map(MatchRecord::range)
    }

    /// Matches passing the list filter, with their index in the full sequence.
    pub fn filtered_matches(&self) -> Vec<(usize, &MatchRecord)> {
        filter_matches(self.matches(), &self.filter)
    }

    pub fn list_meta(&self) -> String {
        items_label(self.filtered_matches().len())
    }

    /// Placeholder shown when the filtered list is empty.
    pub fn empty_list_message(&self) -> Option<&'static str> {
        if !self.filtered_matches().is_empty() {
            None
        } else if self.matches().is_empty() {
            Some("No matches yet.")
        } else {
            Some("No matches found.")
        }
    }

    /// Highlight segmentation of the subject; plain text only while
    /// highlighting is off.
    pub fn highlight_segments(&self) -> Vec<Segment<'_>> {
        if self.highlight {
            highlight_segments(&self.text, self.matches(), self.active())
        } else {
            highlight_segments(&self.text, &[], None)
        }
    }
}

/// `"N item"` / `"N items"`.
pub fn items_label(count: usize) -> String {
    format!("{count} item{}", if count == 1 { "" } else { "s" })
}

/// List label for a match: the quoted text, or `[empty]` for a zero-length match.
pub fn match_label(record: &MatchRecord) -> String {
    if record.text.is_empty() { "[empty]".to_string() } else { format!("\"{}\"", record.text) }
}

/// Span label for a match, `{start, end}`.
pub fn match_span_label(record: &MatchRecord) -> String {
    format!("{{{}, {}}}", record.start, record.end)
}

/// Keep matches whose text, `start,end` span, or any positional group
/// contains `query` (trimmed, case-insensitive).
pub fn filter_matches<'m>(matches: &'m [MatchRecord], query: &str) -> Vec<(usize, &'m MatchRecord)> {
    let query = query.trim().to_lowercase();
    matches
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            if query.is_empty() {
                return true;
            }
            let span = format!("{},{}", record.start, record.end);
            std::iter::once(record.text.as_str())
                .chain(std::iter::once(span.as_str()))
                .chain(record.captures.iter().skip(1).map(|group| group.as_deref().unwrap_or("")))
                .any(|value| value.to_lowercase().contains(&query))
        })
        .collect()
}

/// Split `text` into plain runs and match runs.
///
/// Zero-length matches have nothing to highlight and are skipped.
pub fn highlight_segments<'a>(text: &'a str, matches: &[MatchRecord], active: Option<usize>) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for (index, record) in matches.iter().enumerate() {
        if record.end <= record.start || record.start < last {
            continue;
        }
        let Some(matched) = text.get(record.start..record.end) else {
            continue;
        };
        if let Some(plain) = text.get(last..record.start).filter(|s| !s.is_empty()) {
            segments.push(Segment::Plain(plain));
        }
        segments.push(Segment::Match { text: matched, index, active: active == Some(index) });
        last = record.end;
    }

    if let Some(rest) = text.get(last..).filter(|s| !s.is_empty()) {
        segments.push(Segment::Plain(rest));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playground(pattern: &str, flags: &str, text: &str) -> Playground {
        let mut pg = Playground::new();
        pg.set_flags(Flags::parse(flags).unwrap());
        pg.set_text(text);
        pg.set_pattern(pattern);
        pg
    }

    #[test]
    fn defaults() {
        let pg = Playground::new();
        assert_eq!(pg.flags(), Flags::GLOBAL);
        assert_eq!(pg.template(), "$0\\n");
        assert_eq!(pg.match_count_label(), "0 matches");
        assert_eq!(pg.output(), "");
        assert_eq!(pg.empty_list_message(), Some("No matches yet."));
        assert!(pg.error().is_none());
    }

    #[test]
    fn single_scenario_output() {
        let pg = playground(r"([A-Z])\w+", "g", "DevUtils helps");
        assert_eq!(pg.matches().len(), 1);
        assert_eq!(pg.output(), "DevUtils\n");
        assert_eq!(pg.output_meta(), "1 item");
        assert_eq!(pg.match_count_label(), "1 match");
        assert!(!pg.can_step());
    }

    #[test]
    fn invalid_pattern_empties_everything() {
        let pg = playground("(", "g", "abc");
        assert!(pg.error().is_some());
        assert_eq!(pg.matches().len(), 0);
        assert_eq!(pg.output(), "");
        assert_eq!(pg.match_count_label(), "0 matches");
        assert_eq!(pg.active(), None);
    }

    #[test]
    fn count_label_tracks_active_match() {
        let mut pg = playground(r"\d", "g", "1 2 3");
        assert_eq!(pg.match_count_label(), "1 of 3 matches");
        pg.previous();
        assert_eq!(pg.match_count_label(), "3 of 3 matches");
        assert_eq!(pg.selected_range(), Some(4..5));
        pg.next();
        pg.next();
        assert_eq!(pg.match_count_label(), "2 of 3 matches");
        pg.select(9);
        assert_eq!(pg.active(), Some(1));
        assert!(pg.can_step());
    }

    #[test]
    fn flag_toggle_reevaluates() {
        let mut pg = playground("a", "g", "aAa");
        assert_eq!(pg.matches().len(), 2);
        pg.toggle_flag(Flags::IGNORE_CASE);
        assert_eq!(pg.matches().len(), 3);
        pg.toggle_flag(Flags::GLOBAL);
        assert_eq!(pg.matches().len(), 1);
        assert_eq!(pg.flags().to_string(), "i");
    }

    #[test]
    fn template_changes_do_not_reevaluate() {
        let mut pg = playground(r"(\w)(\w)", "g", "ab cd");
        pg.select(1);
        pg.set_template("$2$1,");
        assert_eq!(pg.output(), "ba,dc,");
        assert_eq!(pg.active(), Some(1));
    }

    #[test]
    fn filter_checks_text_span_and_groups() {
        let mut pg = playground(r"(?<k>\w+)=(\w+)?", "g", "Host=a port= user=B");
        assert_eq!(pg.matches().len(), 3);

        pg.set_filter("  HOST ");
        let hits: Vec<usize> = pg.filtered_matches().iter().map(|(idx, _)| *idx).collect();
        assert_eq!(hits, vec![0]);

        pg.set_filter("7,12");
        let hits: Vec<usize> = pg.filtered_matches().iter().map(|(idx, _)| *idx).collect();
        assert_eq!(hits, vec![1]);

        pg.set_filter("b");
        assert_eq!(pg.list_meta(), "1 item");

        pg.set_filter("zzz");
        assert_eq!(pg.list_meta(), "0 items");
        assert_eq!(pg.empty_list_message(), Some("No matches found."));

        pg.set_filter("");
        assert_eq!(pg.filtered_matches().len(), 3);
        assert_eq!(pg.empty_list_message(), None);
    }

    #[test]
    fn labels_for_list_items() {
        let pg = playground("x*", "g", "ax");
        let labels: Vec<String> = pg.matches().iter().map(match_label).collect();
        assert_eq!(labels, vec!["[empty]", "\"x\"", "[empty]"]);
        assert_eq!(match_span_label(&pg.matches()[1]), "{1, 2}");
    }

    #[test]
    fn highlight_skips_empty_matches() {
        let mut pg = playground("b*", "g", "abba");
        pg.next();
        assert_eq!(
            pg.highlight_segments(),
            vec![
                Segment::Plain("a"),
                Segment::Match { text: "bb", index: 1, active: true },
                Segment::Plain("a"),
            ]
        );
    }

    #[test]
    fn highlight_without_matches_is_plain_text() {
        let pg = playground("z", "g", "abc");
        assert_eq!(pg.highlight_segments(), vec![Segment::Plain("abc")]);
        assert!(playground("z", "g", "").highlight_segments().is_empty());
    }

    #[test]
    fn highlight_off_gives_plain_text() {
        let mut pg = playground("b+", "g", "abba");
        pg.set_highlight(false);
        assert!(!pg.highlight());
        assert_eq!(pg.highlight_segments(), vec![Segment::Plain("abba")]);
        assert_eq!(pg.matches().len(), 1);

        pg.set_highlight(true);
        assert_eq!(pg.highlight_segments().len(), 3);
    }

    #[test]
    fn sample_and_clear() {
        let mut pg = Playground::new();
        pg.set_filter("dev");
        pg.load_sample();
        assert_eq!(pg.filter(), "");
        assert_eq!(pg.pattern(), r"([A-Z])\w+");

        let texts: Vec<&str> = pg.matches().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["DevUtils", "It", "Work", "Offline", "Stop", "JSON", "JWT", "DevUtils", "Everything"]
        );
        assert!(pg.output().starts_with("DevUtils\nIt\nWork\n"));
        assert_eq!(pg.output_meta(), "9 items");

        assert!(pg.text().contains("source!\\n\\nWork"));
        assert!(!pg.text().contains('\n'));
        assert_eq!(match_span_label(&pg.matches()[2]), "{121, 125}");
        assert_eq!(match_span_label(&pg.matches()[4]), "{135, 139}");

        pg.clear();
        assert_eq!(pg.pattern(), "");
        assert_eq!(pg.text(), "");
        assert_eq!(pg.template(), DEFAULT_TEMPLATE);
        assert_eq!(pg.flags(), DEFAULT_FLAGS);
        assert!(pg.matches().is_empty());
    }
}
