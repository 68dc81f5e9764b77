//! Output templates.
//!
//! A template is projected once per match. Rendering is a fixed sequence of
//! passes, each over the output of the previous one:
//!
//! ```text
//! (0) escapes     \n \r \t     -> newline, carriage return, tab (once per template)
//! (1) named       $<name>      -> named capture or ""
//! (2) positional  $0 $1 ...    -> positional capture or ""
//! (3) dollar      $$           -> $
//! ```
//!
//! Text inserted by pass 1 or 2 is visible to the later passes, so a capture
//! containing `$1` or `$$` is rewritten again.

use super::model::MatchRecord;
use regex::{Captures, NoExpand};

/// Replace the `\n`, `\r` and `\t` escape sequences in a template source.
pub fn normalize_template(template: &str) -> String {
    template.replace("\\n", "\n").replace("\\r", "\r").replace("\\t", "\t")
}

/// Render one match through `template`.
pub fn render(template: &str, record: &MatchRecord) -> String {
    apply_template(&normalize_template(template), record)
}

/// Render every match in order and concatenate the results.
pub fn render_all(template: &str, matches: &[MatchRecord]) -> String {
    if template.is_empty() || matches.is_empty() {
        return String::new();
    }
    let normalized = normalize_template(template);
    matches.iter().map(|record| apply_template(&normalized, record)).collect()
}

/// Substitution passes over an already-normalized template.
pub fn apply_template(template: &str, record: &MatchRecord) -> String {
    let output = regex!(r"\$<([^>]+)>")
        .replace_all(template, |caps: &Captures| record.named(&caps[1]).unwrap_or_default().to_string());

    let output = regex!(r"\$([0-9]+)").replace_all(&output, |caps: &Captures| {
        caps[1].parse::<usize>().ok().and_then(|idx| record.capture(idx)).unwrap_or_default().to_string()
    });

    regex!(r"\$\$").replace_all(&output, NoExpand("$")).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::model::NamedGroups;

    fn record(text: &str, captures: &[Option<&str>], named: &[(&str, Option<&str>)]) -> MatchRecord {
        let mut all = vec![Some(text.to_string())];
        all.extend(captures.iter().map(|c| c.map(str::to_string)));
        let groups = (!named.is_empty()).then(|| {
            named.iter().map(|(k, v)| (k.to_string(), v.map(str::to_string))).collect::<NamedGroups>()
        });
        MatchRecord { text: text.to_string(), start: 0, end: text.len(), groups, captures: all }
    }

    #[test]
    fn zero_placeholder_is_full_match() {
        let m = record("DevUtils", &[Some("D")], &[]);
        assert_eq!(render("$0", &m), "DevUtils");
        assert_eq!(render("$0\\n", &m), "DevUtils\n");
        assert_eq!(render("[$1]", &m), "[D]");
    }

    #[test]
    fn double_dollar_is_literal_dollar() {
        let m = record("x", &[], &[]);
        assert_eq!(render("$$", &m), "$");
        assert_eq!(render("cost: $$ 5", &m), "cost: $ 5");
    }

    #[test]
    fn positional_pass_runs_before_dollar_pass() {
        // `$5` is consumed as an unset group before `$$` is looked at.
        let m = record("x", &[], &[]);
        assert_eq!(render("cost: $$5", &m), "cost: $");
    }

    #[test]
    fn missing_or_unset_groups_render_empty() {
        let m = record("k=", &[Some("k"), None], &[("key", Some("k")), ("value", None)]);
        assert_eq!(render("$<missing>", &m), "");
        assert_eq!(render("$<value>", &m), "");
        assert_eq!(render("$2|$9|$99999999999999999999999", &m), "||");
        assert_eq!(render("$<key>=$1", &m), "k=k");
    }

    #[test]
    fn named_placeholder_without_named_groups() {
        let m = record("abc", &[], &[]);
        assert_eq!(render("<$<name>>", &m), "<>");
    }

    #[test]
    fn escapes_are_normalized() {
        assert_eq!(normalize_template(r"a\tb\r\nc"), "a\tb\r\nc");
        assert_eq!(normalize_template("plain"), "plain");
    }

    #[test]
    fn inserted_capture_text_is_rescanned() {
        let m = record("a$1", &[Some("$$")], &[("g", Some("$0"))]);
        assert_eq!(render("$1", &m), "$");
        assert_eq!(render("$<g>", &m), "a$1");
    }

    #[test]
    fn render_all_concatenates_in_order() {
        let matches = vec![record("one", &[], &[]), record("two", &[], &[])];
        assert_eq!(render_all("$0\\n", &matches), "one\ntwo\n");
        assert_eq!(render_all("", &matches), "");
        assert_eq!(render_all("$0", &[]), "");
    }
}
