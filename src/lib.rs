//! Regular-expression playground engine.
//!
//! The crate implements the match-evaluation pipeline behind an interactive
//! regex playground:
//!
//! ```text
//! pattern + flags ── compile ── enumerate ── MatchSequence ── render_all ── output
//!                                                 │
//!                                              Session (active match, navigation)
//! ```
//!
//! Start with [`Playground`] for the stateful, front-end-facing view, or with
//! [`evaluate`] for a one-shot evaluation.
//!
//! # Example
//! ```
//! use regplay::Playground;
//!
//! let mut pg = Playground::new();
//! pg.set_text("DevUtils helps");
//! pg.set_pattern(r"([A-Z])\w+");
//! assert_eq!(pg.output(), "DevUtils\n");
//! assert_eq!(pg.match_count_label(), "1 match");
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod flags;
mod playground;
mod session;

pub use api::{Evaluation, EvaluationVerbose, evaluate, evaluate_str, evaluate_verbose};
pub use engine::{
    Engine, EvalMetrics, MatchRecord, MatchSequence, NamedGroups, PatternSpec, RawMatch, RegexMatcher, ScanStats,
    apply_template, compile, enumerate, enumerate_with_stats, normalize, normalize_template, render, render_all,
};
pub use error::CompileError;
pub use flags::{FLAG_ORDER, FlagInfo, Flags};
pub use playground::{
    DEFAULT_FLAGS, DEFAULT_TEMPLATE, Playground, SAMPLE, SampleData, Segment, filter_matches, highlight_segments,
    items_label, match_label, match_span_label,
};
pub use session::Session;
