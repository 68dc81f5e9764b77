//! Match-evaluation engine.
//!
//! Everything that turns a pattern, flags and a subject into matches and
//! formatted output lives under `src/engine/`. The public functions in
//! `api.rs` and the `Playground` façade are thin orchestration over these
//! parts.
//!
//! ## How the parts work together
//!
//! ```text
//! PatternSpec ── compile ───────────── (compiler.rs)
//!                  │  empty pattern  -> Ok(None)
//!                  │  bad pattern    -> Err(CompileError)
//!                  v
//!            RegexMatcher: Engine
//!                  │
//! text ─────── enumerate ──────────── (enumerate.rs)
//!                  │  exec_at(cursor) until no match,
//!                  │  +1 char after every empty match
//!                  v
//!            RawMatch ── normalize ── (model.rs)
//!                  v
//!            MatchSequence
//!                  │
//! template ──── render_all ────────── (template.rs)
//!                  v
//!               String
//! ```
//!
//! ## Responsibilities by module
//!
//! - `compiler.rs`: `PatternSpec`, the `Engine` seam, and the `regex`-backed
//!   `RegexMatcher`.
//! - `enumerate.rs`: the scan loop and its termination guarantee.
//! - `model.rs`: `RawMatch` → `MatchRecord`.
//! - `template.rs`: escape normalization and the placeholder passes.
//! - `metrics.rs`: optional timing for one evaluation cycle.
//!
//! ## Debugging
//!
//! The engine logs through the `log` facade: compile outcomes at `debug`,
//! per-pass counts at `trace`. The `regplay` binary wires this to stderr with
//! `-v`.

#[path = "engine/compiler.rs"]
mod compiler;
#[path = "engine/enumerate.rs"]
mod enumerate;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/model.rs"]
mod model;
#[path = "engine/template.rs"]
mod template;

pub use compiler::{Engine, PatternSpec, RegexMatcher, compile};
pub use enumerate::{ScanStats, enumerate, enumerate_with_stats};
pub use metrics::EvalMetrics;
pub use model::{MatchRecord, MatchSequence, NamedGroups, RawMatch, normalize};
pub use template::{apply_template, normalize_template, render, render_all};
