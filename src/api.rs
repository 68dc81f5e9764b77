use crate::engine::{self, EvalMetrics, MatchSequence, PatternSpec};
use crate::error::CompileError;
use crate::flags::Flags;
use std::time::{Duration, Instant};

/// Result from [`evaluate`] and [`evaluate_str`].
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// The evaluated pattern and flags.
    pub spec: PatternSpec,
    /// The subject text.
    pub text: String,
    /// Matches in scan order. Empty when `error` is set.
    pub matches: MatchSequence,
    /// Why the pattern could not be compiled, if it could not.
    pub error: Option<CompileError>,
    /// Total elapsed time spent compiling + enumerating.
    pub elapsed: Duration,
}

/// Result from [`evaluate_verbose`].
#[derive(Debug, Clone)]
pub struct EvaluationVerbose {
    pub spec: PatternSpec,
    pub text: String,
    pub matches: MatchSequence,
    pub error: Option<CompileError>,
    /// Rendered template output over all matches.
    pub output: String,
    pub metrics: EvalMetrics,
}

/// Compile `spec` and enumerate its matches over `text`.
///
/// # Example
/// ```
/// use regplay::{Flags, PatternSpec, evaluate};
///
/// let out = evaluate(&PatternSpec::new(r"\d+", Flags::GLOBAL), "a1 b22");
/// let found: Vec<&str> = out.matches.iter().map(|m| m.text.as_str()).collect();
/// assert_eq!(found, ["1", "22"]);
/// ```
pub fn evaluate(spec: &PatternSpec, text: &str) -> Evaluation {
    let started = Instant::now();
    let (matches, error) = match engine::compile(spec) {
        Ok(Some(matcher)) => (engine::enumerate(&matcher, text), None),
        Ok(None) => (MatchSequence::new(), None),
        Err(err) => (MatchSequence::new(), Some(err)),
    };

    Evaluation { spec: spec.clone(), text: text.to_string(), matches, error, elapsed: started.elapsed() }
}

/// Like [`evaluate`], taking the flags as a string such as `"gi"`.
///
/// A malformed flag string is reported through `error`, like a bad pattern.
pub fn evaluate_str(pattern: &str, flags: &str, text: &str) -> Evaluation {
    match PatternSpec::parse(pattern, flags) {
        Ok(spec) => evaluate(&spec, text),
        Err(err) => Evaluation {
            spec: PatternSpec::new(pattern, Flags::empty()),
            text: text.to_string(),
            matches: MatchSequence::new(),
            error: Some(err),
            elapsed: Duration::ZERO,
        },
    }
}

/// Evaluate and render `template`, collecting per-stage timings.
///
/// The default [`evaluate`] path does not measure the individual stages.
pub fn evaluate_verbose(spec: &PatternSpec, text: &str, template: &str) -> EvaluationVerbose {
    let started = Instant::now();
    let mut metrics = EvalMetrics::default();

    let compiled = engine::compile(spec);
    metrics.compile = started.elapsed();

    let (matches, error) = match compiled {
        Ok(Some(matcher)) => {
            let scan_started = Instant::now();
            let (matches, stats) = engine::enumerate_with_stats(&matcher, text);
            metrics.enumerate = scan_started.elapsed();
            metrics.scan = stats;
            (matches, None)
        }
        Ok(None) => (MatchSequence::new(), None),
        Err(err) => (MatchSequence::new(), Some(err)),
    };

    let render_started = Instant::now();
    let output = engine::render_all(template, &matches);
    metrics.render = render_started.elapsed();
    metrics.total = started.elapsed();

    EvaluationVerbose { spec: spec.clone(), text: text.to_string(), matches, error, output, metrics }
}
