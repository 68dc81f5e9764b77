/// Compile a literal pattern once and hand out a `&'static Regex`.
///
/// Used for the fixed patterns the pipeline itself relies on (template
/// placeholders); user patterns always go through `engine::compile`.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}
