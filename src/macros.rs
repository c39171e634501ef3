/// Compile a regex once and hand out a `&'static Regex`.
///
/// Patterns are literals, so a failure here is a programming error caught by
/// the first test that touches the call site.
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).expect("static regex must compile"));
        &*RE
    }};
}

/// Log a slot write under the `options` domain.
macro_rules! slot_written {
    ($slot:expr, $customized:expr) => {
        if $customized {
            tracing::debug!(domain = "options", slot = $slot, "slot customized");
        } else {
            tracing::debug!(domain = "options", slot = $slot, "slot reset to built-in");
        }
    };
}
