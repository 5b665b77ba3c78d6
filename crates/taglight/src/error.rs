use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced while configuring or running the annotator.
pub enum AnnotateError {
    #[error("regex compile error for pattern '{pattern}': {message}")]
    /// One of the fixed marker patterns failed to compile.
    ///
    /// The patterns are constants, so this indicates a broken build rather than bad input.
    PatternCompile {
        /// The regex pattern string.
        pattern: &'static str,
        /// The compiler error message.
        message: String,
    },

    #[error("invalid color '{0}': expected #RGB, #RRGGBB or #RRGGBBAA")]
    /// A hex color string could not be parsed.
    InvalidColor(String),
}
