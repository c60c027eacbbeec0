//! Parsing options and configuration.

/// Options for converting Markdown documents.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Which HTML tags emphasis fragments map to
    pub emphasis: EmphasisStyle,

    /// Whether to append a space after each inline image
    pub image_trailing_space: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable strict mode (fail on unbalanced inline delimiters).
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Enable lenient mode (tolerate unbalanced inline delimiters).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set the emphasis tag style.
    pub fn with_emphasis(mut self, style: EmphasisStyle) -> Self {
        self.emphasis = style;
        self
    }

    /// Enable or disable the synthesized space after inline images.
    pub fn with_image_trailing_space(mut self, enabled: bool) -> Self {
        self.image_trailing_space = enabled;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Lenient,
            emphasis: EmphasisStyle::Semantic,
            image_trailing_space: false,
        }
    }
}

/// Error handling mode during inline tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Tolerate unbalanced delimiter runs, splitting what balances
    #[default]
    Lenient,
    /// Fail on unbalanced inline delimiters
    Strict,
}

/// Which HTML tags bold and italic fragments map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmphasisStyle {
    /// `strong` and `em`
    #[default]
    Semantic,
    /// `b` and `i`
    Presentational,
}
