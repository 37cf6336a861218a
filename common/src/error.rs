use thiserror::Error;

pub type Result<T> = std::result::Result<T, PagerError>;

#[derive(Debug, Error)]
pub enum PagerError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    #[error("search failed: {0}")]
    Search(String),

    #[error("missing filename (\"peruse --help\" for help)")]
    NoInput,
}

impl PagerError {
    /// Errors caused by what the user typed rather than by the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(self, PagerError::Pattern { .. })
    }
}
