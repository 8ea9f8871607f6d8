//! Error types for scribe.

use thiserror::Error;

/// Main error type for scribe operations.
#[derive(Error, Debug)]
pub enum ScribeError {
    // Configuration errors
    #[error("missing required configuration: {}", .0.join(", "))]
    MissingConfig(Vec<&'static str>),

    #[error("invalid ticket pattern: {0}")]
    InvalidTicketPattern(#[source] regex::Error),

    #[error("invalid api url: {0}")]
    InvalidApiUrl(#[from] url::ParseError),

    // Forge errors
    #[error("Forge operation failed: {0}")]
    ForgeError(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    #[error("Regular expression error: {0}")]
    RegexError(#[from] regex::Error),

    // Pipeline errors
    #[error("{0}")]
    PullRequestNumber(#[from] std::num::ParseIntError),

    #[error("pipeline task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ScribeError>,
    },

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using ScribeError
pub type Result<T> = std::result::Result<T, ScribeError>;

impl ScribeError {
    /// Create a forge error with context
    pub fn forge(msg: impl Into<String>) -> Self {
        Self::ForgeError(msg.into())
    }

    /// Prefix this error with a short description of the failed step.
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error came from resolving configuration, in which case
    /// usage help should be shown.
    pub fn is_config(&self) -> bool {
        match self {
            Self::MissingConfig(_)
            | Self::InvalidTicketPattern(_)
            | Self::InvalidApiUrl(_) => true,
            Self::Context { source, .. } => source.is_config(),
            _ => false,
        }
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for ScribeError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. }
                if source.message.contains("rate limit") =>
            {
                Self::RateLimitExceeded
            }
            _ => Self::ForgeError(format!("GitHub API error: {}", err)),
        }
    }
}
