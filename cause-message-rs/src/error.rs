// cause-message-rs/src/error.rs
// Reasons a build completion message could not be produced.

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, CauseMessageError>;

/// Top-level error type for this crate.
///
/// None of these are fatal: the public message APIs turn them into `None`
/// and the caller simply sends nothing.
#[derive(Debug, thiserror::Error)]
pub enum CauseMessageError {
    #[error("gerrit trigger integration is disabled")]
    IntegrationDisabled,

    #[error("no failure cause display data for build {build_id}")]
    MissingDisplayData { build_id: String },

    #[error("no failure cause found in display data")]
    NoCauseFound,

    #[error("invalid display data: {0}")]
    InvalidDisplayData(#[from] serde_json::Error),

    #[error("invalid configuration value: {0}")]
    InvalidConfig(String),
}

impl CauseMessageError {
    /// Whether this is one of the "nothing to report" outcomes rather than
    /// bad input.
    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            Self::IntegrationDisabled | Self::MissingDisplayData { .. } | Self::NoCauseFound
        )
    }
}
