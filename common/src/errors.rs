use thiserror::Error;

/// Reasons the live activity channel can refuse to start an activity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActivityError {
    /// The user disabled live activities for this app
    #[error("live activities are disabled")]
    ActivitiesDisabled,

    /// The channel already shows as many activities as it allows
    #[error("too many live activities (limit is {limit})")]
    TooManyActivities { limit: usize },

    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Errors produced while loading the tracker configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("the delivery script has no steps")]
    EmptyScript,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown delivery status '{0}'")]
pub struct UnknownStatus(pub String);
