use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Action failed: {0}")]
    ActionFailed(String),

    #[error("Unsupported action: {0}")]
    UnsupportedAction(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Notification dispatcher is closed")]
    DispatcherClosed,

    #[error("Internal error: {0}")]
    Internal(String),
}
