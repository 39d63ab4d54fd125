use median::TrackerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Median tracking failed: {0}")]
    Tracker(#[from] TrackerError),
    #[error("Malformed input: {0}")]
    Parse(String),
    #[error("Unable to read the input `{0}`")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] envy::Error),
    #[error("Unknown log level `{0}`")]
    LogLevel(String),
}
