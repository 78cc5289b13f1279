use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}
