use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Item name must not be empty")]
    EmptyName,

    #[error("Priority is not a number: {0:?}")]
    UnparsablePriority(String),

    #[error("Priority {priority} outside {min}..={max}")]
    PriorityOutOfRange { priority: i64, min: i64, max: i64 },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SortError>;
