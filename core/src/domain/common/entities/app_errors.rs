use thiserror::Error;

use crate::domain::common::filter::FilterError;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    InternalServerError,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}

impl From<FilterError> for CoreError {
    fn from(err: FilterError) -> Self {
        CoreError::InvalidFilter(err.to_string())
    }
}
