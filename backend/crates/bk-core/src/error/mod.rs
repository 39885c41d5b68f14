use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid font family: {value} {location}")]
    InvalidFontFamily {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid color target: {value} {location}")]
    InvalidColorTarget {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
