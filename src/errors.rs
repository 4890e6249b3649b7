use crate::dashboard::ApplyRangeError;
use axum::http::StatusCode;
use chrono::NaiveDate;
use thiserror::Error;

/// Failure to bring one data source into memory.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Error fetching {resource}: {message}")]
    FetchFailure { resource: String, message: String },
    #[error("Error parsing {resource}: {message}")]
    ParseFailure { resource: String, message: String },
}

impl LoadError {
    pub fn fetch(resource: &str, err: impl std::fmt::Display) -> Self {
        Self::FetchFailure {
            resource: resource.to_string(),
            message: err.to_string(),
        }
    }

    pub fn parse(resource: &str, err: impl std::fmt::Display) -> Self {
        Self::ParseFailure {
            resource: resource.to_string(),
            message: err.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("Start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("No data available for {start} to {end}")]
    NoDataInRange { start: NaiveDate, end: NaiveDate },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("row {0} not found")]
    RowNotFound(u64),
    #[error("column '{0}' is not editable")]
    UnknownColumn(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn unavailable(err: &LoadError) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: err.to_string(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<RangeError> for AppError {
    fn from(err: RangeError) -> Self {
        let status = match err {
            RangeError::InvalidRange { .. } => StatusCode::BAD_REQUEST,
            RangeError::NoDataInRange { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<ApplyRangeError> for AppError {
    fn from(err: ApplyRangeError) -> Self {
        match err {
            ApplyRangeError::Source(err) => Self::unavailable(&err),
            ApplyRangeError::Range(err) => err.into(),
        }
    }
}

impl From<GridError> for AppError {
    fn from(err: GridError) -> Self {
        let status = match err {
            GridError::RowNotFound(_) => StatusCode::NOT_FOUND,
            GridError::UnknownColumn(_) => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
