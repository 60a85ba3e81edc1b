use crate::Error;
use actix_web::{http::StatusCode, web::Json, HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

pub type RestResult<T, E = RestApiError> = std::result::Result<Json<T>, E>;

#[derive(Debug)]
pub struct RestApiError {
    pub code: RestApiErrorCode,
    pub message: String,
}

impl RestApiError {
    pub fn new(code: RestApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(
            RestApiErrorCode::NotFound,
            "Entity with requested ID doesn't exist.",
        )
    }

    pub fn database() -> Self {
        Self::new(
            RestApiErrorCode::Database,
            "Database query failed. Contact the Merkato team to resolve.",
        )
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(RestApiErrorCode::InvalidInput, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(
            RestApiErrorCode::Unauthorized,
            "Admin credentials are missing or invalid.",
        )
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(RestApiErrorCode::Conflict, message)
    }
}

#[derive(Debug)]
pub enum RestApiErrorCode {
    NotFound,
    Database,
    InvalidInput,
    Unauthorized,
    Conflict,
}

impl fmt::Display for RestApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl fmt::Display for RestApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestApiErrorCode::NotFound => write!(f, "not_found"),
            RestApiErrorCode::Database => write!(f, "database"),
            RestApiErrorCode::InvalidInput => write!(f, "invalid_input"),
            RestApiErrorCode::Unauthorized => write!(f, "unauthorized"),
            RestApiErrorCode::Conflict => write!(f, "conflict"),
        }
    }
}

impl RestApiErrorCode {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Conflict => StatusCode::CONFLICT,
        }
    }
}

impl ResponseError for RestApiError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "code": self.code.to_string(),
            "message": self.message,
        });
        HttpResponse::build(self.status_code())
            .content_type("application/json")
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }
}

impl From<Error> for RestApiError {
    fn from(error: Error) -> Self {
        match error {
            Error::InvalidInput(message) => RestApiError::invalid_input(message),
            Error::InvalidPoint(message) => RestApiError::invalid_input(message),
            Error::MalformedGeometry(message) => RestApiError::invalid_input(message),
            Error::HttpConflict(message) => RestApiError::conflict(message),
            Error::HttpUnauthorized(_) => RestApiError::unauthorized(),
            Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows) => RestApiError::not_found(),
            _ => RestApiError::database(),
        }
    }
}
