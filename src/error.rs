mod error_kind;

pub use self::error_kind::ErrorKind;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::fmt::{Debug, Display};

/// Message returned to the client for all errors that aren't caused by the client.
const UNKNOWN_ERROR_MESSAGE: &str = "Server error while processing the request.";

/// Application specific error type.
#[derive(thiserror::Error, Debug)]
#[error("{root_cause}")]
pub struct Error {
    root_cause: anyhow::Error,
    kind: ErrorKind,
}

impl Error {
    /// Creates a Client error instance with the given root cause.
    pub fn client_with_root_cause(root_cause: anyhow::Error) -> Self {
        Self {
            root_cause,
            kind: ErrorKind::ClientError,
        }
    }

    /// Creates a Client error instance with the given message.
    pub fn client<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self::client_with_root_cause(anyhow::Error::msg(message))
    }

    /// Creates a Not Found error instance with the given message.
    pub fn not_found<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self {
            root_cause: anyhow::Error::msg(message),
            kind: ErrorKind::NotFound,
        }
    }

    /// Returns the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.kind {
            ErrorKind::ClientError => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self.kind {
            ErrorKind::ClientError | ErrorKind::NotFound => self.root_cause.to_string(),
            ErrorKind::Unknown => UNKNOWN_ERROR_MESSAGE.to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        err.downcast::<Error>().unwrap_or_else(|root_cause| Self {
            root_cause,
            kind: ErrorKind::Unknown,
        })
    }
}
