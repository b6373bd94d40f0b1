use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{}", transport_message(.status, .message))]
    Transport {
        status: Option<u16>,
        message: String,
    },
    #[error("response parse error: {0}")]
    ResponseParse(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl AppError {
    pub fn is_retrieval_failure(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::ResponseParse(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::ResponseParse(err.to_string());
        }

        Self::Transport {
            status: err.status().map(|status| status.as_u16()),
            message: err.to_string(),
        }
    }
}

fn transport_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(status) => format!("transport error: HTTP {status}: {message}"),
        None => format!("transport error: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_transport_error_with_status() {
        let err = AppError::Transport {
            status: Some(500),
            message: "internal".to_string(),
        };
        assert_eq!(err.to_string(), "transport error: HTTP 500: internal");
        assert_eq!(err.status(), Some(500));
        assert!(err.is_retrieval_failure());
    }

    #[test]
    fn config_errors_are_not_retrieval_failures() {
        let err = AppError::Config("bad".to_string());
        assert!(!err.is_retrieval_failure());
        assert_eq!(err.status(), None);
    }
}
