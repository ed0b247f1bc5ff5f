use std::io;

use http::status::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ZonalError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("File System error: {0}")]
    Io(String),
    #[error("Navigation error: {0}")]
    Navigation(String),
    #[error("Malformed edit payload: {0}")]
    Payload(String),
    #[error("(De)Serialization error: {0}")]
    Serialization(String),
    #[error("Layout storage error: {0}")]
    Storage(String),
    #[error("Window '{0}' cannot hold child elements")]
    WindowChildren(String),
}

impl ZonalError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ZonalError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ZonalError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ZonalError::Navigation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ZonalError::Payload(_) => StatusCode::BAD_REQUEST,
            ZonalError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ZonalError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ZonalError::WindowChildren(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<toml::de::Error> for ZonalError {
    fn from(src: toml::de::Error) -> ZonalError {
        ZonalError::Config(format!("Toml deserialization error: {src}"))
    }
}

impl From<toml::ser::Error> for ZonalError {
    fn from(src: toml::ser::Error) -> ZonalError {
        ZonalError::Config(format!("Toml serialization error: {src}"))
    }
}

impl From<JsonError> for ZonalError {
    fn from(src: JsonError) -> ZonalError {
        ZonalError::Serialization(format!("JSON (de)serialization error: {src}"))
    }
}

impl From<io::Error> for ZonalError {
    fn from(x: io::Error) -> Self {
        ZonalError::Io(format!("IOError: {}", x.kind()))
    }
}
