use serde::Serialize;

use crate::models::request::DavMethod;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid propfind parameters: {0}")]
    InvalidParams(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("{0} not implemented")]
    NotImplemented(DavMethod),

    #[error("invalid item: {0}")]
    InvalidItem(String),

    #[error("unrecognized asset name: {0}")]
    NameParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    General(String),
}

impl AppError {
    /// HTTP status the dispatching layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidParams(_) => 400,
            Self::NotFound(_) => 404,
            Self::NotImplemented(_) => 501,
            Self::Io(err) if err.kind() == std::io::ErrorKind::NotFound => 404,
            _ => 500,
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
