use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("image could not be decoded: {0}")]
    ImageDecode(String),
    #[error("missing element #{0}")]
    MissingElement(String),
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("not signed in")]
    Unauthenticated,
    #[error("request failed with status {0}")]
    Http(u16),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Js(String),
}

pub type Result<T, E = StudioError> = std::result::Result<T, E>;
