use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeckoError>;

#[derive(Debug, Error)]
pub enum GeckoError {
    #[error("reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("invalid pool payload: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("unexpected pool payload: `{0}` is not an object")]
    UnexpectedShape(&'static str),
}
