use thiserror::Error;

#[derive(Error, Debug)]
pub enum LottoError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("API request failed: {0}")]
    ApiCall(String),

    #[error("Unexpected API response: {0}")]
    ApiParse(String),

    #[error("No result found for draw code: {0}")]
    ResultNotFound(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error(transparent)]
    Common(#[from] kerala_lotto_common::Error),

    #[error("Prompt error: {0}")]
    CliExecution(String),
}

pub type Result<T> = std::result::Result<T, LottoError>;
