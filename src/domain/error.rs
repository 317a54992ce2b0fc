#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    #[error("stage not found: {0}")]
    StageNotFound(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected API response: {0}")]
    Api(String),

    #[error("stage file error: {0}")]
    StageFile(#[from] serde_yaml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),
}
