use crate::domain::RecorderError;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_token: String,
    pub api_url: String,
    pub board_id: Option<String>,
    pub stages_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self, RecorderError> {
        Ok(Self {
            api_key: std::env::var("TRELLO_API_KEY")
                .map_err(|_| RecorderError::Config("TRELLO_API_KEY is not set".into()))?,
            api_token: std::env::var("TRELLO_API_TOKEN")
                .map_err(|_| RecorderError::Config("TRELLO_API_TOKEN is not set".into()))?,
            api_url: std::env::var("TRELLO_API_URL")
                .unwrap_or_else(|_| "https://api.trello.com".into()),
            board_id: std::env::var("TRELLO_BOARD_ID").ok(),
            stages_file: std::env::var("STAGES_FILE").unwrap_or_else(|_| "data/stages.yaml".into()),
        })
    }
}
