use async_trait::async_trait;
use serde_json::Value;

use crate::config::Config;
use crate::domain::{Card, RecorderError};
use crate::trello::BoardApi;

/// Thin Trello REST client. Authentication is key+token query parameters on
/// every request.
pub struct TrelloClient {
    http_client: reqwest::Client,
    api_url: String,
    key: String,
    token: String,
}

impl TrelloClient {
    pub fn new(http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            http_client,
            api_url: config.api_url.clone(),
            key: config.api_key.clone(),
            token: config.api_token.clone(),
        }
    }

    fn auth(&self) -> [(&'static str, &str); 2] {
        [("key", self.key.as_str()), ("token", self.token.as_str())]
    }
}

#[async_trait]
impl BoardApi for TrelloClient {
    async fn cards_with_actions(&self, board_id: &str) -> Result<Vec<Card>, RecorderError> {
        let response = self
            .http_client
            .get(format!("{}/1/boards/{}/cards", self.api_url, board_id))
            .query(&[("actions", "createCard,updateCard,commentCard")])
            .query(&self.auth())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RecorderError::Api(format!(
                "card fetch for board {} returned status {}",
                board_id,
                response.status()
            )));
        }

        Ok(response.json::<Vec<Card>>().await?)
    }

    async fn list_name(&self, list_id: &str) -> Result<String, RecorderError> {
        let response = self
            .http_client
            .get(format!("{}/1/lists/{}", self.api_url, list_id))
            .query(&[("fields", "name")])
            .query(&self.auth())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RecorderError::Api(format!(
                "list lookup for {} returned status {}",
                list_id,
                response.status()
            )));
        }

        let body = response.json::<Value>().await?;
        body.get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| RecorderError::Api(format!("list {} response missing name", list_id)))
    }

    async fn post_comment(&self, card_id: &str, text: &str) -> Result<(), RecorderError> {
        let response = self
            .http_client
            .post(format!(
                "{}/1/cards/{}/actions/comments",
                self.api_url, card_id
            ))
            .query(&[("text", text)])
            .query(&self.auth())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RecorderError::Api(format!(
                "comment post to card {} returned status {}",
                card_id,
                response.status()
            )));
        }

        Ok(())
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<(), RecorderError> {
        let response = self
            .http_client
            .delete(format!("{}/1/actions/{}", self.api_url, comment_id))
            .query(&self.auth())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RecorderError::Api(format!(
                "comment delete {} returned status {}",
                comment_id,
                response.status()
            )));
        }

        Ok(())
    }
}
