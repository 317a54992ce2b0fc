pub mod client;

use async_trait::async_trait;

use crate::domain::{Card, RecorderError};

pub use client::TrelloClient;

/// The board operations the recorder needs. The production implementation
/// talks to the Trello REST API; tests substitute an in-memory board.
#[async_trait]
pub trait BoardApi: Send + Sync {
    async fn cards_with_actions(&self, board_id: &str) -> Result<Vec<Card>, RecorderError>;

    async fn list_name(&self, list_id: &str) -> Result<String, RecorderError>;

    async fn post_comment(&self, card_id: &str, text: &str) -> Result<(), RecorderError>;

    async fn delete_comment(&self, comment_id: &str) -> Result<(), RecorderError>;
}
