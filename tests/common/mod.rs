#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use card_recorder::domain::{ActionData, Card, ListRef, RawAction, RecorderError};
use card_recorder::trello::BoardApi;

pub fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

pub fn list(id: &str, name: &str) -> ListRef {
    ListRef {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn create_action(id: &str, date: DateTime<Utc>) -> RawAction {
    RawAction {
        id: id.to_string(),
        kind: "createCard".to_string(),
        date,
        data: ActionData::default(),
    }
}

pub fn move_action(id: &str, date: DateTime<Utc>, before: ListRef, after: ListRef) -> RawAction {
    RawAction {
        id: id.to_string(),
        kind: "updateCard".to_string(),
        date,
        data: ActionData {
            text: None,
            list_before: Some(before),
            list_after: Some(after),
        },
    }
}

pub fn comment_action(id: &str, date: DateTime<Utc>, text: &str) -> RawAction {
    RawAction {
        id: id.to_string(),
        kind: "commentCard".to_string(),
        date,
        data: ActionData {
            text: Some(text.to_string()),
            list_before: None,
            list_after: None,
        },
    }
}

pub fn card(id: &str, name: &str, id_list: &str, actions: Vec<RawAction>) -> Card {
    Card {
        id: id.to_string(),
        name: name.to_string(),
        id_list: id_list.to_string(),
        actions,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardOp {
    Post { card_id: String, text: String },
    Delete { comment_id: String },
}

/// In-memory board standing in for the Trello API. Records every mutation
/// in order so tests can assert delete-before-publish sequencing.
pub struct MockBoard {
    pub cards: Vec<Card>,
    pub list_names: HashMap<String, String>,
    pub ops: Mutex<Vec<BoardOp>>,
}

impl MockBoard {
    pub fn new(cards: Vec<Card>, list_names: &[(&str, &str)]) -> Self {
        Self {
            cards,
            list_names: list_names
                .iter()
                .map(|(id, name)| (id.to_string(), name.to_string()))
                .collect(),
            ops: Mutex::new(Vec::new()),
        }
    }

    pub fn posted(&self) -> Vec<(String, String)> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op {
                BoardOp::Post { card_id, text } => Some((card_id.clone(), text.clone())),
                BoardOp::Delete { .. } => None,
            })
            .collect()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op {
                BoardOp::Delete { comment_id } => Some(comment_id.clone()),
                BoardOp::Post { .. } => None,
            })
            .collect()
    }

    pub fn op_log(&self) -> Vec<BoardOp> {
        self.ops.lock().unwrap().clone()
    }
}

#[async_trait]
impl BoardApi for &MockBoard {
    async fn cards_with_actions(&self, _board_id: &str) -> Result<Vec<Card>, RecorderError> {
        Ok(self.cards.clone())
    }

    async fn list_name(&self, list_id: &str) -> Result<String, RecorderError> {
        self.list_names
            .get(list_id)
            .cloned()
            .ok_or_else(|| RecorderError::Api(format!("list {} response missing name", list_id)))
    }

    async fn post_comment(&self, card_id: &str, text: &str) -> Result<(), RecorderError> {
        self.ops.lock().unwrap().push(BoardOp::Post {
            card_id: card_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<(), RecorderError> {
        self.ops.lock().unwrap().push(BoardOp::Delete {
            comment_id: comment_id.to_string(),
        });
        Ok(())
    }
}
