use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A board card together with its action log, as delivered by the Trello API.
/// Actions arrive newest-first; the board is the system of record and every
/// card is reconstructed fresh from this payload on each run.
#[derive(Debug, Clone, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(rename = "idList")]
    pub id_list: String,
    #[serde(default)]
    pub actions: Vec<RawAction>,
}

/// An action exactly as the API serializes it, before classification.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub data: ActionData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionData {
    pub text: Option<String>,
    #[serde(rename = "listBefore")]
    pub list_before: Option<ListRef>,
    #[serde(rename = "listAfter")]
    pub list_after: Option<ListRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListRef {
    pub id: String,
    pub name: String,
}

/// A card changed lists: the stage it left and the stage it entered.
#[derive(Debug, Clone)]
pub struct MoveAction {
    pub date: DateTime<Utc>,
    pub list_before: ListRef,
    pub list_after: ListRef,
}

#[derive(Debug, Clone)]
pub struct CommentAction {
    pub id: String,
    pub date: DateTime<Utc>,
    pub text: String,
}

/// Closed set of action variants the recorder cares about. Raw actions with
/// unknown type tags, and `updateCard` actions that carry no source-list
/// reference (title edits, archivals, ...), are discarded during conversion
/// rather than duck-typed on field presence.
#[derive(Debug, Clone)]
pub enum Action {
    Creation(DateTime<Utc>),
    ListMove(MoveAction),
    Comment(CommentAction),
}

impl Action {
    pub fn from_raw(raw: &RawAction) -> Option<Action> {
        match raw.kind.as_str() {
            "createCard" => Some(Action::Creation(raw.date)),
            "updateCard" => match (&raw.data.list_before, &raw.data.list_after) {
                (Some(before), Some(after)) => Some(Action::ListMove(MoveAction {
                    date: raw.date,
                    list_before: before.clone(),
                    list_after: after.clone(),
                })),
                _ => None,
            },
            "commentCard" => raw.data.text.as_ref().map(|text| {
                Action::Comment(CommentAction {
                    id: raw.id.clone(),
                    date: raw.date,
                    text: text.clone(),
                })
            }),
            _ => None,
        }
    }
}

/// Ephemeral status comment: constructed, optionally published, discarded.
#[derive(Debug, Clone)]
pub struct CommentArtifact {
    pub card_id: String,
    pub text: String,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
}
