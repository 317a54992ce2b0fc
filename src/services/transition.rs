use chrono::{DateTime, Utc};

use crate::domain::MoveAction;

/// Whether a card just completed a stage or is still sitting in one.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The card left a list within the last calendar day. The stage to
    /// report is the list it left, and the accounting window closes at the
    /// move's timestamp.
    JustMoved {
        stage: String,
        to_date: DateTime<Utc>,
    },
    /// The card is mid-stage. The stage name comes from the card's current
    /// list (resolved by the caller); the window closes at run time.
    InProgress { to_date: DateTime<Utc> },
}

pub struct StageTransitionResolver;

impl StageTransitionResolver {
    /// `moves` is newest-first, so its head is the candidate recent move.
    /// A card with no list-moves is always in progress.
    pub fn resolve(moves: &[MoveAction], now: DateTime<Utc>) -> Transition {
        if let Some(newest) = moves.first() {
            if now.signed_duration_since(newest.date).num_days() < 1 {
                return Transition::JustMoved {
                    stage: newest.list_before.name.clone(),
                    to_date: newest.date,
                };
            }
        }

        Transition::InProgress { to_date: now }
    }
}
