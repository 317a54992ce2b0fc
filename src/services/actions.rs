use chrono::{DateTime, Utc};

use crate::domain::{Action, CommentAction, MoveAction, RawAction};

/// A card's action log split into the three subsets the recorder consumes,
/// each preserving the API's newest-first order.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedActions {
    pub creations: Vec<DateTime<Utc>>,
    pub moves: Vec<MoveAction>,
    pub comments: Vec<CommentAction>,
}

pub struct ActionClassifier;

impl ActionClassifier {
    pub fn classify(actions: &[RawAction]) -> ClassifiedActions {
        let mut classified = ClassifiedActions::default();

        for raw in actions {
            match Action::from_raw(raw) {
                Some(Action::Creation(date)) => classified.creations.push(date),
                Some(Action::ListMove(movement)) => classified.moves.push(movement),
                Some(Action::Comment(comment)) => classified.comments.push(comment),
                None => {
                    tracing::trace!(action_id = raw.id.as_str(), kind = raw.kind.as_str(), "discarding unclassified action");
                }
            }
        }

        classified
    }
}
