pub mod card;
pub mod error;
pub mod stage;

pub use card::{
    Action, ActionData, Card, CommentAction, CommentArtifact, ListRef, MoveAction, RawAction,
};
pub use error::RecorderError;
pub use stage::{Stage, StageTable};
