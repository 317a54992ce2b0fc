use chrono::{DateTime, Utc};

use crate::domain::{Card, CommentAction, CommentArtifact, RecorderError, StageTable};
use crate::services::actions::ActionClassifier;
use crate::services::calendar::BusinessDayAccountant;
use crate::services::renderer::CommentRenderer;
use crate::services::transition::{StageTransitionResolver, Transition};
use crate::services::window::LastMoveDateResolver;
use crate::trello::BoardApi;

/// Marker identifying the single replaceable status comment on a card.
/// Completed-stage comments never carry it and so accumulate as history.
pub const CURRENT_STAGE_MARKER: &str = "**Current Stage:**";

const CURRENT_STAGE_LABEL: &str = "Current";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub recorded: usize,
    pub failed: usize,
}

/// Sequences the per-card cycle: classify actions, drop the stale status
/// comment, resolve the accounting window, compute the business-day delta
/// and publish the rendered comment. Cards are independent; one card's
/// failure is logged and counted without touching the rest of the batch.
pub struct CardRecorder<A: BoardApi> {
    api: A,
    stages: StageTable,
    accountant: BusinessDayAccountant,
}

impl<A: BoardApi> CardRecorder<A> {
    pub fn new(api: A, stages: StageTable, accountant: BusinessDayAccountant) -> Self {
        Self {
            api,
            stages,
            accountant,
        }
    }

    pub async fn run(&self, board_id: &str) -> Result<RunSummary, RecorderError> {
        let cards = self.api.cards_with_actions(board_id).await?;
        let now = Utc::now();

        let mut summary = RunSummary::default();
        for card in &cards {
            match self.record_card(card, now).await {
                Ok(()) => summary.recorded += 1,
                Err(err) => {
                    tracing::error!(
                        card_id = card.id.as_str(),
                        card_name = card.name.as_str(),
                        error = %err,
                        "card processing failed"
                    );
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }

    pub async fn record_card(&self, card: &Card, now: DateTime<Utc>) -> Result<(), RecorderError> {
        let actions = ActionClassifier::classify(&card.actions);

        // Delete strictly precedes publish, else current-stage comments
        // accumulate. The in-memory comment list still includes the deleted
        // one, which is what carries the window start between runs.
        self.delete_current_comment(&actions.comments).await?;

        let from_date = LastMoveDateResolver::resolve(
            &actions.comments,
            &actions.moves,
            actions.creations.first().copied(),
        );

        match StageTransitionResolver::resolve(&actions.moves, now) {
            Transition::JustMoved { stage, to_date } => {
                tracing::info!(
                    card_id = card.id.as_str(),
                    card_name = card.name.as_str(),
                    stage = stage.as_str(),
                    "write new phase"
                );
                self.publish(card, &stage, &stage, from_date, to_date).await
            }
            Transition::InProgress { to_date } => {
                let stage = self.api.list_name(&card.id_list).await?;
                tracing::info!(
                    card_id = card.id.as_str(),
                    card_name = card.name.as_str(),
                    stage = stage.as_str(),
                    "write current phase"
                );
                self.publish(card, &stage, CURRENT_STAGE_LABEL, from_date, to_date)
                    .await
            }
        }
    }

    async fn publish(
        &self,
        card: &Card,
        stage_name: &str,
        stage_label: &str,
        from_date: DateTime<Utc>,
        to_date: DateTime<Utc>,
    ) -> Result<(), RecorderError> {
        let artifact = compile_comment(
            &self.stages,
            &self.accountant,
            &card.id,
            stage_name,
            stage_label,
            from_date,
            to_date,
        )?;
        self.api.post_comment(&artifact.card_id, &artifact.text).await
    }

    async fn delete_current_comment(
        &self,
        comments: &[CommentAction],
    ) -> Result<(), RecorderError> {
        if let Some(current) = comments
            .iter()
            .find(|comment| comment.text.contains(CURRENT_STAGE_MARKER))
        {
            self.api.delete_comment(&current.id).await?;
        }
        Ok(())
    }
}

/// Build the status comment for one accounting window without touching the
/// board. Also backs the `preview` command.
pub fn compile_comment(
    stages: &StageTable,
    accountant: &BusinessDayAccountant,
    card_id: &str,
    stage_name: &str,
    stage_label: &str,
    from_date: DateTime<Utc>,
    to_date: DateTime<Utc>,
) -> Result<CommentArtifact, RecorderError> {
    let expected_days = stages.expected_days(stage_name)?;
    let accounting = accountant.assess(expected_days, from_date, to_date);
    let text = CommentRenderer::render(&accounting, expected_days, from_date, to_date, stage_label);

    Ok(CommentArtifact {
        card_id: card_id.to_string(),
        text,
        from_date,
        to_date,
    })
}
