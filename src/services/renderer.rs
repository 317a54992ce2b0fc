use chrono::{DateTime, Utc};

use crate::services::calendar::Accounting;

/// Formats a computed accounting result into the status comment body.
pub struct CommentRenderer;

impl CommentRenderer {
    /// Ahead of schedule renders with bold emphasis, on/behind with an
    /// inline-code `+N days`. Dates are `MM/DD/YYYY`, the same order the
    /// comment date-range parser consumes, so a published comment feeds the
    /// next run's window start.
    pub fn render(
        accounting: &Accounting,
        expected_days: i64,
        from_date: DateTime<Utc>,
        to_date: DateTime<Utc>,
        stage_label: &str,
    ) -> String {
        let difference = if accounting.delta < 0 {
            format!("**{} days**", accounting.delta)
        } else {
            format!("`+{} days`", accounting.delta)
        };

        format!(
            "**{} Stage:** {}. *{} - {}*.\n Expected days: {} days. Actual Days spent: {}.",
            stage_label,
            difference,
            from_date.format("%m/%d/%Y"),
            to_date.format("%m/%d/%Y"),
            expected_days,
            accounting.actual_days,
        )
    }
}
