use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use regex::Regex;

use crate::domain::{CommentAction, MoveAction, RecorderError};

static DATE_RANGE: OnceLock<Regex> = OnceLock::new();

fn date_range_pattern() -> &'static Regex {
    DATE_RANGE.get_or_init(|| {
        Regex::new(r"(\d\d/\d\d/201\d) - \d\d/\d\d/201\d").expect("date range pattern compiles")
    })
}

/// Parse an `MM/DD/YYYY` date as midnight UTC.
pub fn parse_mdy(text: &str) -> Result<DateTime<Utc>, RecorderError> {
    let date = NaiveDate::parse_from_str(text, "%m/%d/%Y")
        .map_err(|e| RecorderError::InvalidDate(format!("{}: {}", text, e)))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| RecorderError::InvalidDate(text.to_string()))?;
    Ok(Utc.from_utc_datetime(&midnight))
}

/// Determines the start of the accounting window through a strict priority
/// chain over comment text, move history and the creation date. First match
/// wins; every card resolves to a defined timestamp.
pub struct LastMoveDateResolver;

impl LastMoveDateResolver {
    pub fn resolve(
        comments: &[CommentAction],
        moves: &[MoveAction],
        creation_date: Option<DateTime<Utc>>,
    ) -> DateTime<Utc> {
        if let Some(date) = Self::date_from_comments(comments) {
            return date;
        }
        if moves.len() > 1 {
            return moves[0].date;
        }
        if let Some(created) = creation_date {
            return created;
        }
        // A lone move with no creation date on record still marks a real
        // start of the current period.
        if let Some(only_move) = moves.first() {
            return only_move.date;
        }
        // Start of the system's operational history.
        Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap()
    }

    /// Scan for the first comment embedding a `MM/DD/201Y - MM/DD/201Y`
    /// range and take the range's first date. A comment whose matched text
    /// is not a real calendar date (e.g. month 13) is skipped, falling
    /// through to the next comment and then the next chain rule.
    fn date_from_comments(comments: &[CommentAction]) -> Option<DateTime<Utc>> {
        for comment in comments {
            if let Some(captures) = date_range_pattern().captures(&comment.text) {
                match parse_mdy(&captures[1]) {
                    Ok(date) => return Some(date),
                    Err(_) => {
                        tracing::debug!(comment_id = comment.id.as_str(), "comment date range matched but failed to parse");
                    }
                }
            }
        }
        None
    }
}
