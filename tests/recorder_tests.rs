mod common;

use chrono::Duration;

use card_recorder::domain::{Stage, StageTable};
use card_recorder::services::{
    BusinessDayAccountant, CardRecorder, HolidayCalendar, CURRENT_STAGE_MARKER,
};

use common::{card, comment_action, create_action, list, move_action, utc, BoardOp, MockBoard};

fn stage_table() -> StageTable {
    StageTable::from_stages(vec![
        Stage {
            name: "Research".to_string(),
            expected_time: 10,
        },
        Stage {
            name: "Drafting".to_string(),
            expected_time: 5,
        },
    ])
}

fn recorder(board: &MockBoard) -> CardRecorder<&MockBoard> {
    CardRecorder::new(
        board,
        stage_table(),
        BusinessDayAccountant::new(HolidayCalendar::for_year(2017)),
    )
}

#[tokio::test]
async fn in_progress_card_gets_a_current_stage_comment() {
    let now = utc(2017, 3, 10, 12);
    let subject = card(
        "card-1",
        "RFP alpha",
        "l2",
        vec![create_action("a1", utc(2017, 3, 1, 9))],
    );
    let board = MockBoard::new(vec![subject.clone()], &[("l2", "Drafting")]);

    recorder(&board).record_card(&subject, now).await.unwrap();

    let posted = board.posted();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].0, "card-1");
    assert!(posted[0].1.contains(CURRENT_STAGE_MARKER));
    assert!(posted[0].1.contains("*03/01/2017 - 03/10/2017*"));
    assert!(posted[0].1.contains("`+2 days`"));
    assert!(board.deleted().is_empty());
}

#[tokio::test]
async fn just_moved_card_reports_the_stage_it_left() {
    let now = utc(2017, 3, 10, 12);
    let move_date = now - Duration::hours(5);
    let subject = card(
        "card-2",
        "RFP beta",
        "unregistered-list",
        vec![
            move_action(
                "m1",
                move_date,
                list("l1", "Research"),
                list("l2", "Drafting"),
            ),
            create_action("a1", utc(2017, 2, 20, 9)),
        ],
    );
    // The current list is deliberately unregistered: the just-moved path
    // must never look it up.
    let board = MockBoard::new(vec![subject.clone()], &[]);

    recorder(&board).record_card(&subject, now).await.unwrap();

    let posted = board.posted();
    assert_eq!(posted.len(), 1);
    assert!(posted[0].1.contains("**Research Stage:**"));
    assert!(!posted[0].1.contains(CURRENT_STAGE_MARKER));
}

#[tokio::test]
async fn successive_runs_keep_exactly_one_current_stage_comment() {
    let first_now = utc(2017, 3, 10, 12);
    let subject = card(
        "card-3",
        "RFP gamma",
        "l2",
        vec![create_action("a1", utc(2017, 3, 1, 9))],
    );
    let board = MockBoard::new(vec![subject.clone()], &[("l2", "Drafting")]);
    let recorder = recorder(&board);

    recorder.record_card(&subject, first_now).await.unwrap();
    let first_text = board.posted()[0].1.clone();
    assert!(first_text.contains(CURRENT_STAGE_MARKER));

    // Same card one day later, now carrying the published status comment.
    let mut actions = vec![comment_action("status-1", first_now, &first_text)];
    actions.extend(subject.actions.iter().cloned());
    let second_now = utc(2017, 3, 11, 12);
    let updated = card("card-3", "RFP gamma", "l2", actions);

    recorder.record_card(&updated, second_now).await.unwrap();

    // The stale comment is gone and only one replacement was published.
    assert_eq!(board.deleted(), vec!["status-1".to_string()]);
    assert_eq!(board.posted().len(), 2);

    // The prior comment's embedded range carried the window start forward.
    let second_text = &board.posted()[1].1;
    assert!(second_text.contains("*03/01/2017 - 03/11/2017*"));

    // Delete precedes the replacement publish.
    let ops = board.op_log();
    let delete_at = ops
        .iter()
        .position(|op| matches!(op, BoardOp::Delete { .. }))
        .unwrap();
    let last_post_at = ops
        .iter()
        .rposition(|op| matches!(op, BoardOp::Post { .. }))
        .unwrap();
    assert!(delete_at < last_post_at);
}

#[tokio::test]
async fn one_failing_card_does_not_abort_the_batch() {
    let healthy = card(
        "card-ok",
        "RFP delta",
        "l2",
        vec![create_action("a1", utc(2017, 3, 1, 9))],
    );
    // This card's list resolves to a stage name missing from the table.
    let orphaned = card(
        "card-bad",
        "RFP epsilon",
        "lx",
        vec![create_action("a2", utc(2017, 3, 1, 9))],
    );
    let board = MockBoard::new(
        vec![orphaned, healthy],
        &[("l2", "Drafting"), ("lx", "Mystery")],
    );

    let summary = recorder(&board).run("board-1").await.unwrap();

    assert_eq!(summary.recorded, 1);
    assert_eq!(summary.failed, 1);
    let posted = board.posted();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].0, "card-ok");
}
