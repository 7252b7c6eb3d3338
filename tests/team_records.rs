//! Integration tests for team records and recent form.

use chrono::NaiveDate;
use fifa_tracker::{Match, Outcome, StatsCalculator, TeamRecord, TeamRecords};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

/// The January sample, oldest first: 3-1, 0-0, 2-2.
fn january() -> Vec<Match> {
    vec![
        Match::new(3, 1).on(day(5)),
        Match::new(0, 0).on(day(12)),
        Match::new(2, 2).on(day(19)),
    ]
}

fn calc(matches: &[Match]) -> StatsCalculator<'_> {
    StatsCalculator::new(matches, &[], &[], &[])
}

#[test]
fn records_count_wins_and_losses_only() {
    let matches = january();
    assert_eq!(
        calc(&matches).team_records(),
        TeamRecords {
            home: TeamRecord { wins: 1, losses: 0 },
            away: TeamRecord { wins: 0, losses: 1 },
        }
    );
}

#[test]
fn records_are_mirrored_between_sides() {
    let matches = vec![
        Match::new(1, 0),
        Match::new(0, 2),
        Match::new(4, 4),
        Match::new(0, 1),
        Match::new(5, 3),
    ];
    let r = calc(&matches).team_records();
    assert_eq!(r.home.wins, r.away.losses);
    assert_eq!(r.away.wins, r.home.losses);
    assert_eq!(r.home.wins, 2);
    assert_eq!(r.away.wins, 2);
    assert!(r.home.wins + r.away.wins <= matches.len() as u32);
}

#[test]
fn records_empty_input() {
    assert_eq!(calc(&[]).team_records(), TeamRecords::default());
}

#[test]
fn form_takes_leading_matches_in_given_order() {
    let matches = january();
    let form = calc(&matches).recent_form(2);
    assert_eq!(form.home, vec![Outcome::Win, Outcome::Draw]);
    assert_eq!(form.away, vec![Outcome::Loss, Outcome::Draw]);

    let mut newest_first = january();
    newest_first.reverse();
    let form = calc(&newest_first).recent_form(2);
    assert_eq!(form.home, vec![Outcome::Draw, Outcome::Draw]);
    assert_eq!(form.away, vec![Outcome::Draw, Outcome::Draw]);
}

#[test]
fn form_length_is_capped_by_match_count() {
    let matches = january();
    let form = calc(&matches).recent_form(fifa_tracker::DEFAULT_FORM_LENGTH);
    assert_eq!(form.home.len(), 3);
    assert_eq!(form.away.len(), 3);
    assert!(calc(&matches).recent_form(0).home.is_empty());
    assert!(calc(&[]).recent_form(5).home.is_empty());
}

#[test]
fn form_sides_are_complementary() {
    let matches = vec![Match::new(2, 0), Match::new(1, 3), Match::new(1, 1), Match::new(0, 0)];
    let form = calc(&matches).recent_form(10);
    for (h, a) in form.home.iter().zip(&form.away) {
        match h {
            Outcome::Win => assert_eq!(*a, Outcome::Loss),
            Outcome::Loss => assert_eq!(*a, Outcome::Win),
            Outcome::Draw => assert_eq!(*a, Outcome::Draw),
        }
    }
}

#[test]
fn form_serializes_as_letters() {
    let matches = january();
    let json = serde_json::to_value(calc(&matches).recent_form(3)).unwrap();
    assert_eq!(json["home"], serde_json::json!(["W", "D", "D"]));
    assert_eq!(json["away"], serde_json::json!(["L", "D", "D"]));
}
