//! Integration tests for per-player stats, disciplinary scores and bans.

use fifa_tracker::{
    Ban, BanType, Match, Player, PlayerOfMatchAward, RosterTeam, StatsCalculator,
};

fn roster() -> Vec<Player> {
    vec![
        Player::new("Kane", RosterTeam::Home).with_id("1").with_goals(4),
        Player::new("Mbappé", RosterTeam::Away).with_id("2").with_goals(9),
        Player::new("Kane", RosterTeam::Away).with_id("3").with_goals(4),
        Player::new("Neuer", RosterTeam::Former).with_id("4"),
    ]
}

#[test]
fn sorted_by_goals_descending_with_stable_ties() {
    let players = roster();
    let matches = vec![Match::new(1, 0), Match::new(2, 2)];
    let stats = StatsCalculator::new(&matches, &players, &[], &[]).player_stats();
    let order: Vec<_> = stats.iter().map(|s| s.player.id.clone().unwrap()).collect();
    assert_eq!(order, vec!["2", "1", "3", "4"]);
    assert!(stats.windows(2).all(|w| w[0].player.goals >= w[1].player.goals));
}

#[test]
fn every_player_is_credited_with_every_match() {
    let players = roster();
    let matches = vec![Match::new(1, 0), Match::new(2, 2), Match::new(0, 3)];
    let stats = StatsCalculator::new(&matches, &players, &[], &[]).player_stats();
    assert!(stats.iter().all(|s| s.matches_played == 3));
    let mbappe = stats.iter().find(|s| s.player.name == "Mbappé").unwrap();
    assert_eq!(mbappe.goals_per_game, "3.00");
    let kane = stats.iter().find(|s| s.player.id.as_deref() == Some("1")).unwrap();
    assert_eq!(kane.goals_per_game, "1.33");
}

#[test]
fn goals_per_game_without_matches() {
    let players = roster();
    let stats = StatsCalculator::new(&[], &players, &[], &[]).player_stats();
    assert!(stats.iter().all(|s| s.goals_per_game == "0.00"));
    assert!(stats.iter().all(|s| s.matches_played == 0));
}

#[test]
fn awards_match_on_name_and_team() {
    let players = roster();
    let awards = vec![
        PlayerOfMatchAward::new("Kane", RosterTeam::Home, 2),
        PlayerOfMatchAward::new("Mbappé", RosterTeam::Home, 7),
    ];
    let stats = StatsCalculator::new(&[], &players, &[], &awards).player_stats();
    let sds = |id: &str| {
        stats
            .iter()
            .find(|s| s.player.id.as_deref() == Some(id))
            .unwrap()
            .sds_count
    };
    assert_eq!(sds("1"), 2);
    assert_eq!(sds("3"), 0);
    assert_eq!(sds("2"), 0);
}

#[test]
fn disciplinary_score_weights_ban_types() {
    let players = roster();
    let bans = vec![
        Ban::new("1", BanType::SecondYellow, 1),
        Ban::new("1", BanType::Red, 3),
        Ban::new("1", BanType::Injury, 2),
        Ban::new("2", BanType::Other, 1),
        Ban::new("99", BanType::Red, 1),
        Ban::default(),
    ];
    let stats = StatsCalculator::new(&[], &players, &bans, &[]).player_stats();
    let line = |id: &str| stats.iter().find(|s| s.player.id.as_deref() == Some(id)).unwrap();
    assert_eq!(line("1").total_bans, 3);
    assert_eq!(line("1").disciplinary_score, 9);
    assert_eq!(line("2").disciplinary_score, 1);
    assert_eq!(line("3").total_bans, 0);
    assert_eq!(line("3").disciplinary_score, 0);
}

#[test]
fn player_without_id_gets_no_unlinked_bans() {
    let players = vec![Player::new("Nobody", RosterTeam::Home)];
    let bans = vec![Ban::default()];
    let stats = StatsCalculator::new(&[], &players, &bans, &[]).player_stats();
    assert_eq!(stats[0].total_bans, 0);
}

#[test]
fn remaining_games_are_clamped() {
    assert_eq!(Ban::new("1", BanType::Red, 4).with_served(1).remaining_games(), 3);
    assert_eq!(Ban::new("1", BanType::Red, 2).with_served(5).remaining_games(), 0);
    assert!(!Ban::new("1", BanType::Red, 2).with_served(2).is_active());
}

#[test]
fn active_bans_resolve_names_and_sort_by_remaining() {
    let players = roster();
    let bans = vec![
        Ban::new("1", BanType::Red, 2).with_served(1),
        Ban::new("2", BanType::Injury, 5),
        Ban::new("3", BanType::SecondYellow, 1).with_served(1),
        Ban::new("77", BanType::Red, 3),
    ];
    let active = StatsCalculator::new(&[], &players, &bans, &[]).active_bans();
    let summary: Vec<_> = active
        .iter()
        .map(|a| (a.player_name.as_str(), a.remaining))
        .collect();
    assert_eq!(summary, vec![("Mbappé", 5), ("", 3), ("Kane", 1)]);
}

#[test]
fn ban_type_labels() {
    assert_eq!(BanType::from_label("Gelb-Rote Karte"), BanType::SecondYellow);
    assert_eq!(BanType::from_label("second_yellow"), BanType::SecondYellow);
    assert_eq!(BanType::from_label("Rote Karte"), BanType::Red);
    assert_eq!(BanType::from_label("RED"), BanType::Red);
    assert_eq!(BanType::from_label("Verletzung"), BanType::Injury);
    assert_eq!(BanType::from_label("suspension"), BanType::Other);
    assert_eq!(BanType::from_label(""), BanType::Other);
}

#[test]
fn stat_line_serializes_flat() {
    let players = vec![Player::new("Kane", RosterTeam::Home).with_id("1").with_goals(2)];
    let matches = vec![Match::new(1, 0)];
    let stats = StatsCalculator::new(&matches, &players, &[], &[]).player_stats();
    let json = serde_json::to_value(&stats[0]).unwrap();
    assert_eq!(json["name"], "Kane");
    assert_eq!(json["team"], "Home");
    assert_eq!(json["goals"], 2);
    assert_eq!(json["matchesPlayed"], 1);
    assert_eq!(json["sdsCount"], 0);
    assert_eq!(json["goalsPerGame"], "2.00");
    assert_eq!(json["disciplinaryScore"], 0);
}

#[test]
fn goals_per_game_rounds_ties_up() {
    let players = vec![
        Player::new("Kane", RosterTeam::Home).with_id("1").with_goals(1),
        Player::new("Mbappé", RosterTeam::Away).with_id("2").with_goals(5),
    ];
    let matches: Vec<Match> = (0..8).map(|_| Match::new(1, 0)).collect();
    let stats = StatsCalculator::new(&matches, &players, &[], &[]).player_stats();
    let gpg = |id: &str| {
        stats
            .iter()
            .find(|s| s.player.id.as_deref() == Some(id))
            .unwrap()
            .goals_per_game
            .clone()
    };
    assert_eq!(gpg("1"), "0.13");
    assert_eq!(gpg("2"), "0.63");
}
