//! Per-player derived statistics.

use crate::models::{Ban, Match, Player, PlayerOfMatchAward, RosterTeam};
use serde::{Deserialize, Serialize};

/// A player together with the figures derived from the rest of the dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatLine {
    #[serde(flatten)]
    pub player: Player,
    /// Every player is assumed to have played every match; there is no participation data.
    pub matches_played: u32,
    /// Player-of-the-match awards for this exact name and team.
    pub sds_count: u32,
    /// Two decimals, `"0.00"` when no matches were played.
    pub goals_per_game: String,
    pub total_bans: u32,
    pub disciplinary_score: u32,
}

/// Derived stats for every player, sorted by `goals` descending (ties keep input order).
pub fn player_stats(
    matches: &[Match],
    players: &[Player],
    bans: &[Ban],
    awards: &[PlayerOfMatchAward],
) -> Vec<PlayerStatLine> {
    let matches_played = u32::try_from(matches.len()).unwrap_or(u32::MAX);
    let mut lines: Vec<PlayerStatLine> = players
        .iter()
        .map(|p| {
            let player_bans: Vec<&Ban> = bans
                .iter()
                .filter(|b| b.belongs_to(p.id.as_ref()))
                .collect();
            PlayerStatLine {
                player: p.clone(),
                matches_played,
                sds_count: award_count(awards, &p.name, p.team),
                goals_per_game: goals_per_game(p.goals, matches_played),
                total_bans: u32::try_from(player_bans.len()).unwrap_or(u32::MAX),
                disciplinary_score: disciplinary_score(player_bans.iter().copied()),
            }
        })
        .collect();
    lines.sort_by(|a, b| b.player.goals.cmp(&a.player.goals));
    lines
}

/// Award count for the exact `(name, team)` pair; 0 when there is none.
pub fn award_count(awards: &[PlayerOfMatchAward], name: &str, team: RosterTeam) -> u32 {
    awards
        .iter()
        .find(|a| a.name == name && a.team == team)
        .map(|a| a.count)
        .unwrap_or(0)
}

pub fn goals_per_game(goals: u32, matches_played: u32) -> String {
    if matches_played == 0 {
        return "0.00".to_string();
    }
    // Ties round away from zero: 1 goal in 8 games is "0.13".
    let ratio = f64::from(goals) / f64::from(matches_played);
    format!("{:.2}", (ratio * 100.0).round() / 100.0)
}

/// Sum of per-type ban weights (second yellow 3, red 5, anything else 1).
pub fn disciplinary_score<'a>(bans: impl IntoIterator<Item = &'a Ban>) -> u32 {
    bans.into_iter()
        .fold(0u32, |score, b| score.saturating_add(b.ban_type.weight()))
}
