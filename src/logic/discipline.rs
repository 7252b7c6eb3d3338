//! Outstanding suspensions.

use crate::models::{Ban, Player};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BanStatus {
    pub ban: Ban,
    /// Empty when the ban's player id matches no player.
    pub player_name: String,
    pub remaining: u32,
}

/// Bans with games left to serve, most remaining first (ties keep input order).
pub fn active_bans(bans: &[Ban], players: &[Player]) -> Vec<BanStatus> {
    let mut active: Vec<BanStatus> = bans
        .iter()
        .filter(|b| b.is_active())
        .map(|b| BanStatus {
            ban: b.clone(),
            player_name: players
                .iter()
                .find(|p| b.belongs_to(p.id.as_ref()))
                .map(|p| p.name.clone())
                .unwrap_or_default(),
            remaining: b.remaining_games(),
        })
        .collect();
    active.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    active
}
