//! Team win/loss records and recent form.

use crate::models::{Match, Outcome, Side};
use serde::{Deserialize, Serialize};

/// Form length used when the caller has no preference.
pub const DEFAULT_FORM_LENGTH: usize = 5;

/// Wins and losses for one side. Draws are `total - wins - losses` and are not stored.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamRecords {
    pub home: TeamRecord,
    pub away: TeamRecord,
}

/// Form sequences for both sides, index-aligned: `home[i]` and `away[i]` describe the same match.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RecentForm {
    pub home: Vec<Outcome>,
    pub away: Vec<Outcome>,
}

pub fn team_records(matches: &[Match]) -> TeamRecords {
    let mut records = TeamRecords::default();
    for m in matches {
        match m.winner() {
            Some(Side::Home) => {
                records.home.wins += 1;
                records.away.losses += 1;
            }
            Some(Side::Away) => {
                records.away.wins += 1;
                records.home.losses += 1;
            }
            None => {}
        }
    }
    records
}

/// Outcomes of the first `n` matches in the order given. Callers pass matches newest first
/// to get the latest form; no re-sorting happens here.
pub fn recent_form(matches: &[Match], n: usize) -> RecentForm {
    let recent = &matches[..n.min(matches.len())];
    RecentForm {
        home: recent.iter().map(|m| m.outcome_for(Side::Home)).collect(),
        away: recent.iter().map(|m| m.outcome_for(Side::Away)).collect(),
    }
}
