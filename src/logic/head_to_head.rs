//! Home vs Away head-to-head summary.

use crate::models::{Match, Side};
use serde::{Deserialize, Serialize};

/// The widest winning margin for one side. All fields are zero/empty when that side never won.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BiggestWin {
    pub diff: u32,
    /// `"home-away"`.
    pub score: String,
    /// `YYYY-MM-DD`, empty when the match has no date.
    pub date: String,
    pub opponent: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHead {
    pub total_matches: u32,
    pub home_wins: u32,
    pub away_wins: u32,
    pub home_goals: u32,
    pub away_goals: u32,
    pub biggest_home_win: BiggestWin,
    pub biggest_away_win: BiggestWin,
}

impl HeadToHead {
    pub fn draws(&self) -> u32 {
        self.total_matches
            .saturating_sub(self.home_wins)
            .saturating_sub(self.away_wins)
    }
}

pub fn head_to_head(matches: &[Match]) -> HeadToHead {
    let mut h2h = HeadToHead {
        total_matches: u32::try_from(matches.len()).unwrap_or(u32::MAX),
        ..HeadToHead::default()
    };
    for m in matches {
        h2h.home_goals = h2h.home_goals.saturating_add(m.goals_home);
        h2h.away_goals = h2h.away_goals.saturating_add(m.goals_away);
        let Some(winner) = m.winner() else {
            continue;
        };
        let biggest = match winner {
            Side::Home => {
                h2h.home_wins += 1;
                &mut h2h.biggest_home_win
            }
            Side::Away => {
                h2h.away_wins += 1;
                &mut h2h.biggest_away_win
            }
        };
        // Strictly greater: the first match reaching a margin keeps it.
        if m.goal_diff() > biggest.diff {
            *biggest = BiggestWin {
                diff: m.goal_diff(),
                score: m.score_line(),
                date: m.date.map(|d| d.to_string()).unwrap_or_default(),
                opponent: winner.opponent().label().to_string(),
            };
        }
    }
    h2h
}
