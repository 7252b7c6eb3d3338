//! Goal scorer tally from the per-match scorer lists.

use crate::models::{Match, Side};
use serde::{Deserialize, Serialize};

/// Goals credited to one player on one side across all match scorer lists.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScorerTally {
    pub player: String,
    pub side: Side,
    pub goals: u32,
}

/// Sums scorer list entries per `(player, side)`, most goals first, ties in first-seen order.
///
/// This reads only the scorer lists, which may disagree with both the match score and the
/// players' own goal counters.
pub fn goal_scorer_tally(matches: &[Match]) -> Vec<ScorerTally> {
    let mut tally: Vec<ScorerTally> = Vec::new();
    for m in matches {
        for side in [Side::Home, Side::Away] {
            for entry in m.goal_scorers(side) {
                match tally
                    .iter_mut()
                    .find(|t| t.side == side && t.player == entry.player)
                {
                    Some(t) => t.goals = t.goals.saturating_add(entry.count),
                    None => tally.push(ScorerTally {
                        player: entry.player.clone(),
                        side,
                        goals: entry.count,
                    }),
                }
            }
        }
    }
    tally.sort_by(|a, b| b.goals.cmp(&a.goals));
    tally
}
