//! Player-of-the-match award tally derived from match records.

use crate::models::{Match, Player, PlayerOfMatchAward};

/// One award record per `(name, team)`, in first-seen order.
///
/// The team is taken from the first roster entry with exactly that name; names that are not on
/// the roster are skipped.
pub fn tally_player_of_match_awards(
    matches: &[Match],
    players: &[Player],
) -> Vec<PlayerOfMatchAward> {
    let mut awards: Vec<PlayerOfMatchAward> = Vec::new();
    for m in matches {
        let name = m.man_of_the_match_name.as_str();
        if name.is_empty() {
            continue;
        }
        let Some(player) = players.iter().find(|p| p.name == name) else {
            log::debug!("Player of the match {:?} is not on the roster", name);
            continue;
        };
        match awards
            .iter_mut()
            .find(|a| a.name == name && a.team == player.team)
        {
            Some(a) => a.count += 1,
            None => awards.push(PlayerOfMatchAward::new(name, player.team, 1)),
        }
    }
    awards
}
