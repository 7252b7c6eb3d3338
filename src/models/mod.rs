//! Data structures for the match tracker: matches, players, bans, awards, dataset snapshot.

mod dataset;
mod discipline;
mod game;
mod lenient;
mod player;

pub use dataset::{Dataset, DatasetError};
pub use discipline::{Ban, BanType};
pub use game::{GoalEntry, Match, Outcome, Side};
pub use lenient::{goal_list_from_value, parse_date};
pub use player::{Player, PlayerOfMatchAward, RecordId, RosterTeam};
