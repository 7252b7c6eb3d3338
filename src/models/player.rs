//! Player, RosterTeam and PlayerOfMatchAward data structures.

use crate::models::lenient;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the data layer (numeric or textual, kept as text).
pub type RecordId = String;

/// Which squad a player belongs to.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum RosterTeam {
    Home,
    Away,
    /// Left the squad, or an unrecognized team label.
    #[default]
    Former,
}

impl RosterTeam {
    /// Case-insensitive; anything that is not Home or Away is Former.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("home") {
            RosterTeam::Home
        } else if label.eq_ignore_ascii_case("away") {
            RosterTeam::Away
        } else {
            RosterTeam::Former
        }
    }
}

/// A squad member. `goals` is the cumulative counter kept by the data layer and is not
/// derived from match goal lists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::roster_team")]
    pub team: RosterTeam,
    #[serde(default, deserialize_with = "lenient::text")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub goals: u32,
    /// Market value.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub value: f64,
}

impl Player {
    /// Create a player with the given name and team. Other fields start at zero/empty.
    pub fn new(name: impl Into<String>, team: RosterTeam) -> Self {
        Self {
            name: name.into(),
            team,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<RecordId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_goals(mut self, goals: u32) -> Self {
        self.goals = goals;
        self
    }
}

/// Player-of-the-match tally, one per `(name, team)` pair.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct PlayerOfMatchAward {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::roster_team")]
    pub team: RosterTeam,
    #[serde(default, deserialize_with = "lenient::count")]
    pub count: u32,
}

impl PlayerOfMatchAward {
    pub fn new(name: impl Into<String>, team: RosterTeam, count: u32) -> Self {
        Self {
            name: name.into(),
            team,
            count,
        }
    }
}
