//! Ban and BanType.

use crate::models::lenient;
use crate::models::player::RecordId;
use serde::{Deserialize, Serialize};

/// Kind of suspension. Unknown labels are `Other`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BanType {
    SecondYellow,
    Red,
    Injury,
    #[default]
    Other,
}

impl BanType {
    /// Parses English or German labels, case-insensitive.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase().replace(['_', '-'], " ");
        match label.as_str() {
            "second yellow" | "yellow red" | "gelb rote karte" | "gelb rot" => {
                BanType::SecondYellow
            }
            "red" | "red card" | "rote karte" | "rot" => BanType::Red,
            "injury" | "verletzung" => BanType::Injury,
            _ => BanType::Other,
        }
    }

    /// Weight of one ban of this type in a player's disciplinary score.
    pub fn weight(self) -> u32 {
        match self {
            BanType::SecondYellow => 3,
            BanType::Red => 5,
            BanType::Injury | BanType::Other => 1,
        }
    }
}

/// A suspension covering a number of games.
///
/// `games_served <= total_games` is expected but not enforced.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ban {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<RecordId>,
    /// None when the ban is not linked to a player.
    #[serde(default, deserialize_with = "lenient::id")]
    pub player_id: Option<RecordId>,
    #[serde(rename = "type", default, deserialize_with = "lenient::ban_type")]
    pub ban_type: BanType,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_games: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub games_served: u32,
    #[serde(default, deserialize_with = "lenient::text")]
    pub reason: String,
}

impl Ban {
    pub fn new(player_id: impl Into<RecordId>, ban_type: BanType, total_games: u32) -> Self {
        Self {
            player_id: Some(player_id.into()),
            ban_type,
            total_games,
            ..Self::default()
        }
    }

    pub fn with_served(mut self, games_served: u32) -> Self {
        self.games_served = games_served;
        self
    }

    /// Games left to serve, clamped at zero.
    pub fn remaining_games(&self) -> u32 {
        self.total_games.saturating_sub(self.games_served)
    }

    pub fn is_active(&self) -> bool {
        self.remaining_games() > 0
    }

    pub fn belongs_to(&self, player_id: Option<&RecordId>) -> bool {
        matches!((self.player_id.as_ref(), player_id), (Some(a), Some(b)) if a == b)
    }
}
