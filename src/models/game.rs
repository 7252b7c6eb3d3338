//! Match, GoalEntry, Side and Outcome.

use crate::models::lenient;
use crate::models::player::RecordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One of the two sides of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Home => "Home",
            Side::Away => "Away",
        }
    }
}

/// Result of a match from one side's point of view.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
    #[serde(rename = "D")]
    Draw,
}

impl Outcome {
    pub fn from_scores(own: u32, other: u32) -> Self {
        match own.cmp(&other) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

/// A goal scorer entry, normalized to `{player, count}`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct GoalEntry {
    pub player: String,
    pub count: u32,
}

impl GoalEntry {
    pub fn new(player: impl Into<String>, count: u32) -> Self {
        Self {
            player: player.into(),
            count,
        }
    }

    /// A bare name counts as one goal; an object without `count` also counts as one.
    /// Entries without a usable name are dropped.
    pub(crate) fn from_value(value: &Value) -> Option<Self> {
        let (player, count) = match value {
            Value::String(name) => (name.trim().to_string(), 1),
            Value::Object(fields) => {
                let player = fields
                    .get("player")
                    .map(lenient::text_from_value)
                    .unwrap_or_default();
                let count = match fields.get("count") {
                    None | Some(Value::Null) => 1,
                    Some(raw) => lenient::count_from_value(raw),
                };
                (player, count)
            }
            _ => return None,
        };
        if player.is_empty() {
            return None;
        }
        Some(Self { player, count })
    }
}

/// A played match between the Home and Away teams.
///
/// Goal scorer lists are not required to add up to `goals_home` / `goals_away`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<RecordId>,
    /// None when the stored date is missing or unreadable.
    #[serde(default, deserialize_with = "lenient::date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub goals_home: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub goals_away: u32,
    #[serde(default, deserialize_with = "lenient::goal_list")]
    pub goal_scorers_home: Vec<GoalEntry>,
    #[serde(default, deserialize_with = "lenient::goal_list")]
    pub goal_scorers_away: Vec<GoalEntry>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub yellow_home: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub red_home: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub yellow_away: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub red_away: u32,
    #[serde(default, deserialize_with = "lenient::text")]
    pub man_of_the_match_name: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub prize_home: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub prize_away: f64,
}

impl Match {
    /// Create a match with the given score. Other fields start empty.
    pub fn new(goals_home: u32, goals_away: u32) -> Self {
        Self {
            goals_home,
            goals_away,
            ..Self::default()
        }
    }

    /// Builder-style date setter.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn goals(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.goals_home,
            Side::Away => self.goals_away,
        }
    }

    pub fn goal_scorers(&self, side: Side) -> &[GoalEntry] {
        match side {
            Side::Home => &self.goal_scorers_home,
            Side::Away => &self.goal_scorers_away,
        }
    }

    pub fn total_goals(&self) -> u32 {
        self.goals_home.saturating_add(self.goals_away)
    }

    /// Absolute goal differential.
    pub fn goal_diff(&self) -> u32 {
        self.goals_home.abs_diff(self.goals_away)
    }

    /// None on a draw.
    pub fn winner(&self) -> Option<Side> {
        match self.outcome_for(Side::Home) {
            Outcome::Win => Some(Side::Home),
            Outcome::Loss => Some(Side::Away),
            Outcome::Draw => None,
        }
    }

    pub fn outcome_for(&self, side: Side) -> Outcome {
        Outcome::from_scores(self.goals(side), self.goals(side.opponent()))
    }

    /// True when the opponent of `side` did not score.
    pub fn is_clean_sheet_for(&self, side: Side) -> bool {
        self.goals(side.opponent()) == 0
    }

    /// `"home-away"`, e.g. `"3-1"`.
    pub fn score_line(&self) -> String {
        format!("{}-{}", self.goals_home, self.goals_away)
    }

    /// Calendar month bucket, `"YYYY-MM"`.
    pub fn month_key(&self) -> Option<String> {
        self.date.map(|d| d.format("%Y-%m").to_string())
    }
}
