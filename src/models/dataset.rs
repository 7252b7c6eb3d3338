//! Dataset snapshot and ingestion errors.

use crate::logic::tally_player_of_match_awards;
use crate::models::discipline::Ban;
use crate::models::game::Match;
use crate::models::lenient;
use crate::models::player::{Player, PlayerOfMatchAward};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Errors that can occur while loading a dataset. Malformed fields, `null` collections and
/// non-object entries never cause one; only documents that are not valid JSON/CSV at all do.
#[derive(Debug)]
pub enum DatasetError {
    /// The document is not valid JSON or does not have the dataset shape.
    Json(serde_json::Error),
    /// The CSV input could not be read.
    Csv(csv::Error),
    /// Reading the input failed.
    Io(std::io::Error),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Json(e) => write!(f, "Invalid dataset JSON: {}", e),
            DatasetError::Csv(e) => write!(f, "Invalid match CSV: {}", e),
            DatasetError::Io(e) => write!(f, "Could not read dataset: {}", e),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Json(e) => Some(e),
            DatasetError::Csv(e) => Some(e),
            DatasetError::Io(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(e: serde_json::Error) -> Self {
        DatasetError::Json(e)
    }
}

impl From<csv::Error> for DatasetError {
    fn from(e: csv::Error) -> Self {
        DatasetError::Csv(e)
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(e: std::io::Error) -> Self {
        DatasetError::Io(e)
    }
}

/// The four input collections, as handed over by the data layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    /// Expected newest first; form queries take the leading matches as given.
    #[serde(deserialize_with = "lenient::records")]
    pub matches: Vec<Match>,
    #[serde(deserialize_with = "lenient::records")]
    pub players: Vec<Player>,
    #[serde(deserialize_with = "lenient::records")]
    pub bans: Vec<Ban>,
    #[serde(deserialize_with = "lenient::records")]
    pub player_of_match_awards: Vec<PlayerOfMatchAward>,
}

impl Dataset {
    pub fn from_json_str(raw: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read matches from CSV with a header row named like the JSON fields
    /// (`date,goalsHome,goalsAway,goalScorersHome,...`). Goal scorer cells hold a JSON array.
    pub fn matches_from_csv<R: Read>(reader: R) -> Result<Vec<Match>, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let mut matches = Vec::new();
        for row in rdr.deserialize::<Match>() {
            matches.push(row?);
        }
        Ok(matches)
    }

    /// A dataset holding only the matches from a CSV file.
    pub fn from_matches_csv<R: Read>(reader: R) -> Result<Self, DatasetError> {
        Ok(Self {
            matches: Self::matches_from_csv(reader)?,
            ..Self::default()
        })
    }

    /// Fill in player-of-the-match awards from the matches when none were supplied.
    pub fn with_derived_awards(mut self) -> Self {
        if self.player_of_match_awards.is_empty() {
            self.player_of_match_awards =
                tally_player_of_match_awards(&self.matches, &self.players);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
            && self.players.is_empty()
            && self.bans.is_empty()
            && self.player_of_match_awards.is_empty()
    }
}
