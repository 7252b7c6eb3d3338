//! FIFA match tracker: library with the data models and the statistics engine.

pub mod logic;
pub mod models;

pub use logic::{
    tally_player_of_match_awards, AdvancedStats, BanStatus, BiggestWin, CardCount, CardTotals,
    CleanSheets, FinanceSummary, HeadToHead, MonthlyTrend, PlayerStatLine, RecentForm,
    ScorerTally, StatsCalculator, StatsReport, TeamRecord, TeamRecords, DEFAULT_FORM_LENGTH,
};
pub use models::{
    Ban, BanType, Dataset, DatasetError, GoalEntry, Match, Outcome, Player, PlayerOfMatchAward,
    RecordId, RosterTeam, Side,
};
