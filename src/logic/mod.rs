//! Statistics engine: team records, form, player stats, league aggregates, head-to-head.

mod awards;
mod calculator;
mod discipline;
mod head_to_head;
mod league;
mod players;
mod records;
mod scorers;

pub use awards::tally_player_of_match_awards;
pub use calculator::{StatsCalculator, StatsReport};
pub use discipline::{active_bans, BanStatus};
pub use head_to_head::{head_to_head, BiggestWin, HeadToHead};
pub use league::{
    advanced_stats, card_totals, finance_summary, performance_trends, AdvancedStats, CardCount,
    CardTotals, CleanSheets, FinanceSummary, MonthlyTrend,
};
pub use players::{
    award_count, disciplinary_score, goals_per_game, player_stats, PlayerStatLine,
};
pub use records::{
    recent_form, team_records, RecentForm, TeamRecord, TeamRecords, DEFAULT_FORM_LENGTH,
};
pub use scorers::{goal_scorer_tally, ScorerTally};
