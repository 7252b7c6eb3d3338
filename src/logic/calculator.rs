//! StatsCalculator: read-only query surface over one dataset snapshot.

use crate::logic::discipline::{active_bans, BanStatus};
use crate::logic::head_to_head::{head_to_head, HeadToHead};
use crate::logic::league::{
    advanced_stats, card_totals, finance_summary, performance_trends, AdvancedStats, CardTotals,
    FinanceSummary, MonthlyTrend,
};
use crate::logic::players::{player_stats, PlayerStatLine};
use crate::logic::records::{recent_form, team_records, RecentForm, TeamRecords};
use crate::logic::scorers::{goal_scorer_tally, ScorerTally};
use crate::models::{Ban, Dataset, Match, Player, PlayerOfMatchAward};
use serde::Serialize;
use std::collections::BTreeMap;

/// Borrows the four input collections and derives statistics from them on demand.
///
/// Nothing is cached and nothing can be changed after construction: build a new calculator
/// for every new version of the data. Every query returns zero/empty values for empty input.
#[derive(Clone, Copy, Debug)]
pub struct StatsCalculator<'a> {
    matches: &'a [Match],
    players: &'a [Player],
    bans: &'a [Ban],
    awards: &'a [PlayerOfMatchAward],
}

/// Every query bundled for a dashboard refresh.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub team_records: TeamRecords,
    pub recent_form: RecentForm,
    pub player_stats: Vec<PlayerStatLine>,
    pub advanced_stats: AdvancedStats,
    pub performance_trends: BTreeMap<String, MonthlyTrend>,
    pub head_to_head: HeadToHead,
    pub goal_scorers: Vec<ScorerTally>,
    pub cards: CardTotals,
    pub finance: FinanceSummary,
    pub active_bans: Vec<BanStatus>,
}

impl<'a> StatsCalculator<'a> {
    pub fn new(
        matches: &'a [Match],
        players: &'a [Player],
        bans: &'a [Ban],
        awards: &'a [PlayerOfMatchAward],
    ) -> Self {
        Self {
            matches,
            players,
            bans,
            awards,
        }
    }

    pub fn from_dataset(dataset: &'a Dataset) -> Self {
        Self::new(
            &dataset.matches,
            &dataset.players,
            &dataset.bans,
            &dataset.player_of_match_awards,
        )
    }

    pub fn team_records(&self) -> TeamRecords {
        team_records(self.matches)
    }

    /// First `n` matches in the order supplied (see [`crate::DEFAULT_FORM_LENGTH`]).
    pub fn recent_form(&self, n: usize) -> RecentForm {
        recent_form(self.matches, n)
    }

    pub fn player_stats(&self) -> Vec<PlayerStatLine> {
        player_stats(self.matches, self.players, self.bans, self.awards)
    }

    pub fn advanced_stats(&self) -> AdvancedStats {
        advanced_stats(self.matches)
    }

    pub fn performance_trends(&self) -> BTreeMap<String, MonthlyTrend> {
        performance_trends(self.matches)
    }

    pub fn head_to_head(&self) -> HeadToHead {
        head_to_head(self.matches)
    }

    pub fn goal_scorer_tally(&self) -> Vec<ScorerTally> {
        goal_scorer_tally(self.matches)
    }

    pub fn card_totals(&self) -> CardTotals {
        card_totals(self.matches)
    }

    pub fn finance_summary(&self) -> FinanceSummary {
        finance_summary(self.matches)
    }

    pub fn active_bans(&self) -> Vec<BanStatus> {
        active_bans(self.bans, self.players)
    }

    pub fn report(&self, form_length: usize) -> StatsReport {
        StatsReport {
            team_records: self.team_records(),
            recent_form: self.recent_form(form_length),
            player_stats: self.player_stats(),
            advanced_stats: self.advanced_stats(),
            performance_trends: self.performance_trends(),
            head_to_head: self.head_to_head(),
            goal_scorers: self.goal_scorer_tally(),
            cards: self.card_totals(),
            finance: self.finance_summary(),
            active_bans: self.active_bans(),
        }
    }
}
