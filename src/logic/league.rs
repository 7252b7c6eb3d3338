//! League-wide aggregates: goal totals, clean sheets, monthly trends, cards, prize money.

use crate::models::{Match, Side};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CleanSheets {
    pub home: u32,
    pub away: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedStats {
    /// 0.0 when there are no matches.
    pub avg_goals_per_match: f64,
    pub total_matches: u32,
    pub total_goals: u32,
    pub home_total_goals: u32,
    pub away_total_goals: u32,
    /// Most goals in a single match, 0 when there are no matches.
    pub highest_scoring_match: u32,
    pub clean_sheets: CleanSheets,
}

/// One calendar month of results.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    /// `"YYYY-MM"`.
    pub month: String,
    pub home_wins: u32,
    pub away_wins: u32,
    pub total_goals: u32,
    pub match_count: u32,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CardCount {
    pub yellow: u32,
    pub red: u32,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CardTotals {
    pub home: CardCount,
    pub away: CardCount,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub prize_home: f64,
    pub prize_away: f64,
    pub total: f64,
}

pub fn advanced_stats(matches: &[Match]) -> AdvancedStats {
    let mut stats = AdvancedStats {
        total_matches: u32::try_from(matches.len()).unwrap_or(u32::MAX),
        ..AdvancedStats::default()
    };
    for m in matches {
        stats.home_total_goals = stats.home_total_goals.saturating_add(m.goals_home);
        stats.away_total_goals = stats.away_total_goals.saturating_add(m.goals_away);
        stats.highest_scoring_match = stats.highest_scoring_match.max(m.total_goals());
        if m.is_clean_sheet_for(Side::Home) {
            stats.clean_sheets.home += 1;
        }
        if m.is_clean_sheet_for(Side::Away) {
            stats.clean_sheets.away += 1;
        }
    }
    stats.total_goals = stats.home_total_goals.saturating_add(stats.away_total_goals);
    if stats.total_matches > 0 {
        stats.avg_goals_per_match = f64::from(stats.total_goals) / f64::from(stats.total_matches);
    }
    stats
}

/// Results bucketed by calendar month of the match date, keyed `"YYYY-MM"`.
/// Matches without a readable date have no month and are left out.
pub fn performance_trends(matches: &[Match]) -> BTreeMap<String, MonthlyTrend> {
    let mut trends: BTreeMap<String, MonthlyTrend> = BTreeMap::new();
    for m in matches {
        let Some(month) = m.month_key() else {
            log::debug!("Skipping undated match {:?} in monthly trends", m.id);
            continue;
        };
        let bucket = trends.entry(month.clone()).or_insert_with(|| MonthlyTrend {
            month,
            ..MonthlyTrend::default()
        });
        bucket.match_count += 1;
        bucket.total_goals = bucket.total_goals.saturating_add(m.total_goals());
        match m.winner() {
            Some(Side::Home) => bucket.home_wins += 1,
            Some(Side::Away) => bucket.away_wins += 1,
            None => {}
        }
    }
    trends
}

pub fn card_totals(matches: &[Match]) -> CardTotals {
    matches.iter().fold(CardTotals::default(), |mut t, m| {
        t.home.yellow = t.home.yellow.saturating_add(m.yellow_home);
        t.home.red = t.home.red.saturating_add(m.red_home);
        t.away.yellow = t.away.yellow.saturating_add(m.yellow_away);
        t.away.red = t.away.red.saturating_add(m.red_away);
        t
    })
}

pub fn finance_summary(matches: &[Match]) -> FinanceSummary {
    let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
    let prize_home: f64 = matches.iter().map(|m| finite(m.prize_home)).sum();
    let prize_away: f64 = matches.iter().map(|m| finite(m.prize_away)).sum();
    FinanceSummary {
        prize_home,
        prize_away,
        total: prize_home + prize_away,
    }
}
