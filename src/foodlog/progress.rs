//! Progress aggregation
//!
//! Derives a 7-day rolling window view from the food log: per-day totals,
//! weekly averages, and the consecutive-day logging streak.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::journal::FoodLog;
use super::types::DailyAggregate;

/// Number of calendar days in the rolling window
pub const WINDOW_DAYS: i64 = 7;

/// Weekly view derived from the log
#[derive(Debug, Clone, Serialize)]
pub struct WeekSummary {
    /// One aggregate per day, oldest first (days_ago = 7 down to 1)
    pub days: Vec<DailyAggregate>,
    /// Arithmetic mean over the window, zero-entry days included
    pub averages: WeekAverages,
    /// Consecutive days with entries, counted back from yesterday
    pub streak: usize,
}

/// Per-macro weekly averages, rounded to 1 decimal place
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeekAverages {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Computes weekly progress views over a [`FoodLog`]
pub struct ProgressAggregator<'a> {
    log: &'a FoodLog,
}

impl<'a> ProgressAggregator<'a> {
    pub fn new(log: &'a FoodLog) -> Self {
        Self { log }
    }

    /// Summarize the 7 calendar days strictly before `today`
    pub async fn week_summary(&self, today: NaiveDate) -> WeekSummary {
        let mut days = Vec::with_capacity(WINDOW_DAYS as usize);

        for days_ago in (1..=WINDOW_DAYS).rev() {
            let date = today - Duration::days(days_ago);
            let date_str = date.format("%Y-%m-%d").to_string();
            let entries = self.log.entries_on_date(&date_str).await;
            let refs: Vec<&_> = entries.iter().collect();
            days.push(DailyAggregate::from_entries(date, &refs));
        }

        let averages = compute_averages(&days);
        let streak = compute_streak(&days);

        WeekSummary {
            days,
            averages,
            streak,
        }
    }
}

fn compute_averages(days: &[DailyAggregate]) -> WeekAverages {
    let n = days.len() as f64;
    let sum = |f: fn(&DailyAggregate) -> f64| days.iter().map(f).sum::<f64>();

    WeekAverages {
        calories: round1(sum(|d| d.totals.calories) / n),
        protein: round1(sum(|d| d.totals.protein) / n),
        carbs: round1(sum(|d| d.totals.carbs) / n),
        fat: round1(sum(|d| d.totals.fat) / n),
    }
}

/// Scan from the most recent day backward, stopping at the first empty day
fn compute_streak(days: &[DailyAggregate]) -> usize {
    days.iter()
        .rev()
        .take_while(|d| d.food_count > 0)
        .count()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foodlog::types::{FoodEntry, Nutrition};
    use chrono::{Local, TimeZone};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn entry_on(days_ago: i64, calories: f64) -> FoodEntry {
        let date = today() - Duration::days(days_ago);
        let when = Local
            .from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
            .unwrap();
        FoodEntry::at(
            "oatmeal",
            100.0,
            0.0,
            "100g oatmeal",
            Nutrition {
                calories,
                protein: 7.0,
                carbs: 14.0,
                fat: 2.1,
                fiber: 4.0,
            },
            when,
        )
    }

    async fn log_with(days_ago: &[i64]) -> FoodLog {
        let log = FoodLog::new();
        for &d in days_ago {
            log.append(entry_on(d, 140.0)).await;
        }
        log
    }

    #[tokio::test]
    async fn test_window_is_seven_days_oldest_first() {
        let log = FoodLog::new();
        let summary = ProgressAggregator::new(&log).week_summary(today()).await;

        assert_eq!(summary.days.len(), 7);
        assert_eq!(summary.days[0].date, "2024-06-08"); // days_ago = 7
        assert_eq!(summary.days[6].date, "2024-06-14"); // days_ago = 1
    }

    #[tokio::test]
    async fn test_today_is_excluded() {
        let log = log_with(&[0]).await;
        let summary = ProgressAggregator::new(&log).week_summary(today()).await;

        assert!(summary.days.iter().all(|d| d.food_count == 0));
    }

    #[tokio::test]
    async fn test_averages_include_empty_days() {
        // One 140-calorie entry across a 7-day window: 140 / 7 = 20.0
        let log = log_with(&[3]).await;
        let summary = ProgressAggregator::new(&log).week_summary(today()).await;

        assert_eq!(summary.averages.calories, 20.0);
        assert_eq!(summary.averages.protein, 1.0);
        assert_eq!(summary.averages.fat, 0.3);
    }

    #[tokio::test]
    async fn test_streak_counts_recent_consecutive_days() {
        let log = log_with(&[1, 2, 3]).await;
        let summary = ProgressAggregator::new(&log).week_summary(today()).await;
        assert_eq!(summary.streak, 3);
    }

    #[tokio::test]
    async fn test_streak_broken_by_yesterday_gap() {
        let log = log_with(&[2, 3]).await;
        let summary = ProgressAggregator::new(&log).week_summary(today()).await;
        assert_eq!(summary.streak, 0);
    }

    #[tokio::test]
    async fn test_streak_stops_at_first_gap() {
        let log = log_with(&[1, 2, 4, 5]).await;
        let summary = ProgressAggregator::new(&log).week_summary(today()).await;
        assert_eq!(summary.streak, 2);
    }

    #[tokio::test]
    async fn test_full_week_streak() {
        let log = log_with(&[1, 2, 3, 4, 5, 6, 7]).await;
        let summary = ProgressAggregator::new(&log).week_summary(today()).await;
        assert_eq!(summary.streak, 7);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(1.25), 1.3);
        assert_eq!(round1(1.24), 1.2);
        assert_eq!(round1(0.0), 0.0);
    }
}
