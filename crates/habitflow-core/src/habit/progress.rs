//! Streak and progress math over habit records.
//!
//! All functions are pure and synchronous; inputs are already-resident
//! collections fetched by the caller. Malformed completion dates are
//! tolerated and treated as non-matching, never as errors.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Habit;

/// Collection-wide statistics for the analytics overview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_habits: u32,
    /// Habits with a current streak greater than zero.
    pub active_streak_count: u32,
    /// Maximum `longest_streak` across the collection, 0 when empty.
    pub longest_streak_overall: u32,
    /// Rounded mean completion rate in percent since each habit's creation.
    pub average_completion_rate: u32,
}

/// Per-category totals for the category performance panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub total: u32,
    pub completed_today: u32,
}

/// Percentage of days in `reference`'s month with a completion, 0-100.
///
/// Unparseable entries in `completed_dates` are skipped. Duplicate
/// entries count once (set semantics), so the result never exceeds 100.
pub fn monthly_progress(habit: &Habit, reference: NaiveDate) -> u8 {
    let this_month: BTreeSet<NaiveDate> = habit
        .completed_dates
        .iter()
        .filter_map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .filter(|d| d.year() == reference.year() && d.month() == reference.month())
        .collect();
    let days = days_in_month(reference.year(), reference.month());
    round_pct(this_month.len() as f64 / f64::from(days))
}

/// Aggregate statistics over a habit collection. All-zero when empty.
pub fn aggregate_stats(habits: &[Habit], now: DateTime<Utc>) -> AggregateStats {
    if habits.is_empty() {
        return AggregateStats::default();
    }

    let active_streak_count = habits.iter().filter(|h| h.streak > 0).count() as u32;
    let longest_streak_overall = habits
        .iter()
        .map(|h| h.longest_streak)
        .max()
        .unwrap_or(0);

    let rate_sum: f64 = habits
        .iter()
        .map(|h| {
            let completed_days = h.completed_dates.len() as f64;
            completed_days / days_since_created(h, now) * 100.0
        })
        .sum();
    let average_completion_rate = (rate_sum / habits.len() as f64).round() as u32;

    AggregateStats {
        total_habits: habits.len() as u32,
        active_streak_count,
        longest_streak_overall,
        average_completion_rate,
    }
}

/// Group habits by their exact category string (case-sensitive).
pub fn category_breakdown(habits: &[Habit]) -> BTreeMap<String, CategoryStats> {
    let mut breakdown: BTreeMap<String, CategoryStats> = BTreeMap::new();
    for habit in habits {
        let entry = breakdown.entry(habit.category.clone()).or_default();
        entry.total += 1;
        if habit.completed_today {
            entry.completed_today += 1;
        }
    }
    breakdown
}

/// Rounded percentage of habits completed today, 0 on empty input.
pub fn daily_completion_rate(habits: &[Habit]) -> u8 {
    if habits.is_empty() {
        return 0;
    }
    let completed = habits.iter().filter(|h| h.completed_today).count();
    round_pct(completed as f64 / habits.len() as f64)
}

/// Whole days since creation, never less than 1 so the rate for a habit
/// created today stays finite.
fn days_since_created(habit: &Habit, now: DateTime<Utc>) -> f64 {
    let elapsed = (now - habit.created_at).num_seconds() as f64;
    (elapsed / 86_400.0).ceil().max(1.0)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

fn round_pct(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::Frequency;

    fn habit(dates: &[&str]) -> Habit {
        Habit {
            id: "h1".into(),
            name: "Read".into(),
            description: String::new(),
            category: "learning".into(),
            frequency: Frequency::Daily,
            target_days: Vec::new(),
            streak: 0,
            longest_streak: 0,
            completed_today: false,
            completed_dates: dates.iter().map(|s| s.to_string()).collect(),
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            updated_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    fn jan20() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    #[test]
    fn monthly_progress_counts_only_reference_month() {
        // 2 January entries over 31 days.
        let h = habit(&["2024-01-01", "2024-01-15", "2024-02-01"]);
        assert_eq!(monthly_progress(&h, jan20()), 6);
    }

    #[test]
    fn monthly_progress_zero_without_completions() {
        let h = habit(&[]);
        assert_eq!(monthly_progress(&h, jan20()), 0);
        let h = habit(&["2024-02-01"]);
        assert_eq!(monthly_progress(&h, jan20()), 0);
    }

    #[test]
    fn monthly_progress_skips_malformed_entries() {
        let h = habit(&["garbage", "2024-01-15", "01/20/2024", ""]);
        assert_eq!(monthly_progress(&h, jan20()), 3); // 1/31 rounds to 3
    }

    #[test]
    fn monthly_progress_ignores_duplicates_and_order() {
        let a = habit(&["2024-01-15", "2024-01-01", "2024-01-15"]);
        let b = habit(&["2024-01-01", "2024-01-15"]);
        assert_eq!(monthly_progress(&a, jan20()), monthly_progress(&b, jan20()));
    }

    #[test]
    fn monthly_progress_distinguishes_year() {
        let h = habit(&["2023-01-15"]);
        assert_eq!(monthly_progress(&h, jan20()), 0);
    }

    #[test]
    fn days_in_month_handles_leap_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    #[test]
    fn aggregate_stats_on_empty_collection_is_all_zero() {
        let stats = aggregate_stats(&[], Utc::now());
        assert_eq!(stats, AggregateStats::default());
    }

    #[test]
    fn aggregate_stats_takes_max_longest_streak() {
        let mut a = habit(&[]);
        a.streak = 2;
        a.longest_streak = 5;
        let mut b = habit(&[]);
        b.longest_streak = 9;
        let stats = aggregate_stats(&[a, b], Utc::now());
        assert_eq!(stats.total_habits, 2);
        assert_eq!(stats.active_streak_count, 1);
        assert_eq!(stats.longest_streak_overall, 9);
    }

    #[test]
    fn completion_rate_floors_age_at_one_day() {
        let now: DateTime<Utc> = "2024-01-01T06:00:00Z".parse().unwrap();
        // Created six hours ago with one completion: 1/1 day = 100%.
        let mut h = habit(&["2024-01-01"]);
        h.created_at = "2024-01-01T00:00:00Z".parse().unwrap();
        let stats = aggregate_stats(&[h], now);
        assert_eq!(stats.average_completion_rate, 100);
    }

    #[test]
    fn completion_rate_averages_over_habit_age() {
        let now: DateTime<Utc> = "2024-01-11T00:00:00Z".parse().unwrap();
        // 5 completions over 10 days = 50%.
        let h = habit(&[
            "2024-01-01",
            "2024-01-02",
            "2024-01-03",
            "2024-01-04",
            "2024-01-05",
        ]);
        let stats = aggregate_stats(&[h], now);
        assert_eq!(stats.average_completion_rate, 50);
    }

    #[test]
    fn category_breakdown_is_exact_match() {
        let mut a = habit(&[]);
        a.category = "Health".into();
        a.completed_today = true;
        let mut b = habit(&[]);
        b.category = "health".into();
        let mut c = habit(&[]);
        c.category = "Health".into();

        let breakdown = category_breakdown(&[a, b, c]);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(
            breakdown["Health"],
            CategoryStats {
                total: 2,
                completed_today: 1
            }
        );
        assert_eq!(
            breakdown["health"],
            CategoryStats {
                total: 1,
                completed_today: 0
            }
        );
    }

    #[test]
    fn daily_completion_rate_rounds() {
        let mut a = habit(&[]);
        a.completed_today = true;
        let b = habit(&[]);
        let c = habit(&[]);
        assert_eq!(daily_completion_rate(&[a, b, c]), 33);
        assert_eq!(daily_completion_rate(&[]), 0);
    }
}
