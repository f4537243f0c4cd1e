pub mod progress;

pub use progress::{
    aggregate_stats, category_breakdown, daily_completion_rate, monthly_progress,
    AggregateStats, CategoryStats,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How often a habit is expected to be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
}

/// A habit record as delivered by the remote habit store.
///
/// This crate only reads habits; creation, updates, and the streak
/// computation itself are owned by the remote side. Field names follow
/// the API's camelCase wire format.
///
/// The remote side maintains `streak <= longest_streak`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub frequency: Frequency,
    /// For weekly habits: 0 = Sunday, 1 = Monday, ...
    #[serde(default)]
    pub target_days: Vec<u8>,
    pub streak: u32,
    pub longest_streak: u32,
    #[serde(default)]
    pub completed_today: bool,
    /// ISO `YYYY-MM-DD` completion dates. Membership semantics only;
    /// duplicates carry no meaning.
    #[serde(default)]
    pub completed_dates: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
