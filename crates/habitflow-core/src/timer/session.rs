//! Completed session records and statistics over them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::TimerMode;

/// One completed timer interval.
///
/// Created exactly once, at the instant a running countdown reaches zero,
/// and immutable thereafter. Skipped intervals never produce a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSession {
    pub mode: TimerMode,
    /// Duration in seconds, equal to the mode's canonical duration at
    /// completion time.
    pub duration: u32,
    pub completed_at: DateTime<Utc>,
}

impl TimerSession {
    pub fn completed_on(&self, day: NaiveDate) -> bool {
        self.completed_at.date_naive() == day
    }
}

/// Aggregated statistics over a session history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_sessions: u64,
    pub focus_sessions: u64,
    pub focus_secs: u64,
    pub break_secs: u64,
}

impl SessionStats {
    /// Compute stats over the whole history.
    pub fn compute(sessions: &[TimerSession]) -> Self {
        let mut stats = Self::default();
        for session in sessions {
            stats.total_sessions += 1;
            if session.mode == TimerMode::Focus {
                stats.focus_sessions += 1;
                stats.focus_secs += u64::from(session.duration);
            } else {
                stats.break_secs += u64::from(session.duration);
            }
        }
        stats
    }

    /// Compute stats over sessions completed on the given calendar day.
    pub fn for_day(sessions: &[TimerSession], day: NaiveDate) -> Self {
        let day_sessions: Vec<TimerSession> = sessions
            .iter()
            .filter(|s| s.completed_on(day))
            .cloned()
            .collect();
        Self::compute(&day_sessions)
    }
}
