use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::TimerMode;

/// Every accepted state change in the engine produces an Event.
/// Commands that return `None` were rejected or were no-op inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: TimerMode,
        time_left: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: TimerMode,
        time_left: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: TimerMode,
        time_left: u32,
        at: DateTime<Utc>,
    },
    ModeSelected {
        mode: TimerMode,
        time_left: u32,
        at: DateTime<Utc>,
    },
    /// A running countdown reached zero and a session record was appended.
    SessionCompleted {
        mode: TimerMode,
        next_mode: TimerMode,
        focus_sessions: u64,
        at: DateTime<Utc>,
    },
    /// Mode advanced without credit; no session record is written.
    TimerSkipped {
        from: TimerMode,
        to: TimerMode,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: TimerMode,
        time_left: u32,
        total_secs: u32,
        is_running: bool,
        /// 0.0 .. 1.0 progress within the current countdown.
        progress: f64,
        /// Focus sessions completed on the current calendar day.
        completed_today: u64,
        at: DateTime<Utc>,
    },
}
