pub mod engine;
pub mod session;

pub use engine::{EngineState, PomodoroEngine};
pub use session::{SessionStats, TimerSession};

use serde::{Deserialize, Serialize};

/// The three timer modes of the work/break rotation.
///
/// Serialized as `focus` / `shortBreak` / `longBreak` for compatibility
/// with previously persisted session histories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimerMode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    /// Canonical duration in seconds. Fixed constants, not configurable.
    pub const fn duration_secs(self) -> u32 {
        match self {
            TimerMode::Focus => 25 * 60,
            TimerMode::ShortBreak => 5 * 60,
            TimerMode::LongBreak => 15 * 60,
        }
    }

    /// Human-readable label used in notifications and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            TimerMode::Focus => "Focus Time",
            TimerMode::ShortBreak => "Short Break",
            TimerMode::LongBreak => "Long Break",
        }
    }

    pub const fn is_break(self) -> bool {
        matches!(self, TimerMode::ShortBreak | TimerMode::LongBreak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_durations() {
        assert_eq!(TimerMode::Focus.duration_secs(), 1500);
        assert_eq!(TimerMode::ShortBreak.duration_secs(), 300);
        assert_eq!(TimerMode::LongBreak.duration_secs(), 900);
    }

    #[test]
    fn mode_serde_names_are_camel_case() {
        assert_eq!(
            serde_json::to_string(&TimerMode::ShortBreak).unwrap(),
            "\"shortBreak\""
        );
        let mode: TimerMode = serde_json::from_str("\"longBreak\"").unwrap();
        assert_eq!(mode, TimerMode::LongBreak);
    }
}
