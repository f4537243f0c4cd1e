//! Pomodoro engine implementation.
//!
//! The engine is a caller-driven state machine. It does not use internal
//! threads - the caller is responsible for calling `tick()` once per second
//! while the timer runs.
//!
//! ## State Transitions
//!
//! ```text
//! Idle(mode) -> Running(mode) -> Idle(mode | next_mode)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = PomodoroEngine::new(store, notifier)?;
//! engine.start();
//! // Once per second:
//! engine.tick(); // Returns Some(Event::SessionCompleted) when the countdown ends
//! ```

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::session::TimerSession;
use super::TimerMode;
use crate::error::Result;
use crate::events::Event;
use crate::notify::Notifier;
use crate::storage::SessionStore;

/// Focus sessions per long-break cycle.
const SESSIONS_PER_CYCLE: u64 = 4;

/// Serializable transient state, used to carry the engine across CLI
/// invocations. The session history is not part of it; that is owned by
/// the store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineState {
    pub mode: TimerMode,
    pub time_left: u32,
    pub is_running: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            mode: TimerMode::Focus,
            time_left: TimerMode::Focus.duration_secs(),
            is_running: false,
        }
    }
}

/// Pomodoro state machine.
///
/// Holds the current mode, the remaining whole seconds, and the completed
/// session history restored from the injected [`SessionStore`]. Side
/// effects on completion go through the injected [`Notifier`] and are
/// never required for correctness.
pub struct PomodoroEngine<S: SessionStore, N: Notifier> {
    mode: TimerMode,
    time_left: u32,
    is_running: bool,
    history: Vec<TimerSession>,
    store: S,
    notifier: N,
}

impl<S: SessionStore, N: Notifier> PomodoroEngine<S, N> {
    /// Create a fresh engine in `Idle(Focus)` with the history restored
    /// from the store.
    pub fn new(store: S, notifier: N) -> Result<Self> {
        Self::with_state(EngineState::default(), store, notifier)
    }

    /// Restore an engine from a previously saved transient state.
    pub fn with_state(state: EngineState, store: S, notifier: N) -> Result<Self> {
        let history = store.load()?;
        Ok(Self {
            mode: state.mode,
            time_left: state.time_left,
            is_running: state.is_running,
            history,
            store,
            notifier,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn history(&self) -> &[TimerSession] {
        &self.history
    }

    /// All-time count of completed focus sessions.
    pub fn total_focus_sessions(&self) -> u64 {
        self.history
            .iter()
            .filter(|s| s.mode == TimerMode::Focus)
            .count() as u64
    }

    /// Focus sessions completed on the given calendar day.
    pub fn completed_focus_on(&self, day: NaiveDate) -> u64 {
        self.history
            .iter()
            .filter(|s| s.mode == TimerMode::Focus && s.completed_on(day))
            .count() as u64
    }

    /// Focus sessions completed today.
    pub fn completed_focus_today(&self) -> u64 {
        self.completed_focus_on(Utc::now().date_naive())
    }

    /// 0.0 .. 1.0 progress within the current countdown.
    pub fn progress(&self) -> f64 {
        let total = self.mode.duration_secs();
        let elapsed = total.saturating_sub(self.time_left);
        (f64::from(elapsed) / f64::from(total)).clamp(0.0, 1.0)
    }

    /// Serializable transient state for persistence across invocations.
    pub fn state(&self) -> EngineState {
        EngineState {
            mode: self.mode,
            time_left: self.time_left,
            is_running: self.is_running,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            mode: self.mode,
            time_left: self.time_left,
            total_secs: self.mode.duration_secs(),
            is_running: self.is_running,
            progress: self.progress(),
            completed_today: self.completed_focus_today(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start the countdown. No-op when already running.
    pub fn start(&mut self) -> Option<Event> {
        if self.is_running {
            return None;
        }
        self.notifier.request_permission();
        self.is_running = true;
        Some(Event::TimerStarted {
            mode: self.mode,
            time_left: self.time_left,
            at: Utc::now(),
        })
    }

    /// Stop the countdown, keeping the remaining time. No-op when idle.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.is_running {
            return None;
        }
        self.is_running = false;
        Some(Event::TimerPaused {
            mode: self.mode,
            time_left: self.time_left,
            at: Utc::now(),
        })
    }

    /// Stop and restore the current mode's canonical duration. Never
    /// changes mode.
    pub fn reset(&mut self) -> Event {
        self.is_running = false;
        self.time_left = self.mode.duration_secs();
        Event::TimerReset {
            mode: self.mode,
            time_left: self.time_left,
            at: Utc::now(),
        }
    }

    /// Switch to another mode. Rejected while running: the caller must
    /// pause first.
    pub fn select_mode(&mut self, mode: TimerMode) -> Option<Event> {
        if self.is_running {
            return None;
        }
        self.mode = mode;
        self.time_left = mode.duration_secs();
        Some(Event::ModeSelected {
            mode,
            time_left: self.time_left,
            at: Utc::now(),
        })
    }

    /// Advance one second. Call once per second while running. Returns
    /// `Some(Event::SessionCompleted)` when the countdown reaches zero.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_running {
            return None;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            return Some(self.complete());
        }
        None
    }

    /// Advance to the next mode without credit. No session record is
    /// written.
    pub fn skip(&mut self) -> Event {
        let from = self.mode;
        // The forfeited session still counts toward the long-break cycle.
        let n = self.total_focus_sessions() + 1;
        let to = Self::next_mode(from, n);
        self.is_running = false;
        self.mode = to;
        self.time_left = to.duration_secs();
        Event::TimerSkipped {
            from,
            to,
            at: Utc::now(),
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Countdown exhausted: record the session, advance the mode, fire
    /// best-effort notifications.
    fn complete(&mut self) -> Event {
        let finished = self.mode;
        let session = TimerSession {
            mode: finished,
            duration: finished.duration_secs(),
            completed_at: Utc::now(),
        };
        // The in-memory history survives a failed write.
        if let Err(e) = self.store.append(&session) {
            eprintln!("warning: failed to persist session: {e}");
        }
        let at = session.completed_at;
        self.history.push(session);

        // The count includes the session just pushed.
        let next = Self::next_mode(finished, self.total_focus_sessions());
        self.is_running = false;
        self.mode = next;
        self.time_left = next.duration_secs();

        self.notifier.play_sound();
        self.notifier.notify(
            &format!("{} completed!", finished.label()),
            &format!("Time for {}", next.label().to_lowercase()),
        );

        Event::SessionCompleted {
            mode: finished,
            next_mode: next,
            focus_sessions: self.total_focus_sessions(),
            at,
        }
    }

    /// Mode-advance rule shared by completion and skip.
    ///
    /// `focus_count` includes the focus session just finishing. Every
    /// fourth focus session leads into a long break, otherwise a short
    /// break. Any break leads back to focus.
    fn next_mode(finished: TimerMode, focus_count: u64) -> TimerMode {
        match finished {
            TimerMode::Focus => {
                if focus_count % SESSIONS_PER_CYCLE == 0 {
                    TimerMode::LongBreak
                } else {
                    TimerMode::ShortBreak
                }
            }
            TimerMode::ShortBreak | TimerMode::LongBreak => TimerMode::Focus,
        }
    }
}
