//! # Habitflow Core Library
//!
//! Core business logic for Habitflow, a habit tracker with a built-in
//! Pomodoro timer. The library is CLI-first: all operations are available
//! through the standalone `habitflow-cli` binary, and any GUI shell is a
//! thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Habit progress**: pure functions over remote-owned habit records
//!   (streak/completion math); this crate never mutates or persists habits
//! - **Pomodoro engine**: a caller-driven state machine. The caller invokes
//!   `tick()` once per second; there are no internal threads
//! - **Storage**: SQLite key-value persistence for the session history and
//!   TOML-based configuration
//! - **Notify**: capability port for best-effort sound and desktop
//!   notifications; failures never affect timer transitions
//!
//! ## Key Components
//!
//! - [`PomodoroEngine`]: timer state machine
//! - [`Habit`]: read-only view of a remote habit record
//! - [`Database`]: session history persistence
//! - [`Config`]: application configuration management

pub mod config;
pub mod error;
pub mod events;
pub mod habit;
pub mod notify;
pub mod storage;
pub mod timer;

pub use config::Config;
pub use error::{ConfigError, CoreError, StorageError};
pub use events::Event;
pub use habit::{AggregateStats, CategoryStats, Frequency, Habit};
pub use notify::{ConsoleNotifier, NoopNotifier, Notifier};
pub use storage::{Database, MemoryStore, SessionStore};
pub use timer::{EngineState, PomodoroEngine, SessionStats, TimerMode, TimerSession};
