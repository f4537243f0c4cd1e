use clap::Subcommand;
use habitflow_core::storage::Database;
use habitflow_core::timer::{EngineState, PomodoroEngine, TimerMode};
use habitflow_core::ConsoleNotifier;

const STATE_KEY: &str = "timer_state";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Reset the current mode to its full duration
    Reset,
    /// Skip to the next mode without credit
    Skip,
    /// Advance the countdown by whole seconds
    Tick {
        /// Seconds to advance
        #[arg(long, default_value = "1")]
        seconds: u32,
    },
    /// Switch mode (focus, short-break, long-break); pause first
    Select {
        #[arg(value_parser = parse_mode)]
        mode: TimerMode,
    },
    /// Print current timer state as JSON
    Status,
}

fn parse_mode(s: &str) -> Result<TimerMode, String> {
    match s {
        "focus" => Ok(TimerMode::Focus),
        "short-break" | "shortBreak" => Ok(TimerMode::ShortBreak),
        "long-break" | "longBreak" => Ok(TimerMode::LongBreak),
        other => Err(format!(
            "unknown mode '{other}' (expected focus, short-break, or long-break)"
        )),
    }
}

fn load_state(db: &Database) -> EngineState {
    if let Ok(Some(json)) = db.kv_get(STATE_KEY) {
        if let Ok(state) = serde_json::from_str::<EngineState>(&json) {
            return state;
        }
    }
    EngineState::default()
}

fn save_state(db: &Database, state: &EngineState) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(state)?;
    db.kv_set(STATE_KEY, &json)?;
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let state = load_state(&db);
    let mut engine = PomodoroEngine::with_state(state, &db, ConsoleNotifier)?;

    let event = match action {
        TimerAction::Start => engine.start(),
        TimerAction::Pause => engine.pause(),
        TimerAction::Reset => Some(engine.reset()),
        TimerAction::Skip => Some(engine.skip()),
        TimerAction::Tick { seconds } => {
            let mut last = None;
            for _ in 0..seconds {
                if let Some(event) = engine.tick() {
                    last = Some(event);
                }
            }
            last
        }
        TimerAction::Select { mode } => {
            let event = engine.select_mode(mode);
            if event.is_none() {
                eprintln!("cannot switch modes while running; pause first");
            }
            event
        }
        TimerAction::Status => Some(engine.snapshot()),
    };

    match event {
        Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
        // Rejected or no-op input: show the unchanged state instead.
        None => println!("{}", serde_json::to_string_pretty(&engine.snapshot())?),
    }

    save_state(&db, &engine.state())?;
    Ok(())
}
