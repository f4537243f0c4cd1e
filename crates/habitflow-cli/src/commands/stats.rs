use chrono::Utc;
use clap::Subcommand;
use habitflow_core::storage::{Database, SessionStore};
use habitflow_core::timer::SessionStats;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's sessions
    Today,
    /// All-time sessions
    All,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let sessions = db.load()?;

    let stats = match action {
        StatsAction::Today => SessionStats::for_day(&sessions, Utc::now().date_naive()),
        StatsAction::All => SessionStats::compute(&sessions),
    };
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
