use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use habitflow_core::habit::{
    aggregate_stats, category_breakdown, daily_completion_rate, monthly_progress,
};
use habitflow_core::Habit;
use serde::Serialize;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Aggregate stats over the collection
    Summary {
        /// JSON export of habit records
        #[arg(long)]
        file: PathBuf,
    },
    /// Per-habit monthly completion percentage
    Progress {
        #[arg(long)]
        file: PathBuf,
        /// Month to evaluate as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// Per-category totals
    Categories {
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Serialize)]
struct ProgressRow {
    id: String,
    name: String,
    monthly_progress: u8,
}

fn load_habits(path: &Path) -> Result<Vec<Habit>, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn parse_month(month: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
        .map_err(|_| format!("invalid month '{month}' (expected YYYY-MM)").into())
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        HabitAction::Summary { file } => {
            let habits = load_habits(&file)?;
            let mut summary = serde_json::to_value(aggregate_stats(&habits, Utc::now()))?;
            summary["daily_completion_rate"] = daily_completion_rate(&habits).into();
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        HabitAction::Progress { file, month } => {
            let habits = load_habits(&file)?;
            let reference = match month {
                Some(m) => parse_month(&m)?,
                None => Utc::now().date_naive(),
            };
            let rows: Vec<ProgressRow> = habits
                .iter()
                .map(|h| ProgressRow {
                    id: h.id.clone(),
                    name: h.name.clone(),
                    monthly_progress: monthly_progress(h, reference),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        HabitAction::Categories { file } => {
            let habits = load_habits(&file)?;
            let breakdown = category_breakdown(&habits);
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        }
    }
    Ok(())
}
