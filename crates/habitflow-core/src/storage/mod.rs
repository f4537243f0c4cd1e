pub mod database;
pub mod memory;

pub use database::Database;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::StorageError;
use crate::timer::TimerSession;

/// Persistence port for the completed-session history.
///
/// The history is a single ordered, append-only sequence. `append`
/// rewrites the whole serialized sequence; there are no incremental
/// writes and no deletes.
pub trait SessionStore {
    fn load(&self) -> Result<Vec<TimerSession>, StorageError>;
    fn append(&self, session: &TimerSession) -> Result<(), StorageError>;
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn load(&self) -> Result<Vec<TimerSession>, StorageError> {
        (**self).load()
    }

    fn append(&self, session: &TimerSession) -> Result<(), StorageError> {
        (**self).append(session)
    }
}

/// Directory holding the database and config file, created on demand.
///
/// Normally `~/.config/habitflow/`. With `HABITFLOW_ENV=dev`,
/// development data is kept separately in `~/.config/habitflow-dev/`.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let name = match std::env::var("HABITFLOW_ENV").as_deref() {
        Ok("dev") => "habitflow-dev",
        _ => "habitflow",
    };
    let dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join(name);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
