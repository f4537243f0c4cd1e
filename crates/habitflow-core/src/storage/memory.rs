//! In-memory session store for tests and ephemeral use.

use std::cell::RefCell;
use std::rc::Rc;

use super::SessionStore;
use crate::error::StorageError;
use crate::timer::TimerSession;

/// Session store backed by a shared in-memory vector.
///
/// Clones share the same underlying storage, so a test can keep a handle
/// while the engine owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sessions: Rc<RefCell<Vec<TimerSession>>>,
}

impl MemoryStore {
    /// Create a store pre-seeded with an existing history.
    pub fn with_sessions(sessions: Vec<TimerSession>) -> Self {
        Self {
            sessions: Rc::new(RefCell::new(sessions)),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Vec<TimerSession>, StorageError> {
        Ok(self.sessions.borrow().clone())
    }

    fn append(&self, session: &TimerSession) -> Result<(), StorageError> {
        self.sessions.borrow_mut().push(session.clone());
        Ok(())
    }
}
