use super::backend::StorageBackend;
use crate::error::{Result, WordbookError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since stores are single-threaded.
/// Clones share the same blobs, which lets two `EntryStore`s act like two
/// browser tabs over one medium.
#[derive(Clone, Default)]
pub struct MemBackend {
    blobs: Rc<RefCell<HashMap<String, String>>>,
    simulate_write_error: Rc<RefCell<bool>>,
    writes: Rc<RefCell<usize>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing rollback.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Put a raw blob in place, bypassing any store (e.g. to seed corrupt data).
    pub fn put_raw(&self, key: &str, blob: &str) {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
    }

    /// Current raw blob, as the medium holds it.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, blob: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(WordbookError::Storage("Simulated write error".to_string()));
        }
        self.put_raw(key, blob);
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn location(&self, key: &str) -> String {
        format!("memory://{}", key)
    }
}
