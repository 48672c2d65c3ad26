use std::collections::HashMap;
use std::sync::Mutex;

use super::{KvStore, StoreError};

/// In-memory `KvStore`. The default under test, and the fallback when
/// the on-disk store cannot be opened.
#[derive(Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let slots = self.slots.lock().expect("store lock poisoned");
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut slots = self.slots.lock().expect("store lock poisoned");
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
