// src/store.rs
//! Owns the record list and mirrors every change to disk through the
//! storage adapter. One instance per process, shared via `Arc` in the
//! router state.

use std::path::PathBuf;
use std::sync::Mutex;

use crate::record::Record;
use crate::storage;

/// The stored collection lives under this key; it doubles as the file stem
/// on disk and must not change without migrating user data.
pub const RECORDS_KEY: &str = "trade_checklist_records_v1";

#[derive(Debug)]
pub struct RecordStore {
    inner: Mutex<Vec<Record>>,
    path: PathBuf,
}

impl RecordStore {
    /// Load the persisted list from `path`, falling back to empty when the
    /// file is absent or unreadable.
    pub fn open(path: PathBuf) -> Self {
        let records: Vec<Record> = storage::load_or(&path, Vec::new());
        Self {
            inner: Mutex::new(records),
            path,
        }
    }

    /// Prepend a record; the list renders newest-first by insertion order.
    pub fn add(&self, record: Record) {
        let mut v = self.inner.lock().expect("record store mutex poisoned");
        v.insert(0, record);
        storage::save(&self.path, &*v);
    }

    /// Remove the record with the given id. No-op when absent.
    pub fn remove(&self, id: &str) {
        let mut v = self.inner.lock().expect("record store mutex poisoned");
        let before = v.len();
        v.retain(|r| r.id != id);
        if v.len() != before {
            storage::save(&self.path, &*v);
        }
    }

    /// Replace the single matching record with `transform(record)`.
    /// No-op when absent. Returns the transformed record when one matched.
    pub fn update<F>(&self, id: &str, transform: F) -> Option<Record>
    where
        F: FnOnce(Record) -> Record,
    {
        let mut v = self.inner.lock().expect("record store mutex poisoned");
        let idx = v.iter().position(|r| r.id == id)?;
        let updated = transform(v[idx].clone());
        v[idx] = updated.clone();
        storage::save(&self.path, &*v);
        Some(updated)
    }

    /// Empty the list. The confirm-before-clear gate lives in the UI, not
    /// here.
    pub fn clear(&self) {
        let mut v = self.inner.lock().expect("record store mutex poisoned");
        v.clear();
        storage::save(&self.path, &*v);
    }

    /// Clone of the current list, newest first.
    pub fn snapshot(&self) -> Vec<Record> {
        self.inner
            .lock()
            .expect("record store mutex poisoned")
            .clone()
    }

    pub fn get(&self, id: &str) -> Option<Record> {
        self.inner
            .lock()
            .expect("record store mutex poisoned")
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }
}
