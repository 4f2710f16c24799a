// File: crates/chart-data/src/store.rs
// Summary: Record store contract plus in-memory and JSON-file implementations.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::{NewRecord, Record};

/// CRUD surface the dashboard consumes. Ids are issued by the store,
/// start at 1 and are never reused, not even after `clear`.
pub trait RecordStore {
    /// Every record, in id order.
    fn list(&self) -> Result<Vec<Record>>;
    fn insert(&mut self, record: NewRecord) -> Result<u64>;
    /// Remove `id`; `Ok(false)` when no such record exists.
    fn delete(&mut self, id: u64) -> Result<bool>;
    fn clear(&mut self) -> Result<()>;

    fn insert_many(&mut self, records: Vec<NewRecord>) -> Result<Vec<u64>> {
        records.into_iter().map(|r| self.insert(r)).collect()
    }
}

#[derive(Clone, Debug)]
pub struct MemoryStore {
    next_id: u64,
    records: BTreeMap<u64, Record>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self { next_id: 1, records: BTreeMap::new() }
    }
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

impl RecordStore for MemoryStore {
    fn list(&self) -> Result<Vec<Record>> {
        Ok(self.records.values().cloned().collect())
    }

    fn insert(&mut self, record: NewRecord) -> Result<u64> {
        let id = self.next_id;
        self.next_id += 1;
        self.records.insert(id, record.into_record(id));
        Ok(id)
    }

    fn delete(&mut self, id: u64) -> Result<bool> {
        Ok(self.records.remove(&id).is_some())
    }

    fn clear(&mut self) -> Result<()> {
        self.records.clear();
        Ok(())
    }
}

/// On-disk layout of a `JsonFileStore`.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    next_id: u64,
    records: Vec<Record>,
}

/// Store persisted as one JSON document, atomically replaced after every mutation.
/// A missing file opens as an empty store and is created on first write.
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let inner = if path.exists() {
            let snap: Snapshot = serde_json::from_slice(&std::fs::read(&path)?)?;
            let records: BTreeMap<u64, Record> = snap.records.into_iter().map(|r| (r.id, r)).collect();
            // never hand out an id that is already on disk
            let next_id = snap.next_id.max(records.keys().next_back().map_or(1, |id| id + 1));
            log::debug!("opened {} with {} records", path.display(), records.len());
            MemoryStore { next_id, records }
        } else {
            log::debug!("{} does not exist yet; starting empty", path.display());
            MemoryStore::new()
        };
        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path { &self.path }

    /// Apply `op` to a copy of the records, write the copy, and only then
    /// adopt it. A failed write leaves both memory and disk untouched.
    fn commit<T>(&mut self, op: impl FnOnce(&mut MemoryStore) -> Result<T>) -> Result<T> {
        let mut next = self.inner.clone();
        let out = op(&mut next)?;
        write_snapshot(&self.path, &next)?;
        self.inner = next;
        Ok(out)
    }
}

/// Write to a sibling temp file, then rename over `path`.
fn write_snapshot(path: &Path, store: &MemoryStore) -> Result<()> {
    let snap = Snapshot {
        next_id: store.next_id,
        records: store.records.values().cloned().collect(),
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    std::fs::write(&tmp, serde_json::to_vec_pretty(&snap)?)?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    log::debug!("saved {} records to {}", snap.records.len(), path.display());
    Ok(())
}

impl RecordStore for JsonFileStore {
    fn list(&self) -> Result<Vec<Record>> {
        self.inner.list()
    }

    fn insert(&mut self, record: NewRecord) -> Result<u64> {
        self.commit(|m| m.insert(record))
    }

    fn delete(&mut self, id: u64) -> Result<bool> {
        if !self.inner.records.contains_key(&id) {
            return Ok(false);
        }
        self.commit(|m| m.delete(id))
    }

    fn clear(&mut self) -> Result<()> {
        self.commit(|m| m.clear())
    }

    /// One rewrite for the whole batch.
    fn insert_many(&mut self, records: Vec<NewRecord>) -> Result<Vec<u64>> {
        self.commit(|m| records.into_iter().map(|r| m.insert(r)).collect())
    }
}
