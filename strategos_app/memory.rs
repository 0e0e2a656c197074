//! In-memory battle history, used when no database is configured.
//!
//! Appends made through a Unit of Work stay pending until commit, so a rolled
//! back command leaves the store untouched.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard},
};

use strategos_types::{
    battle::BattleRecord,
    errors::{AppError, ApplicationError},
};

use crate::{
    repository::HistoryRepository,
    uow::{UnitOfWork, UnitOfWorkProvider},
};

/// Oldest records are dropped beyond this many.
pub const DEFAULT_MEMORY_CAPACITY: usize = 10_000;

type Shared<T> = Arc<Mutex<T>>;

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, ApplicationError> {
    mutex
        .lock()
        .map_err(|e| AppError::HistoryUnavailable(e.to_string()).into())
}

#[derive(Clone)]
pub struct InMemoryUnitOfWorkProvider {
    records: Shared<VecDeque<BattleRecord>>,
    capacity: usize,
}

impl Default for InMemoryUnitOfWorkProvider {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MEMORY_CAPACITY)
    }
}

impl InMemoryUnitOfWorkProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Arc::new(Mutex::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }

    /// Number of committed records.
    pub fn len(&self) -> Result<usize, ApplicationError> {
        Ok(lock(&self.records)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, ApplicationError> {
        Ok(self.len()? == 0)
    }
}

#[async_trait::async_trait]
impl UnitOfWorkProvider for InMemoryUnitOfWorkProvider {
    async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
        Ok(Box::new(InMemoryUnitOfWork {
            repository: Arc::new(InMemoryHistoryRepository {
                records: self.records.clone(),
                pending: Arc::new(Mutex::new(Vec::new())),
            }),
            capacity: self.capacity,
        }))
    }
}

pub struct InMemoryUnitOfWork {
    repository: Arc<InMemoryHistoryRepository>,
    capacity: usize,
}

#[async_trait::async_trait]
impl<'a> UnitOfWork<'a> for InMemoryUnitOfWork {
    fn history(&self) -> Arc<dyn HistoryRepository + 'a> {
        self.repository.clone()
    }

    async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
        let pending = std::mem::take(&mut *lock(&self.repository.pending)?);
        let mut records = lock(&self.repository.records)?;
        records.extend(pending);
        while records.len() > self.capacity {
            records.pop_front();
        }
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
        lock(&self.repository.pending)?.clear();
        Ok(())
    }
}

pub struct InMemoryHistoryRepository {
    records: Shared<VecDeque<BattleRecord>>,
    pending: Shared<Vec<BattleRecord>>,
}

#[async_trait::async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn append(&self, record: &BattleRecord) -> Result<(), ApplicationError> {
        lock(&self.pending)?.push(record.clone());
        Ok(())
    }

    async fn recent(&self, limit: u32) -> Result<Vec<BattleRecord>, ApplicationError> {
        let records = lock(&self.records)?;
        let pending = lock(&self.pending)?;

        // Insertion order is chronological; ties on timestamp keep it.
        let mut all: Vec<BattleRecord> = records.iter().chain(pending.iter()).cloned().collect();
        all.reverse();
        all.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        all.truncate(limit as usize);
        Ok(all)
    }
}
