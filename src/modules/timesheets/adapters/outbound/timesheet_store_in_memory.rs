// In memory implementation of the TimesheetStore port.
//
// Purpose
// - Back the service and its tests without a database.
//
// Responsibilities
// - Assign identifiers from a sequence that never hands out the same value twice.
// - Keep each call atomic behind a single lock.
// - Order search results the way the relational store would.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use crate::modules::timesheets::adapters::outbound::timesheet_store::{StoreError, TimesheetStore};
use crate::modules::timesheets::core::changes::TimesheetChanges;
use crate::modules::timesheets::core::record::{NewTimesheetRecord, TimesheetId, TimesheetRecord};
use crate::modules::timesheets::use_cases::list_timesheets::filter::TimesheetFilter;

#[derive(Default)]
struct Table {
    rows: BTreeMap<TimesheetId, TimesheetRecord>,
    last_id: TimesheetId,
}

#[derive(Default)]
pub struct InMemoryTimesheetStore {
    table: RwLock<Table>,
    is_offline: bool,
}

impl InMemoryTimesheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Timesheet store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TimesheetStore for InMemoryTimesheetStore {
    async fn insert(&self, record: NewTimesheetRecord) -> Result<TimesheetRecord, StoreError> {
        self.ensure_online()?;

        let mut table = self.table.write().await;
        table.last_id += 1;
        let stored = record.into_record(table.last_id);
        table.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn select_by_id(&self, id: TimesheetId) -> Result<Option<TimesheetRecord>, StoreError> {
        self.ensure_online()?;

        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn select_where(
        &self,
        filter: &TimesheetFilter,
    ) -> Result<Vec<TimesheetRecord>, StoreError> {
        self.ensure_online()?;

        let table = self.table.read().await;
        let mut items: Vec<TimesheetRecord> = table
            .rows
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        items.sort_by(TimesheetFilter::newest_first);
        Ok(items)
    }

    async fn update_by_id(
        &self,
        id: TimesheetId,
        changes: TimesheetChanges,
    ) -> Result<Option<TimesheetRecord>, StoreError> {
        self.ensure_online()?;

        let mut table = self.table.write().await;
        let Some(record) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        changes.apply_to(record);
        Ok(Some(record.clone()))
    }

    async fn delete_by_id(&self, id: TimesheetId) -> Result<u64, StoreError> {
        self.ensure_online()?;

        let removed = self.table.write().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}
