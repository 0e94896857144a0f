// Port to the persistent record store.
//
// Every method is a single round trip. Implementations own identifier
// assignment and must return select_where results newest first
// (created_at desc, then id desc).

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::timesheets::core::changes::TimesheetChanges;
use crate::modules::timesheets::core::record::{NewTimesheetRecord, TimesheetId, TimesheetRecord};
use crate::modules::timesheets::use_cases::list_timesheets::filter::TimesheetFilter;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TimesheetStore: Send + Sync {
    async fn insert(&self, record: NewTimesheetRecord) -> Result<TimesheetRecord, StoreError>;

    async fn select_by_id(&self, id: TimesheetId) -> Result<Option<TimesheetRecord>, StoreError>;

    async fn select_where(
        &self,
        filter: &TimesheetFilter,
    ) -> Result<Vec<TimesheetRecord>, StoreError>;

    /// Writes only the fields present in `changes`, and re-derives the duration
    /// from the written row when a bound moves. None when the id is unknown.
    async fn update_by_id(
        &self,
        id: TimesheetId,
        changes: TimesheetChanges,
    ) -> Result<Option<TimesheetRecord>, StoreError>;

    /// Number of rows removed.
    async fn delete_by_id(&self, id: TimesheetId) -> Result<u64, StoreError>;
}
