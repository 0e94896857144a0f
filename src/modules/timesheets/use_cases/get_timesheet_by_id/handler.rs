use std::sync::Arc;

use crate::modules::timesheets::adapters::outbound::timesheet_store::TimesheetStore;
use crate::modules::timesheets::core::record::TimesheetRecord;
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::modules::timesheets::use_cases::get_timesheet_by_id::query::GetTimesheetById;

pub struct GetTimesheetByIdHandler<TStore>
where
    TStore: TimesheetStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> GetTimesheetByIdHandler<TStore>
where
    TStore: TimesheetStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// `Ok(None)` when no record has the identifier.
    pub async fn handle(
        &self,
        query: GetTimesheetById,
    ) -> Result<Option<TimesheetRecord>, ApplicationError> {
        let found = self.store.select_by_id(query.id).await?;
        tracing::debug!(timesheet_id = query.id, found = found.is_some(), "timesheet lookup");
        Ok(found)
    }
}
