use std::sync::Arc;

use crate::modules::timesheets::adapters::outbound::timesheet_store::TimesheetStore;
use crate::modules::timesheets::use_cases::delete_timesheet::command::DeleteTimesheet;
use crate::modules::timesheets::use_cases::errors::ApplicationError;

pub struct DeleteTimesheetHandler<TStore>
where
    TStore: TimesheetStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteTimesheetHandler<TStore>
where
    TStore: TimesheetStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// True when a record existed and was removed. Deleting an unknown id is
    /// not an error.
    pub async fn handle(&self, command: DeleteTimesheet) -> Result<bool, ApplicationError> {
        let affected = self.store.delete_by_id(command.id).await?;
        let deleted = affected > 0;
        if deleted {
            tracing::info!(timesheet_id = command.id, "timesheet deleted");
        }
        Ok(deleted)
    }
}
