use std::sync::Arc;

use crate::modules::timesheets::adapters::outbound::timesheet_store::TimesheetStore;
use crate::modules::timesheets::core::record::TimesheetRecord;
use crate::modules::timesheets::use_cases::create_timesheet::command::CreateTimesheet;
use crate::modules::timesheets::use_cases::create_timesheet::decide::decide_create;
use crate::modules::timesheets::use_cases::create_timesheet::decision::Decision;
use crate::modules::timesheets::use_cases::errors::ApplicationError;

pub struct CreateTimesheetHandler<TStore>
where
    TStore: TimesheetStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateTimesheetHandler<TStore>
where
    TStore: TimesheetStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: CreateTimesheet,
    ) -> Result<TimesheetRecord, ApplicationError> {
        match decide_create(command) {
            Decision::Accepted { record } => {
                let stored = self.store.insert(record).await?;
                tracing::info!(
                    timesheet_id = stored.id,
                    duration_seconds = stored.duration_seconds,
                    "timesheet created"
                );
                Ok(stored)
            }
            Decision::Rejected { reason } => {
                tracing::warn!(%reason, "timesheet creation rejected");
                Err(ApplicationError::Validation(reason))
            }
        }
    }
}
