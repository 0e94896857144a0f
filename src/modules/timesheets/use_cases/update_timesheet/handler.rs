// Update command handler orchestrates the fetch, merge and write flow.
//
// Responsibilities
// - Load the current record; report None when it does not exist.
// - Let the decider validate the present fields and build the change set.
// - Write the change set in one store call.
//
// Two concurrent updates of the same record race; the later write wins for
// every column both of them touch.

use std::sync::Arc;

use crate::modules::timesheets::adapters::outbound::timesheet_store::TimesheetStore;
use crate::modules::timesheets::core::record::TimesheetRecord;
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::modules::timesheets::use_cases::update_timesheet::command::UpdateTimesheet;
use crate::modules::timesheets::use_cases::update_timesheet::decide::decide_update;
use crate::modules::timesheets::use_cases::update_timesheet::decision::Decision;

pub struct UpdateTimesheetHandler<TStore>
where
    TStore: TimesheetStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UpdateTimesheetHandler<TStore>
where
    TStore: TimesheetStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: UpdateTimesheet,
    ) -> Result<Option<TimesheetRecord>, ApplicationError> {
        let id = command.id;
        if self.store.select_by_id(id).await?.is_none() {
            tracing::debug!(timesheet_id = id, "timesheet to update not found");
            return Ok(None);
        }

        match decide_update(command) {
            Decision::Accepted { changes } => {
                let recomputed = changes.touches_window();
                let updated = self.store.update_by_id(id, changes).await?;
                if updated.is_some() {
                    tracing::info!(
                        timesheet_id = id,
                        duration_recomputed = recomputed,
                        "timesheet updated"
                    );
                }
                Ok(updated)
            }
            Decision::Rejected { reason } => {
                tracing::warn!(timesheet_id = id, %reason, "timesheet update rejected");
                Err(ApplicationError::Validation(reason))
            }
        }
    }
}
