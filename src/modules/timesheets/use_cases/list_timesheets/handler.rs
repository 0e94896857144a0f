use std::sync::Arc;

use crate::modules::timesheets::adapters::outbound::timesheet_store::TimesheetStore;
use crate::modules::timesheets::core::record::TimesheetRecord;
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::modules::timesheets::use_cases::list_timesheets::filter::build_filter;
use crate::modules::timesheets::use_cases::list_timesheets::query::ListTimesheets;

pub struct ListTimesheetsHandler<TStore>
where
    TStore: TimesheetStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListTimesheetsHandler<TStore>
where
    TStore: TimesheetStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: ListTimesheets,
    ) -> Result<Vec<TimesheetRecord>, ApplicationError> {
        let filter = build_filter(&query).inspect_err(|reason| {
            tracing::warn!(%reason, "timesheet search rejected");
        })?;
        let records = self.store.select_where(&filter).await?;
        tracing::debug!(
            text = filter.text(),
            category = filter.category().map(|c| c.label()),
            count = records.len(),
            "timesheets listed"
        );
        Ok(records)
    }
}
