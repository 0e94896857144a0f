use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::timesheets::use_cases::delete_timesheet::command::DeleteTimesheet;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteTimesheetMutation;

#[Object]
impl DeleteTimesheetMutation {
    /// True when a record was removed, false when none had the id.
    async fn delete_timesheet(&self, context: &Context<'_>, id: i64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .delete_handler
            .handle(DeleteTimesheet { id })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }
}
