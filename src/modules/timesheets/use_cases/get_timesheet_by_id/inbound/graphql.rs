use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::timesheets::adapters::inbound::gql_timesheet::GqlTimesheet;
use crate::modules::timesheets::use_cases::get_timesheet_by_id::query::GetTimesheetById;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct GetTimesheetByIdQuery;

#[Object]
impl GetTimesheetByIdQuery {
    async fn timesheet(&self, context: &Context<'_>, id: i64) -> GqlResult<Option<GqlTimesheet>> {
        let state = context.data_unchecked::<AppState>();
        let found = state
            .get_handler
            .handle(GetTimesheetById { id })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(found.map(Into::into))
    }
}
