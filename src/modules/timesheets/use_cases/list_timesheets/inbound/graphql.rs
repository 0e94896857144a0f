use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::timesheets::adapters::inbound::gql_timesheet::GqlTimesheet;
use crate::modules::timesheets::use_cases::list_timesheets::query::ListTimesheets;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListTimesheetsQuery;

#[Object]
impl ListTimesheetsQuery {
    /// Newest first. `query` matches name or ticket reference, ignoring case.
    async fn timesheets(
        &self,
        context: &Context<'_>,
        query: Option<String>,
        category: Option<String>,
    ) -> GqlResult<Vec<GqlTimesheet>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .list_handler
            .handle(ListTimesheets { query, category })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
