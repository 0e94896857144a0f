use async_graphql::{Context, Object, Result as GqlResult};
use chrono::{DateTime, Utc};

use crate::modules::timesheets::adapters::inbound::gql_timesheet::GqlTimesheet;
use crate::modules::timesheets::use_cases::create_timesheet::command::CreateTimesheet;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateTimesheetMutation;

#[Object]
impl CreateTimesheetMutation {
    #[allow(clippy::too_many_arguments)]
    async fn create_timesheet(
        &self,
        context: &Context<'_>,
        name: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        category: String,
        ticket_reference: Option<String>,
        line_item_count: i64,
    ) -> GqlResult<GqlTimesheet> {
        let state = context.data_unchecked::<AppState>();

        let command = CreateTimesheet {
            name,
            start_time,
            end_time,
            category,
            ticket_reference,
            line_item_count,
            requested_at: Utc::now(),
        };

        let record = state
            .create_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(record.into())
    }
}
