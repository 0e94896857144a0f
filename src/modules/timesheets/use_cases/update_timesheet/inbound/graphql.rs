use async_graphql::{Context, MaybeUndefined, Object, Result as GqlResult};
use chrono::{DateTime, Utc};

use crate::modules::timesheets::adapters::inbound::gql_timesheet::GqlTimesheet;
use crate::modules::timesheets::use_cases::update_timesheet::command::UpdateTimesheet;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateTimesheetMutation;

#[Object]
impl UpdateTimesheetMutation {
    /// Null when no record has the id. Pass `ticketReference: null` to clear
    /// the ticket; leave the argument out to keep it.
    #[allow(clippy::too_many_arguments)]
    async fn update_timesheet(
        &self,
        context: &Context<'_>,
        id: i64,
        name: Option<String>,
        start_time: Option<DateTime<Utc>>,
        end_time: Option<DateTime<Utc>>,
        category: Option<String>,
        ticket_reference: MaybeUndefined<String>,
        line_item_count: Option<i64>,
    ) -> GqlResult<Option<GqlTimesheet>> {
        let state = context.data_unchecked::<AppState>();

        let ticket_reference = match ticket_reference {
            MaybeUndefined::Undefined => None,
            MaybeUndefined::Null => Some(None),
            MaybeUndefined::Value(value) => Some(Some(value)),
        };

        let command = UpdateTimesheet {
            id,
            name,
            start_time,
            end_time,
            category,
            ticket_reference,
            line_item_count,
            requested_at: Utc::now(),
        };

        let updated = state
            .update_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(updated.map(Into::into))
    }
}
