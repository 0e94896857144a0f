use async_graphql::{EmptySubscription, MergedObject, Object, Schema, SimpleObject};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use chrono::{DateTime, Utc};

use crate::modules::timesheets::use_cases::create_timesheet::inbound::graphql::CreateTimesheetMutation;
use crate::modules::timesheets::use_cases::delete_timesheet::inbound::graphql::DeleteTimesheetMutation;
use crate::modules::timesheets::use_cases::get_timesheet_by_id::inbound::graphql::GetTimesheetByIdQuery;
use crate::modules::timesheets::use_cases::list_timesheets::inbound::graphql::ListTimesheetsQuery;
use crate::modules::timesheets::use_cases::update_timesheet::inbound::graphql::UpdateTimesheetMutation;
pub use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct Health {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Default)]
pub struct HealthcheckQuery;

#[Object]
impl HealthcheckQuery {
    async fn healthcheck(&self) -> Health {
        Health {
            status: "ok".to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListTimesheetsQuery, GetTimesheetByIdQuery, HealthcheckQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    CreateTimesheetMutation,
    UpdateTimesheetMutation,
    DeleteTimesheetMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
