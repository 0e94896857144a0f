use crate::modules::timesheets::adapters::outbound::timesheet_store_in_memory::InMemoryTimesheetStore;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;

const CREATE_BOB: &str = r#"
    mutation {
        createTimesheet(
            name: "Bob"
            startTime: "2024-01-15T08:00:00Z"
            endTime: "2024-01-15T12:00:00Z"
            category: "Development & Testing"
            ticketReference: "BUG-123"
            lineItemCount: 3
        ) { id durationSeconds category ticketReference }
    }
"#;

#[fixture]
fn before_each() -> AppSchema {
    build_schema(AppState::new(Arc::new(InMemoryTimesheetStore::new())))
}

async fn execute(schema: &AppSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    response.data.into_json().unwrap()
}

#[rstest]
#[tokio::test]
async fn creates_and_reads_back_a_timesheet(before_each: AppSchema) {
    let schema = before_each;

    let created = execute(&schema, CREATE_BOB).await;
    assert_eq!(
        created["createTimesheet"],
        json!({
            "id": 1,
            "durationSeconds": 14400,
            "category": "Development & Testing",
            "ticketReference": "BUG-123",
        })
    );

    let fetched = execute(&schema, "{ timesheet(id: 1) { name lineItemCount } }").await;
    assert_eq!(
        fetched["timesheet"],
        json!({ "name": "Bob", "lineItemCount": 3 })
    );

    let missing = execute(&schema, "{ timesheet(id: 2) { name } }").await;
    assert_eq!(missing["timesheet"], Value::Null);
}

#[rstest]
#[tokio::test]
async fn distinguishes_a_null_ticket_from_an_absent_one(before_each: AppSchema) {
    let schema = before_each;
    execute(&schema, CREATE_BOB).await;

    let kept = execute(
        &schema,
        r#"mutation { updateTimesheet(id: 1, name: "Robert") { name ticketReference } }"#,
    )
    .await;
    assert_eq!(
        kept["updateTimesheet"],
        json!({ "name": "Robert", "ticketReference": "BUG-123" })
    );

    let cleared = execute(
        &schema,
        r#"mutation { updateTimesheet(id: 1, ticketReference: null) { name ticketReference } }"#,
    )
    .await;
    assert_eq!(
        cleared["updateTimesheet"],
        json!({ "name": "Robert", "ticketReference": null })
    );
}

#[rstest]
#[tokio::test]
async fn recomputes_the_duration_through_update(before_each: AppSchema) {
    let schema = before_each;
    execute(&schema, CREATE_BOB).await;

    let updated = execute(
        &schema,
        r#"mutation { updateTimesheet(id: 1, endTime: "2024-01-15T13:00:00Z") { durationSeconds } }"#,
    )
    .await;

    assert_eq!(updated["updateTimesheet"]["durationSeconds"], 5 * 60 * 60);
}

#[rstest]
#[tokio::test]
async fn searches_and_deletes(before_each: AppSchema) {
    let schema = before_each;
    execute(&schema, CREATE_BOB).await;

    let found = execute(&schema, r#"{ timesheets(query: "bug") { name } }"#).await;
    assert_eq!(found["timesheets"], json!([{ "name": "Bob" }]));

    let first = execute(&schema, "mutation { deleteTimesheet(id: 1) }").await;
    let second = execute(&schema, "mutation { deleteTimesheet(id: 1) }").await;
    assert_eq!(first["deleteTimesheet"], true);
    assert_eq!(second["deleteTimesheet"], false);

    let empty = execute(&schema, "{ timesheets { name } }").await;
    assert_eq!(empty["timesheets"], json!([]));
}

#[rstest]
#[tokio::test]
async fn reports_validation_failures_as_errors(before_each: AppSchema) {
    let schema = before_each;

    let response = schema
        .execute(
            r#"mutation {
                createTimesheet(
                    name: "Bob"
                    startTime: "2024-01-15T08:00:00Z"
                    endTime: "2024-01-15T12:00:00Z"
                    category: "Lunch"
                    lineItemCount: 1
                ) { id }
            }"#,
        )
        .await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(
        response.errors[0].message,
        "validation failed: unknown category: Lunch"
    );

    let listed = execute(&schema, "{ timesheets { id } }").await;
    assert_eq!(listed["timesheets"], json!([]));
}

#[rstest]
#[tokio::test]
async fn answers_the_healthcheck(before_each: AppSchema) {
    let health = execute(&before_each, "{ healthcheck { status } }").await;
    assert_eq!(health["healthcheck"]["status"], "ok");
}
