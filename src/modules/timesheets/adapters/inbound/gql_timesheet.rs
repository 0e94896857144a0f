use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};

use crate::modules::timesheets::core::record::TimesheetRecord;

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "Timesheet")]
pub struct GqlTimesheet {
    pub id: i64,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub category: String,
    pub ticket_reference: Option<String>,
    pub line_item_count: i32,
    pub duration_seconds: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TimesheetRecord> for GqlTimesheet {
    fn from(r: TimesheetRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            start_time: r.start_time,
            end_time: r.end_time,
            category: r.category.label().to_string(),
            ticket_reference: r.ticket_reference,
            line_item_count: r.line_item_count,
            duration_seconds: r.duration_seconds,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
