use chrono::{DateTime, Utc};

/// Request to record a new timesheet entry.
///
/// `category` and `line_item_count` arrive unchecked; the decider validates
/// them. `requested_at` is stamped by the inbound adapter and becomes both
/// `created_at` and `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTimesheet {
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub category: String,
    pub ticket_reference: Option<String>,
    pub line_item_count: i64,
    pub requested_at: DateTime<Utc>,
}
