// Stored shape of a timesheet record.
//
// Timestamps are timezone aware and kept in UTC. duration_seconds is derived
// from the window by the deciders and is never taken from a caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::timesheets::core::category::TimesheetCategory;

pub type TimesheetId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetRecord {
    pub id: TimesheetId,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub category: TimesheetCategory,
    pub ticket_reference: Option<String>,
    pub line_item_count: i32,
    pub duration_seconds: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated record that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimesheetRecord {
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub category: TimesheetCategory,
    pub ticket_reference: Option<String>,
    pub line_item_count: i32,
    pub duration_seconds: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewTimesheetRecord {
    pub fn into_record(self, id: TimesheetId) -> TimesheetRecord {
        TimesheetRecord {
            id,
            name: self.name,
            start_time: self.start_time,
            end_time: self.end_time,
            category: self.category,
            ticket_reference: self.ticket_reference,
            line_item_count: self.line_item_count,
            duration_seconds: self.duration_seconds,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
