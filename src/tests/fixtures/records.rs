// Shared test fixtures for stored records.

use chrono::{DateTime, Utc};

use crate::modules::timesheets::core::category::TimesheetCategory;
use crate::modules::timesheets::core::record::{NewTimesheetRecord, TimesheetId, TimesheetRecord};

pub fn at(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .unwrap()
        .with_timezone(&Utc)
}

/// 09:00 to 17:00 on 2024-01-01, eight hours, filed as a ticket.
pub fn make_new_timesheet_record() -> NewTimesheetRecord {
    NewTimesheetRecord {
        name: "Test User".to_string(),
        start_time: at("2024-01-01T09:00:00Z"),
        end_time: at("2024-01-01T17:00:00Z"),
        category: TimesheetCategory::Ticket,
        ticket_reference: Some("TICKET-001".to_string()),
        line_item_count: 5,
        duration_seconds: 8 * 60 * 60,
        created_at: at("2024-01-01T17:05:00Z"),
        updated_at: at("2024-01-01T17:05:00Z"),
    }
}

pub fn make_timesheet_record(id: TimesheetId) -> TimesheetRecord {
    make_new_timesheet_record().into_record(id)
}
