// Shared test fixture for the CreateTimesheet command.

use crate::modules::timesheets::use_cases::create_timesheet::command::CreateTimesheet;
use crate::tests::fixtures::records::at;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTimesheetDto {
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub category: String,
    pub ticket_reference: Option<String>,
    pub line_item_count: i64,
}

pub struct CreateTimesheetBuilder {
    inner: CreateTimesheet,
}

impl Default for CreateTimesheetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateTimesheetBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/create_timesheet.json").unwrap();
        let dto: CreateTimesheetDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: CreateTimesheet {
                name: dto.name,
                start_time: dto.start_time,
                end_time: dto.end_time,
                category: dto.category,
                ticket_reference: dto.ticket_reference,
                line_item_count: dto.line_item_count,
                requested_at: at("2024-01-01T17:05:00Z"),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn start_time(mut self, v: DateTime<Utc>) -> Self {
        self.inner.start_time = v;
        self
    }

    pub fn end_time(mut self, v: DateTime<Utc>) -> Self {
        self.inner.end_time = v;
        self
    }

    pub fn category(mut self, v: impl Into<String>) -> Self {
        self.inner.category = v.into();
        self
    }

    pub fn ticket_reference(mut self, v: Option<&str>) -> Self {
        self.inner.ticket_reference = v.map(str::to_string);
        self
    }

    pub fn line_item_count(mut self, v: i64) -> Self {
        self.inner.line_item_count = v;
        self
    }

    pub fn requested_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.requested_at = v;
        self
    }

    pub fn build(self) -> CreateTimesheet {
        self.inner
    }
}

#[cfg(test)]
mod create_timesheet_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CreateTimesheetBuilder::default().build();
        assert_eq!(built.name, "Test User");
        assert_eq!(built.start_time, at("2024-01-01T09:00:00Z"));
        assert_eq!(built.end_time, at("2024-01-01T17:00:00Z"));
        assert_eq!(built.category, "Ticket");
        assert_eq!(built.ticket_reference.as_deref(), Some("TICKET-001"));
        assert_eq!(built.line_item_count, 5);
        assert_eq!(built.requested_at, at("2024-01-01T17:05:00Z"));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = CreateTimesheetBuilder::new()
            .name("Alice Smith")
            .start_time(at("2024-02-01T08:00:00Z"))
            .end_time(at("2024-02-01T09:00:00Z"))
            .category("Meeting")
            .ticket_reference(None)
            .line_item_count(2)
            .requested_at(at("2024-02-01T09:00:01Z"))
            .build();

        assert_eq!(custom.name, "Alice Smith");
        assert_eq!(custom.start_time, at("2024-02-01T08:00:00Z"));
        assert_eq!(custom.end_time, at("2024-02-01T09:00:00Z"));
        assert_eq!(custom.category, "Meeting");
        assert_eq!(custom.ticket_reference, None);
        assert_eq!(custom.line_item_count, 2);
        assert_eq!(custom.requested_at, at("2024-02-01T09:00:01Z"));
    }
}
