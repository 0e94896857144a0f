// Shared test fixture for the UpdateTimesheet command. Starts with no field
// changes so each test states only what it updates.

use crate::modules::timesheets::core::record::TimesheetId;
use crate::modules::timesheets::use_cases::update_timesheet::command::UpdateTimesheet;
use crate::tests::fixtures::records::at;
use chrono::{DateTime, Utc};

pub struct UpdateTimesheetBuilder {
    inner: UpdateTimesheet,
}

#[allow(dead_code)]
impl UpdateTimesheetBuilder {
    pub fn new(id: TimesheetId) -> Self {
        Self {
            inner: UpdateTimesheet {
                id,
                name: None,
                start_time: None,
                end_time: None,
                category: None,
                ticket_reference: None,
                line_item_count: None,
                requested_at: at("2024-01-02T08:00:00Z"),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = Some(v.into());
        self
    }

    pub fn start_time(mut self, v: DateTime<Utc>) -> Self {
        self.inner.start_time = Some(v);
        self
    }

    pub fn end_time(mut self, v: DateTime<Utc>) -> Self {
        self.inner.end_time = Some(v);
        self
    }

    pub fn category(mut self, v: impl Into<String>) -> Self {
        self.inner.category = Some(v.into());
        self
    }

    /// `None` clears the stored ticket; leave the setter out to keep it.
    pub fn ticket_reference(mut self, v: Option<&str>) -> Self {
        self.inner.ticket_reference = Some(v.map(str::to_string));
        self
    }

    pub fn line_item_count(mut self, v: i64) -> Self {
        self.inner.line_item_count = Some(v);
        self
    }

    pub fn requested_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.requested_at = v;
        self
    }

    pub fn build(self) -> UpdateTimesheet {
        self.inner
    }
}
