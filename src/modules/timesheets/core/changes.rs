// Column level change set produced by the update decider.
//
// Only fields that are Some are written. ticket_reference is doubly optional:
// None leaves the stored value alone, Some(None) clears it.
//
// duration_seconds is not part of the set. It is derived again from the merged
// row whenever a bound moves, so the stored window and duration always agree.

use chrono::{DateTime, Utc};

use crate::modules::timesheets::core::category::TimesheetCategory;
use crate::modules::timesheets::core::duration::duration_seconds;
use crate::modules::timesheets::core::record::TimesheetRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimesheetChanges {
    pub name: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub category: Option<TimesheetCategory>,
    pub ticket_reference: Option<Option<String>>,
    pub line_item_count: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

impl TimesheetChanges {
    pub fn touch(updated_at: DateTime<Utc>) -> Self {
        Self {
            name: None,
            start_time: None,
            end_time: None,
            category: None,
            ticket_reference: None,
            line_item_count: None,
            updated_at,
        }
    }

    pub fn touches_window(&self) -> bool {
        self.start_time.is_some() || self.end_time.is_some()
    }

    pub fn apply_to(self, record: &mut TimesheetRecord) {
        let touches_window = self.touches_window();
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(start_time) = self.start_time {
            record.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            record.end_time = end_time;
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(ticket_reference) = self.ticket_reference {
            record.ticket_reference = ticket_reference;
        }
        if let Some(line_item_count) = self.line_item_count {
            record.line_item_count = line_item_count;
        }
        if touches_window {
            record.duration_seconds = duration_seconds(record.start_time, record.end_time);
        }
        record.updated_at = self.updated_at;
    }
}
