use chrono::{DateTime, Utc};

use crate::modules::timesheets::core::record::TimesheetId;

/// Partial update of an existing record. `None` means "leave unchanged".
///
/// `ticket_reference` distinguishes three cases: `None` keeps the stored
/// value, `Some(None)` clears it, `Some(Some(v))` replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTimesheet {
    pub id: TimesheetId,
    pub name: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub ticket_reference: Option<Option<String>>,
    pub line_item_count: Option<i64>,
    pub requested_at: DateTime<Utc>,
}

impl UpdateTimesheet {
    pub fn touches_window(&self) -> bool {
        self.start_time.is_some() || self.end_time.is_some()
    }
}
