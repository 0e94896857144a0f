// Translates a search request into the selection predicate handed to the store.
//
// Rules
// - Text matches case-insensitively as a substring of the name or the ticket
//   reference. A missing ticket reference never matches.
// - Category matches exactly.
// - Present criteria are ANDed. An empty request matches everything.
// - Results are ordered newest first, ties broken by id descending.

use std::cmp::Ordering;

use crate::modules::timesheets::core::category::TimesheetCategory;
use crate::modules::timesheets::core::record::TimesheetRecord;
use crate::modules::timesheets::core::validation::{ValidationError, validate_category};
use crate::modules::timesheets::use_cases::list_timesheets::query::ListTimesheets;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimesheetFilter {
    /// Stored lowercased.
    text: Option<String>,
    category: Option<TimesheetCategory>,
}

impl TimesheetFilter {
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn category(&self) -> Option<TimesheetCategory> {
        self.category
    }

    pub fn matches(&self, record: &TimesheetRecord) -> bool {
        self.matches_text(record) && self.matches_category(record)
    }

    fn matches_text(&self, record: &TimesheetRecord) -> bool {
        let Some(needle) = &self.text else {
            return true;
        };
        record.name.to_lowercase().contains(needle.as_str())
            || record
                .ticket_reference
                .as_ref()
                .is_some_and(|ticket| ticket.to_lowercase().contains(needle.as_str()))
    }

    fn matches_category(&self, record: &TimesheetRecord) -> bool {
        self.category
            .is_none_or(|category| record.category == category)
    }

    pub fn newest_first(a: &TimesheetRecord, b: &TimesheetRecord) -> Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    }
}

pub fn build_filter(request: &ListTimesheets) -> Result<TimesheetFilter, ValidationError> {
    let text = request
        .query
        .as_deref()
        .filter(|query| !query.is_empty())
        .map(str::to_lowercase);
    let category = request
        .category
        .as_deref()
        .map(validate_category)
        .transpose()?;
    Ok(TimesheetFilter { text, category })
}
