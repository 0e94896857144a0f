// Field level rules shared by the create and update deciders.
//
// Every check is pure. An update only runs the checks for fields it carries.

use crate::modules::timesheets::core::category::TimesheetCategory;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    EmptyName,

    #[error("line item count must be positive, got {0}")]
    NonPositiveLineItemCount(i64),

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

/// Narrows the raw count to the stored integer width. Anything below one, or
/// too large for the column, is rejected.
pub fn validate_line_item_count(count: i64) -> Result<i32, ValidationError> {
    match i32::try_from(count) {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(ValidationError::NonPositiveLineItemCount(count)),
    }
}

pub fn validate_category(label: &str) -> Result<TimesheetCategory, ValidationError> {
    label.parse()
}
