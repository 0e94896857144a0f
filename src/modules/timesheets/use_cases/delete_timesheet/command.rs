use crate::modules::timesheets::core::record::TimesheetId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTimesheet {
    pub id: TimesheetId,
}
