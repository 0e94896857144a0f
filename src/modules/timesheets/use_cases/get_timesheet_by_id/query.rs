use crate::modules::timesheets::core::record::TimesheetId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetTimesheetById {
    pub id: TimesheetId,
}
