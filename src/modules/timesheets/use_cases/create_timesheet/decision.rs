use crate::modules::timesheets::core::record::NewTimesheetRecord;
use crate::modules::timesheets::core::validation::ValidationError;

pub enum Decision {
    Accepted { record: NewTimesheetRecord },
    Rejected { reason: ValidationError },
}
