use crate::modules::timesheets::core::changes::TimesheetChanges;
use crate::modules::timesheets::core::validation::ValidationError;

pub enum Decision {
    Accepted { changes: TimesheetChanges },
    Rejected { reason: ValidationError },
}
