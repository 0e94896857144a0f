use thiserror::Error;

use crate::modules::timesheets::adapters::outbound::timesheet_store::StoreError;
use crate::modules::timesheets::core::validation::ValidationError;

/// Failure of a use case handler. A missing record is not an error; handlers
/// report it as `None` or `false`.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
