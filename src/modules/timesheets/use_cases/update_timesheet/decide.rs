use crate::modules::timesheets::core::{
    changes::TimesheetChanges,
    validation::{ValidationError, validate_category, validate_line_item_count, validate_name},
};
use crate::modules::timesheets::use_cases::update_timesheet::{
    command::UpdateTimesheet, decision::Decision,
};

/// Turns a partial update into a change set.
///
/// Only fields present in the command are validated. The duration is not
/// decided here; the store derives it from the row it writes.
pub fn decide_update(command: UpdateTimesheet) -> Decision {
    match validate(command) {
        Ok(changes) => Decision::Accepted { changes },
        Err(reason) => Decision::Rejected { reason },
    }
}

fn validate(command: UpdateTimesheet) -> Result<TimesheetChanges, ValidationError> {
    if let Some(name) = &command.name {
        validate_name(name)?;
    }
    let line_item_count = command
        .line_item_count
        .map(validate_line_item_count)
        .transpose()?;
    let category = command
        .category
        .as_deref()
        .map(validate_category)
        .transpose()?;

    Ok(TimesheetChanges {
        name: command.name,
        start_time: command.start_time,
        end_time: command.end_time,
        category,
        ticket_reference: command.ticket_reference,
        line_item_count,
        ..TimesheetChanges::touch(command.requested_at)
    })
}
