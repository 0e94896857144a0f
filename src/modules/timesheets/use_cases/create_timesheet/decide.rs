use crate::modules::timesheets::core::{
    duration::duration_seconds,
    record::NewTimesheetRecord,
    validation::{ValidationError, validate_category, validate_line_item_count, validate_name},
};
use crate::modules::timesheets::use_cases::create_timesheet::{
    command::CreateTimesheet, decision::Decision,
};

pub fn decide_create(command: CreateTimesheet) -> Decision {
    match validate(command) {
        Ok(record) => Decision::Accepted { record },
        Err(reason) => Decision::Rejected { reason },
    }
}

fn validate(command: CreateTimesheet) -> Result<NewTimesheetRecord, ValidationError> {
    validate_name(&command.name)?;
    let line_item_count = validate_line_item_count(command.line_item_count)?;
    let category = validate_category(&command.category)?;

    Ok(NewTimesheetRecord {
        duration_seconds: duration_seconds(command.start_time, command.end_time),
        name: command.name,
        start_time: command.start_time,
        end_time: command.end_time,
        category,
        ticket_reference: command.ticket_reference,
        line_item_count,
        created_at: command.requested_at,
        updated_at: command.requested_at,
    })
}
