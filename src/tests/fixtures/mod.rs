pub mod commands {
    pub mod create_timesheet;
    pub mod update_timesheet;
}
pub mod records;
