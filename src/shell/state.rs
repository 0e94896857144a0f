use std::sync::Arc;

use crate::modules::timesheets::adapters::outbound::timesheet_store_in_memory::InMemoryTimesheetStore;
use crate::modules::timesheets::use_cases::create_timesheet::handler::CreateTimesheetHandler;
use crate::modules::timesheets::use_cases::delete_timesheet::handler::DeleteTimesheetHandler;
use crate::modules::timesheets::use_cases::get_timesheet_by_id::handler::GetTimesheetByIdHandler;
use crate::modules::timesheets::use_cases::list_timesheets::handler::ListTimesheetsHandler;
use crate::modules::timesheets::use_cases::update_timesheet::handler::UpdateTimesheetHandler;

#[derive(Clone)]
pub struct AppState {
    pub create_handler: Arc<CreateTimesheetHandler<InMemoryTimesheetStore>>,
    pub get_handler: Arc<GetTimesheetByIdHandler<InMemoryTimesheetStore>>,
    pub list_handler: Arc<ListTimesheetsHandler<InMemoryTimesheetStore>>,
    pub update_handler: Arc<UpdateTimesheetHandler<InMemoryTimesheetStore>>,
    pub delete_handler: Arc<DeleteTimesheetHandler<InMemoryTimesheetStore>>,
}

impl AppState {
    /// Wires every use case against one shared store.
    pub fn new(store: Arc<InMemoryTimesheetStore>) -> Self {
        Self {
            create_handler: Arc::new(CreateTimesheetHandler::new(store.clone())),
            get_handler: Arc::new(GetTimesheetByIdHandler::new(store.clone())),
            list_handler: Arc::new(ListTimesheetsHandler::new(store.clone())),
            update_handler: Arc::new(UpdateTimesheetHandler::new(store.clone())),
            delete_handler: Arc::new(DeleteTimesheetHandler::new(store)),
        }
    }
}
