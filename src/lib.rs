pub mod modules {
    pub mod timesheets {
        pub mod core {
            pub mod category;
            pub mod changes;
            pub mod duration;
            pub mod record;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod create_timesheet {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_timesheet_by_id {
                pub mod handler;
                pub mod query;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_timesheet {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_timesheet {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_timesheets {
                pub mod filter;
                pub mod handler;
                pub mod query;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod gql_timesheet;
                pub mod http_error;
            }
            pub mod outbound {
                pub mod timesheet_store;
                pub mod timesheet_store_in_memory;
            }
        }
    }
}

pub mod shell;
