use serde::Deserialize;

/// Search request as received from a caller. Both criteria are optional and
/// combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListTimesheets {
    pub query: Option<String>,
    pub category: Option<String>,
}
