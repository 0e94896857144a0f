use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::modules::timesheets::core::validation::ValidationError;

/// The closed set of activity categories a timesheet record can be filed under.
///
/// Serialized as the human readable label, which is also what the store
/// persists and what search requests filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimesheetCategory {
    #[serde(rename = "Ticket")]
    Ticket,
    #[serde(
        rename = "Coordination & other supporting activities",
        alias = "Koordinasi & kegiatan pendukung lainnya"
    )]
    Coordination,
    #[serde(rename = "Meeting")]
    Meeting,
    #[serde(rename = "Adhoc/project")]
    AdhocProject,
    #[serde(rename = "Development & Testing")]
    DevelopmentAndTesting,
    #[serde(rename = "Other")]
    Other,
}

// Label used by the first deployment of the service; still accepted on input.
const LEGACY_COORDINATION_LABEL: &str = "Koordinasi & kegiatan pendukung lainnya";

impl TimesheetCategory {
    pub const ALL: [TimesheetCategory; 6] = [
        TimesheetCategory::Ticket,
        TimesheetCategory::Coordination,
        TimesheetCategory::Meeting,
        TimesheetCategory::AdhocProject,
        TimesheetCategory::DevelopmentAndTesting,
        TimesheetCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimesheetCategory::Ticket => "Ticket",
            TimesheetCategory::Coordination => "Coordination & other supporting activities",
            TimesheetCategory::Meeting => "Meeting",
            TimesheetCategory::AdhocProject => "Adhoc/project",
            TimesheetCategory::DevelopmentAndTesting => "Development & Testing",
            TimesheetCategory::Other => "Other",
        }
    }
}

impl fmt::Display for TimesheetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimesheetCategory {
    type Err = ValidationError;

    /// Labels match exactly; there is no case folding or trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == LEGACY_COORDINATION_LABEL {
            return Ok(TimesheetCategory::Coordination);
        }
        TimesheetCategory::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}
