use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Derived status of an activity.
///
/// - `Completed`: the user marked the activity as done.
/// - `Unlocked`: every direct prerequisite is `Completed` (or there are none).
/// - `Locked`: at least one direct prerequisite is not `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Completed,
    Unlocked,
    Locked,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::Unlocked => "unlocked",
            Status::Locked => "locked",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "completed" => Ok(Status::Completed),
            "unlocked" => Ok(Status::Unlocked),
            "locked" => Ok(Status::Locked),
            other => Err(format!(
                "invalid status: {other} (expected \"completed\", \"unlocked\" or \"locked\")"
            )),
        }
    }
}
