//! Society event categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of society event, used to badge calendar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Festival,
    Training,
    Education,
    Demonstration,
}

impl EventCategory {
    pub const ALL: [Self; 4] = [
        Self::Festival,
        Self::Training,
        Self::Education,
        Self::Demonstration,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Festival => "festival",
            Self::Training => "training",
            Self::Education => "education",
            Self::Demonstration => "demonstration",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown event category `{s}`"))
    }
}
