use crate::state::MatchSeed;
use crate::InterfaceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    SingleElimination,
    DoubleElimination,
    RoundRobin,
    Swiss {
        #[serde(default)]
        rounds: Option<u32>, // Defaults to ceil(log2(n)), at least 1
    },
    GroupStage {
        #[serde(default)]
        groups: Option<u32>, // Defaults to round(n / 4), at least 2
    },
}

impl Format {
    /// Overrides the Swiss round count. No effect on other formats.
    pub fn with_rounds(self, rounds: Option<u32>) -> Self {
        match self {
            Format::Swiss { .. } => Format::Swiss { rounds },
            other => other,
        }
    }

    /// Overrides the group count. No effect on other formats.
    pub fn with_groups(self, groups: Option<u32>) -> Self {
        match self {
            Format::GroupStage { .. } => Format::GroupStage { groups },
            other => other,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Format::SingleElimination => write!(f, "single_elimination"),
            Format::DoubleElimination => write!(f, "double_elimination"),
            Format::RoundRobin => write!(f, "round_robin"),
            Format::Swiss { .. } => write!(f, "swiss"),
            Format::GroupStage { .. } => write!(f, "group_stage"),
        }
    }
}

impl FromStr for Format {
    type Err = InterfaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('-', "_");

        match name.as_str() {
            "single_elimination" | "single" => Ok(Format::SingleElimination),
            "double_elimination" | "double" => Ok(Format::DoubleElimination),
            "round_robin" | "league" => Ok(Format::RoundRobin),
            "swiss" => Ok(Format::Swiss { rounds: None }),
            "group_stage" | "groups" => Ok(Format::GroupStage { groups: None }),
            _ => Err(InterfaceError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

/// A stored request for a plan: the format and the participants in seed order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlanRequest<T> {
    pub format: Format,
    pub participants: Vec<T>, // Ordered by seeding
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GroupStage<T> {
    /// Members of every group that holds at least two participants
    pub groups: Vec<Vec<T>>,
    pub matches: Vec<MatchSeed<T>>,
}

impl<T> Default for GroupStage<T> {
    fn default() -> Self {
        GroupStage {
            groups: vec![],
            matches: vec![],
        }
    }
}

/// The output of any format. `groups` is only populated for group stages.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Schedule<T> {
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Vec<T>>,
    pub matches: Vec<MatchSeed<T>>,
}

impl<T> From<Vec<MatchSeed<T>>> for Schedule<T> {
    fn from(matches: Vec<MatchSeed<T>>) -> Self {
        Schedule {
            groups: vec![],
            matches,
        }
    }
}

impl<T> From<GroupStage<T>> for Schedule<T> {
    fn from(group_stage: GroupStage<T>) -> Self {
        Schedule {
            groups: group_stage.groups,
            matches: group_stage.matches,
        }
    }
}
