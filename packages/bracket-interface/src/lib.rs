mod error;
pub mod msg;
pub mod state;

pub use crate::error::InterfaceError;
pub use crate::msg::{Format, GroupStage, PlanRequest, Schedule};
pub use crate::state::{BracketSegment, MatchSeed};
