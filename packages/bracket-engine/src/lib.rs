mod builder;
pub mod double_elimination;
mod error;
pub mod group_stage;
pub mod plan;
pub mod round_robin;
pub mod seeding;
pub mod single_elimination;
pub mod swiss;
pub mod topology;

pub use crate::double_elimination::{generate_double_elimination, losers_round_counts};
pub use crate::error::TopologyError;
pub use crate::group_stage::{default_group_count, generate_group_stage};
pub use crate::plan::{plan, plan_request};
pub use crate::round_robin::generate_round_robin;
pub use crate::seeding::{bracket_capacity, seed_participants, winners_rounds};
pub use crate::single_elimination::generate_single_elimination;
pub use crate::swiss::{default_swiss_rounds, generate_swiss};
pub use crate::topology::{validate_topology, BracketSummary};

pub use bracket_interface::{BracketSegment, Format, GroupStage, MatchSeed, PlanRequest, Schedule};
