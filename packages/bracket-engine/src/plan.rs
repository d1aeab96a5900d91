use bracket_interface::{Format, PlanRequest, Schedule};
use log::debug;

use crate::double_elimination::generate_double_elimination;
use crate::group_stage::generate_group_stage;
use crate::round_robin::generate_round_robin;
use crate::single_elimination::generate_single_elimination;
use crate::swiss::generate_swiss;

/// Plans a tournament of the given format.
pub fn plan<T: Clone>(format: Format, participants: &[T]) -> Schedule<T> {
    debug!("planning {} for {} participants", format, participants.len());

    match format {
        Format::SingleElimination => generate_single_elimination(participants).into(),
        Format::DoubleElimination => generate_double_elimination(participants).into(),
        Format::RoundRobin => generate_round_robin(participants).into(),
        Format::Swiss { rounds } => generate_swiss(participants, rounds).into(),
        Format::GroupStage { groups } => generate_group_stage(participants, groups).into(),
    }
}

pub fn plan_request<T: Clone>(request: &PlanRequest<T>) -> Schedule<T> {
    plan(request.format, &request.participants)
}
