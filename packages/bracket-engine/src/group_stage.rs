use bracket_interface::{BracketSegment, GroupStage};
use itertools::Itertools;
use log::debug;

use crate::builder::BracketBuilder;
use crate::round_robin::generate_round_robin;

/// `round(n / 4)` with halves rounded up, at least 2.
pub fn default_group_count(participant_count: usize) -> u32 {
    ((participant_count + 2) / 4).max(2) as u32
}

/// Splits the field into groups and plays a round robin inside each.
///
/// Participant `i` goes to group `i % groups`. Groups left with fewer than two
/// members are dropped, and the remaining ones are re-indexed in order: the
/// `g`-th returned group is tagged `group_g`. Matches are numbered
/// contiguously group by group, round by round.
pub fn generate_group_stage<T: Clone>(participants: &[T], groups: Option<u32>) -> GroupStage<T> {
    let n = participants.len();
    if n < 2 {
        return GroupStage::default();
    }

    let group_count = groups.unwrap_or_else(|| default_group_count(n)) as usize;
    if group_count == 0 {
        return GroupStage::default();
    }

    // Groups past the n-th can never receive a member
    let mut members: Vec<Vec<T>> = vec![vec![]; group_count.min(n)];
    for (i, participant) in participants.iter().enumerate() {
        members[i % group_count].push(participant.clone());
    }
    let groups = members
        .into_iter()
        .filter(|group| group.len() >= 2)
        .collect_vec();

    let mut builder = BracketBuilder::with_capacity(
        groups
            .iter()
            .map(|group| group.len() * (group.len() - 1) / 2)
            .sum(),
    );
    for (index, group) in groups.iter().enumerate() {
        let segment = BracketSegment::Group(index as u32);
        for match_ in generate_round_robin(group) {
            builder.create_match(match_.round, segment, match_.player_1, match_.player_2);
        }
    }

    debug!(
        "group stage: {} participants, {} groups requested, {} groups kept, {} matches",
        n,
        group_count,
        groups.len(),
        builder.len()
    );

    GroupStage {
        groups,
        matches: builder.build(),
    }
}
