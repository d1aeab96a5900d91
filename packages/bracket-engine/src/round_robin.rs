use bracket_interface::{BracketSegment, MatchSeed};
use log::debug;

use crate::builder::BracketBuilder;

/// Pairings of a full round robin by position, one `Vec` per round.
///
/// Circle method: the first position stays put and the rest rotate one step
/// each round. An odd field gets a dummy position; whoever draws it sits the
/// round out, so an odd field plays `n` rounds and an even field `n - 1`.
pub fn round_robin_pairings(team_count: usize) -> Vec<Vec<(usize, usize)>> {
    if team_count < 2 {
        return vec![];
    }

    let slots = team_count + team_count % 2;
    // Only present in the table when the field is odd
    let dummy = team_count;
    let rounds = slots - 1;

    let mut table: Vec<usize> = (0..slots).collect();
    let mut pairings = Vec::with_capacity(rounds);
    for _ in 0..rounds {
        pairings.push(
            (0..slots / 2)
                .map(|m| (table[m], table[slots - 1 - m]))
                .filter(|&(a, b)| a != dummy && b != dummy)
                .collect(),
        );

        if let Some(last) = table.pop() {
            table.insert(1, last);
        }
    }

    pairings
}

/// Generates every pairing of the field exactly once.
///
/// Matches are unlinked and tagged `winners`; rounds are numbered from 1 in
/// the order the circle produces them.
pub fn generate_round_robin<T: Clone>(participants: &[T]) -> Vec<MatchSeed<T>> {
    let pairings = round_robin_pairings(participants.len());

    let n = participants.len();
    let mut builder = BracketBuilder::with_capacity(n * n.saturating_sub(1) / 2);
    for (round, round_pairings) in pairings.iter().enumerate() {
        for &(a, b) in round_pairings {
            builder.create_match(
                round as u32 + 1,
                BracketSegment::Winners,
                Some(participants[a].clone()),
                Some(participants[b].clone()),
            );
        }
    }

    debug!(
        "round robin: {} participants, {} rounds, {} matches",
        n,
        pairings.len(),
        builder.len()
    );

    builder.build()
}
