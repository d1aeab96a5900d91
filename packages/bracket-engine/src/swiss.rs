use bracket_interface::{BracketSegment, MatchSeed};
use log::debug;

use crate::builder::BracketBuilder;
use crate::seeding::{bracket_capacity, seed_participants, winners_rounds};

/// `ceil(log2(n))`, at least 1.
pub fn default_swiss_rounds(participant_count: usize) -> u32 {
    winners_rounds(bracket_capacity(participant_count)).max(1)
}

/// Generates a Swiss schedule: a seeded first round and unfilled later rounds.
///
/// Round 1 pairs neighbours in seed order. With an odd field the last seed
/// gets a match against an absent opponent, which is their bye. Every later
/// round has as many matches as round 1 and no players, pairings there depend
/// on standings. No match is linked to another.
///
/// `rounds` defaults to [`default_swiss_rounds`]; an explicit 0 yields an
/// empty plan.
pub fn generate_swiss<T: Clone>(participants: &[T], rounds: Option<u32>) -> Vec<MatchSeed<T>> {
    let n = participants.len();
    if n < 2 {
        return vec![];
    }

    let rounds = rounds.unwrap_or_else(|| default_swiss_rounds(n));
    if rounds == 0 {
        return vec![];
    }

    let slots = seed_participants(participants, n + n % 2);
    let mut builder = BracketBuilder::with_capacity(slots.len() / 2);

    let first_round = builder.create_seeded_round(1, BracketSegment::Winners, &slots);
    for round in 2..=rounds {
        builder.create_round(round, first_round.count, BracketSegment::Winners);
    }

    debug!(
        "swiss: {} participants, {} rounds of {} matches",
        n, rounds, first_round.count
    );

    builder.build()
}
