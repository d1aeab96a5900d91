use bracket_interface::{BracketSegment, MatchSeed};
use log::debug;

use crate::builder::BracketBuilder;
use crate::seeding::{bracket_capacity, seed_participants, winners_rounds};

/// Generates a knockout bracket in seed order.
///
/// The bracket is padded to the next power of two with byes. Round `r` match
/// `i` sends its winner to round `r + 1` match `i / 2`; the final has no
/// successor. Fewer than two participants produce an empty plan.
pub fn generate_single_elimination<T: Clone>(participants: &[T]) -> Vec<MatchSeed<T>> {
    if participants.len() < 2 {
        return vec![];
    }

    let capacity = bracket_capacity(participants.len());
    let slots = seed_participants(participants, capacity);

    let mut builder = BracketBuilder::with_capacity(capacity - 1);
    builder.create_knockout_tree(BracketSegment::Winners, &slots);

    debug!(
        "single elimination: {} participants, capacity {}, {} rounds, {} matches",
        participants.len(),
        capacity,
        winners_rounds(capacity),
        builder.len()
    );

    builder.build()
}
