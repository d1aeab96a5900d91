use bracket_interface::{BracketSegment, MatchSeed};
use log::debug;

use crate::builder::{BracketBuilder, RoundSpan};
use crate::seeding::{bracket_capacity, seed_participants, winners_rounds};

/// Where the losers of a winners round drop into the losers bracket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoserDrop {
    /// Neighbouring losers play each other: match `i` feeds losers match `i / 2`.
    Paired { losers_round: usize },
    /// Each loser meets a losers bracket survivor: match `i` feeds losers match `i`.
    Direct { losers_round: usize },
}

/// Drop rule for a winners round, both rounds counted from 0.
///
/// First round losers have nobody to meet yet and are paired up in losers
/// round 0. Every later winners round `w` feeds the merge round `2w - 1`,
/// whose size equals its own.
fn loser_drop(winners_round: usize) -> LoserDrop {
    match winners_round {
        0 => LoserDrop::Paired { losers_round: 0 },
        w => LoserDrop::Direct {
            losers_round: 2 * w - 1,
        },
    }
}

/// Match count of every losers round for a bracket of `capacity` slots.
///
/// There are `2 * (winners_rounds - 1)` rounds. The first two hold
/// `capacity / 4` matches and every following pair holds half of the pair
/// before it, which works out to `capacity >> (2 + round / 2)` for a 0-based
/// `round` and ends on a one match final.
pub fn losers_round_counts(capacity: usize) -> Vec<usize> {
    let rounds = 2 * winners_rounds(capacity).saturating_sub(1) as usize;

    let mut counts = Vec::with_capacity(rounds);
    let mut count = capacity / 4;
    for round in 1..=rounds {
        counts.push(count);
        if round % 2 == 0 {
            count = (count / 2).max(1);
        }
    }

    counts
}

/// Generates a double elimination bracket with a single grand final.
///
/// The plan is laid out as the winners bracket (round by round), then the
/// losers bracket (round by round), then the grand final. Winners matches link
/// both their winner and their loser forward; losers matches only link their
/// winner, a second loss is final. Both bracket finals feed the grand final,
/// which has no outgoing links. Fewer than two participants produce an empty
/// plan.
pub fn generate_double_elimination<T: Clone>(participants: &[T]) -> Vec<MatchSeed<T>> {
    if participants.len() < 2 {
        return vec![];
    }

    let capacity = bracket_capacity(participants.len());
    let slots = seed_participants(participants, capacity);
    let losers_counts = losers_round_counts(capacity);

    let total = (capacity - 1) + losers_counts.iter().sum::<usize>() + 1;
    let mut builder = BracketBuilder::with_capacity(total);

    // Winners bracket
    let winners = builder.create_knockout_tree(BracketSegment::Winners, &slots);

    // Losers bracket
    let mut losers: Vec<RoundSpan> = Vec::with_capacity(losers_counts.len());
    for (round, count) in losers_counts.iter().copied().enumerate() {
        let span = builder.create_round(round as u32 + 1, count, BracketSegment::Losers);
        if let Some(previous) = losers.last().copied() {
            builder.advance_round(previous, span);
        }
        losers.push(span);
    }

    // Winners bracket losers drop down
    for (winners_round, span) in winners.iter().enumerate() {
        let (losers_round, paired) = match loser_drop(winners_round) {
            LoserDrop::Paired { losers_round } => (losers_round, true),
            LoserDrop::Direct { losers_round } => (losers_round, false),
        };
        let Some(target) = losers.get(losers_round).copied() else {
            continue;
        };

        for i in 0..span.count {
            let position = if paired { i / 2 } else { i };
            if position >= target.count {
                continue;
            }
            let index = target.index(position);
            if builder.segment(index) == Some(BracketSegment::Losers) {
                builder.link_loser(span.index(i), index);
            }
        }
    }

    // Grand final
    let grand_final = builder.create_match(1, BracketSegment::GrandFinal, None, None);
    if let Some(winners_final) = winners.last().and_then(RoundSpan::last) {
        builder.link_winner(winners_final, grand_final);
    }
    if let Some(losers_final) = losers.last().and_then(RoundSpan::last) {
        builder.link_winner(losers_final, grand_final);
    }

    debug!(
        "double elimination: {} participants, capacity {}, {} winners rounds, {} losers rounds, {} matches",
        participants.len(),
        capacity,
        winners.len(),
        losers.len(),
        builder.len()
    );

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loser_drop_rules() {
        assert_eq!(loser_drop(0), LoserDrop::Paired { losers_round: 0 });
        assert_eq!(loser_drop(1), LoserDrop::Direct { losers_round: 1 });
        assert_eq!(loser_drop(2), LoserDrop::Direct { losers_round: 3 });
        assert_eq!(loser_drop(4), LoserDrop::Direct { losers_round: 7 });
    }

    #[test]
    fn test_direct_drops_match_their_losers_round_size() {
        for capacity in [4usize, 8, 16, 32, 64, 128, 256] {
            let counts = losers_round_counts(capacity);
            for winners_round in 1..winners_rounds(capacity) as usize {
                let winners_count = capacity >> (winners_round + 1);
                match loser_drop(winners_round) {
                    LoserDrop::Direct { losers_round } => {
                        assert_eq!(counts[losers_round], winners_count)
                    }
                    LoserDrop::Paired { .. } => panic!("only the first round pairs losers"),
                }
            }
        }
    }
}
