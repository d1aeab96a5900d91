use bracket_interface::{BracketSegment, MatchSeed};
use log::trace;

/// Where one round sits inside the flat match list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RoundSpan {
    pub start: usize,
    pub count: usize,
}

impl RoundSpan {
    pub fn index(&self, i: usize) -> usize {
        self.start + i
    }

    /// Index of the final match of the round, `None` for an empty round.
    pub fn last(&self) -> Option<usize> {
        self.count.checked_sub(1).map(|offset| self.start + offset)
    }
}

/// Append-only match list. Match numbers follow push order and links are plain
/// indices, so a link taken while building stays valid in the finished plan.
pub(crate) struct BracketBuilder<T> {
    matches: Vec<MatchSeed<T>>,
}

impl<T: Clone> BracketBuilder<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        BracketBuilder {
            matches: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn create_match(
        &mut self,
        round: u32,
        segment: BracketSegment,
        player_1: Option<T>,
        player_2: Option<T>,
    ) -> usize {
        let index = self.matches.len();
        debug_assert!(index < u32::MAX as usize, "match number overflows u32");
        self.matches.push(MatchSeed {
            round,
            match_number: index as u32 + 1,
            player_1,
            player_2,
            segment,
            next_match_winner: None,
            next_match_loser: None,
        });

        index
    }

    /// Pushes `count` unfilled matches.
    pub fn create_round(&mut self, round: u32, count: usize, segment: BracketSegment) -> RoundSpan {
        let start = self.matches.len();
        for _ in 0..count {
            self.create_match(round, segment, None, None);
        }

        RoundSpan { start, count }
    }

    /// Pushes one match per adjacent pair of slots.
    pub fn create_seeded_round(
        &mut self,
        round: u32,
        segment: BracketSegment,
        slots: &[Option<T>],
    ) -> RoundSpan {
        let start = self.matches.len();
        for pair in slots.chunks(2) {
            let player_1 = pair[0].clone();
            let player_2 = pair.get(1).cloned().flatten();
            self.create_match(round, segment, player_1, player_2);
        }

        RoundSpan {
            start,
            count: self.matches.len() - start,
        }
    }

    pub fn segment(&self, index: usize) -> Option<BracketSegment> {
        self.matches.get(index).map(|match_| match_.segment)
    }

    pub fn link_winner(&mut self, from: usize, to: usize) {
        debug_assert!(from < to, "winner link {} -> {} is not forward", from, to);
        if let Some(match_) = self.matches.get_mut(from) {
            trace!("winner of match {} -> match {}", match_.match_number, to + 1);
            match_.next_match_winner = Some(to);
        }
    }

    pub fn link_loser(&mut self, from: usize, to: usize) {
        debug_assert!(from < to, "loser link {} -> {} is not forward", from, to);
        if let Some(match_) = self.matches.get_mut(from) {
            trace!("loser of match {} -> match {}", match_.match_number, to + 1);
            match_.next_match_loser = Some(to);
        }
    }

    /// Sends every winner of `from` into `to`.
    ///
    /// Rounds of equal size pair up by position. Otherwise `to` holds half as
    /// many matches and two neighbouring winners share a match.
    pub fn advance_round(&mut self, from: RoundSpan, to: RoundSpan) {
        for i in 0..from.count {
            let target = if from.count == to.count { i } else { i / 2 };
            self.link_winner(from.index(i), to.index(target));
        }
    }

    /// Builds a whole knockout tree from seeded slots.
    ///
    /// The first round pairs adjacent slots; every later round has half the
    /// matches of the one before and is left unfilled. Returns the span of
    /// every round, first round first.
    pub fn create_knockout_tree(
        &mut self,
        segment: BracketSegment,
        slots: &[Option<T>],
    ) -> Vec<RoundSpan> {
        let mut rounds = vec![self.create_seeded_round(1, segment, slots)];

        let mut count = slots.len() / 4;
        while count > 0 {
            let round = rounds.len() as u32 + 1;
            let span = self.create_round(round, count, segment);
            if let Some(previous) = rounds.last().copied() {
                self.advance_round(previous, span);
            }
            rounds.push(span);
            count /= 2;
        }

        rounds
    }

    pub fn build(self) -> Vec<MatchSeed<T>> {
        self.matches
    }
}
