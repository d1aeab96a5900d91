use std::collections::{BTreeMap, HashSet};
use std::fmt;

use bracket_interface::{BracketSegment, MatchSeed};
use itertools::Itertools;

use crate::TopologyError;

/// Checks a plan, as generated, against the structural rules every format
/// follows.
///
/// Match numbers run `1..=len` in order, rounds start at 1, every link points
/// to a later match in the same plan, only winners matches send a loser on
/// and only into the losers bracket, and no match that is fed by another one
/// has players yet. A plan that already carries recorded results will fail
/// the last rule.
pub fn validate_topology<T>(matches: &[MatchSeed<T>]) -> Result<(), TopologyError> {
    let len = matches.len();
    let mut fed = HashSet::new();

    for (index, match_) in matches.iter().enumerate() {
        let expected = index as u32 + 1;
        if match_.match_number != expected {
            return Err(TopologyError::MatchNumberOutOfOrder {
                index,
                match_number: match_.match_number,
                expected,
            });
        }
        if match_.round == 0 {
            return Err(TopologyError::InvalidRound { index });
        }

        for target in match_
            .next_match_winner
            .iter()
            .chain(match_.next_match_loser.iter())
            .copied()
        {
            if target >= len {
                return Err(TopologyError::LinkOutOfRange { index, target, len });
            }
            if target <= index {
                return Err(TopologyError::BackwardLink { index, target });
            }
            fed.insert(target);
        }

        if let Some(target) = match_.next_match_loser {
            if match_.segment != BracketSegment::Winners {
                return Err(TopologyError::UnexpectedLoserLink {
                    index,
                    segment: match_.segment,
                });
            }
            let segment = matches[target].segment;
            if segment != BracketSegment::Losers {
                return Err(TopologyError::LoserLinkOutsideLosers {
                    index,
                    target,
                    segment,
                });
            }
        }
    }

    if let Some(index) = fed
        .into_iter()
        .sorted()
        .find(|&index| !matches[index].is_empty())
    {
        return Err(TopologyError::PrefilledSlot { index });
    }

    Ok(())
}

/// Match and round counts of a plan, per segment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BracketSummary {
    pub matches: usize,
    pub winners: usize,
    pub losers: usize,
    pub grand_final: usize,
    /// Group index to match count
    pub groups: BTreeMap<u32, usize>,
    pub winners_rounds: u32,
    pub losers_rounds: u32,
    /// Seeded matches with exactly one player
    pub byes: usize,
}

impl BracketSummary {
    pub fn of<T>(matches: &[MatchSeed<T>]) -> Self {
        let counts = matches.iter().map(|match_| match_.segment).counts();
        let max_round = |segment: BracketSegment| {
            matches
                .iter()
                .filter(|match_| match_.segment == segment)
                .map(|match_| match_.round)
                .max()
                .unwrap_or(0)
        };

        BracketSummary {
            matches: matches.len(),
            winners: counts.get(&BracketSegment::Winners).copied().unwrap_or(0),
            losers: counts.get(&BracketSegment::Losers).copied().unwrap_or(0),
            grand_final: counts.get(&BracketSegment::GrandFinal).copied().unwrap_or(0),
            groups: counts
                .iter()
                .filter_map(|(segment, count)| match segment {
                    BracketSegment::Group(group) => Some((*group, *count)),
                    _ => None,
                })
                .collect(),
            winners_rounds: max_round(BracketSegment::Winners),
            losers_rounds: max_round(BracketSegment::Losers),
            byes: matches.iter().filter(|match_| match_.has_bye()).count(),
        }
    }
}

impl fmt::Display for BracketSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} matches: winners {} in {} rounds, losers {} in {} rounds, grand final {}",
            self.matches,
            self.winners,
            self.winners_rounds,
            self.losers,
            self.losers_rounds,
            self.grand_final
        )?;
        for (group, count) in &self.groups {
            write!(f, ", group_{} {}", group, count)?;
        }
        write!(f, ", byes {}", self.byes)
    }
}
