use bracket_interface::BracketSegment;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TopologyError {
    #[error("Match at index {index} is numbered {match_number}, expected {expected}")]
    MatchNumberOutOfOrder {
        index: usize,
        match_number: u32,
        expected: u32,
    },

    #[error("Match at index {index} has round 0")]
    InvalidRound { index: usize },

    #[error("Match at index {index} links to index {target}, past the last match ({len} matches)")]
    LinkOutOfRange {
        index: usize,
        target: usize,
        len: usize,
    },

    #[error("Match at index {index} links back to index {target}")]
    BackwardLink { index: usize, target: usize },

    #[error("Match at index {index} sends its loser to index {target}, a {segment} match")]
    LoserLinkOutsideLosers {
        index: usize,
        target: usize,
        segment: BracketSegment,
    },

    #[error("Match at index {index} is a {segment} match and cannot send its loser on")]
    UnexpectedLoserLink {
        index: usize,
        segment: BracketSegment,
    },

    #[error("Match at index {index} is fed by earlier matches but already has players")]
    PrefilledSlot { index: usize },
}
