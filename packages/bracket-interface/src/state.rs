use crate::InterfaceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single planned match.
///
/// Links are positions in the sequence the match was generated in. A slot left
/// as `None` is either a bye or a participant that is not known yet; the
/// planner never decides which, that is up to whoever records results.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MatchSeed<T> {
    pub round: u32,
    pub match_number: u32,
    #[serde(rename = "player1_id")]
    pub player_1: Option<T>,
    #[serde(rename = "player2_id")]
    pub player_2: Option<T>,
    #[serde(rename = "bracket_type")]
    pub segment: BracketSegment,
    #[serde(rename = "next_match_index")]
    pub next_match_winner: Option<usize>, // Receives the winner
    #[serde(rename = "loser_next_match_index")]
    pub next_match_loser: Option<usize>, // Receives the loser (double elimination only)
}

impl<T> MatchSeed<T> {
    /// An unfilled match in the given segment.
    pub fn placeholder(round: u32, match_number: u32, segment: BracketSegment) -> Self {
        MatchSeed {
            round,
            match_number,
            player_1: None,
            player_2: None,
            segment,
            next_match_winner: None,
            next_match_loser: None,
        }
    }

    /// Short display label: `W2`, `L3`, `GF`, `G1R2`.
    pub fn label(&self) -> String {
        match self.segment {
            BracketSegment::Winners => format!("W{}", self.round),
            BracketSegment::Losers => format!("L{}", self.round),
            BracketSegment::GrandFinal => "GF".to_string(),
            BracketSegment::Group(group) => format!("G{}R{}", group, self.round),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.player_1.is_none() && self.player_2.is_none()
    }

    /// Exactly one participant present, the other side a bye.
    pub fn has_bye(&self) -> bool {
        self.player_1.is_some() != self.player_2.is_some()
    }

    pub fn players(&self) -> impl Iterator<Item = &T> {
        self.player_1.iter().chain(self.player_2.iter())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub enum BracketSegment {
    Winners,
    Losers,
    GrandFinal,
    Group(u32),
}

impl fmt::Display for BracketSegment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BracketSegment::Winners => write!(f, "winners"),
            BracketSegment::Losers => write!(f, "losers"),
            BracketSegment::GrandFinal => write!(f, "grand_final"),
            BracketSegment::Group(index) => write!(f, "group_{}", index),
        }
    }
}

impl FromStr for BracketSegment {
    type Err = InterfaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "winners" => Ok(BracketSegment::Winners),
            "losers" => Ok(BracketSegment::Losers),
            "grand_final" => Ok(BracketSegment::GrandFinal),
            _ => s
                .strip_prefix("group_")
                .and_then(|index| index.parse::<u32>().ok())
                .map(BracketSegment::Group)
                .ok_or_else(|| InterfaceError::InvalidSegment {
                    value: s.to_string(),
                }),
        }
    }
}

impl TryFrom<String> for BracketSegment {
    type Error = InterfaceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BracketSegment> for String {
    fn from(segment: BracketSegment) -> Self {
        segment.to_string()
    }
}
