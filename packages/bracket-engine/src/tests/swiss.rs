use bracket_interface::BracketSegment;
use itertools::Itertools;

use super::ids;
use crate::{default_swiss_rounds, generate_swiss};

#[test]
fn test_fewer_than_two_participants() {
    assert!(generate_swiss::<String>(&[], None).is_empty());
    assert!(generate_swiss(&["A"], Some(3)).is_empty());
}

#[test]
fn test_default_rounds() {
    assert_eq!(default_swiss_rounds(2), 1);
    assert_eq!(default_swiss_rounds(3), 2);
    assert_eq!(default_swiss_rounds(5), 3);
    assert_eq!(default_swiss_rounds(8), 3);
    assert_eq!(default_swiss_rounds(9), 4);
    assert_eq!(default_swiss_rounds(32), 5);
}

#[test]
fn test_two_participants() {
    let matches = generate_swiss(&["A", "B"], None);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].round, 1);
    assert_eq!(matches[0].match_number, 1);
    assert_eq!(matches[0].player_1, Some("A"));
    assert_eq!(matches[0].player_2, Some("B"));
    assert_eq!(matches[0].segment, BracketSegment::Winners);
}

#[test]
fn test_eight_participants() {
    let matches = generate_swiss(&ids(8), None);

    assert_eq!(matches.len(), 12);
    let per_round = matches.iter().map(|m| m.round).counts();
    assert_eq!(per_round.len(), 3);
    assert!(per_round.values().all(|&count| count == 4));
}

#[test]
fn test_first_round_is_seeded_and_later_rounds_are_placeholders() {
    let matches = generate_swiss(&["A", "B", "C", "D", "E", "F"], None);

    let first_round = matches.iter().filter(|m| m.round == 1).collect_vec();
    assert_eq!(
        first_round
            .iter()
            .map(|m| (m.player_1, m.player_2))
            .collect_vec(),
        vec![
            (Some("A"), Some("B")),
            (Some("C"), Some("D")),
            (Some("E"), Some("F")),
        ]
    );
    assert!(matches.iter().filter(|m| m.round > 1).all(|m| m.is_empty()));
}

#[test]
fn test_odd_field_gives_the_last_seed_a_bye() {
    let matches = generate_swiss(&["A", "B", "C", "D", "E"], None);

    // The bye is a match of its own, so each of the three rounds holds
    // ceil(5 / 2) = 3 matches
    assert_eq!(matches.len(), 9);
    let first_round = matches.iter().filter(|m| m.round == 1).collect_vec();
    assert_eq!(first_round.len(), 3);
    assert_eq!((first_round[2].player_1, first_round[2].player_2), (Some("E"), None));
    assert!(first_round[2].has_bye());
    assert_eq!(first_round.iter().filter(|m| m.has_bye()).count(), 1);
}

#[test]
fn test_custom_round_count() {
    let matches = generate_swiss(&ids(4), Some(5));

    assert_eq!(matches.len(), 10);
    assert_eq!(matches.iter().map(|m| m.round).unique().count(), 5);

    assert!(generate_swiss(&ids(4), Some(0)).is_empty());
    assert_eq!(generate_swiss(&ids(4), Some(1)).len(), 2);
}

#[test]
fn test_no_links_and_sequential_numbers() {
    let matches = generate_swiss(&ids(32), None);

    assert_eq!(matches.len(), 80);
    for (i, match_) in matches.iter().enumerate() {
        assert_eq!(match_.match_number, i as u32 + 1);
        assert_eq!(match_.next_match_winner, None);
        assert_eq!(match_.next_match_loser, None);
        assert_eq!(match_.segment, BracketSegment::Winners);
    }
}
