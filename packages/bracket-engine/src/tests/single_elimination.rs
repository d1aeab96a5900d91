use bracket_interface::BracketSegment;

use super::{ids, shape};
use crate::{generate_single_elimination, seed_participants, validate_topology};

#[test]
fn test_fewer_than_two_participants() {
    assert!(generate_single_elimination::<String>(&[]).is_empty());
    assert!(generate_single_elimination(&["A"]).is_empty());
}

#[test]
fn test_two_participants() {
    let matches = generate_single_elimination(&["A", "B"]);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].round, 1);
    assert_eq!(matches[0].player_1, Some("A"));
    assert_eq!(matches[0].player_2, Some("B"));
    assert_eq!(matches[0].segment, BracketSegment::Winners);
    assert_eq!(matches[0].next_match_winner, None);
}

#[test]
fn test_four_participants() {
    let matches = generate_single_elimination(&["A", "B", "C", "D"]);

    assert_eq!(matches.len(), 3);
    assert_eq!(
        (matches[0].player_1, matches[0].player_2),
        (Some("A"), Some("B"))
    );
    assert_eq!(
        (matches[1].player_1, matches[1].player_2),
        (Some("C"), Some("D"))
    );
    assert_eq!(matches[2].round, 2);
    assert!(matches[2].is_empty());

    assert_eq!(matches[0].next_match_winner, Some(2));
    assert_eq!(matches[1].next_match_winner, Some(2));
    assert_eq!(matches[2].next_match_winner, None);
}

#[test]
fn test_eight_participants() {
    let matches = generate_single_elimination(&ids(8));

    assert_eq!(
        shape(&matches),
        vec![
            ("W1".to_string(), Some(4), None),
            ("W1".to_string(), Some(4), None),
            ("W1".to_string(), Some(5), None),
            ("W1".to_string(), Some(5), None),
            ("W2".to_string(), Some(6), None),
            ("W2".to_string(), Some(6), None),
            ("W3".to_string(), None, None),
        ]
    );
}

#[test]
fn test_byes_for_three_participants() {
    let matches = generate_single_elimination(&["A", "B", "C"]);

    assert_eq!(matches.len(), 3);
    assert_eq!(
        (matches[0].player_1, matches[0].player_2),
        (Some("A"), Some("B"))
    );
    assert_eq!((matches[1].player_1, matches[1].player_2), (Some("C"), None));
    assert_eq!(matches[0].next_match_winner, Some(2));
    assert_eq!(matches[1].next_match_winner, Some(2));
}

#[test]
fn test_byes_for_five_participants() {
    let matches = generate_single_elimination(&["A", "B", "C", "D", "E"]);
    assert_eq!(matches.len(), 7);

    // Slots: A B C D E - - -
    let first_round = matches.iter().filter(|m| m.round == 1).collect::<Vec<_>>();
    assert_eq!(first_round.len(), 4);

    let absent_slots: usize = first_round
        .iter()
        .map(|m| 2 - m.players().count())
        .sum();
    assert_eq!(absent_slots, 3);

    let with_absent_slot = first_round
        .iter()
        .filter(|m| m.player_1.is_none() || m.player_2.is_none())
        .count();
    assert_eq!(with_absent_slot, 2);
}

#[test]
fn test_sixteen_participants() {
    let matches = generate_single_elimination(&ids(16));

    assert_eq!(matches.len(), 15);
    assert!(matches.iter().all(|m| m.segment == BracketSegment::Winners));
    assert!(matches.iter().all(|m| m.next_match_loser.is_none()));
    assert_eq!(matches.last().unwrap().round, 4);
    assert_eq!(validate_topology(&matches), Ok(()));
}

#[test]
fn test_match_numbers_are_sequential() {
    let matches = generate_single_elimination(&ids(8));
    for (i, match_) in matches.iter().enumerate() {
        assert_eq!(match_.match_number, i as u32 + 1);
    }
}

#[test]
fn test_seeding_keeps_input_order() {
    assert_eq!(
        seed_participants(&["A", "B", "C"], 4),
        vec![Some("A"), Some("B"), Some("C"), None]
    );
    assert_eq!(seed_participants(&["A", "B"], 2), vec![Some("A"), Some("B")]);
    assert_eq!(
        seed_participants(&[3, 1, 2], 8),
        vec![Some(3), Some(1), Some(2), None, None, None, None, None]
    );
}
