/// Smallest power of two that fits `participant_count`, never below 2.
pub fn bracket_capacity(participant_count: usize) -> usize {
    participant_count.max(2).next_power_of_two()
}

/// Number of winners rounds in a knockout tree of the given capacity.
pub fn winners_rounds(capacity: usize) -> u32 {
    capacity.trailing_zeros()
}

/// Places participants into `capacity` bracket slots in input order.
///
/// Slots past the end of the input are byes. No seeding pattern is applied,
/// callers who want the top seeds kept apart must order the input themselves.
pub fn seed_participants<T: Clone>(participants: &[T], capacity: usize) -> Vec<Option<T>> {
    participants
        .iter()
        .cloned()
        .map(Some)
        .chain(std::iter::repeat_with(|| None))
        .take(capacity.max(participants.len()))
        .collect()
}
