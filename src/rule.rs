/// B3/S23: a live cell survives with 2 or 3 live neighbours, a dead cell is born with exactly 3.
#[inline]
pub fn next_state(is_alive: bool, live_neighbours: u8) -> bool {
    debug_assert!(live_neighbours <= 8);
    if is_alive {
        live_neighbours == 2 || live_neighbours == 3
    } else {
        live_neighbours == 3
    }
}

#[cfg(test)]
mod tests {
    use super::next_state;

    #[test]
    fn test_full_table() {
        for count in 0..=8u8 {
            assert_eq!(next_state(true, count), count == 2 || count == 3, "alive, {count}");
            assert_eq!(next_state(false, count), count == 3, "dead, {count}");
        }
    }

    #[test]
    fn test_known_entries() {
        assert!(next_state(true, 3));
        assert!(!next_state(true, 4));
        assert!(next_state(false, 3));
        assert!(!next_state(false, 2));
        assert!(!next_state(true, 1));
    }
}
