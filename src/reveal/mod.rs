//! Entrance animations: staggered hero text and scroll reveals.

/// Class that triggers the CSS entrance transition.
pub const SHOW_CLASS: &str = "show";

/// Delay for the `i`-th element of a staggered group.
#[inline]
pub fn stagger_delay(i: usize, step_ms: f64) -> f64 {
    i as f64 * step_ms
}

/// Delays for the intersecting entries of one observer batch.
///
/// The position within the batch counts every entry, visible or not, so cards
/// that scroll in together still cascade.
pub fn batch_delays(intersecting: &[bool], step_ms: f64) -> Vec<(usize, f64)> {
    intersecting
        .iter()
        .enumerate()
        .filter(|(_, visible)| **visible)
        .map(|(i, _)| (i, stagger_delay(i, step_ms)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 200.0), 0.0);
        assert_eq!(stagger_delay(3, 200.0), 600.0);
    }

    #[test]
    fn test_batch_delays_skip_hidden_entries() {
        let delays = batch_delays(&[true, false, true], 150.0);
        assert_eq!(delays, vec![(0, 0.0), (2, 300.0)]);
    }
}
