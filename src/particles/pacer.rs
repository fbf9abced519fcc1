//! Frame-rate cap for animation-frame driven loops.

/// Decides which animation frames actually execute.
///
/// Timestamps come from `requestAnimationFrame`. A frame runs when more than one
/// interval has elapsed since the last executed frame; the remainder is carried
/// so the long-run rate does not drift.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    interval: f64,
    last: Option<f64>,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::with_fps(60.0)
    }
}

impl FramePacer {
    /// Cap at `fps` frames per second.
    pub fn with_fps(fps: f64) -> Self {
        Self {
            interval: 1000.0 / fps.max(1.0),
            last: None,
        }
    }

    /// Target interval between frames (ms).
    #[inline]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Returns `true` if a frame should run at `timestamp`.
    pub fn tick(&mut self, timestamp: f64) -> bool {
        let last = *self.last.get_or_insert(timestamp);
        let delta = timestamp - last;
        if delta > self.interval {
            self.last = Some(timestamp - delta % self.interval);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_seeds() {
        let mut pacer = FramePacer::with_fps(60.0);
        assert!(!pacer.tick(1000.0));
        assert!(!pacer.tick(1010.0));
        assert!(pacer.tick(1017.0));
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut pacer = FramePacer::with_fps(50.0); // 20 ms
        pacer.tick(0.0);
        assert!(pacer.tick(25.0));
        // Last frame is treated as 20 ms, so 41 ms is already due.
        assert!(pacer.tick(41.0));
        assert!(!pacer.tick(55.0));
    }

    #[test]
    fn test_high_refresh_display_is_capped() {
        let mut pacer = FramePacer::with_fps(60.0);
        let mut executed = 0;
        // 144 Hz for one second.
        for i in 0..=144 {
            if pacer.tick(i as f64 * 1000.0 / 144.0) {
                executed += 1;
            }
        }
        assert!(executed <= 60, "executed {executed}");
        assert!(executed >= 45, "executed {executed}");
    }
}
