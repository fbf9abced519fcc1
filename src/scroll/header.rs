//! Header visibility and scroll progress.

use crate::core::ScrollConfig;

/// Header-related classes for a scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderState {
    /// Header carries `hidden`.
    pub hidden: bool,
    /// Body carries `scrolled`.
    pub scrolled: bool,
}

/// Tracks scroll direction to hide the header while scrolling down.
#[derive(Debug, Clone, Copy)]
pub struct HeaderTracker {
    last: f64,
    hide_threshold: f64,
    scrolled_threshold: f64,
}

impl Default for HeaderTracker {
    fn default() -> Self {
        Self::new(&ScrollConfig::default())
    }
}

impl HeaderTracker {
    /// Create a tracker at the top of the page.
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            last: 0.0,
            hide_threshold: config.header_hide_threshold,
            scrolled_threshold: config.scrolled_class_threshold,
        }
    }

    /// Feed the current vertical scroll offset.
    pub fn on_scroll(&mut self, y: f64) -> HeaderState {
        let hidden = y > self.last && y > self.hide_threshold;
        self.last = y.max(0.0);
        HeaderState {
            hidden,
            scrolled: y > self.scrolled_threshold,
        }
    }
}

/// Width of the progress bar in percent, always within `[0, 100]`.
pub fn progress_percent(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hides_only_when_scrolling_down_past_threshold() {
        let mut header = HeaderTracker::default();
        assert!(!header.on_scroll(80.0).hidden);
        assert!(header.on_scroll(150.0).hidden);
        assert!(header.on_scroll(300.0).hidden);
        // Any upward motion shows it again.
        assert!(!header.on_scroll(290.0).hidden);
        // Same position is not downward motion.
        assert!(!header.on_scroll(290.0).hidden);
    }

    #[test]
    fn test_scrolled_class_threshold() {
        let mut header = HeaderTracker::default();
        assert!(!header.on_scroll(50.0).scrolled);
        assert!(header.on_scroll(51.0).scrolled);
        assert!(!header.on_scroll(10.0).scrolled);
    }

    #[test]
    fn test_overscroll_resets_last_to_zero() {
        let mut header = HeaderTracker::default();
        header.on_scroll(-30.0);
        assert!(!header.on_scroll(-10.0).hidden);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(progress_percent(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(progress_percent(1500.0, 2000.0, 1000.0), 100.0);
        assert_eq!(progress_percent(-20.0, 2000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(100.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn test_progress_bounds_over_many_offsets() {
        for s in (-500..5000).step_by(37) {
            let p = progress_percent(s as f64, 3000.0, 900.0);
            assert!((0.0..=100.0).contains(&p), "offset {s} gave {p}");
        }
    }
}
