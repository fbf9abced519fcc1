//! Skills carousel.
//!
//! The carousel advances on its own every few seconds and yields to the user:
//! any interaction pauses auto-advance until a quiet period has passed, and
//! hovering or hiding the tab stops it outright.

use crate::core::{earliest, CarouselConfig, Deadline, Scheduled};

/// Distance from the target at which a smooth scroll counts as settled (px).
const SETTLED_PX: f64 = 1.0;

/// Horizontal geometry of one card inside the scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMetrics {
    /// `offsetLeft` in px.
    pub left: f64,
    /// `offsetWidth` in px.
    pub width: f64,
}

impl CardMetrics {
    /// Horizontal center.
    #[inline]
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// `scrollLeft` that centers a card in a container of `container_width`.
pub fn centered_scroll_left(card: CardMetrics, container_width: f64) -> f64 {
    card.left - (container_width - card.width) / 2.0
}

/// Index of a card whose center lies within half a card width of the
/// container's visual center. The last match wins.
pub fn nearest_card(scroll_left: f64, container_width: f64, cards: &[CardMetrics]) -> Option<usize> {
    let center = scroll_left + container_width / 2.0;
    cards
        .iter()
        .enumerate()
        .rev()
        .find(|(_, card)| (center - card.center()).abs() < card.width / 2.0)
        .map(|(i, _)| i)
}

/// Wrap a possibly out-of-range index onto `0..len`.
pub fn wrap_index(index: isize, len: usize) -> usize {
    debug_assert!(len > 0);
    index.rem_euclid(len as isize) as usize
}

/// Display state after a carousel change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselView {
    /// Active card and dot.
    pub index: usize,
    /// Disable the previous control.
    pub prev_disabled: bool,
    /// Disable the next control.
    pub next_disabled: bool,
    /// Scroll the container to center the active card.
    pub center_card: bool,
}

/// Carousel state with virtual-time deadlines.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    interacting: bool,
    hovered: bool,
    page_hidden: bool,
    advance: Deadline,
    interaction_ends: Deadline,
    programmatic_until: f64,
    last_scroll_left: Option<f64>,
    advance_ms: f64,
    resume_after_ms: f64,
    programmatic_ms: f64,
}

impl Carousel {
    /// Create a carousel over `len` cards, starting auto-advance at `now`.
    /// Returns `None` when there are no cards.
    pub fn new(len: usize, config: &CarouselConfig, now: f64) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let mut carousel = Self {
            len,
            index: 0,
            interacting: false,
            hovered: false,
            page_hidden: false,
            advance: Deadline::new(),
            interaction_ends: Deadline::new(),
            programmatic_until: f64::NEG_INFINITY,
            last_scroll_left: None,
            advance_ms: config.advance_ms,
            resume_after_ms: config.resume_after_ms,
            programmatic_ms: config.programmatic_scroll_ms,
        };
        carousel.restart_auto_advance(now);
        Some(carousel)
    }

    /// Number of cards.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; an empty carousel cannot be built.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Active card.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the user is considered to be interacting.
    #[inline]
    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    /// Whether auto-advance is currently scheduled.
    #[inline]
    pub fn is_auto_advancing(&self) -> bool {
        self.advance.is_armed()
    }

    /// Current display state without recentering.
    pub fn view(&self) -> CarouselView {
        CarouselView {
            index: self.index,
            prev_disabled: self.index == 0,
            next_disabled: self.index == self.len - 1,
            center_card: false,
        }
    }

    fn restart_auto_advance(&mut self, now: f64) {
        if self.hovered || self.page_hidden {
            self.advance.disarm();
        } else {
            self.advance.arm(now + self.advance_ms);
        }
    }

    fn mark_interaction(&mut self, now: f64) {
        self.interacting = true;
        self.interaction_ends.arm(now + self.resume_after_ms);
    }

    /// Go to `index` (wrapping), recenter and restart auto-advance.
    pub fn scroll_to(&mut self, index: isize, now: f64) -> CarouselView {
        self.index = wrap_index(index, self.len);
        self.programmatic_until = now + self.programmatic_ms;
        self.restart_auto_advance(now);
        CarouselView {
            center_card: true,
            ..self.view()
        }
    }

    /// Previous control. Does nothing on the first card.
    pub fn prev(&mut self, now: f64) -> Option<CarouselView> {
        if self.index == 0 {
            return None;
        }
        self.mark_interaction(now);
        Some(self.scroll_to(self.index as isize - 1, now))
    }

    /// Next control. Does nothing on the last card.
    pub fn next(&mut self, now: f64) -> Option<CarouselView> {
        if self.index + 1 == self.len {
            return None;
        }
        self.mark_interaction(now);
        Some(self.scroll_to(self.index as isize + 1, now))
    }

    /// Dot navigation.
    pub fn select(&mut self, index: usize, now: f64) -> CarouselView {
        self.mark_interaction(now);
        self.scroll_to(index as isize, now)
    }

    /// Touch start or mouse down on the container.
    pub fn touch(&mut self, now: f64) {
        self.mark_interaction(now);
    }

    /// Whether a scroll event belongs to our own smooth scroll: still inside
    /// the programmatic window and not moving away from the centered target.
    fn is_own_scroll(
        &self,
        scroll_left: f64,
        container_width: f64,
        cards: &[CardMetrics],
        now: f64,
    ) -> bool {
        if now >= self.programmatic_until {
            return false;
        }
        let Some(card) = cards.get(self.index) else {
            return false;
        };
        let target = centered_scroll_left(*card, container_width);
        let remaining = (scroll_left - target).abs();
        remaining <= SETTLED_PX
            || !matches!(self.last_scroll_left, Some(last) if remaining > (last - target).abs())
    }

    /// The container scrolled. Scroll events caused by our own smooth scroll
    /// are ignored; otherwise the card nearest the center becomes active.
    pub fn on_scrolled(
        &mut self,
        scroll_left: f64,
        container_width: f64,
        cards: &[CardMetrics],
        now: f64,
    ) -> Option<CarouselView> {
        let own = self.is_own_scroll(scroll_left, container_width, cards, now);
        self.last_scroll_left = Some(scroll_left);
        if own {
            return None;
        }
        self.programmatic_until = f64::NEG_INFINITY;
        self.mark_interaction(now);
        match nearest_card(scroll_left, container_width, cards) {
            Some(i) if i != self.index && i < self.len => {
                self.index = i;
                Some(self.view())
            }
            _ => None,
        }
    }

    /// Pointer entered: pause auto-advance.
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        self.interacting = true;
        self.advance.disarm();
    }

    /// Pointer left: resume auto-advance.
    pub fn pointer_leave(&mut self, now: f64) {
        self.hovered = false;
        self.interacting = false;
        self.restart_auto_advance(now);
    }

    /// Tab visibility changed.
    pub fn set_page_hidden(&mut self, hidden: bool, now: f64) {
        self.page_hidden = hidden;
        self.restart_auto_advance(now);
    }

    /// Viewport resized: recenter without changing the index.
    pub fn resize(&mut self, now: f64) -> CarouselView {
        self.scroll_to(self.index as isize, now)
    }

    /// Fire due deadlines in time order. Returns the latest view if the
    /// active card changed.
    pub fn poll(&mut self, now: f64) -> Option<CarouselView> {
        let mut view = None;
        loop {
            let interaction = self.interaction_ends.at().filter(|at| *at <= now);
            let advance = self.advance.at().filter(|at| *at <= now);
            match (interaction, advance) {
                (Some(i), Some(a)) if i <= a => {
                    self.interaction_ends.disarm();
                    self.interacting = false;
                }
                (Some(_), None) => {
                    self.interaction_ends.disarm();
                    self.interacting = false;
                }
                (_, Some(at)) => {
                    if self.interacting {
                        self.advance.arm(at + self.advance_ms);
                    } else {
                        view = Some(self.scroll_to(self.index as isize + 1, at));
                    }
                }
                (None, None) => break,
            }
        }
        view
    }
}

impl Scheduled for Carousel {
    fn next_deadline(&self) -> Option<f64> {
        earliest([self.advance.at(), self.interaction_ends.at()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(len, &CarouselConfig::default(), 0.0).unwrap()
    }

    #[test]
    fn test_empty_carousel_is_none() {
        assert!(Carousel::new(0, &CarouselConfig::default(), 0.0).is_none());
    }

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(-1, 5), 4);
        assert_eq!(wrap_index(5, 5), 0);
        assert_eq!(wrap_index(2, 5), 2);
    }

    #[test]
    fn test_three_unattended_cycles() {
        let mut c = carousel(5);
        let view = c.poll(9000.0).unwrap();
        assert_eq!(view.index, 3);
        assert_eq!(c.index(), 3);
        assert_eq!(c.next_deadline(), Some(12000.0));
    }

    #[test]
    fn test_auto_advance_wraps_around() {
        let mut c = carousel(2);
        c.poll(3000.0);
        assert_eq!(c.index(), 1);
        let view = c.poll(6000.0).unwrap();
        assert_eq!(view.index, 0);
        assert!(view.prev_disabled);
        assert!(!view.next_disabled);
    }

    #[test]
    fn test_controls_do_not_wrap() {
        let mut c = carousel(3);
        assert!(c.prev(0.0).is_none());
        assert_eq!(c.next(0.0).unwrap().index, 1);
        let view = c.next(0.0).unwrap();
        assert_eq!(view.index, 2);
        assert!(view.next_disabled);
        assert!(c.next(0.0).is_none());
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_dots_wrap_through_select() {
        let mut c = carousel(3);
        let view = c.select(2, 0.0);
        assert_eq!(view.index, 2);
        assert!(view.center_card);
    }

    #[test]
    fn test_interaction_pauses_until_quiet() {
        let mut c = carousel(5);
        c.touch(1000.0);
        // Advance at 3000 is skipped because the user interacted.
        assert!(c.poll(3000.0).is_none());
        assert_eq!(c.index(), 0);
        // Interaction ends at 6000, the same instant as the re-armed advance.
        // Clearing runs first, so that advance goes ahead.
        let view = c.poll(6000.0).unwrap();
        assert_eq!(view.index, 1);
        assert!(!c.is_interacting());
    }

    #[test]
    fn test_hover_stops_auto_advance() {
        let mut c = carousel(5);
        c.pointer_enter();
        assert!(!c.is_auto_advancing());
        assert!(c.poll(30_000.0).is_none());
        c.pointer_leave(30_000.0);
        assert_eq!(c.next_deadline(), Some(33_000.0));
        assert_eq!(c.poll(33_000.0).unwrap().index, 1);
    }

    #[test]
    fn test_hover_survives_control_clicks() {
        let mut c = carousel(5);
        c.pointer_enter();
        c.next(100.0);
        assert!(!c.is_auto_advancing());
        c.poll(10_000.0);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_hidden_tab_pauses() {
        let mut c = carousel(5);
        c.set_page_hidden(true, 1000.0);
        assert!(c.poll(20_000.0).is_none());
        c.set_page_hidden(false, 20_000.0);
        assert_eq!(c.poll(23_000.0).unwrap().index, 1);
    }

    #[test]
    fn test_manual_scroll_tracks_nearest_card() {
        let cards: Vec<_> = (0..4)
            .map(|i| CardMetrics { left: i as f64 * 300.0, width: 280.0 })
            .collect();
        let mut c = carousel(4);
        let view = c.on_scrolled(500.0, 400.0, &cards, 1000.0).unwrap();
        // Center 700 is within 140 of card 2's center (740).
        assert_eq!(view.index, 2);
        assert!(!view.center_card);
        assert!(c.is_interacting());
        // Same card again: nothing to update.
        assert!(c.on_scrolled(510.0, 400.0, &cards, 1100.0).is_none());
    }

    #[test]
    fn test_own_smooth_scroll_is_not_interaction() {
        let cards = [CardMetrics { left: 0.0, width: 100.0 }, CardMetrics { left: 100.0, width: 100.0 }];
        let mut c = carousel(2);
        c.scroll_to(1, 3000.0);
        assert!(c.on_scrolled(50.0, 100.0, &cards, 3100.0).is_none());
        assert!(!c.is_interacting());
    }

    #[test]
    fn test_user_scroll_during_auto_advance_is_interaction() {
        let cards: Vec<_> = (0..4)
            .map(|i| CardMetrics { left: i as f64 * 300.0, width: 280.0 })
            .collect();
        let mut c = carousel(4);
        c.poll(3000.0);
        // Card 1 centers at scrollLeft 240 in a 400px container.
        assert_eq!(c.index(), 1);
        assert!(c.on_scrolled(80.0, 400.0, &cards, 3100.0).is_none());
        assert!(c.on_scrolled(150.0, 400.0, &cards, 3200.0).is_none());
        assert!(!c.is_interacting());

        // The user drags past it before the window closes.
        let view = c.on_scrolled(500.0, 400.0, &cards, 3300.0).unwrap();
        assert_eq!(view.index, 2);
        assert!(c.is_interacting());
        assert_eq!(c.poll(6000.0), None);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_centered_scroll_left() {
        let card = CardMetrics { left: 600.0, width: 200.0 };
        assert_eq!(centered_scroll_left(card, 1000.0), 200.0);
    }

    #[test]
    fn test_index_always_in_range() {
        let mut c = carousel(4);
        let mut now = 0.0;
        for step in 0..200 {
            now += 700.0;
            match step % 5 {
                0 => {
                    c.next(now);
                }
                1 => {
                    c.prev(now);
                }
                2 => {
                    c.select(step % 7, now);
                }
                3 => c.touch(now),
                _ => {
                    c.poll(now);
                }
            }
            assert!(c.index() < c.len());
        }
    }
}
