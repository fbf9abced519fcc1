//! Mobile navigation menu.

/// Icon class while the menu is closed.
pub const ICON_CLOSED: &str = "fa-bars";
/// Icon class while the menu is open.
pub const ICON_OPEN: &str = "fa-times";

/// Display state of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavView {
    /// `#nav` carries `open` and the toggle is `aria-expanded`.
    pub open: bool,
    /// Icon class to show.
    pub icon: &'static str,
    /// Icon class to replace.
    pub previous_icon: &'static str,
    /// Lock body scrolling.
    pub lock_scroll: bool,
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// A closed menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu is open.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu.
    pub fn toggle(&mut self) -> NavView {
        self.open = !self.open;
        let (icon, previous_icon) = if self.open {
            (ICON_OPEN, ICON_CLOSED)
        } else {
            (ICON_CLOSED, ICON_OPEN)
        };
        NavView {
            open: self.open,
            icon,
            previous_icon,
            lock_scroll: self.open,
        }
    }

    /// Close if open.
    pub fn close(&mut self) -> Option<NavView> {
        self.open.then(|| self.toggle())
    }

    /// Whether a document click should close the menu.
    pub fn closes_on_click(&self, inside_nav: bool, inside_toggle: bool) -> bool {
        self.open && !inside_nav && !inside_toggle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_swaps_icons() {
        let mut nav = NavMenu::new();
        let view = nav.toggle();
        assert!(view.open && view.lock_scroll);
        assert_eq!((view.previous_icon, view.icon), (ICON_CLOSED, ICON_OPEN));
        let view = nav.toggle();
        assert!(!view.open);
        assert_eq!((view.previous_icon, view.icon), (ICON_OPEN, ICON_CLOSED));
    }

    #[test]
    fn test_close_only_when_open() {
        let mut nav = NavMenu::new();
        assert!(nav.close().is_none());
        nav.toggle();
        assert!(!nav.close().unwrap().open);
        assert!(!nav.is_open());
    }

    #[test]
    fn test_outside_click() {
        let mut nav = NavMenu::new();
        assert!(!nav.closes_on_click(false, false));
        nav.toggle();
        assert!(nav.closes_on_click(false, false));
        assert!(!nav.closes_on_click(true, false));
        assert!(!nav.closes_on_click(false, true));
    }
}
