//! Keyboard focus trapping for dialogs.

/// Elements that can take keyboard focus inside a trapped container.
pub const FOCUSABLE_SELECTOR: &str =
    r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

/// What to do with a Tab key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabAction {
    /// Let the browser move focus.
    PassThrough,
    /// Suppress the default and focus the element at this index.
    FocusIndex(usize),
}

/// Tab-order wrapping over `len` focusable elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusCycle {
    len: usize,
}

impl FocusCycle {
    /// Returns `None` when there is nothing to trap.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len })
    }

    /// Number of focusable elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Index of the last focusable element.
    #[inline]
    pub fn last(&self) -> usize {
        self.len - 1
    }

    /// Decide a Tab press given the index of the currently focused element.
    pub fn on_tab(&self, active: Option<usize>, shift: bool) -> TabAction {
        match (active, shift) {
            (Some(0), true) => TabAction::FocusIndex(self.last()),
            (Some(i), false) if i == self.last() => TabAction::FocusIndex(0),
            _ => TabAction::PassThrough,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_container_has_no_cycle() {
        assert!(FocusCycle::new(0).is_none());
    }

    #[test]
    fn test_wraps_at_ends() {
        let cycle = FocusCycle::new(3).unwrap();
        assert_eq!(cycle.on_tab(Some(2), false), TabAction::FocusIndex(0));
        assert_eq!(cycle.on_tab(Some(0), true), TabAction::FocusIndex(2));
    }

    #[test]
    fn test_passes_through_in_the_middle() {
        let cycle = FocusCycle::new(3).unwrap();
        assert_eq!(cycle.on_tab(Some(0), false), TabAction::PassThrough);
        assert_eq!(cycle.on_tab(Some(1), true), TabAction::PassThrough);
        assert_eq!(cycle.on_tab(Some(2), true), TabAction::PassThrough);
        assert_eq!(cycle.on_tab(None, false), TabAction::PassThrough);
    }

    #[test]
    fn test_single_element_wraps_onto_itself() {
        let cycle = FocusCycle::new(1).unwrap();
        assert_eq!(cycle.on_tab(Some(0), false), TabAction::FocusIndex(0));
        assert_eq!(cycle.on_tab(Some(0), true), TabAction::FocusIndex(0));
    }
}
