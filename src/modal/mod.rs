//! Modal dialog lifecycle.
//!
//! A modal cycles `Hidden → Opening → Open → Closing → Hidden`. Transitions
//! emit [`ModalEffect`]s for the DOM layer to apply; the two timed steps (show
//! after a short delay, hide after the CSS transition) are deadlines.

use crate::core::{earliest, Deadline, ModalConfig, Scheduled};

/// Lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    /// Not displayed.
    #[default]
    Hidden,
    /// Displayed, waiting to add the `show` class.
    Opening,
    /// Fully shown.
    Open,
    /// `show` removed, waiting for the transition to finish.
    Closing,
}

/// A DOM change requested by the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEffect {
    /// Set `display` to visible (`flex`) or `none`.
    Display(bool),
    /// Add or remove the body's `modal-open` class.
    LockScroll(bool),
    /// Update `aria-expanded` on the trigger.
    SetExpanded(bool),
    /// Read layout so the next class change transitions.
    ForceReflow,
    /// Add or remove the `show` class.
    SetShown(bool),
    /// Install the focus trap on the modal root.
    TrapFocus,
    /// Remove the focus trap.
    ReleaseFocusTrap,
    /// Focus the control that opened the modal.
    RestoreFocus,
}

/// State machine for one modal instance.
#[derive(Debug, Clone)]
pub struct Modal {
    phase: ModalPhase,
    show: Deadline,
    hide: Deadline,
    reopen_queued: bool,
    show_delay: f64,
    transition: f64,
}

impl Default for Modal {
    fn default() -> Self {
        Self::new(&ModalConfig::default())
    }
}

impl Modal {
    /// Create a hidden modal.
    pub fn new(config: &ModalConfig) -> Self {
        Self {
            phase: ModalPhase::Hidden,
            show: Deadline::new(),
            hide: Deadline::new(),
            reopen_queued: false,
            show_delay: config.show_delay_ms,
            transition: config.transition_ms,
        }
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Whether the modal is displayed at all.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.phase != ModalPhase::Hidden
    }

    /// Request the modal to open.
    ///
    /// Ignored while already opening or open. During a close transition the
    /// request is queued and replayed once the modal is hidden.
    pub fn open(&mut self, now: f64) -> Vec<ModalEffect> {
        match self.phase {
            ModalPhase::Hidden => {
                self.phase = ModalPhase::Opening;
                self.show.arm(now + self.show_delay);
                vec![
                    ModalEffect::Display(true),
                    ModalEffect::LockScroll(true),
                    ModalEffect::SetExpanded(true),
                    ModalEffect::ForceReflow,
                    ModalEffect::TrapFocus,
                ]
            }
            ModalPhase::Closing => {
                self.reopen_queued = true;
                Vec::new()
            }
            ModalPhase::Opening | ModalPhase::Open => Vec::new(),
        }
    }

    /// Request the modal to close. Ignored when hidden or already closing.
    pub fn close(&mut self, now: f64) -> Vec<ModalEffect> {
        match self.phase {
            ModalPhase::Opening | ModalPhase::Open => {
                self.phase = ModalPhase::Closing;
                self.show.disarm();
                self.hide.arm(now + self.transition);
                vec![ModalEffect::SetShown(false)]
            }
            ModalPhase::Closing => {
                self.reopen_queued = false;
                Vec::new()
            }
            ModalPhase::Hidden => Vec::new(),
        }
    }

    /// Fire due deadlines.
    pub fn poll(&mut self, now: f64) -> Vec<ModalEffect> {
        let mut effects = Vec::new();

        if self.show.take_due(now).is_some() {
            self.phase = ModalPhase::Open;
            effects.push(ModalEffect::SetShown(true));
        }

        if let Some(at) = self.hide.take_due(now) {
            self.phase = ModalPhase::Hidden;
            effects.extend([
                ModalEffect::Display(false),
                ModalEffect::LockScroll(false),
                ModalEffect::SetExpanded(false),
                ModalEffect::ReleaseFocusTrap,
                ModalEffect::RestoreFocus,
            ]);
            if std::mem::take(&mut self.reopen_queued) {
                effects.extend(self.open(at));
                effects.extend(self.poll(now));
            }
        }

        effects
    }
}

impl Scheduled for Modal {
    fn next_deadline(&self) -> Option<f64> {
        earliest([self.show.at(), self.hide.at()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_show() {
        let mut modal = Modal::default();
        let effects = modal.open(0.0);
        assert_eq!(effects[0], ModalEffect::Display(true));
        assert!(effects.contains(&ModalEffect::TrapFocus));
        assert_eq!(modal.phase(), ModalPhase::Opening);
        assert_eq!(modal.next_deadline(), Some(10.0));

        assert!(modal.poll(5.0).is_empty());
        assert_eq!(modal.poll(10.0), vec![ModalEffect::SetShown(true)]);
        assert_eq!(modal.phase(), ModalPhase::Open);
        assert_eq!(modal.next_deadline(), None);
    }

    #[test]
    fn test_escape_right_after_open_hides_and_restores_focus() {
        let mut modal = Modal::default();
        modal.open(0.0);
        assert!(modal.is_visible());

        // Escape before the show delay elapsed.
        assert_eq!(modal.close(1.0), vec![ModalEffect::SetShown(false)]);
        assert_eq!(modal.phase(), ModalPhase::Closing);

        assert!(modal.poll(300.0).is_empty());
        let effects = modal.poll(301.0);
        assert!(effects.contains(&ModalEffect::Display(false)));
        assert!(effects.contains(&ModalEffect::LockScroll(false)));
        assert_eq!(effects.last(), Some(&ModalEffect::RestoreFocus));
        assert_eq!(modal.phase(), ModalPhase::Hidden);
        assert!(!modal.is_visible());
    }

    #[test]
    fn test_repeated_open_is_ignored() {
        let mut modal = Modal::default();
        modal.open(0.0);
        assert!(modal.open(2.0).is_empty());
        modal.poll(10.0);
        assert!(modal.open(20.0).is_empty());
    }

    #[test]
    fn test_close_when_hidden_is_ignored() {
        let mut modal = Modal::default();
        assert!(modal.close(0.0).is_empty());
        assert_eq!(modal.next_deadline(), None);
    }

    #[test]
    fn test_open_during_close_is_queued() {
        let mut modal = Modal::default();
        modal.open(0.0);
        modal.poll(10.0);
        modal.close(100.0);
        assert!(modal.open(150.0).is_empty());

        let effects = modal.poll(400.0);
        assert!(effects.contains(&ModalEffect::RestoreFocus));
        // Reopened at 400 and, since 410 is not yet due, still opening.
        assert_eq!(effects.last(), Some(&ModalEffect::TrapFocus));
        assert_eq!(modal.phase(), ModalPhase::Opening);
        assert_eq!(modal.poll(410.0), vec![ModalEffect::SetShown(true)]);
    }

    #[test]
    fn test_close_cancels_queued_reopen() {
        let mut modal = Modal::default();
        modal.open(0.0);
        modal.close(50.0);
        modal.open(60.0);
        modal.close(70.0);
        modal.poll(350.0);
        assert_eq!(modal.phase(), ModalPhase::Hidden);
        assert_eq!(modal.next_deadline(), None);
    }
}
