//! Page-wide chrome: responsive breakpoints, skip link and the loading spinner.

use crate::core::PageConfig;

/// Id given to `<main>` so the skip link has a target.
pub const MAIN_CONTENT_ID: &str = "main-content";

/// Inline style of the skip link while off screen.
pub const SKIP_LINK_STYLE: &str = "position: absolute; top: -40px; left: 6px; \
     background: #6f8cff; color: white; padding: 8px 16px; text-decoration: none; \
     border-radius: 4px; z-index: 10000; transition: top 0.3s;";

/// `top` of the skip link when focused / blurred.
pub const SKIP_LINK_TOP_FOCUSED: &str = "6px";
/// See [`SKIP_LINK_TOP_FOCUSED`].
pub const SKIP_LINK_TOP_HIDDEN: &str = "-40px";

/// Responsive viewport class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    /// Phones.
    Mobile,
    /// Tablets.
    Tablet,
    /// Everything wider.
    Desktop,
}

impl Viewport {
    /// Classify a viewport width.
    pub fn classify(width: f64, config: &PageConfig) -> Self {
        if width <= config.mobile_max_width {
            Viewport::Mobile
        } else if width <= config.tablet_max_width {
            Viewport::Tablet
        } else {
            Viewport::Desktop
        }
    }

    /// Whether this is a phone-sized viewport.
    #[inline]
    pub fn is_mobile(self) -> bool {
        self == Viewport::Mobile
    }
}

/// `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    /// Still parsing.
    Loading,
    /// Parsed; subresources may still be loading.
    Interactive,
    /// Fully loaded.
    Complete,
}

impl ReadyState {
    /// Parse the DOM's string value. Unknown values count as `Interactive`.
    pub fn parse(state: &str) -> Self {
        match state {
            "loading" => ReadyState::Loading,
            "complete" => ReadyState::Complete,
            _ => ReadyState::Interactive,
        }
    }

    /// Whether `DOMContentLoaded` has yet to fire.
    #[inline]
    pub fn is_loading(self) -> bool {
        self == ReadyState::Loading
    }

    /// Whether the window `load` event has already fired.
    #[inline]
    pub fn is_complete(self) -> bool {
        self == ReadyState::Complete
    }
}

/// Body class announcing the input modality.
pub fn touch_class(is_touch: bool) -> &'static str {
    if is_touch {
        "touch-device"
    } else {
        "no-touch-device"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        let config = PageConfig::default();
        assert_eq!(Viewport::classify(375.0, &config), Viewport::Mobile);
        assert_eq!(Viewport::classify(768.0, &config), Viewport::Mobile);
        assert_eq!(Viewport::classify(769.0, &config), Viewport::Tablet);
        assert_eq!(Viewport::classify(1024.0, &config), Viewport::Tablet);
        assert_eq!(Viewport::classify(1440.0, &config), Viewport::Desktop);
    }

    #[test]
    fn test_ready_state_from_dom_strings() {
        assert!(ReadyState::parse("loading").is_loading());
        assert_eq!(ReadyState::parse("interactive"), ReadyState::Interactive);
        assert!(ReadyState::parse("complete").is_complete());
        assert!(!ReadyState::parse("complete").is_loading());
        assert_eq!(ReadyState::parse(""), ReadyState::Interactive);
    }

    #[test]
    fn test_touch_class() {
        assert_eq!(touch_class(true), "touch-device");
        assert_eq!(touch_class(false), "no-touch-device");
    }
}
