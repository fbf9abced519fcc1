//! In-page anchor navigation.

/// Whether an anchor `href` should be handled as in-page navigation.
pub fn is_in_page_anchor(href: &str) -> bool {
    href.len() > 1 && href.starts_with('#')
}

/// Document offset to scroll to so `target` clears the fixed header.
///
/// `element_top` is the target's viewport-relative top, `page_y` the current
/// scroll offset.
pub fn anchor_target(element_top: f64, page_y: f64, header_height: f64, extra_offset: f64) -> f64 {
    element_top + page_y - header_height - extra_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_hash_is_ignored() {
        assert!(!is_in_page_anchor("#"));
        assert!(is_in_page_anchor("#contact"));
        assert!(!is_in_page_anchor("https://example.com/#x"));
    }

    #[test]
    fn test_target_accounts_for_header_and_offset() {
        assert_eq!(anchor_target(400.0, 1000.0, 80.0, 20.0), 1300.0);
        assert_eq!(anchor_target(400.0, 1000.0, 80.0, 0.0), 1320.0);
    }
}
