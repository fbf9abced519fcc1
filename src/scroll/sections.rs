//! Active navigation link from section geometry.

/// Vertical extent of a page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    /// Section element id.
    pub id: String,
    /// `offsetTop` in px.
    pub top: f64,
    /// `offsetHeight` in px.
    pub height: f64,
}

impl SectionBounds {
    /// Create bounds.
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y > self.top && y <= self.top + self.height
    }
}

/// Id of the section under `scroll_y + lookahead`. The last match wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, lookahead: f64) -> Option<&str> {
    let probe = scroll_y + lookahead;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(probe))
        .map(|section| section.id.as_str())
}

/// Whether a nav link `href` points at `section`.
pub fn link_targets(href: &str, section: Option<&str>) -> bool {
    match (href.strip_prefix('#'), section) {
        (Some(id), Some(section)) => id == section,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 600.0),
            SectionBounds::new("about", 600.0, 800.0),
            SectionBounds::new("skills", 1400.0, 500.0),
        ]
    }

    #[test]
    fn test_uses_lookahead() {
        let sections = page();
        assert_eq!(active_section(&sections, 0.0, 100.0), Some("home"));
        assert_eq!(active_section(&sections, 499.0, 100.0), Some("home"));
        assert_eq!(active_section(&sections, 501.0, 100.0), Some("about"));
        assert_eq!(active_section(&sections, 1350.0, 100.0), Some("skills"));
    }

    #[test]
    fn test_none_past_the_end() {
        assert_eq!(active_section(&page(), 5000.0, 100.0), None);
    }

    #[test]
    fn test_overlap_prefers_later_section() {
        let sections = vec![
            SectionBounds::new("outer", 0.0, 1000.0),
            SectionBounds::new("inner", 200.0, 100.0),
        ];
        assert_eq!(active_section(&sections, 150.0, 100.0), Some("inner"));
    }

    #[test]
    fn test_link_targets() {
        assert!(link_targets("#about", Some("about")));
        assert!(!link_targets("#about", Some("home")));
        assert!(!link_targets("#about", None));
        assert!(!link_targets("/about", Some("about")));
    }
}
