//! Site configuration.
//!
//! Every timing and threshold the page uses lives here. The defaults are the
//! production values; a page may override any subset through an embedded JSON
//! document (`<script id="site-config" type="application/json">`).

use serde::{Deserialize, Serialize};

use super::error::Result;
use crate::particles::ResizePolicy;

/// Log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Logging disabled.
    Off,
    /// Errors only.
    Error,
    /// Warnings and errors.
    Warn,
    /// Informational messages.
    #[default]
    Info,
    /// Debug output.
    Debug,
    /// Everything.
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Header, progress bar and section highlighting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Throttle window for header/progress updates (ms).
    pub throttle_ms: f64,
    /// Throttle window for active-link highlighting (ms).
    pub nav_throttle_ms: f64,
    /// Header only hides below this offset (px).
    pub header_hide_threshold: f64,
    /// Body gets the `scrolled` class past this offset (px).
    pub scrolled_class_threshold: f64,
    /// Lookahead added to the scroll position when picking the active section (px).
    pub section_lookahead: f64,
    /// Extra offset above anchor targets (px).
    pub anchor_offset: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            throttle_ms: 10.0,
            nav_throttle_ms: 50.0,
            header_hide_threshold: 100.0,
            scrolled_class_threshold: 50.0,
            section_lookahead: 100.0,
            anchor_offset: 20.0,
        }
    }
}

/// Skills carousel timings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Auto-advance period (ms).
    pub advance_ms: f64,
    /// Inactivity before auto-advance resumes after user interaction (ms).
    pub resume_after_ms: f64,
    /// Window after a programmatic scroll during which scroll events are ours (ms).
    pub programmatic_scroll_ms: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            advance_ms: 3000.0,
            resume_after_ms: 5000.0,
            programmatic_scroll_ms: 600.0,
        }
    }
}

/// Modal transition timings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Delay between display and the `show` class (ms).
    pub show_delay_ms: f64,
    /// CSS transition duration (ms).
    pub transition_ms: f64,
    /// Delay before the first focusable element receives focus (ms).
    pub focus_delay_ms: f64,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: 10.0,
            transition_ms: 300.0,
            focus_delay_ms: 100.0,
        }
    }
}

/// Form submission timings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Simulated delivery latency (ms).
    pub send_latency_ms: f64,
    /// Contact form: clear the success status after this long (ms).
    pub contact_status_reset_ms: f64,
    /// Appointment form: close the modal after this long (ms).
    pub appointment_close_ms: f64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            send_latency_ms: 2000.0,
            contact_status_reset_ms: 5000.0,
            appointment_close_ms: 3000.0,
        }
    }
}

/// Canvas particle backgrounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Frame rate cap.
    pub target_fps: f64,
    /// Resize quiet period (ms).
    pub resize_debounce_ms: f64,
    /// What happens to particle positions on resize.
    pub resize_policy: ResizePolicy,
    /// Hero canvas: one particle per this many px of viewport width.
    pub hero_width_per_particle: f64,
    /// Hero canvas: minimum particle count.
    pub hero_min_count: usize,
    /// Contact canvas particle count.
    pub contact_count: usize,
    /// Appointment canvas particle count.
    pub appointment_count: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            target_fps: 60.0,
            resize_debounce_ms: 250.0,
            resize_policy: ResizePolicy::Keep,
            hero_width_per_particle: 25.0,
            hero_min_count: 30,
            contact_count: 40,
            appointment_count: 30,
        }
    }
}

/// Entrance animations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Delay between consecutive `.stagger` elements (ms).
    pub stagger_step_ms: f64,
    /// Delay between cards revealed in the same batch (ms).
    pub card_step_ms: f64,
    /// Intersection ratio that counts as visible.
    pub threshold: f64,
    /// Observer root margin.
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            stagger_step_ms: 200.0,
            card_step_ms: 150.0,
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

/// Page chrome and responsive breakpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Widths up to this are mobile (px).
    pub mobile_max_width: f64,
    /// Widths up to this are tablet (px).
    pub tablet_max_width: f64,
    /// Delay before the loading spinner fades (ms).
    pub spinner_fade_delay_ms: f64,
    /// Delay between the fade and removing the spinner (ms).
    pub spinner_remove_delay_ms: f64,
    /// Delay before re-dispatching `resize` after an orientation change (ms).
    pub orientation_resize_delay_ms: f64,
    /// Delay between closing the mobile menu and scrolling to a link target (ms).
    pub nav_scroll_delay_ms: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            mobile_max_width: 768.0,
            tablet_max_width: 1024.0,
            spinner_fade_delay_ms: 500.0,
            spinner_remove_delay_ms: 500.0,
            orientation_resize_delay_ms: 300.0,
            nav_scroll_delay_ms: 300.0,
        }
    }
}

/// Complete site configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Console log verbosity.
    pub log_level: LogLevel,
    /// Scroll effects.
    pub scroll: ScrollConfig,
    /// Skills carousel.
    pub carousel: CarouselConfig,
    /// Modals.
    pub modal: ModalConfig,
    /// Forms.
    pub forms: FormConfig,
    /// Particle canvases.
    pub particles: ParticleConfig,
    /// Entrance animations.
    pub reveal: RevealConfig,
    /// Page chrome.
    pub page: PageConfig,
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.modal.transition_ms, 300.0);
        assert_eq!(config.carousel.advance_ms, 3000.0);
        assert_eq!(config.particles.resize_policy, ResizePolicy::Keep);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "log_level": "debug", "carousel": { "advance_ms": 4000 }, "particles": { "resize_policy": "rescale" } }"#,
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.carousel.advance_ms, 4000.0);
        assert_eq!(config.carousel.resume_after_ms, 5000.0);
        assert_eq!(config.particles.resize_policy, ResizePolicy::Rescale);
        assert_eq!(config.forms.send_latency_ms, 2000.0);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(SiteConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(log::LevelFilter::from(LogLevel::Warn), log::LevelFilter::Warn);
    }
}
