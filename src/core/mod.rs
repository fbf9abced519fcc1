//! # Core Module
//!
//! Timing primitives, configuration and the shared error type.

mod clock;
mod config;
mod deadline;
mod error;
mod throttle;

pub use clock::now_ms;
pub use config::{
    CarouselConfig, FormConfig, LogLevel, ModalConfig, PageConfig, ParticleConfig, RevealConfig,
    ScrollConfig, SiteConfig,
};
pub use deadline::{earliest, Deadline, Scheduled};
pub use error::{Result, SiteError};
pub use throttle::{Debounce, Throttle};
