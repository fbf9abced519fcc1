//! # Folio - Client-Side Behavior for a Portfolio Site
//!
//! Folio drives the interactive parts of a single-page portfolio: particle
//! backgrounds, accessible modals, validated forms, scroll effects and a
//! skills carousel. It compiles to WebAssembly and boots itself on load.
//!
//! ## Layout
//!
//! - **Core**: clock, deadlines, throttling, configuration and errors
//! - **Models**: [`particles`], [`focus`], [`modal`], [`forms`], [`scroll`],
//!   [`carousel`], [`nav`], [`reveal`] and [`page`] hold the behavior as plain
//!   state machines over virtual time, so they run and test natively
//! - **Web** (feature `web`, `wasm32` only): binds the models to the DOM
//!
//! ## Example
//!
//! ```
//! use folio::prelude::*;
//!
//! let config = ModalConfig::default();
//! let mut modal = Modal::new(&config);
//! modal.open(0.0);
//! assert_eq!(modal.phase(), ModalPhase::Opening);
//!
//! modal.poll(config.show_delay_ms);
//! assert_eq!(modal.phase(), ModalPhase::Open);
//! ```

#![warn(missing_docs)]

#[cfg(all(feature = "web", target_arch = "wasm32"))]
use wasm_bindgen::prelude::*;

pub mod carousel;
pub mod core;
pub mod focus;
pub mod forms;
pub mod modal;
pub mod nav;
pub mod page;
pub mod particles;
pub mod reveal;
pub mod scroll;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

// Re-export commonly used types
pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::carousel::{Carousel, CarouselView};
    pub use crate::core::{
        now_ms, CarouselConfig, Deadline, Debounce, FormConfig, ModalConfig, Scheduled,
        SiteConfig, SiteError, Throttle,
    };
    pub use crate::focus::{FocusCycle, TabAction};
    pub use crate::forms::{FormController, FormEffect, FormKind, FormSchema, FormValues, Notifier};
    pub use crate::modal::{Modal, ModalEffect, ModalPhase};
    pub use crate::nav::NavMenu;
    pub use crate::particles::{Drifting, ParticleBehavior, ParticleEngine, Rising, Surface2d};
    pub use crate::scroll::HeaderTracker;
}

/// Initialize the site in the browser.
/// Sets up panic hooks for better error messages in the browser console, then
/// boots the page.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    web::start().map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Site name.
pub const NAME: &str = "Folio";
