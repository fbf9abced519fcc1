//! Browser bindings.
//!
//! Each binding owns its DOM handles, its `gloo` listeners and a
//! [`timers::DeadlineTimer`] that fires when its model next needs attention.
//! Listener closures hold weak references, so dropping a binding detaches it.

pub mod canvas;
pub mod carousel;
pub mod dom;
pub mod focus;
pub mod forms;
pub mod logger;
pub mod modal;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod timers;

pub use page::{shutdown, start, stats, stop, PageStats};
