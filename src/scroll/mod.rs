//! Scroll-driven effects: header hide/reveal, progress bar, active nav link
//! and smooth anchor navigation.

mod anchor;
mod header;
mod sections;

pub use anchor::{anchor_target, is_in_page_anchor};
pub use header::{progress_percent, HeaderState, HeaderTracker};
pub use sections::{active_section, link_targets, SectionBounds};
