//! Decorative canvas particle backgrounds.
//!
//! A [`ParticleEngine`] owns a fixed pool of particles whose shape and motion are
//! supplied by a [`ParticleBehavior`]. Frames are paced to a 60 Hz cap and drawn
//! through a [`Surface2d`], so the same engine drives every canvas on the page.

mod engine;
mod pacer;
mod particle;
mod presets;
mod surface;

pub use engine::{ParticleEngine, ResizePolicy};
pub use pacer::FramePacer;
pub use particle::{FnBehavior, ParticleBehavior};
pub use presets::{hero_particle_count, Drifting, DriftingParticle, Rising, RisingParticle};
pub use surface::{RecordingSurface, Rgba, Surface2d, ACCENT};
