//! Fixed-count particle engine.

use fastrand::Rng;
use serde::{Deserialize, Serialize};

use super::pacer::FramePacer;
use super::particle::ParticleBehavior;
use super::surface::Surface2d;

/// What happens to existing particles when the surface changes size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizePolicy {
    /// Keep absolute coordinates. Particles outside the new bounds return
    /// through their own wrap or respawn logic.
    #[default]
    Keep,
    /// Scale positions proportionally to the new size.
    Rescale,
}

/// Owns a fixed pool of particles and advances them on paced frames.
///
/// The particle count never changes after construction.
pub struct ParticleEngine<B: ParticleBehavior> {
    behavior: B,
    particles: Vec<B::Particle>,
    width: f64,
    height: f64,
    pacer: FramePacer,
    rng: Rng,
    resize_policy: ResizePolicy,
    frames: u64,
}

impl<B: ParticleBehavior> ParticleEngine<B> {
    /// Create an engine and initialize `count` particles for a `width` x `height` surface.
    pub fn new(behavior: B, count: usize, width: f64, height: f64, mut rng: Rng) -> Self {
        let mut behavior = behavior;
        let particles = (0..count)
            .map(|_| behavior.init(width, height, &mut rng))
            .collect();

        Self {
            behavior,
            particles,
            width,
            height,
            pacer: FramePacer::default(),
            rng,
            resize_policy: ResizePolicy::Keep,
            frames: 0,
        }
    }

    /// Set the frame-rate cap.
    pub fn with_target_fps(mut self, fps: f64) -> Self {
        self.pacer = FramePacer::with_fps(fps);
        self
    }

    /// Set the resize policy.
    pub fn with_resize_policy(mut self, policy: ResizePolicy) -> Self {
        self.resize_policy = policy;
        self
    }

    /// Offer an animation-frame timestamp. Returns `true` if a frame was drawn.
    ///
    /// An executed frame clears the whole surface, then lets every particle
    /// draw and move itself in order.
    pub fn frame(&mut self, timestamp: f64, surface: &mut dyn Surface2d) -> bool {
        if !self.pacer.tick(timestamp) {
            return false;
        }

        surface.clear(self.width, self.height);
        for particle in &mut self.particles {
            self.behavior
                .update(particle, self.width, self.height, surface, &mut self.rng);
        }
        self.frames += 1;
        true
    }

    /// Adopt new surface dimensions.
    pub fn resize(&mut self, width: f64, height: f64) {
        if self.resize_policy == ResizePolicy::Rescale && self.width > 0.0 && self.height > 0.0 {
            let scale_x = width / self.width;
            let scale_y = height / self.height;
            for particle in &mut self.particles {
                self.behavior.rescale(particle, scale_x, scale_y);
            }
        }
        self.width = width;
        self.height = height;
    }

    /// Current surface size.
    #[inline]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// The particle pool.
    #[inline]
    pub fn particles(&self) -> &[B::Particle] {
        &self.particles
    }

    /// Number of particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the pool is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Number of frames executed so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl<B: ParticleBehavior> std::fmt::Debug for ParticleEngine<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleEngine")
            .field("particles", &self.particles.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("resize_policy", &self.resize_policy)
            .field("frames", &self.frames)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::{FnBehavior, RecordingSurface, ACCENT};

    #[derive(Debug, Clone, PartialEq)]
    struct Dot {
        x: f64,
        y: f64,
    }

    fn marching() -> impl ParticleBehavior<Particle = Dot> {
        FnBehavior::new(
            |w: f64, h: f64, _rng: &mut Rng| Dot { x: w / 2.0, y: h / 2.0 },
            |p: &mut Dot, _w: f64, _h: f64, surface: &mut dyn Surface2d, _rng: &mut Rng| {
                surface.fill_circle(p.x, p.y, 1.0, ACCENT);
                p.x += 1.0;
            },
        )
    }

    #[test]
    fn test_initializes_count_particles_with_surface_size() {
        let engine = ParticleEngine::new(marching(), 5, 200.0, 100.0, Rng::with_seed(1));
        assert_eq!(engine.len(), 5);
        assert!(engine.particles().iter().all(|p| *p == Dot { x: 100.0, y: 50.0 }));
    }

    #[test]
    fn test_frame_clears_then_updates_every_particle() {
        let mut engine = ParticleEngine::new(marching(), 3, 200.0, 100.0, Rng::with_seed(1));
        let mut surface = RecordingSurface::default();

        assert!(!engine.frame(0.0, &mut surface));
        assert!(engine.frame(20.0, &mut surface));
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.circles.len(), 3);
        assert!(engine.particles().iter().all(|p| p.x == 101.0));

        // Too soon for another frame.
        assert!(!engine.frame(25.0, &mut surface));
        assert_eq!(engine.frames(), 1);
    }

    #[test]
    fn test_zero_particles_still_clears() {
        let mut engine = ParticleEngine::new(marching(), 0, 10.0, 10.0, Rng::with_seed(1));
        let mut surface = RecordingSurface::default();
        engine.frame(0.0, &mut surface);
        assert!(engine.frame(100.0, &mut surface));
        assert_eq!(surface.clears, 1);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_resize_keeps_absolute_positions_by_default() {
        let mut engine = ParticleEngine::new(marching(), 2, 200.0, 100.0, Rng::with_seed(1));
        engine.resize(50.0, 50.0);
        assert_eq!(engine.size(), (50.0, 50.0));
        assert!(engine.particles().iter().all(|p| p.x == 100.0));
    }
}
