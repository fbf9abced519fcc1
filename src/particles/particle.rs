//! Caller-defined particle behavior.

use std::marker::PhantomData;

use fastrand::Rng;

use super::surface::Surface2d;

/// How a family of particles is created, moved and drawn.
///
/// The engine never looks inside [`ParticleBehavior::Particle`]; it only hands
/// each record back to [`update`](ParticleBehavior::update) once per frame.
pub trait ParticleBehavior {
    /// Per-particle record.
    type Particle;

    /// Create a particle for a surface of the given size.
    fn init(&mut self, width: f64, height: f64, rng: &mut Rng) -> Self::Particle;

    /// Draw the particle at its current position and advance it one step.
    fn update(
        &mut self,
        particle: &mut Self::Particle,
        width: f64,
        height: f64,
        surface: &mut dyn Surface2d,
        rng: &mut Rng,
    );

    /// Scale a particle's position after a resize. Only called under
    /// [`ResizePolicy::Rescale`](super::ResizePolicy::Rescale).
    fn rescale(&mut self, _particle: &mut Self::Particle, _scale_x: f64, _scale_y: f64) {}
}

/// Adapts a pair of closures to [`ParticleBehavior`].
pub struct FnBehavior<P, I, U> {
    init: I,
    update: U,
    _particle: PhantomData<fn() -> P>,
}

impl<P, I, U> FnBehavior<P, I, U>
where
    I: FnMut(f64, f64, &mut Rng) -> P,
    U: FnMut(&mut P, f64, f64, &mut dyn Surface2d, &mut Rng),
{
    /// Wrap an initializer and an update-and-draw function.
    pub fn new(init: I, update: U) -> Self {
        Self {
            init,
            update,
            _particle: PhantomData,
        }
    }
}

impl<P, I, U> ParticleBehavior for FnBehavior<P, I, U>
where
    I: FnMut(f64, f64, &mut Rng) -> P,
    U: FnMut(&mut P, f64, f64, &mut dyn Surface2d, &mut Rng),
{
    type Particle = P;

    fn init(&mut self, width: f64, height: f64, rng: &mut Rng) -> P {
        (self.init)(width, height, rng)
    }

    fn update(
        &mut self,
        particle: &mut P,
        width: f64,
        height: f64,
        surface: &mut dyn Surface2d,
        rng: &mut Rng,
    ) {
        (self.update)(particle, width, height, surface, rng)
    }
}

impl<P, I, U> std::fmt::Debug for FnBehavior<P, I, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnBehavior").finish_non_exhaustive()
    }
}
