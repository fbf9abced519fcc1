//! Particle looks used by the page's canvases.

use std::ops::Range;

use fastrand::Rng;

use super::particle::ParticleBehavior;
use super::surface::{Rgba, Surface2d, ACCENT};

fn sample(rng: &mut Rng, range: &Range<f64>) -> f64 {
    range.start + rng.f64() * (range.end - range.start)
}

/// Number of hero particles for a viewport width.
pub fn hero_particle_count(viewport_width: f64, width_per_particle: f64, min_count: usize) -> usize {
    let scaled = (viewport_width / width_per_particle.max(1.0)).floor().max(0.0) as usize;
    scaled.max(min_count)
}

/// A particle that floats upward and respawns at the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RisingParticle {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Radius.
    pub r: f64,
    /// Upward speed per frame.
    pub speed: f64,
    /// Opacity.
    pub alpha: f64,
}

/// Hero background: slow rising dots.
#[derive(Debug, Clone)]
pub struct Rising {
    /// Base color (alpha is per particle).
    pub color: Rgba,
    /// Radius range.
    pub radius: Range<f64>,
    /// Speed range.
    pub speed: Range<f64>,
    /// Opacity range.
    pub alpha: Range<f64>,
}

impl Default for Rising {
    fn default() -> Self {
        Self {
            color: ACCENT,
            radius: 0.5..2.5,
            speed: 0.1..0.5,
            alpha: 0.1..0.4,
        }
    }
}

impl ParticleBehavior for Rising {
    type Particle = RisingParticle;

    fn init(&mut self, width: f64, height: f64, rng: &mut Rng) -> RisingParticle {
        RisingParticle {
            x: rng.f64() * width,
            y: rng.f64() * height,
            r: sample(rng, &self.radius),
            speed: sample(rng, &self.speed),
            alpha: sample(rng, &self.alpha),
        }
    }

    fn update(
        &mut self,
        p: &mut RisingParticle,
        width: f64,
        height: f64,
        surface: &mut dyn Surface2d,
        rng: &mut Rng,
    ) {
        surface.fill_circle(p.x, p.y, p.r, self.color.with_alpha(p.alpha));
        p.y -= p.speed;
        if p.y < -p.r {
            p.y = height + p.r;
            p.x = rng.f64() * width;
        }
    }

    fn rescale(&mut self, p: &mut RisingParticle, scale_x: f64, scale_y: f64) {
        p.x *= scale_x;
        p.y *= scale_y;
    }
}

/// A particle drifting in a straight line with toroidal wrap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftingParticle {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Radius.
    pub r: f64,
    /// Horizontal velocity per frame.
    pub dx: f64,
    /// Vertical velocity per frame.
    pub dy: f64,
    /// Opacity.
    pub alpha: f64,
}

/// Modal backgrounds: dots drifting in random directions.
#[derive(Debug, Clone)]
pub struct Drifting {
    /// Base color (alpha is per particle).
    pub color: Rgba,
    /// Radius range.
    pub radius: Range<f64>,
    /// Velocity components are drawn from `[-spread / 2, spread / 2)`.
    pub spread: f64,
    /// Opacity range.
    pub alpha: Range<f64>,
}

impl Drifting {
    /// Look of the contact modal canvas.
    pub fn contact() -> Self {
        Self {
            color: ACCENT,
            radius: 0.3..1.8,
            spread: 0.6,
            alpha: 0.1..0.4,
        }
    }

    /// Look of the appointment modal canvas.
    pub fn appointment() -> Self {
        Self {
            color: ACCENT,
            radius: 0.2..1.2,
            spread: 0.4,
            alpha: 0.1..0.3,
        }
    }
}

fn wrap(value: f64, limit: f64, r: f64) -> f64 {
    if value > limit + r {
        -r
    } else if value < -r {
        limit + r
    } else {
        value
    }
}

impl ParticleBehavior for Drifting {
    type Particle = DriftingParticle;

    fn init(&mut self, width: f64, height: f64, rng: &mut Rng) -> DriftingParticle {
        DriftingParticle {
            x: rng.f64() * width,
            y: rng.f64() * height,
            r: sample(rng, &self.radius),
            dx: (rng.f64() - 0.5) * self.spread,
            dy: (rng.f64() - 0.5) * self.spread,
            alpha: sample(rng, &self.alpha),
        }
    }

    fn update(
        &mut self,
        p: &mut DriftingParticle,
        width: f64,
        height: f64,
        surface: &mut dyn Surface2d,
        _rng: &mut Rng,
    ) {
        surface.fill_circle(p.x, p.y, p.r, self.color.with_alpha(p.alpha));
        p.x = wrap(p.x + p.dx, width, p.r);
        p.y = wrap(p.y + p.dy, height, p.r);
    }

    fn rescale(&mut self, p: &mut DriftingParticle, scale_x: f64, scale_y: f64) {
        p.x *= scale_x;
        p.y *= scale_y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::{ParticleEngine, RecordingSurface, ResizePolicy};

    #[test]
    fn test_hero_count() {
        assert_eq!(hero_particle_count(1920.0, 25.0, 30), 76);
        assert_eq!(hero_particle_count(375.0, 25.0, 30), 30);
    }

    #[test]
    fn test_rising_init_ranges() {
        let mut rng = Rng::with_seed(7);
        let mut rising = Rising::default();
        for _ in 0..200 {
            let p = rising.init(300.0, 200.0, &mut rng);
            assert!((0.0..300.0).contains(&p.x));
            assert!((0.0..200.0).contains(&p.y));
            assert!(rising.radius.contains(&p.r));
            assert!(rising.speed.contains(&p.speed));
            assert!(rising.alpha.contains(&p.alpha));
        }
    }

    #[test]
    fn test_rising_respawns_at_bottom() {
        let mut rng = Rng::with_seed(3);
        let mut surface = RecordingSurface::default();
        let mut rising = Rising::default();
        let mut p = RisingParticle { x: 10.0, y: -0.9, r: 1.0, speed: 0.2, alpha: 0.2 };

        rising.update(&mut p, 300.0, 200.0, &mut surface, &mut rng);

        assert_eq!(p.y, 201.0);
        assert!((0.0..300.0).contains(&p.x));
        let (x, y, r, color) = surface.circles[0];
        assert_eq!((x, y, r), (10.0, -0.9, 1.0));
        assert_eq!(color, ACCENT.with_alpha(0.2));
    }

    #[test]
    fn test_drifting_wraps_each_axis() {
        let mut rng = Rng::with_seed(3);
        let mut surface = RecordingSurface::default();
        let mut drifting = Drifting::contact();

        let mut p = DriftingParticle { x: 100.9, y: -0.9, r: 1.0, dx: 0.2, dy: -0.2, alpha: 0.3 };
        drifting.update(&mut p, 100.0, 50.0, &mut surface, &mut rng);
        assert_eq!(p.x, -1.0);
        assert_eq!(p.y, 51.0);

        let mut p = DriftingParticle { x: 40.0, y: 20.0, r: 1.0, dx: 0.2, dy: 0.1, alpha: 0.3 };
        drifting.update(&mut p, 100.0, 50.0, &mut surface, &mut rng);
        assert!((p.x - 40.2).abs() < 1e-9);
        assert!((p.y - 20.1).abs() < 1e-9);
    }

    #[test]
    fn test_drifting_velocity_within_spread() {
        let mut rng = Rng::with_seed(11);
        let mut drifting = Drifting::appointment();
        for _ in 0..200 {
            let p = drifting.init(100.0, 100.0, &mut rng);
            assert!(p.dx >= -0.2 && p.dx < 0.2);
            assert!(p.dy >= -0.2 && p.dy < 0.2);
        }
    }

    #[test]
    fn test_rescale_policy_moves_particles() {
        let mut engine = ParticleEngine::new(Drifting::contact(), 10, 100.0, 100.0, Rng::with_seed(5))
            .with_resize_policy(ResizePolicy::Rescale);
        let before: Vec<_> = engine.particles().to_vec();
        engine.resize(200.0, 50.0);
        for (old, new) in before.iter().zip(engine.particles()) {
            assert!((new.x - old.x * 2.0).abs() < 1e-9);
            assert!((new.y - old.y * 0.5).abs() < 1e-9);
        }
    }
}
