use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::ExhaustConfig;
use crate::utils::vector2d::Vector2D;

use super::particle::Particle;

/// Exhaust particles left behind by a thrusting rocket.
///
/// Append-only from the rocket's side: it calls [`ParticleTrail::emit`] while
/// the engine burns and [`ParticleTrail::advance`] once per tick.
#[derive(Debug, Clone)]
pub struct ParticleTrail {
    particles: Vec<Particle>,
    config: ExhaustConfig,
    rng: StdRng,
}

impl ParticleTrail {
    pub fn new(config: ExhaustConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        ParticleTrail {
            particles: Vec::new(),
            config,
            rng,
        }
    }

    /// Appends `count` particles at `origin`, heading along `base_angle`
    /// (degrees, screen convention) give or take the configured spread.
    pub fn emit(&mut self, origin: Vector2D, base_angle: f64, count: usize) {
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = Particle::spawn(&mut self.rng, origin, base_angle, &self.config);
            self.particles.push(particle);
        }
    }

    /// Ages and moves every particle by one tick, then drops the expired ones.
    pub fn advance(&mut self) {
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(|particle| !particle.is_dead());
    }

    pub fn per_tick(&self) -> usize {
        self.config.per_tick
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
