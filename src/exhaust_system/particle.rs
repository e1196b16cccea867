use rand::Rng;

use crate::config::ExhaustConfig;
use crate::utils::vector2d::Vector2D;

/// Cosmetic exhaust point. Moves in a straight line and never touches the
/// rocket's physics.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub lifetime: u32,
    pub age: u32,
    pub radius: u32,
    pub color: (u8, u8, u8),
}

impl Particle {
    pub fn new(
        position: Vector2D,
        velocity: Vector2D,
        lifetime: u32,
        radius: u32,
        color: (u8, u8, u8),
    ) -> Self {
        Particle {
            position,
            velocity,
            lifetime,
            age: 0,
            radius,
            color,
        }
    }

    /// Draws direction, speed, lifetime and radius from the configured ranges.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        origin: Vector2D,
        base_angle: f64,
        config: &ExhaustConfig,
    ) -> Self {
        let angle = base_angle + rng.gen_range(-config.spread..=config.spread);
        let speed = config.speed * rng.gen_range(config.speed_jitter.0..=config.speed_jitter.1);
        let lifetime = rng.gen_range(config.lifetime.0..=config.lifetime.1);
        let radius = rng.gen_range(config.radius.0..=config.radius.1);

        Particle::new(
            origin,
            Vector2D::from_polar_degrees(angle, speed),
            lifetime,
            radius,
            config.color,
        )
    }

    pub fn update(&mut self) {
        self.position += self.velocity;
        self.age = (self.age + 1).min(self.lifetime);
    }

    pub fn is_dead(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Opacity fading linearly from 255 at birth to 0 at end of life.
    pub fn alpha(&self) -> u8 {
        if self.lifetime == 0 {
            return 0;
        }
        let remaining = 1.0 - self.age as f64 / self.lifetime as f64;
        (255.0 * remaining).round().clamp(0.0, 255.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_update_moves_in_straight_line() {
        let mut particle = Particle::new(
            Vector2D::new(10.0, 10.0),
            Vector2D::new(1.0, -2.0),
            5,
            3,
            (255, 255, 255),
        );

        particle.update();
        particle.update();

        assert_eq!(particle.position, Vector2D::new(12.0, 6.0));
        assert_eq!(particle.age, 2);
        assert!(!particle.is_dead());
    }

    #[test]
    fn test_age_caps_at_lifetime() {
        let mut particle = Particle::new(Vector2D::ZERO, Vector2D::ZERO, 2, 2, (0, 0, 0));
        for _ in 0..5 {
            particle.update();
        }
        assert_eq!(particle.age, 2);
        assert!(particle.is_dead());
        assert_eq!(particle.alpha(), 0);
    }

    #[test]
    fn test_alpha_fades() {
        let mut particle = Particle::new(Vector2D::ZERO, Vector2D::ZERO, 4, 2, (0, 0, 0));
        assert_eq!(particle.alpha(), 255);
        particle.update();
        particle.update();
        assert_eq!(particle.alpha(), 128);
    }

    #[test]
    fn test_spawn_respects_ranges() {
        let config = ExhaustConfig::default();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let particle = Particle::spawn(&mut rng, Vector2D::ZERO, 90.0, &config);
            let speed = particle.velocity.magnitude();
            assert!(speed >= config.speed * config.speed_jitter.0 - 1e-9);
            assert!(speed <= config.speed * config.speed_jitter.1 + 1e-9);
            assert!((config.lifetime.0..=config.lifetime.1).contains(&particle.lifetime));
            assert!((config.radius.0..=config.radius.1).contains(&particle.radius));

            let heading = particle.velocity.y.atan2(particle.velocity.x).to_degrees();
            assert!((heading - 90.0).abs() <= config.spread + 1e-9);
        }
    }

    #[test]
    fn test_spawn_without_jitter_is_exact() {
        let config = ExhaustConfig {
            spread: 0.0,
            speed_jitter: (1.0, 1.0),
            ..ExhaustConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);

        let particle = Particle::spawn(&mut rng, Vector2D::ZERO, 0.0, &config);

        assert_abs_diff_eq!(particle.velocity.x, config.speed, epsilon = 1e-12);
        assert_abs_diff_eq!(particle.velocity.y, 0.0, epsilon = 1e-12);
    }
}
