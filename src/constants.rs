// Scene
pub const SCREEN_WIDTH: f64 = 800.0; // scene units
pub const SCREEN_HEIGHT: f64 = 600.0; // scene units
pub const GROUND_HEIGHT: f64 = 50.0; // thickness of the ground strip
pub const TICK_RATE: f64 = 60.0; // ticks per second

// Rocket
pub const ROCKET_WIDTH: f64 = 20.0;
pub const ROCKET_HEIGHT: f64 = 40.0;

// Flight dynamics (all per tick, y grows downward)
pub const GRAVITY: f64 = 0.2;
pub const THRUST: f64 = 0.5;
pub const ANGULAR_VELOCITY: f64 = 2.0; // degrees per tick
pub const FRICTION: f64 = 0.99; // horizontal velocity decay per tick

// Landing
pub const SAFE_ANGLE_THRESHOLD: f64 = 10.0; // degrees
pub const EXPLOSION_DURATION: u32 = 60; // ticks (~1 s)
pub const EXPLOSION_MAX_RADIUS: f64 = 40.0;

// Training ruleset
pub const TRAINING_SAFE_VELOCITY: f64 = 3.0;
pub const TRAINING_START_ALTITUDE: f64 = 400.0;
pub const TRAINING_MAX_FLIGHT_TICKS: u32 = 1_200; // 20 s
pub const TRAINING_MAX_ALTITUDE: f64 = 500.0;
pub const TRAINING_ZONE_LEFT: f64 = 300.0;
pub const TRAINING_ZONE_RIGHT: f64 = 500.0;

// Hard stop for episodes without a flight-time guard
pub const EPISODE_TICK_LIMIT: u32 = 36_000; // 10 min

// Exhaust particles
pub const PARTICLES_PER_TICK: usize = 3;
pub const PARTICLE_SPEED: f64 = 3.0;
pub const PARTICLE_SPREAD: f64 = 15.0; // degrees either side
pub const PARTICLE_SPEED_JITTER: (f64, f64) = (0.8, 1.2);
pub const PARTICLE_LIFETIME: (u32, u32) = (20, 30); // ticks, inclusive
pub const PARTICLE_RADIUS: (u32, u32) = (2, 4); // inclusive
pub const PARTICLE_COLOR: (u8, u8, u8) = (255, 165, 0);

// Reward shaping
pub const SAFE_LANDING_BONUS: f64 = 100.0;
pub const ZONE_LANDING_BONUS: f64 = 120.0; // exceeds the safe-landing bonus even at the zone edge
pub const ZONE_CENTER_BONUS: f64 = 150.0;
pub const SURVIVAL_REWARD: f64 = 0.01; // per tick
pub const THRUST_REWARD: f64 = 0.005; // per tick at full thrust
pub const HOVER_CEILING: f64 = 450.0; // altitude above which hovering is penalised
pub const HOVER_PENALTY: f64 = 0.05; // per tick

// Observation normalization
pub const VELOCITY_SCALE: f64 = 10.0;
pub const ANGLE_SCALE: f64 = 180.0;
