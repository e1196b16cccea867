pub mod hud;
pub mod telemetry;
