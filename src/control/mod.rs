pub mod autopilot;
pub mod input;
pub mod output;
pub mod policy;
pub mod rocket;
