//! Physics module
//!
//! Arcade-style kinematic движение: постоянная velocity, без сил и коллизий.
//! Velocity задаёт navigation контроллер, здесь только интеграция.

pub mod movement;

// Re-export основных типов
pub use movement::{integrate_velocity, KinematicPlugin};
