//! ECS Components для entity сцены
//!
//! Организация по доменам:
//! - actor: маркеры акторов (Player)
//! - world: позиционирование в сцене (ScenePosition, Velocity)
//! - presentation: что рисует host (Facing, DrawDepth, VisualScale, ActorAnimation)
//!
//! Walker (состояние навигации) живёт в crate::navigation.

pub mod actor;
pub mod presentation;
pub mod world;

// Re-exports для удобного импорта
pub use actor::*;
pub use presentation::*;
pub use world::*;
