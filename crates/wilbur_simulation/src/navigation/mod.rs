//! Navigation domain — point-and-click ходьба по waypoints
//!
//! Содержит:
//! - Walker (path-following state machine + poll task)
//! - EdgeGuard (вето на шаги к краю walkable области)
//! - DepthScaler (draw order + pseudo-3D scale по y)
//! - NavMeshProvider (внешний pathfinding, RectNavMesh для headless сцены)
//! - Events: MoveRequest, WalkPath, StopWalking, InteractRequest, FootstepEvent, WalkFinished
//!
//! Архитектура:
//! - Host пишет MoveRequest (клик) → ECS строит путь и запускает Walker
//! - Walker пишет Velocity/Facing/DrawDepth/VisualScale/ActorAnimation + FootstepEvent
//! - Host рисует и играет звук, ECS ничего не рендерит

use bevy::prelude::*;

pub mod config;
pub mod controller;
pub mod depth;
pub mod edge_guard;
pub mod events;
pub mod mesh;
pub mod path;
pub mod systems;

#[cfg(test)]
mod edge_guard_tests;

// Re-export основных типов
pub use config::NavigationConfig;
pub use controller::{MovementHost, NavContext, PresentationCommand, TickPhase, Walker};
pub use depth::{depth_key, scale, HORIZON_Y};
pub use edge_guard::{is_unsafe, DirectionalBoundaries, EdgeGuardConfig, Side};
pub use events::*;
pub use mesh::{NavMeshProvider, OpenFloor, RectNavMesh, SceneNavMesh};
pub use path::NavPath;

use crate::components::ScenePosition;

/// Фазы кадра для walker систем (Update)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum WalkSet {
    /// Запросы host: старт/стоп ходьбы
    Input,
    /// Velocity → ScenePosition
    Physics,
    /// Poll task walkers
    Navigation,
    /// Per-frame presentation (rescale)
    Presentation,
}

/// Navigation Plugin
///
/// Регистрирует walker системы в Update (per-frame):
/// 1. setup_new_walkers — one-time setup (Added<Walker>)
/// 2. route_interactions → plan_walks → start_walks → stop_walks
/// 3. (WalkSet::Physics — KinematicPlugin)
/// 4. advance_walkers — poll task (50 ms)
/// 5. rescale_walkers — scale каждый кадр
///
/// Resources: NavigationConfig (из plugin), SceneNavMesh и DirectionalBoundaries
/// (defaults, если сцена не вставила свои).
#[derive(Default)]
pub struct NavigationPlugin {
    pub config: NavigationConfig,
}

impl NavigationPlugin {
    pub fn with_config(config: NavigationConfig) -> Self {
        Self { config }
    }
}

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .init_resource::<SceneNavMesh>()
            .init_resource::<DirectionalBoundaries>();

        // Регистрация событий
        app.add_event::<MoveRequest>()
            .add_event::<WalkPath>()
            .add_event::<StopWalking>()
            .add_event::<InteractRequest>()
            .add_event::<FootstepEvent>()
            .add_event::<WalkFinished>();

        app.configure_sets(
            Update,
            (
                WalkSet::Input,
                WalkSet::Physics,
                WalkSet::Navigation,
                WalkSet::Presentation,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                systems::setup_new_walkers,
                systems::route_interactions,
                systems::plan_walks,
                systems::start_walks,
                systems::stop_walks,
            )
                .chain() // Последовательное выполнение (events в том же кадре)
                .in_set(WalkSet::Input),
        )
        .add_systems(Update, systems::advance_walkers.in_set(WalkSet::Navigation))
        .add_systems(Update, systems::rescale_walkers.in_set(WalkSet::Presentation));
    }
}

/// Spawn helper для walker актора
///
/// Walker через Required Components добавляет ScenePosition, Velocity,
/// Facing, DrawDepth, VisualScale, ActorAnimation.
pub fn spawn_walker(commands: &mut Commands, position: Vec2) -> Entity {
    commands
        .spawn((Walker::default(), ScenePosition(position)))
        .id()
}
