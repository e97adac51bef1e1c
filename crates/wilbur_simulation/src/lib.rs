//! Wilbur Simulation Core
//!
//! ECS-симуляция point-and-click сцены на Bevy 0.16 (headless).
//!
//! - ECS = состояние ходьбы актора, navigation контроллер, edge guard, depth/scale
//! - Host = рендер, звук, анимации, pointer input (через components + events)

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod logger;
pub mod navigation;
pub mod physics;
pub mod scene;

// Re-export базовых типов для удобства
pub use components::*;
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use navigation::{
    DirectionalBoundaries, FootstepCue, FootstepEvent, InteractRequest, MoveRequest, NavPath,
    NavigationConfig, NavigationPlugin, SceneNavMesh, StopWalking, WalkFinished, WalkPath, Walker,
};
pub use physics::KinematicPlugin;
pub use scene::{LobbyScenePlugin, SceneItem};

/// Шаг кадра headless симуляции (≈60 FPS)
pub const HEADLESS_FRAME: Duration = Duration::from_millis(16);

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((NavigationPlugin::default(), KinematicPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время идёт фиксированными шагами HEADLESS_FRAME на каждый `app.update()`,
/// а не по настенным часам — прогоны воспроизводимы.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(HEADLESS_FRAME));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
