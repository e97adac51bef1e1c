//! Navigation events (host → ECS и ECS → host)

use bevy::prelude::*;

use super::path::NavPath;

/// Event: клик по сцене — дойти до точки
///
/// Генерируется: host input (pointer down) для entity с Player.
/// Обрабатывается: plan_walks — путь через SceneNavMesh, затем WalkPath.
/// Недостижимая точка → молча игнорируется.
#[derive(Event, Debug, Clone)]
pub struct MoveRequest {
    pub entity: Entity,
    pub destination: Vec2,
}

/// Event: пройти готовый путь (минуя pathfinding)
#[derive(Event, Debug, Clone)]
pub struct WalkPath {
    pub entity: Entity,
    pub path: NavPath,
}

/// Event: остановиться немедленно (как при естественном конце пути)
#[derive(Event, Debug, Clone)]
pub struct StopWalking {
    pub entity: Entity,
}

/// Event: подойти к предмету сцены (к его walk spot)
#[derive(Event, Debug, Clone)]
pub struct InteractRequest {
    pub actor: Entity,
    pub item: Entity,
}

/// Команда ambient звука шагов (host: loop sound с заданной громкостью)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FootstepCue {
    Start { volume: f32 },
    Stop,
}

/// Event: звук шагов для entity, 1:1 со стартом/остановкой ходьбы
#[derive(Event, Debug, Clone, PartialEq)]
pub struct FootstepEvent {
    pub entity: Entity,
    pub cue: FootstepCue,
}

/// Event: walker дошёл до конца пути (или был остановлен)
#[derive(Event, Debug, Clone)]
pub struct WalkFinished {
    pub entity: Entity,
    pub position: Vec2,
}
