//! Позиционирование в 2D сцене: ScenePosition, Velocity

use bevy::prelude::*;

/// Позиция актора в координатах сцены (pixels, y растёт вниз)
///
/// Точка опоры — ноги актора (origin 0.5, 1), поэтому именно y
/// определяет draw order и pseudo-3D масштаб.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ScenePosition(pub Vec2);

impl ScenePosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

/// Кинематическая скорость (units/sec)
///
/// Пишется navigation контроллером (move toward / halt),
/// интегрируется в ScenePosition каждый кадр.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Velocity(pub Vec2);

impl Velocity {
    /// Скорость "двигаться к target" (arcade-style: постоянная speed, без ускорения)
    ///
    /// Если уже стоим на target — нулевая скорость.
    pub fn toward(from: Vec2, target: Vec2, speed: f32) -> Self {
        Self((target - from).normalize_or_zero() * speed)
    }
}

/// Точка, на которой kinematic движение останавливается
///
/// Пишется вместе с Velocity (move toward). Integration не проносит актора
/// мимо неё, даже если кадр длиннее оставшегося пути.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MoveTarget(pub Option<Vec2>);
