//! Presentation компоненты: то, что рисует host (facing, depth, scale, анимация)
//!
//! ECS только пишет значения, рендер целиком на стороне host.

use bevy::prelude::*;

/// Куда смотрит спрайт (flipX у host)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Facing по горизонтальной дельте: Left если target левее актора
    pub fn toward(from: Vec2, target: Vec2) -> Self {
        if target.x < from.x {
            Facing::Left
        } else {
            Facing::Right
        }
    }
}

/// Draw order key (больше → рисуется позже, "ближе" к камере)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct DrawDepth(pub i32);

/// Pseudo-3D масштаб спрайта
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct VisualScale(pub f32);

impl Default for VisualScale {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Текущий animation clip (сами clips определяет host)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum ActorAnimation {
    /// Стоит на месте (single frame)
    #[default]
    Idle,
    /// Цикл ходьбы
    Walking,
}
