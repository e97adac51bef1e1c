//! Маркеры акторов сцены

use bevy::prelude::Component;

/// Marker component для player-controlled walker
///
/// Клики мыши host превращает в MoveRequest именно для этого entity.
/// В сцене обычно ровно один Player.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
