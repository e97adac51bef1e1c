//! Параметры навигации (resource)

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::edge_guard::EdgeGuardConfig;
use crate::scene::SceneDataError;

/// Параметры walker контроллера
///
/// Defaults:
/// poll каждые 50 ms, 200 units/sec, waypoint считается достигнутым ближе 15 units.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Интервал poll task (ms)
    pub poll_interval_ms: u64,
    /// Скорость ходьбы (units/sec)
    pub walk_speed: f32,
    /// Waypoint достигнут, если distance < distance_tolerance
    pub distance_tolerance: f32,
    /// Громкость зацикленных шагов
    pub footstep_volume: f32,
    /// Edge guard (допуски + середина экрана)
    pub edge: EdgeGuardConfig,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 50,
            walk_speed: 200.0,
            distance_tolerance: 15.0,
            footstep_volume: 0.2,
            edge: EdgeGuardConfig::default(),
        }
    }
}

impl NavigationConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Частичный JSON: отсутствующие поля берутся из Default
    pub fn from_json(json: &str) -> Result<Self, SceneDataError> {
        Ok(serde_json::from_str(json)?)
    }
}
