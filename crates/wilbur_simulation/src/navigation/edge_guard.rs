//! EdgeGuard — вето на короткие шаги к краю walkable области
//!
//! Проблема:
//! - Короткий шаг к краю navmesh может поставить актора ровно на границу
//! - Physics integration доводит его чуть дальше, за пределы mesh
//! - Из точки вне mesh ни один новый путь уже не строится
//! - `is_point_in_mesh` на таких дистанциях (меньше допуска) не надёжен
//!
//! Решение:
//! - Сцена размечает края маркерами (object layers top/right/bottom/left)
//! - Шаг к краю короче допуска, заканчивающийся рядом с маркером, отклоняется

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::logger::log_warning;
use crate::scene::{SceneDataError, TiledMap};

/// Сторона walkable области
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Имя object layer в Tiled карте
    pub fn layer_name(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

/// Маркеры краёв walkable области, по сторонам
///
/// Задаются один раз на сцену, контроллер только читает.
/// Пустая коллекция = на этой стороне ограничений нет.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionalBoundaries {
    pub top: Vec<Vec2>,
    pub right: Vec<Vec2>,
    pub bottom: Vec<Vec2>,
    pub left: Vec<Vec2>,
}

impl DirectionalBoundaries {
    pub fn markers(&self, side: Side) -> &[Vec2] {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    pub fn is_empty(&self) -> bool {
        Side::ALL.iter().all(|side| self.markers(*side).is_empty())
    }

    /// Маркеры из object layers `top`/`right`/`bottom`/`left`
    ///
    /// Отсутствующий слой — просто пустая сторона, ошибкой считается только битый JSON.
    pub fn from_tiled_json(json: &str) -> Result<Self, SceneDataError> {
        let map = TiledMap::parse(json)?;
        Ok(Self {
            top: map.points(Side::Top.layer_name()),
            right: map.points(Side::Right.layer_name()),
            bottom: map.points(Side::Bottom.layer_name()),
            left: map.points(Side::Left.layer_name()),
        })
    }

    /// Как `from_tiled_json`, но битые данные → "без ограничений" + warning
    pub fn load_or_default(json: &str) -> Self {
        match Self::from_tiled_json(json) {
            Ok(boundaries) => boundaries,
            Err(err) => {
                log_warning(&format!("Edge markers unavailable ({}), edge guard disabled", err));
                Self::default()
            }
        }
    }
}

/// Параметры edge guard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeGuardConfig {
    /// Допуск по осям (x, y): короче этого шаг проверяется,
    /// ближе этого к маркеру — опасно
    pub proximity: Vec2,
    /// Середина экрана по осям: делит сцену на left/right и top/bottom
    pub midpoint: Vec2,
}

impl Default for EdgeGuardConfig {
    fn default() -> Self {
        Self {
            proximity: Vec2::new(20.0, 10.0),
            // 800×600 canvas: x — половина ширины, y — две трети высоты
            midpoint: Vec2::new(400.0, 400.0),
        }
    }
}

/// Опасен ли шаг от `actor` к `destination`
///
/// Для каждой оси:
/// 1. Половина сцены, где лежит destination → какая сторона (top/bottom, left/right)
/// 2. Signed distance: > 0 значит "идём к этой стороне"
/// 3. distance ≤ 0 или больше допуска → ось не проверяется
/// 4. Маркер стороны в пределах допуска от destination → опасно
pub fn is_unsafe(
    destination: Vec2,
    actor: Vec2,
    boundaries: &DirectionalBoundaries,
    config: &EdgeGuardConfig,
) -> bool {
    let vertical = AxisProbe {
        destination: destination.y,
        actor: actor.y,
        midpoint: config.midpoint.y,
        tolerance: config.proximity.y,
    };
    let horizontal = AxisProbe {
        destination: destination.x,
        actor: actor.x,
        midpoint: config.midpoint.x,
        tolerance: config.proximity.x,
    };

    let near_vertical = vertical.near_edge(
        boundaries.markers(Side::Top),
        boundaries.markers(Side::Bottom),
        |marker| marker.y,
    );
    let near_horizontal = horizontal.near_edge(
        boundaries.markers(Side::Left),
        boundaries.markers(Side::Right),
        |marker| marker.x,
    );

    near_vertical || near_horizontal
}

/// Одна ось проверки (x или y)
struct AxisProbe {
    destination: f32,
    actor: f32,
    midpoint: f32,
    tolerance: f32,
}

impl AxisProbe {
    /// `low` — сторона меньших координат (top / left), `high` — больших (bottom / right)
    fn near_edge(&self, low: &[Vec2], high: &[Vec2], coord: impl Fn(&Vec2) -> f32) -> bool {
        let toward_low = self.destination < self.midpoint;
        let distance = if toward_low {
            self.actor - self.destination
        } else {
            self.destination - self.actor
        };

        if distance <= 0.0 || distance > self.tolerance {
            return false;
        }

        let markers = if toward_low { low } else { high };
        markers
            .iter()
            .any(|marker| (coord(marker) - self.destination).abs() <= self.tolerance)
    }
}
