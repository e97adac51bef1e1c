//! Сцена лобби отеля (800×600)
//!
//! Walkable пол — три прямоугольника Tiled слоя `navmesh`:
//! - зал: x 100..700, y 320..450
//! - передняя часть: x 250..550, y 450..560
//! - проход к двери: x 620..700, y 250..320
//!
//! Края размечены точками в слоях top/right/bottom/left.

use bevy::prelude::*;

use crate::components::Player;
use crate::logger::{log_error, log_info};
use crate::navigation::{spawn_walker, DirectionalBoundaries, RectNavMesh, SceneNavMesh};
use crate::scene::{spawn_item, SceneItem};

/// Стартовая позиция игрока (ноги спрайта)
pub const PLAYER_START: Vec2 = Vec2::new(400.0, 340.0);

/// Стойка регистрации
pub const DESK_POSITION: Vec2 = Vec2::new(400.0, 300.0);

/// Имя object layer с walkable прямоугольниками
pub const NAVMESH_LAYER: &str = "navmesh";

/// Tiled карта лобби (объектные слои, tile layer для фона)
pub const LOBBY_TILEMAP: &str = r#"{
  "width": 80, "height": 60, "tilewidth": 10, "tileheight": 10, "orientation": "orthogonal",
  "layers": [
    {"name": "background", "type": "tilelayer", "width": 80, "height": 60, "data": []},
    {"name": "navmesh", "type": "objectgroup", "objects": [
      {"id": 1, "name": "hall", "x": 100, "y": 320, "width": 600, "height": 130},
      {"id": 2, "name": "front", "x": 250, "y": 450, "width": 300, "height": 110},
      {"id": 3, "name": "corridor", "x": 620, "y": 250, "width": 80, "height": 70}
    ]},
    {"name": "top", "type": "objectgroup", "objects": [
      {"id": 10, "x": 120, "y": 320, "point": true},
      {"id": 11, "x": 200, "y": 320, "point": true},
      {"id": 12, "x": 280, "y": 320, "point": true},
      {"id": 13, "x": 360, "y": 320, "point": true},
      {"id": 14, "x": 440, "y": 320, "point": true},
      {"id": 15, "x": 520, "y": 320, "point": true},
      {"id": 16, "x": 600, "y": 320, "point": true},
      {"id": 17, "x": 640, "y": 250, "point": true},
      {"id": 18, "x": 680, "y": 250, "point": true}
    ]},
    {"name": "bottom", "type": "objectgroup", "objects": [
      {"id": 20, "x": 140, "y": 450, "point": true},
      {"id": 21, "x": 220, "y": 450, "point": true},
      {"id": 22, "x": 580, "y": 450, "point": true},
      {"id": 23, "x": 660, "y": 450, "point": true},
      {"id": 24, "x": 290, "y": 560, "point": true},
      {"id": 25, "x": 370, "y": 560, "point": true},
      {"id": 26, "x": 450, "y": 560, "point": true},
      {"id": 27, "x": 530, "y": 560, "point": true}
    ]},
    {"name": "left", "type": "objectgroup", "objects": [
      {"id": 30, "x": 100, "y": 340, "point": true},
      {"id": 31, "x": 100, "y": 400, "point": true},
      {"id": 32, "x": 250, "y": 480, "point": true},
      {"id": 33, "x": 250, "y": 540, "point": true}
    ]},
    {"name": "right", "type": "objectgroup", "objects": [
      {"id": 40, "x": 700, "y": 270, "point": true},
      {"id": 41, "x": 700, "y": 340, "point": true},
      {"id": 42, "x": 700, "y": 420, "point": true},
      {"id": 43, "x": 550, "y": 480, "point": true},
      {"id": 44, "x": 550, "y": 540, "point": true}
    ]}
  ]
}"#;

/// Lobby Plugin
///
/// Вставляет SceneNavMesh + DirectionalBoundaries из LOBBY_TILEMAP
/// и спавнит игрока и стойку на Startup.
pub struct LobbyScenePlugin;

impl Plugin for LobbyScenePlugin {
    fn build(&self, app: &mut App) {
        match RectNavMesh::from_tiled_json(LOBBY_TILEMAP, NAVMESH_LAYER) {
            Ok(mesh) => {
                app.insert_resource(SceneNavMesh::new(mesh));
            }
            Err(err) => {
                // Остаётся открытый пол (SceneNavMesh::default)
                log_error(&format!("Lobby navmesh failed to load: {}", err));
            }
        }

        app.insert_resource(DirectionalBoundaries::load_or_default(LOBBY_TILEMAP))
            .add_systems(Startup, spawn_lobby);
    }
}

fn spawn_lobby(mut commands: Commands) {
    let player = spawn_walker(&mut commands, PLAYER_START);
    commands.entity(player).insert(Player);

    spawn_item(
        &mut commands,
        SceneItem::new("A polished reception desk. Nobody is behind it."),
        DESK_POSITION,
    );

    log_info(&format!("Lobby ready: player {:?} at {:?}", player, PLAYER_START));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{NavMeshProvider, Side};

    #[test]
    fn test_lobby_navmesh_loads() {
        let mesh = RectNavMesh::from_tiled_json(LOBBY_TILEMAP, NAVMESH_LAYER).expect("lobby navmesh");
        assert_eq!(mesh.rects().len(), 3);
        assert!(mesh.is_point_in_mesh(PLAYER_START));
        // Стойка стоит вне пола, её walk spot — на краю зала
        assert!(!mesh.is_point_in_mesh(DESK_POSITION));
        assert!(mesh.is_point_in_mesh(SceneItem::new("desk").walk_spot(DESK_POSITION)));
    }

    #[test]
    fn test_lobby_path_to_corridor() {
        let mesh = RectNavMesh::from_tiled_json(LOBBY_TILEMAP, NAVMESH_LAYER).expect("lobby navmesh");
        let route = mesh
            .find_path(PLAYER_START, Vec2::new(660.0, 270.0))
            .expect("corridor reachable");
        // start → portal зал/проход (y = 320) → destination
        assert_eq!(route.len(), 3);
        assert_eq!(route[1], Vec2::new(660.0, 320.0));
    }

    #[test]
    fn test_lobby_boundaries_load() {
        let boundaries = DirectionalBoundaries::load_or_default(LOBBY_TILEMAP);
        assert_eq!(boundaries.markers(Side::Top).len(), 9);
        assert_eq!(boundaries.markers(Side::Bottom).len(), 8);
        assert_eq!(boundaries.markers(Side::Left).len(), 4);
        assert_eq!(boundaries.markers(Side::Right).len(), 5);
    }
}
