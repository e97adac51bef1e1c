//! Scene domain — данные сцены, которые нужны навигации
//!
//! - tiled: Tiled object layers (navmesh, edge markers) + SceneDataError
//! - items: предметы сцены с walk spot (куда подходит актор)
//! - lobby: встроенная сцена лобби для headless прогона

pub mod items;
pub mod lobby;
pub mod tiled;

pub use items::{spawn_item, SceneItem, DEFAULT_WALK_SHIFT};
pub use lobby::{LobbyScenePlugin, LOBBY_TILEMAP};
pub use tiled::{SceneDataError, TiledLayer, TiledMap, TiledObject};
