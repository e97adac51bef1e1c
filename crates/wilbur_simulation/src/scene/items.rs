//! Предметы сцены (стойка, двери, …)

use bevy::prelude::*;

use crate::components::{DrawDepth, ScenePosition};
use crate::navigation::depth_key;

/// Насколько ниже предмета актор встаёт по умолчанию
pub const DEFAULT_WALK_SHIFT: f32 = 20.0;

/// Предмет, к которому можно подойти
///
/// Позиция предмета живёт только в его ScenePosition. `walk_y` — явный y
/// точки, куда встаёт актор; без него актор встаёт на DEFAULT_WALK_SHIFT ниже.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
#[require(ScenePosition, DrawDepth)]
pub struct SceneItem {
    pub description: String,
    pub walk_y: Option<f32>,
}

impl SceneItem {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            walk_y: None,
        }
    }

    pub fn with_walk_y(mut self, walk_y: f32) -> Self {
        self.walk_y = Some(walk_y);
        self
    }

    /// Куда встаёт актор (x совпадает с предметом)
    pub fn walk_spot(&self, position: Vec2) -> Vec2 {
        let walk_y = self.walk_y.unwrap_or(position.y + DEFAULT_WALK_SHIFT);
        Vec2::new(position.x, walk_y)
    }
}

/// Spawn helper для предмета: depth считается один раз (предметы не двигаются)
pub fn spawn_item(commands: &mut Commands, item: SceneItem, position: Vec2) -> Entity {
    commands
        .spawn((item, ScenePosition(position), DrawDepth(depth_key(position.y))))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_walk_spot_follows_position() {
        let desk = SceneItem::new("Hotel desk");
        assert_eq!(desk.walk_spot(Vec2::new(400.0, 300.0)), Vec2::new(400.0, 320.0));
        // Та же запись на другой позиции — spot считается от неё
        assert_eq!(desk.walk_spot(Vec2::new(120.0, 410.0)), Vec2::new(120.0, 430.0));
    }

    #[test]
    fn test_custom_walk_spot() {
        let position = Vec2::new(650.0, 240.0);
        let door = SceneItem::new("Door").with_walk_y(300.0);
        assert_eq!(door.walk_spot(position), Vec2::new(650.0, 300.0));
        assert_eq!(door.description, "Door");
    }

    #[test]
    fn test_spawn_item_uses_single_position() {
        let mut world = World::new();
        let position = Vec2::new(400.0, 300.0);
        let item = spawn_item(&mut world.commands(), SceneItem::new("Hotel desk"), position);
        world.flush();

        let spawned = world.get::<ScenePosition>(item).expect("position").0;
        let desk = world.get::<SceneItem>(item).expect("item");
        assert_eq!(spawned, position);
        assert_eq!(desk.walk_spot(spawned), Vec2::new(400.0, 320.0));
        assert_eq!(world.get::<DrawDepth>(item), Some(&DrawDepth(30)));
    }
}
