//! Kinematic интеграция velocity → ScenePosition
//!
//! Работает в Update (per-frame, как arcade physics у host),
//! в WalkSet::Physics — между стартом ходьбы и poll task.

use bevy::prelude::*;

use crate::components::{MoveTarget, ScenePosition, Velocity};
use crate::navigation::WalkSet;

/// Система интеграции velocity → position
///
/// position += velocity * dt. Нулевая velocity — актор стоит.
///
/// Если шаг кадра дотягивается до MoveTarget, актор встаёт ровно на неё
/// и останавливается (velocity = 0, target снят).
pub fn integrate_velocity(
    mut query: Query<(&mut Velocity, &mut ScenePosition, Option<&mut MoveTarget>)>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (mut velocity, mut position, target) in query.iter_mut() {
        if velocity.0 == Vec2::ZERO {
            continue;
        }
        let step = velocity.0 * delta;

        if let Some(mut target) = target {
            if let Some(point) = target.0 {
                if step.length() >= position.0.distance(point) {
                    position.0 = point;
                    velocity.0 = Vec2::ZERO;
                    target.0 = None;
                    continue;
                }
            }
        }

        position.0 += step;
    }
}

/// Plugin для kinematic движения
pub struct KinematicPlugin;

impl Plugin for KinematicPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, integrate_velocity.in_set(WalkSet::Physics));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    #[test]
    fn test_integrate_velocity_logic() {
        // Тестируем через World напрямую (без App schedule)
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_millis(100));
        world.insert_resource(time);

        let moving = world
            .spawn((Velocity(Vec2::new(200.0, 0.0)), ScenePosition::new(100.0, 300.0)))
            .id();
        let standing = world
            .spawn((Velocity::default(), ScenePosition::new(50.0, 50.0)))
            .id();

        world.run_system_once(integrate_velocity).expect("system runs");

        // 200 units/sec × 0.1 sec = 20 units
        let position = world.get::<ScenePosition>(moving).expect("position").0;
        assert!((position.x - 120.0).abs() < 0.001, "x = {}", position.x);
        assert_eq!(position.y, 300.0);
        assert_eq!(world.get::<ScenePosition>(standing).expect("position").0, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_long_frame_stops_on_target() {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_millis(100));
        world.insert_resource(time);

        // 20 units за кадр, до цели 10
        let walker = world
            .spawn((
                Velocity(Vec2::new(0.0, -200.0)),
                ScenePosition::new(400.0, 331.0),
                MoveTarget(Some(Vec2::new(400.0, 321.0))),
            ))
            .id();
        let short = world
            .spawn((
                Velocity(Vec2::new(0.0, -200.0)),
                ScenePosition::new(400.0, 398.0),
                MoveTarget(Some(Vec2::new(400.0, 321.0))),
            ))
            .id();

        world.run_system_once(integrate_velocity).expect("system runs");

        assert_eq!(world.get::<ScenePosition>(walker).expect("position").0, Vec2::new(400.0, 321.0));
        assert_eq!(world.get::<Velocity>(walker).expect("velocity").0, Vec2::ZERO);
        assert_eq!(world.get::<MoveTarget>(walker), Some(&MoveTarget(None)));

        // Цель ещё далеко — обычный шаг
        let position = world.get::<ScenePosition>(short).expect("position").0;
        assert!((position.y - 378.0).abs() < 0.001, "y = {}", position.y);
        assert_eq!(world.get::<MoveTarget>(short), Some(&MoveTarget(Some(Vec2::new(400.0, 321.0)))));
    }
}
