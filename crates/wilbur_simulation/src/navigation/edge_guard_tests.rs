//! Tests for edge guard.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::navigation::edge_guard::{is_unsafe, DirectionalBoundaries, EdgeGuardConfig, Side};

    fn lobby_boundaries() -> DirectionalBoundaries {
        DirectionalBoundaries {
            top: vec![Vec2::new(300.0, 100.0), Vec2::new(500.0, 100.0)],
            bottom: vec![Vec2::new(300.0, 560.0)],
            left: vec![Vec2::new(100.0, 200.0)],
            right: vec![Vec2::new(700.0, 200.0)],
        }
    }

    #[test]
    fn test_short_step_toward_top_marker_is_unsafe() {
        // Destination в 5 (x) и 3 (y) от top маркера, актор подходит снизу
        let destination = Vec2::new(305.0, 103.0);
        let actor = Vec2::new(305.0, 110.0);
        let config = EdgeGuardConfig::default();

        assert!(is_unsafe(destination, actor, &lobby_boundaries(), &config));
    }

    #[test]
    fn test_long_step_is_not_scrutinized() {
        let destination = Vec2::new(305.0, 103.0);
        let actor = Vec2::new(305.0, 150.0); // 47 > допуск 10
        assert!(!is_unsafe(destination, actor, &lobby_boundaries(), &EdgeGuardConfig::default()));
    }

    #[test]
    fn test_step_away_from_edge_is_safe() {
        // Destination в top половине, но актор идёт вниз (от края)
        let destination = Vec2::new(305.0, 103.0);
        let actor = Vec2::new(305.0, 98.0);
        assert!(!is_unsafe(destination, actor, &lobby_boundaries(), &EdgeGuardConfig::default()));
    }

    #[test]
    fn test_no_marker_nearby_is_safe() {
        let destination = Vec2::new(305.0, 150.0);
        let actor = Vec2::new(305.0, 155.0);
        assert!(!is_unsafe(destination, actor, &lobby_boundaries(), &EdgeGuardConfig::default()));
    }

    #[test]
    fn test_zero_length_step_is_safe() {
        let here = Vec2::new(300.0, 100.0);
        assert!(!is_unsafe(here, here, &lobby_boundaries(), &EdgeGuardConfig::default()));
    }

    #[test]
    fn test_bottom_half_uses_bottom_markers() {
        // Идём вниз к bottom маркеру (y = 560)
        let destination = Vec2::new(310.0, 555.0);
        let actor = Vec2::new(310.0, 548.0);
        assert!(is_unsafe(destination, actor, &lobby_boundaries(), &EdgeGuardConfig::default()));

        // Top маркеры в bottom половине не участвуют
        let only_top = DirectionalBoundaries {
            top: vec![Vec2::new(310.0, 555.0)],
            ..default()
        };
        assert!(!is_unsafe(destination, actor, &only_top, &EdgeGuardConfig::default()));
    }

    #[test]
    fn test_horizontal_axis_uses_wider_tolerance() {
        // Шаг 15 по x (< 20) к left маркеру
        let destination = Vec2::new(110.0, 300.0);
        let actor = Vec2::new(125.0, 300.0);
        assert!(is_unsafe(destination, actor, &lobby_boundaries(), &EdgeGuardConfig::default()));

        // Тот же шаг к right маркеру
        let destination = Vec2::new(690.0, 300.0);
        let actor = Vec2::new(675.0, 300.0);
        assert!(is_unsafe(destination, actor, &lobby_boundaries(), &EdgeGuardConfig::default()));
    }

    #[test]
    fn test_empty_boundaries_never_block() {
        let destination = Vec2::new(305.0, 103.0);
        let actor = Vec2::new(305.0, 110.0);
        let empty = DirectionalBoundaries::default();
        assert!(empty.is_empty());
        assert!(!is_unsafe(destination, actor, &empty, &EdgeGuardConfig::default()));
    }

    #[test]
    fn test_boundaries_from_tiled_layers() {
        let json = r#"{"layers": [
            {"name": "top", "objects": [{"x": 150, "y": 320}]},
            {"name": "left", "objects": [{"x": 100, "y": 380}, {"x": 100, "y": 420}]}
        ]}"#;
        let boundaries = DirectionalBoundaries::from_tiled_json(json).expect("valid layers");
        assert_eq!(boundaries.markers(Side::Top), &[Vec2::new(150.0, 320.0)]);
        assert_eq!(boundaries.markers(Side::Left).len(), 2);
        assert!(boundaries.markers(Side::Bottom).is_empty());
        assert!(boundaries.markers(Side::Right).is_empty());
    }

    #[test]
    fn test_malformed_boundaries_degrade_to_no_restriction() {
        assert!(DirectionalBoundaries::from_tiled_json("[[[").is_err());
        assert_eq!(DirectionalBoundaries::load_or_default("[[["), DirectionalBoundaries::default());
        // Валидный JSON без слоёв — тоже без ограничений
        assert!(DirectionalBoundaries::load_or_default("{}").is_empty());
    }
}
