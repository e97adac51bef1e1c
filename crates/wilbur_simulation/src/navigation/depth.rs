//! DepthScaler — draw order и pseudo-3D масштаб по вертикальной позиции
//!
//! Чем ниже актор на экране (больше y), тем он "ближе": рисуется позже
//! и крупнее. Горизонт — y = 900 (за нижней границей 800×600 сцены нет
//! сингулярности, но walkable область её не касается).

/// Симулированный горизонт: scale(y) определён только для y < HORIZON_Y
pub const HORIZON_Y: f32 = 900.0;

/// Шаг draw order (один depth key на 10 pixels)
pub const DEPTH_STEP: f32 = 10.0;

const SCALE_OFFSET: f32 = 15.0;
const SCALE_LOG_BASE: f32 = 1.77;
const SCALE_DIVISOR: f32 = 2.5;

/// Draw order key: floor(y / 10)
pub fn depth_key(y: f32) -> i32 {
    (y / DEPTH_STEP).floor() as i32
}

/// Pseudo-3D масштаб: (15 + log_1.77(1 / (900 − y))) / 2.5
///
/// `None` для y ≥ HORIZON_Y и для не-finite y: NaN в presentation не уходит,
/// вызывающий оставляет предыдущий масштаб.
pub fn scale(y: f32) -> Option<f32> {
    if !y.is_finite() || y >= HORIZON_Y {
        return None;
    }
    let falloff = (1.0 / (HORIZON_Y - y)).ln() / SCALE_LOG_BASE.ln();
    Some((SCALE_OFFSET + falloff) / SCALE_DIVISOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_key_floors() {
        assert_eq!(depth_key(340.0), 34);
        assert_eq!(depth_key(349.9), 34);
        assert_eq!(depth_key(0.0), 0);
        assert_eq!(depth_key(-5.0), -1);
    }

    #[test]
    fn test_scale_known_value() {
        // y = 340 → 900 − 340 = 560
        let expected = (15.0 + (1.0f32 / 560.0).ln() / 1.77f32.ln()) / 2.5;
        let actual = scale(340.0).expect("below horizon");
        assert!((actual - expected).abs() < 1e-5);
        assert!(actual > 1.5 && actual < 1.6, "scale(340) = {}", actual);
    }

    #[test]
    fn test_depth_and_scale_monotonic() {
        let samples = [-100.0, 0.0, 120.0, 300.0, 340.0, 450.0, 599.0, 800.0, 899.0];
        for pair in samples.windows(2) {
            let (y1, y2) = (pair[0], pair[1]);
            assert!(depth_key(y1) <= depth_key(y2), "depth {} vs {}", y1, y2);
            let s1 = scale(y1).expect("below horizon");
            let s2 = scale(y2).expect("below horizon");
            assert!(s1 < s2, "scale({}) = {} !< scale({}) = {}", y1, s1, y2, s2);
        }
    }

    #[test]
    fn test_scale_rejects_horizon_and_beyond() {
        assert_eq!(scale(HORIZON_Y), None);
        assert_eq!(scale(950.0), None);
        assert_eq!(scale(f32::NAN), None);
        assert_eq!(scale(f32::INFINITY), None);
        assert!(scale(899.5).is_some_and(f32::is_finite));
    }
}
