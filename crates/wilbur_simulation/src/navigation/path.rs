//! NavPath — waypoints, которые walker расходует по одному

use bevy::prelude::*;

/// Путь актора в виде стека waypoints
///
/// Порядок хранения зафиксирован один раз:
/// - последний элемент — СЛЕДУЮЩИЙ waypoint (забирается через `pop`)
/// - первый элемент — пункт назначения (дальний конец пути)
///
/// Mesh provider отдаёт маршрут в порядке движения (start → end),
/// `from_route` разворачивает его и выбрасывает start (это позиция самого актора).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavPath {
    stack: Vec<Vec2>,
}

impl NavPath {
    /// Уже развёрнутый стек: `stack.last()` — следующий waypoint
    pub fn from_stack(stack: Vec<Vec2>) -> Self {
        Self { stack }
    }

    /// Маршрут в порядке движения, первая точка — текущая позиция актора
    pub fn from_route(mut route: Vec<Vec2>) -> Self {
        route.reverse();
        route.pop();
        Self { stack: route }
    }

    /// Забрать следующий waypoint
    pub fn next_waypoint(&mut self) -> Option<Vec2> {
        self.stack.pop()
    }

    /// Следующий waypoint без извлечения
    pub fn peek(&self) -> Option<Vec2> {
        self.stack.last().copied()
    }

    /// Пункт назначения (дальний конец)
    pub fn destination(&self) -> Option<Vec2> {
        self.stack.first().copied()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
