//! Navigation mesh provider — внешний коллаборатор walker контроллера
//!
//! Контроллер не ищет путь сам, он только:
//! - получает готовый маршрут (`find_path`) при клике
//! - проверяет `is_point_in_mesh` в конце пути (stranding recovery)
//!
//! RectNavMesh — минимальный provider для headless сцены и тестов:
//! union прямоугольников из Tiled слоя `navmesh`.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::scene::{SceneDataError, TiledMap};

/// Внешний navmesh (pathfinding + containment)
pub trait NavMeshProvider: Send + Sync {
    /// Маршрут в порядке движения: первая точка — `start`, последняя — `end`.
    /// `None` если `end` недостижим.
    fn find_path(&self, start: Vec2, end: Vec2) -> Option<Vec<Vec2>>;

    fn is_point_in_mesh(&self, point: Vec2) -> bool;
}

/// Navmesh текущей сцены (resource)
///
/// Default — открытый пол без границ (до загрузки сцены).
#[derive(Resource)]
pub struct SceneNavMesh(pub Box<dyn NavMeshProvider>);

impl SceneNavMesh {
    pub fn new(provider: impl NavMeshProvider + 'static) -> Self {
        Self(Box::new(provider))
    }

    pub fn provider(&self) -> &dyn NavMeshProvider {
        self.0.as_ref()
    }
}

impl Default for SceneNavMesh {
    fn default() -> Self {
        Self::new(OpenFloor)
    }
}

/// Вся плоскость walkable, путь — прямая
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenFloor;

impl NavMeshProvider for OpenFloor {
    fn find_path(&self, start: Vec2, end: Vec2) -> Option<Vec<Vec2>> {
        Some(vec![start, end])
    }

    fn is_point_in_mesh(&self, _point: Vec2) -> bool {
        true
    }
}

/// Navmesh из axis-aligned прямоугольников
///
/// Соседи — прямоугольники с общим отрезком границы (или перекрытием).
/// Путь проходит через середины общих отрезков (portals), BFS по числу переходов.
#[derive(Debug, Clone, Default)]
pub struct RectNavMesh {
    rects: Vec<Rect>,
}

impl RectNavMesh {
    pub fn new(rects: Vec<Rect>) -> Self {
        Self { rects }
    }

    /// Build из object layer Tiled карты (прямоугольные объекты)
    pub fn from_tiled_json(json: &str, layer: &str) -> Result<Self, SceneDataError> {
        let map = TiledMap::parse(json)?;
        let rects: Vec<Rect> = map.objects(layer)?.iter().filter_map(|object| object.rect()).collect();
        if rects.is_empty() {
            return Err(SceneDataError::EmptyLayer(layer.to_string()));
        }
        Ok(Self::new(rects))
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    fn rect_containing(&self, point: Vec2) -> Option<usize> {
        self.rects.iter().position(|rect| rect.contains(point))
    }

    /// Цепочка индексов прямоугольников from → to (BFS)
    fn rect_chain(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        let mut came_from: Vec<Option<usize>> = vec![None; self.rects.len()];
        let mut visited = vec![false; self.rects.len()];
        let mut queue = VecDeque::from([from]);
        visited[from] = true;

        while let Some(current) = queue.pop_front() {
            if current == to {
                let mut chain = vec![to];
                let mut cursor = to;
                while let Some(previous) = came_from[cursor] {
                    chain.push(previous);
                    cursor = previous;
                }
                chain.reverse();
                return Some(chain);
            }

            for next in 0..self.rects.len() {
                if visited[next] || portal(&self.rects[current], &self.rects[next]).is_none() {
                    continue;
                }
                visited[next] = true;
                came_from[next] = Some(current);
                queue.push_back(next);
            }
        }

        None
    }
}

impl NavMeshProvider for RectNavMesh {
    fn find_path(&self, start: Vec2, end: Vec2) -> Option<Vec<Vec2>> {
        let from = self.rect_containing(start)?;
        let to = self.rect_containing(end)?;
        let chain = self.rect_chain(from, to)?;

        let mut route = Vec::with_capacity(chain.len() + 1);
        route.push(start);
        for pair in chain.windows(2) {
            route.extend(portal(&self.rects[pair[0]], &self.rects[pair[1]]));
        }
        route.push(end);
        Some(route)
    }

    fn is_point_in_mesh(&self, point: Vec2) -> bool {
        self.rect_containing(point).is_some()
    }
}

/// Середина общего участка двух прямоугольников
///
/// Касание углом (нулевая длина по обеим осям) соседством не считается.
fn portal(a: &Rect, b: &Rect) -> Option<Vec2> {
    let min = a.min.max(b.min);
    let max = a.max.min(b.max);
    let size = max - min;
    if size.x < 0.0 || size.y < 0.0 || (size.x == 0.0 && size.y == 0.0) {
        return None;
    }
    Some((min + max) / 2.0)
}
