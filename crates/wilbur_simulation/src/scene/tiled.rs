//! Tiled object layers (JSON export `.tmj`)
//!
//! Читаем только то, что нужно навигации: именованные object layers
//! с прямоугольниками (navmesh) и точками-маркерами (top/right/bottom/left).
//! Tile layers, properties и прочее игнорируются.

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Ошибки загрузки данных сцены
#[derive(Debug, Error)]
pub enum SceneDataError {
    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("object layer `{0}` not found")]
    MissingLayer(String),

    #[error("object layer `{0}` has no usable objects")]
    EmptyLayer(String),
}

/// Tiled map: нас интересует только список слоёв
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TiledMap {
    #[serde(default)]
    pub layers: Vec<TiledLayer>,
}

/// Слой карты (tile layers приходят с пустым `objects`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TiledLayer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub objects: Vec<TiledObject>,
}

/// Объект слоя: точка (width/height = 0) или прямоугольник
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TiledObject {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
}

impl TiledObject {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Прямоугольник объекта (Tiled: x/y — левый верхний угол)
    pub fn rect(&self) -> Option<Rect> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(Rect::new(
            self.x,
            self.y,
            self.x + self.width,
            self.y + self.height,
        ))
    }
}

impl TiledMap {
    pub fn parse(json: &str) -> Result<Self, SceneDataError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn layer(&self, name: &str) -> Option<&TiledLayer> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    /// Объекты слоя или ошибка, если слоя нет
    pub fn objects(&self, name: &str) -> Result<&[TiledObject], SceneDataError> {
        self.layer(name)
            .map(|layer| layer.objects.as_slice())
            .ok_or_else(|| SceneDataError::MissingLayer(name.to_string()))
    }

    /// Позиции объектов слоя; отсутствующий слой → пустой список
    pub fn points(&self, name: &str) -> Vec<Vec2> {
        self.layer(name)
            .map(|layer| layer.objects.iter().map(TiledObject::position).collect())
            .unwrap_or_default()
    }
}
