//! Scene graph seam для focus probe
//!
//! Узел сцены помечается `SceneTag` один раз при spawn. Collider может висеть
//! на дочернем узле без тега: resolver поднимается по ancestry до тега.

use bevy::prelude::*;

/// Тип узла сцены
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub enum SceneTag {
    /// Декорация: участвует в raycast (может заслонять), но не focusable
    Decoration,
    /// Exhibit, на который можно навести aim
    Interactable { name: String },
}

impl SceneTag {
    pub fn interactable(name: impl Into<String>) -> Self {
        Self::Interactable { name: name.into() }
    }

    pub fn interactable_name(&self) -> Option<&str> {
        match self {
            SceneTag::Interactable { name } => Some(name),
            SceneTag::Decoration => None,
        }
    }
}

/// Одно пересечение aim ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit<N> {
    pub node: N,
    pub distance: f32,
}

/// Read-only доступ к сцене
pub trait SceneQuery {
    type Node: Copy + PartialEq + std::fmt::Debug;

    /// Пересечения луча в порядке возрастания distance
    fn ray_hits(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Vec<RayHit<Self::Node>>;

    /// None = корень сцены
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    fn interactable_name(&self, node: Self::Node) -> Option<&str>;

    /// None = узел удалён (stale reference)
    fn world_position(&self, node: Self::Node) -> Option<Vec3>;
}
