//! InteractionResolver: какой exhibit сейчас под прицелом
//!
//! Каждый кадр: один луч из центра viewport → ближайший interactable в
//! пределах `max_range`. Наружу уходят только ИЗМЕНЕНИЯ (Acquired / Moved /
//! Cleared), одинаковый результат два кадра подряд ничего не эмитит.

use bevy::prelude::*;

use super::scene::SceneQuery;
use crate::config::InteractionConfig;
use crate::shared::{CameraPose, ModalGate};

/// Текущий focus
#[derive(Debug, Clone, PartialEq)]
pub struct FocusTarget<N> {
    pub name: String,
    pub node: N,
    pub position: Vec3,
}

/// Изменение focus за кадр
#[derive(Debug, Clone, PartialEq)]
pub enum FocusChange<N> {
    /// Новый exhibit (или первый)
    Acquired(FocusTarget<N>),
    /// Тот же exhibit, сдвинулся
    Moved { node: N, position: Vec3 },
    Cleared,
}

/// Ближайший interactable вдоль луча
///
/// Для каждого hit (по возрастанию distance, дальше `max_range`: пропуск)
/// поднимаемся по ancestry до первого interactable. Побеждает минимальная
/// distance; при равенстве: тот, что встретился раньше.
pub fn find_closest_interactable<S: SceneQuery>(
    scene: &S,
    origin: Vec3,
    direction: Vec3,
    max_range: f32,
) -> Option<(S::Node, f32)> {
    let mut closest: Option<(S::Node, f32)> = None;

    for hit in scene.ray_hits(origin, direction, max_range) {
        if hit.distance > max_range {
            continue;
        }

        let Some(tagged) = interactable_ancestor(scene, hit.node) else {
            continue;
        };

        if closest.map_or(true, |(_, distance)| hit.distance < distance) {
            closest = Some((tagged, hit.distance));
        }
    }

    closest
}

/// Сам узел или ближайший предок с interactable тегом
fn interactable_ancestor<S: SceneQuery>(scene: &S, node: S::Node) -> Option<S::Node> {
    let mut current = Some(node);

    while let Some(candidate) = current {
        if scene.interactable_name(candidate).is_some() {
            return Some(candidate);
        }
        current = scene.parent(candidate);
    }

    None
}

#[derive(Resource, Debug, Clone)]
pub struct InteractionResolver<N> {
    config: InteractionConfig,
    focus: Option<FocusTarget<N>>,
}

impl<N> Default for InteractionResolver<N> {
    fn default() -> Self {
        Self::new(InteractionConfig::default())
    }
}

impl<N> InteractionResolver<N> {
    pub fn new(config: InteractionConfig) -> Self {
        Self { config, focus: None }
    }

    pub fn focus(&self) -> Option<&FocusTarget<N>> {
        self.focus.as_ref()
    }

    pub fn focused_name(&self) -> Option<&str> {
        self.focus.as_ref().map(|focus| focus.name.as_str())
    }

    /// Сбросить focus. Cleared только если что-то было.
    pub fn clear(&mut self) -> Option<FocusChange<N>> {
        self.focus.take().map(|_| FocusChange::Cleared)
    }
}

impl<N: Copy + PartialEq> InteractionResolver<N> {
    pub fn tick<S: SceneQuery<Node = N>>(
        &mut self,
        gate: ModalGate,
        camera: &CameraPose,
        scene: &S,
    ) -> Option<FocusChange<N>> {
        if gate.is_active() {
            return self.clear();
        }

        let candidate = find_closest_interactable(scene, camera.position, camera.forward(), self.config.max_range)
            .and_then(|(node, _)| {
                Some(FocusTarget {
                    name: scene.interactable_name(node)?.to_owned(),
                    node,
                    // Нет позиции = узел удалён между кадрами
                    position: scene.world_position(node)?,
                })
            });

        let Some(candidate) = candidate else {
            return self.clear();
        };

        if let Some(current) = self.focus.as_mut() {
            if current.name == candidate.name {
                if current.node == candidate.node && current.position == candidate.position {
                    return None;
                }

                current.node = candidate.node;
                current.position = candidate.position;
                return Some(FocusChange::Moved {
                    node: candidate.node,
                    position: candidate.position,
                });
            }
        }

        self.focus = Some(candidate.clone());
        Some(FocusChange::Acquired(candidate))
    }
}
