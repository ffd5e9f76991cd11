//! SceneQuery поверх Rapier query pipeline + Bevy transform hierarchy

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::resolver::{FocusChange, InteractionResolver};
use super::scene::{RayHit, SceneQuery, SceneTag};
use crate::logger;
use crate::player::Player;
use crate::shared::{CameraPose, ModalGate};

/// Resolver для ECS (узел = Entity)
pub type FocusResolver = InteractionResolver<Entity>;

/// Focus изменился (highlight, prompt, conversation context)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct FocusChanged(pub FocusChange<Entity>);

/// Узлы сцены: тег, родитель, world transform
pub type SceneNodes<'w, 's> = Query<
    'w,
    's,
    (
        Option<&'static SceneTag>,
        Option<&'static ChildOf>,
        Option<&'static GlobalTransform>,
    ),
>;

pub struct RapierScene<'a, 'w, 's> {
    context: Option<&'a RapierContext<'a>>,
    /// Коллайдер игрока не должен перекрывать aim
    player: Option<Entity>,
    nodes: &'a SceneNodes<'w, 's>,
}

impl<'a, 'w, 's> RapierScene<'a, 'w, 's> {
    pub fn new(
        context: Option<&'a RapierContext<'a>>,
        player: Option<Entity>,
        nodes: &'a SceneNodes<'w, 's>,
    ) -> Self {
        Self { context, player, nodes }
    }
}

impl SceneQuery for RapierScene<'_, '_, '_> {
    type Node = Entity;

    fn ray_hits(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Vec<RayHit<Entity>> {
        // Нет physics context (startup): сцена пустая
        let Some(context) = self.context else {
            return Vec::new();
        };

        let mut filter = QueryFilter::default();
        if let Some(player) = self.player {
            filter = filter.exclude_rigid_body(player);
        }

        let mut hits = Vec::new();
        context.intersect_ray(origin, direction, max_distance, true, filter, |entity, intersection| {
            hits.push(RayHit {
                node: entity,
                distance: intersection.time_of_impact,
            });
            true // продолжаем: нужны все пересечения
        });

        // Stable sort: равные distance сохраняют порядок pipeline
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    fn parent(&self, node: Entity) -> Option<Entity> {
        let (_, child_of, _) = self.nodes.get(node).ok()?;
        child_of.map(|child_of| child_of.parent())
    }

    fn interactable_name(&self, node: Entity) -> Option<&str> {
        let (tag, _, _) = self.nodes.get(node).ok()?;
        tag?.interactable_name()
    }

    fn world_position(&self, node: Entity) -> Option<Vec3> {
        let (_, _, transform) = self.nodes.get(node).ok()?;
        transform.map(|transform| transform.translation())
    }
}

/// Per-frame focus probe
///
/// # Архитектура
/// - Читает: CameraPose (позиция уже обновлена locomotion), ModalGate, Rapier, hierarchy
/// - Пишет: FocusResolver, FocusChanged events (только при изменении)
/// - Physics world не мутирует
pub fn resolve_focus(
    gate: Res<ModalGate>,
    camera: Res<CameraPose>,
    mut resolver: ResMut<FocusResolver>,
    rapier_context: ReadRapierContext,
    players: Query<Entity, With<Player>>,
    nodes: SceneNodes,
    mut focus_events: EventWriter<FocusChanged>,
) {
    let context = rapier_context.single().ok();
    let scene = RapierScene::new(context.as_ref(), players.single().ok(), &nodes);

    let Some(change) = resolver.tick(*gate, &camera, &scene) else {
        return;
    };

    match &change {
        FocusChange::Acquired(target) => {
            logger::log(&format!("🎯 Focus: {} at {}", target.name, target.position));
        }
        FocusChange::Moved { position, .. } => {
            logger::log(&format!("🎯 Focus moved to {}", position));
        }
        FocusChange::Cleared => logger::log("Focus cleared"),
    }

    focus_events.write(FocusChanged(change));
}
