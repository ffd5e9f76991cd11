//! Tests for InteractionResolver (ручная сцена, без Rapier).

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use std::collections::HashMap;

    use crate::interaction::{find_closest_interactable, FocusChange, InteractionResolver, RayHit, SceneQuery};
    use crate::shared::{CameraPose, ModalGate};

    /// Сцена: фиксированные hits вдоль луча + дерево узлов
    #[derive(Default)]
    struct ScriptedScene {
        hits: Vec<RayHit<u32>>,
        parents: HashMap<u32, u32>,
        names: HashMap<u32, String>,
        positions: HashMap<u32, Vec3>,
    }

    impl ScriptedScene {
        fn node(mut self, id: u32, parent: Option<u32>, name: Option<&str>, position: Vec3) -> Self {
            if let Some(parent) = parent {
                self.parents.insert(id, parent);
            }
            if let Some(name) = name {
                self.names.insert(id, name.to_string());
            }
            self.positions.insert(id, position);
            self
        }

        fn hit(mut self, node: u32, distance: f32) -> Self {
            self.hits.push(RayHit { node, distance });
            self
        }
    }

    impl SceneQuery for ScriptedScene {
        type Node = u32;

        fn ray_hits(&self, _origin: Vec3, _direction: Vec3, _max_distance: f32) -> Vec<RayHit<u32>> {
            self.hits.clone()
        }

        fn parent(&self, node: u32) -> Option<u32> {
            self.parents.get(&node).copied()
        }

        fn interactable_name(&self, node: u32) -> Option<&str> {
            self.names.get(&node).map(String::as_str)
        }

        fn world_position(&self, node: u32) -> Option<Vec3> {
            self.positions.get(&node).copied()
        }
    }

    #[test]
    fn test_child_collider_resolves_to_tagged_parent() {
        // 1 = exhibit root, 2 = mesh-коллайдер под ним
        let scene = ScriptedScene::default()
            .node(1, None, Some("Shield"), Vec3::new(0.0, 1.0, -3.0))
            .node(2, Some(1), None, Vec3::new(0.0, 1.0, -3.0))
            .hit(2, 3.0);

        assert_eq!(find_closest_interactable(&scene, Vec3::ZERO, Vec3::NEG_Z, 10.0), Some((1, 3.0)));
    }

    #[test]
    fn test_nearest_tagged_wins_behind_untagged_occluder() {
        // 10 = стекло витрины (без тега), 20/30 = экспонаты на 3 и 5
        let scene = ScriptedScene::default()
            .node(10, None, None, Vec3::new(0.0, 0.0, -1.0))
            .node(20, None, Some("Mask"), Vec3::new(0.0, 0.0, -3.0))
            .node(30, None, Some("Suit"), Vec3::new(0.0, 0.0, -5.0))
            .hit(10, 1.0)
            .hit(20, 3.0)
            .hit(30, 5.0);

        assert_eq!(find_closest_interactable(&scene, Vec3::ZERO, Vec3::NEG_Z, 10.0), Some((20, 3.0)));
    }

    #[test]
    fn test_object_beyond_range_is_ignored() {
        let mut resolver = InteractionResolver::<u32>::default();
        let scene = ScriptedScene::default()
            .node(1, None, Some("Far"), Vec3::new(0.0, 0.0, -12.0))
            .hit(1, 12.0);

        assert_eq!(resolver.tick(ModalGate::default(), &CameraPose::default(), &scene), None);
        assert!(resolver.focus().is_none());
    }

    #[test]
    fn test_untagged_tree_yields_nothing() {
        let scene = ScriptedScene::default()
            .node(1, None, None, Vec3::ZERO)
            .node(2, Some(1), None, Vec3::ZERO)
            .hit(2, 1.0);

        assert_eq!(find_closest_interactable(&scene, Vec3::ZERO, Vec3::NEG_Z, 10.0), None);
    }

    #[test]
    fn test_equal_distance_keeps_first_hit() {
        let scene = ScriptedScene::default()
            .node(1, None, Some("First"), Vec3::ZERO)
            .node(2, None, Some("Second"), Vec3::ZERO)
            .hit(1, 4.0)
            .hit(2, 4.0);

        assert_eq!(find_closest_interactable(&scene, Vec3::ZERO, Vec3::NEG_Z, 10.0), Some((1, 4.0)));
    }

    #[test]
    fn test_range_boundary_is_inclusive() {
        let scene = ScriptedScene::default()
            .node(1, None, Some("Edge"), Vec3::ZERO)
            .hit(1, 10.0);

        assert!(find_closest_interactable(&scene, Vec3::ZERO, Vec3::NEG_Z, 10.0).is_some());
    }

    #[test]
    fn test_focus_changes_are_emitted_once() {
        let mut resolver = InteractionResolver::<u32>::default();
        let camera = CameraPose::default();
        let scene = ScriptedScene::default()
            .node(7, None, Some("Mjolnir"), Vec3::new(22.0, 2.0, -17.5))
            .hit(7, 2.0);

        let change = resolver.tick(ModalGate::default(), &camera, &scene);
        assert!(matches!(
            change,
            Some(FocusChange::Acquired(ref target)) if target.name == "Mjolnir" && target.node == 7
        ));

        // Ничего не изменилось: тишина
        assert_eq!(resolver.tick(ModalGate::default(), &camera, &scene), None);
        assert_eq!(resolver.focused_name(), Some("Mjolnir"));
    }

    #[test]
    fn test_moved_exhibit_refreshes_position_only() {
        let mut resolver = InteractionResolver::<u32>::default();
        let camera = CameraPose::default();
        let mut scene = ScriptedScene::default()
            .node(7, None, Some("Mjolnir"), Vec3::new(22.0, 2.0, -17.5))
            .hit(7, 2.0);
        resolver.tick(ModalGate::default(), &camera, &scene);

        scene.positions.insert(7, Vec3::new(22.0, 2.5, -17.5));
        let change = resolver.tick(ModalGate::default(), &camera, &scene);

        assert_eq!(
            change,
            Some(FocusChange::Moved {
                node: 7,
                position: Vec3::new(22.0, 2.5, -17.5)
            })
        );
        assert_eq!(resolver.focus().map(|f| f.position), Some(Vec3::new(22.0, 2.5, -17.5)));
    }

    #[test]
    fn test_switching_exhibits_reacquires() {
        let mut resolver = InteractionResolver::<u32>::default();
        let camera = CameraPose::default();
        let first = ScriptedScene::default().node(1, None, Some("Mask"), Vec3::ZERO).hit(1, 2.0);
        let second = ScriptedScene::default().node(2, None, Some("Suit"), Vec3::X).hit(2, 2.0);

        resolver.tick(ModalGate::default(), &camera, &first);
        let change = resolver.tick(ModalGate::default(), &camera, &second);

        assert!(matches!(change, Some(FocusChange::Acquired(ref target)) if target.name == "Suit"));
    }

    #[test]
    fn test_stale_node_clears_focus() {
        let mut resolver = InteractionResolver::<u32>::default();
        let camera = CameraPose::default();
        let mut scene = ScriptedScene::default().node(3, None, Some("Suit"), Vec3::ZERO).hit(3, 5.0);
        resolver.tick(ModalGate::default(), &camera, &scene);

        // Узел удалён между кадрами, pipeline ещё отдаёт старый hit
        scene.positions.remove(&3);

        assert_eq!(resolver.tick(ModalGate::default(), &camera, &scene), Some(FocusChange::Cleared));
        assert!(resolver.focus().is_none());
    }

    #[test]
    fn test_modal_clears_focus_without_probing() {
        let mut resolver = InteractionResolver::<u32>::default();
        let camera = CameraPose::default();
        let scene = ScriptedScene::default().node(3, None, Some("Suit"), Vec3::ZERO).hit(3, 5.0);
        resolver.tick(ModalGate::default(), &camera, &scene);

        assert_eq!(resolver.tick(ModalGate::active(), &camera, &scene), Some(FocusChange::Cleared));
        // Повторный кадр с modal: без дубля Cleared
        assert_eq!(resolver.tick(ModalGate::active(), &camera, &scene), None);
    }
}
