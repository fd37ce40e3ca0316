use glam::{Mat4, Vec3};
use crate::scene::RenderInstanceKey;
use slotmap::SlotMap;
use super::*;

fn make_keys(count: usize) -> Vec<RenderInstanceKey> {
    let mut map: SlotMap<RenderInstanceKey, ()> = SlotMap::with_key();
    (0..count).map(|_| map.insert(())).collect()
}

#[test]
fn test_empty_view() {
    let view = RenderView::new(Mat4::IDENTITY, Vec::new());

    assert_eq!(view.visible_count(), 0);
    assert!(view.visible_instances().is_empty());
    assert_eq!(*view.view_projection_matrix(), Mat4::IDENTITY);
}

#[test]
fn test_visible_instances_preserve_order() {
    let keys = make_keys(3);
    let view = RenderView::new(Mat4::IDENTITY, keys.clone());

    assert_eq!(view.visible_count(), 3);
    assert_eq!(view.visible_instances(), keys.as_slice());
}

#[test]
fn test_view_projection_snapshot() {
    let matrix = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let view = RenderView::new(matrix, Vec::new());

    assert_eq!(*view.view_projection_matrix(), matrix);
}

#[test]
fn test_clone_is_independent() {
    let keys = make_keys(2);
    let view = RenderView::new(Mat4::IDENTITY, keys);
    let cloned = view.clone();

    assert_eq!(cloned.visible_count(), view.visible_count());
    assert_eq!(cloned.visible_instances(), view.visible_instances());
}
