//! Scene を通した整列/分配のシナリオテスト

use aligner_core::math::{Quat, Vec3, distance_to_line};
use aligner_core::{
    AlignCommand, AlignError, AnchorSelection, Axis, ObjectHost, ObjectId, OperationKind, Scene, Space,
    Transform, align_to_center, align_to_target, distribute, is_operation_eligible,
};

fn scene_with(positions: &[Vec3]) -> (Scene, Vec<ObjectId>) {
    let mut scene = Scene::new();
    let ids = positions
        .iter()
        .enumerate()
        .map(|(i, &p)| scene.spawn(format!("Cube{}", i), Transform::from_position(p)))
        .collect();
    (scene, ids)
}

fn positions(scene: &Scene, ids: &[ObjectId]) -> Vec<Vec3> {
    ids.iter().map(|&id| scene.position(id)).collect()
}

#[test]
fn test_distribute_x_scenario() {
    let (mut scene, ids) = scene_with(&[
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(5.0, 1.0, 0.0),
        Vec3::new(2.0, -1.0, 0.0),
        Vec3::new(10.0, 0.0, 0.0),
    ]);

    distribute(&mut scene, &ids, 0, 3, Axis::X).unwrap();

    let p = positions(&scene, &ids);
    assert!((p[2].x - 3.333_333).abs() < 1e-3);
    assert!((p[1].x - 6.666_667).abs() < 1e-3);
    assert_eq!(p[1].y, 1.0);
    assert_eq!(p[2].y, -1.0);
    assert_eq!(p[0], Vec3::ZERO);
    assert_eq!(p[3], Vec3::new(10.0, 0.0, 0.0));

    // 1オブジェクト1エントリ
    assert_eq!(scene.history().len(), 2);
    assert!(scene.history().iter().all(|e| e.message == "Distribute objects on X axis"));
}

#[test]
fn test_center_y_scenario() {
    let (mut scene, ids) = scene_with(&[
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::new(5.0, 2.0, 7.0),
    ]);

    align_to_center(&mut scene, &ids, Axis::Y).unwrap();

    let p = positions(&scene, &ids);
    for v in &p {
        assert!((v.y - 0.666_667).abs() < 1e-5);
    }
    assert_eq!((p[0].x, p[0].z), (1.0, 0.0));
    assert_eq!((p[1].x, p[1].z), (3.0, 0.0));
    assert_eq!((p[2].x, p[2].z), (5.0, 7.0));
}

#[test]
fn test_center_preserves_mean() {
    let (mut scene, ids) = scene_with(&[
        Vec3::new(-2.5, 4.0, 1.0),
        Vec3::new(6.0, -1.0, 3.5),
        Vec3::new(0.5, 2.0, -8.0),
        Vec3::new(3.0, 7.0, 0.0),
        Vec3::new(-1.0, 0.0, 2.0),
    ]);
    let mean_before: f32 = positions(&scene, &ids).iter().map(|p| p.x).sum::<f32>() / 5.0;

    align_to_center(&mut scene, &ids, Axis::X).unwrap();

    let mean_after: f32 = positions(&scene, &ids).iter().map(|p| p.x).sum::<f32>() / 5.0;
    assert!((mean_before - mean_after).abs() < 1e-5);
}

#[test]
fn test_target_world_keeps_other_components_bit_identical() {
    let original = [
        Vec3::new(0.1, 0.2, 0.3),
        Vec3::new(-7.77, 1.0e-7, 123.456),
        Vec3::new(3.0, -0.000_1, 9.999),
    ];
    let (mut scene, ids) = scene_with(&original);

    align_to_target(&mut scene, &ids, ids[0], Axis::Y, Space::World).unwrap();

    let p = positions(&scene, &ids);
    for (before, after) in original.iter().zip(&p).skip(1) {
        assert_eq!(after.y.to_bits(), original[0].y.to_bits());
        assert_eq!(after.x.to_bits(), before.x.to_bits());
        assert_eq!(after.z.to_bits(), before.z.to_bits());
    }
    assert_eq!(p[0], original[0]);
}

#[test]
fn test_target_local_on_rotated_base() {
    let mut scene = Scene::new();
    let rotation = Quat::from_rotation_z(std::f32::consts::FRAC_PI_4);
    let base = scene.spawn(
        "Base",
        Transform::from_position(Vec3::new(2.0, 1.0, 0.0)).with_rotation(rotation),
    );
    let a = scene.spawn("A", Transform::from_position(Vec3::new(5.0, -3.0, 4.0)));
    let b = scene.spawn("B", Transform::from_position(Vec3::new(-6.0, 2.0, -1.0)));
    let ids = [base, a, b];

    align_to_target(&mut scene, &ids, base, Axis::X, Space::Local).unwrap();

    let dir = scene.local_frame(base).right;
    let origin = scene.position(base);
    assert_eq!(origin, Vec3::new(2.0, 1.0, 0.0));
    for id in [a, b] {
        assert!(distance_to_line(dir, origin, scene.position(id)) < 1e-4);
    }
    assert_eq!(scene.history()[0].message, "Align objects to Base's X position");
}

#[test]
fn test_distribute_identical_anchors_mutates_nothing() {
    let original = [Vec3::ZERO, Vec3::new(4.0, 1.0, 0.0), Vec3::new(9.0, 0.0, 2.0)];
    let (mut scene, ids) = scene_with(&original);

    let err = distribute(&mut scene, &ids, 2, 2, Axis::All).unwrap_err();

    assert_eq!(err, AlignError::IdenticalAnchors { index: 2 });
    assert_eq!(positions(&scene, &ids), original.to_vec());
    assert!(scene.history().is_empty());
    assert!(!scene.is_dirty());
}

#[test]
fn test_commands_from_json() {
    let (mut scene, ids) = scene_with(&[
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 3.0, 0.0),
        Vec3::new(8.0, 6.0, 6.0),
        Vec3::new(4.0, 9.0, 3.0),
    ]);

    let cmd = AlignCommand::from_json(r#"{"op":"distribute","first":0,"last":2,"axis":"all"}"#).unwrap();
    assert_eq!(cmd.apply(&mut scene, &ids).unwrap(), 2);

    let p = positions(&scene, &ids);
    // A=(0,0,0), B=(8,6,6): 非アンカーは 1/3, 2/3 の位置
    assert!(p[1].abs_diff_eq(Vec3::new(8.0, 6.0, 6.0) / 3.0, 1e-4));
    assert!(p[3].abs_diff_eq(Vec3::new(8.0, 6.0, 6.0) * 2.0 / 3.0, 1e-4));
    assert!(scene.history().iter().all(|e| e.message == "Distribute objects on custom axis"));

    let cmd = AlignCommand::from_json(r#"{"op":"target","base":2,"axis":"z"}"#).unwrap();
    cmd.apply(&mut scene, &ids).unwrap();
    for &id in &ids {
        assert_eq!(scene.position(id).z, 6.0);
    }
}

#[test]
fn test_command_base_out_of_range() {
    let (mut scene, ids) = scene_with(&[Vec3::ZERO, Vec3::ONE]);

    let cmd = AlignCommand::Target {
        base: 5,
        axis: Axis::X,
        space: Space::World,
    };
    assert_eq!(
        cmd.apply(&mut scene, &ids),
        Err(AlignError::IndexOutOfRange { index: 5, len: 2 })
    );
}

#[test]
fn test_undo_restores_each_step() {
    let original = [Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 0.0), Vec3::new(6.0, -2.0, 1.0)];
    let (mut scene, ids) = scene_with(&original);

    align_to_center(&mut scene, &ids, Axis::Y).unwrap();
    assert_eq!(scene.history().len(), 3);

    while scene.undo().is_some() {}
    assert_eq!(positions(&scene, &ids), original.to_vec());
}

#[test]
fn test_eligibility_matches_operations() {
    let (mut scene, ids) = scene_with(&[Vec3::ZERO, Vec3::ONE]);

    assert!(is_operation_eligible(ids.len(), OperationKind::AlignCenter));
    assert!(!is_operation_eligible(ids.len(), OperationKind::Distribute));
    assert!(matches!(
        distribute(&mut scene, &ids, 0, 1, Axis::X),
        Err(AlignError::TooFewObjects { .. })
    ));
}

#[test]
fn test_anchor_reconcile_feeds_distribute() {
    let (mut scene, ids) = scene_with(&[
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(7.0, 0.0, 0.0),
        Vec3::new(12.0, 0.0, 0.0),
    ]);

    // 5件選択時のアンカーが3件に減った
    let mut anchors = AnchorSelection::new(0, 4);
    anchors.reconcile(ids.len());
    assert_eq!(anchors, AnchorSelection::new(0, 2));

    distribute(&mut scene, &ids, anchors.first, anchors.last, Axis::X).unwrap();
    assert!((scene.position(ids[1]).x - 6.0).abs() < 1e-5);
}
