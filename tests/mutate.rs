mod common;

use common::{add_primitive, corners, sub_object};
use nalgebra::Matrix4;
use shapegraft::{
    mutate::{
        remove_triangles_connected_to_any, strip_states, strip_vertices_where, TriangleAdjacency,
    },
    remove_all_triangles, remove_triangles_connected_to,
    shapedoc::SubObject,
    Axis, NameSet, VertexMarker,
};

/// Six vertices, four triangles fanning around vertex 0, plus one triangle away from it.
fn fan() -> SubObject {
    let mut sub = sub_object(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 0.0, 1.0],
        [0.0, 0.0, 1.0],
        [-1.0, 0.0, 1.0],
        [-1.0, 0.0, 0.0],
    ]);
    add_primitive(
        &mut sub,
        "Rails",
        Matrix4::identity(),
        &[[0, 1, 2], [0, 2, 3], [2, 3, 4], [0, 3, 4], [0, 4, 5]],
    );
    sub
}

#[test]
fn remove_all_keeps_vertices() {
    let mut sub = fan();
    let prim = sub.primitive_mut(0).unwrap();
    assert_eq!(remove_all_triangles(prim), 5);
    assert_eq!(prim.triangle_count(), 0);
    assert_eq!(remove_all_triangles(prim), 0);
    assert_eq!(sub.vertex_count(), 6);
}

#[test]
fn remove_connected_is_exact_and_ordered() {
    let mut sub = fan();
    let prim = sub.primitive_mut(0).unwrap();
    assert_eq!(remove_triangles_connected_to(prim, 4), 3);
    assert_eq!(corners(prim), vec![[0, 1, 2], [0, 2, 3]]);
    // again: nothing left to remove
    assert_eq!(remove_triangles_connected_to(prim, 4), 0);
    assert_eq!(corners(prim), vec![[0, 1, 2], [0, 2, 3]]);
    assert_eq!(sub.vertex_count(), 6);
}

#[test]
fn remove_connected_to_unused_vertex_is_noop() {
    let mut sub = fan();
    sub.push_vertex(common::vertex(9.0, 9.0, 9.0)).unwrap();
    let prim = sub.primitive_mut(0).unwrap();
    assert_eq!(remove_triangles_connected_to(prim, 6), 0);
    assert_eq!(prim.triangle_count(), 5);
}

#[test]
fn adjacency_lists_triangles_per_vertex() {
    let sub = fan();
    let adjacency = TriangleAdjacency::build(&sub.primitives()[0]);
    assert_eq!(adjacency.vertex_count(), 6);
    assert_eq!(adjacency.triangles_of(0), &[0, 1, 3, 4]);
    assert_eq!(adjacency.triangles_of(1), &[0]);
    assert!(adjacency.triangles_of(42).is_empty());
}

#[test]
fn remove_connected_to_any_matches_one_at_a_time() {
    for doomed in [vec![1], vec![1, 5], vec![2, 4], vec![0], vec![3, 3, 1]] {
        let mut batched = fan();
        let mut single = fan();
        let removed =
            remove_triangles_connected_to_any(batched.primitive_mut(0).unwrap(), doomed.clone());
        let mut expected = 0;
        for &v in &doomed {
            expected += remove_triangles_connected_to(single.primitive_mut(0).unwrap(), v);
        }
        assert_eq!(removed, expected, "removing {doomed:?}");
        assert_eq!(
            corners(&batched.primitives()[0]),
            corners(&single.primitives()[0]),
            "removing {doomed:?}"
        );
    }
}

#[test]
fn strip_states_only_touches_matching_primitives() {
    let mut sub = fan();
    add_primitive(&mut sub, "MT_TRACKBED", Matrix4::identity(), &[[1, 2, 3]]);
    add_primitive(&mut sub, "mt_cwire", Matrix4::identity(), &[[3, 4, 5], [0, 1, 5]]);

    let removed = strip_states(&mut sub, &NameSet::from(["mt_trackbed", "mt_cwire"]));
    assert_eq!(removed, 3);
    let counts: Vec<_> = sub.primitives().iter().map(|p| p.triangle_count()).collect();
    assert_eq!(counts, vec![5, 0, 0]);
    assert_eq!(sub.vertex_count(), 6);
}

#[test]
fn strip_marked_cable() {
    // track bed at y = 0, a cable whose side vertices sit at 0.133 and top vertices at 0.145
    let mut sub = sub_object(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 0.0, 10.0],
        [0.5, 0.133, 0.0],
        [0.5, 0.133, 10.0],
        [0.5, 0.145, 0.0],
        [0.5, 0.145, 10.0],
    ]);
    add_primitive(
        &mut sub,
        "mt_trackbed",
        Matrix4::identity(),
        &[[0, 1, 2], [3, 4, 5], [4, 6, 5], [0, 2, 3]],
    );
    let markers = [
        VertexMarker::axis_equals(Axis::Y, 0.133),
        VertexMarker::axis_equals(Axis::Y, 0.145),
    ];

    let removed = strip_vertices_where(&mut sub, |p| markers.iter().any(|m| m.matches(p)));
    assert_eq!(removed, 3);
    assert_eq!(corners(&sub.primitives()[0]), vec![[0, 1, 2]]);
    assert_eq!(sub.vertex_count(), 7);
}
