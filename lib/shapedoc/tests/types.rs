use nalgebra::{point, vector, Matrix4};
use shapedoc::{
    DetailLevel, Error, MeshGraph, Primitive, SharedGraph, SubObject, Triangle, Vertex,
};

fn vertex(x: f64, y: f64, z: f64) -> Vertex {
    Vertex::new(point![x, y, z], vector![0.0, 1.0, 0.0], point![0.0, 0.0])
}

fn quad() -> SubObject {
    let mut sub = SubObject::new();
    for (x, z) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
        sub.push_vertex(vertex(x, 0.0, z)).unwrap();
    }
    let prim = sub.push_primitive(Primitive::new("Rails", Matrix4::identity()));
    sub.insert_triangle(prim, [0, 1, 2], vector![0.0, 1.0, 0.0])
        .unwrap();
    sub.insert_triangle(prim, [0, 2, 3], vector![0.0, 1.0, 0.0])
        .unwrap();
    sub
}

/// Ensure that MeshGraphs can be shared across threads.
#[test]
fn graph_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MeshGraph>();
    assert_send_sync::<SharedGraph>();
}

#[test]
fn vertex_indices_follow_insertion_order() {
    let mut sub = SubObject::new();
    assert_eq!(sub.push_vertex(vertex(0.0, 0.0, 0.0)), Ok(0));
    assert_eq!(sub.push_vertex(vertex(0.0, 0.0, 0.0)), Ok(1));
    assert_eq!(
        sub.extend_vertices(vec![vertex(1.0, 0.0, 0.0), vertex(2.0, 0.0, 0.0)]),
        Ok(2)
    );
    assert_eq!(sub.vertex_count(), 4);
    assert_eq!(sub[3].point, point![2.0, 0.0, 0.0]);
    // equal attributes, distinct identities
    assert_eq!(sub[0], sub[1]);
    let indices: Vec<_> = sub.indexed_vertices().map(|(i, _)| i).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}

#[test]
fn insert_triangle_checks_corners() {
    let mut sub = quad();
    assert_eq!(
        sub.insert_triangle(0, [0, 1, 4], vector![0.0, 1.0, 0.0]),
        Err(Error::VertexOutOfRange { index: 4, len: 4 })
    );
    assert_eq!(
        sub.insert_triangle(3, [0, 1, 2], vector![0.0, 1.0, 0.0]),
        Err(Error::PrimitiveOutOfRange { index: 3, len: 1 })
    );
    assert_eq!(sub.triangle_count(), 2);
}

#[test]
fn clearing_triangles_keeps_vertices() {
    let mut sub = quad();
    let prim = sub.primitive_mut(0).unwrap();
    assert_eq!(prim.clear_triangles(), 2);
    assert_eq!(prim.clear_triangles(), 0);
    assert_eq!(sub.triangle_count(), 0);
    assert_eq!(sub.vertex_count(), 4);
}

#[test]
fn retain_preserves_order() {
    let mut sub = quad();
    let prim = sub.primitive_mut(0).unwrap();
    prim.push_triangle(Triangle::new([1, 2, 3], vector![0.0, 1.0, 0.0]));
    assert_eq!(prim.retain_triangles(|t| t.vertices != [0, 2, 3]), 1);
    let remaining: Vec<_> = prim.triangles().iter().map(|t| t.vertices).collect();
    assert_eq!(remaining, vec![[0, 1, 2], [1, 2, 3]]);
}

#[test]
fn truncation_undoes_appends() {
    let mut sub = quad();
    sub.push_vertex(vertex(5.0, 5.0, 5.0)).unwrap();
    let prim = sub.primitive_mut(0).unwrap();
    prim.push_triangle(Triangle::new([1, 2, 4], vector![0.0, 1.0, 0.0]));
    prim.truncate_triangles(2);
    sub.truncate_vertices(4);

    assert_eq!(sub, quad());
    // longer than the table: nothing to undo
    sub.truncate_vertices(10);
    assert_eq!(sub.vertex_count(), 4);
}

#[test]
fn referenced_vertices_are_sorted_and_distinct() {
    let mut sub = quad();
    sub.push_vertex(vertex(5.0, 5.0, 5.0)).unwrap();
    assert_eq!(sub.primitives()[0].referenced_vertices(), vec![0, 1, 2, 3]);
    assert!(sub.primitives()[0][1].references(3));
    assert!(!sub.primitives()[0][0].references(3));
}

#[test]
fn detail_level_lookup() {
    let mut graph = MeshGraph::new();
    let mut near = DetailLevel::new(200.0);
    near.push_sub_object(quad());
    graph.push_detail_level(near);
    graph.push_detail_level(DetailLevel::new(2000.0));
    assert_eq!(graph.push_texture("DB_Track1.ace"), 0);

    assert_eq!(graph.detail_level_at(2000.0).map(|l| l.sub_objects().len()), Some(0));
    assert!(graph.detail_level_at(500.0).is_none());
    assert_eq!(graph[0].distance(), 200.0);
    assert_eq!(graph.triangle_count(), 2);
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.sub_objects().count(), 1);
}

#[test]
fn shared_graph_copies_are_independent() {
    let mut graph = MeshGraph::new();
    graph.push_texture("a.ace");
    let shared = SharedGraph::from(graph);
    let other = shared.clone();

    let mut copy = shared.to_graph();
    copy.textures_mut()[0] = "b.ace".to_owned();

    assert_eq!(shared.textures(), ["a.ace".to_owned()]);
    assert_eq!(other.graph().textures()[0], "a.ace");
    assert_eq!(copy.textures()[0], "b.ace");
}
