//! Builders shared by the integration tests.
#![allow(dead_code)]

use nalgebra::{point, vector, Matrix4};
use shapegraft::shapedoc::{Primitive, SubObject, Vertex, VertexIndex};

pub fn vertex(x: f64, y: f64, z: f64) -> Vertex {
    Vertex::new(point![x, y, z], vector![0.0, 1.0, 0.0], point![x, z])
}

/// A sub-object with one vertex per point and no primitives.
pub fn sub_object(points: &[[f64; 3]]) -> SubObject {
    let mut sub = SubObject::new();
    for &[x, y, z] in points {
        sub.push_vertex(vertex(x, y, z)).unwrap();
    }
    sub
}

/// Append a primitive drawing `triangles`, with upward face normals.
pub fn add_primitive(
    sub: &mut SubObject,
    state: &str,
    transform: Matrix4<f64>,
    triangles: &[[VertexIndex; 3]],
) -> usize {
    let prim = sub.push_primitive(Primitive::new(state, transform));
    for &tri in triangles {
        sub.insert_triangle(prim, tri, vector![0.0, 1.0, 0.0]).unwrap();
    }
    prim
}

pub fn corners(prim: &Primitive) -> Vec<[VertexIndex; 3]> {
    prim.triangles().iter().map(|t| t.vertices).collect()
}

pub fn state_names<'p>(prims: &[&'p Primitive]) -> Vec<&'p str> {
    prims.iter().map(|p| p.state_name()).collect()
}
