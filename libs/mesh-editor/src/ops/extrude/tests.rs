//! # Extrusion Tests

use super::*;
use crate::test_support::{grid, soup_triangle, three_fins, unit_cube};
use approx::assert_relative_eq;
use config::constants::approx_zero;
use std::collections::HashMap;

fn select(faces: &[u32]) -> SelectionSet {
    faces.iter().copied().collect()
}

fn run(mesh: &MeshBuffers, faces: &[u32], depth: f64) -> EditorResult<ExtrudeOutcome> {
    extrude(mesh, &select(faces), depth, &EditorConfig::default())
}

fn raw_face_normal(mesh: &MeshBuffers, face: usize) -> DVec3 {
    let [a, b, c] = mesh.triangles().unwrap()[face];
    let (p0, p1, p2) = (mesh.position(a), mesh.position(b), mesh.position(c));
    (p1 - p0).cross(p2 - p0)
}

/// Every directed edge appears once and is matched by its reverse.
fn assert_closed_and_oriented(mesh: &MeshBuffers) {
    let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
    for tri in mesh.triangles().unwrap() {
        for (u, v) in crate::topology::edge::directed_edges(*tri) {
            *directed.entry((u, v)).or_insert(0) += 1;
        }
    }
    for (&(u, v), &count) in &directed {
        assert_eq!(count, 1, "directed edge ({u}, {v}) used {count} times");
        assert!(directed.contains_key(&(v, u)), "edge ({u}, {v}) has no twin");
    }
}

fn signed_volume(mesh: &MeshBuffers) -> f64 {
    mesh.triangles()
        .unwrap()
        .iter()
        .map(|&[a, b, c]| mesh.position(a).dot(mesh.position(b).cross(mesh.position(c))) / 6.0)
        .sum()
}

#[test]
fn test_single_triangle_on_grid() {
    // 2x2 grid: 9 vertices, 8 faces. One selected triangle always has
    // three boundary edges.
    let mesh = grid(2, 2);
    let outcome = run(&mesh, &[0], 5.0).unwrap();

    assert_eq!(outcome.mesh.vertex_count(), 9 + 3);
    assert_eq!(outcome.mesh.face_count(), 8 + 6);
    assert_eq!(outcome.boundary.len(), 3);
    assert_eq!(outcome.cap_vertices, 9..12);
    assert_eq!(outcome.side_walls, 8..14);
    assert_eq!(outcome.direction, DVec3::Z);
}

#[test]
fn test_vertex_and_face_count_law() {
    let mesh = grid(3, 3);
    // Cells (0,0), (1,0), (0,1): six faces forming an L.
    let faces = [0, 1, 2, 3, 6, 7];
    let outcome = run(&mesh, &faces, 1.0).unwrap();

    let k = select(&faces).vertices(mesh.triangles().unwrap()).len();
    let b = outcome.boundary.len();
    assert_eq!(k, 8);
    assert_eq!(b, 8);
    assert_eq!(outcome.mesh.vertex_count(), mesh.vertex_count() + k);
    assert_eq!(outcome.mesh.face_count(), mesh.face_count() + 2 * b);
}

#[test]
fn test_cap_is_displaced_and_base_is_not() {
    let mesh = grid(2, 2);
    let outcome = run(&mesh, &[0, 1], 2.5).unwrap();
    let result = &outcome.mesh;

    for v in 0..mesh.vertex_count() as u32 {
        assert_eq!(result.position(v), mesh.position(v));
    }
    for v in outcome.cap_vertices.clone() {
        assert_relative_eq!(result.position(v as u32).z, 2.5);
    }

    // Selected faces now reference only cap vertices; others are untouched.
    let triangles = result.triangles().unwrap();
    for face in 0..mesh.face_count() {
        let tri = triangles[face];
        if face < 2 {
            assert!(tri.iter().all(|&v| outcome.cap_vertices.contains(&(v as usize))));
        } else {
            assert_eq!(tri, mesh.triangles().unwrap()[face]);
        }
    }
}

#[test]
fn test_rewired_cap_keeps_winding() {
    let mesh = grid(2, 2);
    let outcome = run(&mesh, &[0, 1, 2, 3], 1.0).unwrap();
    for face in 0..4 {
        let n = raw_face_normal(&outcome.mesh, face);
        assert!(n.z > 0.0, "cap face {face} flipped");
    }
}

#[test]
fn test_side_walls_face_away_from_patch() {
    let mesh = grid(2, 2);
    let faces = [0, 1, 2, 3];
    let outcome = run(&mesh, &faces, 3.0).unwrap();
    let result = &outcome.mesh;
    let centroid = DVec3::new(1.0, 0.5, 0.0);

    for face in outcome.side_walls.clone() {
        let n = raw_face_normal(result, face);
        let [a, b, _] = result.triangles().unwrap()[face];
        let edge_mid = (result.position(a) + result.position(b)) * 0.5;
        let outward = (edge_mid - centroid) * DVec3::new(1.0, 1.0, 0.0);
        assert!(n.dot(outward) > 0.0, "wall {face} points into the solid");
        assert_relative_eq!(n.z, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_patch_with_hole_walls_every_loop() {
    // 3x3 grid minus the centre cell: an outer loop of 12 edges and an
    // inner loop of 4.
    let mesh = grid(3, 3);
    let faces: Vec<u32> = (0..18).filter(|f| *f != 8 && *f != 9).collect();
    let outcome = run(&mesh, &faces, 1.0).unwrap();

    assert_eq!(outcome.boundary.len(), 16);
    assert_eq!(outcome.mesh.vertex_count(), 16 + 16);
    assert_eq!(outcome.mesh.face_count(), 18 + 32);

    let hole_centre = DVec3::new(1.5, 1.5, 0.0);
    let result = &outcome.mesh;
    let mut inner_walls = 0;
    for face in outcome.side_walls.clone() {
        let [a, b, _] = result.triangles().unwrap()[face];
        let edge_mid = (result.position(a) + result.position(b)) * 0.5;
        let to_edge = (edge_mid - hole_centre) * DVec3::new(1.0, 1.0, 0.0);
        let n = raw_face_normal(result, face);
        if to_edge.length() < 1.0 {
            // Hole walls must face into the hole.
            inner_walls += 1;
            assert!(n.dot(to_edge) < 0.0, "hole wall {face} faces the patch");
        } else {
            assert!(n.dot(to_edge) > 0.0, "outer wall {face} faces the patch");
        }
    }
    assert_eq!(inner_walls, 8);
}

#[test]
fn test_two_islands_are_both_walled() {
    let mesh = grid(3, 1);
    // Faces of cell 0 and cell 2 share no edge.
    let outcome = run(&mesh, &[0, 1, 4, 5], 1.0).unwrap();
    assert_eq!(outcome.boundary.len(), 8);
    assert_eq!(outcome.mesh.face_count(), 6 + 16);
}

#[test]
fn test_closed_mesh_stays_closed_and_outward() {
    let mesh = unit_cube();
    assert_closed_and_oriented(&mesh);
    assert_relative_eq!(signed_volume(&mesh), 1.0, epsilon = 1e-12);

    let outcome = run(&mesh, &[2, 3], 0.5).unwrap();
    assert_eq!(outcome.mesh.vertex_count(), 12);
    assert_eq!(outcome.mesh.face_count(), 20);
    assert_closed_and_oriented(&outcome.mesh);
    assert!(outcome.direction.z > 0.0);
    assert!(signed_volume(&outcome.mesh) > 1.0);
}

#[test]
fn test_negative_depth_pushes_cap_inward() {
    let mesh = unit_cube();
    let outcome = run(&mesh, &[2, 3], -0.5).unwrap();
    assert_closed_and_oriented(&outcome.mesh);
    assert!(signed_volume(&outcome.mesh) < 1.0);
}

#[test]
fn test_zero_depth_is_well_defined() {
    let mesh = grid(2, 2);
    let outcome = run(&mesh, &[0], 0.0).unwrap();
    assert_eq!(outcome.mesh.vertex_count(), 12);
    assert_eq!(outcome.mesh.face_count(), 14);
    for v in outcome.cap_vertices.clone() {
        assert_eq!(outcome.mesh.position(v as u32).z, 0.0);
    }
    for face in outcome.side_walls.clone() {
        assert!(approx_zero(raw_face_normal(&outcome.mesh, face).length()));
    }
}

#[test]
fn test_input_mesh_is_not_modified() {
    let mesh = grid(2, 2);
    let before = mesh.clone();
    let _ = run(&mesh, &[0, 1], 1.0).unwrap();
    assert_eq!(mesh, before);
}

#[test]
fn test_empty_selection() {
    assert_eq!(run(&grid(1, 1), &[], 1.0).unwrap_err(), EditorError::EmptySelection);
}

#[test]
fn test_out_of_range_face() {
    let err = run(&grid(1, 1), &[1, 9], 1.0).unwrap_err();
    assert_eq!(err, EditorError::FaceOutOfRange { face: 9, face_count: 2 });
}

#[test]
fn test_non_finite_depth() {
    for depth in [f64::NAN, f64::INFINITY] {
        let err = run(&grid(1, 1), &[0], depth).unwrap_err();
        assert!(matches!(err, EditorError::NonFiniteAmount { operation: "extrude", .. }));
    }
}

#[test]
fn test_unindexed_mesh() {
    let err = run(&soup_triangle(), &[0], 1.0).unwrap_err();
    assert_eq!(err, EditorError::UnindexedMesh { operation: "extrude" });
}

#[test]
fn test_cancelling_normals_are_degenerate() {
    // The whole cube: corner normals cancel pairwise.
    let mesh = unit_cube();
    let all: Vec<u32> = (0..12).collect();
    let err = run(&mesh, &all, 1.0).unwrap_err();
    assert!(matches!(err, EditorError::DegenerateRegionNormal { .. }));
}

#[test]
fn test_non_manifold_selection_is_ambiguous() {
    let err = run(&three_fins(), &[0, 1, 2], 1.0).unwrap_err();
    match err {
        EditorError::AmbiguousBoundaryWinding { u, v, .. } => assert_eq!((u, v), (0, 1)),
        other => panic!("expected ambiguous winding, got {other:?}"),
    }
}

#[test]
fn test_repeated_vertex_face_is_ambiguous() {
    let mesh = MeshBuffers::indexed(
        vec![DVec3::ZERO, DVec3::X, DVec3::Y],
        vec![DVec3::Z; 3],
        vec![[0, 1, 2], [0, 0, 1]],
    )
    .unwrap();
    let err = run(&mesh, &[1], 1.0).unwrap_err();
    assert!(matches!(err, EditorError::AmbiguousBoundaryWinding { .. }));
}

#[test]
fn test_vertex_limit() {
    let mesh = grid(1, 1);
    let config = EditorConfig::new(1e-9, 0.5, 1.0, 6).unwrap();
    let err = extrude(&mesh, &select(&[0]), 1.0, &config).unwrap_err();
    assert_eq!(err, EditorError::TooManyVertices { count: 7, max: 6 });
}

#[test]
fn test_boundary_edges_follow_owner_winding() {
    let mesh = grid(1, 1);
    let triangles = mesh.triangles().unwrap();
    // Faces [0, 1, 3] and [0, 3, 2] share the diagonal (0, 3).
    let boundary = boundary_edges(triangles, &select(&[0, 1])).unwrap();
    let directed: Vec<(u32, u32)> = boundary.iter().map(|e| (e.from, e.to)).collect();
    assert_eq!(directed, vec![(0, 1), (1, 3), (3, 2), (2, 0)]);
    assert_eq!(boundary[0].face, 0);
    assert_eq!(boundary[3].face, 1);
}
