//! Mesh fixtures shared by the unit tests.

use crate::mesh::MeshBuffers;
use glam::DVec3;

/// Flat grid in the XY plane facing +Z, `cols × rows` cells, each cell split
/// into two triangles.
///
/// Vertex `(x, y)` has index `y * (cols + 1) + x`. Cell `(x, y)` owns faces
/// `2 * (y * cols + x)` and `2 * (y * cols + x) + 1`.
pub fn grid(cols: u32, rows: u32) -> MeshBuffers {
    let stride = cols + 1;
    let mut positions = Vec::with_capacity(((cols + 1) * (rows + 1)) as usize);
    for y in 0..=rows {
        for x in 0..=cols {
            positions.push(DVec3::new(x as f64, y as f64, 0.0));
        }
    }

    let mut triangles = Vec::with_capacity((cols * rows * 2) as usize);
    for y in 0..rows {
        for x in 0..cols {
            let v00 = y * stride + x;
            let v10 = v00 + 1;
            let v01 = v00 + stride;
            let v11 = v01 + 1;
            triangles.push([v00, v10, v11]);
            triangles.push([v00, v11, v01]);
        }
    }

    MeshBuffers::from_positions(positions, triangles).unwrap()
}

/// Closed unit cube with outward winding; corner `i` sits at
/// `(i & 1, (i >> 1) & 1, (i >> 2) & 1)`.
pub fn unit_cube() -> MeshBuffers {
    let positions = (0..8u32)
        .map(|i| DVec3::new((i & 1) as f64, ((i >> 1) & 1) as f64, ((i >> 2) & 1) as f64))
        .collect();
    #[rustfmt::skip]
    let triangles = vec![
        [0, 2, 3], [0, 3, 1], // bottom
        [4, 5, 7], [4, 7, 6], // top
        [0, 1, 5], [0, 5, 4], // front
        [2, 6, 7], [2, 7, 3], // back
        [0, 4, 6], [0, 6, 2], // left
        [1, 3, 7], [1, 7, 5], // right
    ];
    MeshBuffers::from_positions(positions, triangles).unwrap()
}

/// Two triangles that share no vertex.
pub fn disjoint_triangles() -> MeshBuffers {
    MeshBuffers::from_positions(
        vec![
            DVec3::ZERO,
            DVec3::X,
            DVec3::Y,
            DVec3::new(5.0, 0.0, 0.0),
            DVec3::new(6.0, 0.0, 0.0),
            DVec3::new(5.0, 1.0, 0.0),
        ],
        vec![[0, 1, 2], [3, 4, 5]],
    )
    .unwrap()
}

/// Three triangles hinged on the edge `(0, 1)`, a non-manifold fan.
pub fn three_fins() -> MeshBuffers {
    MeshBuffers::from_positions(
        vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z, -DVec3::Y],
        vec![[0, 1, 2], [1, 0, 3], [0, 1, 4]],
    )
    .unwrap()
}

/// Unindexed copy of a single triangle.
pub fn soup_triangle() -> MeshBuffers {
    MeshBuffers::unindexed(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![DVec3::Z; 3]).unwrap()
}
