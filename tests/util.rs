#![allow(dead_code)]
use mesh_renumber::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Two triangles sharing the edge 1-2 on the unit square.
pub fn two_triangles() -> Mesh {
    let topology = MeshTopology::try_new(CellType::Triangle, 4, vec![0, 1, 2, 1, 3, 2]).unwrap();
    let coordinates =
        Coordinates::try_new(2, vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0]).unwrap();
    Mesh::try_new(topology, coordinates).unwrap()
}

/// `nx * ny` squares, each split into two triangles.
pub fn unit_square(nx: usize, ny: usize) -> Mesh {
    let vid = |i: usize, j: usize| j * (nx + 1) + i;
    let mut coords = Vec::with_capacity((nx + 1) * (ny + 1) * 2);
    for j in 0..=ny {
        for i in 0..=nx {
            coords.push(i as f64 / nx as f64);
            coords.push(j as f64 / ny as f64);
        }
    }
    let mut cells = Vec::with_capacity(nx * ny * 6);
    for j in 0..ny {
        for i in 0..nx {
            let (v0, v1, v2, v3) = (vid(i, j), vid(i + 1, j), vid(i, j + 1), vid(i + 1, j + 1));
            cells.extend_from_slice(&[v0, v1, v3, v0, v2, v3]);
        }
    }
    let topology =
        MeshTopology::try_new(CellType::Triangle, (nx + 1) * (ny + 1), cells).unwrap();
    Mesh::try_new(topology, Coordinates::try_new(2, coords).unwrap()).unwrap()
}

/// `n^3` cubes, each split into six tetrahedra around the main diagonal.
pub fn unit_cube(n: usize) -> Mesh {
    let vid = |i: usize, j: usize, k: usize| (k * (n + 1) + j) * (n + 1) + i;
    let mut coords = Vec::new();
    for k in 0..=n {
        for j in 0..=n {
            for i in 0..=n {
                coords.extend_from_slice(&[i as f64, j as f64, k as f64]);
            }
        }
    }
    const KUHN: [[usize; 4]; 6] = [
        [0, 1, 3, 7],
        [0, 1, 5, 7],
        [0, 2, 3, 7],
        [0, 2, 6, 7],
        [0, 4, 5, 7],
        [0, 4, 6, 7],
    ];
    let mut cells = Vec::new();
    for k in 0..n {
        for j in 0..n {
            for i in 0..n {
                let corner = |c: usize| vid(i + (c & 1), j + ((c >> 1) & 1), k + ((c >> 2) & 1));
                for tet in KUHN {
                    cells.extend(tet.iter().map(|&c| corner(c)));
                }
            }
        }
    }
    let topology =
        MeshTopology::try_new(CellType::Tetrahedron, (n + 1).pow(3), cells).unwrap();
    Mesh::try_new(topology, Coordinates::try_new(3, coords).unwrap()).unwrap()
}

/// Greedy vertex-sharing coloring, visiting cells in `order`.
pub fn greedy_coloring_in_order(mesh: &Mesh, order: &[usize]) -> CellColoring {
    let cells = mesh.topology().cells();
    let mut vertex_cells = vec![Vec::new(); mesh.num_vertices()];
    for (c, block) in cells.blocks().enumerate() {
        for &v in block {
            vertex_cells[v].push(c);
        }
    }
    let mut colors = vec![usize::MAX; mesh.num_cells()];
    for &c in order {
        let mut used = Vec::new();
        for &v in cells.entities(c).unwrap() {
            for &other in &vertex_cells[v] {
                if colors[other] != usize::MAX {
                    used.push(colors[other]);
                }
            }
        }
        colors[c] = (0..).find(|k| !used.contains(k)).unwrap();
    }
    CellColoring::from_cell_colors(colors).unwrap()
}

/// Greedy coloring in natural cell order.
pub fn greedy_coloring(mesh: &Mesh) -> CellColoring {
    let order: Vec<usize> = (0..mesh.num_cells()).collect();
    greedy_coloring_in_order(mesh, &order)
}

/// Greedy coloring over a shuffled cell order, with each group shuffled too.
pub fn shuffled_coloring(mesh: &Mesh, seed: u64) -> CellColoring {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..mesh.num_cells()).collect();
    order.shuffle(&mut rng);
    let base = greedy_coloring_in_order(mesh, &order);
    let mut groups = base.groups().to_vec();
    for group in &mut groups {
        group.shuffle(&mut rng);
    }
    CellColoring::new(
        base.cell_colors().to_vec(),
        groups,
        base.num_colored_cells().to_vec(),
    )
}

/// Assert vec is a permutation of `0..n`.
pub fn assert_permutation_of_range(got: &[usize], n: usize) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let want: Vec<usize> = (0..n).collect();
    assert_eq!(a, want, "not a permutation of 0..{n}\n got={got:?}");
}
