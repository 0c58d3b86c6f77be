mod util;
use util::*;

use mesh_renumber::prelude::*;

#[test]
fn two_triangles_one_cell_per_color() {
    let mut mesh = two_triangles();
    mesh.set_coloring(CellColoring::from_cell_colors(vec![0, 1]).unwrap());

    renumber_by_color(&mut mesh).unwrap();

    // cell 0 keeps (0, 1, 2); vertex 3 is the only one cell 1 adds
    assert_eq!(mesh.topology().cells().as_slice(), &[0, 1, 2, 1, 3, 2]);
    assert_eq!(
        mesh.coordinates().as_slice(),
        &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0]
    );
    let coloring = mesh.coloring().unwrap();
    assert_eq!(coloring.cell_colors(), &[0, 1]);
    assert_eq!(coloring.groups(), &[vec![0], vec![1]]);
    assert_eq!(coloring.num_colored_cells(), &[1, 1]);
}

#[test]
fn reversed_colors_move_second_cell_first() {
    let mut mesh = two_triangles();
    mesh.set_coloring(CellColoring::from_cell_colors(vec![1, 0]).unwrap());

    let r = renumber_by_color_with(&mut mesh, &RenumberConfig::default()).unwrap();

    // old cell 1 = (1, 3, 2) is walked first
    assert_eq!(r.vertex_map(), &[3, 0, 2, 1]);
    assert_eq!(r.cell_map(), &[1, 0]);
    assert_eq!(mesh.topology().cells().as_slice(), &[0, 1, 2, 3, 0, 2]);
    assert_eq!(
        mesh.coordinates().as_slice(),
        &[1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0]
    );
    assert_eq!(mesh.coloring().unwrap().cell_colors(), &[0, 1]);
}

#[test]
fn uncolored_mesh_is_rejected() {
    let mut mesh = two_triangles();
    let before = mesh.clone();
    assert_eq!(renumber_by_color(&mut mesh), Err(MeshError::NotColored));
    assert_eq!(mesh, before);
}

#[test]
fn size_mismatch_fails_before_any_mutation() {
    let mut mesh = two_triangles();
    mesh.set_coloring(CellColoring::new(
        vec![0, 0],
        vec![vec![0, 1]],
        vec![3],
    ));
    let before = mesh.clone();

    let err = renumber_by_color(&mut mesh).unwrap_err();
    assert_eq!(
        err,
        MeshError::InconsistentColoring(ColoringDefect::SizeMismatch {
            color: 0,
            expected: 3,
            found: 2
        })
    );
    assert_eq!(mesh, before);
}

#[test]
fn isolated_vertex_leaves_buffers_untouched() {
    // vertex 4 exists in the geometry but no cell uses it
    let topology = MeshTopology::try_new(CellType::Triangle, 5, vec![0, 1, 2, 1, 3, 2]).unwrap();
    let coordinates = Coordinates::try_new(
        2,
        vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 5.0, 5.0],
    )
    .unwrap();
    let mut mesh = Mesh::try_new(topology, coordinates).unwrap();
    mesh.set_coloring(CellColoring::from_cell_colors(vec![1, 0]).unwrap());
    let before = mesh.clone();

    let err = renumber_by_color(&mut mesh).unwrap_err();
    assert_eq!(
        err,
        MeshError::IncompleteRenumbering {
            unassigned: 1,
            first: 4
        }
    );
    assert_eq!(mesh.topology().cells(), before.topology().cells());
    assert_eq!(mesh.coordinates(), before.coordinates());
    assert_eq!(mesh.coloring(), before.coloring());
}

#[test]
fn cell_missing_from_groups_is_incomplete() {
    let mut mesh = unit_square(2, 1);
    let full = greedy_coloring(&mesh);
    // cell 2 = (1, 2, 5) is the only cell using the corner vertex 2
    let dropped = 2;
    let color = full.color_of(dropped).unwrap();
    let mut groups = full.groups().to_vec();
    groups[color].retain(|&c| c != dropped);
    let mut sizes = full.num_colored_cells().to_vec();
    sizes[color] -= 1;
    mesh.set_coloring(CellColoring::new(full.cell_colors().to_vec(), groups, sizes));
    let before = mesh.clone();

    assert!(matches!(
        renumber_by_color(&mut mesh),
        Err(MeshError::IncompleteRenumbering { .. })
    ));
    assert_eq!(mesh, before);
}

#[test]
fn duplicated_cell_is_inconsistent() {
    let mut mesh = two_triangles();
    mesh.set_coloring(CellColoring::new(
        vec![0, 1],
        vec![vec![0], vec![0]],
        vec![1, 1],
    ));
    assert_eq!(
        renumber_by_color(&mut mesh),
        Err(MeshError::InconsistentColoring(
            ColoringDefect::DuplicateCell { cell: 0 }
        ))
    );
}

#[test]
fn stale_connectivity_is_cleared_with_warning() {
    let mut mesh = two_triangles();
    let edges = Connectivity::try_new(2, vec![0, 1, 1, 2, 2, 0, 1, 3, 3, 2]).unwrap();
    mesh.topology_mut().set_connectivity(1, 0, edges).unwrap();
    let vertex_cells = Connectivity::try_new(1, vec![0, 0, 0, 1]).unwrap();
    mesh.topology_mut().set_connectivity(0, 2, vertex_cells).unwrap();
    mesh.set_coloring(CellColoring::from_cell_colors(vec![0, 1]).unwrap());

    renumber_by_color(&mut mesh).unwrap();

    assert_eq!(mesh.topology().stale_connectivity().count(), 0);
    assert!(mesh.topology().connectivity(1, 0).unwrap().is_empty());
    assert!(mesh.topology().connectivity(0, 2).unwrap().is_empty());
    assert_eq!(mesh.topology().num_entities(1), 0);
    assert_eq!(mesh.topology().cells().len(), 6);
}

#[test]
fn stale_connectivity_error_policy_keeps_mesh() {
    let mut mesh = two_triangles();
    let edges = Connectivity::try_new(2, vec![0, 1, 1, 2, 2, 0, 1, 3, 3, 2]).unwrap();
    mesh.topology_mut().set_connectivity(1, 0, edges).unwrap();
    mesh.set_coloring(CellColoring::from_cell_colors(vec![1, 0]).unwrap());
    let before = mesh.clone();

    let config = RenumberConfig {
        stale_connectivity: StaleConnectivityHandling::Error,
        ..Default::default()
    };
    assert_eq!(
        renumber_by_color_with(&mut mesh, &config),
        Err(MeshError::StaleConnectivity { d0: 1, d1: 0 })
    );
    assert_eq!(mesh, before);
}

#[test]
fn independence_check_rejects_shared_vertex() {
    let mut mesh = two_triangles();
    mesh.set_coloring(CellColoring::from_cell_colors(vec![0, 0]).unwrap());
    let config = RenumberConfig {
        check_independence: true,
        ..Default::default()
    };
    assert!(matches!(
        renumber_by_color_with(&mut mesh, &config),
        Err(MeshError::InconsistentColoring(
            ColoringDefect::SharedVertex { color: 0, .. }
        ))
    ));

    // without the check the renumbering itself does not mind
    renumber_by_color(&mut mesh).unwrap();
    assert_eq!(mesh.coloring().unwrap().groups(), &[vec![0, 1]]);
}

#[test]
fn empty_mesh_is_a_no_op() {
    let topology = MeshTopology::try_new(CellType::Triangle, 0, Vec::new()).unwrap();
    let coordinates = Coordinates::try_new(2, Vec::new()).unwrap();
    let mut mesh = Mesh::try_new(topology, coordinates).unwrap();
    mesh.set_coloring(CellColoring::from_cell_colors(Vec::new()).unwrap());
    let before = mesh.clone();

    let r = renumber_by_color_with(&mut mesh, &RenumberConfig::default()).unwrap();
    assert!(r.vertex_map().is_empty());
    assert!(r.cell_map().is_empty());
    assert_eq!(mesh, before);
}

#[test]
fn cell_free_mesh_with_vertices_is_a_no_op() {
    let topology = MeshTopology::try_new(CellType::Triangle, 3, Vec::new()).unwrap();
    let coordinates = Coordinates::try_new(2, vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0]).unwrap();
    let mut mesh = Mesh::try_new(topology, coordinates).unwrap();
    mesh.set_coloring(CellColoring::new(Vec::new(), vec![Vec::new()], vec![0]));
    let before = mesh.clone();

    let r = renumber_by_color_with(&mut mesh, &RenumberConfig::default()).unwrap();
    assert_eq!(r, Renumbering::identity(3, 0));
    assert_eq!(r.vertex_map(), &[0, 1, 2]);
    assert_eq!(mesh, before);
}

#[test]
fn cell_free_mesh_rejects_listed_cells() {
    let topology = MeshTopology::try_new(CellType::Triangle, 0, Vec::new()).unwrap();
    let coordinates = Coordinates::try_new(2, Vec::new()).unwrap();
    let mut mesh = Mesh::try_new(topology, coordinates).unwrap();
    mesh.set_coloring(CellColoring::new(Vec::new(), vec![Vec::new(), vec![7, 9]], vec![0, 2]));
    let before = mesh.clone();

    let err = renumber_by_color(&mut mesh).unwrap_err();
    assert_eq!(
        err,
        MeshError::InconsistentColoring(ColoringDefect::CellOutOfRange {
            color: 1,
            cell: 7,
            num_cells: 0,
        })
    );
    assert_eq!(mesh, before);
}

#[test]
fn renumbering_twice_is_stable() {
    let mut mesh = unit_square(4, 3);
    mesh.set_coloring(shuffled_coloring(&mesh, 7));
    renumber_by_color(&mut mesh).unwrap();
    let once = mesh.clone();

    let r = renumber_by_color_with(&mut mesh, &RenumberConfig::default()).unwrap();
    assert_eq!(mesh, once);
    assert_eq!(r, Renumbering::identity(mesh.num_vertices(), mesh.num_cells()));
}

#[test]
fn tetrahedral_mesh_with_checks_enabled() {
    let mut mesh = unit_cube(2);
    mesh.set_coloring(shuffled_coloring(&mesh, 3));
    let num_colors = mesh.coloring().unwrap().num_colors();
    let config = RenumberConfig {
        check_independence: true,
        check_invariants: true,
        ..Default::default()
    };

    renumber_by_color_with(&mut mesh, &config).unwrap();

    let coloring = mesh.coloring().unwrap();
    let ranges = coloring.color_ranges().expect("colors must be contiguous");
    assert_eq!(ranges.len(), num_colors);
    assert_eq!(ranges.last().unwrap().end, mesh.num_cells());
    assert!(coloring.check_independent(mesh.topology().cells()).is_ok());
}

#[test]
fn user_vertex_data_follows_the_renumbering() {
    let mut mesh = unit_square(3, 3);
    mesh.set_coloring(shuffled_coloring(&mesh, 11));
    // a per-vertex field equal to x + 10 y
    let field: Vec<f64> = mesh.coordinates().points().map(|p| p[0] + 10.0 * p[1]).collect();

    let r = renumber_by_color_with(&mut mesh, &RenumberConfig::default()).unwrap();
    let moved = r.permute_vertex_data(&field, 1).unwrap();

    for (v, p) in mesh.coordinates().points().enumerate() {
        assert_eq!(moved[v], p[0] + 10.0 * p[1]);
    }
}
