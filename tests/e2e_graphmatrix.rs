//! End-to-end matrix conversion tests on the reference graphs.
//!
//! The base graph realizes the degree sequence [3, 2, 2, 1, 0]:
//! edges 0-1, 0-2, 0-3, 1-2 and an isolated node 4. Variants add
//! weights ("weight" = 0.5, "other" = 0.3) and a parallel 0-1 edge.

mod common;

use pretty_assertions::assert_eq;

use common::{abs, from_rows, scaled};
use graphmat::generators::havel_hakimi_graph;
use graphmat::linalg::{adjacency_matrix, incidence_matrix, to_dense, DEFAULT_WEIGHT_ATTRIBUTE};
use graphmat::{props, EdgeRef, GraphView, NodeId, PropertyGraph};

// ============================================================================
// Fixtures
// ============================================================================

fn base_graph() -> PropertyGraph {
    havel_hakimi_graph(&[3, 2, 2, 1, 0]).unwrap()
}

/// Same structure, every edge carrying weight 0.5 and other 0.3.
fn weighted_graph() -> PropertyGraph {
    let g = base_graph();
    for e in g.edges() {
        g.add_edge_with(e.src, e.dst, props([("weight", 0.5), ("other", 0.3)]));
    }
    g
}

/// Multigraph copy of the base graph plus a second 0-1 edge.
fn multigraph_with_parallel() -> PropertyGraph {
    let mg = base_graph().to_multigraph();
    mg.add_edge(NodeId(0), NodeId(1));
    mg
}

/// Sorted `(u, v)` pairs without keys.
fn unkeyed_edges(g: &PropertyGraph) -> Vec<EdgeRef> {
    g.edges().iter().map(|e| EdgeRef::new(e.src, e.dst)).collect()
}

fn oriented_incidence() -> Vec<Vec<f64>> {
    from_rows(&[
        [-1, -1, -1, 0],
        [1, 0, 0, -1],
        [0, 1, 0, 1],
        [0, 0, 1, 0],
        [0, 0, 0, 0],
    ])
}

fn multigraph_oriented_incidence() -> Vec<Vec<f64>> {
    from_rows(&[
        [-1, -1, -1, -1, 0],
        [1, 1, 0, 0, -1],
        [0, 0, 1, 0, 1],
        [0, 0, 0, 1, 0],
        [0, 0, 0, 0, 0],
    ])
}

fn adjacency() -> Vec<Vec<f64>> {
    from_rows(&[
        [0, 1, 1, 1, 0],
        [1, 0, 1, 0, 0],
        [1, 1, 0, 0, 0],
        [1, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ])
}

fn multigraph_adjacency() -> Vec<Vec<f64>> {
    from_rows(&[
        [0, 2, 1, 1, 0],
        [2, 0, 1, 0, 0],
        [1, 1, 0, 0, 0],
        [1, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ])
}

// ============================================================================
// Incidence
// ============================================================================

#[test]
fn test_incidence_simple_graph() {
    let g = base_graph();
    let nodes = g.node_ids();
    let edges = unkeyed_edges(&g);

    let oriented = incidence_matrix(&g, &nodes, &edges, true, None).unwrap();
    assert_eq!(to_dense(&oriented), oriented_incidence());

    let unoriented = incidence_matrix(&g, &nodes, &edges, false, None).unwrap();
    assert_eq!(to_dense(&unoriented), abs(&oriented_incidence()));
}

#[test]
fn test_incidence_multigraph_copy() {
    let mg = base_graph().to_multigraph();
    let nodes = mg.node_ids();
    let edges = unkeyed_edges(&mg);

    let oriented = incidence_matrix(&mg, &nodes, &edges, true, None).unwrap();
    assert_eq!(to_dense(&oriented), oriented_incidence());

    let unoriented = incidence_matrix(&mg, &nodes, &edges, false, None).unwrap();
    assert_eq!(to_dense(&unoriented), abs(&oriented_incidence()));
}

#[test]
fn test_incidence_parallel_edges() {
    let mg2 = multigraph_with_parallel();
    let nodes = mg2.node_ids();

    // bare (0, 1) twice binds to keys 0 and 1
    let edges = unkeyed_edges(&mg2);
    assert_eq!(edges.len(), 5);

    let oriented = incidence_matrix(&mg2, &nodes, &edges, true, None).unwrap();
    assert_eq!(to_dense(&oriented), multigraph_oriented_incidence());

    let unoriented = incidence_matrix(&mg2, &nodes, &edges, false, None).unwrap();
    assert_eq!(to_dense(&unoriented), abs(&multigraph_oriented_incidence()));

    let keyed = incidence_matrix(&mg2, &nodes, &mg2.edge_refs(), true, None).unwrap();
    assert_eq!(to_dense(&keyed), multigraph_oriented_incidence());
}

#[test]
fn test_weighted_incidence_unit_by_default() {
    let wg = weighted_graph();
    let nodes = wg.node_ids();
    let edges = unkeyed_edges(&wg);

    let oriented = incidence_matrix(&wg, &nodes, &edges, true, None).unwrap();
    assert_eq!(to_dense(&oriented), oriented_incidence());

    let unoriented = incidence_matrix(&wg, &nodes, &edges, false, None).unwrap();
    assert_eq!(to_dense(&unoriented), abs(&oriented_incidence()));
}

#[test]
fn test_weighted_incidence_scaled_by_attribute() {
    let wg = weighted_graph();
    let nodes = wg.node_ids();
    let edges = unkeyed_edges(&wg);

    let by_weight = incidence_matrix(&wg, &nodes, &edges, true, Some("weight")).unwrap();
    assert_eq!(to_dense(&by_weight), scaled(&oriented_incidence(), 0.5));

    let by_weight = incidence_matrix(&wg, &nodes, &edges, false, Some("weight")).unwrap();
    assert_eq!(to_dense(&by_weight), abs(&scaled(&oriented_incidence(), 0.5)));

    let by_other = incidence_matrix(&wg, &nodes, &edges, true, Some("other")).unwrap();
    assert_eq!(to_dense(&by_other), scaled(&oriented_incidence(), 0.3));
}

#[test]
fn test_weighted_multigraph_incidence() {
    let wmg = weighted_graph().to_multigraph();
    wmg.add_edge_with(NodeId(0), NodeId(1), props([("weight", 0.5), ("other", 0.3)]));
    let nodes = wmg.node_ids();
    let edges = wmg.edge_refs();

    let by_weight = incidence_matrix(&wmg, &nodes, &edges, true, Some("weight")).unwrap();
    assert_eq!(to_dense(&by_weight), scaled(&multigraph_oriented_incidence(), 0.5));

    let by_weight = incidence_matrix(&wmg, &nodes, &edges, false, Some("weight")).unwrap();
    assert_eq!(to_dense(&by_weight), abs(&scaled(&multigraph_oriented_incidence(), 0.5)));

    let by_other = incidence_matrix(&wmg, &nodes, &edges, true, Some("other")).unwrap();
    assert_eq!(to_dense(&by_other), scaled(&multigraph_oriented_incidence(), 0.3));
}

// ============================================================================
// Adjacency
// ============================================================================

#[test]
fn test_adjacency_simple_and_multigraph() {
    let weight = Some(DEFAULT_WEIGHT_ATTRIBUTE);

    let g = base_graph();
    assert_eq!(to_dense(&adjacency_matrix(&g, &g.node_ids(), weight).unwrap()), adjacency());

    let mg = g.to_multigraph();
    assert_eq!(to_dense(&adjacency_matrix(&mg, &mg.node_ids(), weight).unwrap()), adjacency());

    let mg2 = multigraph_with_parallel();
    assert_eq!(
        to_dense(&adjacency_matrix(&mg2, &mg2.node_ids(), weight).unwrap()),
        multigraph_adjacency()
    );
    assert_eq!(
        to_dense(&adjacency_matrix(&mg2, &mg2.node_ids(), None).unwrap()),
        multigraph_adjacency()
    );
}

#[test]
fn test_adjacency_node_subset() {
    let g = base_graph();
    let sub = adjacency_matrix(&g, &[NodeId(0), NodeId(1)], None).unwrap();
    let expected: Vec<Vec<f64>> = adjacency()[..2].iter().map(|row| row[..2].to_vec()).collect();
    assert_eq!(to_dense(&sub), expected);
}

#[test]
fn test_adjacency_weighted() {
    let wg = weighted_graph();
    let nodes = wg.node_ids();
    let wa = scaled(&adjacency(), 0.5);

    assert_eq!(to_dense(&adjacency_matrix(&wg, &nodes, Some("weight")).unwrap()), wa);
    assert_eq!(to_dense(&adjacency_matrix(&wg, &nodes, None).unwrap()), adjacency());
    assert_eq!(
        to_dense(&adjacency_matrix(&wg, &nodes, Some("other")).unwrap()),
        scaled(&wa, 0.6)
    );
}

#[test]
fn test_adjacency_excluded_neighbor() {
    let g = PropertyGraph::undirected();
    g.add_edge(NodeId(1), NodeId(2));
    g.add_edge_with(NodeId(3), NodeId(2), props([("weight", 8)]));

    let a = adjacency_matrix(&g, &[NodeId(1), NodeId(3)], Some("weight")).unwrap();
    assert_eq!(to_dense(&a), vec![vec![0.0, 0.0], vec![0.0, 0.0]]);
    assert_eq!(a.nnz(), 0);
}
