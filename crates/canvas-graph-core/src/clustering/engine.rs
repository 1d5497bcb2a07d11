//! The spatial cluster pipeline.
//!
//! [`cluster_nodes`] is the engine's single entry point: a pure function
//! that collapses positioned canvas nodes into 4 to 8 summary clusters for
//! extreme-zoom-out rendering. Data flows strictly forward through four
//! stages on every call:
//!
//! 1. Grid bucketing + straggler absorption ([`grid`](super::grid))
//! 2. Edge-informed cell merge over a disjoint set ([`union_find`](super::union_find))
//! 3. Cluster-count constraint enforcement ([`constraints`](super::constraints))
//! 4. Metadata computation ([`metadata`](super::metadata))
//!
//! The engine holds no state between calls, performs no I/O and never
//! mutates its inputs, so concurrent calls with different inputs are
//! trivially safe. Invocation frequency (debouncing during continuous
//! panning) is entirely the caller's concern.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::types::{Cluster, EdgeInfo, NodePosition};

use super::constraints::enforce_bounds;
use super::grid::{cells_adjacent, CellKey, GridBuckets};
use super::metadata::build_clusters;
use super::params::{cluster_defaults, ClusterParams};
use super::union_find::DisjointCells;

/// Collapse `nodes` into summary clusters.
///
/// For well-formed input (finite coordinates, unique ids) this never fails;
/// zero or one node, or a layout so sparse that no grid cell holds two
/// nodes, yields an empty list. Edges referencing unknown node ids are
/// ignored. Passing non-finite coordinates or duplicate ids is a
/// precondition violation with unspecified results; callers wanting to
/// check `params` up front use [`ClusterParams::validate`].
///
/// Identical input (including element order) always yields identical
/// output, groupings and ids both.
///
/// # Example
///
/// ```
/// use canvas_graph_core::clustering::{cluster_defaults, cluster_nodes};
/// use canvas_graph_core::types::NodePosition;
///
/// let nodes = vec![
///     NodePosition::new("a", 10.0, 10.0, "note"),
///     NodePosition::new("b", 50.0, 50.0, "note"),
/// ];
/// let clusters = cluster_nodes(&nodes, &[], &cluster_defaults());
/// assert_eq!(clusters.len(), 1);
/// assert_eq!(clusters[0].node_ids, vec!["a", "b"]);
/// ```
#[instrument(skip_all, fields(nodes = nodes.len(), edges = edges.len()))]
pub fn cluster_nodes(
    nodes: &[NodePosition],
    edges: &[EdgeInfo],
    params: &ClusterParams,
) -> Vec<Cluster> {
    if nodes.len() < 2 {
        return Vec::new();
    }

    let id_index: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(idx, node)| (node.id.as_str(), idx))
        .collect();

    // Resolve edges to node indices once; dangling endpoints drop out here.
    let resolved: Vec<(usize, usize)> = edges
        .iter()
        .filter_map(|edge| {
            let source = *id_index.get(edge.source.as_str())?;
            let target = *id_index.get(edge.target.as_str())?;
            Some((source, target))
        })
        .collect();

    let mut buckets = GridBuckets::build(nodes, params.grid_size);
    buckets.absorb_stragglers(&resolved);

    let candidates = buckets.candidate_cells();
    if candidates.is_empty() {
        debug!("no candidate cells, nothing worth summarizing");
        return Vec::new();
    }

    let mut groups = merge_connected_cells(&buckets, &candidates, &resolved);
    enforce_bounds(&mut groups, nodes, params);

    let clusters = build_clusters(&groups, nodes, params.grid_size);
    debug!(clusters = clusters.len(), "cluster pipeline complete");
    clusters
}

/// [`cluster_nodes`] with [`cluster_defaults`].
pub fn cluster_nodes_default(nodes: &[NodePosition], edges: &[EdgeInfo]) -> Vec<Cluster> {
    cluster_nodes(nodes, edges, &cluster_defaults())
}

/// Stage two: union candidate cells that an edge connects, but only when
/// the cells are 8-connected. A long edge between distant cells never
/// merges them; the blast radius of a merge stays visually local.
fn merge_connected_cells(
    buckets: &GridBuckets,
    candidates: &[(CellKey, &[usize])],
    edges: &[(usize, usize)],
) -> Vec<Vec<usize>> {
    let mut forest = DisjointCells::new(candidates.iter().map(|(key, _)| *key));

    for &(a, b) in edges {
        let cell_a = buckets.cell_of(a);
        let cell_b = buckets.cell_of(b);
        if forest.contains(cell_a) && forest.contains(cell_b) && cells_adjacent(cell_a, cell_b) {
            forest.union(cell_a, cell_b);
        }
    }

    // Concatenate member lists per disjoint-set group, groups ordered by
    // first cell encountered.
    let mut group_of_root: HashMap<CellKey, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (key, members) in candidates {
        let root = forest.find(*key);
        let slot = *group_of_root.entry(root).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].extend(members.iter().copied());
    }

    debug!(
        cells = candidates.len(),
        groups = groups.len(),
        "edge-informed cell merge complete"
    );
    groups
}
