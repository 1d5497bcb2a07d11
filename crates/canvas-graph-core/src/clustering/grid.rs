//! Grid bucketing and straggler absorption.
//!
//! Stage one of the pipeline: nodes are partitioned into fixed-size grid
//! cells, then singleton ("sparse") cells bridged by an explicit edge to an
//! 8-connected populated cell are folded into that cell. Absorption makes
//! the grouping robust to small translations of the whole workspace that
//! would otherwise orphan a node that drifts across a cell boundary (the
//! classic modifiable-areal-unit instability).
//!
//! All bookkeeping lives inside [`GridBuckets`]; the struct is built, folded
//! and consumed within a single engine call and never escapes it.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::types::NodePosition;

/// Integer grid-cell coordinate, `(floor(x / grid), floor(y / grid))`.
pub type CellKey = (i64, i64);

/// Minimum members for a cell to seed a cluster.
pub const CANDIDATE_THRESHOLD: usize = 2;

/// Compute the grid cell containing a point.
#[inline]
pub fn cell_for(x: f64, y: f64, grid_size: f64) -> CellKey {
    (
        (x / grid_size).floor() as i64,
        (y / grid_size).floor() as i64,
    )
}

/// 8-connectivity: the cells differ by at most 1 along each axis and are not
/// the same cell.
#[inline]
pub fn cells_adjacent(a: CellKey, b: CellKey) -> bool {
    a != b && (a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1
}

/// Per-call cell membership bookkeeping.
///
/// Cell lists are keyed by [`CellKey`] for O(1) lookup; a parallel
/// insertion-order key list keeps candidate enumeration deterministic for a
/// given input order (hash iteration order never leaks into the output).
#[derive(Debug)]
pub struct GridBuckets {
    /// Cell -> member node indices (indices into the caller's node slice).
    members: HashMap<CellKey, Vec<usize>>,
    /// Cell keys in first-occupancy order.
    order: Vec<CellKey>,
    /// Node index -> current cell, updated as stragglers move.
    node_cells: Vec<CellKey>,
}

impl GridBuckets {
    /// Bucket every node into its grid cell.
    pub fn build(nodes: &[NodePosition], grid_size: f64) -> Self {
        let mut members: HashMap<CellKey, Vec<usize>> = HashMap::new();
        let mut order = Vec::new();
        let mut node_cells = Vec::with_capacity(nodes.len());

        for (idx, node) in nodes.iter().enumerate() {
            let key = cell_for(node.x, node.y, grid_size);
            let cell = members.entry(key).or_insert_with(|| {
                order.push(key);
                Vec::new()
            });
            cell.push(idx);
            node_cells.push(key);
        }

        debug!(
            nodes = nodes.len(),
            cells = order.len(),
            grid_size,
            "bucketed nodes into grid cells"
        );

        Self {
            members,
            order,
            node_cells,
        }
    }

    /// Cell currently holding a node.
    #[inline]
    pub fn cell_of(&self, node_idx: usize) -> CellKey {
        self.node_cells[node_idx]
    }

    /// Fold sparse cells into adjacent candidate cells along explicit edges.
    ///
    /// For every edge (in input order, both orientations considered): when
    /// one endpoint sits in a candidate cell and the other in an 8-connected
    /// sparse cell, every member of the sparse cell moves into the candidate
    /// cell and the sparse cell is cleared. The whole straggler cell moves,
    /// not just the edge's endpoint.
    ///
    /// `edges` carries node indices already resolved by the caller; dangling
    /// edges never reach this point.
    pub fn absorb_stragglers(&mut self, edges: &[(usize, usize)]) {
        let mut absorbed = 0usize;

        for &(a, b) in edges {
            let cell_a = self.node_cells[a];
            let cell_b = self.node_cells[b];
            if !cells_adjacent(cell_a, cell_b) {
                continue;
            }

            let len_a = self.members.get(&cell_a).map_or(0, Vec::len);
            let len_b = self.members.get(&cell_b).map_or(0, Vec::len);

            let (sparse, candidate) = if len_a >= CANDIDATE_THRESHOLD && len_b == 1 {
                (cell_b, cell_a)
            } else if len_b >= CANDIDATE_THRESHOLD && len_a == 1 {
                (cell_a, cell_b)
            } else {
                continue;
            };

            let moved = self.members.remove(&sparse).unwrap_or_default();
            trace!(?sparse, ?candidate, count = moved.len(), "absorbing straggler cell");
            for idx in &moved {
                self.node_cells[*idx] = candidate;
            }
            if let Some(target) = self.members.get_mut(&candidate) {
                target.extend(moved);
            }
            absorbed += 1;
        }

        if absorbed > 0 {
            debug!(absorbed, "straggler cells absorbed into neighbors");
        }
    }

    /// Candidate cells (≥2 members) in first-occupancy order.
    pub fn candidate_cells(&self) -> Vec<(CellKey, &[usize])> {
        self.order
            .iter()
            .filter_map(|key| {
                self.members
                    .get(key)
                    .filter(|m| m.len() >= CANDIDATE_THRESHOLD)
                    .map(|m| (*key, m.as_slice()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, x: f64, y: f64) -> NodePosition {
        NodePosition::new(id, x, y, "note")
    }

    #[test]
    fn test_cell_for_handles_negative_coordinates() {
        assert_eq!(cell_for(10.0, 10.0, 400.0), (0, 0));
        assert_eq!(cell_for(-10.0, 10.0, 400.0), (-1, 0));
        assert_eq!(cell_for(-400.0, -401.0, 400.0), (-1, -2));
    }

    #[test]
    fn test_adjacency_is_8_connected_and_irreflexive() {
        assert!(cells_adjacent((0, 0), (1, 1)));
        assert!(cells_adjacent((0, 0), (0, -1)));
        assert!(!cells_adjacent((0, 0), (0, 0)));
        assert!(!cells_adjacent((0, 0), (2, 0)));
    }

    #[test]
    fn test_build_groups_by_cell() {
        let nodes = vec![
            node("a", 10.0, 10.0),
            node("b", 390.0, 390.0),
            node("c", 450.0, 10.0),
        ];
        let buckets = GridBuckets::build(&nodes, 400.0);
        let candidates = buckets.candidate_cells();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].0, (0, 0));
        assert_eq!(candidates[0].1, &[0, 1]);
        assert_eq!(buckets.cell_of(2), (1, 0));
    }

    #[test]
    fn test_absorption_moves_straggler_into_neighbor() {
        // Pair in cell (0,0), straggler just across the boundary in (1,0),
        // bridged by an edge to node 0.
        let nodes = vec![
            node("a", 100.0, 100.0),
            node("b", 200.0, 200.0),
            node("c", 410.0, 100.0),
        ];
        let mut buckets = GridBuckets::build(&nodes, 400.0);
        buckets.absorb_stragglers(&[(0, 2)]);

        let candidates = buckets.candidate_cells();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].1, &[0, 1, 2]);
        assert_eq!(buckets.cell_of(2), (0, 0));
    }

    #[test]
    fn test_absorption_requires_adjacency() {
        // Straggler two cells away: the edge must not pull it in.
        let nodes = vec![
            node("a", 100.0, 100.0),
            node("b", 200.0, 200.0),
            node("c", 900.0, 100.0),
        ];
        let mut buckets = GridBuckets::build(&nodes, 400.0);
        buckets.absorb_stragglers(&[(0, 2)]);

        let candidates = buckets.candidate_cells();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].1, &[0, 1]);
        assert_eq!(buckets.cell_of(2), (2, 0));
    }

    #[test]
    fn test_absorption_skips_two_sparse_cells() {
        // Both endpoints sparse: no candidate to absorb into.
        let nodes = vec![node("a", 100.0, 100.0), node("b", 410.0, 100.0)];
        let mut buckets = GridBuckets::build(&nodes, 400.0);
        buckets.absorb_stragglers(&[(0, 1)]);
        assert!(buckets.candidate_cells().is_empty());
    }
}
