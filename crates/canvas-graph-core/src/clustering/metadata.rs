//! Cluster metadata computation.
//!
//! Stage four: turns final node-index groups into the [`Cluster`] records
//! the rendering overlay consumes. Centroid, bounds and both frequency
//! tables come from one pass over the members; the stable id is derived
//! from the centroid's own grid cell.

use std::collections::{HashMap, HashSet};

use crate::types::{Bounds, Cluster, ClusterSummary, NodePosition, Point};

use super::grid::cell_for;

/// Arithmetic mean of member positions. `group` must be non-empty.
pub(crate) fn centroid_of(group: &[usize], nodes: &[NodePosition]) -> Point {
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for &idx in group {
        sum_x += nodes[idx].x;
        sum_y += nodes[idx].y;
    }
    let n = group.len() as f64;
    Point::new(sum_x / n, sum_y / n)
}

/// Axis-aligned min/max extent of member positions. `group` must be non-empty.
pub(crate) fn bounds_of(group: &[usize], nodes: &[NodePosition]) -> Bounds {
    let first = &nodes[group[0]];
    let mut bounds = Bounds {
        min_x: first.x,
        min_y: first.y,
        max_x: first.x,
        max_y: first.y,
    };
    for &idx in &group[1..] {
        let node = &nodes[idx];
        bounds.min_x = bounds.min_x.min(node.x);
        bounds.min_y = bounds.min_y.min(node.y);
        bounds.max_x = bounds.max_x.max(node.x);
        bounds.max_y = bounds.max_y.max(node.y);
    }
    bounds
}

/// Build the final [`Cluster`] records for the node-index groups.
pub fn build_clusters(
    groups: &[Vec<usize>],
    nodes: &[NodePosition],
    grid_size: f64,
) -> Vec<Cluster> {
    let mut clusters = Vec::with_capacity(groups.len());

    for group in groups {
        let centroid = centroid_of(group, nodes);
        let bounds = bounds_of(group, nodes);

        let mut type_counts: HashMap<String, usize> = HashMap::new();
        // First-encounter order for the dominant-type tie-break; the hash
        // map alone would lose it.
        let mut type_order: Vec<String> = Vec::new();
        let mut status_counts: HashMap<String, usize> = HashMap::new();

        for &idx in group {
            let node = &nodes[idx];
            let count = type_counts.entry(node.kind.clone()).or_insert_with(|| {
                type_order.push(node.kind.clone());
                0
            });
            *count += 1;
            if let Some(status) = &node.status {
                *status_counts.entry(status.clone()).or_insert(0) += 1;
            }
        }

        let mut dominant_type = type_order[0].clone();
        let mut dominant_count = type_counts[&dominant_type];
        for kind in &type_order[1..] {
            let count = type_counts[kind];
            if count > dominant_count {
                dominant_type = kind.clone();
                dominant_count = count;
            }
        }

        let (gx, gy) = cell_for(centroid.x, centroid.y, grid_size);

        clusters.push(Cluster {
            id: format!("cluster-{gx}-{gy}"),
            node_ids: group.iter().map(|&idx| nodes[idx].id.clone()).collect(),
            centroid,
            bounds,
            dominant_type,
            summary: ClusterSummary {
                node_count: group.len(),
                type_counts,
                status_counts,
            },
        });
    }

    disambiguate_ids(&mut clusters);
    clusters
}

/// Merges and splits can land two centroids in the same coarse grid cell;
/// later duplicates get their output index appended.
fn disambiguate_ids(clusters: &mut [Cluster]) {
    let mut seen: HashSet<String> = HashSet::new();
    for (index, cluster) in clusters.iter_mut().enumerate() {
        if !seen.insert(cluster.id.clone()) {
            cluster.id = format!("{}-{index}", cluster.id);
        }
    }
}
