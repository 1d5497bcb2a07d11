//! Cluster-count constraint enforcement.
//!
//! Stage three: forces the cluster count into the visually-useful range
//! whenever the topology permits. Too many clusters are merged greedily by
//! nearest centroid pair; too few are raised by splitting the largest
//! splittable cluster along its longer bounding-box axis.
//!
//! Tie-breaking in both passes is order-of-encounter (first minimal pair in
//! nested iteration, first qualifying candidate in scan order). Downstream
//! consumers assert on exact groupings, so this ordering is a compatibility
//! contract, not an implementation detail to improve on.

use tracing::{debug, trace};

use crate::types::NodePosition;

use super::metadata::{bounds_of, centroid_of};
use super::params::{ClusterParams, MIN_HALF_SIZE, MIN_SPLIT_SIZE};

/// Adjust `groups` in place until its length lies in
/// `[params.min_clusters, params.max_clusters]`, or no further legal
/// merge/split exists.
pub fn enforce_bounds(
    groups: &mut Vec<Vec<usize>>,
    nodes: &[NodePosition],
    params: &ClusterParams,
) {
    if groups.len() > params.max_clusters {
        merge_down(groups, nodes, params.max_clusters);
    }
    // Splitting can stop early; it never overshoots max_clusters because it
    // only runs while the count is below min_clusters.
    if groups.len() < params.min_clusters {
        split_up(groups, nodes, params.min_clusters);
    }
}

/// Repeatedly merge the centroid-nearest pair until `count <= max`.
fn merge_down(groups: &mut Vec<Vec<usize>>, nodes: &[NodePosition], max: usize) {
    while groups.len() > max {
        let centroids: Vec<_> = groups.iter().map(|g| centroid_of(g, nodes)).collect();

        // First strictly-smaller pair wins, so equal distances resolve to
        // the earliest pair in nested iteration order. groups.len() >= 2
        // here since max >= 1, so pair (0, 1) always exists.
        let mut best = (0, 1, centroids[0].distance_to(&centroids[1]));
        for i in 0..centroids.len() {
            for j in (i + 1)..centroids.len() {
                let dist = centroids[i].distance_to(&centroids[j]);
                if dist < best.2 {
                    best = (i, j, dist);
                }
            }
        }

        let (keep, absorb, dist) = best;
        trace!(keep, absorb, dist, "merging nearest cluster pair");

        let absorbed = groups.remove(absorb);
        groups[keep].extend(absorbed);
    }

    debug!(count = groups.len(), "merged down to cluster budget");
}

/// Repeatedly split the largest splittable cluster until `count >= min`, or
/// stop when none qualifies. Stopping short of `min` is the documented
/// fallback for thinly-spread inputs, not an error.
fn split_up(groups: &mut Vec<Vec<usize>>, nodes: &[NodePosition], min: usize) {
    while groups.len() < min {
        // Largest group with enough members to split; strict `>` keeps the
        // first such group on ties.
        let mut best: Option<(usize, usize)> = None;
        for (idx, group) in groups.iter().enumerate() {
            if group.len() >= MIN_SPLIT_SIZE && best.map_or(true, |(_, len)| group.len() > len) {
                best = Some((idx, group.len()));
            }
        }
        let Some((idx, _)) = best else {
            debug!(
                count = groups.len(),
                "no splittable cluster left, accepting count below minimum"
            );
            return;
        };

        let bounds = bounds_of(&groups[idx], nodes);
        let along_x = bounds.width() >= bounds.height();

        let mut members = std::mem::take(&mut groups[idx]);
        // Stable sort: members with equal coordinates keep encounter order.
        if along_x {
            members.sort_by(|&a, &b| nodes[a].x.total_cmp(&nodes[b].x));
        } else {
            members.sort_by(|&a, &b| nodes[a].y.total_cmp(&nodes[b].y));
        }

        let mid = members.len() / 2;
        if mid < MIN_HALF_SIZE || members.len() - mid < MIN_HALF_SIZE {
            // Cannot split without producing an undersized half; put the
            // members back and stop.
            groups[idx] = members;
            return;
        }

        trace!(idx, along_x, mid, total = members.len(), "splitting cluster");
        let second_half = members.split_off(mid);
        groups[idx] = members;
        groups.push(second_half);
    }

    debug!(count = groups.len(), "split up to cluster budget");
}
