//! Disjoint-set over grid-cell keys.
//!
//! Conventional union-find with path compression and union by rank. The key
//! space (populated grid cells) is small, so hash maps from cell key to
//! parent/rank are all the structure needed.

use std::collections::HashMap;

use super::grid::CellKey;

/// Disjoint-set forest keyed by grid cell.
#[derive(Debug, Default)]
pub struct DisjointCells {
    parent: HashMap<CellKey, CellKey>,
    rank: HashMap<CellKey, u32>,
}

impl DisjointCells {
    /// Create a forest of singletons, one per cell.
    pub fn new(cells: impl IntoIterator<Item = CellKey>) -> Self {
        let mut forest = Self::default();
        for cell in cells {
            forest.parent.insert(cell, cell);
            forest.rank.insert(cell, 0);
        }
        forest
    }

    /// Whether the cell was registered at construction.
    pub fn contains(&self, cell: CellKey) -> bool {
        self.parent.contains_key(&cell)
    }

    /// Find the set representative, compressing the path walked.
    ///
    /// # Panics
    ///
    /// Panics if `cell` was not registered; callers gate on [`contains`](Self::contains).
    pub fn find(&mut self, cell: CellKey) -> CellKey {
        let mut root = cell;
        while self.parent[&root] != root {
            root = self.parent[&root];
        }
        // Second walk to point every visited cell at the root.
        let mut cur = cell;
        while cur != root {
            let next = self.parent[&cur];
            self.parent.insert(cur, root);
            cur = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`. No-op when already joined.
    pub fn union(&mut self, a: CellKey, b: CellKey) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        let rank_a = self.rank[&ra];
        let rank_b = self.rank[&rb];
        if rank_a < rank_b {
            self.parent.insert(ra, rb);
        } else if rank_a > rank_b {
            self.parent.insert(rb, ra);
        } else {
            self.parent.insert(rb, ra);
            self.rank.insert(ra, rank_a + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons_are_their_own_roots() {
        let cells = [(0, 0), (1, 0), (5, 5)];
        let mut forest = DisjointCells::new(cells);
        for cell in cells {
            assert_eq!(forest.find(cell), cell);
        }
    }

    #[test]
    fn test_union_joins_and_is_idempotent() {
        let mut forest = DisjointCells::new([(0, 0), (1, 0), (1, 1)]);
        forest.union((0, 0), (1, 0));
        forest.union((1, 0), (1, 1));
        forest.union((0, 0), (1, 1)); // already joined

        let root = forest.find((0, 0));
        assert_eq!(forest.find((1, 0)), root);
        assert_eq!(forest.find((1, 1)), root);
    }

    #[test]
    fn test_separate_components_stay_separate() {
        let mut forest = DisjointCells::new([(0, 0), (1, 0), (10, 10), (11, 10)]);
        forest.union((0, 0), (1, 0));
        forest.union((10, 10), (11, 10));
        assert_ne!(forest.find((0, 0)), forest.find((10, 10)));
    }

    #[test]
    fn test_contains() {
        let forest = DisjointCells::new([(2, 3)]);
        assert!(forest.contains((2, 3)));
        assert!(!forest.contains((3, 2)));
    }
}
