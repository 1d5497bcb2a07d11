//! Seeded canvas-layout generators.
//!
//! All generation is driven by a fixed seed so repeated benchmark runs see
//! byte-identical inputs.

use canvas_graph_core::types::{EdgeInfo, NodePosition};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Node kinds sampled round-robin style into generated layouts.
const NODE_KINDS: &[&str] = &["note", "task", "terminal", "proposal"];

/// Configuration for dataset generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// RNG seed; identical seeds produce identical datasets.
    pub seed: u64,
    /// Spacing between adjacent nodes of the regular grid layout.
    pub grid_pitch: f64,
    /// Random jitter applied to each node position, +/- this amount.
    pub jitter: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            grid_pitch: 180.0,
            jitter: 20.0,
        }
    }
}

/// A generated canvas layout.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub nodes: Vec<NodePosition>,
    pub edges: Vec<EdgeInfo>,
}

/// Generates node layouts and random edge sets from a seeded RNG.
#[derive(Debug)]
pub struct DatasetGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl DatasetGenerator {
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// `node_count` nodes on a square-ish regular grid with jitter, plus
    /// `edge_count` uniformly random edges over them.
    pub fn grid_layout(&mut self, node_count: usize, edge_count: usize) -> Dataset {
        let cols = (node_count as f64).sqrt().ceil() as usize;
        let mut nodes = Vec::with_capacity(node_count);
        for i in 0..node_count {
            let col = (i % cols) as f64;
            let row = (i / cols) as f64;
            let jitter = self.config.jitter;
            nodes.push(NodePosition::new(
                format!("n{i}"),
                col * self.config.grid_pitch + self.rng.gen_range(-jitter..=jitter),
                row * self.config.grid_pitch + self.rng.gen_range(-jitter..=jitter),
                NODE_KINDS[i % NODE_KINDS.len()],
            ));
        }

        let mut edges = Vec::with_capacity(edge_count);
        for _ in 0..edge_count {
            let a = self.rng.gen_range(0..node_count);
            let b = self.rng.gen_range(0..node_count);
            edges.push(EdgeInfo::new(format!("n{a}"), format!("n{b}")));
        }

        Dataset { nodes, edges }
    }
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self::new()
    }
}
