//! Benchmark support for the canvas-graph cluster engine.
//!
//! Seeded dataset generators live here so benches and ad-hoc profiling
//! share identical inputs.

pub mod datasets;

pub use datasets::{Dataset, DatasetGenerator, GeneratorConfig};
