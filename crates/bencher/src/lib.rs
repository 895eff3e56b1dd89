//! Helpers for the chain-dispatch benchmarks.

use micro_compose::chain::{BoxVisual, ChainBuilder};
use micro_compose::layer::BorderLayer;
use micro_visual::Pane;

/// Wrapping depths the benchmarks sweep over.
pub const DEPTHS: &[usize] = &[1, 4, 16];

/// A pane wrapped in `depth` boxed border layers.
pub fn boxed_chain(depth: usize) -> BoxVisual {
    let mut builder = ChainBuilder::new().leaf(Pane::new("bench"));
    for level in 0..depth {
        builder = builder.layer(BorderLayer { width: level as f64 });
    }
    builder.build().expect("builder was given a leaf")
}
