//! Chain assembly at runtime, over boxed components.
//!
//! The type-level [`Layers`](crate::layer::Layers) machinery fixes the chain
//! shape at compile time; this module is its runtime counterpart for callers
//! that decide the stack of layers dynamically. Nodes are erased to
//! [`BoxVisual`] and layers to [`DynLayer`], at the cost of one box per
//! wrapping level.

use std::fmt;

use tracing::debug;

use micro_visual::error::ConstructionError;
use micro_visual::Visual;

use crate::layer::Layer;

/// A boxed capability node, usable anywhere a concrete node is.
pub type BoxVisual = Box<dyn Visual>;

/// Object-safe form of [`Layer`], for dynamically assembled chains.
pub trait DynLayer {
    fn apply_boxed(&self, inner: BoxVisual) -> BoxVisual;
}

impl<L> DynLayer for L
where
    L: Layer<BoxVisual>,
    L::Out: 'static,
{
    fn apply_boxed(&self, inner: BoxVisual) -> BoxVisual {
        Box::new(self.apply(inner))
    }
}

/// Builds a decorator chain innermost-first.
///
/// The leaf is required: a stack of layers with nothing to wrap is
/// meaningless, so [`ChainBuilder::build`] refuses it with
/// [`ConstructionError::MissingLeaf`] instead of producing a husk.
#[derive(Default)]
pub struct ChainBuilder {
    leaf: Option<BoxVisual>,
    layers: Vec<Box<dyn DynLayer>>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the innermost, non-decorating component.
    #[must_use]
    pub fn leaf(mut self, leaf: impl Visual + 'static) -> Self {
        self.leaf = Some(Box::new(leaf));
        self
    }

    /// Push a wrapping layer; layers pushed later wrap further out.
    #[must_use]
    pub fn layer(mut self, layer: impl DynLayer + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    /// Fold the layers over the leaf and hand back the chain head.
    pub fn build(self) -> Result<BoxVisual, ConstructionError> {
        let mut node = self.leaf.ok_or(ConstructionError::MissingLeaf)?;
        debug!(layers = self.layers.len(), "assembling chain");

        for layer in self.layers {
            node = layer.apply_boxed(node);
        }
        Ok(node)
    }
}

impl fmt::Debug for ChainBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainBuilder")
            .field("has_leaf", &self.leaf.is_some())
            .field("layers", &self.layers.len())
            .finish()
    }
}
