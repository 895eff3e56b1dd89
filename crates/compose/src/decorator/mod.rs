//! Decorating layers over any [`Visual`] component.
//!
//! A decorating layer owns exactly one wrapped component, implements the same
//! capability contract, and forwards every operation it does not override.
//! Because layers are themselves `Visual`, nesting is unbounded, and the
//! holder of the chain head never learns how deep the chain is.
//!
//! Ownership is strictly tree-shaped: wrapping takes the component by value,
//! so dropping the outermost layer drops everything inward, and the wrapped
//! component cannot be rebound after construction. [`Decorated::into_inner`]
//! is the one explicit way to detach.
//!
//! Each concrete layer documents whether its extra work runs before or after
//! the forwarded call; the two orders produce observably different canvases,
//! so none is assumed by default.

mod border;
mod scroll;
mod shadow;

pub use border::Border;
pub use scroll::Scroll;
pub use shadow::DropShadow;

use micro_visual::error::TranslationError;
use micro_visual::{Canvas, ManipulatorHandle, Point, Visual};

/// The transparent layer: wraps one component and overrides nothing.
///
/// Forwarding every operation untouched makes decoration additive-only by
/// default — a `Decorated<V>` is observationally indistinguishable from the
/// `V` it wraps, which is the baseline every concrete layer builds on.
#[derive(Debug)]
pub struct Decorated<V: Visual> {
    inner: V,
}

impl<V: Visual> Decorated<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Detach the wrapped component, dissolving this layer.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Visual> Visual for Decorated<V> {
    fn bounding_extent(&self) -> Result<(Point, Point), TranslationError> {
        self.inner.bounding_extent()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn create_manipulator(&self) -> ManipulatorHandle {
        self.inner.create_manipulator()
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        self.inner.draw(canvas);
    }

    fn resize(&mut self) {
        self.inner.resize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use micro_visual::Pane;

    #[test]
    fn zero_override_layer_is_transparent() {
        let mut bare = Pane::new("same");
        let mut wrapped = Decorated::new(Pane::new("same"));

        assert_eq!(bare.is_empty(), wrapped.is_empty());
        assert_eq!(bare.bounding_extent().unwrap(), wrapped.bounding_extent().unwrap());

        let (mut c1, mut c2) = (Canvas::new(), Canvas::new());
        bare.draw(&mut c1);
        wrapped.draw(&mut c2);
        assert_eq!(c1.ops(), c2.ops());

        bare.resize();
        wrapped.resize();
        assert_eq!(bare.bounding_extent().unwrap(), wrapped.bounding_extent().unwrap());

        assert_eq!(
            bare.create_manipulator().grip().unwrap(),
            wrapped.create_manipulator().grip().unwrap()
        );
    }

    #[test]
    fn into_inner_detaches_the_wrapped_component() {
        let pane = Pane::new("keep me");
        let handle = pane.handle();

        let layer = Decorated::new(pane);
        assert!(!layer.inner().is_empty());

        let pane = layer.into_inner();

        assert!(handle.is_attached());
        drop(pane);
        assert!(!handle.is_attached());
    }

    #[test]
    fn dropping_the_layer_drops_the_wrapped_chain() {
        let pane = Pane::new("x");
        let handle = pane.handle();

        let layer = Decorated::new(Decorated::new(pane));
        assert!(handle.is_attached());

        drop(layer);
        assert!(!handle.is_attached());
    }
}
