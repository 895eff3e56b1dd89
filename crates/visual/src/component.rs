//! The capability contract every composable component satisfies.

use crate::canvas::Canvas;
use crate::error::TranslationError;
use crate::geometry::Point;
use crate::manipulator::ManipulatorHandle;

/// The operation set shared by every node of a composed visual: leaves,
/// interface adapters and decorating layers alike.
///
/// Nothing in this contract may depend on how deeply the receiver is nested;
/// a caller must be able to substitute any conforming node for any other.
/// Wrapping layers implement the same trait and forward, which is what makes
/// unbounded nesting possible.
pub trait Visual {
    /// The (bottom-left, top-right) corners of the component's bounding box.
    fn bounding_extent(&self) -> Result<(Point, Point), TranslationError>;

    /// Whether the component currently has any content.
    fn is_empty(&self) -> bool;

    /// Build a fresh manipulator targeting this component.
    ///
    /// The handle invokes capability operations polymorphically; it never
    /// sees the concrete type it was created from.
    fn create_manipulator(&self) -> ManipulatorHandle;

    /// Paint the component onto `canvas`.
    fn draw(&mut self, canvas: &mut Canvas);

    /// Recompute the component's geometry.
    fn resize(&mut self);
}

impl<V: Visual + ?Sized> Visual for Box<V> {
    fn bounding_extent(&self) -> Result<(Point, Point), TranslationError> {
        (**self).bounding_extent()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn create_manipulator(&self) -> ManipulatorHandle {
        (**self).create_manipulator()
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        (**self).draw(canvas);
    }

    fn resize(&mut self) {
        (**self).resize();
    }
}
