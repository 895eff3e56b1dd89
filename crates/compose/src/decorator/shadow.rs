use micro_visual::error::TranslationError;
use micro_visual::{Canvas, Coord, ManipulatorHandle, Point, Visual};

/// Drops a shadow behind the wrapped component.
///
/// Order: the shadow op is recorded **before** forwarding `draw` — a shadow
/// lies behind the content, so it must be painted first. Every other
/// operation forwards untouched.
#[derive(Debug)]
pub struct DropShadow<V: Visual> {
    inner: V,
    depth: Coord,
}

impl<V: Visual> DropShadow<V> {
    pub fn new(inner: V, depth: Coord) -> Self {
        Self { inner, depth }
    }
}

impl<V: Visual> Visual for DropShadow<V> {
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
        canvas.op(format!("shadow:{}", self.depth));
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
    fn shadow_paints_behind_the_content() {
        let mut shadowed = DropShadow::new(Pane::new("body"), 4.0);

        let mut canvas = Canvas::new();
        shadowed.draw(&mut canvas);
        assert_eq!(canvas.ops(), ["shadow:4", "pane(body)"]);
    }
}
