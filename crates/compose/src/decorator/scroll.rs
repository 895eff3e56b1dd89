use tracing::trace;

use micro_visual::error::TranslationError;
use micro_visual::{Canvas, Coord, Extent, ManipulatorHandle, Point, Visual};

/// Scrolls the wrapped component by an offset.
///
/// Order: the scroll op is recorded **before** forwarding `draw`, since the
/// translation must be in place before the content paints. `bounding_extent`
/// forwards and then shifts both corners by the current offset. `resize`
/// recenters (offset reset to zero) before forwarding.
///
/// [`Scroll::scroll_by`] is not part of the capability contract; it is only
/// reachable by whoever kept the concrete type, never through a chain head.
#[derive(Debug)]
pub struct Scroll<V: Visual> {
    inner: V,
    offset: Extent,
}

impl<V: Visual> Scroll<V> {
    pub fn new(inner: V) -> Self {
        Self { inner, offset: Extent::default() }
    }

    pub fn scroll_by(&mut self, dx: Coord, dy: Coord) {
        self.offset.width += dx;
        self.offset.height += dy;
        trace!(offset = %self.offset, "scrolled");
    }

    pub fn offset(&self) -> Extent {
        self.offset
    }
}

impl<V: Visual> Visual for Scroll<V> {
    fn bounding_extent(&self) -> Result<(Point, Point), TranslationError> {
        let (bottom_left, top_right) = self.inner.bounding_extent()?;
        Ok((bottom_left + self.offset, top_right + self.offset))
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn create_manipulator(&self) -> ManipulatorHandle {
        self.inner.create_manipulator()
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        canvas.op(format!("scroll:{},{}", self.offset.width, self.offset.height));
        self.inner.draw(canvas);
    }

    fn resize(&mut self) {
        self.offset = Extent::default();
        self.inner.resize();
    }
}
