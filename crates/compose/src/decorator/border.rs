use micro_visual::error::TranslationError;
use micro_visual::{Canvas, Coord, ManipulatorHandle, Point, Visual};

/// Paints a frame around the wrapped component.
///
/// Order: the frame op is recorded **after** forwarding `draw`, so the border
/// sits over the content's edge. Every other operation forwards untouched.
#[derive(Debug)]
pub struct Border<V: Visual> {
    inner: V,
    width: Coord,
}

impl<V: Visual> Border<V> {
    pub fn new(inner: V, width: Coord) -> Self {
        Self { inner, width }
    }

    fn draw_border(&self, canvas: &mut Canvas) {
        canvas.op(format!("border:{}", self.width));
    }
}

impl<V: Visual> Visual for Border<V> {
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
        self.draw_border(canvas);
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
    fn border_paints_after_the_content() {
        let mut bordered = Border::new(Pane::new("body"), 2.0);

        let mut canvas = Canvas::new();
        bordered.draw(&mut canvas);
        assert_eq!(canvas.ops(), ["pane(body)", "border:2"]);
    }

    #[test]
    fn everything_else_forwards() {
        let pane = Pane::new("body");
        let expected = pane.bounding_extent().unwrap();

        let bordered = Border::new(pane, 1.0);
        assert_eq!(bordered.bounding_extent().unwrap(), expected);
        assert!(!bordered.is_empty());
    }
}
