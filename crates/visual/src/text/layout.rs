//! The pre-existing text-layout surface.
//!
//! This contract is owned by the text machinery, not by the visual layer, and
//! is treated as unmodifiable: it reports geometry as origin plus extent and
//! knows nothing about bounding corners, manipulators or drawing.

use std::rc::{Rc, Weak};

use crate::geometry::{Extent, Point};

/// The interface every text layout exposes.
///
/// Implementations are allowed to report an invalid extent; callers that
/// translate this surface are expected to surface that rather than hide it.
pub trait TextLayout {
    /// Bottom-left anchor of the laid-out text.
    fn origin(&self) -> Point;

    /// Width and height of the laid-out text.
    fn extent(&self) -> Extent;

    /// Whether the layout currently holds any text.
    fn is_empty(&self) -> bool;
}

/// A concrete text layout: a run of text anchored at an origin.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    origin: Point,
    extent: Extent,
    contents: String,
}

impl TextBuffer {
    pub fn new(origin: Point, extent: Extent, contents: impl Into<String>) -> Self {
        Self { origin, extent, contents: contents.into() }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl TextLayout for TextBuffer {
    fn origin(&self) -> Point {
        self.origin
    }

    fn extent(&self) -> Extent {
        self.extent
    }

    fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

/// Non-owning handle to a shared text layout.
///
/// A handle never keeps its layout alive; upgrading after the last owner
/// dropped the layout yields nothing, which is how adapter construction
/// detects an absent adaptee.
#[derive(Debug, Clone)]
pub struct LayoutHandle {
    layout: Weak<dyn TextLayout>,
}

impl LayoutHandle {
    pub fn new(layout: &Rc<dyn TextLayout>) -> Self {
        Self { layout: Rc::downgrade(layout) }
    }

    pub(crate) fn upgrade(&self) -> Option<Rc<dyn TextLayout>> {
        self.layout.upgrade()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_reports_its_geometry() {
        let buffer = TextBuffer::new(Point::new(1.0, 2.0), Extent::new(30.0, 40.0), "hello");
        assert_eq!(buffer.origin(), Point::new(1.0, 2.0));
        assert_eq!(buffer.extent(), Extent::new(30.0, 40.0));
        assert!(!buffer.is_empty());
        assert!(TextBuffer::new(Point::default(), Extent::default(), "").is_empty());
    }

    #[test]
    fn handle_goes_stale_with_its_layout() {
        let layout: Rc<dyn TextLayout> =
            Rc::new(TextBuffer::new(Point::default(), Extent::new(1.0, 1.0), "x"));
        let handle = LayoutHandle::new(&layout);

        assert!(handle.upgrade().is_some());
        drop(layout);
        assert!(handle.upgrade().is_none());
    }
}
