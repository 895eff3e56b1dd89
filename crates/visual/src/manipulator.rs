//! Opaque manipulation handle handed out by components.
//!
//! A manipulator animates its target while the user drags it around. How it
//! does so is not this layer's business; the handle only promises that every
//! interaction goes through the capability contract of whatever view it was
//! parameterized with, so it works unchanged for leaves, adapters and
//! whole decorated chains.

use std::fmt;

use crate::canvas::Canvas;
use crate::component::Visual;
use crate::error::TranslationError;
use crate::geometry::Point;

/// Handle to a capability view of the component being manipulated.
pub struct ManipulatorHandle {
    target: Box<dyn Visual>,
}

impl ManipulatorHandle {
    pub fn new(target: Box<dyn Visual>) -> Self {
        Self { target }
    }

    /// Bounding corners of the manipulated component, for hit testing.
    pub fn grip(&self) -> Result<(Point, Point), TranslationError> {
        self.target.bounding_extent()
    }

    /// Whether there is anything to manipulate at all.
    pub fn has_content(&self) -> bool {
        !self.target.is_empty()
    }

    /// Repaint the target mid-drag.
    pub fn drag(&mut self, canvas: &mut Canvas) {
        self.target.draw(canvas);
    }
}

impl fmt::Debug for ManipulatorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManipulatorHandle").finish_non_exhaustive()
    }
}
