//! The plain leaf component and its non-owning identity handle.
//!
//! A [`Pane`] is the single ownership token for its state: it is not `Clone`,
//! and moving it into a wrapping layer moves ownership of the whole leaf with
//! it. Anyone who needs to keep talking to the leaf after it disappears into
//! a chain takes a [`PaneRef`] *before* handing the pane over. The handle
//! never owns, so it cannot extend the leaf's life; once the owning chain is
//! dropped the handle reports [`StaleHandle`] instead of dangling.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::canvas::Canvas;
use crate::component::Visual;
use crate::error::{StaleHandle, TranslationError};
use crate::geometry::{Coord, Extent, Point};
use crate::manipulator::ManipulatorHandle;

const GLYPH_WIDTH: Coord = 8.0;
const LINE_HEIGHT: Coord = 16.0;

#[derive(Debug)]
struct PaneState {
    contents: String,
    origin: Point,
    extent: Extent,
}

/// A leaf component holding a single run of text.
#[derive(Debug)]
pub struct Pane {
    state: Rc<RefCell<PaneState>>,
}

impl Pane {
    pub fn new(contents: impl Into<String>) -> Self {
        let contents = contents.into();
        let extent = fit_extent(&contents);
        Self {
            state: Rc::new(RefCell::new(PaneState {
                contents,
                origin: Point::default(),
                extent,
            })),
        }
    }

    pub fn move_to(&mut self, origin: Point) {
        self.state.borrow_mut().origin = origin;
    }

    /// A non-owning handle that stays usable while the pane is alive,
    /// wherever ownership of the pane itself has moved to.
    pub fn handle(&self) -> PaneRef {
        PaneRef { state: Rc::downgrade(&self.state) }
    }
}

fn fit_extent(contents: &str) -> Extent {
    Extent::new(contents.chars().count() as Coord * GLYPH_WIDTH, LINE_HEIGHT)
}

impl Visual for Pane {
    fn bounding_extent(&self) -> Result<(Point, Point), TranslationError> {
        let state = self.state.borrow();
        Ok((state.origin, state.origin + state.extent))
    }

    fn is_empty(&self) -> bool {
        self.state.borrow().contents.is_empty()
    }

    fn create_manipulator(&self) -> ManipulatorHandle {
        ManipulatorHandle::new(Box::new(Pane { state: Rc::clone(&self.state) }))
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        canvas.op(format!("pane({})", self.state.borrow().contents));
    }

    /// Snap the extent back to what the current contents need.
    fn resize(&mut self) {
        let mut state = self.state.borrow_mut();
        state.extent = fit_extent(&state.contents);
        trace!(extent = %state.extent, "pane resized to fit contents");
    }
}

/// Non-owning reference to a [`Pane`], independent of any wrapping around it.
///
/// This is the identity-preservation seam: wrapping a pane in any number of
/// layers neither invalidates existing handles nor requires downcasting the
/// chain head to reach leaf-only operations like [`PaneRef::set_contents`].
#[derive(Debug, Clone)]
pub struct PaneRef {
    state: Weak<RefCell<PaneState>>,
}

impl PaneRef {
    pub fn contents(&self) -> Result<String, StaleHandle> {
        let state = self.state.upgrade().ok_or(StaleHandle)?;
        let contents = state.borrow().contents.clone();
        Ok(contents)
    }

    pub fn set_contents(&self, contents: impl Into<String>) -> Result<(), StaleHandle> {
        let state = self.state.upgrade().ok_or(StaleHandle)?;
        state.borrow_mut().contents = contents.into();
        Ok(())
    }

    /// Whether the pane this handle points at is still alive.
    pub fn is_attached(&self) -> bool {
        self.state.strong_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_tracks_contents() {
        let pane = Pane::new("abcd");
        let (bottom_left, top_right) = pane.bounding_extent().unwrap();
        assert_eq!(bottom_left, Point::new(0.0, 0.0));
        assert_eq!(top_right, Point::new(32.0, 16.0));
    }

    #[test]
    fn move_to_shifts_the_bounding_corners() {
        let mut pane = Pane::new("abcd");
        pane.move_to(Point::new(100.0, 50.0));

        let (bottom_left, top_right) = pane.bounding_extent().unwrap();
        assert_eq!(bottom_left, Point::new(100.0, 50.0));
        assert_eq!(top_right, Point::new(132.0, 66.0));
    }

    #[test]
    fn resize_refits_after_contents_change() {
        let pane = Pane::new("ab");
        let handle = pane.handle();
        let mut pane = pane;

        handle.set_contents("abcdef").unwrap();
        pane.resize();

        let (_, top_right) = pane.bounding_extent().unwrap();
        assert_eq!(top_right, Point::new(48.0, 16.0));
    }

    #[test]
    fn handle_survives_moves_but_not_the_pane() {
        let pane = Pane::new("hello");
        let handle = pane.handle();

        // Moving the pane moves ownership, not identity.
        let moved = pane;
        assert!(handle.is_attached());
        assert_eq!(handle.contents().unwrap(), "hello");

        drop(moved);
        assert!(!handle.is_attached());
        assert!(handle.contents().is_err());
        assert!(handle.set_contents("x").is_err());
    }

    #[test]
    fn draw_reflects_contents_set_through_the_handle() {
        let mut pane = Pane::new("old");
        let handle = pane.handle();
        handle.set_contents("new").unwrap();

        let mut canvas = Canvas::new();
        pane.draw(&mut canvas);
        assert_eq!(canvas.ops(), ["pane(new)"]);
    }

    #[test]
    fn empty_pane_is_empty() {
        assert!(Pane::new("").is_empty());
        assert!(!Pane::new("x").is_empty());
    }

    #[test]
    fn manipulator_targets_the_same_pane() {
        let pane = Pane::new("grab me");
        let handle = pane.handle();
        let mut manipulator = pane.create_manipulator();

        handle.set_contents("grabbed").unwrap();
        let mut canvas = Canvas::new();
        manipulator.drag(&mut canvas);
        assert_eq!(canvas.ops(), ["pane(grabbed)"]);
    }
}
