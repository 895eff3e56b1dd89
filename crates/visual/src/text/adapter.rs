//! Adapters translating the text-layout surface into the capability contract.
//!
//! Two variants with different binding and lifetime rules:
//!
//! - [`OwnedTextAdapter`] embeds one concrete [`TextBuffer`] by value. The
//!   binding is fixed at compile time to exactly that adaptee type, its state
//!   can never be absent, and the adapter cannot be retargeted.
//! - [`SharedTextAdapter`] holds an `Rc` to *any* [`TextLayout`]
//!   implementation, including ones this crate has never seen. The caller
//!   decides the adaptee's lifetime by keeping or dropping its own clone of
//!   the `Rc`, at the cost of one indirection.
//!
//! Given equal adaptee state the two variants are interchangeable: every
//! translated operation returns identical results.

use std::rc::Rc;

use tracing::trace;

use crate::canvas::Canvas;
use crate::component::Visual;
use crate::error::{ConstructionError, TranslationError};
use crate::geometry::{Extent, Point};
use crate::manipulator::ManipulatorHandle;
use crate::text::layout::{LayoutHandle, TextBuffer, TextLayout};

/// (origin, extent) -> (bottom-left, top-right), exactly.
///
/// An invalid extent is an adaptee bug; it is surfaced instead of clamped so
/// it cannot masquerade as a zero-sized component downstream.
fn corner_pair(origin: Point, extent: Extent) -> Result<(Point, Point), TranslationError> {
    if !extent.is_valid() {
        return Err(TranslationError::negative_extent(extent));
    }
    Ok((origin, origin + extent))
}

/// Adapter with embedded adaptee state.
#[derive(Debug, Clone)]
pub struct OwnedTextAdapter {
    text: TextBuffer,
}

impl OwnedTextAdapter {
    /// Takes the buffer by value; there is no absent-adaptee failure mode.
    pub fn new(text: TextBuffer) -> Self {
        Self { text }
    }
}

impl Visual for OwnedTextAdapter {
    fn bounding_extent(&self) -> Result<(Point, Point), TranslationError> {
        corner_pair(self.text.origin(), self.text.extent())
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The text machinery has no manipulator concept, so the handle is built
    /// from scratch around a capability view of this adapter.
    fn create_manipulator(&self) -> ManipulatorHandle {
        ManipulatorHandle::new(Box::new(self.clone()))
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        canvas.op("text");
    }

    fn resize(&mut self) {
        // The adaptee owns its geometry; there is nothing to recompute here.
        trace!("resize has no text-layout counterpart");
    }
}

/// Adapter composed with an independently-created adaptee.
pub struct SharedTextAdapter {
    layout: Rc<dyn TextLayout>,
}

impl SharedTextAdapter {
    pub fn new(layout: Rc<dyn TextLayout>) -> Self {
        Self { layout }
    }

    /// Build from a non-owning handle, failing fast when the adaptee is
    /// already gone — every later operation would be undefined otherwise.
    pub fn from_handle(handle: &LayoutHandle) -> Result<Self, ConstructionError> {
        let layout = handle.upgrade().ok_or(ConstructionError::AdapteeGone)?;
        Ok(Self { layout })
    }
}

impl Clone for SharedTextAdapter {
    fn clone(&self) -> Self {
        Self { layout: Rc::clone(&self.layout) }
    }
}

impl std::fmt::Debug for SharedTextAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedTextAdapter").finish_non_exhaustive()
    }
}

impl Visual for SharedTextAdapter {
    fn bounding_extent(&self) -> Result<(Point, Point), TranslationError> {
        corner_pair(self.layout.origin(), self.layout.extent())
    }

    fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Built from scratch like the owned variant; the view shares the same
    /// adaptee, never a copy of it.
    fn create_manipulator(&self) -> ManipulatorHandle {
        ManipulatorHandle::new(Box::new(self.clone()))
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        canvas.op("text");
    }

    fn resize(&mut self) {
        trace!("resize has no text-layout counterpart");
    }
}
