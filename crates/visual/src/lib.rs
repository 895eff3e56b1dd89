//! The visual capability layer
//!
//! This crate defines the capability contract every composable visual
//! component satisfies, together with the primitives needed to exercise it:
//! geometry values, a draw-op recorder, a plain leaf component, and the
//! adapters that pull a pre-existing text-layout surface into the contract.
//!
//! # Example
//!
//! ```rust
//! use micro_visual::{Canvas, Pane, Visual};
//!
//! let mut pane = Pane::new("hello");
//! let handle = pane.handle();
//!
//! let mut canvas = Canvas::new();
//! pane.draw(&mut canvas);
//! assert_eq!(canvas.ops(), ["pane(hello)"]);
//!
//! // Identity is independent of ownership: the handle keeps working
//! // no matter where the pane itself moves to.
//! handle.set_contents("updated").unwrap();
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several key modules:
//!
//! - [`component`]: The [`Visual`] capability trait itself
//! - [`geometry`]: Coordinates, points and extents
//! - [`canvas`]: The ordered draw-op recorder components paint onto
//! - [`pane`]: The leaf component and its non-owning identity handle
//! - [`text`]: The pre-existing text-layout surface and its adapters
//! - [`manipulator`]: The opaque manipulation handle components produce
//!
//! # Adaptation
//!
//! The text machinery reports geometry as origin plus extent; the capability
//! surface wants a corner pair. [`text::OwnedTextAdapter`] embeds its adaptee
//! by value, [`text::SharedTextAdapter`] composes with any [`text::TextLayout`]
//! implementation behind an `Rc`. Both translate exactly and surface invalid
//! adaptee geometry as [`error::TranslationError`] instead of clamping it.
//!
//! # Error Handling
//!
//! The crate uses custom error types that implement `std::error::Error`:
//!
//! - [`error::VisualError`]: Top-level error type
//! - [`error::ConstructionError`]: Building a composed component with nothing to wrap
//! - [`error::TranslationError`]: Invalid adaptee geometry during translation
//!
//! # Limitations
//!
//! - Single-threaded by design: components are neither `Send` nor `Sync`
//! - No rasterization; a [`Canvas`] records ordered draw ops and nothing else

pub mod canvas;
pub mod component;
pub mod error;
pub mod geometry;
pub mod manipulator;
pub mod pane;
pub mod text;

pub use canvas::Canvas;
pub use component::Visual;
pub use error::{ConstructionError, StaleHandle, TranslationError, VisualError};
pub use geometry::{Coord, Extent, Point};
pub use manipulator::ManipulatorHandle;
pub use pane::{Pane, PaneRef};
