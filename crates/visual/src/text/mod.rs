//! Text components and the adapters that let them join a visual composition.
//!
//! The text-layout machinery predates the capability contract and reports its
//! geometry as origin plus extent instead of a corner pair. The adapters in
//! [`adapter`] translate between the two surfaces.

pub mod adapter;
pub mod layout;

pub use adapter::{OwnedTextAdapter, SharedTextAdapter};
pub use layout::{LayoutHandle, TextBuffer, TextLayout};
