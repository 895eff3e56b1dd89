//! The composition layer
//!
//! This crate assembles conforming visual components into chains: decorating
//! layers wrap any [`Visual`](micro_visual::Visual) and forward what they do
//! not override, so a chain head is substitutable anywhere its leaf was.
//!
//! Two assembly styles are provided:
//!
//! - [`layer::Layers`] — type-level, zero boxing, chain shape fixed at
//!   compile time
//! - [`chain::ChainBuilder`] — runtime, boxed nodes, layer stack decided
//!   dynamically
//!
//! The [`stage::Stage`] consumes whatever either style produces, through the
//! capability contract alone.
//!
//! # Example
//!
//! ```rust
//! use micro_compose::chain::ChainBuilder;
//! use micro_compose::layer::{BorderLayer, ScrollLayer};
//! use micro_compose::stage::Stage;
//! use micro_visual::Pane;
//!
//! let pane = Pane::new("hello");
//! let handle = pane.handle(); // kept from before the wrapping
//!
//! let chain = ChainBuilder::new()
//!     .leaf(pane)
//!     .layer(ScrollLayer)
//!     .layer(BorderLayer { width: 1.0 })
//!     .build()
//!     .unwrap();
//!
//! let mut stage = Stage::new();
//! stage.set_contents(chain);
//! assert_eq!(stage.render().ops(), ["scroll:0,0", "pane(hello)", "border:1"]);
//!
//! // Decoration did not touch the leaf's identity.
//! handle.set_contents("updated").unwrap();
//! assert_eq!(stage.render().ops(), ["scroll:0,0", "pane(updated)", "border:1"]);
//! ```

pub mod chain;
pub mod decorator;
pub mod layer;
pub mod stage;

pub use chain::{BoxVisual, ChainBuilder, DynLayer};
pub use decorator::{Border, Decorated, DropShadow, Scroll};
pub use layer::{BorderLayer, IdentityLayer, Layer, Layers, ScrollLayer, ShadowLayer};
pub use stage::Stage;
