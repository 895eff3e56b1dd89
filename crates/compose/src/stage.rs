//! The stage: where assembled chains get used.
//!
//! A [`Stage`] holds its contents purely as a [`BoxVisual`] and talks to them
//! through the capability contract alone — it cannot tell a bare leaf from a
//! ten-layer chain, and it never downcasts. A caller that needs leaf-only
//! access keeps the leaf's own handle from before the wrapping; the stage is
//! no help there, on purpose.

use std::fmt;

use tracing::{info, warn};

use micro_visual::error::TranslationError;
use micro_visual::{Canvas, ManipulatorHandle, Point, Visual};

use crate::chain::BoxVisual;

/// Displays one composed visual, however it was assembled.
#[derive(Default)]
pub struct Stage {
    contents: Option<BoxVisual>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the stage contents, dropping (and thereby tearing down) any
    /// previous chain.
    pub fn set_contents(&mut self, contents: BoxVisual) {
        self.contents = Some(contents);
    }

    /// Paint the contents onto a fresh canvas.
    pub fn render(&mut self) -> Canvas {
        let mut canvas = Canvas::new();
        match &mut self.contents {
            Some(contents) => {
                contents.draw(&mut canvas);
                info!(ops = canvas.ops().len(), "stage rendered");
            }
            None => warn!("stage is empty, nothing to render"),
        }
        canvas
    }

    pub fn resize_contents(&mut self) {
        if let Some(contents) = &mut self.contents {
            contents.resize();
        }
    }

    pub fn contents_extent(&self) -> Option<Result<(Point, Point), TranslationError>> {
        self.contents.as_ref().map(Visual::bounding_extent)
    }

    pub fn manipulator(&self) -> Option<ManipulatorHandle> {
        self.contents.as_ref().map(Visual::create_manipulator)
    }
}

impl fmt::Debug for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage").field("occupied", &self.contents.is_some()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ChainBuilder;
    use crate::layer::{BorderLayer, ScrollLayer};
    use micro_visual::Pane;

    #[test]
    fn empty_stage_renders_a_blank_canvas() {
        let mut stage = Stage::new();
        assert!(stage.render().is_blank());
        assert!(stage.contents_extent().is_none());
        assert!(stage.manipulator().is_none());
    }

    #[test]
    fn stage_is_unaware_of_composition_depth() {
        let mut stage = Stage::new();
        stage.set_contents(Box::new(Pane::new("bare")));
        assert_eq!(stage.render().ops(), ["pane(bare)"]);

        let chain = ChainBuilder::new()
            .leaf(Pane::new("deep"))
            .layer(ScrollLayer)
            .layer(BorderLayer { width: 1.0 })
            .build()
            .unwrap();
        stage.set_contents(chain);
        assert_eq!(stage.render().ops(), ["scroll:0,0", "pane(deep)", "border:1"]);
    }

    #[test]
    fn leaf_handle_reaches_through_the_staged_chain() {
        let pane = Pane::new("before");
        let handle = pane.handle();

        let mut stage = Stage::new();
        stage.set_contents(
            ChainBuilder::new().leaf(pane).layer(BorderLayer { width: 2.0 }).build().unwrap(),
        );

        // The client kept the handle from before the wrapping; the stage
        // itself offers no way to reach the leaf.
        handle.set_contents("after").unwrap();
        assert_eq!(stage.render().ops(), ["pane(after)", "border:2"]);
    }

    #[test]
    fn replacing_contents_tears_down_the_old_chain() {
        let pane = Pane::new("old");
        let handle = pane.handle();

        let mut stage = Stage::new();
        stage.set_contents(Box::new(pane));
        assert!(handle.is_attached());

        stage.set_contents(Box::new(Pane::new("new")));
        assert!(!handle.is_attached());
    }
}
