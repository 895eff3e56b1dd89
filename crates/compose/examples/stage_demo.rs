use std::rc::Rc;

use micro_compose::chain::ChainBuilder;
use micro_compose::layer::{BorderLayer, ScrollLayer, ShadowLayer};
use micro_compose::stage::Stage;
use micro_visual::text::{SharedTextAdapter, TextBuffer, TextLayout};
use micro_visual::{Extent, Pane, Point, Visual};

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // A decorated pane on the stage; the handle keeps direct leaf access.
    let pane = Pane::new("hello, stage");
    let handle = pane.handle();

    let chain = ChainBuilder::new()
        .leaf(pane)
        .layer(ShadowLayer { depth: 4.0 })
        .layer(ScrollLayer)
        .layer(BorderLayer { width: 1.0 })
        .build()
        .expect("chain has a leaf");

    let mut stage = Stage::new();
    stage.set_contents(chain);
    info!(ops = ?stage.render().ops(), "decorated pane");

    handle.set_contents("updated through the handle").expect("pane is still staged");
    info!(ops = ?stage.render().ops(), "after leaf update");

    // Adapted text content: the stage consumes it like any other component.
    let layout: Rc<dyn TextLayout> =
        Rc::new(TextBuffer::new(Point::new(10.0, 10.0), Extent::new(120.0, 16.0), "adapted"));
    let adapter = SharedTextAdapter::new(Rc::clone(&layout));
    info!(corners = ?adapter.bounding_extent().expect("extent is valid"), "adapter translation");

    stage.set_contents(ChainBuilder::new().leaf(adapter).layer(BorderLayer { width: 2.0 }).build().expect("chain has a leaf"));
    info!(ops = ?stage.render().ops(), "adapted text on stage");
}
