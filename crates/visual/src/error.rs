use crate::geometry::{Coord, Extent};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisualError {
    #[error("construction error: {source}")]
    Construction {
        #[from]
        source: ConstructionError,
    },

    #[error("translation error: {source}")]
    Translation {
        #[from]
        source: TranslationError,
    },
}

/// Building a composed component with nothing to wrap.
///
/// These are misuse errors: they are raised at the point of construction and
/// the half-built object is discarded, never handed back in a usable state.
#[derive(Error, Debug)]
pub enum ConstructionError {
    #[error("chain has no leaf component: a decorator needs something to decorate")]
    MissingLeaf,

    #[error("adaptee was already dropped, nothing left to adapt")]
    AdapteeGone,
}

/// Translating adaptee geometry into the capability surface failed.
#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("adaptee reported a negative extent: {width}x{height}")]
    NegativeExtent { width: Coord, height: Coord },
}

impl TranslationError {
    pub fn negative_extent(extent: Extent) -> Self {
        Self::NegativeExtent { width: extent.width, height: extent.height }
    }
}

/// Operating through a non-owning handle after its component was dropped.
#[derive(Error, Debug)]
#[error("component was already dropped, the handle is stale")]
pub struct StaleHandle;
