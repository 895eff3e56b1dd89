//! Chain assembly at the type level.
//!
//! A [`Layer`] is a factory that wraps one component into its decorated form.
//! [`Layers`] strings factories together innermost-first: the layer added
//! first wraps closest to the leaf, the layer added last ends up outermost.
//! The resulting chain type is fixed at compile time with no boxing; see
//! [`crate::chain`] for the runtime-assembled counterpart.

use std::marker::PhantomData;

use micro_visual::{Coord, Visual};

use crate::decorator::{Border, DropShadow, Scroll};

/// A factory that can wrap one component into another.
pub trait Layer<V: Visual> {
    /// The wrapped form this factory produces.
    type Out: Visual;

    /// Wrap `inner`, taking ownership of it.
    fn apply(&self, inner: V) -> Self::Out;
}

/// A list of [`Layer`]s applied innermost-first.
pub struct Layers<Head, Tail, V> {
    head: Head,
    tail: Tail,
    _phantom: PhantomData<V>,
}

/// An identity layer list, which does not wrap at all.
pub type IdentityLayers<V> = Layers<IdentityLayer, IdentityLayer, V>;

impl<V> IdentityLayers<V> {
    fn new() -> Self {
        Self { head: IdentityLayer, tail: IdentityLayer, _phantom: PhantomData }
    }
}

impl<V> Default for IdentityLayers<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// The identity layer, which hands its component back untouched.
#[derive(Default, Clone, Copy, Debug)]
pub struct IdentityLayer;

impl<V: Visual> Layer<V> for IdentityLayer {
    type Out = V;

    #[inline]
    fn apply(&self, inner: V) -> Self::Out {
        inner
    }
}

impl<Head, Tail, V> Layers<Head, Tail, V>
where
    V: Visual,
    Head: Layer<V>,
    Tail: Layer<Head::Out>,
{
    /// Add a [`Layer`] to the end of the list; it will wrap outermost so far.
    pub fn and_then<NewL>(self, layer: NewL) -> Layers<Self, NewL, V>
    where
        NewL: Layer<Tail::Out>,
    {
        Layers { head: self, tail: layer, _phantom: PhantomData }
    }
}

impl<Head, Tail, V> Layer<V> for Layers<Head, Tail, V>
where
    V: Visual,
    Head: Layer<V>,
    Tail: Layer<Head::Out>,
{
    type Out = Tail::Out;

    fn apply(&self, inner: V) -> Self::Out {
        let wrapped = self.head.apply(inner);
        self.tail.apply(wrapped)
    }
}

/// Factory for [`Border`] with a fixed frame width.
#[derive(Debug, Clone, Copy)]
pub struct BorderLayer {
    pub width: Coord,
}

impl<V: Visual> Layer<V> for BorderLayer {
    type Out = Border<V>;

    fn apply(&self, inner: V) -> Self::Out {
        Border::new(inner, self.width)
    }
}

/// Factory for [`Scroll`], starting unscrolled.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollLayer;

impl<V: Visual> Layer<V> for ScrollLayer {
    type Out = Scroll<V>;

    fn apply(&self, inner: V) -> Self::Out {
        Scroll::new(inner)
    }
}

/// Factory for [`DropShadow`] with a fixed depth.
#[derive(Debug, Clone, Copy)]
pub struct ShadowLayer {
    pub depth: Coord,
}

impl<V: Visual> Layer<V> for ShadowLayer {
    type Out = DropShadow<V>;

    fn apply(&self, inner: V) -> Self::Out {
        DropShadow::new(inner, self.depth)
    }
}
