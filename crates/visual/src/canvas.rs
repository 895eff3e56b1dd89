//! The draw-op recorder every `draw` call renders onto.
//!
//! Real rasterization lives outside this crate; what matters here is the
//! *order* in which components paint, because wrapping layers interleave
//! their ops with the wrapped component's ops. The canvas keeps that order
//! observable.

use tracing::trace;

/// An ordered record of draw operations.
#[derive(Debug, Default)]
pub struct Canvas {
    ops: Vec<String>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one draw operation.
    pub fn op(&mut self, op: impl Into<String>) {
        let op = op.into();
        trace!(%op, "canvas op");
        self.ops.push(op);
    }

    /// Ops recorded so far, oldest first.
    pub fn ops(&self) -> &[String] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<String> {
        self.ops
    }

    pub fn is_blank(&self) -> bool {
        self.ops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_ops_in_order() {
        let mut canvas = Canvas::new();
        assert!(canvas.is_blank());

        canvas.op("first");
        canvas.op(String::from("second"));

        assert_eq!(canvas.ops(), ["first", "second"]);
        assert_eq!(canvas.into_ops(), vec!["first", "second"]);
    }
}
