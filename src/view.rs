//! The repaint path: walk the grid, transform every cell, hand the raster to the display.

use std::sync::Arc;

use cgmath::Vector2;
use itertools::Itertools;

use crate::{
    command::{Command, Visitor},
    grid::Grid,
};

/// One fully-rendered raster, handed to the display collaborator once per paint.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a, T> {
    pub size: Vector2<u32>,
    /// Row-major, `size.x * size.y` values
    pub pixels: &'a [T],
}

/// The display/presentation collaborator.  It receives the raster only after the raster has been
/// fully written, so a partial repaint is never observable.
pub trait Present<T> {
    fn present(&mut self, frame: Frame<'_, T>);
}

/// Any closure over a [`Frame`] is a display.
impl<T, F: FnMut(Frame<'_, T>)> Present<T> for F {
    fn present(&mut self, frame: Frame<'_, T>) {
        self(frame)
    }
}

/// Owns the [`Grid`] and repaints it with whatever command is currently active.
///
/// The grid is built once and then mutated only by [`View::paint`], which re-applies the active
/// command to the values already stored.  Edits therefore compound across paints (painting twice
/// with a mask is harmless, painting twice with randomise randomises twice); there is no
/// reset-to-original path.
#[derive(Debug)]
pub struct View<T> {
    grid: Grid<T>,
    visitor: Visitor<T>,
    raster: Vec<T>,
}

impl<T: Clone + 'static> View<T> {
    /// Binds a view to an existing grid.  The visitor starts with the identity command, so
    /// painting before any selection presents the unmodified image.
    pub fn new(grid: Grid<T>) -> Self {
        let raster = grid.values().cloned().collect_vec();
        Self {
            grid,
            visitor: Visitor::new(),
            raster,
        }
    }

    /// Selects the command applied by subsequent [`View::paint`] calls.  Has no effect on
    /// already-presented output.
    pub fn set_command(&mut self, command: Arc<dyn Command<T>>) {
        self.visitor.set_command(command);
    }

    /// Walks every cell in row-major order exactly once, applies the active command to each,
    /// writes the transformed value into the raster at the same position, then presents the
    /// raster.
    pub fn paint(&mut self, display: &mut impl Present<T>) {
        let visitor = &self.visitor;
        for (node, out) in self.grid.cells_mut().zip_eq(self.raster.iter_mut()) {
            visitor.visit(node);
            *out = node.get().clone();
        }
        log::debug!(
            "painted {}x{} cells",
            self.grid.width(),
            self.grid.height()
        );
        display.present(Frame {
            size: self.grid.dimensions(),
            pixels: &self.raster,
        });
    }

    pub fn dimensions(&self) -> Vector2<u32> {
        self.grid.dimensions()
    }

    /// Read-only walk over the underlying model values, row-major.  Values can be inspected but
    /// the grid cannot be structurally mutated through this.
    pub fn model(&self) -> impl Iterator<Item = &T> {
        self.grid.values()
    }

    /// Copies the current model values into any caller-supplied collector.  The sink is a
    /// generic write-capable collaborator, unrelated to the grid's fixed-size cell storage.
    pub fn collect_model_into<S: Extend<T>>(&self, sink: &mut S) {
        sink.extend(self.grid.values().cloned());
    }

    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }
}
