//! Core of a tiny interactive image editor: a generic pixel grid, runtime-swappable per-pixel
//! commands, and a repaint path that applies the active command to every cell and hands the
//! resulting raster to a display collaborator.
//!
//! The interesting part is the abstraction boundary: the [`Grid`] is decoupled from the
//! operation applied to its elements, and new [`Command`]s can be added without touching the
//! container or the rendering path.  Window creation, toolbars and event loops are external
//! glue; a controller drives this core through exactly [`View::set_command`] and
//! [`View::paint`], plus read-only model inspection.

pub mod argb;
pub mod command;
pub mod error;
pub mod grid;
pub mod node;
pub mod source;
pub mod view;

pub use command::{built_ins, CmdIdx, Command, Palette, Visitor};
pub use error::Error;
pub use grid::Grid;
pub use node::Node;
pub use source::{BufferSource, PixelSource};
pub use view::{Frame, Present, View};
