use thiserror::Error;

/// Errors raised by the pixel grid.
///
/// There are no transient failures here: everything is in-memory, so an error always means the
/// caller handed us something structurally wrong.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A grid was requested with a zero dimension.  No cells are allocated in this case.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// A cell access was outside the grid's declared bounds.  Given a correctly sized grid this
    /// should be unreachable, so it is surfaced rather than clamped.
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    IndexOutOfRange {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },
}
