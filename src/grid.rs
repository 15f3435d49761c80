use cgmath::Vector2;
use itertools::Itertools;

use crate::{error::Error, node::Node, source::PixelSource};

/// A fixed-size rectangular array of [`Node`]s, one per source pixel, stored row-major.
///
/// The `Grid` is a purely structural component: it exposes checked cell access and a read-only
/// walk over its values, but no bulk operations.  Transform-all lives in the
/// [`View`](crate::View), which keeps the `Grid` reusable for any element type.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    size: Vector2<u32>,
    // Invariant: cells.len() == size.x * size.y, row-major
    cells: Vec<Node<T>>,
}

impl<T> Grid<T> {
    /// Builds a `Grid` by reading every pixel of `source` exactly once.
    ///
    /// Fails with [`Error::InvalidDimension`] (allocating nothing) if either dimension is zero;
    /// the dimensions are immutable afterwards.
    pub fn from_source<S: PixelSource<Pixel = T>>(source: &S) -> Result<Self, Error> {
        let size = source.dimensions();
        if size.x == 0 || size.y == 0 {
            return Err(Error::InvalidDimension {
                width: size.x,
                height: size.y,
            });
        }
        // Row-major: y is the outer loop, matching the source raster's (x, y) layout
        let cells = (0..size.y)
            .cartesian_product(0..size.x)
            .map(|(y, x)| Node::new(source.pixel(x, y)))
            .collect_vec();
        log::debug!("built {}x{} grid ({} cells)", size.x, size.y, cells.len());
        Ok(Self { size, cells })
    }

    pub fn dimensions(&self) -> Vector2<u32> {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.x
    }

    pub fn height(&self) -> u32 {
        self.size.y
    }

    /// Borrows the cell at `(row, col)`, failing with [`Error::IndexOutOfRange`] if either
    /// coordinate is outside the declared bounds.
    pub fn at(&self, row: u32, col: u32) -> Result<&Node<T>, Error> {
        let idx = self.index_of(row, col)?;
        Ok(&self.cells[idx])
    }

    /// Mutable counterpart of [`Grid::at`].  The value behind the returned reference can be
    /// replaced; the cell itself cannot be removed.
    pub fn at_mut(&mut self, row: u32, col: u32) -> Result<&mut Node<T>, Error> {
        let idx = self.index_of(row, col)?;
        Ok(&mut self.cells[idx])
    }

    /// Read-only walk over the stored values, row-major.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.cells.iter().map(Node::get)
    }

    /// Row-major walk over the cells, used by the repaint path.
    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Node<T>> {
        self.cells.iter_mut()
    }

    fn index_of(&self, row: u32, col: u32) -> Result<usize, Error> {
        if row >= self.size.y || col >= self.size.x {
            return Err(Error::IndexOutOfRange {
                row,
                col,
                width: self.size.x,
                height: self.size.y,
            });
        }
        Ok((row * self.size.x + col) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::BufferSource;

    #[test]
    fn construction_reads_every_pixel_once() {
        // 3x2 grid whose pixel values encode their own coordinates
        let source = BufferSource::new(3, 2, vec![0u32, 1, 2, 10, 11, 12]);
        let grid = Grid::from_source(&source).unwrap();
        assert_eq!(grid.dimensions(), Vector2::new(3, 2));
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(*grid.at(row, col).unwrap().get(), row * 10 + col);
            }
        }
        assert_eq!(grid.values().count(), 6);
    }

    #[test]
    fn zero_width_is_rejected() {
        let source = BufferSource::<u32>::new(0, 4, vec![]);
        assert_eq!(
            Grid::from_source(&source),
            Err(Error::InvalidDimension {
                width: 0,
                height: 4
            })
        );
    }

    #[test]
    fn out_of_range_access_is_surfaced() {
        let source = BufferSource::new(2, 2, vec![0u32; 4]);
        let mut grid = Grid::from_source(&source).unwrap();
        assert_eq!(
            grid.at(2, 0),
            Err(Error::IndexOutOfRange {
                row: 2,
                col: 0,
                width: 2,
                height: 2
            })
        );
        assert!(grid.at(0, 2).is_err());
        assert!(grid.at_mut(5, 5).is_err());
    }

    #[test]
    fn cell_values_can_be_replaced_in_place() {
        let source = BufferSource::new(2, 2, vec![0u32; 4]);
        let mut grid = Grid::from_source(&source).unwrap();
        grid.at_mut(1, 0).unwrap().set(42);
        assert_eq!(*grid.at(1, 0).unwrap().get(), 42);
        // No other cell was touched
        assert_eq!(grid.values().copied().collect_vec(), vec![0, 0, 42, 0]);
    }
}
