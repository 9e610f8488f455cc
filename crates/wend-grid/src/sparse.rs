//! Sparse unbounded grid backed by a coordinate-keyed map.

use crate::dense::DenseGrid;
use indexmap::IndexMap;
use wend_core::{Bounds, GridError, Point};

/// A sparse grid where only touched cells exist.
///
/// Use this when the coordinate space is effectively unbounded and
/// only a small, unpredictable subset of cells is ever written — a
/// maze built by exploration, say — and a [`DenseGrid`] allocation
/// would be wasteful or impossible.
///
/// There is no out-of-bounds concept: every coordinate is addressable,
/// and reads of untouched cells return the background. Storage is an
/// [`IndexMap`], so iteration order is insertion order and therefore
/// deterministic.
///
/// # Examples
///
/// ```
/// use wend_core::Point;
/// use wend_grid::SparseGrid;
///
/// let mut maze = SparseGrid::new(b'#');
/// maze.set(Point::new(1_000_000, -7), b'.');
/// assert_eq!(*maze.get(Point::new(1_000_000, -7)), b'.');
/// assert_eq!(*maze.get(Point::new(0, 0)), b'#');
/// ```
#[derive(Clone, Debug)]
pub struct SparseGrid<T> {
    background: T,
    cells: IndexMap<Point, T>,
}

impl<T: Clone + PartialEq> SparseGrid<T> {
    /// Create an empty grid with the given background value.
    pub fn new(background: T) -> Self {
        SparseGrid {
            background,
            cells: IndexMap::new(),
        }
    }

    /// The background value supplied at construction.
    pub fn background(&self) -> &T {
        &self.background
    }

    /// Read the cell at `p`; untouched cells read as the background.
    pub fn get(&self, p: Point) -> &T {
        self.cells.get(&p).unwrap_or(&self.background)
    }

    /// Write `value` at `p`. Writing the background removes the entry,
    /// so storage stays proportional to the non-background cell count.
    pub fn set(&mut self, p: Point, value: T) {
        if value == self.background {
            self.cells.shift_remove(&p);
        } else {
            self.cells.insert(p, value);
        }
    }

    /// Number of non-background cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether every cell is the background.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Tight bounding box of the non-background cells, or `None` when
    /// empty. O(cells), unlike the dense grid's O(1) tracked bounds.
    pub fn active_bounds(&self) -> Option<Bounds> {
        let mut points = self.cells.keys();
        let first = *points.next()?;
        let mut min = first;
        let mut max = first;
        for &p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Bounds::new(
            min,
            (max.x - min.x + 1) as u32,
            (max.y - min.y + 1) as u32,
        ))
    }

    /// Iterate over the non-background cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.cells.iter().map(|(&p, v)| (p, v))
    }

    /// Count non-background cells satisfying `pred`.
    pub fn count_where(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.cells.values().filter(|c| pred(c)).count()
    }

    /// Materialize the active region as a [`DenseGrid`].
    ///
    /// Fails with [`GridError::EmptyBounds`] when no cell was written.
    pub fn to_dense(&self) -> Result<DenseGrid<T>, GridError> {
        let bounds = self.active_bounds().ok_or(GridError::EmptyBounds)?;
        let mut dense = DenseGrid::new(bounds, self.background.clone())?;
        for (p, v) in self.iter() {
            dense.set(p, v.clone())?;
        }
        Ok(dense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_cells_read_background() {
        let g: SparseGrid<u8> = SparseGrid::new(b'#');
        assert_eq!(*g.get(Point::new(5, -3)), b'#');
        assert!(g.is_empty());
    }

    #[test]
    fn background_write_removes_entry() {
        let mut g = SparseGrid::new(0u8);
        g.set(Point::new(1, 1), 9);
        assert_eq!(g.len(), 1);
        g.set(Point::new(1, 1), 0);
        assert_eq!(g.len(), 0);
        assert_eq!(g.active_bounds(), None);
    }

    #[test]
    fn active_bounds_are_tight() {
        let mut g = SparseGrid::new(0u8);
        g.set(Point::new(-3, 2), 1);
        g.set(Point::new(5, -1), 1);
        assert_eq!(
            g.active_bounds(),
            Some(Bounds::new(Point::new(-3, -1), 9, 4))
        );
    }

    #[test]
    fn far_flung_cells_stay_cheap() {
        let mut g = SparseGrid::new(0u8);
        g.set(Point::new(-1_000_000_000, 0), 1);
        g.set(Point::new(1_000_000_000, 0), 2);
        assert_eq!(g.len(), 2);
        assert_eq!(*g.get(Point::new(1_000_000_000, 0)), 2);
    }

    #[test]
    fn to_dense_matches_sparse_contents() {
        let mut g = SparseGrid::new(b'.');
        g.set(Point::new(2, 2), b'#');
        g.set(Point::new(4, 3), b'#');
        let dense = g.to_dense().unwrap();
        assert_eq!(dense.bounds(), Bounds::new(Point::new(2, 2), 3, 2));
        for p in dense.bounds().points() {
            assert_eq!(dense.get(p).unwrap(), g.get(p));
        }
    }

    #[test]
    fn to_dense_empty_fails() {
        let g: SparseGrid<u8> = SparseGrid::new(0);
        assert_eq!(g.to_dense().unwrap_err(), GridError::EmptyBounds);
    }
}
