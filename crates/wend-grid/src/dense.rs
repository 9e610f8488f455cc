//! Dense bounded grid with an internal origin offset.

use wend_core::{Bounds, GridError, Point};

/// A dense 2D grid of cells over a rectangular coordinate range.
///
/// The addressable region need not be zero-based: exposed coordinates
/// are absolute, and the internal origin offset is invisible to
/// callers. Access outside the declared bounds is a contract violation
/// ([`GridError::OutOfBounds`]).
///
/// Every grid carries a *background* value: the fill for untouched
/// cells and the definition of "inactive" for active-region tracking.
/// [`set`](DenseGrid::set) grows the active bounds in O(1) whenever a
/// non-background value lands outside them; they never shrink.
///
/// # Examples
///
/// ```
/// use wend_core::{Bounds, Point};
/// use wend_grid::DenseGrid;
///
/// let bounds = Bounds::new(Point::new(-2, -2), 5, 5);
/// let mut grid = DenseGrid::new(bounds, b'.').unwrap();
/// grid.set(Point::new(0, 0), b'#').unwrap();
/// assert_eq!(grid.get(Point::new(0, 0)), Ok(&b'#'));
/// assert_eq!(grid.get(Point::new(-2, 1)), Ok(&b'.'));
/// assert!(grid.get(Point::new(3, 0)).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct DenseGrid<T> {
    bounds: Bounds,
    background: T,
    cells: Vec<T>,
    active: Option<Bounds>,
}

impl<T: Clone + PartialEq> DenseGrid<T> {
    /// Create a grid covering `bounds`, every cell set to `background`.
    ///
    /// Returns `Err(GridError::EmptyBounds)` for a zero-area rectangle.
    pub fn new(bounds: Bounds, background: T) -> Result<Self, GridError> {
        if bounds.is_empty() {
            return Err(GridError::EmptyBounds);
        }
        let cells = vec![background.clone(); bounds.area()];
        Ok(DenseGrid {
            bounds,
            background,
            cells,
            active: None,
        })
    }

    /// The declared coordinate bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The background value supplied at construction.
    pub fn background(&self) -> &T {
        &self.background
    }

    /// Bounding box of every non-background value ever written, or
    /// `None` if no such write happened.
    ///
    /// This is an over-approximation that only grows: writing the
    /// background over an active cell does not contract it. A grid
    /// produced by a fresh generation (one `new` plus `set` calls) has
    /// tight active bounds.
    pub fn active_bounds(&self) -> Option<Bounds> {
        self.active
    }

    fn index(&self, p: Point) -> Result<usize, GridError> {
        if !self.bounds.contains(p) {
            return Err(GridError::OutOfBounds {
                point: p,
                bounds: self.bounds,
            });
        }
        let dx = (p.x - self.bounds.min.x) as usize;
        let dy = (p.y - self.bounds.min.y) as usize;
        Ok(dy * self.bounds.width as usize + dx)
    }

    /// Read the cell at `p`.
    pub fn get(&self, p: Point) -> Result<&T, GridError> {
        let i = self.index(p)?;
        Ok(&self.cells[i])
    }

    /// Read the cell at `p`, or the background if `p` is out of
    /// bounds. Convenient for neighbourhood sampling at the border.
    pub fn get_or_background(&self, p: Point) -> &T {
        match self.index(p) {
            Ok(i) => &self.cells[i],
            Err(_) => &self.background,
        }
    }

    /// Write `value` at `p`, growing the active bounds if the value is
    /// non-background.
    pub fn set(&mut self, p: Point, value: T) -> Result<(), GridError> {
        let i = self.index(p)?;
        if value != self.background {
            let cell = Bounds::new(p, 1, 1);
            self.active = Some(match self.active {
                Some(active) => active.union(&cell),
                None => cell,
            });
        }
        self.cells[i] = value;
        Ok(())
    }

    /// A background-filled grid with the same bounds and background.
    ///
    /// The usual starting point for writing the next generation of a
    /// fixed-bounds simulation.
    pub fn cleared(&self) -> DenseGrid<T> {
        DenseGrid {
            bounds: self.bounds,
            background: self.background.clone(),
            cells: vec![self.background.clone(); self.bounds.area()],
            active: None,
        }
    }

    /// Produce a grid covering `new_bounds`: the overlapping region is
    /// copied, newly exposed cells get the background.
    ///
    /// This is the re-centering operation for simulations whose active
    /// region drifts — grow or slide the addressable window without
    /// changing any exposed coordinate.
    pub fn resize(&self, new_bounds: Bounds) -> Result<DenseGrid<T>, GridError> {
        let mut out = DenseGrid::new(new_bounds, self.background.clone())?;
        if let Some(overlap) = self.bounds.intersection(&new_bounds) {
            for p in overlap.points() {
                let value = self.get(p)?.clone();
                out.set(p, value)?;
            }
        }
        Ok(out)
    }

    /// The same cells with all coordinates (bounds and active region)
    /// shifted by `delta`.
    pub fn translated(&self, delta: Point) -> DenseGrid<T> {
        DenseGrid {
            bounds: self.bounds.translated(delta),
            background: self.background.clone(),
            cells: self.cells.clone(),
            active: self.active.map(|a| a.translated(delta)),
        }
    }

    /// Compare against `other` up to a uniform translation.
    ///
    /// Matches when the two active regions have equal dimensions and
    /// identical cell contents relative to their own origins; returns
    /// the offset that carries `other`'s active region onto `self`'s.
    /// Two all-background grids match with zero offset.
    ///
    /// Cells outside the active regions are not compared — by the
    /// active-bounds contract they hold only the background.
    pub fn shift_from(&self, other: &DenseGrid<T>) -> Option<Point> {
        match (self.active, other.active) {
            (None, None) => Some(Point::ORIGIN),
            (Some(a), Some(b)) => {
                if a.width != b.width || a.height != b.height {
                    return None;
                }
                let offset = a.min - b.min;
                for p in b.points() {
                    if self.get_or_background(p + offset) != other.get_or_background(p) {
                        return None;
                    }
                }
                Some(offset)
            }
            _ => None,
        }
    }

    /// Set every cell in `region` to `value`.
    ///
    /// `region` must lie inside the grid bounds; an out-of-range corner
    /// fails with [`GridError::OutOfBounds`] and leaves the grid
    /// unmodified.
    pub fn fill_region(&mut self, region: Bounds, value: T) -> Result<(), GridError> {
        if !region.is_empty() {
            self.index(region.min)?;
            self.index(Point::new(region.max_x() - 1, region.max_y() - 1))?;
        }
        for p in region.points() {
            self.set(p, value.clone())?;
        }
        Ok(())
    }

    /// Build a grid over the same bounds by transforming every cell.
    ///
    /// `background` is the new grid's background; active bounds are
    /// recomputed from the mapped values, so they come out tight.
    pub fn map<U, F>(&self, background: U, f: F) -> DenseGrid<U>
    where
        U: Clone + PartialEq,
        F: Fn(Point, &T) -> U,
    {
        let mut active: Option<Bounds> = None;
        let mut cells = Vec::with_capacity(self.cells.len());
        for (p, cell) in self.iter() {
            let value = f(p, cell);
            if value != background {
                let one = Bounds::new(p, 1, 1);
                active = Some(match active {
                    Some(a) => a.union(&one),
                    None => one,
                });
            }
            cells.push(value);
        }
        DenseGrid {
            bounds: self.bounds,
            background,
            cells,
            active,
        }
    }

    /// Iterate over `(coordinate, cell)` pairs in reading order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.bounds.points().zip(self.cells.iter())
    }

    /// Count cells satisfying `pred`.
    pub fn count_where(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.cells.iter().filter(|c| pred(c)).count()
    }
}

impl<T: PartialEq> PartialEq for DenseGrid<T> {
    /// Exact equality: identical bounds, background, and cells. The
    /// active-bounds over-approximation is deliberately excluded.
    fn eq(&self, other: &Self) -> bool {
        self.bounds == other.bounds
            && self.background == other.background
            && self.cells == other.cells
    }
}

impl<T: Eq> Eq for DenseGrid<T> {}
