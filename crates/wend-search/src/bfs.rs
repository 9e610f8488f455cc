//! Breadth-first flood fill producing per-cell distance maps.

use std::collections::VecDeque;
use wend_core::{GridError, Point};
use wend_grid::DenseGrid;

/// Sentinel distance for cells no seed can reach (and for impassable
/// cells). A dedicated marker rather than a "big enough" value, so no
/// assumption about the largest real distance is baked in.
pub const UNREACHED: u32 = u32::MAX;

/// Output of [`flood_distances`]: a grid over the same bounds mapping
/// each cell to its minimum hop count from the nearest seed, or
/// [`UNREACHED`].
pub type DistanceMap = DenseGrid<u32>;

/// Compute minimum 4-connected hop counts from a set of seed cells.
///
/// `passable` classifies cells; impassable cells are never entered and
/// stay [`UNREACHED`]. Seeds are labelled 0. An impassable seed keeps
/// its 0 label but is not expanded — the caller asked for reachability
/// *from* that cell, not *through* it.
///
/// Each cell is enqueued at most once (already-labelled guard), so the
/// traversal is O(cells) regardless of seed count, and the result is
/// invariant under permutation of the seed list.
///
/// Fails with [`GridError::OutOfBounds`] if a seed lies outside the
/// grid.
///
/// # Examples
///
/// ```
/// use wend_core::{Bounds, Point};
/// use wend_grid::DenseGrid;
/// use wend_search::{flood_distances, UNREACHED};
///
/// let mut grid = DenseGrid::new(Bounds::sized(3, 1), b'.').unwrap();
/// grid.set(Point::new(1, 0), b'#').unwrap();
/// let d = flood_distances(&grid, &[Point::new(0, 0)], |_, c| *c == b'.').unwrap();
/// assert_eq!(*d.get(Point::new(0, 0)).unwrap(), 0);
/// assert_eq!(*d.get(Point::new(2, 0)).unwrap(), UNREACHED);
/// ```
pub fn flood_distances<T, P>(
    grid: &DenseGrid<T>,
    seeds: &[Point],
    passable: P,
) -> Result<DistanceMap, GridError>
where
    T: Clone + PartialEq,
    P: Fn(Point, &T) -> bool,
{
    let mut distances = DistanceMap::new(grid.bounds(), UNREACHED)?;
    let mut frontier = VecDeque::new();

    for &seed in seeds {
        let cell = grid.get(seed)?;
        if *distances.get(seed)? != UNREACHED {
            continue; // duplicate seed
        }
        distances.set(seed, 0)?;
        if passable(seed, cell) {
            frontier.push_back((seed, 0u32));
        }
    }

    while let Some((p, d)) = frontier.pop_front() {
        let next = d + 1;
        for n in p.orthogonal() {
            let Ok(cell) = grid.get(n) else {
                continue; // off the edge
            };
            if !passable(n, cell) {
                continue;
            }
            if *distances.get(n)? != UNREACHED {
                continue; // some shorter or equal path got there first
            }
            distances.set(n, next)?;
            frontier.push_back((n, next));
        }
    }

    Ok(distances)
}
