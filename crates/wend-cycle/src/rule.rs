//! The [`Transition`] trait: caller-supplied generation advancement.

use wend_grid::DenseGrid;

/// A pure generation-transition function.
///
/// # Contract
///
/// - `step()` MUST be deterministic: the same input grid produces an
///   identical output grid. The detector's history lookups are
///   meaningless otherwise.
/// - The detector never inspects the rule; it only compares the
///   states the rule produces.
/// - Shift-based cycle detection additionally assumes the rule is
///   translation-invariant. See
///   [`MatchMode::UpToShift`](crate::MatchMode::UpToShift).
///
/// The output grid need not share the input's bounds — rules for
/// drifting simulations typically re-center or grow the window each
/// generation.
///
/// Implemented for any `Fn(&DenseGrid<T>) -> DenseGrid<T>`, so plain
/// closures work:
///
/// ```
/// use wend_core::Bounds;
/// use wend_grid::DenseGrid;
/// use wend_cycle::Transition;
///
/// let identity = |g: &DenseGrid<u8>| g.clone();
/// let grid = DenseGrid::new(Bounds::sized(3, 3), 0u8).unwrap();
/// assert_eq!(identity.step(&grid), grid);
/// ```
pub trait Transition<T> {
    /// Advance the grid by one generation.
    fn step(&self, grid: &DenseGrid<T>) -> DenseGrid<T>;
}

impl<T, F> Transition<T> for F
where
    F: Fn(&DenseGrid<T>) -> DenseGrid<T>,
{
    fn step(&self, grid: &DenseGrid<T>) -> DenseGrid<T> {
        self(grid)
    }
}
