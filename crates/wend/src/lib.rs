//! Wend: a grid simulation and reachability engine.
//!
//! This is the facade crate re-exporting the public API from the wend
//! sub-crates. For most users, adding `wend` as a single dependency is
//! sufficient.
//!
//! The engine knows nothing about what cells *mean*: callers supply
//! classification predicates, neighbour expansion, and transition
//! rules, and the engine supplies the traversal and bookkeeping — a
//! dense or sparse grid, a BFS distance map, a minimum-cost search, or
//! a cycle-accelerated jump to a far-future generation.
//!
//! # Quick start
//!
//! ```rust
//! use wend::prelude::*;
//!
//! // A small map: walls block movement.
//! let mut grid = DenseGrid::new(Bounds::sized(4, 3), b'.').unwrap();
//! grid.set(Point::new(1, 0), b'#').unwrap();
//! grid.set(Point::new(1, 1), b'#').unwrap();
//!
//! // Hop counts from the corner, around the wall.
//! let distances =
//!     flood_distances(&grid, &[Point::new(0, 0)], |_, c| *c == b'.').unwrap();
//! assert_eq!(*distances.get(Point::new(2, 0)).unwrap(), 6);
//!
//! // The same question as a goal-directed search.
//! let cost = min_cost(
//!     Point::new(0, 0),
//!     |&p| p == Point::new(2, 0),
//!     |&p| {
//!         p.orthogonal()
//!             .into_iter()
//!             .filter(|&n| grid.get(n).map_or(false, |c| *c == b'.'))
//!             .map(|n| (n, 1))
//!             .collect()
//!     },
//!     |&p| p.manhattan(Point::new(2, 0)),
//!     SearchLimits::UNBOUNDED,
//! )
//! .unwrap();
//! assert_eq!(cost, 6);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wend-core` | `Point`, `Bounds`, error types |
//! | [`grid`] | `wend-grid` | `DenseGrid`, `SparseGrid` |
//! | [`search`] | `wend-search` | BFS distance maps, min-cost search |
//! | [`cycle`] | `wend-cycle` | cycle detection and fast-forward |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinate and error types (`wend-core`).
pub use wend_core as types;

/// Dense and sparse grid storage (`wend-grid`).
pub use wend_grid as grid;

/// Frontier searches (`wend-search`).
///
/// [`search::flood_distances`] for BFS distance maps,
/// [`search::min_cost`] for priority-first minimum-cost search.
pub use wend_search as search;

/// Generational cycle detection and fast-forward (`wend-cycle`).
///
/// The [`cycle::Transition`] trait is the extension point for
/// caller-defined simulation rules.
pub use wend_cycle as cycle;

/// Common imports for typical wend usage.
///
/// ```rust
/// use wend::prelude::*;
/// ```
pub mod prelude {
    // Coordinates and errors
    pub use wend_core::{Bounds, CycleError, GridError, Point, SearchError};

    // Grids
    pub use wend_grid::{DenseGrid, SparseGrid};

    // Searches
    pub use wend_search::{flood_distances, min_cost, DistanceMap, SearchLimits, UNREACHED};

    // Cycle detection
    pub use wend_cycle::{
        simulate, Cycle, CycleConfig, CycleDetector, CycleReport, MatchMode, Transition,
    };
}
