//! Frontier searches over wend grids.
//!
//! Two run-to-completion traversals, both parameterized by
//! caller-supplied predicates rather than by cell semantics:
//!
//! - [`flood_distances`]: multi-seed breadth-first flood over a
//!   [`DenseGrid`](wend_grid::DenseGrid), producing a [`DistanceMap`]
//!   of minimum hop counts.
//! - [`min_cost`]: priority-first (uniform-cost / A*) search over an
//!   arbitrary hashable state space, producing a minimum total cost.
//!
//! Neither is resumable or cancellable mid-way; bound execution with
//! [`SearchLimits`] where the state space is not known to be finite.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod bfs;
mod priority;

pub use bfs::{flood_distances, DistanceMap, UNREACHED};
pub use priority::{min_cost, SearchLimits};
