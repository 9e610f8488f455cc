//! Grid storage for wend simulations.
//!
//! Two backings with the same cell semantics:
//!
//! - [`DenseGrid`]: row-major array over explicit [`Bounds`] — the
//!   right choice when the coordinate range is small and known.
//! - [`SparseGrid`]: map-backed unbounded grid where only touched
//!   cells exist — for effectively unbounded spaces.
//!
//! Cells are opaque to this crate: callers classify them with their
//! own predicates. The only cell property the grids themselves use is
//! equality with the *background* value, which drives active-region
//! tracking.
//!
//! [`Bounds`]: wend_core::Bounds

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod dense;
mod sparse;

pub use dense::DenseGrid;
pub use sparse::SparseGrid;
