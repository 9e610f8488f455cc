//! Core types for the wend grid engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the coordinate types ([`Point`], [`Bounds`]) and the error enums
//! shared by the grid, search, and cycle crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod point;

pub use error::{CycleError, GridError, SearchError};
pub use point::{Bounds, Point};
