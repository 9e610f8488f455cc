//! Generational simulation with cycle detection and fast-forward.
//!
//! A [`CycleDetector`] advances a grid one generation at a time
//! through a caller-supplied [`Transition`] rule, recording every
//! completed state. Once a state repeats — exactly, or up to a uniform
//! spatial shift — the simulation is periodic, and the detector jumps
//! straight to the requested target generation by modular arithmetic
//! instead of simulating every intermediate step. That is what makes a
//! target of fifty billion generations tractable: only the states up
//! to the first repeat are ever materialized.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod detector;
mod rule;

pub use detector::{simulate, Cycle, CycleConfig, CycleDetector, CycleReport, MatchMode};
pub use rule::Transition;
