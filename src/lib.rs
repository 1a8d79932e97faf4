//! # Hamiltonian Cycle Search
//!
//! Decides whether a small undirected graph (at most 63 vertices) contains a
//! Hamiltonian cycle and, if so, returns one witness cycle in the caller's
//! own vertex values.
//!
//! This crate provides:
//! - A meet-in-the-middle dynamic program over bitmask-compressed path
//!   signatures (the **compressed path search**), stitching two half-length
//!   simple paths into a full cycle.
//! - An exhaustive **backtracking** solver behind the identical contract,
//!   the better fit for dense graphs.
//! - Deterministic witness validation and an optional search deadline.
//!
//! ## Quick Start
//!
//! ```
//! use hamcycle::solver::find_cycle;
//!
//! // A 4-ring: north-east-south-west and back.
//! let stations = vec!["north", "east", "south", "west"];
//! let connected = [
//!     ("north", "east"),
//!     ("east", "south"),
//!     ("south", "west"),
//!     ("west", "north"),
//! ];
//!
//! let cycle = find_cycle(stations, |a, b| {
//!     connected.iter().any(|&(u, v)| (u, v) == (*a, *b) || (v, u) == (*a, *b))
//! })
//! .expect("4 vertices is well within capacity")
//! .expect("the ring is Hamiltonian");
//!
//! assert_eq!(cycle.len(), 4);
//! ```
//!
//! ## Choosing a Strategy
//!
//! ```
//! use hamcycle::graph::AdjacencyTable;
//! use hamcycle::solver::{Solver, Strategy};
//!
//! let table = AdjacencyTable::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)])?;
//! let strategy = Strategy::preferred_for(&table); // sparse ring: compressed path search
//! let cycle = Solver::new(strategy).find_cycle_indices(&table)?;
//! assert!(cycle.is_some());
//! # Ok::<(), hamcycle::solver::SolveError>(())
//! ```
//!
//! ## Modules
//!
//! - [`vset`]: Bit-packed vertex sets, the compressed representation under
//!   every path signature.
//! - [`graph`]: Adjacency tables built from a caller predicate, with the
//!   explicit 63-vertex capacity check.
//! - [`solver`]: Strategies, configuration, errors, and the find-cycle entry
//!   points.
//! - [`validate`]: Deterministic checking of witness cycles.
//!
//! ## Performance Notes
//!
//! - The adjacency predicate is evaluated `N * (N - 1) / 2` times; keep it
//!   cheap.
//! - The compressed path search trades memory for time: on dense graphs its
//!   dictionary approaches `C(N, N/2)` entries at the half-length threshold.
//!   [`solver::Strategy::preferred_for`] switches to backtracking above
//!   average degree 3.5.
//! - Both worst cases are exponential in N; arm
//!   [`solver::Solver::with_deadline`] to bound a search rather than letting
//!   it run away.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)] // Indices are proven < 63 before any u8 cast
#![allow(clippy::many_single_char_names)] // Graph-theory variable names

pub mod graph;
pub mod solver;
pub mod validate;
pub mod vset;

mod backtrack;
mod expand;
mod paths;
mod stitch;

/// Re-export of the commonly used types.
pub mod prelude {
    pub use crate::graph::AdjacencyTable;
    pub use crate::solver::{find_cycle, SolveError, Solver, Strategy};
    pub use crate::validate::validate_cycle;
    pub use crate::vset::{VertexSet, MAX_VERTICES};
}
