//! Two phase solver for the 3x3x3 cube.
//!
//! Phase 1 brings an arbitrary legal state into the subgroup generated by
//! U, D, R2, L2, F2 and B2; phase 2 finishes inside it. Both phases run
//! iterative deepening over small integer coordinates with precomputed
//! move and pruning tables, so a typical solve stays around twenty face
//! turns and well under a second.

#![warn(clippy::pedantic)]
#![allow(
    clippy::similar_names,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod coord;
pub mod search;
pub mod tables;

pub use search::{solve, SolveError, TwoPhaseSolver, DEFAULT_MAX_DEPTH, DEFAULT_TIMEOUT};
pub use tables::{Tables, TABLES};
