//! Cube model shared by the two phase solver and its command line front
//! end: piece enumerations, the cubie state with its coordinate codec, the
//! facelet reduction, the move alphabet and a naive sticker cube for
//! replay checks.

#![warn(clippy::pedantic)]
#![allow(
    clippy::similar_names,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod cubie;
pub mod facelet;
pub mod moves;
pub mod sticker;

pub use cubie::{Corner, CubieCube, Edge, StateError};
pub use facelet::{Color, FaceletCube, GridError};
pub use moves::{parse_alg, Face, Move, ParseMoveError, Solution};
pub use sticker::StickerCube;
