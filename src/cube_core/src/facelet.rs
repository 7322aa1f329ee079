//! Sticker-level cube and its reduction to the cubie representation.
//!
//! Facelets are indexed `9 * face + 3 * row + col` with the faces ordered
//! U, R, F, D, L, B, so U1..U9 are 0..8, R1..R9 are 9..17 and so on. The
//! scramble files name stickers by physical color; the fixed convention is
//! orange up and white front, so the six letters map to face labels as
//! O to U, B to R, W to F, R to D, G to L, Y to B.

use strum::IntoEnumIterator;
use thiserror::Error;

use crate::cubie::{Corner, CubieCube, Edge};

/// Sticker colors, named by the face whose center carries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    U,
    R,
    F,
    D,
    L,
    B,
}

const COLORS: [Color; 6] = [Color::U, Color::R, Color::F, Color::D, Color::L, Color::B];

/// Why an input grid does not describe a cube.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("expected 9 sticker lines, got {0}")]
    MissingLines(usize),
    #[error("sticker line {0} is too short")]
    ShortLine(usize),
    #[error("unrecognized sticker color {0:?}")]
    BadColor(char),
    #[error("the six centers must show six distinct colors")]
    DuplicateCenter,
    #[error("no corner piece matches the stickers at slot {0:?}")]
    UnmatchedCorner(Corner),
    #[error("no edge piece matches the stickers at slot {0:?}")]
    UnmatchedEdge(Edge),
}

impl GridError {
    /// Malformed input is a single tag in the `Error N` scheme.
    pub fn code(self) -> u8 {
        1
    }
}

/// The three stickers of each corner slot, reference sticker (the U or D
/// one) first, then clockwise around the piece.
pub(crate) const CORNER_FACELET: [[usize; 3]; 8] = [
    [8, 9, 20],   // URF: U9 R1 F3
    [6, 18, 38],  // UFL: U7 F1 L3
    [0, 36, 47],  // ULB: U1 L1 B3
    [2, 45, 11],  // UBR: U3 B1 R3
    [29, 26, 15], // DFR: D3 F9 R7
    [27, 44, 24], // DLF: D1 L9 F7
    [33, 53, 42], // DBL: D7 B9 L7
    [35, 17, 51], // DRB: D9 R9 B7
];

/// The two stickers of each edge slot, reference sticker first.
pub(crate) const EDGE_FACELET: [[usize; 2]; 12] = [
    [5, 10],  // UR: U6 R2
    [7, 19],  // UF: U8 F2
    [3, 37],  // UL: U4 L2
    [1, 46],  // UB: U2 B2
    [32, 16], // DR: D6 R8
    [28, 25], // DF: D2 F8
    [30, 43], // DL: D4 L8
    [34, 52], // DB: D8 B8
    [23, 12], // FR: F6 R4
    [21, 41], // FL: F4 L6
    [50, 39], // BL: B6 L4
    [48, 14], // BR: B4 R6
];

pub(crate) const CORNER_COLOR: [[Color; 3]; 8] = [
    [Color::U, Color::R, Color::F],
    [Color::U, Color::F, Color::L],
    [Color::U, Color::L, Color::B],
    [Color::U, Color::B, Color::R],
    [Color::D, Color::F, Color::R],
    [Color::D, Color::L, Color::F],
    [Color::D, Color::B, Color::L],
    [Color::D, Color::R, Color::B],
];

pub(crate) const EDGE_COLOR: [[Color; 2]; 12] = [
    [Color::U, Color::R],
    [Color::U, Color::F],
    [Color::U, Color::L],
    [Color::U, Color::B],
    [Color::D, Color::R],
    [Color::D, Color::F],
    [Color::D, Color::L],
    [Color::D, Color::B],
    [Color::F, Color::R],
    [Color::F, Color::L],
    [Color::B, Color::L],
    [Color::B, Color::R],
];

/// (line, column) of the top left sticker of each face in the 9-line grid:
///
/// ```text
///    UUU
///    UUU
///    UUU
/// LLLFFFRRRBBB
/// LLLFFFRRRBBB
/// LLLFFFRRRBBB
///    DDD
///    DDD
///    DDD
/// ```
pub(crate) const FACE_ORIGIN: [(usize, usize); 6] =
    [(0, 3), (3, 6), (3, 3), (6, 3), (3, 0), (3, 9)];

/// Cube state as 54 sticker colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceletCube {
    pub colors: [Color; 54],
}

impl FaceletCube {
    pub const SOLVED: FaceletCube = FaceletCube {
        colors: {
            let mut colors = [Color::U; 54];
            let mut i = 0;
            while i < 54 {
                colors[i] = COLORS[i / 9];
                i += 1;
            }
            colors
        },
    };

    /// Parse the 9-line sticker grid, relabeling physical colors to faces.
    pub fn from_grid(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() < 9 {
            return Err(GridError::MissingLines(lines.len()));
        }

        let mut colors = [Color::U; 54];
        for (face, &(line0, col0)) in FACE_ORIGIN.iter().enumerate() {
            for row in 0..3 {
                let line = lines[line0 + row].as_bytes();
                for col in 0..3 {
                    let c = *line
                        .get(col0 + col)
                        .ok_or(GridError::ShortLine(line0 + row + 1))?
                        as char;
                    colors[9 * face + 3 * row + col] = color_of(c)?;
                }
            }
        }

        let cube = FaceletCube { colors };
        cube.check_centers()?;
        Ok(cube)
    }

    fn check_centers(&self) -> Result<(), GridError> {
        let mut seen = [0u8; 6];
        for face in 0..6 {
            seen[self.colors[9 * face + 4] as usize] += 1;
        }
        if seen.iter().any(|&n| n != 1) {
            return Err(GridError::DuplicateCenter);
        }
        Ok(())
    }

    /// Deduce piece permutations and orientations from the stickers.
    ///
    /// Each corner slot carries exactly one U or D sticker; its offset is
    /// the twist, and the remaining ordered color pair identifies the
    /// piece. Edges work the same with a two-way orientation test.
    pub fn to_cubie_cube(&self) -> Result<CubieCube, GridError> {
        let mut cube = CubieCube::SOLVED;

        for (i, slot) in Corner::iter().enumerate() {
            let facelets = CORNER_FACELET[i];
            let ori = (0..3)
                .find(|&o| matches!(self.colors[facelets[o]], Color::U | Color::D))
                .ok_or(GridError::UnmatchedCorner(slot))?;
            let col1 = self.colors[facelets[(ori + 1) % 3]];
            let col2 = self.colors[facelets[(ori + 2) % 3]];
            let piece = Corner::iter()
                .find(|&p| col1 == CORNER_COLOR[p as usize][1] && col2 == CORNER_COLOR[p as usize][2])
                .ok_or(GridError::UnmatchedCorner(slot))?;
            cube.cp[i] = piece;
            cube.co[i] = ori as u8;
        }

        for (i, slot) in Edge::iter().enumerate() {
            let c0 = self.colors[EDGE_FACELET[i][0]];
            let c1 = self.colors[EDGE_FACELET[i][1]];
            let found = Edge::iter().find_map(|p| {
                let pair = EDGE_COLOR[p as usize];
                if c0 == pair[0] && c1 == pair[1] {
                    Some((p, 0))
                } else if c0 == pair[1] && c1 == pair[0] {
                    Some((p, 1))
                } else {
                    None
                }
            });
            let (piece, ori) = found.ok_or(GridError::UnmatchedEdge(slot))?;
            cube.ep[i] = piece;
            cube.eo[i] = ori;
        }

        Ok(cube)
    }
}

fn color_of(c: char) -> Result<Color, GridError> {
    match c {
        'O' => Ok(Color::U),
        'B' => Ok(Color::R),
        'W' => Ok(Color::F),
        'R' => Ok(Color::D),
        'G' => Ok(Color::L),
        'Y' => Ok(Color::B),
        _ => Err(GridError::BadColor(c)),
    }
}
