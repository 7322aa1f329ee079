//! Naive sticker-level cube used to check solutions by replay.
//!
//! The solver never touches this representation. It exists so a finished
//! solution can be applied letter by letter to the raw input grid and the
//! result compared against the solid coloring, independently of the cubie
//! and coordinate machinery.

use std::fmt;

use crate::facelet::{GridError, FACE_ORIGIN};
use crate::moves::{Face, ParseMoveError};

/// Physical color of each face when solved: orange up, white front.
const SOLVED_COLOR: [char; 6] = ['O', 'B', 'W', 'R', 'G', 'Y'];

const U: usize = 0;
const R: usize = 1;
const F: usize = 2;
const D: usize = 3;
const L: usize = 4;
const B: usize = 5;

/// A 6x3x3 grid of raw sticker characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickerCube {
    stickers: [[[char; 3]; 3]; 6],
}

impl StickerCube {
    pub fn solved() -> Self {
        let mut stickers = [[[' '; 3]; 3]; 6];
        for (face, grid) in stickers.iter_mut().enumerate() {
            *grid = [[SOLVED_COLOR[face]; 3]; 3];
        }
        StickerCube { stickers }
    }

    /// Parse the same 9-line grid the facelet reducer reads, but keep the
    /// raw characters.
    pub fn from_grid(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() < 9 {
            return Err(GridError::MissingLines(lines.len()));
        }
        let mut stickers = [[[' '; 3]; 3]; 6];
        for (face, &(line0, col0)) in FACE_ORIGIN.iter().enumerate() {
            for row in 0..3 {
                let line = lines[line0 + row].as_bytes();
                for col in 0..3 {
                    let c = *line
                        .get(col0 + col)
                        .ok_or(GridError::ShortLine(line0 + row + 1))? as char;
                    if !SOLVED_COLOR.contains(&c) {
                        return Err(GridError::BadColor(c));
                    }
                    stickers[face][row][col] = c;
                }
            }
        }
        Ok(StickerCube { stickers })
    }

    /// One clockwise quarter turn of a face.
    pub fn turn(&mut self, face: Face) {
        let side = face as usize;
        self.cycle4([(side, 0, 0), (side, 0, 2), (side, 2, 2), (side, 2, 0)]);
        self.cycle4([(side, 0, 1), (side, 1, 2), (side, 2, 1), (side, 1, 0)]);
        let rings: [[(usize, usize, usize); 4]; 3] = match face {
            Face::U => [
                [(B, 0, 0), (R, 0, 0), (F, 0, 0), (L, 0, 0)],
                [(B, 0, 1), (R, 0, 1), (F, 0, 1), (L, 0, 1)],
                [(B, 0, 2), (R, 0, 2), (F, 0, 2), (L, 0, 2)],
            ],
            Face::D => [
                [(L, 2, 0), (F, 2, 0), (R, 2, 0), (B, 2, 0)],
                [(L, 2, 1), (F, 2, 1), (R, 2, 1), (B, 2, 1)],
                [(L, 2, 2), (F, 2, 2), (R, 2, 2), (B, 2, 2)],
            ],
            Face::F => [
                [(U, 2, 0), (R, 0, 0), (D, 0, 2), (L, 2, 2)],
                [(U, 2, 1), (R, 1, 0), (D, 0, 1), (L, 1, 2)],
                [(U, 2, 2), (R, 2, 0), (D, 0, 0), (L, 0, 2)],
            ],
            Face::B => [
                [(U, 0, 2), (L, 0, 0), (D, 2, 0), (R, 2, 2)],
                [(U, 0, 1), (L, 1, 0), (D, 2, 1), (R, 1, 2)],
                [(U, 0, 0), (L, 2, 0), (D, 2, 2), (R, 0, 2)],
            ],
            Face::R => [
                [(F, 2, 2), (U, 2, 2), (B, 0, 0), (D, 2, 2)],
                [(F, 1, 2), (U, 1, 2), (B, 1, 0), (D, 1, 2)],
                [(F, 0, 2), (U, 0, 2), (B, 2, 0), (D, 0, 2)],
            ],
            Face::L => [
                [(B, 2, 2), (U, 0, 0), (F, 0, 0), (D, 0, 0)],
                [(B, 1, 2), (U, 1, 0), (F, 1, 0), (D, 1, 0)],
                [(B, 0, 2), (U, 2, 0), (F, 2, 0), (D, 2, 0)],
            ],
        };
        for ring in rings {
            self.cycle4(ring);
        }
    }

    /// Apply a solution string, one clockwise quarter turn per letter.
    pub fn apply_letters(&mut self, letters: &str) -> Result<(), ParseMoveError> {
        for c in letters.trim().chars() {
            let face = Face::from_letter(c).ok_or_else(|| ParseMoveError(c.to_string()))?;
            self.turn(face);
        }
        Ok(())
    }

    pub fn is_solved(&self) -> bool {
        self.stickers
            .iter()
            .enumerate()
            .all(|(face, grid)| grid.iter().flatten().all(|&c| c == SOLVED_COLOR[face]))
    }

    /// Order of a move word in the face turn group.
    pub fn order(letters: &str) -> Result<u32, ParseMoveError> {
        let mut cube = StickerCube::solved();
        let mut n = 0;
        loop {
            cube.apply_letters(letters)?;
            n += 1;
            if cube.is_solved() {
                return Ok(n);
            }
        }
    }

    fn cycle4(&mut self, [a, b, c, d]: [(usize, usize, usize); 4]) {
        let tmp = self.get(d);
        self.put(d, self.get(c));
        self.put(c, self.get(b));
        self.put(b, self.get(a));
        self.put(a, tmp);
    }

    fn get(&self, (face, row, col): (usize, usize, usize)) -> char {
        self.stickers[face][row][col]
    }

    fn put(&mut self, (face, row, col): (usize, usize, usize), v: char) {
        self.stickers[face][row][col] = v;
    }
}

impl fmt::Display for StickerCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            writeln!(f, "   {}", self.stickers[U][row].iter().collect::<String>())?;
        }
        for row in 0..3 {
            let line: String = [L, F, R, B]
                .iter()
                .flat_map(|&face| self.stickers[face][row].iter())
                .collect();
            writeln!(f, "{line}")?;
        }
        for row in 0..3 {
            writeln!(f, "   {}", self.stickers[D][row].iter().collect::<String>())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_turns_restore_every_face() {
        for face in crate::moves::FACES {
            let mut cube = StickerCube::solved();
            for _ in 0..4 {
                cube.turn(face);
            }
            assert!(cube.is_solved());
        }
    }

    #[test]
    fn single_turn_scrambles() {
        let mut cube = StickerCube::solved();
        cube.turn(Face::R);
        assert!(!cube.is_solved());
    }

    #[test]
    fn known_word_orders() {
        assert_eq!(StickerCube::order("U"), Ok(4));
        assert_eq!(StickerCube::order("UU"), Ok(2));
        assert_eq!(StickerCube::order("RU"), Ok(105));
    }

    #[test]
    fn display_round_trips_through_the_grid_parser() {
        let mut cube = StickerCube::solved();
        cube.apply_letters("RUUFFFDLB").unwrap();
        let text = cube.to_string();
        assert_eq!(StickerCube::from_grid(&text), Ok(cube));
    }

    #[test]
    fn replaying_the_inverse_solves() {
        let mut cube = StickerCube::solved();
        // R U2 F' followed by its inverse, all in quarter turn letters.
        cube.apply_letters("RUUFFF").unwrap();
        cube.apply_letters("FUURRR").unwrap();
        assert!(cube.is_solved());
    }
}
