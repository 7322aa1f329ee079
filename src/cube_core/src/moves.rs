//! The face turn alphabet and solution rendering.

use std::fmt;
use std::str::FromStr;

use strum_macros::EnumString;
use thiserror::Error;

/// A turnable face, in move index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

pub const FACES: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Face {
    pub fn from_letter(c: char) -> Option<Face> {
        match c {
            'U' => Some(Face::U),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'B' => Some(Face::B),
            _ => None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized move {0:?}")]
pub struct ParseMoveError(pub String);

/// A face turn. `power` counts clockwise quarter turns, 1 to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub face: Face,
    pub power: u8,
}

impl Move {
    pub fn new(face: Face, power: u8) -> Self {
        debug_assert!((1..=3).contains(&power));
        Move { face, power }
    }

    /// Column in the 18-wide move tables, `3 * face + power - 1`.
    pub fn index(self) -> usize {
        3 * self.face as usize + self.power as usize - 1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.power {
            2 => write!(f, "{}2", self.face),
            3 => write!(f, "{}'", self.face),
            _ => write!(f, "{}", self.face),
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let face: Face = s
            .get(..1)
            .and_then(|f| f.parse().ok())
            .ok_or_else(|| ParseMoveError(s.to_owned()))?;
        let power = match &s[1..] {
            "" => 1,
            "2" => 2,
            "'" => 3,
            _ => return Err(ParseMoveError(s.to_owned())),
        };
        Ok(Move { face, power })
    }
}

/// Parse a whitespace separated move sequence such as "R U2 F'".
pub fn parse_alg(s: &str) -> Result<Vec<Move>, ParseMoveError> {
    s.split_whitespace().map(str::parse).collect()
}

/// A solver result. Renders as face letters repeated once per quarter
/// turn, so U' becomes "UUU" and U2 becomes "UU"; a replay that applies
/// one clockwise turn per letter reproduces the maneuver.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Solution(pub Vec<Move>);

impl Solution {
    pub fn face_turns(&self) -> usize {
        self.0.len()
    }

    pub fn quarter_turns(&self) -> usize {
        self.0.iter().map(|m| usize::from(m.power)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.0 {
            for _ in 0..m.power {
                write!(f, "{}", m.face)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_parse() {
        assert_eq!("U".parse(), Ok(Move::new(Face::U, 1)));
        assert_eq!("R2".parse(), Ok(Move::new(Face::R, 2)));
        assert_eq!("F'".parse(), Ok(Move::new(Face::F, 3)));
        assert!("X".parse::<Move>().is_err());
        assert!("U3".parse::<Move>().is_err());
        assert!("".parse::<Move>().is_err());
    }

    #[test]
    fn move_indices_cover_the_alphabet() {
        let mut seen = [false; 18];
        for face in FACES {
            for power in 1..=3 {
                seen[Move::new(face, power).index()] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn solutions_render_as_repeated_letters() {
        let solution = Solution(vec![
            Move::new(Face::U, 3),
            Move::new(Face::R, 2),
            Move::new(Face::B, 1),
        ]);
        assert_eq!(solution.to_string(), "UUURRB");
        assert_eq!(solution.face_turns(), 3);
        assert_eq!(solution.quarter_turns(), 6);
        assert_eq!(Solution::default().to_string(), "");
    }
}
