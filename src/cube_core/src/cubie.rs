//! Cubie-level model of the 3x3x3 cube.
//!
//! A cube state is the permutation and orientation of its eight corner
//! pieces and twelve edge pieces. Together with the parity relations these
//! four arrays determine the state uniquely, and every coordinate the
//! solver works with is derived from them here. The coordinate encodings
//! use the combinatorial number system: a combination rank for where the
//! distinguished pieces sit, times the factorial base, plus a Lehmer code
//! for how they are ordered.

use strum_macros::EnumIter;
use thiserror::Error;

use crate::facelet::{FaceletCube, CORNER_COLOR, CORNER_FACELET, EDGE_COLOR, EDGE_FACELET};
use crate::moves::Move;

use Corner::*;
use Edge::*;

/// Corner slots, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Corner {
    URF,
    UFL,
    ULB,
    UBR,
    DFR,
    DLF,
    DBL,
    DRB,
}

/// Edge slots, in index order. The last four are the middle slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Edge {
    UR,
    UF,
    UL,
    UB,
    DR,
    DF,
    DL,
    DB,
    FR,
    FL,
    BL,
    BR,
}

/// Why a parsed cube state cannot belong to a real cube.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    #[error("duplicate or missing edge")]
    EdgeCount,
    #[error("total edge flip is wrong")]
    EdgeFlip,
    #[error("duplicate or missing corner")]
    CornerCount,
    #[error("total corner twist is wrong")]
    CornerTwist,
    #[error("corner and edge permutation parities differ")]
    PermutationParity,
}

impl StateError {
    /// Stable tag used by the `Error N` output token.
    pub fn code(self) -> u8 {
        match self {
            StateError::EdgeCount => 2,
            StateError::EdgeFlip => 3,
            StateError::CornerCount => 4,
            StateError::CornerTwist => 5,
            StateError::PermutationParity => 6,
        }
    }
}

/// Cube state on the cubie level.
///
/// `cp[i] = j` means the corner piece that belongs in slot `j` currently
/// occupies slot `i`; `co[i]` is its twist against the slot's reference
/// sticker (0..3). Edges are analogous with flips in 0..2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubieCube {
    pub cp: [Corner; 8],
    pub co: [u8; 8],
    pub ep: [Edge; 12],
    pub eo: [u8; 12],
}

impl Default for CubieCube {
    fn default() -> Self {
        Self::SOLVED
    }
}

/// The six clockwise quarter turns on the cubie level. Half and counter
/// clockwise turns are repeated compositions of these.
pub const MOVES: [CubieCube; 6] = [U_MOVE, R_MOVE, F_MOVE, D_MOVE, L_MOVE, B_MOVE];

pub const U_MOVE: CubieCube = CubieCube {
    cp: [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const R_MOVE: CubieCube = CubieCube {
    cp: [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR],
    co: [2, 0, 0, 1, 1, 0, 0, 2],
    ep: [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const F_MOVE: CubieCube = CubieCube {
    cp: [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
    co: [1, 2, 0, 0, 2, 1, 0, 0],
    ep: [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
    eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};

pub const D_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const L_MOVE: CubieCube = CubieCube {
    cp: [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
    co: [0, 1, 2, 0, 0, 2, 1, 0],
    ep: [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const B_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
    co: [0, 0, 1, 2, 0, 0, 2, 1],
    ep: [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
    eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

/// Binomial coefficient, 0 when `n < k`.
fn binomial(n: usize, k: usize) -> usize {
    if n < k {
        return 0;
    }
    let k = k.min(n - k);
    let mut result = 1;
    for i in 1..=k {
        result = result * (n - i + 1) / i;
    }
    result
}

impl CubieCube {
    pub const SOLVED: CubieCube = CubieCube {
        cp: [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB],
        co: [0, 0, 0, 0, 0, 0, 0, 0],
        ep: [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR],
        eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    };

    /// Compose the corner arrays with `other` on the right.
    pub fn corner_multiply(&mut self, other: &CubieCube) {
        let mut cp = [URF; 8];
        let mut co = [0; 8];
        for i in 0..8 {
            let j = other.cp[i] as usize;
            cp[i] = self.cp[j];
            co[i] = (self.co[j] + other.co[i]) % 3;
        }
        self.cp = cp;
        self.co = co;
    }

    /// Compose the edge arrays with `other` on the right.
    pub fn edge_multiply(&mut self, other: &CubieCube) {
        let mut ep = [UR; 12];
        let mut eo = [0; 12];
        for i in 0..12 {
            let j = other.ep[i] as usize;
            ep[i] = self.ep[j];
            eo[i] = (self.eo[j] + other.eo[i]) % 2;
        }
        self.ep = ep;
        self.eo = eo;
    }

    /// Full composition. Corners and edges are disjoint, so the two halves
    /// may run in either order.
    pub fn multiply(&mut self, other: &CubieCube) {
        self.corner_multiply(other);
        self.edge_multiply(other);
    }

    /// Apply a face turn by repeated quarter turn composition.
    pub fn apply_move(&mut self, m: Move) {
        for _ in 0..m.power {
            self.multiply(&MOVES[m.face as usize]);
        }
    }

    pub fn apply_moves(&mut self, moves: &[Move]) {
        for &m in moves {
            self.apply_move(m);
        }
    }

    /// Check that this state belongs to a real cube.
    pub fn verify(&self) -> Result<(), StateError> {
        let mut edge_count = [0u8; 12];
        for e in self.ep {
            edge_count[e as usize] += 1;
        }
        if edge_count.iter().any(|&n| n != 1) {
            return Err(StateError::EdgeCount);
        }

        let mut corner_count = [0u8; 8];
        for c in self.cp {
            corner_count[c as usize] += 1;
        }
        if corner_count.iter().any(|&n| n != 1) {
            return Err(StateError::CornerCount);
        }

        if self.eo.iter().sum::<u8>() % 2 != 0 {
            return Err(StateError::EdgeFlip);
        }

        if self.co.iter().sum::<u8>() % 3 != 0 {
            return Err(StateError::CornerTwist);
        }

        if self.edge_parity() != self.corner_parity() {
            return Err(StateError::PermutationParity);
        }

        Ok(())
    }

    /// Sticker-level view of this state. Centers are fixed.
    pub fn to_facelet_cube(&self) -> FaceletCube {
        let mut cube = FaceletCube::SOLVED;
        for i in 0..8 {
            let j = self.cp[i] as usize;
            let ori = self.co[i] as usize;
            for k in 0..3 {
                cube.colors[CORNER_FACELET[i][(k + ori) % 3]] = CORNER_COLOR[j][k];
            }
        }
        for i in 0..12 {
            let j = self.ep[i] as usize;
            let ori = self.eo[i] as usize;
            for k in 0..2 {
                cube.colors[EDGE_FACELET[i][(k + ori) % 2]] = EDGE_COLOR[j][k];
            }
        }
        cube
    }

    /// Corner orientations as a base 3 number; the eighth twist is implied.
    pub fn twist(&self) -> u16 {
        self.co[..7].iter().fold(0, |acc, &o| 3 * acc + u16::from(o))
    }

    pub fn set_twist(&mut self, mut twist: u16) {
        let mut sum = 0;
        for i in (0..7).rev() {
            self.co[i] = (twist % 3) as u8;
            sum += self.co[i];
            twist /= 3;
        }
        self.co[7] = (3 - sum % 3) % 3;
    }

    /// Edge orientations as a base 2 number; the twelfth flip is implied.
    pub fn flip(&self) -> u16 {
        self.eo[..11].iter().fold(0, |acc, &o| 2 * acc + u16::from(o))
    }

    pub fn set_flip(&mut self, mut flip: u16) {
        let mut sum = 0;
        for i in (0..11).rev() {
            self.eo[i] = (flip % 2) as u8;
            sum += self.eo[i];
            flip /= 2;
        }
        self.eo[11] = (2 - sum % 2) % 2;
    }

    /// Sign of the corner permutation, counted by inversions.
    pub fn corner_parity(&self) -> u16 {
        let mut s = 0;
        for i in (1..8).rev() {
            for j in 0..i {
                if self.cp[j] as usize > self.cp[i] as usize {
                    s += 1;
                }
            }
        }
        s % 2
    }

    /// Sign of the edge permutation. Equal to the corner parity on any
    /// legal cube.
    pub fn edge_parity(&self) -> u16 {
        let mut s = 0;
        for i in (1..12).rev() {
            for j in 0..i {
                if self.ep[j] as usize > self.ep[i] as usize {
                    s += 1;
                }
            }
        }
        s % 2
    }

    /// Position and order of the four slice edges FR, FL, BL, BR.
    /// Divided by 24 this is the coarse slice coordinate of phase 1.
    pub fn fr_to_br(&self) -> u16 {
        let mut a = 0;
        let mut x = 0;
        let mut arr = [FR; 4];
        for j in (0..12).rev() {
            if self.ep[j] as usize >= FR as usize {
                a += binomial(11 - j, x + 1) as u16;
                arr[3 - x] = self.ep[j];
                x += 1;
            }
        }
        let mut b = 0;
        for j in (1..4).rev() {
            let mut k = 0;
            while arr[j] as usize != j + 8 {
                arr[..=j].rotate_left(1);
                k += 1;
            }
            b = (j as u16 + 1) * b + k;
        }
        24 * a + b
    }

    pub fn set_fr_to_br(&mut self, idx: u16) {
        let mut slice_edges = [FR, FL, BL, BR];
        let other_edges = [UR, UF, UL, UB, DR, DF, DL, DB];
        let mut perm = (idx % 24) as usize;
        let mut comb = i32::from(idx / 24);

        self.ep = [DB; 12];
        for j in 1..4 {
            let mut k = perm % (j + 1);
            perm /= j + 1;
            while k > 0 {
                slice_edges[..=j].rotate_right(1);
                k -= 1;
            }
        }

        let mut x = 3i32;
        for j in 0..12 {
            let c = binomial(11 - j, (x + 1) as usize) as i32;
            if comb - c >= 0 {
                self.ep[j] = slice_edges[(3 - x) as usize];
                comb -= c;
                x -= 1;
            }
        }

        let mut x = 0;
        for j in 0..12 {
            if self.ep[j] == DB {
                self.ep[j] = other_edges[x];
                x += 1;
            }
        }
    }

    /// Position and order of the six corners URF through DLF.
    pub fn urf_to_dlf(&self) -> u16 {
        let mut a = 0;
        let mut x = 0;
        let mut arr = [URF; 6];
        for j in 0..8 {
            if self.cp[j] as usize <= DLF as usize {
                a += binomial(j, x + 1) as u16;
                arr[x] = self.cp[j];
                x += 1;
            }
        }
        let mut b = 0;
        for j in (1..6).rev() {
            let mut k = 0;
            while arr[j] as usize != j {
                arr[..=j].rotate_left(1);
                k += 1;
            }
            b = (j as u16 + 1) * b + k;
        }
        720 * a + b
    }

    pub fn set_urf_to_dlf(&mut self, idx: u16) {
        let mut corners = [URF, UFL, ULB, UBR, DFR, DLF];
        let others = [DBL, DRB];
        let mut perm = (idx % 720) as usize;
        let mut comb = i32::from(idx / 720);

        self.cp = [DRB; 8];
        for j in 1..6 {
            let mut k = perm % (j + 1);
            perm /= j + 1;
            while k > 0 {
                corners[..=j].rotate_right(1);
                k -= 1;
            }
        }

        let mut x = 5i32;
        for j in (0..8).rev() {
            let c = binomial(j, (x + 1) as usize) as i32;
            if comb - c >= 0 {
                self.cp[j] = corners[x as usize];
                comb -= c;
                x -= 1;
            }
        }

        let mut x = 0;
        for j in 0..8 {
            if self.cp[j] == DRB {
                self.cp[j] = others[x];
                x += 1;
            }
        }
    }

    /// Position and order of the six edges UR through DF. Only meaningful
    /// once the slice edges are back in the middle layer; the value fits in
    /// the phase 2 range exactly then.
    pub fn ur_to_df(&self) -> u32 {
        let mut a = 0;
        let mut x = 0;
        let mut arr = [UR; 6];
        for j in 0..12 {
            if self.ep[j] as usize <= DF as usize {
                a += binomial(j, x + 1) as u32;
                arr[x] = self.ep[j];
                x += 1;
            }
        }
        let mut b = 0;
        for j in (1..6).rev() {
            let mut k = 0;
            while arr[j] as usize != j {
                arr[..=j].rotate_left(1);
                k += 1;
            }
            b = (j as u32 + 1) * b + k;
        }
        720 * a + b
    }

    pub fn set_ur_to_df(&mut self, idx: u16) {
        let mut edges = [UR, UF, UL, UB, DR, DF];
        let others = [DL, DB, FR, FL, BL, BR];
        let mut perm = (idx % 720) as usize;
        let mut comb = i32::from(idx / 720);

        self.ep = [BR; 12];
        for j in 1..6 {
            let mut k = perm % (j + 1);
            perm /= j + 1;
            while k > 0 {
                edges[..=j].rotate_right(1);
                k -= 1;
            }
        }

        let mut x = 5i32;
        for j in (0..12).rev() {
            let c = binomial(j, (x + 1) as usize) as i32;
            if comb - c >= 0 {
                self.ep[j] = edges[x as usize];
                comb -= c;
                x -= 1;
            }
        }

        let mut x = 0;
        for j in 0..12 {
            if self.ep[j] == BR {
                self.ep[j] = others[x];
                x += 1;
            }
        }
    }

    /// Position and order of the edges UR, UF, UL. A seed for the merged
    /// phase 2 edge coordinate; the setter leaves the other slots
    /// unassigned on purpose.
    pub fn ur_to_ul(&self) -> u16 {
        let mut a = 0;
        let mut x = 0;
        let mut arr = [UR; 3];
        for j in 0..12 {
            if self.ep[j] as usize <= UL as usize {
                a += binomial(j, x + 1) as u16;
                arr[x] = self.ep[j];
                x += 1;
            }
        }
        let mut b = 0;
        for j in (1..3).rev() {
            let mut k = 0;
            while arr[j] as usize != j {
                arr[..=j].rotate_left(1);
                k += 1;
            }
            b = (j as u16 + 1) * b + k;
        }
        6 * a + b
    }

    pub fn set_ur_to_ul(&mut self, idx: u16) {
        let mut edges = [UR, UF, UL];
        let mut perm = (idx % 6) as usize;
        let mut comb = i32::from(idx / 6);

        self.ep = [BR; 12];
        for j in 1..3 {
            let mut k = perm % (j + 1);
            perm /= j + 1;
            while k > 0 {
                edges[..=j].rotate_right(1);
                k -= 1;
            }
        }

        let mut x = 2i32;
        for j in (0..12).rev() {
            let c = binomial(j, (x + 1) as usize) as i32;
            if comb - c >= 0 {
                self.ep[j] = edges[x as usize];
                comb -= c;
                x -= 1;
            }
        }
    }

    /// Position and order of the edges UB, DR, DF, the counterpart of
    /// [`Self::ur_to_ul`].
    pub fn ub_to_df(&self) -> u16 {
        let mut a = 0;
        let mut x = 0;
        let mut arr = [UB; 3];
        for j in 0..12 {
            let e = self.ep[j] as usize;
            if (UB as usize..=DF as usize).contains(&e) {
                a += binomial(j, x + 1) as u16;
                arr[x] = self.ep[j];
                x += 1;
            }
        }
        let mut b = 0;
        for j in (1..3).rev() {
            let mut k = 0;
            while arr[j] as usize != UB as usize + j {
                arr[..=j].rotate_left(1);
                k += 1;
            }
            b = (j as u16 + 1) * b + k;
        }
        6 * a + b
    }

    pub fn set_ub_to_df(&mut self, idx: u16) {
        let mut edges = [UB, DR, DF];
        let mut perm = (idx % 6) as usize;
        let mut comb = i32::from(idx / 6);

        self.ep = [BR; 12];
        for j in 1..3 {
            let mut k = perm % (j + 1);
            perm /= j + 1;
            while k > 0 {
                edges[..=j].rotate_right(1);
                k -= 1;
            }
        }

        let mut x = 2i32;
        for j in (0..12).rev() {
            let c = binomial(j, (x + 1) as usize) as i32;
            if comb - c >= 0 {
                self.ep[j] = edges[x as usize];
                comb -= c;
                x -= 1;
            }
        }
    }

    /// Combine the two partial edge coordinates into the full phase 2 edge
    /// coordinate, or `None` when their slots collide. Both inputs must lie
    /// below 336, which holds whenever the slice edges are in the middle
    /// layer.
    pub fn merge_ur_to_df(ur_to_ul: u16, ub_to_df: u16) -> Option<u16> {
        let mut a = CubieCube::SOLVED;
        let mut b = CubieCube::SOLVED;
        a.set_ur_to_ul(ur_to_ul);
        b.set_ub_to_df(ub_to_df);
        for i in 0..8 {
            if a.ep[i] != BR {
                if b.ep[i] != BR {
                    return None;
                }
                b.ep[i] = a.ep[i];
            }
        }
        Some(b.ur_to_df() as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::parse_alg;

    fn scrambled(alg: &str) -> CubieCube {
        let mut cube = CubieCube::SOLVED;
        cube.apply_moves(&parse_alg(alg).unwrap());
        cube
    }

    #[test]
    fn four_quarter_turns_restore_identity() {
        for basic in &MOVES {
            let mut cube = CubieCube::SOLVED;
            for _ in 0..4 {
                cube.multiply(basic);
            }
            assert_eq!(cube, CubieCube::SOLVED);
        }
    }

    #[test]
    fn move_templates_are_legal() {
        for basic in &MOVES {
            assert_eq!(basic.verify(), Ok(()));
        }
    }

    #[test]
    fn quarter_turn_flips_parity() {
        assert_eq!(CubieCube::SOLVED.corner_parity(), 0);
        assert_eq!(CubieCube::SOLVED.edge_parity(), 0);
        let cube = scrambled("R");
        assert_eq!(cube.corner_parity(), 1);
        assert_eq!(cube.edge_parity(), 1);
        let cube = scrambled("R2");
        assert_eq!(cube.corner_parity(), 0);
    }

    #[test]
    fn twist_round_trip() {
        let mut cube = CubieCube::SOLVED;
        for x in 0..2187 {
            cube.set_twist(x);
            assert_eq!(cube.twist(), x);
            assert_eq!(cube.co.iter().sum::<u8>() % 3, 0);
        }
    }

    #[test]
    fn flip_round_trip() {
        let mut cube = CubieCube::SOLVED;
        for x in 0..2048 {
            cube.set_flip(x);
            assert_eq!(cube.flip(), x);
            assert_eq!(cube.eo.iter().sum::<u8>() % 2, 0);
        }
    }

    #[test]
    fn fr_to_br_round_trip() {
        let mut cube = CubieCube::SOLVED;
        for x in 0..11880 {
            cube.set_fr_to_br(x);
            assert_eq!(cube.fr_to_br(), x);
        }
    }

    #[test]
    fn urf_to_dlf_round_trip() {
        let mut cube = CubieCube::SOLVED;
        for x in 0..20160 {
            cube.set_urf_to_dlf(x);
            assert_eq!(cube.urf_to_dlf(), x);
        }
    }

    #[test]
    fn ur_to_df_round_trip() {
        let mut cube = CubieCube::SOLVED;
        for x in 0..20160 {
            cube.set_ur_to_df(x);
            assert_eq!(cube.ur_to_df(), u32::from(x));
        }
    }

    #[test]
    fn partial_edge_round_trips() {
        let mut cube = CubieCube::SOLVED;
        for x in 0..1320 {
            cube.set_ur_to_ul(x);
            assert_eq!(cube.ur_to_ul(), x);
            cube.set_ub_to_df(x);
            assert_eq!(cube.ub_to_df(), x);
        }
    }

    #[test]
    fn solved_coordinates() {
        let cube = CubieCube::SOLVED;
        assert_eq!(cube.twist(), 0);
        assert_eq!(cube.flip(), 0);
        assert_eq!(cube.fr_to_br(), 0);
        assert_eq!(cube.urf_to_dlf(), 0);
        assert_eq!(cube.ur_to_df(), 0);
        assert_eq!(cube.ur_to_ul(), 0);
        // UB, DR, DF sit in slots 3, 4, 5: rank C(3,1) + C(4,2) + C(5,3).
        assert_eq!(cube.ub_to_df(), 114);
    }

    #[test]
    fn merge_recovers_solved_edges() {
        assert_eq!(CubieCube::merge_ur_to_df(0, 114), Some(0));
        // Both seeds occupy slots 0..3, so merging must fail.
        assert_eq!(CubieCube::merge_ur_to_df(0, 0), None);
    }

    #[test]
    fn merge_agrees_with_direct_coordinate() {
        fastrand::seed(11);
        let phase2 = parse_alg("U D R2 L2 F2 B2 U2 D2 U' D'").unwrap();
        for _ in 0..40 {
            let mut cube = CubieCube::SOLVED;
            for _ in 0..25 {
                cube.apply_move(phase2[fastrand::usize(..phase2.len())]);
            }
            let merged = CubieCube::merge_ur_to_df(cube.ur_to_ul(), cube.ub_to_df());
            assert_eq!(merged, Some(cube.ur_to_df() as u16));
        }
    }

    #[test]
    fn scrambles_stay_legal() {
        let cube = scrambled("R U2 F' L D B2 R' F2 D' L2 U B");
        assert_eq!(cube.verify(), Ok(()));
    }

    #[test]
    fn verify_rejects_duplicate_edge() {
        let mut cube = CubieCube::SOLVED;
        cube.ep[0] = Edge::UF;
        assert_eq!(cube.verify(), Err(StateError::EdgeCount));
    }

    #[test]
    fn verify_rejects_single_flip() {
        let mut cube = CubieCube::SOLVED;
        cube.eo[0] = 1;
        assert_eq!(cube.verify(), Err(StateError::EdgeFlip));
    }

    #[test]
    fn verify_rejects_duplicate_corner() {
        let mut cube = CubieCube::SOLVED;
        cube.cp[0] = Corner::UFL;
        assert_eq!(cube.verify(), Err(StateError::CornerCount));
    }

    #[test]
    fn verify_rejects_single_twist() {
        let mut cube = CubieCube::SOLVED;
        cube.co[0] = 1;
        assert_eq!(cube.verify(), Err(StateError::CornerTwist));
    }

    #[test]
    fn verify_rejects_parity_mismatch() {
        let mut cube = CubieCube::SOLVED;
        cube.ep.swap(0, 1);
        assert_eq!(cube.verify(), Err(StateError::PermutationParity));
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(StateError::EdgeCount.code(), 2);
        assert_eq!(StateError::EdgeFlip.code(), 3);
        assert_eq!(StateError::CornerCount.code(), 4);
        assert_eq!(StateError::CornerTwist.code(), 5);
        assert_eq!(StateError::PermutationParity.code(), 6);
    }
}
