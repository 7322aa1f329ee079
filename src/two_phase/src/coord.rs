//! Coordinate-level view of a cube state.
//!
//! The search never touches cubies. It works on small integers derived
//! from the cubie state once at the start of a solve, then stepped through
//! the precomputed move tables.

use cube_core::CubieCube;

/// Moves in the full alphabet, 6 faces times 3 powers.
pub const N_MOVE: usize = 18;

/// Corner orientations, 3^7.
pub const N_TWIST: usize = 2187;
/// Edge orientations, 2^11.
pub const N_FLIP: usize = 2048;
/// Positions of the four slice edges, C(12, 4). The coarse slice
/// coordinate of phase 1.
pub const N_SLICE1: usize = 495;
/// Orders of the four slice edges inside the middle layer, 4!. The slice
/// coordinate of phase 2.
pub const N_SLICE2: usize = 24;
/// Permutation parities.
pub const N_PARITY: usize = 2;
/// Positions and orders of the four slice edges anywhere, 495 * 24.
pub const N_FR_TO_BR: usize = 11880;
/// Positions and orders of the six corners URF through DLF, C(8, 6) * 6!.
pub const N_URF_TO_DLF: usize = 20160;
/// Positions and orders of the six edges UR through DF in phase 2.
pub const N_UR_TO_DF: usize = 20160;
/// Positions and orders of the edges UR, UF, UL.
pub const N_UR_TO_UL: usize = 1320;
/// Positions and orders of the edges UB, DR, DF.
pub const N_UB_TO_DF: usize = 1320;
/// Partial edge coordinates stay below this bound while the slice edges
/// are in the middle layer; the merge table only covers that square.
pub const N_MERGE: usize = 336;

/// The move columns permitted in phase 2: U and D at any power, the other
/// four faces only as half turns.
pub const PHASE2_MOVES: [usize; 10] = [0, 1, 2, 4, 7, 9, 10, 11, 13, 16];

/// Every coordinate the search seeds from an input cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordCube {
    pub twist: u16,
    pub flip: u16,
    pub parity: u16,
    pub fr_to_br: u16,
    pub urf_to_dlf: u16,
    pub ur_to_ul: u16,
    pub ub_to_df: u16,
}

impl CoordCube {
    pub fn from_cubie(cube: &CubieCube) -> Self {
        CoordCube {
            twist: cube.twist(),
            flip: cube.flip(),
            parity: cube.corner_parity(),
            fr_to_br: cube.fr_to_br(),
            urf_to_dlf: cube.urf_to_dlf(),
            ur_to_ul: cube.ur_to_ul(),
            ub_to_df: cube.ub_to_df(),
        }
    }
}
