//! Precomputed move and pruning tables.
//!
//! Move tables map a coordinate and a move to the resulting coordinate, so
//! the search applies moves with one lookup instead of cubie composition.
//! Pruning tables hold the breadth-first distance from the solved
//! coordinate tuple and drive the IDA* cutoff. Everything is built once
//! behind [`TABLES`] and read-only afterwards, so the search may share the
//! tables freely across threads.

use std::sync::LazyLock;
use std::time::Instant;

use cube_core::cubie::{CubieCube, MOVES};
use log::info;

use crate::coord::{
    N_FLIP, N_FR_TO_BR, N_MERGE, N_MOVE, N_SLICE1, N_SLICE2, N_TWIST, N_UB_TO_DF, N_URF_TO_DLF,
    N_UR_TO_DF, N_UR_TO_UL, PHASE2_MOVES,
};

/// Quarter turns toggle permutation parity, half turns preserve it.
pub const PARITY_MOVE: [[u16; N_MOVE]; 2] = [
    [1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1],
    [0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0],
];

/// A lower bound table packed two 4-bit entries per byte, low nibble
/// first. The sentinel 0xF marks entries the breadth-first sweep has not
/// reached yet; both phase graphs have diameter well below 15, so real
/// distances never collide with it.
pub struct PruningTable {
    data: Vec<u8>,
    len: usize,
}

impl PruningTable {
    const UNVISITED: u8 = 0x0F;

    fn new(len: usize) -> Self {
        PruningTable {
            data: vec![0xFF; len.div_ceil(2)],
            len,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> u8 {
        let byte = self.data[idx / 2];
        if idx % 2 == 0 {
            byte & 0x0F
        } else {
            byte >> 4
        }
    }

    fn set(&mut self, idx: usize, value: u8) {
        let byte = &mut self.data[idx / 2];
        if idx % 2 == 0 {
            *byte = (*byte & 0xF0) | value;
        } else {
            *byte = (*byte & 0x0F) | (value << 4);
        }
    }
}

/// Every table the two phase search consults.
pub struct Tables {
    pub twist_move: Vec<u16>,
    pub flip_move: Vec<u16>,
    pub fr_to_br_move: Vec<u16>,
    pub urf_to_dlf_move: Vec<u16>,
    pub ur_to_df_move: Vec<u16>,
    pub ur_to_ul_move: Vec<u16>,
    pub ub_to_df_move: Vec<u16>,
    /// 336 x 336 lookup combining the two partial edge coordinates into
    /// the phase 2 edge coordinate. `u16::MAX` marks colliding seeds,
    /// which no reachable phase 2 state produces.
    pub merge_ur_to_df: Vec<u16>,
    pub slice_twist_prune: PruningTable,
    pub slice_flip_prune: PruningTable,
    pub slice_urf_to_dlf_parity_prune: PruningTable,
    pub slice_ur_to_df_parity_prune: PruningTable,
}

/// The process-wide tables. First access pays the build; later observers
/// block until it completes and then read immutable data.
pub static TABLES: LazyLock<Tables> = LazyLock::new(Tables::generate);

impl Tables {
    #[must_use]
    pub fn generate() -> Self {
        let start = Instant::now();
        info!("building move tables");

        let twist_move = build_move_table(
            N_TWIST,
            CubieCube::set_twist,
            CubieCube::twist,
            CubieCube::corner_multiply,
        );
        let flip_move = build_move_table(
            N_FLIP,
            CubieCube::set_flip,
            CubieCube::flip,
            CubieCube::edge_multiply,
        );
        let fr_to_br_move = build_move_table(
            N_FR_TO_BR,
            CubieCube::set_fr_to_br,
            CubieCube::fr_to_br,
            CubieCube::edge_multiply,
        );
        let urf_to_dlf_move = build_move_table(
            N_URF_TO_DLF,
            CubieCube::set_urf_to_dlf,
            CubieCube::urf_to_dlf,
            CubieCube::corner_multiply,
        );
        let ur_to_ul_move = build_move_table(
            N_UR_TO_UL,
            CubieCube::set_ur_to_ul,
            CubieCube::ur_to_ul,
            CubieCube::edge_multiply,
        );
        let ub_to_df_move = build_move_table(
            N_UB_TO_DF,
            CubieCube::set_ub_to_df,
            CubieCube::ub_to_df,
            CubieCube::edge_multiply,
        );
        let ur_to_df_move = build_ur_to_df_move();
        let merge_ur_to_df = build_merge_table();

        info!("building pruning tables");
        let slice_twist_prune = build_phase1_prune(N_TWIST, &twist_move, &fr_to_br_move);
        let slice_flip_prune = build_phase1_prune(N_FLIP, &flip_move, &fr_to_br_move);
        let slice_urf_to_dlf_parity_prune = build_phase2_prune(&urf_to_dlf_move, &fr_to_br_move);
        let slice_ur_to_df_parity_prune = build_phase2_prune(&ur_to_df_move, &fr_to_br_move);

        info!("tables ready in {:.3}s", start.elapsed().as_secs_f64());
        Tables {
            twist_move,
            flip_move,
            fr_to_br_move,
            urf_to_dlf_move,
            ur_to_df_move,
            ur_to_ul_move,
            ub_to_df_move,
            merge_ur_to_df,
            slice_twist_prune,
            slice_flip_prune,
            slice_urf_to_dlf_parity_prune,
            slice_ur_to_df_parity_prune,
        }
    }
}

/// Enumerate a coordinate, materialize a representative state, and read
/// the coordinate back after each of the 18 moves. The fourth quarter turn
/// of each face restores the probe.
fn build_move_table(
    count: usize,
    set: impl Fn(&mut CubieCube, u16),
    get: impl Fn(&CubieCube) -> u16,
    multiply: impl Fn(&mut CubieCube, &CubieCube),
) -> Vec<u16> {
    let mut table = vec![0; count * N_MOVE];
    let mut probe = CubieCube::SOLVED;
    for i in 0..count {
        set(&mut probe, i as u16);
        for face in 0..6 {
            for power in 0..3 {
                multiply(&mut probe, &MOVES[face]);
                table[N_MOVE * i + 3 * face + power] = get(&probe);
            }
            multiply(&mut probe, &MOVES[face]);
        }
    }
    table
}

/// The merged edge coordinate is only defined while the slice edges stay
/// in the middle layer, so quarter turns of R, F, L and B have no column;
/// those entries stay zero and are never consulted.
fn build_ur_to_df_move() -> Vec<u16> {
    let mut table = vec![0; N_UR_TO_DF * N_MOVE];
    let mut probe = CubieCube::SOLVED;
    for i in 0..N_UR_TO_DF {
        probe.set_ur_to_df(i as u16);
        for face in 0..6 {
            for power in 0..3 {
                probe.edge_multiply(&MOVES[face]);
                let mv = 3 * face + power;
                if PHASE2_MOVES.contains(&mv) {
                    table[N_MOVE * i + mv] = probe.ur_to_df() as u16;
                }
            }
            probe.edge_multiply(&MOVES[face]);
        }
    }
    table
}

fn build_merge_table() -> Vec<u16> {
    let mut table = vec![0; N_MERGE * N_MERGE];
    for ur_to_ul in 0..N_MERGE {
        for ub_to_df in 0..N_MERGE {
            table[N_MERGE * ur_to_ul + ub_to_df] =
                CubieCube::merge_ur_to_df(ur_to_ul as u16, ub_to_df as u16).unwrap_or(u16::MAX);
        }
    }
    table
}

/// Breadth-first distances over (orientation, coarse slice) pairs under
/// all 18 moves. The coarse slice steps through the sorted slice table at
/// a representative with order zero.
fn build_phase1_prune(n_coord: usize, coord_move: &[u16], fr_to_br_move: &[u16]) -> PruningTable {
    let size = N_SLICE1 * n_coord;
    let mut table = PruningTable::new(size);
    table.set(0, 0);
    let mut filled = 1;
    let mut depth = 0;
    while filled < size {
        for i in 0..size {
            if table.get(i) != depth {
                continue;
            }
            let coord = i / N_SLICE1;
            let slice = i % N_SLICE1;
            for mv in 0..N_MOVE {
                let next_coord = coord_move[N_MOVE * coord + mv] as usize;
                let next_slice = fr_to_br_move[N_MOVE * (slice * 24) + mv] as usize / 24;
                let next = N_SLICE1 * next_coord + next_slice;
                if table.get(next) == PruningTable::UNVISITED {
                    table.set(next, depth + 1);
                    filled += 1;
                }
            }
        }
        depth += 1;
    }
    table
}

/// Breadth-first distances over (permutation, slice order, parity)
/// triples under the ten phase 2 moves. Works for both the corner and the
/// edge permutation coordinate since their ranges coincide.
fn build_phase2_prune(perm_move: &[u16], fr_to_br_move: &[u16]) -> PruningTable {
    let size = N_SLICE2 * N_URF_TO_DLF * 2;
    let mut table = PruningTable::new(size);
    table.set(0, 0);
    let mut filled = 1;
    let mut depth = 0;
    while filled < size {
        for i in 0..size {
            if table.get(i) != depth {
                continue;
            }
            let parity = i % 2;
            let perm = (i / 2) / N_SLICE2;
            let slice = (i / 2) % N_SLICE2;
            for &mv in &PHASE2_MOVES {
                let next_slice = fr_to_br_move[N_MOVE * slice + mv] as usize;
                let next_perm = perm_move[N_MOVE * perm + mv] as usize;
                let next_parity = PARITY_MOVE[parity][mv] as usize;
                let next = (N_SLICE2 * next_perm + next_slice) * 2 + next_parity;
                if table.get(next) == PruningTable::UNVISITED {
                    table.set(next, depth + 1);
                    filled += 1;
                }
            }
        }
        depth += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_core::moves::FACES;
    use cube_core::{parse_alg, Move};

    fn inverse_column(mv: usize) -> usize {
        3 * (mv / 3) + (2 - mv % 3)
    }

    fn assert_move_unmove(table: &[u16], count: usize) {
        for coord in (0..count).step_by(7) {
            for mv in 0..N_MOVE {
                let there = table[N_MOVE * coord + mv] as usize;
                let back = table[N_MOVE * there + inverse_column(mv)] as usize;
                assert_eq!(back, coord);
            }
        }
    }

    #[test]
    fn nibble_packing_is_low_nibble_first() {
        let mut table = PruningTable::new(4);
        table.set(0, 3);
        table.set(1, 12);
        table.set(2, 7);
        assert_eq!(table.data[0], 0xC3);
        assert_eq!(table.get(0), 3);
        assert_eq!(table.get(1), 12);
        assert_eq!(table.get(2), 7);
        assert_eq!(table.get(3), PruningTable::UNVISITED);
    }

    #[test]
    fn every_move_table_inverts() {
        let t = &*TABLES;
        assert_move_unmove(&t.twist_move, N_TWIST);
        assert_move_unmove(&t.flip_move, N_FLIP);
        assert_move_unmove(&t.fr_to_br_move, N_FR_TO_BR);
        assert_move_unmove(&t.urf_to_dlf_move, N_URF_TO_DLF);
        assert_move_unmove(&t.ur_to_ul_move, N_UR_TO_UL);
        assert_move_unmove(&t.ub_to_df_move, N_UB_TO_DF);
        for coord in (0..N_UR_TO_DF).step_by(7) {
            for &mv in &PHASE2_MOVES {
                let there = t.ur_to_df_move[N_MOVE * coord + mv] as usize;
                let back = t.ur_to_df_move[N_MOVE * there + inverse_column(mv)] as usize;
                assert_eq!(back, coord);
            }
        }
    }

    #[test]
    fn parity_table_matches_move_powers() {
        for parity in 0..2usize {
            for mv in 0..N_MOVE {
                let expected = if mv % 3 == 1 {
                    parity as u16
                } else {
                    1 - parity as u16
                };
                assert_eq!(PARITY_MOVE[parity][mv], expected);
            }
        }
    }

    #[test]
    fn tables_agree_with_the_codec() {
        fastrand::seed(3);
        let t = &*TABLES;
        for _ in 0..20 {
            let mut cube = CubieCube::SOLVED;
            for _ in 0..20 {
                cube.apply_move(Move::new(FACES[fastrand::usize(..6)], fastrand::u8(1..=3)));
            }
            for face in FACES {
                for power in 1..=3 {
                    let m = Move::new(face, power);
                    let mut moved = cube;
                    moved.apply_move(m);
                    let mv = m.index();
                    assert_eq!(
                        t.twist_move[N_MOVE * cube.twist() as usize + mv],
                        moved.twist()
                    );
                    assert_eq!(t.flip_move[N_MOVE * cube.flip() as usize + mv], moved.flip());
                    assert_eq!(
                        t.fr_to_br_move[N_MOVE * cube.fr_to_br() as usize + mv],
                        moved.fr_to_br()
                    );
                    assert_eq!(
                        t.urf_to_dlf_move[N_MOVE * cube.urf_to_dlf() as usize + mv],
                        moved.urf_to_dlf()
                    );
                    assert_eq!(
                        t.ur_to_ul_move[N_MOVE * cube.ur_to_ul() as usize + mv],
                        moved.ur_to_ul()
                    );
                    assert_eq!(
                        t.ub_to_df_move[N_MOVE * cube.ub_to_df() as usize + mv],
                        moved.ub_to_df()
                    );
                    assert_eq!(
                        PARITY_MOVE[cube.corner_parity() as usize][mv],
                        moved.corner_parity()
                    );
                }
            }
        }
    }

    #[test]
    fn solved_tuple_has_distance_zero() {
        let t = &*TABLES;
        assert_eq!(t.slice_twist_prune.get(0), 0);
        assert_eq!(t.slice_flip_prune.get(0), 0);
        assert_eq!(t.slice_urf_to_dlf_parity_prune.get(0), 0);
        assert_eq!(t.slice_ur_to_df_parity_prune.get(0), 0);
    }

    fn descend_phase1(table: &PruningTable, coord_move: &[u16], start: (usize, usize)) {
        let t = &*TABLES;
        let (mut coord, mut slice) = start;
        let mut h = table.get(N_SLICE1 * coord + slice);
        let mut steps = 0;
        while h > 0 {
            let step = (0..N_MOVE).find_map(|mv| {
                let next_coord = coord_move[N_MOVE * coord + mv] as usize;
                let next_slice = t.fr_to_br_move[N_MOVE * (slice * 24) + mv] as usize / 24;
                let next_h = table.get(N_SLICE1 * next_coord + next_slice);
                (next_h == h - 1).then_some((next_coord, next_slice, next_h))
            });
            let (next_coord, next_slice, next_h) = step.expect("a BFS predecessor must exist");
            coord = next_coord;
            slice = next_slice;
            h = next_h;
            steps += 1;
            assert!(steps <= 15);
        }
        assert_eq!((coord, slice), (0, 0));
    }

    #[test]
    fn phase1_pruning_is_a_bfs_distance() {
        let t = &*TABLES;
        for alg in [
            "R U F",
            "R U2 F' L D B2 R' F2 D' L2 U B",
            "B2 L' D R F U F2 D' R2 B L' U2",
        ] {
            let mut cube = CubieCube::SOLVED;
            cube.apply_moves(&parse_alg(alg).unwrap());
            let slice = cube.fr_to_br() as usize / 24;
            descend_phase1(&t.slice_twist_prune, &t.twist_move, (cube.twist() as usize, slice));
            descend_phase1(&t.slice_flip_prune, &t.flip_move, (cube.flip() as usize, slice));
        }
    }

    #[test]
    fn phase2_pruning_is_a_bfs_distance() {
        fastrand::seed(9);
        let t = &*TABLES;
        let phase2 = parse_alg("U U2 U' D D2 D' R2 F2 L2 B2").unwrap();
        for _ in 0..5 {
            let mut cube = CubieCube::SOLVED;
            for _ in 0..18 {
                cube.apply_move(phase2[fastrand::usize(..phase2.len())]);
            }
            let mut perm = cube.urf_to_dlf() as usize;
            let mut slice = cube.fr_to_br() as usize;
            let mut parity = cube.corner_parity() as usize;
            assert!(slice < N_SLICE2);
            let index =
                |perm: usize, slice: usize, parity: usize| (N_SLICE2 * perm + slice) * 2 + parity;
            let mut h = t.slice_urf_to_dlf_parity_prune.get(index(perm, slice, parity));
            let mut steps = 0;
            while h > 0 {
                let step = PHASE2_MOVES.iter().find_map(|&mv| {
                    let next_perm = t.urf_to_dlf_move[N_MOVE * perm + mv] as usize;
                    let next_slice = t.fr_to_br_move[N_MOVE * slice + mv] as usize;
                    let next_parity = PARITY_MOVE[parity][mv] as usize;
                    let next_h = t
                        .slice_urf_to_dlf_parity_prune
                        .get(index(next_perm, next_slice, next_parity));
                    (next_h == h - 1).then_some((next_perm, next_slice, next_parity, next_h))
                });
                let (next_perm, next_slice, next_parity, next_h) =
                    step.expect("a BFS predecessor must exist");
                perm = next_perm;
                slice = next_slice;
                parity = next_parity;
                h = next_h;
                steps += 1;
                assert!(steps <= 15);
            }
            assert_eq!((perm, slice, parity), (0, 0, 0));
        }
    }
}
