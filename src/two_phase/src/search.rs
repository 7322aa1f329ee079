//! The two phase search.
//!
//! Phase 1 runs iterative deepening over (twist, flip, slice) until the
//! path lands in the subgroup generated by U, D and the four half turns.
//! Each such landing reseeds the phase 2 coordinates by replaying the
//! prefix through the phase 2 move tables and runs a second, much smaller
//! deepening search restricted to that subgroup. The search keeps no
//! per-node allocations: every depth owns one slot in a set of parallel
//! arrays, and a pointer `n` walks up and down the stack.

use std::time::{Duration, Instant};

use cube_core::cubie::CubieCube;
use cube_core::moves::{Move, Solution, FACES};
use cube_core::StateError;
use log::debug;
use thiserror::Error;

use crate::coord::{CoordCube, N_MERGE, N_MOVE, N_SLICE1, N_SLICE2};
use crate::tables::{Tables, PARITY_MOVE, TABLES};

/// Face turn budget for a whole solution, phase 1 plus phase 2.
pub const DEFAULT_MAX_DEPTH: usize = 21;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The stack must cover max depth plus the phase 2 lookahead, which can
/// briefly run past the final solution length.
const STACK: usize = 40;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    #[error("invalid cube state: {0}")]
    Invalid(#[from] StateError),
    #[error("no solution within the move limit")]
    DepthExceeded,
    #[error("search timed out")]
    Timeout,
}

impl SolveError {
    /// Stable tag used by the `Error N` output token.
    pub fn code(self) -> u8 {
        match self {
            SolveError::Invalid(e) => e.code(),
            SolveError::DepthExceeded => 7,
            SolveError::Timeout => 8,
        }
    }
}

/// Reusable search state. One solver owns its stack exclusively;
/// concurrent solves each need their own.
pub struct TwoPhaseSolver<'a> {
    tables: &'a Tables,
    max_depth: usize,
    timeout: Duration,
    axis: [usize; STACK],
    power: [usize; STACK],
    flip: [usize; STACK],
    twist: [usize; STACK],
    slice: [usize; STACK],
    parity: [usize; STACK],
    urf_to_dlf: [usize; STACK],
    fr_to_br: [usize; STACK],
    ur_to_ul: [usize; STACK],
    ub_to_df: [usize; STACK],
    ur_to_df: [usize; STACK],
    min_dist1: [usize; STACK],
    min_dist2: [usize; STACK],
}

impl<'a> TwoPhaseSolver<'a> {
    #[must_use]
    pub fn new(tables: &'a Tables) -> Self {
        TwoPhaseSolver {
            tables,
            max_depth: DEFAULT_MAX_DEPTH,
            timeout: DEFAULT_TIMEOUT,
            axis: [0; STACK],
            power: [0; STACK],
            flip: [0; STACK],
            twist: [0; STACK],
            slice: [0; STACK],
            parity: [0; STACK],
            urf_to_dlf: [0; STACK],
            fr_to_br: [0; STACK],
            ur_to_ul: [0; STACK],
            ub_to_df: [0; STACK],
            ur_to_df: [0; STACK],
            min_dist1: [0; STACK],
            min_dist2: [0; STACK],
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(STACK - 11);
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Find a face turn sequence that solves `cube`.
    pub fn solve(&mut self, cube: &CubieCube) -> Result<Solution, SolveError> {
        cube.verify()?;
        if *cube == CubieCube::SOLVED {
            return Ok(Solution::default());
        }

        let coords = CoordCube::from_cubie(cube);
        self.axis[0] = 0;
        self.power[0] = 0;
        self.flip[0] = coords.flip as usize;
        self.twist[0] = coords.twist as usize;
        self.parity[0] = coords.parity as usize;
        self.slice[0] = coords.fr_to_br as usize / 24;
        self.urf_to_dlf[0] = coords.urf_to_dlf as usize;
        self.fr_to_br[0] = coords.fr_to_br as usize;
        self.ur_to_ul[0] = coords.ur_to_ul as usize;
        self.ub_to_df[0] = coords.ub_to_df as usize;
        // Sentinel so the very first expansion is not pruned away.
        self.min_dist1[1] = 1;

        let start = Instant::now();
        let mut n = 0;
        let mut busy = false;
        let mut depth1 = 1;

        loop {
            // Pick the next move at depth n, backtracking on exhaustion.
            loop {
                if depth1 - n > self.min_dist1[n + 1] && !busy {
                    // Expand. Children of a U or D move start on R, so the
                    // same-face and same-axis skips hold without a check.
                    let start_axis = usize::from(self.axis[n] == 0 || self.axis[n] == 3);
                    n += 1;
                    self.axis[n] = start_axis;
                    self.power[n] = 1;
                } else {
                    self.power[n] += 1;
                    if self.power[n] > 3 {
                        // Powers exhausted: advance the axis, popping the
                        // stack when the face runs out too.
                        loop {
                            self.axis[n] += 1;
                            if self.axis[n] > 5 {
                                if start.elapsed() > self.timeout {
                                    return Err(SolveError::Timeout);
                                }
                                if n == 0 {
                                    if depth1 >= self.max_depth {
                                        return Err(SolveError::DepthExceeded);
                                    }
                                    depth1 += 1;
                                    debug!("phase 1 deepening to {depth1}");
                                    self.axis[0] = 0;
                                    self.power[0] = 1;
                                    busy = false;
                                    break;
                                }
                                n -= 1;
                                busy = true;
                                break;
                            }
                            self.power[n] = 1;
                            busy = false;
                            // Skip the parent's face and the canonical-order
                            // violation on the same spatial axis.
                            if n == 0
                                || (self.axis[n - 1] != self.axis[n]
                                    && self.axis[n - 1] != self.axis[n] + 3)
                            {
                                break;
                            }
                        }
                    } else {
                        busy = false;
                    }
                }
                if !busy {
                    break;
                }
            }

            // Step the phase 1 coordinates through the chosen move.
            let mv = 3 * self.axis[n] + self.power[n] - 1;
            self.flip[n + 1] = self.tables.flip_move[N_MOVE * self.flip[n] + mv] as usize;
            self.twist[n + 1] = self.tables.twist_move[N_MOVE * self.twist[n] + mv] as usize;
            self.slice[n + 1] =
                self.tables.fr_to_br_move[N_MOVE * (self.slice[n] * 24) + mv] as usize / 24;
            self.min_dist1[n + 1] = self
                .tables
                .slice_flip_prune
                .get(N_SLICE1 * self.flip[n + 1] + self.slice[n + 1])
                .max(
                    self.tables
                        .slice_twist_prune
                        .get(N_SLICE1 * self.twist[n + 1] + self.slice[n + 1]),
                ) as usize;

            if self.min_dist1[n + 1] == 0 && n + 5 >= depth1 {
                // In the subgroup. Block re-entry at this node and, when the
                // full phase 1 budget is spent, try to finish in phase 2.
                self.min_dist1[n + 1] = 10;
                if n + 1 == depth1 {
                    if let Some(total) = self.total_depth(depth1) {
                        // Accept unless the phase boundary stitches two
                        // turns of the same face, or of opposite faces in
                        // canonical-order violation; a shorter solution
                        // exists in that case and the search will find it.
                        if total == depth1
                            || (self.axis[depth1 - 1] != self.axis[depth1]
                                && self.axis[depth1 - 1] != self.axis[depth1] + 3)
                        {
                            return Ok(self.solution(total));
                        }
                    }
                }
            }
        }
    }

    /// Phase 2: replay the phase 1 prefix through the phase 2 move tables,
    /// then deepen inside the subgroup. Returns the combined length, or
    /// `None` when no completion fits the budget.
    fn total_depth(&mut self, depth1: usize) -> Option<usize> {
        let t = self.tables;
        let max_depth2 = self.max_depth.saturating_sub(depth1).min(10);

        for i in 0..depth1 {
            let mv = 3 * self.axis[i] + self.power[i] - 1;
            self.urf_to_dlf[i + 1] = t.urf_to_dlf_move[N_MOVE * self.urf_to_dlf[i] + mv] as usize;
            self.fr_to_br[i + 1] = t.fr_to_br_move[N_MOVE * self.fr_to_br[i] + mv] as usize;
            self.parity[i + 1] = PARITY_MOVE[self.parity[i]][mv] as usize;
        }

        let d1 = t
            .slice_urf_to_dlf_parity_prune
            .get((N_SLICE2 * self.urf_to_dlf[depth1] + self.fr_to_br[depth1]) * 2 + self.parity[depth1])
            as usize;
        if d1 > max_depth2 {
            return None;
        }

        for i in 0..depth1 {
            let mv = 3 * self.axis[i] + self.power[i] - 1;
            self.ur_to_ul[i + 1] = t.ur_to_ul_move[N_MOVE * self.ur_to_ul[i] + mv] as usize;
            self.ub_to_df[i + 1] = t.ub_to_df_move[N_MOVE * self.ub_to_df[i] + mv] as usize;
        }
        self.ur_to_df[depth1] =
            t.merge_ur_to_df[N_MERGE * self.ur_to_ul[depth1] + self.ub_to_df[depth1]] as usize;

        let d2 = t
            .slice_ur_to_df_parity_prune
            .get((N_SLICE2 * self.ur_to_df[depth1] + self.fr_to_br[depth1]) * 2 + self.parity[depth1])
            as usize;
        if d2 > max_depth2 {
            return None;
        }

        self.min_dist2[depth1] = d1.max(d2);
        if self.min_dist2[depth1] == 0 {
            return Some(depth1);
        }

        let mut depth2 = 1;
        let mut n = depth1;
        let mut busy = false;
        self.axis[depth1] = 0;
        self.power[depth1] = 0;
        self.min_dist2[n + 1] = 1;

        loop {
            loop {
                if depth1 + depth2 - n > self.min_dist2[n + 1] && !busy {
                    let from_ud = self.axis[n] == 0 || self.axis[n] == 3;
                    n += 1;
                    if from_ud {
                        self.axis[n] = 1;
                        self.power[n] = 2;
                    } else {
                        self.axis[n] = 0;
                        self.power[n] = 1;
                    }
                } else {
                    // U and D run through all three powers; the other four
                    // faces allow only the half turn.
                    let overflow = if self.axis[n] == 0 || self.axis[n] == 3 {
                        self.power[n] += 1;
                        self.power[n] > 3
                    } else {
                        self.power[n] += 2;
                        self.power[n] > 3
                    };
                    if overflow {
                        loop {
                            self.axis[n] += 1;
                            if self.axis[n] > 5 {
                                if n == depth1 {
                                    if depth2 >= max_depth2 {
                                        return None;
                                    }
                                    depth2 += 1;
                                    self.axis[n] = 0;
                                    self.power[n] = 1;
                                    busy = false;
                                    break;
                                }
                                n -= 1;
                                busy = true;
                                break;
                            }
                            self.power[n] =
                                if self.axis[n] == 0 || self.axis[n] == 3 { 1 } else { 2 };
                            busy = false;
                            if n == depth1
                                || (self.axis[n - 1] != self.axis[n]
                                    && self.axis[n - 1] != self.axis[n] + 3)
                            {
                                break;
                            }
                        }
                    } else {
                        busy = false;
                    }
                }
                if !busy {
                    break;
                }
            }

            let mv = 3 * self.axis[n] + self.power[n] - 1;
            self.urf_to_dlf[n + 1] = t.urf_to_dlf_move[N_MOVE * self.urf_to_dlf[n] + mv] as usize;
            self.fr_to_br[n + 1] = t.fr_to_br_move[N_MOVE * self.fr_to_br[n] + mv] as usize;
            self.parity[n + 1] = PARITY_MOVE[self.parity[n]][mv] as usize;
            self.ur_to_df[n + 1] = t.ur_to_df_move[N_MOVE * self.ur_to_df[n] + mv] as usize;
            self.min_dist2[n + 1] = t
                .slice_ur_to_df_parity_prune
                .get((N_SLICE2 * self.ur_to_df[n + 1] + self.fr_to_br[n + 1]) * 2 + self.parity[n + 1])
                .max(t.slice_urf_to_dlf_parity_prune.get(
                    (N_SLICE2 * self.urf_to_dlf[n + 1] + self.fr_to_br[n + 1]) * 2
                        + self.parity[n + 1],
                )) as usize;

            if self.min_dist2[n + 1] == 0 {
                return Some(depth1 + depth2);
            }
        }
    }

    fn solution(&self, length: usize) -> Solution {
        Solution(
            (0..length)
                .map(|i| Move::new(FACES[self.axis[i]], self.power[i] as u8))
                .collect(),
        )
    }
}

/// Solve with the process-wide tables and default limits.
pub fn solve(cube: &CubieCube) -> Result<Solution, SolveError> {
    TwoPhaseSolver::new(&TABLES).solve(cube)
}
