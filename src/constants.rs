//! Constants for board geometry, bead counts, and search parameters.
//!
//! Each side of a Kalah board is a row of [`PITS`] playable pits followed by
//! the side's store, so a row is laid out as `[pit0, ..., pit5, store]`.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of playable pits per side.
pub const PITS: usize = 6;

/// Index of the store ("goal") within a side's row.
pub const STORE: usize = PITS;

/// Length of a side's row: the pits plus the store.
pub const ROW_LEN: usize = PITS + 1;

/// Length of the sowing cycle seen by the mover: own pits, own store, and the
/// opponent's pits. The opponent's store is never part of the cycle.
pub const CYCLE_LEN: usize = 2 * PITS + 1;

// =============================================================================
// Bead Counts
// =============================================================================

/// Beads placed in every pit at the start of a standard game.
pub const DEFAULT_BEADS: u32 = 4;

/// Upper bound on beads per pit at the start. Keeps every count on the
/// board, and the store differential, well inside `i32`.
pub const MAX_BEADS: u32 = 1000;

/// Total beads on a standard board (48).
pub const STANDARD_TOTAL: u32 = DEFAULT_BEADS * (2 * PITS as u32);

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth (plies) for the computer player.
pub const DEFAULT_DEPTH: u32 = 4;

/// Bound used for the initial alpha-beta window. Larger than any reachable
/// store differential.
pub const SCORE_INF: i32 = i32::MAX;
