//! Mancala board state.
//!
//! The board is two rows of [`ROW_LEN`] bead counts, one per side. Index
//! `0..PITS` are the playable pits and [`STORE`] is the side's store. The
//! board knows nothing about turns or strategy; it is a plain value that the
//! move engine and the search copy and mutate freely.

use std::fmt;

use crate::constants::{DEFAULT_BEADS, MAX_BEADS, PITS, ROW_LEN, STORE};

/// One of the two players. Player One owns side 0, Player Two owns side 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Look up a player by its external id (1 or 2).
    pub fn from_id(id: u8) -> Option<Player> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// External id: 1 for Player One, 2 for Player Two.
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Row index of this player's side.
    #[inline]
    pub fn side(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.id())
    }
}

/// Bead counts for both sides of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoardState {
    rows: [[u32; ROW_LEN]; 2],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// Standard starting layout: four beads in every pit, empty stores.
    pub fn new() -> Self {
        Self::with_beads(DEFAULT_BEADS)
    }

    /// Starting layout with `beads` in every pit.
    ///
    /// # Panics
    /// If `beads` exceeds [`MAX_BEADS`].
    pub fn with_beads(beads: u32) -> Self {
        assert!(beads <= MAX_BEADS, "{beads} beads per pit exceeds {MAX_BEADS}");
        let mut row = [beads; ROW_LEN];
        row[STORE] = 0;
        Self { rows: [row, row] }
    }

    /// Build a board from explicit rows, e.g. to set up a test position.
    pub fn from_rows(rows: [[u32; ROW_LEN]; 2]) -> Self {
        Self { rows }
    }

    /// Both rows, side 0 first.
    pub fn rows(&self) -> &[[u32; ROW_LEN]; 2] {
        &self.rows
    }

    /// The six playable pits of a player's side.
    pub fn pits(&self, player: Player) -> &[u32] {
        &self.rows[player.side()][..PITS]
    }

    /// Beads in one playable pit.
    ///
    /// # Panics
    /// If `pit` is not a playable pit index.
    #[inline]
    pub fn pit_count(&self, player: Player, pit: usize) -> u32 {
        assert!(pit < PITS, "pit index {pit} out of range");
        self.rows[player.side()][pit]
    }

    #[inline]
    pub fn store_count(&self, player: Player) -> u32 {
        self.rows[player.side()][STORE]
    }

    /// Same as [`store_count`](Self::store_count).
    pub fn score(&self, player: Player) -> u32 {
        self.store_count(player)
    }

    /// # Panics
    /// If `pit` is not a playable pit index.
    #[inline]
    pub fn add_to_pit(&mut self, player: Player, pit: usize, n: u32) {
        assert!(pit < PITS, "pit index {pit} out of range");
        self.rows[player.side()][pit] += n;
    }

    /// Empty a playable pit and return what it held.
    ///
    /// # Panics
    /// If `pit` is not a playable pit index.
    #[inline]
    pub fn clear_pit(&mut self, player: Player, pit: usize) -> u32 {
        assert!(pit < PITS, "pit index {pit} out of range");
        std::mem::take(&mut self.rows[player.side()][pit])
    }

    #[inline]
    pub fn add_to_store(&mut self, player: Player, n: u32) {
        self.rows[player.side()][STORE] += n;
    }

    /// Sum of a player's playable pits (store excluded).
    pub fn total_in_pits(&self, player: Player) -> u32 {
        self.pits(player).iter().sum()
    }

    /// Move every bead in a player's pits into that player's store.
    /// A second call is a no-op.
    pub fn sweep_into_store(&mut self, player: Player) {
        let row = &mut self.rows[player.side()];
        let swept: u32 = row[..PITS].iter_mut().map(std::mem::take).sum();
        row[STORE] += swept;
    }

    /// Beads on the whole board, stores included.
    pub fn total_beads(&self) -> u32 {
        self.rows.iter().flatten().sum()
    }

    /// Pits a player may legally sow from.
    pub fn legal_pits(&self, player: Player) -> impl Iterator<Item = usize> + '_ {
        (0..PITS).filter(move |&pit| self.rows[player.side()][pit] > 0)
    }
}

impl fmt::Display for BoardState {
    /// Two lines, side 0 first, each as `pits | store`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for count in &row[..PITS] {
                write!(f, "{count:>2} ")?;
            }
            writeln!(f, "| {:>2}", row[STORE])?;
        }
        Ok(())
    }
}
