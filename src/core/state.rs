//! Game state: the complete session aggregate.
//!
//! `GameState` owns everything a running game needs: the board, each
//! player's hand and mission, turn/round bookkeeping, the rules, the
//! winners of the latest move, and the RNG that drives replacement
//! draws. The whole aggregate serializes losslessly, so a snapshot can
//! be restored and replayed identically.
//!
//! States are produced by [`GameBuilder`](crate::session::GameBuilder);
//! there is no bare constructor. Moves are applied through the methods
//! in [`crate::rules`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::missions::Mission;

use super::config::Rules;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;

/// A player's hand of number cards, in draw order.
pub type Hand = SmallVec<[i64; 4]>;

/// Complete state of one game session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// External player identifiers, in seat order.
    pub(crate) players: Vec<String>,

    /// The board.
    pub(crate) board: Board,

    /// Each player's hand.
    pub(crate) hands: PlayerMap<Hand>,

    /// Each player's assigned mission.
    pub(crate) missions: PlayerMap<Mission>,

    /// The player whose turn it is.
    pub(crate) current_turn: PlayerId,

    /// Completed rounds (full passes over all players).
    pub(crate) round_count: u32,

    /// The rules this session was started with.
    pub(crate) rules: Rules,

    /// Winners of the most recent move. Empty if it produced none.
    pub(crate) winners: Vec<PlayerId>,

    /// RNG for replacement draws.
    pub(crate) rng: GameRng,
}

impl GameState {
    /// External player identifiers, in seat order.
    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// The external identifier of a player.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.players[player.index()]
    }

    /// Number of players in the session.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Iterate over all player IDs in seat order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.players.len())
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the board, for drivers that stage or restore
    /// positions outside normal play.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// A player's hand, in draw order.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[i64] {
        &self.hands[player]
    }

    /// A player's assigned mission.
    #[must_use]
    pub fn mission(&self, player: PlayerId) -> &Mission {
        &self.missions[player]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_turn(&self) -> PlayerId {
        self.current_turn
    }

    /// Completed rounds. Increments when the turn wraps back to the
    /// first player.
    #[must_use]
    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    /// The rules this session was started with.
    #[must_use]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Winners of the most recent move, in seat order.
    ///
    /// Empty if the latest move (or the game start) produced no winner.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }
}
