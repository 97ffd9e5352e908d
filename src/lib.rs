//! # magic-square
//!
//! Rules engine for the Magic Square number-placement board game.
//!
//! Players take turns playing number cards from a small hand onto a
//! shared square grid. A card either adds to the target cell or takes
//! the (clamped) difference with it. Each player pursues a personal
//! mission: a numeric pattern (sum, multiples, arithmetic or geometric
//! progression, primes) over a row, column, diagonal, or the whole
//! board. After every move the board is checked against all missions,
//! and the players whose missions it satisfies are the winners of that
//! moment.
//!
//! ## Design Principles
//!
//! 1. **Explicit Catalogs**: Mission pools are plain values
//!    ([`MissionCatalog`]), not globals. Tests register tiny pools;
//!    production uses [`MissionCatalog::standard`].
//!
//! 2. **Seeded Randomness**: Every random draw flows through a
//!    [`GameRng`] owned by the state, so a seed reproduces a whole
//!    session and snapshots resume mid-stream.
//!
//! 3. **Pure Evaluation**: Win checks ([`is_victory`] and friends) are
//!    free functions over a board, usable for hints and analysis
//!    without touching game state.
//!
//! ## Example
//!
//! ```
//! use magic_square::{GameBuilder, MissionCatalog, Move, Operation, PlayerId};
//!
//! let catalog = MissionCatalog::standard();
//! let mut state = GameBuilder::new()
//!     .player("alice")
//!     .player("bob")
//!     .build(&catalog, 42)
//!     .unwrap();
//!
//! let player = state.current_turn();
//! let mv = Move { x: 0, y: 0, hand_index: 0, operation: Operation::Add };
//! let outcome = state.apply_move(player, mv).unwrap();
//!
//! assert_eq!(state.board().get(0, 0), Some(outcome.cell_value));
//! assert_eq!(state.current_turn(), PlayerId::new(1));
//! ```
//!
//! ## Modules
//!
//! - `core`: Player IDs, RNG, rules configuration, the game state
//! - `board`: The grid and its rows, columns, and diagonals
//! - `missions`: Mission definitions and the standard catalog
//! - `rules`: Win-condition evaluation and move handling
//! - `session`: Building the initial state

pub mod board;
pub mod core;
pub mod missions;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState,
    GameState, Hand,
    PlayerId, PlayerMap,
    Rules,
};

pub use crate::board::{Board, Line};

pub use crate::missions::{Mission, MissionCatalog, MissionId, PatternKind, TargetShape};

pub use crate::rules::{
    compute_cell_result, is_prime, is_victory, satisfies_board, satisfies_line,
    IllegalMove, Move, MoveOutcome, Operation, ALL_CELLS_THRESHOLD,
};

pub use crate::session::{GameBuilder, SetupError};
