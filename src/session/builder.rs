//! Game setup.
//!
//! [`GameBuilder`] collects players, rules, and any explicitly assigned
//! missions, then deals a starting state from a catalog and a seed. The
//! same builder, catalog, and seed always produce the same state.

use tracing::debug;

use crate::board::Board;
use crate::core::{GameRng, GameState, Hand, PlayerId, PlayerMap, Rules};
use crate::missions::{Mission, MissionCatalog, MissionId};

/// The reason a game could not be started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// The player list was empty.
    NoPlayers,
    /// More players were requested than player IDs can address.
    TooManyPlayers { count: usize },
    /// An explicitly assigned mission is not in the catalog.
    UnknownMission { id: MissionId },
    /// More missions were explicitly assigned than there are players.
    TooManyMissions { assigned: usize, players: usize },
    /// Random mission assignment was requested from an empty catalog.
    EmptyCatalog,
}

impl std::error::Error for SetupError {}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::NoPlayers => write!(f, "Cannot start a game with no players"),
            SetupError::TooManyPlayers { count } => {
                write!(f, "Cannot start a game with {} players; at most 255 are supported", count)
            }
            SetupError::UnknownMission { id } => {
                write!(f, "{} is not in the mission catalog", id)
            }
            SetupError::TooManyMissions { assigned, players } => {
                write!(f, "{} missions were assigned for only {} players", assigned, players)
            }
            SetupError::EmptyCatalog => {
                write!(f, "Cannot draw random missions from an empty catalog")
            }
        }
    }
}

/// Builder for a game session.
///
/// Players sit in the order they are added; the first player added
/// moves first. Missions assigned with [`mission`](Self::mission) bind
/// to seats in the same order, and any seats left over draw a random
/// mission from the catalog at build time.
///
/// ## Example
///
/// ```
/// use magic_square::core::PlayerId;
/// use magic_square::missions::{MissionCatalog, MissionId};
/// use magic_square::session::GameBuilder;
///
/// let catalog = MissionCatalog::standard();
/// let state = GameBuilder::new()
///     .player("alice")
///     .player("bob")
///     .mission(MissionId::new(12))
///     .build(&catalog, 7)
///     .unwrap();
///
/// assert_eq!(state.player_count(), 2);
/// assert_eq!(state.mission(PlayerId::new(0)).id, MissionId::new(12));
/// assert_eq!(state.hand(PlayerId::new(0)).len(), 3);
/// ```
pub struct GameBuilder {
    players: Vec<String>,
    rules: Rules,
    initial_hand_size: usize,
    missions: Vec<MissionId>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            rules: Rules::default(),
            initial_hand_size: 3,
            missions: Vec::new(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one player by external identifier.
    pub fn player(mut self, id: impl Into<String>) -> Self {
        self.players.push(id.into());
        self
    }

    /// Add several players in seat order.
    pub fn players<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn initial_hand_size(mut self, size: usize) -> Self {
        self.initial_hand_size = size;
        self
    }

    /// Explicitly assign a mission to the next unassigned seat.
    pub fn mission(mut self, id: MissionId) -> Self {
        self.missions.push(id);
        self
    }

    /// Explicitly assign missions to seats in order.
    pub fn missions<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = MissionId>,
    {
        self.missions.extend(ids);
        self
    }

    /// Deal the starting state.
    ///
    /// Every hand is dealt first (seat by seat, cards uniform in 1..=4),
    /// then random missions are drawn for the seats without an explicit
    /// one. A seed therefore predicts the dealt hands regardless of how
    /// many missions were assigned explicitly.
    pub fn build(self, catalog: &MissionCatalog, seed: u64) -> Result<GameState, SetupError> {
        if self.players.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        let player_count = self.players.len();
        if player_count > usize::from(u8::MAX) {
            return Err(SetupError::TooManyPlayers {
                count: player_count,
            });
        }
        if self.missions.len() > player_count {
            return Err(SetupError::TooManyMissions {
                assigned: self.missions.len(),
                players: player_count,
            });
        }

        let mut assigned: Vec<Mission> = Vec::with_capacity(player_count);
        for &id in &self.missions {
            match catalog.get(id) {
                Some(mission) => assigned.push(mission.clone()),
                None => return Err(SetupError::UnknownMission { id }),
            }
        }

        let mut rng = GameRng::new(seed);
        let initial_hand_size = self.initial_hand_size;
        let hands = PlayerMap::new(player_count, |_| {
            (0..initial_hand_size)
                .map(|_| rng.gen_range(1..5))
                .collect::<Hand>()
        });

        while assigned.len() < player_count {
            match catalog.choose(&mut rng) {
                Some(mission) => assigned.push(mission.clone()),
                None => return Err(SetupError::EmptyCatalog),
            }
        }
        let missions = PlayerMap::from_vec(assigned);

        debug!(
            player_count,
            board_size = self.rules.board_size(),
            seed,
            "Starting game"
        );

        Ok(GameState {
            players: self.players,
            board: Board::new(self.rules.board_size()),
            hands,
            missions,
            current_turn: PlayerId::new(0),
            round_count: 0,
            rules: self.rules,
            winners: Vec::new(),
            rng,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::missions::{PatternKind, TargetShape};

    #[test]
    fn test_build_two_player_defaults() {
        let catalog = MissionCatalog::standard();
        let state = GameBuilder::new()
            .player("alice")
            .player("bob")
            .build(&catalog, 1)
            .unwrap();

        assert_eq!(state.player_count(), 2);
        assert_eq!(state.players(), ["alice", "bob"]);
        assert_eq!(state.current_turn(), PlayerId::new(0));
        assert_eq!(state.round_count(), 0);
        assert!(state.winners().is_empty());
        assert_eq!(state.board().size(), 3);
        assert_eq!(state.board().occupied_count(), 0);

        for player in state.player_ids() {
            let hand = state.hand(player);
            assert_eq!(hand.len(), 3);
            assert!(hand.iter().all(|card| (1..=4).contains(card)));
            assert!(catalog.contains(state.mission(player).id));
        }
    }

    #[test]
    fn test_build_deals_hands_before_missions() {
        let catalog = MissionCatalog::standard();
        let seed = 31;
        let state = GameBuilder::new()
            .player("alice")
            .player("bob")
            .build(&catalog, seed)
            .unwrap();

        let mut probe = GameRng::new(seed);
        for player in state.player_ids() {
            let expected: Vec<i64> = (0..3).map(|_| probe.gen_range(1..5)).collect();
            assert_eq!(state.hand(player), expected.as_slice());
        }
        for player in state.player_ids() {
            let index = probe.gen_range_usize(0..catalog.len());
            let expected = catalog.mission_ids().nth(index).unwrap();
            assert_eq!(state.mission(player).id, expected);
        }
    }

    #[test]
    fn test_build_explicit_missions_bind_to_seats() {
        let catalog = MissionCatalog::standard();
        let state = GameBuilder::new()
            .players(["alice", "bob", "carol"])
            .missions([MissionId::new(47), MissionId::new(0), MissionId::new(39)])
            .build(&catalog, 5)
            .unwrap();

        assert_eq!(state.mission(PlayerId::new(0)).id, MissionId::new(47));
        assert_eq!(state.mission(PlayerId::new(1)).id, MissionId::new(0));
        assert_eq!(state.mission(PlayerId::new(2)).id, MissionId::new(39));
    }

    #[test]
    fn test_build_mixes_explicit_and_random_missions() {
        let catalog = MissionCatalog::standard();
        let seed = 8;
        let state = GameBuilder::new()
            .player("alice")
            .player("bob")
            .mission(MissionId::new(30))
            .build(&catalog, seed)
            .unwrap();

        assert_eq!(state.mission(PlayerId::new(0)).id, MissionId::new(30));

        // Only the second seat draws: six hand cards, then one pick.
        let mut probe = GameRng::new(seed);
        for _ in 0..6 {
            probe.gen_range(1..5);
        }
        let index = probe.gen_range_usize(0..catalog.len());
        let expected = catalog.mission_ids().nth(index).unwrap();
        assert_eq!(state.mission(PlayerId::new(1)).id, expected);
    }

    #[test]
    fn test_build_no_players() {
        let catalog = MissionCatalog::standard();
        let result = GameBuilder::new().build(&catalog, 0);
        assert_eq!(result.err(), Some(SetupError::NoPlayers));
    }

    #[test]
    fn test_build_too_many_players() {
        let catalog = MissionCatalog::standard();
        let result = GameBuilder::new()
            .players((0..256).map(|i| format!("player-{}", i)))
            .build(&catalog, 0);
        assert_eq!(result.err(), Some(SetupError::TooManyPlayers { count: 256 }));
    }

    #[test]
    fn test_build_unknown_mission() {
        let catalog = MissionCatalog::standard();
        let result = GameBuilder::new()
            .player("alice")
            .mission(MissionId::new(999))
            .build(&catalog, 0);
        assert_eq!(
            result.err(),
            Some(SetupError::UnknownMission {
                id: MissionId::new(999),
            })
        );
    }

    #[test]
    fn test_build_too_many_missions() {
        let catalog = MissionCatalog::standard();
        let result = GameBuilder::new()
            .player("alice")
            .missions([MissionId::new(0), MissionId::new(1)])
            .build(&catalog, 0);
        assert_eq!(
            result.err(),
            Some(SetupError::TooManyMissions {
                assigned: 2,
                players: 1,
            })
        );
    }

    #[test]
    fn test_build_empty_catalog() {
        let empty = MissionCatalog::new();
        let result = GameBuilder::new().player("alice").build(&empty, 0);
        assert_eq!(result.err(), Some(SetupError::EmptyCatalog));
    }

    #[test]
    fn test_build_fully_explicit_skips_catalog_draw() {
        let mut catalog = MissionCatalog::new();
        catalog.register(Mission::new(
            MissionId::new(7),
            PatternKind::Sum,
            TargetShape::Row,
            12,
            "Complete a row whose values sum to 12",
        ));

        let state = GameBuilder::new()
            .player("alice")
            .mission(MissionId::new(7))
            .build(&catalog, 0)
            .unwrap();
        assert_eq!(state.mission(PlayerId::new(0)).id, MissionId::new(7));
    }

    #[test]
    fn test_build_custom_rules_and_hand_size() {
        let catalog = MissionCatalog::standard();
        let state = GameBuilder::new()
            .players(["alice", "bob"])
            .rules(Rules::new(5).allow_negative())
            .initial_hand_size(6)
            .build(&catalog, 3)
            .unwrap();

        assert_eq!(state.board().size(), 5);
        assert_eq!(state.rules().board_size(), 5);
        assert!(!state.rules().clamp_negative());
        assert_eq!(state.hand(PlayerId::new(0)).len(), 6);
        assert_eq!(state.hand(PlayerId::new(1)).len(), 6);
    }

    #[test]
    fn test_build_is_deterministic_per_seed() {
        let catalog = MissionCatalog::standard();
        let build = || {
            GameBuilder::new()
                .players(["alice", "bob", "carol"])
                .build(&catalog, 77)
                .unwrap()
        };

        let a = serde_json::to_string(&build()).unwrap();
        let b = serde_json::to_string(&build()).unwrap();
        assert_eq!(a, b);

        let other = GameBuilder::new()
            .players(["alice", "bob", "carol"])
            .build(&catalog, 78)
            .unwrap();
        assert_ne!(a, serde_json::to_string(&other).unwrap());
    }
}
