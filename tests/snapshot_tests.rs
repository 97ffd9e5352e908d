//! Snapshot and wire-format tests.
//!
//! A serialized mid-game state must restore to one that continues
//! exactly like the original, including the RNG stream position.

use magic_square::{
    GameBuilder, GameState, Mission, MissionCatalog, MissionId, Move, Operation, PatternKind,
    PlayerId, TargetShape,
};

fn mv(x: usize, y: usize, hand_index: usize, operation: Operation) -> Move {
    Move {
        x,
        y,
        hand_index,
        operation,
    }
}

fn mid_game_state() -> GameState {
    let catalog = MissionCatalog::standard();
    let mut state = GameBuilder::new()
        .players(["alice", "bob"])
        .build(&catalog, 9000)
        .unwrap();
    for (x, y) in [(0, 0), (1, 1), (2, 0)] {
        let player = state.current_turn();
        state
            .apply_move(player, mv(x, y, 0, Operation::Add))
            .unwrap();
    }
    state
}

#[test]
fn test_json_round_trip() {
    let state = mid_game_state();
    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.players(), state.players());
    assert_eq!(restored.board(), state.board());
    assert_eq!(restored.current_turn(), state.current_turn());
    assert_eq!(restored.round_count(), state.round_count());
    assert_eq!(restored.winners(), state.winners());
    for player in state.player_ids() {
        assert_eq!(restored.hand(player), state.hand(player));
        assert_eq!(restored.mission(player), state.mission(player));
    }
    assert_eq!(serde_json::to_string(&restored).unwrap(), json);
}

/// The restored state must replay identically, which only holds if the
/// RNG resumes mid-stream rather than restarting from the seed.
#[test]
fn test_restored_state_resumes_identically() {
    let original = mid_game_state();
    let json = serde_json::to_string(&original).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();

    let continue_play = |mut state: GameState| {
        for (x, y) in [(0, 1), (2, 2), (1, 0), (0, 2)] {
            let player = state.current_turn();
            state
                .apply_move(player, mv(x, y, 0, Operation::Subtract))
                .unwrap();
        }
        serde_json::to_string(&state).unwrap()
    };

    assert_eq!(continue_play(original), continue_play(restored));
}

#[test]
fn test_bincode_round_trip() {
    let state = mid_game_state();
    let bytes = bincode::serialize(&state).unwrap();
    let restored: GameState = bincode::deserialize(&bytes).unwrap();

    assert_eq!(
        serde_json::to_string(&restored).unwrap(),
        serde_json::to_string(&state).unwrap()
    );
}

#[test]
fn test_mission_wire_names() {
    let mission = Mission::new(
        MissionId::new(45),
        PatternKind::Geometric,
        TargetShape::AllDirections,
        2,
        "geometric with ratio 2",
    );
    let value = serde_json::to_value(&mission).unwrap();

    assert_eq!(value["id"], 45);
    assert_eq!(value["pattern"], "geometric");
    assert_eq!(value["target"], "all_directions");
    assert_eq!(value["parameter"], 2);
}

#[test]
fn test_move_wire_names() {
    let value = serde_json::to_value(mv(2, 1, 0, Operation::Subtract)).unwrap();

    assert_eq!(value["x"], 2);
    assert_eq!(value["y"], 1);
    assert_eq!(value["hand_index"], 0);
    assert_eq!(value["operation"], "subtract");
}

#[test]
fn test_state_wire_shape() {
    let state = mid_game_state();
    let value = serde_json::to_value(&state).unwrap();

    assert_eq!(value["players"], serde_json::json!(["alice", "bob"]));
    // Three moves in: the turn is back with Bob and one round has closed.
    assert_eq!(value["current_turn"], 1);
    assert_eq!(value["round_count"], 1);
    assert_eq!(value["rules"]["board_size"], 3);
    assert_eq!(value["rules"]["clamp_negative"], true);
    assert_eq!(value["board"]["size"], 3);
    assert_eq!(value["rng"]["seed"], 9000);
    assert!(value["rng"]["word_pos"].is_number());
}

#[test]
fn test_player_id_is_transparent_on_the_wire() {
    let json = serde_json::to_string(&PlayerId::new(3)).unwrap();
    assert_eq!(json, "3");

    let id: PlayerId = serde_json::from_str("7").unwrap();
    assert_eq!(id, PlayerId::new(7));
}
