//! Game state integration tests: placement, fading, results and reset.

use tictacshift::{new_game, GameMode, GameResult, GameState, MoveRejection, Player};

fn play(game: &mut GameState, cells: &[(usize, usize)]) {
    for &(row, column) in cells {
        assert!(
            game.place_move(row, column),
            "move ({row}, {column}) rejected at move {}",
            game.move_counter()
        );
    }
}

/// 20 moves in which no visible line is ever completed.
const DRAWN_GAME: [(usize, usize); 20] = [
    (0, 2), (0, 1), (1, 1), (0, 0), (2, 2),
    (2, 1), (1, 2), (2, 0), (1, 0), (0, 1),
    (0, 0), (1, 1), (0, 2), (2, 2), (2, 0),
    (2, 1), (0, 1), (1, 2), (1, 0), (0, 2),
];

// =============================================================================
// Turn Order
// =============================================================================

#[test]
fn test_turns_alternate() {
    let mut game = new_game(GameMode::Local);

    for (n, &(row, column)) in DRAWN_GAME.iter().enumerate() {
        let expected = if n % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(game.current_player(), expected);
        assert!(game.place_move(row, column));
        assert_eq!(game.last_move().unwrap().player, expected);
    }
}

#[test]
fn test_move_numbers_are_sequential() {
    let mut game = new_game(GameMode::Local);
    play(&mut game, &DRAWN_GAME[..10]);

    for (i, mv) in game.moves().iter().enumerate() {
        assert_eq!(mv.move_number as usize, i);
    }
    assert_eq!(game.move_counter() as usize, game.moves().len());
}

// =============================================================================
// Fading
// =============================================================================

#[test]
fn test_seventh_move_fades_the_first() {
    let mut game = new_game(GameMode::Local);
    play(&mut game, &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (2, 0)]);

    assert_eq!(game.visible_moves().len(), 6);
    assert_eq!(game.board_state().get(0, 0), Some(Player::X));
    assert!(game.will_fade(0, 0));

    play(&mut game, &[(1, 2)]);

    assert_eq!(game.result(), GameResult::Ongoing);
    assert_eq!(game.moves().len(), 7);
    assert_eq!(game.visible_moves().len(), 6);
    assert!(game.visible_moves().iter().all(|mv| mv.move_number != 0));
    assert_eq!(game.board_state().get(0, 0), None);
    assert!(game.can_place_move(0, 0));

    // The next move to fade is now O's opening move.
    assert!(game.will_fade(0, 1));
    assert!(!game.will_fade(0, 0));
}

#[test]
fn test_faded_cell_can_be_reused() {
    let mut game = new_game(GameMode::Local);
    play(&mut game, &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (2, 0), (1, 2)]);

    assert_eq!(game.current_player(), Player::O);
    assert!(game.place_move(0, 0));
    assert_eq!(game.board_state().get(0, 0), Some(Player::O));
    // History still has X's original move at the same cell.
    assert_eq!(game.moves()[0].player, Player::X);
    assert!(game.moves()[0].is_at(0, 0));
}

#[test]
fn test_faded_mark_does_not_complete_a_line() {
    let mut game = new_game(GameMode::Local);
    // X holds (0,0) and (0,1), then takes (0,2) on the move that fades (0,0).
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (1, 2), (2, 0), (0, 2)]);

    assert_eq!(game.result(), GameResult::Ongoing);
    assert_eq!(game.board_state().get(0, 0), None);
    assert!(game.winning_line().is_none());
}

#[test]
fn test_no_fade_hint_before_window_fills() {
    let mut game = new_game(GameMode::Local);
    assert!(game.moves_about_to_fade().is_none());

    play(&mut game, &DRAWN_GAME[..5]);
    assert!(game.moves_about_to_fade().is_none());
    for row in 0..3 {
        for column in 0..3 {
            assert!(!game.will_fade(row, column));
        }
    }
}

// =============================================================================
// Results
// =============================================================================

#[test]
fn test_top_row_win() {
    let mut game = new_game(GameMode::Local);
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert_eq!(game.result(), GameResult::Win(Player::X));
    let line = game.winning_line().unwrap();
    assert_eq!(line.player, Player::X);
    assert_eq!(line.index, 0);
}

#[test]
fn test_column_win_for_o() {
    let mut game = new_game(GameMode::Local);
    play(&mut game, &[(0, 0), (0, 2), (1, 0), (1, 2), (2, 1), (2, 2)]);

    assert_eq!(game.result(), GameResult::Win(Player::O));
}

#[test]
fn test_draw_exactly_at_move_twenty() {
    let mut game = new_game(GameMode::Local);

    for (n, &(row, column)) in DRAWN_GAME.iter().enumerate() {
        assert_eq!(game.result(), GameResult::Ongoing, "ended early at move {n}");
        assert!(game.place_move(row, column));
    }

    assert_eq!(game.move_counter(), 20);
    assert_eq!(game.result(), GameResult::Draw);
    assert!(game.winning_line().is_none());
}

#[test]
fn test_custom_draw_ceiling() {
    let config = tictacshift::GameConfig::new(GameMode::Local)
        .with_draw_ceiling(8)
        .with_seed(1);
    let mut game = GameState::with_config(config).unwrap();
    play(&mut game, &DRAWN_GAME[..7]);
    assert_eq!(game.result(), GameResult::Ongoing);

    play(&mut game, &DRAWN_GAME[7..8]);
    assert_eq!(game.result(), GameResult::Draw);
}

// =============================================================================
// Rejection
// =============================================================================

#[test]
fn test_illegal_placements_leave_state_unchanged() {
    let mut game = new_game(GameMode::Local);
    play(&mut game, &[(1, 1), (0, 0)]);
    let before = game.snapshot();

    assert!(!game.place_move(1, 1));
    assert!(!game.place_move(0, 0));
    assert!(!game.place_move(3, 0));
    assert!(!game.place_move(0, 3));
    assert!(!game.place_move(usize::MAX, 1));

    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_no_moves_after_win() {
    let mut game = new_game(GameMode::Local);
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let before = game.snapshot();

    assert_eq!(game.check_move(2, 2), Err(MoveRejection::GameOver));
    assert!(!game.can_place_move(2, 2));
    assert!(!game.place_move(2, 2));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_no_moves_after_draw() {
    let mut game = new_game(GameMode::Local);
    play(&mut game, &DRAWN_GAME);

    let empty = game.board_state().empty_cells();
    assert!(!empty.is_empty());
    for pos in empty {
        assert!(!game.place(pos));
    }
    assert_eq!(game.move_counter(), 20);
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_restores_initial_state() {
    let mut game = new_game(GameMode::Network);
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    game.reset_game();

    assert!(game.moves().is_empty());
    assert_eq!(game.move_counter(), 0);
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.result(), GameResult::Ongoing);
    assert!(!game.is_waiting_for_bot());
    assert_eq!(game.mode(), GameMode::Network);
    assert!(game.can_place_move(0, 0));
}

#[test]
fn test_reset_is_idempotent() {
    let mut game = new_game(GameMode::VsBot);
    play(&mut game, &DRAWN_GAME[..9]);

    game.reset_game();
    let once = game.snapshot();
    game.reset_game();

    assert_eq!(game.snapshot(), once);
}

// =============================================================================
// Network Play
// =============================================================================

#[test]
fn test_remote_moves_use_the_same_entry_point() {
    let mut local = new_game(GameMode::Local);
    let mut remote = new_game(GameMode::Network);

    // Remote side receives cell indices and decodes them to positions.
    for &(row, column) in &DRAWN_GAME[..12] {
        assert!(local.place_move(row, column));
        let cell = tictacshift::Position::new(row, column).cell();
        let pos = tictacshift::Position::from_cell(cell).unwrap();
        assert!(remote.place(pos));
    }

    assert_eq!(local.moves(), remote.moves());
    assert_eq!(local.board_state(), remote.board_state());
    assert_eq!(local.result(), remote.result());
}

#[test]
fn test_bot_refused_outside_bot_mode() {
    for mode in [GameMode::Local, GameMode::Network] {
        let mut game = new_game(mode);
        play(&mut game, &[(0, 0)]);
        let before = game.snapshot();

        assert!(!game.make_bot_move());
        assert_eq!(game.snapshot(), before);
    }
}
