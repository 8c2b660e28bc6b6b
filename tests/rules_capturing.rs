//! Capturing rules: mandatory jumps, multi-jump chains, piece removal

use checkers::rules::{any_player_can_capture, can_capture};
use checkers::{Board, Game, MoveRejected, Player, Pos, Rank, Status};

fn game_with(pieces: &[(Player, Rank, Pos)], to_move: Player) -> Game {
    Game::from_position(Board::from_pieces(pieces).unwrap(), to_move)
}

fn play(game: &mut Game, from: Pos, to: Pos) {
    game.select_piece(from).unwrap();
    game.attempt_move(to).unwrap();
}

// =============================================================================
// Mandatory capture
// =============================================================================

/// A piece that cannot capture may not be moved while another one can
#[test]
fn non_capturing_piece_is_locked_out() {
    let mut game = game_with(
        &[
            (Player::One, Rank::Man, Pos::new(3, 4)),
            (Player::One, Rank::Man, Pos::new(7, 6)),
            (Player::Two, Rank::Man, Pos::new(2, 3)),
        ],
        Player::One,
    );
    let board = game.board();
    assert!(any_player_can_capture(board, Player::One));
    assert!(!can_capture(board, board.piece_at(Pos::new(7, 6)).unwrap()));

    assert_eq!(game.select_piece(Pos::new(7, 6)), Err(MoveRejected::MustCapture));
    assert_eq!(game.attempt_move(Pos::new(6, 5)), Err(MoveRejected::NoSelection));
    assert_eq!(game.board().piece_at(Pos::new(7, 6)).unwrap().pos, Pos::new(7, 6));
}

/// The capturing piece must jump rather than step
#[test]
fn capturing_piece_cannot_step() {
    let mut game = game_with(
        &[
            (Player::One, Rank::Man, Pos::new(3, 4)),
            (Player::Two, Rank::Man, Pos::new(2, 3)),
            (Player::Two, Rank::Man, Pos::new(6, 1)),
        ],
        Player::One,
    );

    game.select_piece(Pos::new(3, 4)).unwrap();
    assert_eq!(game.attempt_move(Pos::new(4, 3)), Err(MoveRejected::MustCapture));
    assert_eq!(game.status(), Status::Turn(Player::One));
}

/// Opening exchange: a forced capture appears after two quiet moves
#[test]
fn opening_exchange_forces_capture() {
    let mut game = Game::new();
    play(&mut game, Pos::new(2, 5), Pos::new(3, 4));
    play(&mut game, Pos::new(5, 2), Pos::new(4, 3));

    assert!(game.forced_capture());
    assert_eq!(game.select_piece(Pos::new(6, 5)), Err(MoveRejected::MustCapture));

    game.select_piece(Pos::new(3, 4)).unwrap();
    let outcome = game.attempt_move(Pos::new(5, 2)).unwrap();
    assert_eq!(outcome.captured.map(|(_, at)| at), Some(Pos::new(4, 3)));
    assert!(outcome.turn_changed);
    assert_eq!(game.board().count_pieces(Player::Two), 11);

    // Player 2 can now take back
    assert_eq!(game.status(), Status::Turn(Player::Two));
    assert!(game.forced_capture());
}

// =============================================================================
// Single captures
// =============================================================================

/// A jump removes exactly the jumped enemy and moves two squares diagonally
#[test]
fn capture_removes_exactly_one_enemy() {
    let mut game = game_with(
        &[
            (Player::One, Rank::Man, Pos::new(3, 4)),
            (Player::Two, Rank::Man, Pos::new(2, 3)),
            (Player::Two, Rank::Man, Pos::new(6, 1)),
        ],
        Player::One,
    );
    let mover = game.board().piece_at(Pos::new(3, 4)).unwrap().id;

    play(&mut game, Pos::new(3, 4), Pos::new(1, 2));

    let board = game.board();
    assert_eq!(board.count_pieces(Player::Two), 1);
    assert_eq!(board.count_pieces(Player::One), 1);
    assert!(board.is_empty(Pos::new(2, 3)));
    assert!(board.is_empty(Pos::new(3, 4)));
    assert_eq!(board.piece_at(Pos::new(1, 2)).unwrap().id, mover);
    assert!(board.piece_at(Pos::new(6, 1)).is_some());
}

/// Simple steps never remove pieces
#[test]
fn simple_move_removes_nothing() {
    let mut game = Game::new();
    play(&mut game, Pos::new(4, 5), Pos::new(5, 4));
    play(&mut game, Pos::new(1, 2), Pos::new(0, 3));

    assert_eq!(game.board().count_pieces(Player::One), 12);
    assert_eq!(game.board().count_pieces(Player::Two), 12);
}

/// Jumping over an own piece is not a capture
#[test]
fn cannot_jump_own_piece() {
    let mut game = game_with(
        &[
            (Player::One, Rank::Man, Pos::new(3, 4)),
            (Player::One, Rank::Man, Pos::new(2, 3)),
            (Player::Two, Rank::Man, Pos::new(6, 1)),
        ],
        Player::One,
    );

    game.select_piece(Pos::new(3, 4)).unwrap();
    assert_eq!(
        game.attempt_move(Pos::new(1, 2)),
        Err(MoveRejected::IllegalDelta(Pos::new(1, 2)))
    );
    assert_eq!(game.board().piece_count(), 3);
}

/// Men do not capture backward
#[test]
fn man_cannot_capture_backward() {
    let mut game = game_with(
        &[
            (Player::One, Rank::Man, Pos::new(3, 4)),
            (Player::Two, Rank::Man, Pos::new(4, 5)),
        ],
        Player::One,
    );

    assert!(!game.forced_capture());
    game.select_piece(Pos::new(3, 4)).unwrap();
    assert!(game.attempt_move(Pos::new(5, 6)).is_err());
    assert_eq!(game.board().piece_count(), 2);
}

// =============================================================================
// Multi-jump chains
// =============================================================================

/// After a jump the same piece keeps the turn while it can jump again
#[test]
fn chain_keeps_turn_until_done() {
    let mut game = game_with(
        &[
            (Player::One, Rank::Man, Pos::new(5, 6)),
            (Player::One, Rank::Man, Pos::new(7, 6)),
            (Player::Two, Rank::Man, Pos::new(4, 5)),
            (Player::Two, Rank::Man, Pos::new(2, 3)),
            (Player::Two, Rank::Man, Pos::new(6, 1)),
        ],
        Player::One,
    );
    let jumper = game.board().piece_at(Pos::new(5, 6)).unwrap().id;

    game.select_piece(Pos::new(5, 6)).unwrap();
    let first = game.attempt_move(Pos::new(3, 4)).unwrap();
    assert!(!first.turn_changed);
    assert_eq!(game.status(), Status::Turn(Player::One));
    assert_eq!(game.chain(), Some(jumper));
    assert_eq!(game.selection().unwrap().id, jumper);

    // Other pieces are locked out, the jumper may not step
    assert_eq!(game.select_piece(Pos::new(7, 6)), Err(MoveRejected::ChainLocked));
    assert_eq!(game.attempt_move(Pos::new(4, 3)), Err(MoveRejected::MustCapture));
    assert_eq!(game.movable_pieces(), vec![jumper]);

    let second = game.attempt_move(Pos::new(1, 2)).unwrap();
    assert!(second.turn_changed);
    assert_eq!(game.status(), Status::Turn(Player::Two));
    assert!(game.chain().is_none());
    assert!(game.selection().is_none());
    assert_eq!(game.board().count_pieces(Player::Two), 1);
}

/// Capture scenario: the jumped man disappears and the chain goes on while possible
#[test]
fn capture_then_continue() {
    let mut game = game_with(
        &[
            (Player::One, Rank::Man, Pos::new(3, 4)),
            (Player::Two, Rank::Man, Pos::new(2, 3)),
            (Player::Two, Rank::Man, Pos::new(2, 1)),
            (Player::Two, Rank::Man, Pos::new(6, 1)),
        ],
        Player::One,
    );

    play(&mut game, Pos::new(3, 4), Pos::new(1, 2));

    assert!(game.board().is_empty(Pos::new(2, 3)));
    assert_eq!(game.board().piece_at(Pos::new(1, 2)).unwrap().owner, Player::One);
    assert_eq!(game.status(), Status::Turn(Player::One));
}

/// A quiet step never starts a chain, even if a jump becomes available
#[test]
fn simple_move_never_chains() {
    let mut game = game_with(
        &[
            (Player::One, Rank::Man, Pos::new(4, 5)),
            (Player::Two, Rank::Man, Pos::new(2, 3)),
        ],
        Player::One,
    );

    play(&mut game, Pos::new(4, 5), Pos::new(3, 4));
    assert_eq!(game.status(), Status::Turn(Player::Two));
}

// =============================================================================
// End of game
// =============================================================================

/// Taking the last enemy piece ends the game
#[test]
fn last_capture_wins() {
    let mut game = game_with(
        &[
            (Player::Two, Rank::King, Pos::new(4, 3)),
            (Player::One, Rank::Man, Pos::new(3, 2)),
        ],
        Player::Two,
    );

    game.select_piece(Pos::new(4, 3)).unwrap();
    let outcome = game.attempt_move(Pos::new(2, 1)).unwrap();

    assert_eq!(outcome.winner, Some(Player::Two));
    assert_eq!(game.status(), Status::GameOver { winner: Player::Two });
    assert_eq!(game.board().count_pieces(Player::One), 0);

    // Nothing moves any more
    assert_eq!(game.select_piece(Pos::new(2, 1)), Err(MoveRejected::GameOver));
    assert_eq!(game.attempt_move(Pos::new(3, 2)), Err(MoveRejected::GameOver));
    assert_eq!(game.board().piece_at(Pos::new(2, 1)).unwrap().owner, Player::Two);
}
