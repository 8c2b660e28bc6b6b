use super::*;
use test_case::test_case;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::One.opponent(), Player::Two);
    assert_eq!(Player::Two.opponent(), Player::One);
}

#[test]
fn test_player_forward_and_promotion_row() {
    assert_eq!(Player::One.forward(), -1);
    assert_eq!(Player::Two.forward(), 1);
    assert_eq!(Player::One.promotion_row(), 0);
    assert_eq!(Player::Two.promotion_row(), 7);
}

#[test]
fn test_is_on_board_matches_parity() {
    for x in 0..BOARD_SIZE as i32 {
        for y in 0..BOARD_SIZE as i32 {
            assert_eq!(Board::is_on_board(x, y), (x + y) % 2 == 1, "({x}, {y})");
        }
    }
}

#[test_case(-1, 0 ; "left of board")]
#[test_case(0, -1 ; "above board")]
#[test_case(8, 1 ; "right of board")]
#[test_case(1, 8 ; "below board")]
#[test_case(-1, -2 ; "odd sum but outside")]
fn test_is_on_board_rejects_outside(x: i32, y: i32) {
    assert!(!Board::is_on_board(x, y));
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 7);
    assert_eq!(pos.offset(1, -1), Some(Pos::new(1, 6)));
    assert_eq!(pos.offset(-1, -1), None);
    assert_eq!(pos.offset(1, 1), None);
}

#[test]
fn test_standard_setup() {
    let board = Board::standard();

    assert_eq!(board.piece_count(), 2 * PIECES_PER_PLAYER);
    assert_eq!(board.count_pieces(Player::One), PIECES_PER_PLAYER);
    assert_eq!(board.count_pieces(Player::Two), PIECES_PER_PLAYER);

    for piece in board.pieces() {
        assert!(piece.pos.is_dark());
        assert!(!(3..=4).contains(&piece.pos.y));
        assert_eq!(piece.rank, Rank::Man);
        match piece.owner {
            Player::One => assert!(piece.pos.y >= 5),
            Player::Two => assert!(piece.pos.y <= 2),
        }
    }
}

#[test]
fn test_standard_setup_unique_squares_and_ids() {
    let board = Board::standard();
    let pieces = board.pieces();

    for (i, a) in pieces.iter().enumerate() {
        for b in &pieces[i + 1..] {
            assert_ne!(a.pos, b.pos);
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn test_piece_at() {
    let board = Board::standard();

    let piece = board.piece_at(Pos::new(1, 0)).unwrap();
    assert_eq!(piece.owner, Player::Two);

    let piece = board.piece_at(Pos::new(0, 7)).unwrap();
    assert_eq!(piece.owner, Player::One);

    assert!(board.piece_at(Pos::new(0, 3)).is_none());
    assert!(board.piece_at(Pos::new(0, 0)).is_none());
}

#[test]
fn test_remove_piece() {
    let mut board = Board::standard();
    let id = board.piece_at(Pos::new(1, 2)).unwrap().id;

    let removed = board.remove_piece(id).unwrap();
    assert_eq!(removed.pos, Pos::new(1, 2));
    assert!(board.is_empty(Pos::new(1, 2)));
    assert_eq!(board.count_pieces(Player::Two), PIECES_PER_PLAYER - 1);

    // Second removal finds nothing
    assert!(board.remove_piece(id).is_none());
    assert_eq!(board.count_pieces(Player::Two), PIECES_PER_PLAYER - 1);
}

#[test]
fn test_from_pieces_rejects_light_square() {
    let result = Board::from_pieces(&[(Player::One, Rank::Man, Pos::new(0, 0))]);
    assert_eq!(result.unwrap_err(), BoardError::NotPlayable(Pos::new(0, 0)));
}

#[test]
fn test_from_pieces_rejects_double_occupancy() {
    let result = Board::from_pieces(&[
        (Player::One, Rank::Man, Pos::new(3, 4)),
        (Player::Two, Rank::King, Pos::new(3, 4)),
    ]);
    assert_eq!(result.unwrap_err(), BoardError::Occupied(Pos::new(3, 4)));
}

#[test]
fn test_move_and_promote() {
    let mut board = Board::from_pieces(&[(Player::One, Rank::Man, Pos::new(2, 1))]).unwrap();
    let id = board.piece_at(Pos::new(2, 1)).unwrap().id;

    assert!(board.move_piece(id, Pos::new(1, 0)));
    board.promote(id);

    let piece = board.get(id).unwrap();
    assert_eq!(piece.pos, Pos::new(1, 0));
    assert!(piece.is_king());
}

#[test]
fn test_board_error_display() {
    assert_eq!(
        BoardError::Occupied(Pos::new(3, 4)).to_string(),
        "square (3, 4) is already occupied"
    );
}
