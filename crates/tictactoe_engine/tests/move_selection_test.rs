//! Tests for the computer's move choice on hand-built positions.

use tictactoe_engine::{
    Board, Cell, GameStatus, Mark, Move, Position, Roles, Score, best_move, choose_move,
    evaluate_moves, status,
};

fn board(text: &str) -> Board {
    text.parse().expect("Valid board")
}

#[test]
fn test_empty_board_opens_top_left() {
    // Every opening draws; the row-major scan keeps the first cell.
    let mut b = Board::new();
    let roles = Roles::for_human(Mark::X);
    assert_eq!(
        choose_move(&mut b, roles),
        Some((Position::TopLeft, Score::Draw))
    );

    let mv = best_move(&mut b, roles).unwrap();
    assert_eq!(mv, Move::new(Mark::O, Position::TopLeft));
    assert_eq!(b.get(Position::TopLeft), Cell::Marked(Mark::O));
    assert_eq!(b.mark_count(), 1);
}

#[test]
fn test_two_winning_moves_takes_the_first() {
    // O can win at once on (1,2), but (0,2) also forces a win and is
    // scanned first.
    let mut b = board("XX_/OO_/___");
    let roles = Roles::new(Mark::O);
    let scored = evaluate_moves(&mut b, roles);
    assert!(scored.contains(&(Position::TopRight, Score::Win)));
    assert!(scored.contains(&(Position::MiddleRight, Score::Win)));

    let mv = best_move(&mut b, roles).unwrap();
    assert_eq!((mv.row(), mv.col()), (0, 2));
}

#[test]
fn test_only_block_saves_the_game() {
    let mut b = board("___/_O_/XX_");
    let roles = Roles::new(Mark::O);
    for (pos, score) in evaluate_moves(&mut b, roles) {
        let expected = if pos == Position::BottomRight {
            Score::Draw
        } else {
            Score::Loss
        };
        assert_eq!(score, expected, "{}", pos);
    }

    let mv = best_move(&mut b, roles).unwrap();
    assert_eq!(mv.position, Position::BottomRight);
}

#[test]
fn test_immediate_win_beats_block() {
    let mut b = board("XX_/OO_/X__");
    let roles = Roles::new(Mark::O);
    let mv = best_move(&mut b, roles).unwrap();
    assert_eq!(mv.position, Position::MiddleRight);
    assert_eq!(status(&b), GameStatus::Won(Mark::O));
}

#[test]
fn test_computer_playing_x() {
    // Same shape with the marks swapped.
    let mut b = board("___/_X_/OO_");
    let mv = best_move(&mut b, Roles::for_human(Mark::O)).unwrap();
    assert_eq!(mv, Move::new(Mark::X, Position::BottomRight));
}

#[test]
fn test_full_board_draw_has_no_move() {
    let mut b = board("XOX/XOO/OXX");
    assert_eq!(status(&b), GameStatus::Draw);
    assert_eq!(best_move(&mut b, Roles::new(Mark::O)), None);
}

#[test]
fn test_move_serializes_by_name() {
    let mv = Move::new(Mark::X, Position::Center);
    let json = serde_json::to_value(mv).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "mark": "X", "position": "Center" })
    );
}
