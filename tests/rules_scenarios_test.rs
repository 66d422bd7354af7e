//! Concrete win and draw scenarios across board sizes.

use timetoe_rules::{
    Board, Dimension, Game, GameOutcome, MoveError, Player, Square, evaluate, is_legal_move,
};

fn board(size: u8, marks: &str) -> Board {
    let squares = marks
        .chars()
        .map(|c| match c {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            _ => Square::Empty,
        })
        .collect();
    Board::from_squares(Dimension::new(size).unwrap(), squares).unwrap()
}

#[test]
fn test_classic_top_row_win_from_moves() {
    let mut game = Game::classic();
    for index in [0, 4, 1, 3, 2] {
        game.play(index).expect("Valid move");
    }
    assert_eq!(
        game.outcome(),
        GameOutcome::Won {
            line: vec![0, 1, 2],
            mark: Player::X
        }
    );
}

#[test]
fn test_classic_draw() {
    assert_eq!(evaluate(&board(3, "XOXXOOOXX")), GameOutcome::Draw);
}

#[test]
fn test_five_by_five_anti_diagonal() {
    let b = board(5, "....X...X...X...X...X....");
    assert_eq!(
        evaluate(&b),
        GameOutcome::Won {
            line: vec![4, 8, 12, 16, 20],
            mark: Player::X
        }
    );
}

#[test]
fn test_four_by_four_row_needs_all_four() {
    let three_of_four = board(4, "XXX.OOO.........");
    assert_eq!(evaluate(&three_of_four), GameOutcome::InProgress);

    let four_of_four = board(4, "XXXXOOO.........");
    assert_eq!(evaluate(&four_of_four).winner(), Some(Player::X));
}

#[test]
fn test_four_by_four_draw() {
    // Rows alternate pairs so no row, column or diagonal is uniform.
    let b = board(4, "XXOOOOXXXXOOOOXX");
    assert_eq!(evaluate(&b), GameOutcome::Draw);
}

#[test]
fn test_full_game_to_draw_on_classic() {
    let mut game = Game::classic();
    for index in [0, 1, 2, 4, 3, 5, 7, 6] {
        assert_eq!(game.play(index), Ok(GameOutcome::InProgress));
    }
    assert_eq!(game.play(8), Ok(GameOutcome::Draw));
    assert_eq!(game.status().to_string(), "Draw");
    assert_eq!(game.play(8), Err(MoveError::GameOver));
}

#[test]
fn test_is_legal_move_contract() {
    let won = board(3, "XXXOO....");
    assert_eq!(is_legal_move(&won, 8), Ok(false));

    let open = board(3, "X........");
    assert_eq!(is_legal_move(&open, 0), Ok(false));
    assert_eq!(is_legal_move(&open, 8), Ok(true));
    assert!(is_legal_move(&open, 9).is_err());
}
