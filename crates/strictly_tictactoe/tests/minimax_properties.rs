//! Whole-game-tree properties of the rules and the minimax search.

use std::collections::HashSet;
use strictly_tictactoe::{
    Board, Move, Outcome, Player, WIN_SCORE, evaluate, find_best_move, is_draw, is_winner,
    outcome, score_moves,
};

/// Every board reachable by alternating play from the empty board, X first.
fn reachable_boards() -> HashSet<Board> {
    fn walk(board: &mut Board, to_move: Player, seen: &mut HashSet<Board>) {
        if !seen.insert(board.clone()) || outcome(board).is_some() {
            return;
        }
        for mv in board.valid_moves() {
            board.apply(mv, to_move).unwrap();
            walk(board, to_move.opponent(), seen);
            board.undo(mv);
        }
    }

    let mut seen = HashSet::new();
    walk(&mut Board::new(), Player::X, &mut seen);
    seen
}

#[test]
fn test_reachable_board_count() {
    // Well-known count of distinct positions reachable in legal play.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_never_two_winners() {
    for board in reachable_boards() {
        assert!(
            !(is_winner(&board, Player::X) && is_winner(&board, Player::O)),
            "two winners on {}",
            board.compact()
        );
    }
}

#[test]
fn test_valid_moves_count_and_order() {
    for board in reachable_boards() {
        let moves = board.valid_moves();
        assert_eq!(moves.len(), 9 - board.occupied_count());
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
        assert!(moves.iter().all(|&mv| board.is_empty(mv)));
    }
}

#[test]
fn test_best_move_is_first_of_equal_scores() {
    for mut board in reachable_boards() {
        if board.to_move() != Some(Player::O) || outcome(&board).is_some() {
            continue;
        }
        let before = board.clone();
        let scores = score_moves(&mut board);
        let top = scores.iter().map(|s| s.score).max().unwrap();
        let first_top = scores.iter().find(|s| s.score == top).unwrap().mv;

        assert_eq!(find_best_move(&mut board), Some(first_top));
        assert_eq!(board, before, "search left marks on {}", before.compact());
        assert!(scores.iter().all(|s| s.score.abs() <= WIN_SCORE));
    }
}

#[test]
fn test_empty_board_choice_does_not_lose() {
    let mut board = Board::new();
    let choice = find_best_move(&mut board).unwrap();
    board.apply(choice, Player::O).unwrap();
    assert!(evaluate(&mut board, 0, false) >= 0);
}

#[test]
fn test_full_board_without_winner() {
    let mut board: Board = "OXO|OXX|XOX".parse().unwrap();
    assert!(is_draw(&board));
    assert_eq!(outcome(&board), Some(Outcome::Draw));
    assert_eq!(evaluate(&mut board, 0, true), 0);
}

#[test]
fn test_forced_win_in_one() {
    let mut board: Board = "OO.|...|XX.".parse().unwrap();
    // X also threatens (2,2); winning now beats blocking.
    assert_eq!(find_best_move(&mut board), Some(Move::new(0, 2).unwrap()));
}

/// Plays every possible sequence of X moves against the search.
fn assert_o_never_loses(board: &mut Board) {
    for mv in board.valid_moves() {
        board.apply(mv, Player::X).unwrap();
        match outcome(board) {
            Some(Outcome::Winner(Player::X)) => panic!("X won on {}", board.compact()),
            Some(_) => {}
            None => {
                let reply = find_best_move(board).expect("open board has a move");
                board.apply(reply, Player::O).unwrap();
                match outcome(board) {
                    Some(Outcome::Winner(Player::X)) => unreachable!(),
                    Some(_) => {}
                    None => assert_o_never_loses(board),
                }
                board.undo(reply);
            }
        }
        board.undo(mv);
    }
}

#[test]
fn test_o_never_loses_against_any_x_line() {
    assert_o_never_loses(&mut Board::new());
}
