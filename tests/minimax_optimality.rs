use std::collections::{HashMap, HashSet};

use tictactoe::search::{Searcher, WIN_SCORE};
use tictactoe::{AIEngine, Board, Mark, Pos};

fn create_board(moves: &[(usize, Mark)]) -> Board {
    let mut board = Board::new();
    for &(idx, mark) in moves {
        assert!(
            board.place_at(Pos::from_index(idx), mark),
            "Failed to set cell in test setup"
        );
    }
    board
}

fn assert_best_move(board: &mut Board, mark: Mark, expected_index: usize, msg: &str) {
    let best_move = AIEngine::new().get_move(board, mark);
    assert_eq!(best_move.map(Pos::to_index), Some(expected_index), "{}", msg);
}

#[test]
fn test_win_in_1() {
    let mut board = create_board(&[(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O)]);
    assert_best_move(&mut board, Mark::X, 2, "Minimax failed to find immediate win");
}

#[test]
fn test_block_in_1() {
    let mut board = create_board(&[(0, Mark::X), (3, Mark::O), (1, Mark::X)]);
    assert_best_move(&mut board, Mark::O, 2, "Minimax failed to block immediate loss");
}

#[test]
fn test_win_beats_block() {
    // O can win at 5 or block X at 2; winning comes first
    let mut board = create_board(&[(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O), (8, Mark::X)]);
    assert_best_move(&mut board, Mark::O, 5, "Minimax blocked instead of winning");
}

#[test]
fn test_win_in_2_fork() {
    let mut board = create_board(&[(0, Mark::X), (4, Mark::O), (8, Mark::X)]);
    let result = AIEngine::new().get_move_with_stats(&mut board, Mark::X);
    let move_idx = result.best_move.map(Pos::to_index);

    assert!(
        matches!(move_idx, Some(2) | Some(6)),
        "Minimax failed to find fork move. Got {:?}",
        move_idx
    );
    // X moves, O blocks one threat, X completes the other
    assert_eq!(result.score, WIN_SCORE - 3);
}

#[test]
fn test_self_play_from_empty_is_draw() {
    let mut board = Board::new();
    let mut engine = AIEngine::new();
    let mut mark = Mark::X;

    while let Some(pos) = engine.get_move(&mut board, mark) {
        assert!(board.place_at(pos, mark));
        assert!(!board.has_winner(mark), "{mark} won against perfect play: {board}");
        mark = mark.opponent();
    }

    assert!(board.is_draw());
    assert!(!board.has_winner(Mark::X));
    assert!(!board.has_winner(Mark::O));
}

#[test]
fn test_self_play_from_every_opening_is_draw() {
    for opening in 0..9 {
        let mut board = create_board(&[(opening, Mark::X)]);
        let mut engine = AIEngine::new();
        let mut mark = Mark::O;

        while let Some(pos) = engine.get_move(&mut board, mark) {
            board.place_at(pos, mark);
            if board.has_winner(mark) {
                panic!("{mark} won after opening {opening}: {board}");
            }
            mark = mark.opponent();
        }
        assert!(board.is_draw(), "opening {opening} did not fill the board");
    }
}

#[test]
fn test_scan_order_tie_break() {
    // All four corner replies to a center opening draw; the first one is picked
    let mut board = create_board(&[(4, Mark::X)]);
    let scores = Searcher::new().score_moves(&mut board, Mark::O);
    let best = scores.iter().map(|&(_, s)| s).max().unwrap();
    let first_best = scores.iter().find(|&&(_, s)| s == best).map(|&(p, _)| p);

    assert_eq!(AIEngine::new().get_move(&mut board, Mark::O), first_best);
    assert_eq!(first_best, Some(Pos::new(0, 0)));
}

/// Game value for the side to move: 1 win, 0 draw, -1 loss.
fn solve(board: &mut Board, to_move: Mark, memo: &mut HashMap<(Board, Mark), i32>) -> i32 {
    if let Some(&v) = memo.get(&(board.clone(), to_move)) {
        return v;
    }
    let value = if board.has_winner(to_move.opponent()) {
        -1
    } else if board.is_draw() {
        0
    } else {
        let mut best = -1;
        for pos in board.empty_cells() {
            board.place_at(pos, to_move);
            best = best.max(-solve(board, to_move.opponent(), memo));
            board.undo_at(pos);
        }
        best
    };
    memo.insert((board.clone(), to_move), value);
    value
}

/// Every non-terminal position reachable from the empty board, with the mark to move.
fn reachable_positions() -> Vec<(Board, Mark)> {
    fn walk(board: &mut Board, to_move: Mark, seen: &mut HashSet<Board>, out: &mut Vec<(Board, Mark)>) {
        if !seen.insert(board.clone()) {
            return;
        }
        if board.has_winner(to_move.opponent()) || board.is_draw() {
            return;
        }
        out.push((board.clone(), to_move));
        for pos in board.empty_cells() {
            board.place_at(pos, to_move);
            walk(board, to_move.opponent(), seen, out);
            board.undo_at(pos);
        }
    }

    let mut out = Vec::new();
    walk(&mut Board::new(), Mark::X, &mut HashSet::new(), &mut out);
    out
}

#[test]
fn test_engine_is_optimal_everywhere() {
    let mut memo = HashMap::new();
    let mut searcher = Searcher::new();
    let positions = reachable_positions();
    assert_eq!(positions.len(), 4520);

    for (board, mark) in positions {
        let mut board = board;
        let value = solve(&mut board, mark, &mut memo);
        let result = searcher.search(&mut board, mark);

        assert_eq!(result.score.signum(), value, "score sign mismatch on {board} ({mark})");

        let pos = result.best_move.expect("non-terminal position has a move");
        board.place_at(pos, mark);
        let after = -solve(&mut board, mark.opponent(), &mut memo);
        assert_eq!(after, value, "{mark} at {pos:?} throws away value on {board}");
    }
}
