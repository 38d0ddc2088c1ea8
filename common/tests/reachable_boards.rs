use common::games::tictactoe::{
    Board, Cell, GameOutcome, Mover, calculate_minimax_move, classify, is_draw, winner,
};

/// Visits every board reachable by legal play from the empty board.
fn visit_reachable(board: &Board, to_move: Mover, plies: usize, visit: &mut impl FnMut(&Board, usize)) {
    visit(board, plies);
    if classify(board).is_terminal() {
        return;
    }
    for index in board.empty_cells() {
        let mut next = board.clone();
        next.set(index, to_move).unwrap();
        visit_reachable(&next, to_move.opponent(), plies + 1, &mut *visit);
    }
}

#[test]
fn test_no_board_is_both_won_and_drawn() {
    let mut checked = 0usize;
    visit_reachable(&Board::new(), Mover::X, 0, &mut |board: &Board, _: usize| {
        let outcome = classify(board);
        if matches!(outcome, GameOutcome::Win(_)) {
            assert!(!is_draw(board), "board both won and drawn:\n{}", board);
        }
        if outcome == GameOutcome::Draw {
            assert!(winner(board).is_none());
            assert!(board.is_full());
        }
        checked += 1;
    });
    assert!(checked > 5000);
}

#[test]
fn test_no_winner_before_fifth_ply() {
    visit_reachable(&Board::new(), Mover::X, 0, &mut |board: &Board, plies: usize| {
        assert_eq!(board.filled_count(), plies);
        if plies < 5 {
            assert_eq!(winner(board), None, "early win on\n{}", board);
        }
    });
}

#[test]
fn test_minimax_picks_empty_cell_on_every_open_board() {
    visit_reachable(&Board::new(), Mover::X, 0, &mut |board: &Board, plies: usize| {
        if classify(board).is_terminal() || plies < 6 {
            return;
        }
        let to_move = if plies % 2 == 0 { Mover::X } else { Mover::O };
        let index = calculate_minimax_move(board, to_move).unwrap();
        assert_eq!(board.get(index), Ok(Cell::Empty));
    });
}

#[test]
fn test_x_completes_top_row() {
    use Cell::{Empty, O, X};
    let mut board = Board::from_cells([X, X, Empty, O, O, Empty, Empty, Empty, Empty]);

    board.set(2, Mover::X).unwrap();

    let GameOutcome::Win(line) = classify(&board) else {
        panic!("expected X to win");
    };
    assert_eq!(line.mover, Mover::X);
    assert_eq!(line.pattern.cells(), [0, 1, 2]);
}
