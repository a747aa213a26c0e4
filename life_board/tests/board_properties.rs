use life_board::{BoardError, Cell, LifeBoard, patterns};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn board_with(cols: usize, rows: usize, alive: &[(usize, usize)]) -> LifeBoard {
    let mut board = LifeBoard::new(cols, rows).unwrap();
    for &(x, y) in alive {
        board.set_cell(x, y).unwrap();
    }
    board.toggle_pause();
    board
}

fn alive(board: &LifeBoard) -> Vec<(usize, usize)> {
    let mut cells: Vec<_> = board.grid().iter_alive().collect();
    cells.sort();
    cells
}

#[test]
fn new_board_is_dead_and_paused() {
    for cols in 1..=6 {
        for rows in 1..=6 {
            let board = LifeBoard::new(cols, rows).unwrap();
            assert!(board.is_paused());
            assert_eq!(board.size(), (cols, rows));
            assert_eq!(board.grid().cells().len(), cols * rows);
            assert!(board.grid().cells().iter().all(|&c| c == Cell::Dead));
        }
    }
}

#[test]
fn zero_dimensions_rejected() {
    assert!(matches!(
        LifeBoard::new(0, 0),
        Err(BoardError::EmptyDimensions { cols: 0, rows: 0 })
    ));
}

#[test]
fn clear_mid_run_leaves_everything_dead() {
    let mut board = LifeBoard::new(20, 20).unwrap();
    board.randomize(&mut StdRng::seed_from_u64(1), 0.4);
    board.toggle_pause();
    for _ in 0..3 {
        board.update();
    }
    board.clear();
    assert_eq!(board.grid().live_count(), 0);
    for _ in 0..3 {
        board.update();
        assert_eq!(board.grid().live_count(), 0);
    }
}

#[test]
fn pause_toggles_and_freezes() {
    let mut board = LifeBoard::new(6, 6).unwrap();
    board.toggle_pause();
    board.toggle_pause();
    assert!(board.is_paused());

    board.set_cell(1, 1).unwrap();
    board.set_cell(2, 1).unwrap();
    board.set_cell(3, 1).unwrap();
    let before = board.grid().clone();
    for _ in 0..10 {
        assert!(!board.update());
    }
    assert_eq!(board.grid(), &before);
}

#[test]
fn corners_are_neighbors_on_a_torus() {
    let board = board_with(3, 3, &[(2, 2)]);
    assert_eq!(board.grid().alive_neighbors(0, 0), 1);
}

#[test]
fn wrapped_neighbors_cause_birth() {
    // All three live cells reach (0, 0) only across the edges.
    let mut board = board_with(5, 5, &[(4, 4), (4, 0), (0, 4)]);
    board.update();
    assert_eq!(board.grid().get(0, 0), Some(Cell::Alive));
}

#[test]
fn block_is_still() {
    let block = patterns::find("Block").unwrap();
    for (size, origin) in [(4, 0), (8, 3)] {
        let mut board = LifeBoard::new(size, size).unwrap();
        board.stamp(block, origin, origin).unwrap();
        board.toggle_pause();
        let expected = alive(&board);
        for _ in 0..10 {
            board.update();
            assert_eq!(alive(&board), expected, "board {size}x{size}");
        }
    }
}

#[test]
fn blinker_has_period_two() {
    let mut board = board_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
    board.update();
    assert_eq!(alive(&board), vec![(2, 1), (2, 2), (2, 3)]);
    board.update();
    assert_eq!(alive(&board), vec![(1, 2), (2, 2), (3, 2)]);
}

#[test]
fn glider_circles_the_torus() {
    let glider = patterns::find("Glider").unwrap();
    let mut board = LifeBoard::new(8, 8).unwrap();
    board.stamp(glider, 0, 0).unwrap();
    board.toggle_pause();
    let start = alive(&board);

    for _ in 0..4 {
        board.update();
    }
    let shifted: Vec<_> = {
        let mut cells: Vec<_> = start.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
        cells.sort();
        cells
    };
    assert_eq!(alive(&board), shifted);

    for _ in 4..32 {
        board.update();
    }
    assert_eq!(alive(&board), start);
}

#[test]
fn birth_needs_exactly_three() {
    let ring = [(2, 2), (3, 2), (4, 2), (2, 3), (4, 3)];
    for n in 0..=ring.len() {
        let mut board = board_with(7, 7, &ring[..n]);
        board.update();
        let expected = if n == 3 { Cell::Alive } else { Cell::Dead };
        assert_eq!(board.grid().get(3, 3), Some(expected), "{n} neighbors");
    }
}

#[test]
fn survival_needs_two_or_three() {
    let ring = [(2, 2), (3, 2), (4, 2), (2, 3), (4, 3), (2, 4), (3, 4), (4, 4)];
    for n in 0..=ring.len() {
        let mut cells = ring[..n].to_vec();
        cells.push((3, 3));
        let mut board = board_with(7, 7, &cells);
        board.update();
        let expected = if n == 2 || n == 3 { Cell::Alive } else { Cell::Dead };
        assert_eq!(board.grid().get(3, 3), Some(expected), "{n} neighbors");
    }
}

#[test]
fn grid_reflects_generation_at_call_time() {
    let mut board = board_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
    let before = board.grid().clone();
    assert_eq!(before.get(1, 2), Some(Cell::Alive));
    assert_eq!(before.get(2, 1), Some(Cell::Dead));

    board.update();
    let after = board.grid();
    assert_ne!(after, &before);
    assert_eq!(after.get(1, 2), Some(Cell::Dead));
    assert_eq!(after.get(2, 1), Some(Cell::Alive));
}

#[test]
fn edits_do_not_wrap() {
    let mut board = LifeBoard::new(5, 5).unwrap();
    let err = board.set_cell(5, 2).unwrap_err();
    assert_eq!(err.to_string(), "cell (5, 2) is outside the 5x5 board");
    assert_eq!(board.grid().get(0, 2), Some(Cell::Dead));
}
