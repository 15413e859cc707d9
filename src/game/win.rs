//! Win detection from the most recent move.
//!
//! Everything here is a pure function of the grid and the landing cell. Only
//! the four lines through that cell are walked, never the whole board.

use super::board::{Cell, Grid};
use super::state::Move;

/// Unit steps for the four line axes. The opposite direction of each is walked
/// by negating the step.
pub const AXES: [(isize, isize); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal up-right
    (-1, 1), // Diagonal up-left
];

/// Count same-owner cells stepping away from (col, row), not counting the
/// start cell. Stops at the board edge, at a foreign or empty cell, or after
/// `limit` steps.
fn extent(grid: &Grid, mv: &Move, (dx, dy): (isize, isize), cell: Cell, limit: usize) -> usize {
    let mut count = 0;
    let mut x = mv.column as isize + dx;
    let mut y = mv.row as isize + dy;
    while count < limit && grid.probe(x, y) == Some(cell) {
        count += 1;
        x += dx;
        y += dy;
    }
    count
}

/// Length of the run through the landing cell along one axis, counting the
/// landing cell itself. Each direction is walked at most `limit` steps.
pub fn run_length(grid: &Grid, mv: &Move, axis: (isize, isize), limit: usize) -> usize {
    let cell = mv.player.to_cell();
    let (dx, dy) = axis;
    1 + extent(grid, mv, (dx, dy), cell, limit) + extent(grid, mv, (-dx, -dy), cell, limit)
}

/// Does `mv` complete a run of at least `victory_condition` cells?
///
/// A victory condition longer than the board can never be met; this simply
/// returns `false` for it.
pub fn is_winning_move(grid: &Grid, mv: &Move, victory_condition: usize) -> bool {
    if grid.get(mv.column, mv.row) != Some(mv.player.to_cell()) {
        return false;
    }

    let limit = victory_condition.saturating_sub(1);
    AXES
        .iter()
        .any(|&axis| run_length(grid, mv, axis, limit) >= victory_condition)
}

/// The draw check: every column's top row is occupied.
pub fn is_board_full(grid: &Grid) -> bool {
    grid.is_full()
}

/// Cells of the qualifying run through `mv`, ordered along the first axis that
/// reaches `victory_condition`. `None` when the move did not win.
pub fn winning_line(grid: &Grid, mv: &Move, victory_condition: usize) -> Option<Vec<(usize, usize)>> {
    if !is_winning_move(grid, mv, victory_condition) {
        return None;
    }

    let cell = mv.player.to_cell();
    let unbounded = grid.width().max(grid.height());
    let &(dx, dy) = AXES
        .iter()
        .find(|&&axis| run_length(grid, mv, axis, unbounded) >= victory_condition)?;

    let back = extent(grid, mv, (-dx, -dy), cell, unbounded) as isize;
    let forward = extent(grid, mv, (dx, dy), cell, unbounded) as isize;

    let line = (-back..=forward)
        .map(|step| {
            let x = mv.column as isize + step * dx;
            let y = mv.row as isize + step * dy;
            (x as usize, y as usize)
        })
        .collect();
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    /// Build a grid by dropping pieces column by column, bottom first.
    fn grid_from_columns(width: usize, height: usize, columns: &[&[Player]]) -> Grid {
        let mut grid = Grid::new(width, height);
        for (col, pieces) in columns.iter().enumerate() {
            for player in pieces.iter() {
                grid.place(col, player.to_cell()).unwrap();
            }
        }
        grid
    }

    fn mv(column: usize, row: usize, player: Player) -> Move {
        Move { column, row, player }
    }

    use crate::game::Player::{One as A, Two as B};

    #[test]
    fn test_horizontal_win_from_middle() {
        let grid = grid_from_columns(7, 6, &[&[A], &[A], &[A], &[A]]);
        assert!(is_winning_move(&grid, &mv(1, 0, A), 4));
        assert!(is_winning_move(&grid, &mv(3, 0, A), 4));
    }

    #[test]
    fn test_vertical_win() {
        let grid = grid_from_columns(7, 6, &[&[], &[], &[B, B, B, B]]);
        assert!(is_winning_move(&grid, &mv(2, 3, B), 4));
    }

    #[test]
    fn test_diagonal_up_right_win() {
        let grid = grid_from_columns(7, 6, &[&[A], &[B, A], &[B, B, A], &[B, A, B, A]]);
        assert!(is_winning_move(&grid, &mv(3, 3, A), 4));
        assert!(is_winning_move(&grid, &mv(0, 0, A), 4));
    }

    #[test]
    fn test_diagonal_up_left_win() {
        let grid = grid_from_columns(
            7,
            6,
            &[&[], &[], &[], &[B, A, B, A], &[B, B, A], &[B, A], &[A]],
        );
        assert!(is_winning_move(&grid, &mv(3, 3, A), 4));
    }

    #[test]
    fn test_three_is_not_enough() {
        let grid = grid_from_columns(7, 6, &[&[A], &[A], &[A], &[B]]);
        assert!(!is_winning_move(&grid, &mv(2, 0, A), 4));
    }

    #[test]
    fn test_opponent_piece_breaks_run() {
        let grid = grid_from_columns(7, 6, &[&[A], &[A], &[B], &[A], &[A]]);
        assert!(!is_winning_move(&grid, &mv(4, 0, A), 4));
    }

    #[test]
    fn test_run_does_not_wrap_across_edges() {
        // Column 0 ends in A at its top row; column 1 starts with A A. In storage
        // order those cells are adjacent, on the board they are not.
        let grid = grid_from_columns(4, 4, &[&[B, B, A, A], &[A, A]]);
        assert!(!is_winning_move(&grid, &mv(1, 1, A), 3));
    }

    #[test]
    fn test_axes_counted_independently() {
        // Three horizontally and two vertically through the same cell must not
        // add up across axes.
        let grid = grid_from_columns(7, 6, &[&[A], &[A, A], &[A]]);
        assert!(!is_winning_move(&grid, &mv(1, 1, A), 4));
        assert!(!is_winning_move(&grid, &mv(1, 0, A), 4));
        assert!(is_winning_move(&grid, &mv(1, 0, A), 3));
    }

    #[test]
    fn test_victory_condition_longer_than_board_never_wins() {
        let grid = grid_from_columns(3, 3, &[&[A, A, A], &[A, A, A], &[A, A, A]]);
        for col in 0..3 {
            for row in 0..3 {
                assert!(!is_winning_move(&grid, &mv(col, row, A), 4));
            }
        }
        assert!(is_board_full(&grid));
    }

    #[test]
    fn test_move_must_match_grid() {
        let grid = grid_from_columns(7, 6, &[&[A], &[A], &[A], &[A]]);
        assert!(!is_winning_move(&grid, &mv(1, 0, B), 4));
        assert!(!is_winning_move(&grid, &mv(5, 0, A), 4));
    }

    #[test]
    fn test_run_length_is_capped() {
        let grid = grid_from_columns(7, 6, &[&[A], &[A], &[A], &[A], &[A], &[A], &[A]]);
        assert_eq!(run_length(&grid, &mv(3, 0, A), (1, 0), 7), 7);
        assert_eq!(run_length(&grid, &mv(3, 0, A), (1, 0), 1), 3);
        assert_eq!(run_length(&grid, &mv(3, 0, A), (0, 1), 7), 1);
    }

    #[test]
    fn test_winning_line_is_ordered_full_run() {
        let grid = grid_from_columns(7, 6, &[&[B], &[A], &[A], &[A], &[A], &[A]]);
        let line = winning_line(&grid, &mv(3, 0, A), 4).unwrap();
        assert_eq!(line, vec![(1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]);
    }

    #[test]
    fn test_winning_line_diagonal() {
        let grid = grid_from_columns(7, 6, &[&[A], &[B, A], &[B, B, A], &[B, A, B, A]]);
        let line = winning_line(&grid, &mv(3, 3, A), 4).unwrap();
        assert_eq!(line, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_no_winning_line_without_win() {
        let grid = grid_from_columns(7, 6, &[&[A], &[A]]);
        assert_eq!(winning_line(&grid, &mv(1, 0, A), 4), None);
    }
}
