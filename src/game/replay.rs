//! Replaying a fixed list of column choices, as typed by a person: columns are
//! numbered from 1.

use super::state::{DropOutcome, GameBoard, GameState};
use crate::error::ReplayError;

/// What happened over a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    /// `(move number, column)` of drops into full columns, both 1-based.
    pub skipped: Vec<(usize, usize)>,
    pub state: GameState,
    pub move_count: usize,
}

/// Drop a piece for every 1-based column in `columns`, in order.
///
/// Full columns are recorded in [`ReplaySummary::skipped`] and play carries on
/// with the same player. Column 0, columns past the board edge and moves after
/// the game ended stop the replay with an error.
pub fn replay(board: &mut GameBoard, columns: &[usize]) -> Result<ReplaySummary, ReplayError> {
    let mut skipped = Vec::new();

    for (i, &column) in columns.iter().enumerate() {
        let number = i + 1;
        if column == 0 {
            return Err(ReplayError::ZeroColumn { number });
        }
        let outcome = board
            .drop_piece(column - 1)
            .map_err(|source| ReplayError::Move {
                number,
                column,
                source,
            })?;
        if let DropOutcome::Rejected { .. } = outcome {
            skipped.push((number, column));
        }
    }

    Ok(ReplaySummary {
        skipped,
        state: board.state(),
        move_count: board.move_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::game::{Cell, Player};

    #[test]
    fn test_columns_are_one_based() {
        let mut board = GameBoard::default();
        let summary = replay(&mut board, &[1, 7]).unwrap();

        assert_eq!(board.cell_at(0, 0), Ok(Cell::Player1));
        assert_eq!(board.cell_at(6, 0), Ok(Cell::Player2));
        assert_eq!(summary.move_count, 2);
        assert_eq!(summary.state, GameState::InProgress);
        assert!(summary.skipped.is_empty());
    }

    #[test]
    fn test_column_zero_is_rejected() {
        let mut board = GameBoard::default();
        let err = replay(&mut board, &[4, 0, 4]).unwrap_err();

        assert_eq!(err, ReplayError::ZeroColumn { number: 2 });
        assert_eq!(err.to_string(), "move 2: columns are numbered from 1");
        assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn test_full_column_is_skipped() {
        let mut board = GameBoard::new(3, 2, 3).unwrap();
        let summary = replay(&mut board, &[1, 1, 1, 2]).unwrap();

        assert_eq!(summary.skipped, vec![(3, 1)]);
        assert_eq!(summary.move_count, 3);
        // The skipped drop does not pass the turn.
        assert_eq!(board.cell_at(1, 0), Ok(Cell::Player1));
        assert_eq!(board.current_player(), Player::Two);
    }

    #[test]
    fn test_move_after_game_end_is_error() {
        let mut board = GameBoard::default();
        let err = replay(&mut board, &[1, 2, 1, 2, 1, 2, 1, 3]).unwrap_err();

        assert_eq!(
            err,
            ReplayError::Move {
                number: 8,
                column: 3,
                source: GameError::GameOver
            }
        );
        assert_eq!(board.state(), GameState::Won(Player::One));
    }

    #[test]
    fn test_column_past_edge_is_error() {
        let mut board = GameBoard::default();
        let err = replay(&mut board, &[8]).unwrap_err();

        assert_eq!(
            err.to_string(),
            "move 1 (column 8): column 7 is out of range (board has 7 columns)"
        );
    }

    #[test]
    fn test_replay_ending_in_win() {
        let mut board = GameBoard::default();
        let summary = replay(&mut board, &[1, 1, 2, 2, 3, 3, 4]).unwrap();

        assert_eq!(summary.state, GameState::Won(Player::One));
        assert_eq!(summary.move_count, 7);
    }
}
