use tracing::{debug, info};

use super::board::{Cell, Grid, DEFAULT_COLS, DEFAULT_ROWS};
use super::player::{Player, PlayerProfile};
use super::win;
use crate::error::GameError;

/// Run length needed to win unless configured otherwise.
pub const DEFAULT_VICTORY_CONDITION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won(Player),
    Draw,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Where a piece settled and whose it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub column: usize,
    pub row: usize,
    pub player: Player,
}

/// Result of a drop that did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece landed; `state` is the game state after the move.
    Placed { mv: Move, state: GameState },
    /// The column was full. Nothing changed; ask for another column.
    Rejected { column: usize, state: GameState },
}

impl DropOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, DropOutcome::Placed { .. })
    }

    /// Landing row of an accepted drop.
    pub fn row(&self) -> Option<usize> {
        match self {
            DropOutcome::Placed { mv, .. } => Some(mv.row),
            DropOutcome::Rejected { .. } => None,
        }
    }

    pub fn state(&self) -> GameState {
        match self {
            DropOutcome::Placed { state, .. } | DropOutcome::Rejected { state, .. } => *state,
        }
    }
}

/// Board dimensions and win length, fixed for the life of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub victory_condition: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_COLS,
            height: DEFAULT_ROWS,
            victory_condition: DEFAULT_VICTORY_CONDITION,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        // The cell count must fit an allocation, which also keeps every
        // coordinate representable as `isize` for the win walks.
        let cells = self
            .width
            .checked_mul(self.height)
            .filter(|&n| n <= isize::MAX as usize);
        if self.width == 0 || self.height == 0 || cells.is_none() {
            return Err(GameError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.victory_condition < 2 {
            return Err(GameError::InvalidVictoryCondition(self.victory_condition));
        }
        Ok(())
    }
}

/// A single Connect Four game: the grid, whose turn it is and how the game
/// stands. This is the only place the grid is mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    config: BoardConfig,
    players: [PlayerProfile; 2],
    grid: Grid,
    current_player: Player,
    state: GameState,
    last_move: Option<Move>,
    move_count: usize,
}

impl GameBoard {
    /// Start a game on a `width` x `height` board where `victory_condition`
    /// in a row wins.
    pub fn new(width: usize, height: usize, victory_condition: usize) -> Result<Self, GameError> {
        Self::with_config(BoardConfig {
            width,
            height,
            victory_condition,
        })
    }

    pub fn with_config(config: BoardConfig) -> Result<Self, GameError> {
        let players = [
            PlayerProfile::default_for(Player::One),
            PlayerProfile::default_for(Player::Two),
        ];
        Self::with_players(config, players)
    }

    /// Start a game with explicit player profiles, first entry for
    /// [`Player::One`].
    pub fn with_players(config: BoardConfig, players: [PlayerProfile; 2]) -> Result<Self, GameError> {
        config.validate()?;
        debug!(
            width = config.width,
            height = config.height,
            victory_condition = config.victory_condition,
            "new game"
        );
        Ok(GameBoard {
            config,
            players,
            grid: Grid::new(config.width, config.height),
            current_player: Player::One,
            state: GameState::InProgress,
            last_move: None,
            move_count: 0,
        })
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn height(&self) -> usize {
        self.config.height
    }

    pub fn victory_condition(&self) -> usize {
        self.config.victory_condition
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Whose turn it is. Once the game is won this stays on the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn player_profile(&self, player: Player) -> &PlayerProfile {
        &self.players[player.index()]
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Pieces placed since the game started or was last reset.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    fn check_column(&self, column: usize) -> Result<(), GameError> {
        if column >= self.config.width {
            return Err(GameError::ColumnOutOfRange {
                column,
                width: self.config.width,
            });
        }
        Ok(())
    }

    pub fn cell_at(&self, column: usize, row: usize) -> Result<Cell, GameError> {
        self.grid.get(column, row).ok_or(GameError::CellOutOfRange {
            column,
            row,
            width: self.config.width,
            height: self.config.height,
        })
    }

    /// Lowest empty row of `column`, `None` once the column is full.
    pub fn column_top_row(&self, column: usize) -> Result<Option<usize>, GameError> {
        self.check_column(column)?;
        Ok(self.grid.column_top(column))
    }

    /// Columns that can still take a piece. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.config.width)
            .filter(|&col| !self.grid.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A full column is not an error: it comes back as
    /// [`DropOutcome::Rejected`] with nothing changed. Out-of-range columns
    /// and moves after the game ended are errors.
    pub fn drop_piece(&mut self, column: usize) -> Result<DropOutcome, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        self.check_column(column)?;

        let player = self.current_player;
        let Some(row) = self.grid.place(column, player.to_cell()) else {
            debug!(column, "column full, drop rejected");
            return Ok(DropOutcome::Rejected {
                column,
                state: self.state,
            });
        };

        let mv = Move {
            column,
            row,
            player,
        };
        self.last_move = Some(mv);
        self.move_count += 1;
        debug!(column, row, ?player, "piece placed");

        if win::is_winning_move(&self.grid, &mv, self.config.victory_condition) {
            self.state = GameState::Won(player);
            info!(?player, moves = self.move_count, "game won");
        } else if win::is_board_full(&self.grid) {
            self.state = GameState::Draw;
            info!(moves = self.move_count, "game drawn");
        } else {
            self.current_player = player.other();
        }

        Ok(DropOutcome::Placed {
            mv,
            state: self.state,
        })
    }

    /// Cells of the winning run, once the game has been won.
    pub fn winning_line(&self) -> Option<Vec<(usize, usize)>> {
        self.state.winner()?;
        let mv = self.last_move?;
        win::winning_line(&self.grid, &mv, self.config.victory_condition)
    }

    /// Clear the board and start over with the same dimensions and players.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.current_player = Player::One;
        self.state = GameState::InProgress;
        self.last_move = None;
        self.move_count = 0;
        info!("game reset");
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        GameBoard::with_config(BoardConfig::default()).expect("default board config is valid")
    }
}
