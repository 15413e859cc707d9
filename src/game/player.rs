use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::Player1,
            Player::Two => Cell::Player2,
        }
    }

    /// Zero-based slot, used to index per-player tables.
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Default display name
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

/// Presentation attributes attached to a player identity.
///
/// The board stores these and hands them back to callers; it never reads them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    /// Any color name or `#rrggbb` hex string the front end understands.
    pub color: String,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        PlayerProfile {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Stock profile for a player: red for the first, yellow for the second.
    pub fn default_for(player: Player) -> Self {
        match player {
            Player::One => PlayerProfile::new(player.name(), "red"),
            Player::Two => PlayerProfile::new(player.name(), "yellow"),
        }
    }
}
