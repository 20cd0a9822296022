use super::board::{Board, Position};
use super::player::PlayerRoster;

/// Everything a game command mutates: the grid, the turn order and the
/// chronological history of landing positions. The history never holds
/// more entries than the board has cells, and its last entry is always
/// the move just made.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub roster: PlayerRoster,
    pub moves: Vec<Position>,
}

impl GameState {
    pub fn new(board: Board, roster: PlayerRoster) -> GameState {
        GameState {
            board,
            roster,
            moves: Vec::new(),
        }
    }

    pub fn last_move(&self) -> Option<Position> {
        self.moves.last().copied()
    }

    pub fn loggable(&self) -> serde_json::Value {
        serde_json::json!({
            "board": self.board.loggable(),
            "moves": self.moves,
            "active": self.roster.active_player().name(),
        })
    }
}
