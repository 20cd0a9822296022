use super::board::{Board, Position};
use super::player::Player;
use log::{trace, warn};

/// Which verdict to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionKind {
    Win,
    Tie,
}

/// A win or tie verdict over the position on the board, built fresh for
/// each evaluation. The variants are a closed set selected by kind; a win
/// always outranks a tie, so callers evaluate `Win` first.
#[derive(Debug)]
pub enum GameResolution<'a> {
    Win(WinResolution<'a>),
    Tie(TieResolution<'a>),
}

impl<'a> GameResolution<'a> {
    pub fn new(
        board: &'a Board,
        in_a_row: usize,
        players: &'a [Player],
        moves: &'a [Position],
        kind: ResolutionKind,
    ) -> GameResolution<'a> {
        match kind {
            ResolutionKind::Win => {
                GameResolution::Win(WinResolution::new(board, in_a_row, players, moves))
            }
            ResolutionKind::Tie => {
                GameResolution::Tie(TieResolution::new(board, in_a_row, players))
            }
        }
    }

    pub fn decide(&self) -> bool {
        match self {
            GameResolution::Win(resolution) => resolution.decide(),
            GameResolution::Tie(resolution) => resolution.decide(),
        }
    }
}

/// A broken construction contract downgrades the resolution to a
/// permanent "no": loud in the log, never a silent success.
fn contract_holds(in_a_row: usize, player_count: usize) -> bool {
    if in_a_row < 2 {
        warn!("An in-a-row target of {} is not playable", in_a_row);
        return false;
    }
    if player_count < 2 {
        warn!("Resolution asked for a game of {} player(s)", player_count);
        return false;
    }
    true
}

/// Decides whether the most recent move completed a run of `in_a_row`
/// equal chips in any of the four directions through it.
#[derive(Debug)]
pub struct WinResolution<'a> {
    board: &'a Board,
    in_a_row: usize,
    player_count: usize,
    moves: &'a [Position],
    usable: bool,
}

impl<'a> WinResolution<'a> {
    fn new(
        board: &'a Board,
        in_a_row: usize,
        players: &'a [Player],
        moves: &'a [Position],
    ) -> WinResolution<'a> {
        debug_assert!(moves.len() <= board.positions());
        WinResolution {
            board,
            in_a_row,
            player_count: players.len(),
            moves,
            usable: contract_holds(in_a_row, players.len()),
        }
    }

    pub fn decide(&self) -> bool {
        if !self.usable {
            return false;
        }
        // Nobody can hold a full run until every player has taken
        // in_a_row - 1 turns and one chip more has landed
        let least_moves = self.player_count * (self.in_a_row - 1) + 1;
        if self.moves.len() < least_moves {
            trace!(
                "{} move(s) played, {} needed for any run",
                self.moves.len(),
                least_moves
            );
            return false;
        }
        let last = match self.moves.last() {
            Some(position) => *position,
            None => return false,
        };
        self.run_through(self.horizontal_window(last))
            || self.run_through(self.vertical_window(last))
            || self.run_through(self.upward_window(last))
            || self.run_through(self.downward_window(last))
    }

    /// The horizontal span around the last move that could hold a run,
    /// clamped to the board edges.
    fn horizontal_window(&self, last: Position) -> Vec<Position> {
        let reach = self.in_a_row - 1;
        let first = last.column.saturating_sub(reach);
        let final_column = (last.column + reach).min(self.board.columns() - 1);
        (first..=final_column)
            .map(|column| Position {
                row: last.row,
                column,
            })
            .collect()
    }

    fn vertical_window(&self, last: Position) -> Vec<Position> {
        let reach = self.in_a_row - 1;
        let first = last.row.saturating_sub(reach);
        let final_row = (last.row + reach).min(self.board.rows() - 1);
        (first..=final_row)
            .map(|row| Position {
                row,
                column: last.column,
            })
            .collect()
    }

    /// The rising diagonal: the row shrinks as the column grows. Each end
    /// stops at whichever edge comes first, row or column.
    fn upward_window(&self, last: Position) -> Vec<Position> {
        let reach = self.in_a_row - 1;
        let behind = reach
            .min(last.column)
            .min(self.board.rows() - 1 - last.row);
        let ahead = reach
            .min(self.board.columns() - 1 - last.column)
            .min(last.row);
        (0..=behind + ahead)
            .map(|step| Position {
                row: last.row + behind - step,
                column: last.column - behind + step,
            })
            .collect()
    }

    /// The falling diagonal: the row grows with the column.
    fn downward_window(&self, last: Position) -> Vec<Position> {
        let reach = self.in_a_row - 1;
        let behind = reach.min(last.column).min(last.row);
        let ahead = reach
            .min(self.board.columns() - 1 - last.column)
            .min(self.board.rows() - 1 - last.row);
        (0..=behind + ahead)
            .map(|step| Position {
                row: last.row - behind + step,
                column: last.column - behind + step,
            })
            .collect()
    }

    /// Walks adjacent pairs through the window counting a streak of equal
    /// occupied cells. The streak resets at every failing pair; a window
    /// shorter than the run can never reach the target. Transparent cells
    /// match nothing, including each other.
    fn run_through(&self, window: Vec<Position>) -> bool {
        let needed = self.in_a_row - 1;
        let mut streak = 0;
        for pair in window.windows(2) {
            let left = self.board.chip_at(pair[0]);
            if !left.is_transparent() && left == self.board.chip_at(pair[1]) {
                streak += 1;
                if streak == needed {
                    return true;
                }
            } else {
                streak = 0;
            }
        }
        false
    }
}

/// Decides whether the board has filled with no room left to play. Only
/// meaningful once the win verdict has come back negative.
#[derive(Debug)]
pub struct TieResolution<'a> {
    board: &'a Board,
    usable: bool,
}

impl<'a> TieResolution<'a> {
    fn new(board: &'a Board, in_a_row: usize, players: &'a [Player]) -> TieResolution<'a> {
        TieResolution {
            board,
            usable: contract_holds(in_a_row, players.len()),
        }
    }

    pub fn decide(&self) -> bool {
        self.usable && self.board.is_full()
    }
}
