use super::chip::Chip;
use super::command::Command;
use super::state::GameState;
use log::{debug, warn};

/// The closed set of commands a game session records on its stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameAction {
    DropChip { column: usize, chip: Chip },
}

impl Command for GameAction {
    type Target = GameState;

    fn apply(&self, state: &mut GameState) -> bool {
        match *self {
            GameAction::DropChip { column, chip } => drop_chip(state, column, chip),
        }
    }

    fn revert(&self, state: &mut GameState) -> bool {
        match *self {
            GameAction::DropChip { column, chip } => lift_chip(state, column, chip),
        }
    }
}

fn drop_chip(state: &mut GameState, column: usize, chip: Chip) -> bool {
    if column >= state.board.columns() {
        warn!(
            "Drop requested in column {} of a {}-column board",
            column,
            state.board.columns()
        );
        return false;
    }
    let active = state.roster.active_player();
    if chip != active.chip() {
        warn!(
            "Dropped chip {:?} is not the active player's: {} holds {:?}",
            chip,
            active.name(),
            active.chip()
        );
        return false;
    }
    match state.board.drop_chip(column, chip) {
        Some(position) => {
            state.roster.advance();
            state.moves.push(position);
            debug!("Chip landed at row {} column {}", position.row, position.column);
            true
        }
        None => {
            debug!("Column {} is full, nothing dropped", column);
            false
        }
    }
}

fn lift_chip(state: &mut GameState, column: usize, chip: Chip) -> bool {
    let last = match state.moves.last() {
        Some(position) if position.column == column => *position,
        Some(position) => {
            warn!(
                "Undoing a drop in column {} but the last move was in column {}",
                column, position.column
            );
            return false;
        }
        None => {
            warn!("Undoing a drop with no move history");
            return false;
        }
    };
    match state.board.lift_chip(column) {
        Some((position, lifted)) if position == last && lifted == chip => {
            state.moves.pop();
            state.roster.rewind();
            true
        }
        Some((position, lifted)) => {
            // The board and the history disagree. Put the chip back and
            // refuse rather than corrupt either.
            warn!(
                "Lifted {:?} at row {} column {} which does not match the recorded move",
                lifted, position.row, position.column
            );
            state.board.drop_chip(column, lifted);
            false
        }
        None => {
            warn!("Undoing a drop in the empty column {}", column);
            false
        }
    }
}
