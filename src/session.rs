use crate::engine::action::GameAction;
use crate::engine::board::{Board, Position};
use crate::engine::command::CommandStack;
use crate::engine::event::{EventQueue, GameEvent};
use crate::engine::player::{Player, PlayerRoster};
use crate::engine::resolution::{GameResolution, ResolutionKind};
use crate::engine::state::GameState;
use log::{info, trace, warn};

/// Board shape and rules for one game.
#[derive(Debug, Clone, Copy)]
pub struct GameSettings {
    pub rows: usize,
    pub columns: usize,
    pub in_a_row: usize,
}

impl Default for GameSettings {
    fn default() -> GameSettings {
        GameSettings {
            rows: 6,
            columns: 7,
            in_a_row: 4,
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Won(Player),
    Tied,
}

/// One running game: the state the commands mutate, the undo/redo history
/// over it, and the event queue the presentation layer drains. Calls are
/// synchronous and leave the session consistent whether they succeed or
/// refuse.
#[derive(Debug)]
pub struct GameSession {
    state: GameState,
    stack: CommandStack<GameAction>,
    in_a_row: usize,
    events: EventQueue,
    outcome: Option<Outcome>,
}

impl GameSession {
    pub fn new(settings: GameSettings, players: Vec<Player>) -> GameSession {
        assert!(
            settings.in_a_row >= 2,
            "An in-a-row target of {} is not playable",
            settings.in_a_row
        );
        let board = Board::new(settings.rows, settings.columns);
        // Enough history to unwind a maximal game
        let capacity = board.positions().max(2);
        GameSession {
            state: GameState::new(board, PlayerRoster::new(players)),
            stack: CommandStack::new(capacity),
            in_a_row: settings.in_a_row,
            events: EventQueue::new(),
            outcome: None,
        }
    }

    /// Plays the active player's chip into a column. Returns false without
    /// touching anything when the game is over or the column cannot take a
    /// chip; only valid drops reach the command stack.
    pub fn drop_chip(&mut self, column: usize) -> bool {
        if self.outcome.is_some() {
            warn!("Dropping a chip into a finished game");
            return false;
        }
        if column >= self.state.board.columns() || self.state.board.is_column_full(column) {
            return false;
        }
        let player = self.state.roster.active_player().clone();
        let action = GameAction::DropChip {
            column,
            chip: player.chip(),
        };
        if !self.stack.execute(action, &mut self.state) {
            warn!("Drop in column {} failed after validation", column);
            return false;
        }
        let position = match self.state.last_move() {
            Some(position) => position,
            None => unreachable!("an applied drop records its landing position"),
        };
        self.events.publish(GameEvent::ChipDropped { player, position });
        trace!("State after drop: {}", self.state.loggable());
        self.resolve(position);
        true
    }

    /// Win first, then tie: a full board with a finished run is a win.
    fn resolve(&mut self, last: Position) {
        let players = self.state.roster.players();
        let win = GameResolution::new(
            &self.state.board,
            self.in_a_row,
            players,
            &self.state.moves,
            ResolutionKind::Win,
        );
        if win.decide() {
            let landed = self.state.board.chip_at(last);
            let winner = players
                .iter()
                .find(|player| player.chip() == landed)
                .cloned();
            match winner {
                Some(winner) => {
                    info!("{} wins", winner.name());
                    self.outcome = Some(Outcome::Won(winner.clone()));
                    self.events.publish(GameEvent::GameWon { winner });
                }
                None => warn!("A run of chips no player owns won the game"),
            }
            return;
        }
        let tie = GameResolution::new(
            &self.state.board,
            self.in_a_row,
            players,
            &self.state.moves,
            ResolutionKind::Tie,
        );
        if tie.decide() {
            info!("The game is a tie");
            self.outcome = Some(Outcome::Tied);
            self.events.publish(GameEvent::GameTied);
        }
    }

    /// Unwinds the most recent move. A decided game reopens.
    pub fn undo(&mut self) -> bool {
        if !self.stack.undo(&mut self.state) {
            return false;
        }
        self.outcome = None;
        self.events.publish(GameEvent::TurnUndone);
        true
    }

    /// Replays the most recently undone move, re-evaluating the verdict
    /// it may have produced.
    pub fn redo(&mut self) -> bool {
        if !self.stack.redo(&mut self.state) {
            return false;
        }
        self.events.publish(GameEvent::TurnRedone);
        if let Some(position) = self.state.last_move() {
            self.resolve(position);
        }
        true
    }

    pub fn can_undo(&self) -> bool {
        self.stack.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.stack.can_redo()
    }

    /// Back to an empty board with the first seat to play.
    pub fn restart(&mut self) {
        self.state.board.clear();
        self.state.moves.clear();
        self.state.roster.reset();
        self.stack.clear();
        self.outcome = None;
        self.events.publish(GameEvent::GameRestarted);
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn players(&self) -> &[Player] {
        self.state.roster.players()
    }

    pub fn active_player(&self) -> &Player {
        self.state.roster.active_player()
    }

    pub fn moves(&self) -> &[Position] {
        &self.state.moves
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns a chip can currently be dropped into.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.state.board.columns())
            .filter(|&column| !self.state.board.is_column_full(column))
            .collect()
    }

    pub fn events(&mut self) -> &mut EventQueue {
        &mut self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::chip::Chip;
    use crate::engine::player::PlayerKind;

    fn new_session(settings: GameSettings) -> GameSession {
        GameSession::new(
            settings,
            vec![
                Player::new("Ruby", Chip::RED, PlayerKind::Human),
                Player::new("Topaz", Chip::YELLOW, PlayerKind::Bot),
            ],
        )
    }

    fn play(session: &mut GameSession, columns: &[usize]) {
        for &column in columns {
            assert!(session.drop_chip(column));
        }
    }

    #[test]
    fn test_a_game_plays_to_a_win() {
        let mut session = new_session(GameSettings::default());
        play(&mut session, &[0, 0, 1, 1, 2, 2, 3]);
        assert!(session.is_over());
        assert_eq!(
            session.outcome(),
            Some(&Outcome::Won(Player::new(
                "Ruby",
                Chip::RED,
                PlayerKind::Human
            )))
        );
        // Nothing more can be played
        assert!(!session.drop_chip(4));

        let events: Vec<GameEvent> = session
            .events()
            .drain()
            .into_iter()
            .map(|record| record.event)
            .collect();
        assert_eq!(events.len(), 8);
        assert!(matches!(events[0], GameEvent::ChipDropped { .. }));
        assert!(matches!(events[7], GameEvent::GameWon { ref winner } if winner.name() == "Ruby"));
    }

    #[test]
    fn test_a_small_board_fills_to_a_tie() {
        let mut session = new_session(GameSettings {
            rows: 1,
            columns: 2,
            in_a_row: 2,
        });
        play(&mut session, &[0, 1]);
        assert_eq!(session.outcome(), Some(&Outcome::Tied));
        assert!(session.is_over());
        assert!(session.legal_columns().is_empty());
    }

    #[test]
    fn test_undo_reopens_a_decided_game() {
        let mut session = new_session(GameSettings::default());
        play(&mut session, &[0, 0, 1, 1, 2, 2, 3]);
        assert!(session.is_over());
        assert!(session.undo());
        assert!(!session.is_over());
        assert_eq!(session.active_player().name(), "Ruby");
        // Redo decides the game again
        assert!(session.redo());
        assert!(session.is_over());
    }

    #[test]
    fn test_a_fresh_move_closes_the_redo_branch() {
        let mut session = new_session(GameSettings::default());
        play(&mut session, &[0, 1, 2]);
        session.undo();
        session.undo();
        assert!(session.can_redo());
        play(&mut session, &[5]);
        assert!(!session.can_redo());
        assert_eq!(session.moves().len(), 2);
    }

    #[test]
    fn test_full_columns_do_not_spend_the_turn() {
        let mut session = new_session(GameSettings {
            rows: 2,
            columns: 7,
            in_a_row: 4,
        });
        play(&mut session, &[0, 0]);
        assert!(!session.drop_chip(0));
        assert!(!session.drop_chip(7));
        assert_eq!(session.active_player().name(), "Ruby");
        assert_eq!(session.moves().len(), 2);
        assert_eq!(session.legal_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_restart_wipes_the_game() {
        let mut session = new_session(GameSettings::default());
        play(&mut session, &[0, 0, 1, 1, 2, 2, 3]);
        session.events().drain();
        session.restart();
        assert!(!session.is_over());
        assert!(!session.can_undo());
        assert!(session.moves().is_empty());
        assert!(!session.board().is_full());
        assert_eq!(session.active_player().name(), "Ruby");
        let events = session.events().drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, GameEvent::GameRestarted);
    }

    #[test]
    fn test_boundary_undo_and_redo_do_nothing() {
        let mut session = new_session(GameSettings::default());
        assert!(!session.undo());
        assert!(!session.redo());
        play(&mut session, &[3]);
        assert!(!session.redo());
        assert!(session.undo());
        assert!(!session.undo());
        assert_eq!(session.moves().len(), 0);
    }
}
