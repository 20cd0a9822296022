use super::chip::Chip;
use linked_hash_set::LinkedHashSet;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerKind {
    Human,
    Bot,
}

/// A seat at the table. Two players are the same player iff their chips
/// match; the name is display only and takes no part in identity.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    name: String,
    chip: Chip,
    kind: PlayerKind,
}

impl PartialEq for Player {
    fn eq(&self, other: &Player) -> bool {
        self.chip == other.chip
    }
}

impl Eq for Player {}

impl Player {
    pub fn new(name: impl Into<String>, chip: Chip, kind: PlayerKind) -> Player {
        let name = name.into();
        assert!(!name.is_empty(), "A player needs a name");
        assert!(
            !chip.is_transparent(),
            "A player cannot hold the no-chip sentinel"
        );
        Player { name, chip, kind }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chip(&self) -> Chip {
        self.chip
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// True when the seat is played by the machine.
    pub fn is_managed(&self) -> bool {
        self.kind == PlayerKind::Bot
    }
}

/// The ordered list of players plus whose turn it is. The active and next
/// indices stay distinct and in range at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRoster {
    players: Vec<Player>,
    active: usize,
    next: usize,
}

impl PlayerRoster {
    pub fn new(players: Vec<Player>) -> PlayerRoster {
        assert!(players.len() >= 2, "A game needs at least two players");
        let mut chips: LinkedHashSet<Chip> = LinkedHashSet::new();
        for player in &players {
            assert!(
                chips.insert(player.chip()),
                "Duplicate chip colour for player {}",
                player.name()
            );
        }
        PlayerRoster {
            players,
            active: 0,
            next: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    pub fn next_player(&self) -> &Player {
        &self.players[self.next]
    }

    /// Passes the turn to the next seat, wrapping at the end of the list.
    pub fn advance(&mut self) {
        self.active = (self.active + 1) % self.players.len();
        self.next = (self.next + 1) % self.players.len();
    }

    /// Hands the turn back to the previous seat. The inverse of `advance`,
    /// used when a drop is undone.
    pub fn rewind(&mut self) {
        let count = self.players.len();
        self.active = (self.active + count - 1) % count;
        self.next = (self.next + count - 1) % count;
    }

    /// Back to the first seat, as at the start of a game.
    pub fn reset(&mut self) {
        self.active = 0;
        self.next = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> PlayerRoster {
        PlayerRoster::new(vec![
            Player::new("Ruby", Chip::RED, PlayerKind::Human),
            Player::new("Topaz", Chip::YELLOW, PlayerKind::Bot),
            Player::new("Jade", Chip::GREEN, PlayerKind::Bot),
        ])
    }

    #[test]
    fn test_identity_is_the_chip_not_the_name() {
        let a = Player::new("Ruby", Chip::RED, PlayerKind::Human);
        let b = Player::new("Garnet", Chip::RED, PlayerKind::Bot);
        let c = Player::new("Ruby", Chip::YELLOW, PlayerKind::Human);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_managed_seats() {
        assert!(!Player::new("Ruby", Chip::RED, PlayerKind::Human).is_managed());
        assert!(Player::new("Topaz", Chip::YELLOW, PlayerKind::Bot).is_managed());
    }

    #[test]
    fn test_advance_wraps_and_keeps_indices_distinct() {
        let mut roster = roster();
        assert_eq!(roster.active_player().name(), "Ruby");
        assert_eq!(roster.next_player().name(), "Topaz");
        roster.advance();
        assert_eq!(roster.active_player().name(), "Topaz");
        assert_eq!(roster.next_player().name(), "Jade");
        roster.advance();
        assert_eq!(roster.active_player().name(), "Jade");
        assert_eq!(roster.next_player().name(), "Ruby");
        roster.advance();
        assert_eq!(roster.active_player().name(), "Ruby");
    }

    #[test]
    fn test_rewind_is_the_inverse_of_advance() {
        let mut roster = roster();
        let initial = roster.clone();
        roster.advance();
        roster.rewind();
        assert_eq!(roster, initial);
        // Rewinding past the first seat wraps to the last
        roster.rewind();
        assert_eq!(roster.active_player().name(), "Jade");
        assert_eq!(roster.next_player().name(), "Ruby");
    }

    #[test]
    #[should_panic]
    fn test_duplicate_chips_are_rejected() {
        PlayerRoster::new(vec![
            Player::new("Ruby", Chip::RED, PlayerKind::Human),
            Player::new("Garnet", Chip::RED, PlayerKind::Human),
        ]);
    }

    #[test]
    #[should_panic]
    fn test_a_single_player_is_rejected() {
        PlayerRoster::new(vec![Player::new("Ruby", Chip::RED, PlayerKind::Human)]);
    }
}
