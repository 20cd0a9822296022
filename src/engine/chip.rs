use serde::{Deserialize, Serialize};

/// An RGBA chip colour. Chips are compared channel by channel and never
/// mutated once made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chip {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Chip {
    /// The "no chip" sentinel stored in unoccupied cells.
    pub const TRANSPARENT: Chip = Chip::rgba(0, 0, 0, 0);

    pub const RED: Chip = Chip::opaque(255, 0, 0);
    pub const YELLOW: Chip = Chip::opaque(255, 255, 0);
    pub const GREEN: Chip = Chip::opaque(0, 128, 0);
    pub const BLUE: Chip = Chip::opaque(0, 0, 255);
    pub const PURPLE: Chip = Chip::opaque(128, 0, 128);
    pub const ORANGE: Chip = Chip::opaque(255, 165, 0);

    /// Colours handed out to seats by the runners, in play order.
    pub const PALETTE: [Chip; 6] = [
        Chip::RED,
        Chip::YELLOW,
        Chip::GREEN,
        Chip::BLUE,
        Chip::PURPLE,
        Chip::ORANGE,
    ];

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Chip {
        Chip {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn opaque(red: u8, green: u8, blue: u8) -> Chip {
        Chip::rgba(red, green, blue, 255)
    }

    /// True for the sentinel only. Scanning code must skip transparent
    /// cells rather than rely on equality.
    pub fn is_transparent(&self) -> bool {
        *self == Chip::TRANSPARENT
    }
}
