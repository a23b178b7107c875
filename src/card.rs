//! Card types.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

/// Rank of an ace.
pub const ACE: u8 = 1;
/// Rank of a jack.
pub const JACK: u8 = 11;
/// Rank of a queen.
pub const QUEEN: u8 = 12;
/// Rank of a king.
pub const KING: u8 = 13;

/// A playing card.
///
/// `visible` only records whether the face may be shown to the player. The
/// engine always knows the real rank and suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// Whether the face is disclosed to the player-facing view.
    pub visible: bool,
}

impl Card {
    /// Creates a new face-up card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// count as zero when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            visible: true,
        }
    }

    /// Returns the same card turned face down.
    #[must_use]
    pub const fn face_down(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }

    /// Returns the same card turned face up.
    #[must_use]
    pub const fn face_up(self) -> Self {
        Self {
            visible: true,
            ..self
        }
    }

    /// Returns whether this card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A card as the player-facing view may see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CardView {
    /// Face up, rank and suit disclosed.
    FaceUp(Card),
    /// Face down.
    FaceDown,
}

impl From<Card> for CardView {
    fn from(card: Card) -> Self {
        if card.visible {
            Self::FaceUp(card)
        } else {
            Self::FaceDown
        }
    }
}
