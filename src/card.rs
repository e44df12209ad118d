//! Playing cards.

use std::fmt;

/// The suit of a playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Clubs,
    Diamonds,
    Spades,
}

/// The rank of a playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Suit {
    /// All suits, in the order they appear in a fresh deck.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Clubs, Self::Diamonds, Self::Spades];

    /// The name used for the suit in card face asset names.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "hearts",
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Spades => "spades",
        }
    }
}

impl Rank {
    /// All ranks, from ace to king.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// The name used for the rank in card face asset names.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn suit(&self) -> Suit {
        self.suit
    }

    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// The path of the SVG image showing the face of this card, relative to
    /// the given asset directory.
    pub fn face_path(&self, asset_dir: &str) -> String {
        format!(
            "{}/{}_{}.svg",
            asset_dir.trim_end_matches('/'),
            self.suit.name(),
            self.rank.name()
        )
    }

    /// A textual description such as `"queen of hearts"`.
    pub fn alt_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_path_combines_suit_and_rank() {
        let card = Card::new(Suit::Spades, Rank::Ten);
        assert_eq!(card.face_path("./cards"), "./cards/spades_10.svg");
        assert_eq!(card.face_path("assets/"), "assets/spades_10.svg");
    }

    #[test]
    fn alt_text_names_rank_then_suit() {
        assert_eq!(Card::new(Suit::Hearts, Rank::Queen).alt_text(), "queen of hearts");
        assert_eq!(Card::new(Suit::Clubs, Rank::Ace).to_string(), "ace of clubs");
    }
}
