use crate::deck::{Card, Rank};

pub fn card_value(rank: Rank) -> u8 {
    match rank {
        Rank::Ace => 11,
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
    }
}

/// Best total of the face-up cards. Hidden cards count for nothing.
/// Totals beyond `u8::MAX` saturate; they are a bust either way.
pub fn hand_value(hand: &[Card]) -> u8 {
    let mut total: u16 = 0;
    let mut aces = 0;

    for card in hand.iter().filter(|c| !c.hidden) {
        total += u16::from(card_value(card.rank));
        if card.rank == Rank::Ace {
            aces += 1;
        }
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    u8::try_from(total).unwrap_or(u8::MAX)
}

pub fn is_blackjack(hand: &[Card]) -> bool {
    hand.len() == 2 && hand_value(hand) == 21
}

pub fn is_bust(hand: &[Card]) -> bool {
    hand_value(hand) > 21
}

/// Copy of the hand with every card turned face up.
pub fn reveal(hand: &[Card]) -> Vec<Card> {
    hand.iter().map(|c| c.face_up()).collect()
}
