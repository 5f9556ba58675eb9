// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards encoding and deck.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Primes used to encode a card rank.
///
/// The evaluator product tables are keyed by products of these primes, any
/// change invalidates persisted tables.
pub const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// A Poker card.
///
/// A card is represented using the encoding in the [Cactus Kev's][kevlink] Poker
/// hand evaluator with each card having the following format:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxpppppp|
///   +--------+--------+--------+--------+
///   p = prime number of rank (deuce=2,trey=3,four=5,five=7,...,ace=41)
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   cdhs = suit of card
///   b = bit turned on depending on rank of card
/// ```
///
/// OR-ing the codes of a hand gives the ranks present in the hand, AND-ing them
/// leaves a suit bit set only if all cards share the suit, and multiplying the
/// primes identifies the ranks multiset.
///
/// [kevlink]: http://suffe.cool/poker/evaluator.html
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Card(u32);

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        let (rank, suit) = (rank as u32, suit as u32);
        Self(PRIMES[rank as usize] | (rank << 8) | (suit << 12) | (1 << (rank + 16)))
    }

    /// The card code.
    #[inline]
    pub const fn code(&self) -> u32 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bits() {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::ALL[self.rank_bits() as usize]
    }

    /// Returns the rank ordinal (deuce=0, ..., ace=12).
    #[inline]
    pub const fn rank_bits(&self) -> u8 {
        ((self.0 >> 8) & 0xf) as u8
    }

    /// Returns the suit bits.
    #[inline]
    pub const fn suit_bits(&self) -> u8 {
        ((self.0 >> 12) & 0xf) as u8
    }

    /// Returns the 13 bits rank mask with only this card rank bit set.
    #[inline]
    pub const fn rank_mask(&self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Returns this card rank prime.
    #[inline]
    pub const fn prime(&self) -> u32 {
        self.0 & 0xff
    }
}

impl Default for Card {
    fn default() -> Self {
        Card::new(Rank::Deuce, Suit::Clubs)
    }
}

impl From<Card> for u32 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl TryFrom<u32> for Card {
    type Error = CardError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        let rank = Rank::from_ordinal((code >> 8) & 0xf).ok_or(CardError::Code(code))?;
        let suit = match (code >> 12) & 0xf {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            0x1 => Suit::Spades,
            _ => return Err(CardError::Code(code)),
        };

        let card = Card::new(rank, suit);
        if card.0 == code {
            Ok(card)
        } else {
            Err(CardError::Code(code))
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a card like `"AS"` or `"td"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r), Some(c), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardError::Parse(s.to_string()));
        };

        let rank = match r.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(CardError::Parse(s.to_string())),
        };

        let suit = match c.to_ascii_uppercase() {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(CardError::Parse(s.to_string())),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Card decoding errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    /// Not a valid card code.
    #[error("invalid card code 0x{0:08x}")]
    Code(u32),
    /// Not a valid card string.
    #[error("invalid card '{0}'")]
    Parse(String),
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// All ranks from deuce to ace.
    pub const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Returns the rank for an ordinal (deuce=0, ..., ace=12).
    pub fn from_ordinal(ordinal: u32) -> Option<Rank> {
        Self::ALL.get(ordinal as usize).copied()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

/// Calls `f` for each k-subset of `0..n` as a sorted slice of indices.
///
/// Subsets are visited in colex order, the first one is `0..k`.
pub fn for_each_ksubset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if k > n {
        return;
    }

    if k == 0 {
        f(&[]);
        return;
    }

    // Algorithm L from TAOCP 4a, c[1..=k] is the current subset and the two
    // sentinels stop the carry loop.
    let mut c = vec![0usize; k + 3];
    for (j, cj) in c.iter_mut().enumerate().take(k + 1).skip(1) {
        *cj = j - 1;
    }
    c[k + 1] = n;

    loop {
        f(&c[1..=k]);

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// The cards left in the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let mut h = [Card::default(); 7];
        for_each_ksubset(self.cards.len(), k, |idx| {
            for (pos, &i) in idx.iter().enumerate() {
                h[pos] = self.cards[i];
            }

            f(&h[..k]);
        });
    }

    /// Calls the `f` closure for `samples` random k-cards hands.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn sample<R, F>(&self, rng: &mut R, samples: usize, k: usize, mut f: F)
    where
        R: Rng,
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut h = [Card::default(); 7];
        for _ in 0..samples {
            for (pos, c) in self.cards.choose_multiple(rng, k).enumerate() {
                h[pos] = *c;
            }

            f(&h[..k]);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        for card in Deck::default() {
            assert_eq!(card.prime(), PRIMES[card.rank() as usize]);
            assert_eq!(card.rank_bits() as u32, card.rank() as u32);
            assert_eq!(card.suit_bits() as u32, card.suit() as u32);
            assert_eq!(card.rank_mask(), 1 << (card.rank() as usize));
            assert_eq!(card.code() >> 29, 0);
            cards.insert(card.code());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);

        // From the Cactus Kev's website.
        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.code(), 0x08004b25);

        let fs = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(fs.code(), 0x00081307);

        let jc = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(jc.code(), 0x0200891d);
    }

    #[test]
    fn card_decoding() {
        for card in Deck::default() {
            let decoded = Card::new(card.rank(), card.suit());
            assert_eq!(decoded, card);
            assert_eq!(Card::try_from(card.code()), Ok(card));
        }

        // Rank bit does not match the rank ordinal.
        assert!(Card::try_from(0x08004b25u32 ^ (1 << 16)).is_err());
        // Two suit bits.
        assert!(Card::try_from(0x0800cb25u32).is_err());
        assert!(Card::try_from(0u32).is_err());
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");
    }

    #[test]
    fn card_from_string() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }

        assert_eq!("jc".parse(), Ok(Card::new(Rank::Jack, Suit::Clubs)));
        assert!("1C".parse::<Card>().is_err());
        assert!("AX".parse::<Card>().is_err());
        assert!("ASS".parse::<Card>().is_err());
        assert!("A".parse::<Card>().is_err());
    }

    #[test]
    fn ksubsets() {
        let mut subsets = Vec::new();
        for_each_ksubset(4, 2, |s| subsets.push(s.to_vec()));
        assert_eq!(
            subsets,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![1, 2],
                vec![0, 3],
                vec![1, 3],
                vec![2, 3]
            ]
        );

        let mut count = 0;
        for_each_ksubset(5, 5, |s| {
            assert_eq!(s, &[0, 1, 2, 3, 4]);
            count += 1;
        });
        assert_eq!(count, 1);

        count = 0;
        for_each_ksubset(3, 4, |_| count += 1);
        assert_eq!(count, 0);

        count = 0;
        for_each_ksubset(3, 0, |s| {
            assert!(s.is_empty());
            count += 1;
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.cards().len(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.cards().len(), Deck::SIZE - 2);
        assert!(!deck.cards().contains(&Card::new(Rank::Ace, Suit::Diamonds)));

        let mut count = 0;
        deck.for_each(4, |cards| {
            assert_eq!(cards.len(), 4);
            count += 1;
        });
        assert_eq!(count, 230_300);
    }

    #[test]
    fn deck_sample() {
        let deck = Deck::default();
        let mut rng = rand::rng();
        let mut count = 0;
        deck.sample(&mut rng, 10, 7, |hand| {
            let unique = hand.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), 7);
            count += 1;
        });
        assert_eq!(count, 10);
    }
}
