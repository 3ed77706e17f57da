//! Deck module - cards, their visibility, and the display order
//!
//! Cards are addressed by [`CardHandle`], which is simply the card's index in
//! construction order. The display order is a separate permutation of handles
//! so a reshuffle never changes which face a handle carries.

use std::collections::BTreeMap;

use memory_match_types::{CardFace, CardHandle, Visibility};

use crate::error::DeckError;
use crate::rng::SimpleRng;

/// A single card on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub handle: CardHandle,
    pub face: CardFace,
    pub visibility: Visibility,
}

/// Ordered collection of cards where every face appears exactly twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    order: Vec<CardHandle>,
}

impl Deck {
    /// Build a deck from faces listed in handle order.
    ///
    /// Rejects empty decks, odd card counts, and any face that does not appear
    /// exactly twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_match_core::{Deck, DeckError};
    /// use memory_match_core::types::CardFace;
    ///
    /// let a = CardFace::new(0);
    /// let b = CardFace::new(1);
    /// assert!(Deck::new(vec![a, b, a, b]).is_ok());
    /// assert_eq!(Deck::new(vec![a, b, a]), Err(DeckError::OddCount(3)));
    /// ```
    pub fn new(faces: Vec<CardFace>) -> Result<Self, DeckError> {
        if faces.is_empty() {
            return Err(DeckError::Empty);
        }
        if faces.len() % 2 != 0 {
            return Err(DeckError::OddCount(faces.len()));
        }
        if faces.len() > u16::MAX as usize {
            return Err(DeckError::TooLarge(faces.len()));
        }

        let mut counts: BTreeMap<CardFace, usize> = BTreeMap::new();
        for face in &faces {
            *counts.entry(*face).or_default() += 1;
        }
        if let Some((&face, &count)) = counts.iter().find(|(_, &count)| count != 2) {
            return Err(DeckError::FaceCount { face, count });
        }

        let cards: Vec<Card> = faces
            .into_iter()
            .enumerate()
            .map(|(i, face)| Card {
                handle: CardHandle::new(i as u16),
                face,
                visibility: Visibility::Hidden,
            })
            .collect();
        let order = cards.iter().map(|c| c.handle).collect();

        Ok(Self { cards, order })
    }

    /// Build a deck with `pairs` distinct faces, laid out `0,0,1,1,...`.
    ///
    /// Callers normally shuffle the display order afterwards.
    pub fn with_pairs(pairs: usize) -> Result<Self, DeckError> {
        let faces = (0..pairs)
            .flat_map(|i| {
                let face = CardFace::new(i as u16);
                [face, face]
            })
            .collect();
        Self::new(faces)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn pairs(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn get(&self, handle: CardHandle) -> Option<&Card> {
        self.cards.get(handle.index())
    }

    pub fn contains(&self, handle: CardHandle) -> bool {
        handle.index() < self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Handles in display order.
    pub fn order(&self) -> &[CardHandle] {
        &self.order
    }

    pub fn handles(&self) -> impl Iterator<Item = CardHandle> + '_ {
        self.cards.iter().map(|c| c.handle)
    }

    pub fn matched_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.visibility == Visibility::Matched)
            .count()
    }

    pub fn all_matched(&self) -> bool {
        self.matched_count() == self.cards.len()
    }

    /// Move a card to a new visibility state.
    ///
    /// Returns `false` (and leaves the card untouched) for unknown handles and
    /// for any attempt to leave the terminal `Matched` state.
    pub(crate) fn set_visibility(&mut self, handle: CardHandle, visibility: Visibility) -> bool {
        let Some(card) = self.cards.get_mut(handle.index()) else {
            return false;
        };
        if card.visibility.is_terminal() && visibility != Visibility::Matched {
            return false;
        }
        card.visibility = visibility;
        true
    }

    /// Turn every card face down, including matched ones. Only used on reset.
    pub(crate) fn hide_all(&mut self) {
        for card in &mut self.cards {
            card.visibility = Visibility::Hidden;
        }
    }

    /// Replace the display order with a fresh random permutation.
    pub(crate) fn shuffle(&mut self, rng: &mut SimpleRng) {
        self.order = rng.permutation(self.cards.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(id: u16) -> CardFace {
        CardFace::new(id)
    }

    #[test]
    fn test_new_deck_starts_hidden() {
        let deck = Deck::new(vec![face(0), face(1), face(0), face(1)]).unwrap();
        assert_eq!(deck.len(), 4);
        assert_eq!(deck.pairs(), 2);
        assert!(deck
            .cards()
            .iter()
            .all(|c| c.visibility == Visibility::Hidden));
        assert_eq!(deck.get(CardHandle::new(2)).unwrap().face, face(0));
    }

    #[test]
    fn test_rejects_empty_deck() {
        assert_eq!(Deck::new(Vec::new()), Err(DeckError::Empty));
    }

    #[test]
    fn test_rejects_odd_deck() {
        assert_eq!(
            Deck::new(vec![face(0), face(0), face(1)]),
            Err(DeckError::OddCount(3))
        );
    }

    #[test]
    fn test_rejects_face_appearing_four_times() {
        let err = Deck::new(vec![face(0), face(0), face(0), face(0)]).unwrap_err();
        assert_eq!(
            err,
            DeckError::FaceCount {
                face: face(0),
                count: 4
            }
        );
    }

    #[test]
    fn test_rejects_unpaired_faces() {
        let err = Deck::new(vec![face(0), face(1), face(2), face(2)]).unwrap_err();
        assert!(matches!(err, DeckError::FaceCount { count: 1, .. }));
    }

    #[test]
    fn test_with_pairs_layout() {
        let deck = Deck::with_pairs(3).unwrap();
        let faces: Vec<u16> = deck.cards().iter().map(|c| c.face.id()).collect();
        assert_eq!(faces, vec![0, 0, 1, 1, 2, 2]);
        assert_eq!(Deck::with_pairs(0), Err(DeckError::Empty));
    }

    #[test]
    fn test_matched_is_terminal() {
        let mut deck = Deck::with_pairs(1).unwrap();
        let h = CardHandle::new(0);
        assert!(deck.set_visibility(h, Visibility::Revealed));
        assert!(deck.set_visibility(h, Visibility::Matched));
        assert!(!deck.set_visibility(h, Visibility::Hidden));
        assert!(!deck.set_visibility(h, Visibility::Revealed));
        assert_eq!(deck.get(h).unwrap().visibility, Visibility::Matched);

        deck.hide_all();
        assert_eq!(deck.get(h).unwrap().visibility, Visibility::Hidden);
    }

    #[test]
    fn test_unknown_handle_is_rejected() {
        let mut deck = Deck::with_pairs(1).unwrap();
        assert!(!deck.contains(CardHandle::new(2)));
        assert!(!deck.set_visibility(CardHandle::new(2), Visibility::Revealed));
    }

    #[test]
    fn test_shuffle_keeps_faces_by_handle() {
        let mut deck = Deck::with_pairs(4).unwrap();
        let before: Vec<CardFace> = deck.cards().iter().map(|c| c.face).collect();
        deck.shuffle(&mut SimpleRng::new(42));
        let after: Vec<CardFace> = deck.cards().iter().map(|c| c.face).collect();
        assert_eq!(before, after);

        let mut order = deck.order().to_vec();
        order.sort();
        assert_eq!(order, deck.handles().collect::<Vec<_>>());
    }

    #[test]
    fn test_all_matched() {
        let mut deck = Deck::with_pairs(1).unwrap();
        assert!(!deck.all_matched());
        deck.set_visibility(CardHandle::new(0), Visibility::Matched);
        assert_eq!(deck.matched_count(), 1);
        deck.set_visibility(CardHandle::new(1), Visibility::Matched);
        assert!(deck.all_matched());
    }
}
