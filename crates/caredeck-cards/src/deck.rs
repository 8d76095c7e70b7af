//! Ordered container of independent swipeable cards.

use indexmap::IndexMap;

use crate::action::CardEvent;
use crate::card::SwipeableCard;
use crate::input::PointerEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardId(u64);

/// Insertion-ordered registry of cards for one screen.
///
/// Each card owns its own classifier and animation state, so gestures on
/// different cards are fully independent; the deck only routes events and
/// sweeps out dismissed cards. Hit-testing (which card a pointer landed
/// on) is the host's job.
pub struct Deck<P> {
    cards: IndexMap<CardId, SwipeableCard<P>>,
    next_id: u64,
}

impl<P> Default for Deck<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Deck<P> {
    pub fn new() -> Self {
        Self {
            cards: IndexMap::new(),
            next_id: 1,
        }
    }

    pub fn push(&mut self, card: SwipeableCard<P>) -> CardId {
        let id = CardId(self.next_id);
        self.next_id += 1;
        self.cards.insert(id, card);
        id
    }

    pub fn get(&self, id: CardId) -> Option<&SwipeableCard<P>> {
        self.cards.get(&id)
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut SwipeableCard<P>> {
        self.cards.get_mut(&id)
    }

    pub fn remove(&mut self, id: CardId) -> Option<SwipeableCard<P>> {
        self.cards.shift_remove(&id)
    }

    /// Route a pointer event to one card.
    pub fn on_pointer_event(&mut self, id: CardId, event: PointerEvent) -> Option<CardEvent> {
        self.cards.get_mut(&id)?.on_pointer_event(event)
    }

    /// Remove cards that triggered and finished their fly-off animation.
    /// Returns the removed ids in deck order.
    pub fn sweep_dismissed(&mut self) -> Vec<CardId> {
        let swept: Vec<CardId> = self
            .cards
            .iter()
            .filter(|(_, card)| card.is_dismissed() && card.is_settled())
            .map(|(id, _)| *id)
            .collect();
        for id in &swept {
            self.cards.shift_remove(id);
        }
        swept
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardId, &SwipeableCard<P>)> {
        self.cards.iter().map(|(id, card)| (*id, card))
    }
}
