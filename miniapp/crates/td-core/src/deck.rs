//! Discovery deck ordering.
//!
//! Cards are stacked with the top card last. Swiping never removes a card:
//! the top card is moved to the bottom, so the deck cycles until it is
//! replaced by a fresh search.

use crate::DiscoveryCard;

use std::collections::VecDeque;

use serde::Serialize;

/// Drag distance (in points) past which a card leaves the top of the deck
pub const DEFAULT_SENSITIVITY: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Like,
    Pass,
    Superlike,
}

impl SwipeAction {
    /// Horizontal drags read as like (right) or pass (left); vertical-only drags as superlike
    pub fn from_offset(dx: f64, dy: f64) -> Self {
        if dx.abs() >= dy.abs() {
            if dx >= 0.0 { Self::Like } else { Self::Pass }
        } else {
            Self::Superlike
        }
    }
}

/// A swipe that happened, for forwarding to the server or for undo
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwipeRecord {
    pub card_id: String,
    pub action: SwipeAction,
}

/// What a finished drag did to the deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// The top card went to the back
    Swiped(SwipeRecord),
    /// The drag was too short; the card springs back
    SnappedBack,
    /// Nothing to drag
    Empty,
}

#[derive(Debug, Clone)]
pub struct SwipeDeck {
    cards: VecDeque<DiscoveryCard>,
    sensitivity: f64,
    history: Vec<SwipeRecord>,
}

impl SwipeDeck {
    pub fn new(cards: Vec<DiscoveryCard>) -> Self {
        Self::with_sensitivity(cards, DEFAULT_SENSITIVITY)
    }

    /// A non-finite sensitivity falls back to [`DEFAULT_SENSITIVITY`]
    pub fn with_sensitivity(cards: Vec<DiscoveryCard>, sensitivity: f64) -> Self {
        let sensitivity = if sensitivity.is_finite() {
            sensitivity.abs()
        } else {
            log::warn!("Ignoring swipe sensitivity {sensitivity}, using {DEFAULT_SENSITIVITY}");
            DEFAULT_SENSITIVITY
        };
        Self {
            cards: cards.into(),
            sensitivity,
            history: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card currently shown on top
    pub fn top(&self) -> Option<&DiscoveryCard> {
        self.cards.back()
    }

    /// Cards from bottom to top
    pub fn cards(&self) -> impl Iterator<Item = &DiscoveryCard> {
        self.cards.iter()
    }

    pub fn history(&self) -> &[SwipeRecord] {
        &self.history
    }

    /// Move the top card to the bottom of the deck
    pub fn send_top_to_back(&mut self, action: SwipeAction) -> Option<SwipeRecord> {
        let card = self.cards.pop_back()?;
        let record = SwipeRecord {
            card_id: card.id.clone(),
            action,
        };
        self.cards.push_front(card);
        self.history.push(record.clone());
        log::debug!("Swiped card {} ({:?})", record.card_id, record.action);
        Some(record)
    }

    /// Move a specific card to the bottom (a tap on a card behind the top one)
    pub fn send_to_back(&mut self, card_id: &str) -> bool {
        let Some(index) = self.cards.iter().position(|card| card.id == card_id) else {
            return false;
        };
        if let Some(card) = self.cards.remove(index) {
            self.cards.push_front(card);
        }
        true
    }

    /// Finish a drag of the top card with the given offset
    pub fn drag_end(&mut self, dx: f64, dy: f64) -> DragOutcome {
        if self.cards.is_empty() {
            return DragOutcome::Empty;
        }
        if dx.abs() > self.sensitivity || dy.abs() > self.sensitivity {
            match self.send_top_to_back(SwipeAction::from_offset(dx, dy)) {
                Some(record) => DragOutcome::Swiped(record),
                None => DragOutcome::Empty,
            }
        } else {
            DragOutcome::SnappedBack
        }
    }

    /// Replace the deck after a fresh search; history is kept
    pub fn replace(&mut self, cards: Vec<DiscoveryCard>) {
        self.cards = cards.into();
    }
}
