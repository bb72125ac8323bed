//! Shared card attributes.
//!
//! `CardData` holds what every card has regardless of kind: an entity id,
//! a mana cost, a name, and whether it is legendary. All of it is fixed at
//! construction; the mutable per-kind state (health, durability) lives on
//! the concrete types.

use serde::{Deserialize, Serialize};

use crate::core::entity::EntityId;

/// The attributes common to every card.
///
/// ## Example
///
/// ```
/// use card_duel::cards::CardData;
/// use card_duel::core::EntityId;
///
/// let data = CardData::new(EntityId(0), 9, "Ysera").legendary();
///
/// assert_eq!(data.cost(), 9);
/// assert_eq!(data.name(), "Ysera");
/// assert!(data.is_legendary());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardData {
    id: EntityId,
    cost: u32,
    name: String,
    legendary: bool,
}

impl CardData {
    /// Create card data. Non-legendary by default.
    #[must_use]
    pub fn new(id: EntityId, cost: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            cost,
            name: name.into(),
            legendary: false,
        }
    }

    /// Mark the card legendary (builder pattern).
    #[must_use]
    pub fn legendary(mut self) -> Self {
        self.legendary = true;
        self
    }

    /// The entity id assigned at construction.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Mana crystals spent to put this card in play.
    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }

    /// The card's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this card is legendary.
    #[must_use]
    pub const fn is_legendary(&self) -> bool {
        self.legendary
    }
}
