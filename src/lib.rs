//! # card-duel
//!
//! A small model of collectible-card combat: heroes, minions, spells, and
//! weapons, and the rules by which one card inflicts damage on another.
//!
//! ## Design Principles
//!
//! 1. **Declared Capabilities**: What a card can do or suffer is stated by
//!    the traits it implements (`Damageable`, `Attacker`, `Durable`), never
//!    discovered by probing.
//!
//! 2. **Variant Dispatch**: `Card` is a tagged union over the concrete
//!    types. Attack resolution matches on the attacker's variant and the
//!    target's capability set; illegal pairings surface as
//!    `CapabilityError` before anything mutates.
//!
//! 3. **No Hidden Rules**: Health and durability are plain subtraction with
//!    no floor. "Defeated" and "spent" are derived conditions the caller
//!    checks; nothing is auto-removed at zero.
//!
//! ## Modules
//!
//! - `core`: Entity IDs and sequential allocation
//! - `cards`: Card data and the concrete card types
//! - `combat`: Capability traits and attack resolution

pub mod core;
pub mod cards;
pub mod combat;

// Re-export commonly used types
pub use crate::core::{EntityId, IdAllocator};

pub use crate::cards::{Card, CardData, CardKind, Hero, Minion, Spell, Weapon};

pub use crate::combat::{Attacker, CapabilityError, Damageable, Durable};
