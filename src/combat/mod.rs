//! Combat: capability traits and attack resolution.
//!
//! ## Key Types
//!
//! - `Damageable`: can receive damage (Hero, Minion)
//! - `Attacker`: declares an attack stat (Minion, Spell, Weapon)
//! - `Durable`: wears out with use (Weapon)
//! - `CapabilityError`: an attack paired cards whose capability sets
//!   don't allow it
//!
//! The attack *operations* are inherent methods on the concrete card
//! types (and variant dispatch on `Card`), because their side effects
//! diverge: minions trade damage, spells hit one way, weapons wear.

pub mod capability;
pub mod resolve;

pub use capability::{Attacker, Damageable, Durable};
pub use resolve::CapabilityError;
