//! Card types: shared data and the four concrete kinds.
//!
//! ## Key Types
//!
//! - `CardData`: the attributes every card shares (id, cost, name,
//!   legendary flag), immutable after construction
//! - `Hero`, `Minion`, `Spell`, `Weapon`: the concrete card kinds
//! - `Card`: tagged union over the concrete kinds, used wherever a caller
//!   holds "some card" and capability has to be decided at runtime
//! - `CardKind`: variant names, for errors and display

pub mod card;
pub mod data;

pub use card::{Card, CardKind, Hero, Minion, Spell, Weapon};
pub use data::CardData;
