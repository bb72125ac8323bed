//! Capability traits.
//!
//! A card's capabilities are declared by the traits its kind implements,
//! never discovered by probing a value at runtime:
//!
//! | kind   | Damageable | Attacker | Durable |
//! |--------|------------|----------|---------|
//! | Hero   | yes        | no       | no      |
//! | Minion | yes        | yes      | no      |
//! | Spell  | no         | yes      | no      |
//! | Weapon | no         | yes      | yes     |
//!
//! The reduction operations are plain subtraction with no floor and no
//! error path. Amounts are `i64` and accepted unconditionally; a negative
//! amount raises the stat. Only these operations may mutate another
//! card's state during resolution.

use crate::cards::card::{Hero, Minion, Spell, Weapon};

/// Can receive damage.
pub trait Damageable {
    /// Current health. May be zero or negative.
    fn health(&self) -> i64;

    /// Subtract `amount` from health. No clamping.
    fn reduce_health(&mut self, amount: i64);
}

/// Declares an attack stat.
///
/// The stat is fixed at construction. A target implementing this trait is
/// what makes a minion's attack a trade rather than a one-sided hit.
pub trait Attacker {
    /// Damage dealt to the target of an attack.
    fn attack_value(&self) -> u32;
}

/// Wears out with use.
pub trait Durable {
    /// Current durability. May be zero or negative.
    fn durability(&self) -> i64;

    /// Subtract `amount` from durability. No clamping.
    fn reduce_durability(&mut self, amount: i64);
}

impl Damageable for Hero {
    fn health(&self) -> i64 {
        self.health
    }

    fn reduce_health(&mut self, amount: i64) {
        self.health -= amount;
    }
}

impl Damageable for Minion {
    fn health(&self) -> i64 {
        self.health
    }

    fn reduce_health(&mut self, amount: i64) {
        self.health -= amount;
    }
}

impl Attacker for Minion {
    fn attack_value(&self) -> u32 {
        self.attack
    }
}

impl Attacker for Spell {
    fn attack_value(&self) -> u32 {
        self.attack
    }
}

impl Attacker for Weapon {
    fn attack_value(&self) -> u32 {
        self.attack
    }
}

impl Durable for Weapon {
    fn durability(&self) -> i64 {
        self.durability
    }

    fn reduce_durability(&mut self, amount: i64) {
        self.durability -= amount;
    }
}
