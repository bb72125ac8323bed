//! Attack resolution.
//!
//! The one fallible operation in the crate. An attack pairs an attacking
//! card with a target `Card`; the target must declare `Damageable` or the
//! attack fails with `CapabilityError` before anything mutates.
//!
//! Each attacking kind has its own side effects:
//!
//! - `Minion::attack` — damage the target, then take the target's attack
//!   stat back as retaliation if the target declares one. Retaliation
//!   uses the stat as read *before* the damage landed.
//! - `Spell::attack` — damage the target. Nothing comes back.
//! - `Weapon::attack` — damage the target, then lose exactly 1
//!   durability. The target never damages the weapon.
//!
//! Both participants may end at or below zero health/durability; neither
//! is removed or floored here.

use thiserror::Error;

use super::capability::{Attacker, Damageable, Durable};
use crate::cards::card::{Card, CardKind, Minion, Spell, Weapon};

/// An attack paired cards whose capability sets don't allow it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// The target declares no `Damageable` capability.
    #[error("cannot attack {target}: it cannot receive damage")]
    NotDamageable { target: CardKind },

    /// The attacker declares no attack stat (only reachable through
    /// `Card::attack` with a hero in the attacker position).
    #[error("{attacker} cannot attack")]
    NotAnAttacker { attacker: CardKind },
}

impl Minion {
    /// Attack `target`, trading damage if it can fight back.
    ///
    /// The target's health drops by this minion's attack stat. If the
    /// target declares an attack stat of its own, this minion's health
    /// then drops by that stat. Either side may end at or below zero.
    ///
    /// # Errors
    ///
    /// `CapabilityError::NotDamageable` if the target cannot receive
    /// damage. Neither card is touched in that case.
    pub fn attack(&mut self, target: &mut Card) -> Result<(), CapabilityError> {
        // Retaliation amount is the stat before any damage lands.
        let retaliation = target.attack_value();
        let target_kind = target.kind();
        let defender = target
            .as_damageable_mut()
            .ok_or(CapabilityError::NotDamageable {
                target: target_kind,
            })?;

        defender.reduce_health(i64::from(self.attack_value()));
        if let Some(amount) = retaliation {
            self.reduce_health(i64::from(amount));
        }
        Ok(())
    }
}

impl Spell {
    /// Attack `target`. One-directional: spells never take retaliation.
    ///
    /// # Errors
    ///
    /// `CapabilityError::NotDamageable` if the target cannot receive
    /// damage. The target is not touched in that case.
    pub fn attack(&self, target: &mut Card) -> Result<(), CapabilityError> {
        let target_kind = target.kind();
        let defender = target
            .as_damageable_mut()
            .ok_or(CapabilityError::NotDamageable {
                target: target_kind,
            })?;

        defender.reduce_health(i64::from(self.attack_value()));
        Ok(())
    }
}

impl Weapon {
    /// Attack `target`, then wear this weapon down by exactly 1.
    ///
    /// Durability is spent whatever the target is; the target never
    /// damages the weapon back. Durability has no floor.
    ///
    /// # Errors
    ///
    /// `CapabilityError::NotDamageable` if the target cannot receive
    /// damage. Neither card is touched in that case, durability included.
    pub fn attack(&mut self, target: &mut Card) -> Result<(), CapabilityError> {
        let target_kind = target.kind();
        let defender = target
            .as_damageable_mut()
            .ok_or(CapabilityError::NotDamageable {
                target: target_kind,
            })?;

        defender.reduce_health(i64::from(self.attack_value()));
        self.reduce_durability(1);
        Ok(())
    }
}

impl Card {
    /// Attack `target`, dispatching on this card's kind.
    ///
    /// # Errors
    ///
    /// `CapabilityError::NotAnAttacker` if this card is a hero;
    /// `CapabilityError::NotDamageable` if the target cannot receive
    /// damage. No state changes on either error.
    pub fn attack(&mut self, target: &mut Card) -> Result<(), CapabilityError> {
        match self {
            Card::Hero(_) => Err(CapabilityError::NotAnAttacker {
                attacker: CardKind::Hero,
            }),
            Card::Minion(minion) => minion.attack(target),
            Card::Spell(spell) => spell.attack(target),
            Card::Weapon(weapon) => weapon.attack(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Hero;
    use crate::cards::data::CardData;
    use crate::core::entity::EntityId;

    fn data(id: u32, name: &str) -> CardData {
        CardData::new(EntityId(id), 1, name)
    }

    #[test]
    fn test_minion_vs_minion_trades_damage() {
        let mut attacker = Minion::new(data(0, "Wisp"), 3, 2);
        let mut target = Card::from(Minion::new(data(1, "Ogre"), 6, 4));

        attacker.attack(&mut target).unwrap();

        assert_eq!(attacker.health(), -1);
        match target {
            Card::Minion(ref ogre) => assert_eq!(ogre.health(), 4),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_minion_vs_hero_no_retaliation() {
        let mut attacker = Minion::new(data(0, "Wisp"), 3, 2);
        let mut target = Card::from(Hero::new(data(1, "Jaina"), 30));

        attacker.attack(&mut target).unwrap();

        assert_eq!(attacker.health(), 3);
        assert_eq!(target.as_damageable().unwrap().health(), 28);
    }

    #[test]
    fn test_minion_vs_spell_is_rejected_untouched() {
        let mut attacker = Minion::new(data(0, "Wisp"), 3, 2);
        let mut target = Card::from(Spell::new(data(1, "Fireball"), 6));
        let before = target.clone();

        let err = attacker.attack(&mut target).unwrap_err();

        assert_eq!(
            err,
            CapabilityError::NotDamageable {
                target: CardKind::Spell
            }
        );
        assert_eq!(attacker.health(), 3);
        assert_eq!(target, before);
    }

    #[test]
    fn test_spell_never_retaliated() {
        let spell = Spell::new(data(0, "Fireball"), 6);
        let mut target = Card::from(Minion::new(data(1, "Ogre"), 6, 4));

        spell.attack(&mut target).unwrap();

        // Target minion declares Attacker, but the spell has no health to
        // lose and takes nothing back.
        assert_eq!(target.as_damageable().unwrap().health(), 0);
        assert_eq!(spell.attack_value(), 6);
    }

    #[test]
    fn test_weapon_wears_one_per_swing() {
        let mut weapon = Weapon::new(data(0, "Sword"), 2, 3);
        let mut hero = Card::from(Hero::new(data(1, "Jaina"), 30));
        let mut minion = Card::from(Minion::new(data(2, "Ogre"), 6, 4));

        weapon.attack(&mut hero).unwrap();
        assert_eq!(weapon.durability(), 1);

        // Same wear against a retaliation-capable target; the weapon
        // itself is never damaged.
        weapon.attack(&mut minion).unwrap();
        assert_eq!(weapon.durability(), 0);
        assert_eq!(minion.as_damageable().unwrap().health(), 3);
    }

    #[test]
    fn test_weapon_rejected_keeps_durability() {
        let mut weapon = Weapon::new(data(0, "Sword"), 2, 3);
        let mut target = Card::from(Weapon::new(data(1, "Axe"), 1, 5));

        let err = weapon.attack(&mut target).unwrap_err();

        assert_eq!(
            err,
            CapabilityError::NotDamageable {
                target: CardKind::Weapon
            }
        );
        assert_eq!(weapon.durability(), 2);
    }

    #[test]
    fn test_card_dispatch_matches_inherent_methods() {
        let mut attacker = Card::from(Minion::new(data(0, "Wisp"), 3, 2));
        let mut target = Card::from(Minion::new(data(1, "Ogre"), 6, 4));

        attacker.attack(&mut target).unwrap();

        assert_eq!(attacker.as_damageable().unwrap().health(), -1);
        assert_eq!(target.as_damageable().unwrap().health(), 4);
    }

    #[test]
    fn test_hero_cannot_attack() {
        let mut attacker = Card::from(Hero::new(data(0, "Jaina"), 30));
        let mut target = Card::from(Minion::new(data(1, "Ogre"), 6, 4));
        let before_attacker = attacker.clone();
        let before_target = target.clone();

        let err = attacker.attack(&mut target).unwrap_err();

        assert_eq!(
            err,
            CapabilityError::NotAnAttacker {
                attacker: CardKind::Hero
            }
        );
        assert_eq!(attacker, before_attacker);
        assert_eq!(target, before_target);
    }

    #[test]
    fn test_error_messages() {
        let err = CapabilityError::NotDamageable {
            target: CardKind::Spell,
        };
        assert_eq!(format!("{err}"), "cannot attack Spell: it cannot receive damage");

        let err = CapabilityError::NotAnAttacker {
            attacker: CardKind::Hero,
        };
        assert_eq!(format!("{err}"), "Hero cannot attack");
    }
}
