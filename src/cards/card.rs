//! The concrete card kinds and the `Card` tagged union.
//!
//! Each kind owns its `CardData` plus whatever per-kind state it has:
//!
//! - `Hero`: health only; a pure damage target
//! - `Minion`: health and an attack stat
//! - `Spell`: an attack stat only, no health
//! - `Weapon`: durability and an attack stat
//!
//! Health and durability may go to zero or below; nothing here floors them
//! or removes the card. `is_defeated` / `is_spent` report the derived
//! condition for callers that care.
//!
//! `Card` wraps the four kinds so a caller can hold "some card" and let
//! attack resolution decide at runtime which capabilities the value
//! declares. The capability accessors (`as_damageable_mut`,
//! `attack_value`) are the single source of truth for that decision.

use serde::{Deserialize, Serialize};

use super::data::CardData;
use crate::combat::capability::Damageable;
use crate::core::entity::EntityId;

/// The four card kinds.
///
/// Carried in errors and display output so a failed attack can say what
/// kind of card was involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Hero,
    Minion,
    Spell,
    Weapon,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardKind::Hero => "Hero",
            CardKind::Minion => "Minion",
            CardKind::Spell => "Spell",
            CardKind::Weapon => "Weapon",
        };
        f.write_str(name)
    }
}

/// A hero: a damage target with no attack of its own.
///
/// Attacking a hero never provokes retaliation. Health has no floor; a
/// defeated hero (health <= 0) stays in place until the caller acts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub(crate) data: CardData,
    pub(crate) health: i64,
}

impl Hero {
    /// Create a hero with its starting health.
    #[must_use]
    pub fn new(data: CardData, health: i64) -> Self {
        Self { data, health }
    }

    /// Shared card attributes.
    #[must_use]
    pub const fn data(&self) -> &CardData {
        &self.data
    }

    /// Derived condition: health at or below zero.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}

/// A minion: a damage target that fights back.
///
/// When a minion attacks a target that itself declares an attack stat,
/// the minion takes that stat back as retaliation damage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minion {
    pub(crate) data: CardData,
    pub(crate) health: i64,
    pub(crate) attack: u32,
}

impl Minion {
    /// Create a minion with its starting health and fixed attack stat.
    #[must_use]
    pub fn new(data: CardData, health: i64, attack: u32) -> Self {
        Self {
            data,
            health,
            attack,
        }
    }

    /// Shared card attributes.
    #[must_use]
    pub const fn data(&self) -> &CardData {
        &self.data
    }

    /// Derived condition: health at or below zero.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}

/// A spell: a one-directional damage source.
///
/// Spells have no health, so they can never be attacked and never take
/// retaliation. Nothing consumes a spell after it resolves; reuse is the
/// caller's policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub(crate) data: CardData,
    pub(crate) attack: u32,
}

impl Spell {
    /// Create a spell with its fixed damage amount.
    #[must_use]
    pub fn new(data: CardData, attack: u32) -> Self {
        Self { data, attack }
    }

    /// Shared card attributes.
    #[must_use]
    pub const fn data(&self) -> &CardData {
        &self.data
    }
}

/// A weapon: a damage source that wears out.
///
/// Every swing costs exactly 1 durability, whatever the target is. The
/// target never damages the weapon directly. Durability has no floor; a
/// spent weapon (durability <= 0) keeps working until the caller removes
/// it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub(crate) data: CardData,
    pub(crate) durability: i64,
    pub(crate) attack: u32,
}

impl Weapon {
    /// Create a weapon with its starting durability and fixed attack stat.
    #[must_use]
    pub fn new(data: CardData, durability: i64, attack: u32) -> Self {
        Self {
            data,
            durability,
            attack,
        }
    }

    /// Shared card attributes.
    #[must_use]
    pub const fn data(&self) -> &CardData {
        &self.data
    }

    /// Derived condition: durability at or below zero.
    #[must_use]
    pub const fn is_spent(&self) -> bool {
        self.durability <= 0
    }
}

/// Any card, with its kind carried in the tag.
///
/// ## Example
///
/// ```
/// use card_duel::{Card, CardData, CardKind, Minion};
/// use card_duel::core::EntityId;
///
/// let wisp = Card::from(Minion::new(CardData::new(EntityId(0), 0, "Wisp"), 1, 1));
///
/// assert_eq!(wisp.kind(), CardKind::Minion);
/// assert_eq!(wisp.attack_value(), Some(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Card {
    Hero(Hero),
    Minion(Minion),
    Spell(Spell),
    Weapon(Weapon),
}

impl Card {
    /// Which kind of card this is.
    #[must_use]
    pub const fn kind(&self) -> CardKind {
        match self {
            Card::Hero(_) => CardKind::Hero,
            Card::Minion(_) => CardKind::Minion,
            Card::Spell(_) => CardKind::Spell,
            Card::Weapon(_) => CardKind::Weapon,
        }
    }

    /// Shared card attributes.
    #[must_use]
    pub const fn data(&self) -> &CardData {
        match self {
            Card::Hero(hero) => hero.data(),
            Card::Minion(minion) => minion.data(),
            Card::Spell(spell) => spell.data(),
            Card::Weapon(weapon) => weapon.data(),
        }
    }

    /// The entity id assigned at construction.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.data().id()
    }

    /// The card's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.data().name()
    }

    /// The damage-target capability, if this kind declares it.
    ///
    /// Heroes and minions can receive damage; spells and weapons cannot.
    #[must_use]
    pub fn as_damageable(&self) -> Option<&dyn Damageable> {
        match self {
            Card::Hero(hero) => Some(hero),
            Card::Minion(minion) => Some(minion),
            Card::Spell(_) | Card::Weapon(_) => None,
        }
    }

    /// Mutable damage-target capability, if this kind declares it.
    #[must_use]
    pub fn as_damageable_mut(&mut self) -> Option<&mut dyn Damageable> {
        match self {
            Card::Hero(hero) => Some(hero),
            Card::Minion(minion) => Some(minion),
            Card::Spell(_) | Card::Weapon(_) => None,
        }
    }

    /// The attack stat, if this kind declares the attacker capability.
    ///
    /// Minions, spells, and weapons attack; heroes do not. This is also
    /// the retaliation amount a minion takes when it attacks this card.
    #[must_use]
    pub const fn attack_value(&self) -> Option<u32> {
        match self {
            Card::Hero(_) => None,
            Card::Minion(minion) => Some(minion.attack),
            Card::Spell(spell) => Some(spell.attack),
            Card::Weapon(weapon) => Some(weapon.attack),
        }
    }
}

impl From<Hero> for Card {
    fn from(hero: Hero) -> Self {
        Card::Hero(hero)
    }
}

impl From<Minion> for Card {
    fn from(minion: Minion) -> Self {
        Card::Minion(minion)
    }
}

impl From<Spell> for Card {
    fn from(spell: Spell) -> Self {
        Card::Spell(spell)
    }
}

impl From<Weapon> for Card {
    fn from(weapon: Weapon) -> Self {
        Card::Weapon(weapon)
    }
}

impl CardData {
    fn fmt_header(&self, f: &mut std::fmt::Formatter<'_>, kind: CardKind) -> std::fmt::Result {
        write!(f, "{kind}#{} \"{}\"", self.id().raw(), self.name())?;
        if self.is_legendary() {
            write!(f, " [legendary]")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Hero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.data.fmt_header(f, CardKind::Hero)?;
        write!(f, " (health {})", self.health)
    }
}

impl std::fmt::Display for Minion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.data.fmt_header(f, CardKind::Minion)?;
        write!(f, " (health {}, attack {})", self.health, self.attack)
    }
}

impl std::fmt::Display for Spell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.data.fmt_header(f, CardKind::Spell)?;
        write!(f, " (attack {})", self.attack)
    }
}

impl std::fmt::Display for Weapon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.data.fmt_header(f, CardKind::Weapon)?;
        write!(f, " (durability {}, attack {})", self.durability, self.attack)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Hero(hero) => hero.fmt(f),
            Card::Minion(minion) => minion.fmt(f),
            Card::Spell(spell) => spell.fmt(f),
            Card::Weapon(weapon) => weapon.fmt(f),
        }
    }
}
