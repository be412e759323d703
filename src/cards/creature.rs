//! Creature cards.

use serde::{Deserialize, Serialize};

use super::capabilities::Card;
use super::definition::{CardBase, CardInfo, CardKind, Rarity};
use super::instance::AnyCard;
use super::results::{CombatResult, PlayResult};
use crate::core::GameState;

/// A creature with attack and health.
///
/// Non-positive `attack` or `health` passed to the constructor is clamped to
/// 0 and logged; the card is still created.
///
/// ```
/// use datadeck::cards::{Card, CreatureCard, Rarity};
/// use datadeck::core::GameState;
///
/// let goblin = CreatureCard::new("Goblin Warrior", 2, Rarity::Common, 5, -1);
/// assert_eq!(goblin.health(), 0);
///
/// assert!(goblin.play(&GameState::with_mana(2)).success);
/// assert!(!goblin.play(&GameState::with_mana(1)).success);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CreatureFields")]
pub struct CreatureCard {
    base: CardBase,
    attack: i64,
    /// May go negative while combat is resolved.
    health: i64,
}

/// Unchecked wire form of [`CreatureCard`]; rebuilt through `new`.
#[derive(Deserialize)]
struct CreatureFields {
    base: CardBase,
    attack: i64,
    health: i64,
}

impl From<CreatureFields> for CreatureCard {
    fn from(fields: CreatureFields) -> Self {
        let CardBase { name, cost, rarity } = fields.base;
        CreatureCard::new(name, cost, rarity, fields.attack, fields.health)
    }
}

impl CreatureCard {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        cost: i64,
        rarity: Rarity,
        attack: i64,
        health: i64,
    ) -> Self {
        let base = CardBase::new(name, cost, rarity);
        let health = if health > 0 {
            health
        } else {
            log::warn!(
                "Invalid CreatureCard health {health} for '{}' (<= 0), clamped to 0",
                base.name
            );
            0
        };
        let attack = if attack > 0 {
            attack
        } else {
            log::warn!(
                "Invalid CreatureCard attack {attack} for '{}' (<= 0), clamped to 0",
                base.name
            );
            0
        };
        Self { base, attack, health }
    }

    #[must_use]
    pub fn attack(&self) -> i64 {
        self.attack
    }

    #[must_use]
    pub fn health(&self) -> i64 {
        self.health
    }

    /// `true` once health has dropped to 0 or below.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Subtract damage from health.
    pub fn take_damage(&mut self, damage: i64) {
        self.health -= damage;
    }

    /// Attack another creature, reducing its health by this creature's attack.
    ///
    /// Only creatures can be targeted; any other card yields an unsuccessful
    /// result and is left untouched.
    pub fn attack_target(&self, target: &mut AnyCard) -> CombatResult {
        let target_name = target.name().to_string();
        match target.as_creature_mut() {
            Some(defender) => {
                log::info!("{} attacks {}", self.base.name, target_name);
                defender.take_damage(self.attack);
                CombatResult {
                    success: true,
                    attacker: self.base.name.clone(),
                    target: target_name,
                    damage_dealt: self.attack,
                    combat_resolved: defender.is_defeated(),
                }
            }
            None => CombatResult {
                success: false,
                attacker: self.base.name.clone(),
                target: target_name,
                damage_dealt: 0,
                combat_resolved: false,
            },
        }
    }
}

impl Card for CreatureCard {
    fn base(&self) -> &CardBase {
        &self.base
    }

    fn kind(&self) -> CardKind {
        CardKind::Creature
    }

    fn play(&self, state: &GameState) -> PlayResult {
        self.base
            .try_play(state, || "Creature summoned to battlefield".to_string())
    }

    fn card_info(&self) -> CardInfo {
        self.base
            .info(self.kind())
            .with_attr("attack", self.attack)
            .with_attr("health", self.health)
    }
}
