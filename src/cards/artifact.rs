//! Artifact cards.

use serde::{Deserialize, Serialize};

use super::capabilities::Card;
use super::definition::{CardBase, CardInfo, CardKind, Rarity};
use super::results::{AbilityActivation, ArtifactStatus, PlayResult};
use crate::core::GameState;

/// A permanent with a limited number of activations.
///
/// Durability never drops below 0. Once it reaches 0 every activation reports
/// `ArtifactStatus::Broken`.
///
/// ```
/// use datadeck::cards::{ArtifactCard, ArtifactStatus, Rarity};
///
/// let mut crystal = ArtifactCard::new("Mana Crystal", 2, Rarity::Rare, 1, "mana");
/// assert_eq!(crystal.activate_ability().status, ArtifactStatus::Active);
/// assert_eq!(crystal.activate_ability().status, ArtifactStatus::Broken);
/// assert_eq!(crystal.durability(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ArtifactFields")]
pub struct ArtifactCard {
    base: CardBase,
    durability: i64,
    effect: String,
}

/// Unchecked wire form of [`ArtifactCard`]; rebuilt through `new`.
#[derive(Deserialize)]
struct ArtifactFields {
    base: CardBase,
    durability: i64,
    effect: String,
}

impl From<ArtifactFields> for ArtifactCard {
    fn from(fields: ArtifactFields) -> Self {
        let CardBase { name, cost, rarity } = fields.base;
        ArtifactCard::new(name, cost, rarity, fields.durability, fields.effect)
    }
}

impl ArtifactCard {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        cost: i64,
        rarity: Rarity,
        durability: i64,
        effect: impl Into<String>,
    ) -> Self {
        let base = CardBase::new(name, cost, rarity);
        let durability = if durability < 0 {
            log::warn!(
                "Invalid ArtifactCard durability {durability} for '{}' (< 0), clamped to 0",
                base.name
            );
            0
        } else {
            durability
        };
        Self {
            base,
            durability,
            effect: effect.into(),
        }
    }

    #[must_use]
    pub fn durability(&self) -> i64 {
        self.durability
    }

    #[must_use]
    pub fn effect(&self) -> &str {
        &self.effect
    }

    #[must_use]
    pub fn is_broken(&self) -> bool {
        self.durability == 0
    }

    /// Use the artifact once, consuming one durability point if any remain.
    pub fn activate_ability(&mut self) -> AbilityActivation {
        let status = if self.durability > 0 {
            self.durability -= 1;
            ArtifactStatus::Active
        } else {
            ArtifactStatus::Broken
        };

        AbilityActivation {
            card: self.base.name.clone(),
            effect: self.effect.clone(),
            durability: self.durability,
            status,
        }
    }
}

impl Card for ArtifactCard {
    fn base(&self) -> &CardBase {
        &self.base
    }

    fn kind(&self) -> CardKind {
        CardKind::Artifact
    }

    fn play(&self, state: &GameState) -> PlayResult {
        self.base
            .try_play(state, || format!("Permanent: +1 {} per turn", self.effect))
    }

    fn card_info(&self) -> CardInfo {
        self.base
            .info(self.kind())
            .with_attr("durability", self.durability)
            .with_attr("effect", self.effect.as_str())
    }
}
