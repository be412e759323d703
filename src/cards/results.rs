//! Result records returned by card operations.
//!
//! Every record is a named-field struct; consumers read fields by name.
//! Attempts that fail for game reasons (not enough mana, a target that
//! cannot be attacked) carry `success: false` instead of an error.

use serde::{Deserialize, Serialize};

/// Outcome of `Card::play`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayResult {
    pub success: bool,
    pub card_played: String,
    pub mana_used: i64,
    /// What the card did. `None` when it was not played.
    pub effect: Option<String>,
}

impl PlayResult {
    /// A successful play.
    #[must_use]
    pub fn played(card: &str, mana_used: i64, effect: impl Into<String>) -> Self {
        Self {
            success: true,
            card_played: card.to_string(),
            mana_used,
            effect: Some(effect.into()),
        }
    }

    /// A play rejected for lack of mana.
    #[must_use]
    pub fn not_played(card: &str) -> Self {
        Self {
            success: false,
            card_played: card.to_string(),
            mana_used: 0,
            effect: None,
        }
    }
}

/// Outcome of a creature attacking another creature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatResult {
    pub success: bool,
    pub attacker: String,
    pub target: String,
    pub damage_dealt: i64,
    /// `true` once the target's health is at or below 0.
    pub combat_resolved: bool,
}

/// Outcome of `Combatable::attack`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResult {
    pub attacker: String,
    pub target: String,
    pub damage_dealt: i64,
    pub combat_type: String,
}

/// Outcome of `Combatable::defend`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenseResult {
    pub defender: String,
    pub damage_taken: i64,
    pub damage_blocked: i64,
}

/// Attack and defense values of a combat-capable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub attack: i64,
    pub defense: i64,
}

/// Outcome of `Magical::cast_spell`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCast {
    pub caster: String,
    pub spell: String,
    pub targets: Vec<String>,
    pub mana_used: i64,
}

/// Outcome of `Magical::channel_mana`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaChannel {
    pub channeled: i64,
    pub total_mana: i64,
}

/// Mana pool of a magic-capable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicStats {
    pub mana: i64,
}

/// Rating and record of a rankable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankInfo {
    pub rating: i64,
    pub wins: u32,
    pub losses: u32,
}

/// Outcome of `SpellCard::resolve_effect`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectResolution {
    pub spell: String,
    pub affected_targets: Vec<String>,
    pub status: String,
}

/// Artifact state after an activation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactStatus {
    /// The activation consumed one durability point.
    Active,
    /// Durability was already 0; nothing happened.
    Broken,
}

/// Outcome of `ArtifactCard::activate_ability`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityActivation {
    pub card: String,
    pub effect: String,
    pub durability: i64,
    pub status: ArtifactStatus,
}
