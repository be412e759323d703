//! Card system: shared fields, concrete card types and capability traits.
//!
//! ## Key Types
//!
//! - `Card`: Contract every card meets (play, info, mana check)
//! - `Combatable`, `Magical`, `Rankable`: Optional capabilities
//! - `CreatureCard`, `SpellCard`, `ArtifactCard`: Basic card types
//! - `EliteCard`: Combatable + Magical
//! - `TournamentCard`: Combatable + Rankable
//! - `AnyCard`: Closed sum over the concrete types
//! - `CardInfo`: Owned snapshot of a card
//!
//! ## Correctable construction values
//!
//! Constructors never fail. Out-of-range values (non-positive creature
//! stats, negative durability or cost) are clamped and a warning is logged.

pub mod artifact;
pub mod attributes;
pub mod capabilities;
pub mod creature;
pub mod definition;
pub mod elite;
pub mod instance;
pub mod results;
pub mod spell;
pub mod tournament;

pub use artifact::ArtifactCard;
pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use capabilities::{damage_after_defense, damage_against, Card, Combatable, Magical, Rankable};
pub use creature::CreatureCard;
pub use definition::{CardBase, CardInfo, CardKind, Rarity};
pub use elite::EliteCard;
pub use instance::AnyCard;
pub use results::{
    AbilityActivation, ArtifactStatus, AttackResult, CombatResult, CombatStats, DefenseResult,
    EffectResolution, MagicStats, ManaChannel, PlayResult, RankInfo, SpellCast,
};
pub use spell::SpellCard;
pub use tournament::{TournamentCard, TournamentStats, DEFAULT_RATING};
