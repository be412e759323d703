//! `AnyCard`: one value that holds any concrete card.
//!
//! Decks, hands and factories deal in `AnyCard` so they can mix card types
//! without boxing. `AnyCard` implements `Card` by delegating to the held card,
//! capability queries included.

use serde::{Deserialize, Serialize};

use super::artifact::ArtifactCard;
use super::capabilities::{Card, Combatable, Magical, Rankable};
use super::creature::CreatureCard;
use super::definition::{CardBase, CardInfo, CardKind};
use super::elite::EliteCard;
use super::results::PlayResult;
use super::spell::SpellCard;
use super::tournament::TournamentCard;
use crate::core::GameState;

/// Any concrete card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnyCard {
    Creature(CreatureCard),
    Spell(SpellCard),
    Artifact(ArtifactCard),
    Elite(EliteCard),
    Tournament(TournamentCard),
}

macro_rules! delegate {
    ($self:expr, $card:ident => $body:expr) => {
        match $self {
            AnyCard::Creature($card) => $body,
            AnyCard::Spell($card) => $body,
            AnyCard::Artifact($card) => $body,
            AnyCard::Elite($card) => $body,
            AnyCard::Tournament($card) => $body,
        }
    };
}

impl AnyCard {
    #[must_use]
    pub fn as_creature(&self) -> Option<&CreatureCard> {
        match self {
            AnyCard::Creature(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_creature_mut(&mut self) -> Option<&mut CreatureCard> {
        match self {
            AnyCard::Creature(c) => Some(c),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_spell(&self) -> Option<&SpellCard> {
        match self {
            AnyCard::Spell(c) => Some(c),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_artifact(&self) -> Option<&ArtifactCard> {
        match self {
            AnyCard::Artifact(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_artifact_mut(&mut self) -> Option<&mut ArtifactCard> {
        match self {
            AnyCard::Artifact(c) => Some(c),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_elite(&self) -> Option<&EliteCard> {
        match self {
            AnyCard::Elite(c) => Some(c),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_tournament(&self) -> Option<&TournamentCard> {
        match self {
            AnyCard::Tournament(c) => Some(c),
            _ => None,
        }
    }
}

impl Card for AnyCard {
    fn base(&self) -> &CardBase {
        delegate!(self, c => c.base())
    }

    fn kind(&self) -> CardKind {
        delegate!(self, c => c.kind())
    }

    fn play(&self, state: &GameState) -> PlayResult {
        delegate!(self, c => c.play(state))
    }

    fn card_info(&self) -> CardInfo {
        delegate!(self, c => c.card_info())
    }

    fn as_combatable(&self) -> Option<&dyn Combatable> {
        delegate!(self, c => c.as_combatable())
    }

    fn as_magical(&self) -> Option<&dyn Magical> {
        delegate!(self, c => c.as_magical())
    }

    fn as_magical_mut(&mut self) -> Option<&mut dyn Magical> {
        delegate!(self, c => c.as_magical_mut())
    }

    fn as_rankable(&self) -> Option<&dyn Rankable> {
        delegate!(self, c => c.as_rankable())
    }

    fn as_rankable_mut(&mut self) -> Option<&mut dyn Rankable> {
        delegate!(self, c => c.as_rankable_mut())
    }
}

impl From<CreatureCard> for AnyCard {
    fn from(card: CreatureCard) -> Self {
        AnyCard::Creature(card)
    }
}

impl From<SpellCard> for AnyCard {
    fn from(card: SpellCard) -> Self {
        AnyCard::Spell(card)
    }
}

impl From<ArtifactCard> for AnyCard {
    fn from(card: ArtifactCard) -> Self {
        AnyCard::Artifact(card)
    }
}

impl From<EliteCard> for AnyCard {
    fn from(card: EliteCard) -> Self {
        AnyCard::Elite(card)
    }
}

impl From<TournamentCard> for AnyCard {
    fn from(card: TournamentCard) -> Self {
        AnyCard::Tournament(card)
    }
}
