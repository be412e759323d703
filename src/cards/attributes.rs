//! Type-specific card fields in snapshot form.
//!
//! `CardInfo` carries the fields every card has (name, cost, rarity) as
//! struct fields and everything type-specific as attributes, so one record
//! shape describes creatures, spells, artifacts and the rest.
//!
//! ## AttributeValue Types
//!
//! - `Int`: Numbers (attack, health, durability, rating)
//! - `Text`: Strings (effect type, artifact effect)

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Key for accessing card attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeKey(pub String);

impl AttributeKey {
    /// Create a new attribute key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AttributeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Value for a card attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Integer value (attack, health, rating).
    Int(i64),
    /// Text value (effect type).
    Text(String),
}

impl AttributeValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

/// Collection of attributes.
pub type Attributes = FxHashMap<AttributeKey, AttributeValue>;
