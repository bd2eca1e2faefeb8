//! Merge engine: predicts the composed class string from static shapes.
//!
//! The engine mirrors the runtime composer over [`ClassType`] instead of
//! [`ClassValue`]. Literal positions keep their exact spelling, widened
//! positions become template holes, and shapes that cannot be analysed
//! collapse the whole prediction to [`Prediction::Fallback`]. Union and
//! optional positions are split into one prediction per member.
//!
//! For every non-empty input whose positions are all literal, the
//! prediction is a [`Prediction::Literal`] equal to the runtime output.

mod merge;
mod template;

#[cfg(test)]
mod tests;

use crate::{truthy::FalsyKind, value::ClassValue};
use indexmap::IndexMap;
use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};

// re-exports
pub use merge::{predict, predict_with};
pub use template::{Placeholder, Prediction, Segment, Template};

///
/// Literal
///
/// A value known exactly at analysis time.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    BigInt(BigInt),
    Bool(bool),
    Null,
    Number(f64),
    Text(String),
    Undefined,
    Unit,
}

impl Literal {
    /// Same falsy table as `ClassValue::falsy_kind`.
    #[must_use]
    pub fn falsy_kind(&self) -> Option<FalsyKind> {
        match self {
            Self::Text(text) => FalsyKind::of_text(text),
            Self::Number(n) => FalsyKind::of_number(*n),
            Self::BigInt(n) => (n.sign() == Sign::NoSign).then_some(FalsyKind::BigZero),
            Self::Bool(b) => FalsyKind::of_bool(*b),
            Self::Null => Some(FalsyKind::Null),
            Self::Undefined => Some(FalsyKind::Undefined),
            Self::Unit => Some(FalsyKind::Unit),
        }
    }
}

///
/// Widened
///
/// A primitive category whose concrete value is unknown.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Widened {
    BigInt,
    Bool,
    Number,
    Text,
}

impl Widened {
    /// The template hole this category renders as; booleans never render.
    #[must_use]
    pub const fn placeholder(self) -> Option<Placeholder> {
        match self {
            Self::BigInt => Some(Placeholder::BigInt),
            Self::Number => Some(Placeholder::Number),
            Self::Text => Some(Placeholder::String),
            Self::Bool => None,
        }
    }
}

///
/// ClassType
///
/// Static shape of one composer input.
///
/// Optional → the shape, or a nullish value; a union with `null`.
/// Union    → exactly one of the member shapes; predicted per member.
/// Never    → an uninhabited position; excluded like a falsy value.
/// Unknown  → a position whose shape cannot be analysed.
/// Any      → a position that claims every shape at once.
///

#[derive(Clone, Debug, PartialEq)]
pub enum ClassType {
    Any,
    Dictionary(IndexMap<String, Self>),
    Literal(Literal),
    Never,
    Optional(Box<Self>),
    Sequence(Vec<Self>),
    Union(Vec<Self>),
    Unknown,
    Widened(Widened),
}

impl ClassType {
    ///
    /// CONSTRUCTION
    ///

    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Literal(Literal::Text(value.into()))
    }

    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Literal(Literal::Number(value))
    }

    #[must_use]
    pub fn bigint(value: impl Into<BigInt>) -> Self {
        Self::Literal(Literal::BigInt(value.into()))
    }

    #[must_use]
    pub const fn bool(value: bool) -> Self {
        Self::Literal(Literal::Bool(value))
    }

    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    #[must_use]
    pub const fn undefined() -> Self {
        Self::Literal(Literal::Undefined)
    }

    #[must_use]
    pub const fn unit() -> Self {
        Self::Literal(Literal::Unit)
    }

    #[must_use]
    pub fn sequence(items: impl IntoIterator<Item = Self>) -> Self {
        Self::Sequence(items.into_iter().collect())
    }

    /// Build a dictionary shape; a repeated key keeps its first position
    /// and takes the last shape.
    #[must_use]
    pub fn dictionary<K>(entries: impl IntoIterator<Item = (K, Self)>) -> Self
    where
        K: Into<String>,
    {
        Self::Dictionary(
            entries
                .into_iter()
                .map(|(key, shape)| (key.into(), shape))
                .collect(),
        )
    }

    #[must_use]
    pub fn optional(inner: Self) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Build a union shape; nested unions are flattened.
    #[must_use]
    pub fn union(members: impl IntoIterator<Item = Self>) -> Self {
        let mut flat = Vec::new();
        for member in members {
            match member {
                Self::Union(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }

        Self::Union(flat)
    }

    /// Lift a concrete value into its literal shape.
    #[must_use]
    pub fn of(value: &ClassValue) -> Self {
        match value {
            ClassValue::Text(text) => Self::text(text.clone()),
            ClassValue::Number(n) => Self::number(*n),
            ClassValue::BigInt(n) => Self::bigint(n.clone()),
            ClassValue::Bool(b) => Self::bool(*b),
            ClassValue::Null => Self::null(),
            ClassValue::Undefined => Self::undefined(),
            ClassValue::Unit => Self::unit(),
            ClassValue::List(items) => Self::Sequence(items.iter().map(Self::of).collect()),
            ClassValue::Dict(dict) => Self::Dictionary(
                dict.iter()
                    .map(|(key, value)| (key.clone(), Self::of(value)))
                    .collect(),
            ),
            ClassValue::Opaque => Self::Unknown,
        }
    }

    ///
    /// CLASSIFICATION
    ///

    /// Classify this shape against the falsy table.
    #[must_use]
    pub fn truthiness(&self) -> TypeTruthiness {
        match self {
            Self::Literal(literal) => {
                if literal.falsy_kind().is_some() {
                    TypeTruthiness::Falsy
                } else {
                    TypeTruthiness::Truthy
                }
            }
            Self::Widened(_) => TypeTruthiness::Widened,
            Self::Sequence(_) | Self::Dictionary(_) => TypeTruthiness::Truthy,
            Self::Never => TypeTruthiness::Falsy,
            Self::Optional(inner) => match inner.truthiness() {
                TypeTruthiness::Falsy => TypeTruthiness::Falsy,
                _ => TypeTruthiness::Unprovable,
            },
            Self::Union(members) => TypeTruthiness::of_union(members.iter().map(Self::truthiness)),
            Self::Unknown | Self::Any => TypeTruthiness::Unprovable,
        }
    }

    /// Returns true when every value this shape admits is known exactly.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        match self {
            Self::Literal(_) => true,
            Self::Sequence(items) => items.iter().all(Self::is_literal),
            Self::Dictionary(entries) => entries.values().all(Self::is_literal),
            _ => false,
        }
    }
}

///
/// TypeTruthiness
///
/// Truthy     → every admitted value is truthy.
/// Falsy      → every admitted value is falsy.
/// Widened    → a non-nullish primitive category; value unknown.
/// Unprovable → may be nullish, or cannot be analysed.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeTruthiness {
    Falsy,
    Truthy,
    Unprovable,
    Widened,
}

impl TypeTruthiness {
    /// Classify a union from its members. An empty union is uninhabited.
    ///
    /// All falsy → `Falsy`; all truthy → `Truthy`; truthy or widened
    /// members only → `Widened`; anything mixing falsy and non-falsy
    /// members → `Unprovable`.
    #[must_use]
    pub fn of_union(members: impl IntoIterator<Item = Self>) -> Self {
        let mut all_falsy = true;
        let mut all_truthy = true;
        let mut any_falsy = false;
        let mut any_unprovable = false;

        for member in members {
            all_falsy &= member == Self::Falsy;
            all_truthy &= member == Self::Truthy;
            any_falsy |= member == Self::Falsy;
            any_unprovable |= member == Self::Unprovable;
        }

        if all_falsy {
            Self::Falsy
        } else if all_truthy {
            Self::Truthy
        } else if any_falsy || any_unprovable {
            Self::Unprovable
        } else {
            Self::Widened
        }
    }
}

///
/// DictionaryPolicy
///
/// Which dictionary values make their key appear in a prediction.
///
/// NonNullish → truthy and widened values (a widened boolean counts as
///              present, so `{ on: flag, off: !flag }` predicts both keys).
/// Strict     → only provably truthy values.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DictionaryPolicy {
    #[default]
    NonNullish,
    Strict,
}

impl DictionaryPolicy {
    /// Returns true when a key whose value classifies as `truthiness`
    /// belongs in the prediction.
    #[must_use]
    pub const fn includes(self, truthiness: TypeTruthiness) -> bool {
        match truthiness {
            TypeTruthiness::Truthy => true,
            TypeTruthiness::Widened => matches!(self, Self::NonNullish),
            TypeTruthiness::Falsy | TypeTruthiness::Unprovable => false,
        }
    }
}

///
/// PredictOptions
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct PredictOptions {
    pub dictionary_policy: DictionaryPolicy,
}

impl PredictOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dictionary_policy: DictionaryPolicy::NonNullish,
        }
    }

    #[must_use]
    pub const fn with_dictionary_policy(mut self, policy: DictionaryPolicy) -> Self {
        self.dictionary_policy = policy;
        self
    }
}
