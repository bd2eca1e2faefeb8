//! The falsy table shared by the runtime composer and the merge engine.
//!
//! A value is falsy iff it is one of the seven forms listed in
//! [`FalsyKind::ALL`]. Everything else is truthy, including `NaN`, the
//! infinities, empty lists and empty dictionaries.

///
/// FalsyKind
///
/// One entry of the fixed falsy table.
///
/// IMPORTANT:
/// The runtime and type-level classifiers both route through this table;
/// adding or removing an entry changes both evaluators at once.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FalsyKind {
    EmptyText,
    Zero,
    BigZero,
    False,
    Null,
    Undefined,
    Unit,
}

impl FalsyKind {
    /// The complete falsy table, in canonical order.
    pub const ALL: [Self; 7] = [
        Self::Unit,
        Self::Undefined,
        Self::Null,
        Self::False,
        Self::Zero,
        Self::BigZero,
        Self::EmptyText,
    ];

    /// Stable human-readable label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EmptyText => "\"\"",
            Self::Zero => "0",
            Self::BigZero => "0n",
            Self::False => "false",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Unit => "void",
        }
    }

    /// Classify a number; both zeroes are falsy, `NaN` is not.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn of_number(value: f64) -> Option<Self> {
        (value == 0.0).then_some(Self::Zero)
    }

    /// Classify a text value.
    #[must_use]
    pub const fn of_text(value: &str) -> Option<Self> {
        if value.is_empty() {
            Some(Self::EmptyText)
        } else {
            None
        }
    }

    /// Classify a boolean.
    #[must_use]
    pub const fn of_bool(value: bool) -> Option<Self> {
        if value { None } else { Some(Self::False) }
    }
}

///
/// TESTS
///
