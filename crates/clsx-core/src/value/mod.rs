mod dict;
mod number;
mod wire;


use crate::truthy::FalsyKind;
use num_bigint::{BigInt, Sign};

// re-exports
pub use dict::ClassDict;
pub use number::format_number;

///
/// ClassValue
///
/// One input to the composer.
///
/// Unit   → the "no value" placeholder; always falsy.
/// Opaque → anything outside the algebra (callbacks, handles); truthy but
///          never rendered.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ClassValue {
    BigInt(BigInt),
    Bool(bool),
    Dict(ClassDict),
    /// Ordered list of values, nested arbitrarily.
    List(Vec<Self>),
    Null,
    Number(f64),
    Opaque,
    Text(String),
    Undefined,
    #[default]
    Unit,
}

impl ClassValue {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `ClassValue::List` from owned items.
    pub fn list<T>(items: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a `ClassValue::Dict` from key/value entries.
    ///
    /// Later entries for an existing key replace its value but keep the
    /// key's original position.
    pub fn dict<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Dict(entries.into_iter().collect())
    }

    ///
    /// TRUTHINESS
    ///

    /// Return the falsy-table entry this value matches, if any.
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
            Self::List(_) | Self::Dict(_) | Self::Opaque => None,
        }
    }

    /// Returns true unless the value is in the falsy table.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        self.falsy_kind().is_none()
    }

    ///
    /// TYPES
    ///

    /// Returns true for text, number and big integer values: the only
    /// kinds spelled directly as a token.
    #[must_use]
    pub const fn is_printable(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Number(_) | Self::BigInt(_))
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Spell a printable value; `None` for every other kind.
    #[must_use]
    pub fn spelling(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Number(n) => Some(format_number(*n)),
            Self::BigInt(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

///
/// Conversions
///

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ClassValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<char> for ClassValue {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for ClassValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<()> for ClassValue {
    fn from((): ()) -> Self {
        Self::Unit
    }
}

impl From<BigInt> for ClassValue {
    fn from(value: BigInt) -> Self {
        Self::BigInt(value)
    }
}

impl From<ClassDict> for ClassValue {
    fn from(value: ClassDict) -> Self {
        Self::Dict(value)
    }
}

impl From<&Self> for ClassValue {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

impl<T: Into<Self>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for ClassValue {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for ClassValue {
    fn from(items: [T; N]) -> Self {
        Self::list(items)
    }
}

impl<T: Clone + Into<Self>> From<&[T]> for ClassValue {
    fn from(items: &[T]) -> Self {
        Self::list(items.iter().cloned())
    }
}

// numbers that fit an f64 exactly become JavaScript numbers
macro_rules! impl_from_number {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl From<$ty> for ClassValue {
                fn from(value: $ty) -> Self {
                    Self::Number(f64::from(value))
                }
            }
        )*
    };
}

// wider integers keep every digit as big integers
macro_rules! impl_from_big {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl From<$ty> for ClassValue {
                fn from(value: $ty) -> Self {
                    Self::BigInt(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_number!(f32, f64, i8, i16, i32, u8, u16, u32);
impl_from_big!(i64, i128, isize, u64, u128, usize);
