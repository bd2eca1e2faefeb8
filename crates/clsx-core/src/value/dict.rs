use crate::value::ClassValue;
use derive_more::{Deref, DerefMut, IntoIterator};
use indexmap::IndexMap;

///
/// ClassDict
///
/// Ordered string-keyed map of conditional class names.
/// Enumeration order is insertion order; every key is an own key.
///
/// Re-inserting a key replaces its value in place, so
/// `{ a: 1, b: 1, a: 0 }` enumerates `a` before `b` with `a` falsy.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, IntoIterator, PartialEq)]
pub struct ClassDict(#[into_iterator(owned, ref)] IndexMap<String, ClassValue>);

impl ClassDict {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ClassValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Keys whose values are truthy, in enumeration order.
    ///
    /// Empty keys are skipped: they would render as an empty token.
    pub fn truthy_keys(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(key, value)| !key.is_empty() && value.is_truthy())
            .map(|(key, _)| key.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for ClassDict
where
    K: Into<String>,
    V: Into<ClassValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K, V> From<std::collections::BTreeMap<K, V>> for ClassDict
where
    K: Into<String>,
    V: Into<ClassValue>,
{
    fn from(map: std::collections::BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> From<IndexMap<K, V>> for ClassDict
where
    K: Into<String>,
    V: Into<ClassValue>,
{
    fn from(map: IndexMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> From<std::collections::BTreeMap<K, V>> for ClassValue
where
    K: Into<String>,
    V: Into<Self>,
{
    fn from(map: std::collections::BTreeMap<K, V>) -> Self {
        Self::Dict(map.into_iter().collect())
    }
}

impl<K, V> From<IndexMap<K, V>> for ClassValue
where
    K: Into<String>,
    V: Into<Self>,
{
    fn from(map: IndexMap<K, V>) -> Self {
        Self::Dict(map.into_iter().collect())
    }
}
