//! Runtime composer: flatten, filter, reduce and join class values.


use crate::{DEFAULT_MAX_DEPTH, SEPARATOR, value::ClassValue};
use serde::{Deserialize, Serialize};

///
/// ComposeOptions
///
/// `max_depth` bounds how many list levels are flattened up front. Lists
/// nested deeper are reduced recursively, so the bound never changes the
/// composed string.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ComposeOptions {
    pub max_depth: usize,
}

impl ComposeOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self::new()
    }
}

///
/// Composer
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Composer {
    options: ComposeOptions,
}

impl Composer {
    #[must_use]
    pub const fn new(options: ComposeOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> ComposeOptions {
        self.options
    }

    /// Compose one class string from the given values.
    ///
    /// Passing a single wrapping list is the same as passing its items.
    #[must_use]
    pub fn compose(&self, classes: &[ClassValue]) -> String {
        // Phase 1: flatten up to the configured depth.
        let mut entries = Vec::with_capacity(classes.len());
        let truncated = flatten_into(classes, self.options.max_depth, &mut entries);

        if truncated {
            tracing::trace!(
                max_depth = self.options.max_depth,
                "lists nested beyond the flatten bound are reduced recursively"
            );
        }

        // Phase 2: drop falsy entries, reduce the rest, join.
        let tokens: Vec<String> = entries
            .into_iter()
            .filter(|entry| entry.is_truthy())
            .map(reduce)
            .filter(|token| !token.is_empty())
            .collect();

        tokens.join(SEPARATOR)
    }
}

/// Compose with the default options.
#[must_use]
pub fn compose(classes: &[ClassValue]) -> String {
    Composer::default().compose(classes)
}

/// Compose from anything convertible into class values.
///
/// ```ignore
/// let cn = clsx(["foo", "bar"]);
/// assert_eq!(cn, "foo bar");
/// ```
#[must_use]
pub fn clsx<I>(classes: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue>,
{
    let values: Vec<ClassValue> = classes.into_iter().map(Into::into).collect();

    compose(&values)
}

// Splice list items into `out`, descending at most `depth` levels.
// Returns true when a list was pushed unflattened.
fn flatten_into<'a>(
    items: &'a [ClassValue],
    depth: usize,
    out: &mut Vec<&'a ClassValue>,
) -> bool {
    let mut truncated = false;
    for item in items {
        match item {
            ClassValue::List(inner) if depth > 0 => {
                truncated |= flatten_into(inner, depth - 1, out);
            }
            ClassValue::List(_) => {
                truncated = true;
                out.push(item);
            }
            _ => out.push(item),
        }
    }

    truncated
}

// Reduce one truthy entry to its token text; empty when it renders nothing.
fn reduce(value: &ClassValue) -> String {
    match value {
        ClassValue::Text(_) | ClassValue::Number(_) | ClassValue::BigInt(_) => {
            value.spelling().unwrap_or_default()
        }
        ClassValue::List(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter(|item| item.is_truthy())
                .map(reduce)
                .filter(|part| !part.is_empty())
                .collect();

            parts.join(SEPARATOR)
        }
        ClassValue::Dict(dict) => dict.truthy_keys().collect::<Vec<_>>().join(SEPARATOR),
        ClassValue::Bool(_)
        | ClassValue::Null
        | ClassValue::Undefined
        | ClassValue::Unit
        | ClassValue::Opaque => String::new(),
    }
}
