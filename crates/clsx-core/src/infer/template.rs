use crate::{SEPARATOR, error::PredictionError};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

///
/// Placeholder
///
/// A template hole standing for any value of one primitive category.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    BigInt,
    Number,
    String,
}

impl Placeholder {
    /// Template spelling, e.g. `${number}`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BigInt => "${bigint}",
            Self::Number => "${number}",
            Self::String => "${string}",
        }
    }

    /// Returns true when `text` is one spelling this hole admits.
    #[must_use]
    pub fn admits(self, text: &str) -> bool {
        match self {
            Self::String => true,
            Self::Number => is_number_spelling(text),
            Self::BigInt => is_bigint_spelling(text),
        }
    }
}

///
/// Segment
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Hole(Placeholder),
    Text(String),
}

///
/// Template
///
/// Sequence of text and holes. Adjacent text segments are always merged
/// and empty text segments are never stored.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Template(Vec<Segment>);

impl Template {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a template, normalising adjacent and empty text segments.
    #[must_use]
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        let mut template = Self::new();
        for segment in segments {
            template.push(segment);
        }

        template
    }

    pub fn push(&mut self, segment: Segment) {
        match segment {
            Segment::Text(text) => self.push_text(&text),
            hole @ Segment::Hole(_) => self.0.push(hole),
        }
    }

    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Text(last)) = self.0.last_mut() {
            last.push_str(text);
        } else {
            self.0.push(Segment::Text(text.to_string()));
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Returns true when the template has no holes.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.0.iter().all(|segment| matches!(segment, Segment::Text(_)))
    }

    /// Collapse a hole-free template into its text.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        self.is_text().then(|| {
            self.0
                .iter()
                .filter_map(|segment| match segment {
                    Segment::Text(text) => Some(text.as_str()),
                    Segment::Hole(_) => None,
                })
                .collect()
        })
    }

    /// Returns true when `text` is one of the strings this template admits.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        match_segments(text, &self.0)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('`')?;
        for segment in &self.0 {
            match segment {
                Segment::Hole(hole) => f.write_str(hole.label())?,
                Segment::Text(text) => {
                    for c in text.chars() {
                        match c {
                            '`' | '\\' => write!(f, "\\{c}")?,
                            '$' => f.write_str("\\$")?,
                            _ => f.write_char(c)?,
                        }
                    }
                }
            }
        }
        f.write_char('`')
    }
}

///
/// Prediction
///
/// Literal  → the exact composed string.
/// Template → text with holes for widened positions.
/// Union    → one of several literals or templates, one per union member
///            of the input.
/// Fallback → any string; the input could not be analysed.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Prediction {
    Fallback,
    Literal(String),
    Template(Template),
    Union(Vec<Self>),
}

impl Prediction {
    /// Build the prediction for a template, collapsing it to a literal
    /// when it has no holes.
    #[must_use]
    pub fn from_template(template: Template) -> Self {
        match template.as_text() {
            Some(text) => Self::Literal(text),
            None => Self::Template(template),
        }
    }

    /// Join token templates with the separator.
    #[must_use]
    pub fn join(tokens: impl IntoIterator<Item = Template>) -> Self {
        let mut joined = Template::new();
        for (i, token) in tokens.into_iter().enumerate() {
            if i > 0 {
                joined.push_text(SEPARATOR);
            }
            for segment in token.0 {
                joined.push(segment);
            }
        }

        Self::from_template(joined)
    }

    /// Combine member predictions. Nested unions are flattened, duplicates
    /// dropped, and any fallback member makes the whole union a fallback.
    #[must_use]
    pub fn union(members: impl IntoIterator<Item = Self>) -> Self {
        let mut flat: Vec<Self> = Vec::new();
        let mut pending: Vec<Self> = members.into_iter().collect();
        pending.reverse();

        while let Some(member) = pending.pop() {
            match member {
                Self::Fallback => return Self::Fallback,
                Self::Union(inner) => pending.extend(inner.into_iter().rev()),
                other => {
                    if !flat.contains(&other) {
                        flat.push(other);
                    }
                }
            }
        }

        match flat.len() {
            0 => Self::Fallback,
            1 => flat.pop().unwrap_or(Self::Fallback),
            _ => Self::Union(flat),
        }
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }

    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(text),
            _ => None,
        }
    }

    /// Take the predicted literal, or report what was predicted instead.
    pub fn into_literal(self) -> Result<String, PredictionError> {
        match self {
            Self::Literal(text) => Ok(text),
            other => Err(PredictionError::NotLiteral {
                predicted: other.to_string(),
            }),
        }
    }

    /// Returns true when `actual` inhabits the predicted type.
    #[must_use]
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            Self::Fallback => true,
            Self::Literal(text) => text == actual,
            Self::Template(template) => template.matches(actual),
            Self::Union(members) => members.iter().any(|member| member.matches(actual)),
        }
    }

    /// Check that `actual` inhabits the predicted type.
    pub fn check(&self, actual: &str) -> Result<(), PredictionError> {
        if self.matches(actual) {
            Ok(())
        } else {
            Err(PredictionError::Mismatch {
                predicted: self.to_string(),
                actual: actual.to_string(),
            })
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fallback => f.write_str("string"),
            Self::Literal(text) => write!(f, "{text:?}"),
            Self::Template(template) => write!(f, "{template}"),
            Self::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
        }
    }
}

///
/// Matching
///
/// Dynamic programming over byte offsets: after each segment, `reachable`
/// marks every prefix length the segments so far can match exactly.
///

fn match_segments(text: &str, segments: &[Segment]) -> bool {
    let len = text.len();
    let mut reachable = vec![false; len + 1];
    reachable[0] = true;

    for segment in segments {
        let mut next = vec![false; len + 1];
        let starts = (0..=len).filter(|&start| reachable[start]);

        match segment {
            Segment::Text(literal) => {
                for start in starts {
                    if text[start..].starts_with(literal.as_str()) {
                        next[start + literal.len()] = true;
                    }
                }
            }

            // any suffix of the earliest start is reachable
            Segment::Hole(Placeholder::String) => {
                if let Some(first) = reachable.iter().position(|&r| r) {
                    for end in (first..=len).filter(|&end| text.is_char_boundary(end)) {
                        next[end] = true;
                    }
                }
            }

            Segment::Hole(hole) => {
                for start in starts {
                    for end in (start..=len).filter(|&end| text.is_char_boundary(end)) {
                        if !next[end] && hole.admits(&text[start..end]) {
                            next[end] = true;
                        }
                    }
                }
            }
        }

        if !next.contains(&true) {
            return false;
        }
        reachable = next;
    }

    reachable[len]
}

// Spellings a `${number}` hole admits: decimal and exponent forms plus the
// three special names.
fn is_number_spelling(text: &str) -> bool {
    if matches!(text, "NaN" | "Infinity" | "-Infinity" | "+Infinity") {
        return true;
    }
    if text.is_empty()
        || !text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return false;
    }

    text.parse::<f64>().is_ok()
}

// Spellings a `${bigint}` hole admits: an optionally negative integer.
fn is_bigint_spelling(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);

    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
