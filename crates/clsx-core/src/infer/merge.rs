use crate::{
    infer::{
        ClassType, DictionaryPolicy, Literal, PredictOptions, Prediction, Segment, Template,
        TypeTruthiness,
    },
    value::format_number,
};

// Upper bound on member combinations a tuple of unions may expand to.
pub(crate) const MAX_ALTERNATIVES: usize = 64;

/// Predict the composed class string for a tuple of positions.
#[must_use]
pub fn predict(positions: &[ClassType]) -> Prediction {
    predict_with(positions, &PredictOptions::default())
}

/// Predict with explicit options.
///
/// Never fails: shapes that cannot be analysed yield
/// [`Prediction::Fallback`]. Union and optional positions reachable
/// through sequences are distributed, and each combination of members is
/// predicted on its own.
#[must_use]
pub fn predict_with(positions: &[ClassType], options: &PredictOptions) -> Prediction {
    if positions.is_empty() {
        tracing::trace!("empty argument tuple; falling back");
        return Prediction::Fallback;
    }

    if let Some(reason) = find_invalid(positions) {
        tracing::trace!(reason, "unanalysable position; falling back");
        return Prediction::Fallback;
    }

    let Some(alternatives) = distribute(positions) else {
        tracing::trace!(
            max = MAX_ALTERNATIVES,
            "too many union combinations; falling back"
        );
        return Prediction::Fallback;
    };

    Prediction::union(
        alternatives
            .iter()
            .map(|alternative| predict_concrete(alternative, options.dictionary_policy)),
    )
}

// Predict one union-free tuple.
fn predict_concrete(positions: &[ClassType], policy: DictionaryPolicy) -> Prediction {
    let mut flat = Vec::new();
    flatten_into(positions, &mut flat);

    let tokens = flat
        .into_iter()
        .filter(|shape| shape.truthiness() != TypeTruthiness::Falsy)
        .flat_map(|shape| tokens_of(shape, policy));

    Prediction::join(tokens)
}

///
/// Gates
///

// First position reachable through sequences or union members that
// blocks analysis.
fn find_invalid(positions: &[ClassType]) -> Option<&'static str> {
    positions.iter().find_map(|shape| match shape {
        ClassType::Unknown => Some("unknown"),
        ClassType::Any => Some("any"),
        ClassType::Sequence(items) | ClassType::Union(items) => find_invalid(items),
        ClassType::Optional(inner) => find_invalid(std::slice::from_ref(inner.as_ref())),
        _ => None,
    })
}

///
/// Distribution
///

// Every union-free tuple the positions admit, or `None` past the bound.
fn distribute(positions: &[ClassType]) -> Option<Vec<Vec<ClassType>>> {
    let mut tuples: Vec<Vec<ClassType>> = vec![Vec::new()];

    for shape in positions {
        let members = expand(shape)?;
        if tuples.len().saturating_mul(members.len()) > MAX_ALTERNATIVES {
            return None;
        }

        tuples = tuples
            .iter()
            .flat_map(|tuple| {
                members.iter().map(move |member| {
                    let mut next = tuple.clone();
                    next.push(member.clone());
                    next
                })
            })
            .collect();
    }

    Some(tuples)
}

// Union-free alternatives of one shape. Dictionary values are left
// alone; their unions are classified by truthiness.
fn expand(shape: &ClassType) -> Option<Vec<ClassType>> {
    match shape {
        ClassType::Union(members) if members.is_empty() => Some(vec![ClassType::Never]),
        ClassType::Union(members) => {
            let mut out = Vec::new();
            for member in members {
                out.extend(expand(member)?);
                if out.len() > MAX_ALTERNATIVES {
                    return None;
                }
            }
            Some(out)
        }
        ClassType::Optional(inner) => {
            let mut out = expand(inner)?;
            out.push(ClassType::null());
            Some(out)
        }
        ClassType::Sequence(items) => Some(
            distribute(items)?
                .into_iter()
                .map(ClassType::Sequence)
                .collect(),
        ),
        other => Some(vec![other.clone()]),
    }
}

// Sequences flatten to any depth.
fn flatten_into<'a>(positions: &'a [ClassType], out: &mut Vec<&'a ClassType>) {
    for shape in positions {
        match shape {
            ClassType::Sequence(items) => flatten_into(items, out),
            _ => out.push(shape),
        }
    }
}

///
/// Tokens
///

// Token templates contributed by one non-falsy flattened position.
fn tokens_of(shape: &ClassType, policy: DictionaryPolicy) -> Vec<Template> {
    match shape {
        ClassType::Literal(literal) => literal_spelling(literal)
            .map(|text| {
                let mut token = Template::new();
                token.push_text(&text);
                token
            })
            .into_iter()
            .collect(),

        ClassType::Widened(widened) => widened
            .placeholder()
            .map(|hole| Template::from_segments([Segment::Hole(hole)]))
            .into_iter()
            .collect(),

        ClassType::Dictionary(entries) => entries
            .iter()
            .filter(|(key, value)| !key.is_empty() && policy.includes(value.truthiness()))
            .map(|(key, _)| {
                let mut token = Template::new();
                token.push_text(key);
                token
            })
            .collect(),

        // gated, distributed or flattened before this point
        ClassType::Sequence(_)
        | ClassType::Optional(_)
        | ClassType::Union(_)
        | ClassType::Never
        | ClassType::Unknown
        | ClassType::Any => Vec::new(),
    }
}

fn literal_spelling(literal: &Literal) -> Option<String> {
    match literal {
        Literal::Text(text) => Some(text.clone()),
        Literal::Number(n) => Some(format_number(*n)),
        Literal::BigInt(n) => Some(n.to_string()),
        Literal::Bool(_) | Literal::Null | Literal::Undefined | Literal::Unit => None,
    }
}
