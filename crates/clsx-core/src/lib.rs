//! Core runtime for clsx: the class value algebra, the falsy table, the
//! runtime composer, and the merge engine that predicts composed strings
//! from static shapes.
#![warn(unreachable_pub)]

pub mod compose;
pub mod error;
pub mod infer;
pub mod truthy;
pub mod value;

// re-exports
pub use compose::{ComposeOptions, Composer, clsx, compose};
pub use error::PredictionError;
pub use infer::{
    ClassType, DictionaryPolicy, Literal, Placeholder, PredictOptions, Prediction, Segment,
    Template, TypeTruthiness, Widened, predict, predict_with,
};
pub use truthy::FalsyKind;
pub use value::{ClassDict, ClassValue};

///
/// CONSTANTS
///

/// Default number of list levels the composer flattens before reducing.
///
/// Lists nested deeper than this are still reduced recursively, so the
/// bound only changes how the work is split, never the output.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Separator placed between two tokens.
pub const SEPARATOR: &str = " ";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        compose::{ComposeOptions, clsx, compose},
        infer::{ClassType, Prediction, predict},
        value::{ClassDict, ClassValue},
    };
}
