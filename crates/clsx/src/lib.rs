//! clsx: conditional class-name composition with compile-time prediction.
//!
//! This is the public meta-crate. Downstream users depend on **clsx** only.
//!
//! It re-exports the stable public API from:
//!   - `clsx-core`   (class values, runtime composer, merge engine)
//!   - `clsx-macros` (`clsx!`, `clsx_const!`, `predict!`)
//!
//! ```ignore
//! use clsx::clsx;
//!
//! let dark = true;
//! let cn = clsx!("btn", { "btn-dark": dark, "btn-light": !dark });
//! assert_eq!(cn, "btn btn-dark");
//!
//! const BASE: &str = clsx::clsx_const!("p-4", ["rounded", { shadow: true }]);
//! assert_eq!(BASE, "p-4 rounded shadow");
//! ```

extern crate self as clsx;

pub use clsx_core as core;

pub use clsx_core::{
    ClassDict, ClassType, ClassValue, ComposeOptions, Composer, DictionaryPolicy, FalsyKind,
    Literal, Placeholder, PredictOptions, Prediction, PredictionError, Segment, Template,
    TypeTruthiness, Widened, clsx, compose, predict, predict_with,
};

//
// Macros
//

pub use clsx_macros::{clsx, clsx_const, predict};

//
// Prelude
//

pub mod prelude {
    pub use clsx_core::prelude::*;
    pub use clsx_macros::{clsx, clsx_const, predict};
}
