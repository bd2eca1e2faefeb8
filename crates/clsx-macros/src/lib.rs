//! Compile-time front end for clsx.
//!
//! Arguments are parsed into class shapes at expansion time and run through
//! the merge engine, so literal invocations cost nothing at runtime.

use proc_macro::TokenStream;

mod expand;
mod parse;
mod paths;

/// Compose a class string.
///
/// Expands to a string literal when every argument is known at compile
/// time, and to a runtime `compose` call otherwise.
#[proc_macro]
pub fn clsx(input: TokenStream) -> TokenStream {
    expand::clsx(input.into()).into()
}

/// Compose a class string entirely at compile time, as `&'static str`.
///
/// Fails to compile unless every argument is a literal.
#[proc_macro]
pub fn clsx_const(input: TokenStream) -> TokenStream {
    expand::clsx_const(input.into()).into()
}

/// The compile-time prediction for the arguments, as a `Prediction` value.
///
/// Arguments are analysed but never evaluated.
#[proc_macro]
pub fn predict(input: TokenStream) -> TokenStream {
    expand::prediction(input.into()).into()
}
