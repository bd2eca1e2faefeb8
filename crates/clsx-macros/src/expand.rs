use crate::{
    parse::{ClassArg, ClassArgs},
    paths::paths,
};
use clsx_core::{ClassType, Literal, Placeholder, Prediction, Segment, predict};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Error, LitInt, LitStr};

/// `clsx!`: a literal when every argument is known, otherwise a runtime call.
pub fn clsx(input: TokenStream) -> TokenStream {
    let args = match syn::parse2::<ClassArgs>(input) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };
    let root = paths().root;

    if args.args.is_empty() {
        return quote!(::std::string::String::new());
    }

    if args.args.iter().all(|arg| arg.non_literal_span().is_none())
        && let Ok(text) = predict(&shapes(&args)).into_literal()
    {
        return quote!(::std::string::String::from(#text));
    }

    let values = args.args.iter().map(|arg| value_tokens(arg, &root));

    quote!(#root::compose(&[#(#values),*]))
}

/// `clsx_const!`: the predicted literal as `&'static str`.
pub fn clsx_const(input: TokenStream) -> TokenStream {
    let args = match syn::parse2::<ClassArgs>(input) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };

    if let Some(span) = args.args.iter().find_map(ClassArg::non_literal_span) {
        return Error::new(span, "clsx_const! arguments must be literals known at compile time")
            .to_compile_error();
    }

    match predict(&shapes(&args)).into_literal() {
        Ok(text) => quote!(#text),
        Err(err) => Error::new(Span::call_site(), err).to_compile_error(),
    }
}

/// `predict!`: the compile-time prediction as a `Prediction` value.
pub fn prediction(input: TokenStream) -> TokenStream {
    let args = match syn::parse2::<ClassArgs>(input) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };
    let root = paths().root;

    prediction_tokens(&predict(&shapes(&args)), &root)
}

fn shapes(args: &ClassArgs) -> Vec<ClassType> {
    args.args.iter().map(ClassArg::shape).collect()
}

///
/// Runtime values
///

fn value_tokens(arg: &ClassArg, root: &TokenStream) -> TokenStream {
    match arg {
        ClassArg::Dict(entries) => {
            let entries = entries.iter().map(|entry| {
                let key = &entry.key;
                let value = value_tokens(&entry.value, root);
                quote!((#key, #value))
            });

            quote!(#root::ClassValue::Dict(
                <#root::ClassDict as ::core::iter::FromIterator<_>>::from_iter([#(#entries),*])
            ))
        }
        ClassArg::Seq(items) => {
            let items = items.iter().map(|item| value_tokens(item, root));

            quote!(#root::ClassValue::List(::std::vec![#(#items),*]))
        }
        ClassArg::Expr { expr, shape } => match shape {
            ClassType::Literal(literal) => literal_tokens(literal, root)
                .unwrap_or_else(|| quote!(#root::ClassValue::from(#expr))),
            _ => quote!(#root::ClassValue::from(#expr)),
        },
    }
}

// Literal values are rebuilt from their shape so overflowing or untyped
// literals never reach the compiler as expressions.
fn literal_tokens(literal: &Literal, root: &TokenStream) -> Option<TokenStream> {
    let tokens = match literal {
        Literal::Text(text) => quote!(#root::ClassValue::Text(::std::string::String::from(#text))),
        Literal::Number(n) => {
            let bits = LitInt::new(&format!("{}u64", n.to_bits()), Span::call_site());
            quote!(#root::ClassValue::Number(f64::from_bits(#bits)))
        }
        Literal::BigInt(n) => {
            let lit = if let Ok(small) = i128::try_from(n) {
                LitInt::new(&format!("{small}i128"), Span::call_site())
            } else {
                LitInt::new(&format!("{}u128", u128::try_from(n).ok()?), Span::call_site())
            };
            quote!(#root::ClassValue::from(#lit))
        }
        Literal::Bool(b) => quote!(#root::ClassValue::Bool(#b)),
        Literal::Null => quote!(#root::ClassValue::Null),
        Literal::Undefined => quote!(#root::ClassValue::Undefined),
        Literal::Unit => quote!(#root::ClassValue::Unit),
    };

    Some(tokens)
}

///
/// Predictions
///

fn prediction_tokens(prediction: &Prediction, root: &TokenStream) -> TokenStream {
    match prediction {
        Prediction::Fallback => quote!(#root::Prediction::Fallback),
        Prediction::Literal(text) => {
            quote!(#root::Prediction::Literal(::std::string::String::from(#text)))
        }
        Prediction::Template(template) => {
            let segments = template.segments().iter().map(|segment| match segment {
                Segment::Text(text) => {
                    let text = LitStr::new(text, Span::call_site());
                    quote!(#root::Segment::Text(::std::string::String::from(#text)))
                }
                Segment::Hole(hole) => {
                    let variant = match hole {
                        Placeholder::BigInt => quote!(BigInt),
                        Placeholder::Number => quote!(Number),
                        Placeholder::String => quote!(String),
                    };
                    quote!(#root::Segment::Hole(#root::Placeholder::#variant))
                }
            });

            quote!(#root::Prediction::Template(
                #root::Template::from_segments([#(#segments),*])
            ))
        }
        Prediction::Union(members) => {
            let members = members
                .iter()
                .map(|member| prediction_tokens(member, root));

            quote!(#root::Prediction::Union(::std::vec![#(#members),*]))
        }
    }
}

///
/// TESTS
///
