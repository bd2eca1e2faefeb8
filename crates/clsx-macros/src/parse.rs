use clsx_core::{ClassType, Literal, Widened};
use proc_macro2::Span;
use syn::{
    BinOp, Block, Expr, ExprIf, ExprLit, ExprMacro, ExprUnary, Ident, Lit, LitInt, LitStr, Stmt,
    Token, Type, UnOp, braced, bracketed,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    token,
};

// integer suffixes that keep every digit
const BIG_SUFFIXES: [&str; 6] = ["i64", "i128", "isize", "u64", "u128", "usize"];

const NUMBER_TYPES: [&str; 8] = ["f32", "f64", "i8", "i16", "i32", "u8", "u16", "u32"];

///
/// ClassArgs
///
/// Comma-separated macro arguments.
///

pub struct ClassArgs {
    pub args: Vec<ClassArg>,
}

impl Parse for ClassArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let args = Punctuated::<ClassArg, Token![,]>::parse_terminated(input)?;

        Ok(Self {
            args: args.into_iter().collect(),
        })
    }
}

///
/// ClassArg
///
/// Dict → `{ key: entry, .. }`
/// Seq  → `[entry, ..]` or `vec![entry, ..]`
/// Expr → any other expression, with its static shape
///

pub enum ClassArg {
    Dict(Vec<DictEntry>),
    Expr { expr: Expr, shape: ClassType },
    Seq(Vec<ClassArg>),
}

impl ClassArg {
    /// Static shape of this argument.
    pub fn shape(&self) -> ClassType {
        match self {
            Self::Dict(entries) => ClassType::dictionary(
                entries
                    .iter()
                    .map(|entry| (entry.key.clone(), entry.value.shape())),
            ),
            Self::Expr { shape, .. } => shape.clone(),
            Self::Seq(items) => ClassType::sequence(items.iter().map(Self::shape)),
        }
    }

    /// First span whose shape is not known exactly.
    pub fn non_literal_span(&self) -> Option<Span> {
        match self {
            Self::Dict(entries) => entries
                .iter()
                .find_map(|entry| entry.value.non_literal_span()),
            Self::Expr { expr, shape } => (!shape.is_literal()).then(|| expr.span()),
            Self::Seq(items) => items.iter().find_map(Self::non_literal_span),
        }
    }
}

impl Parse for ClassArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(token::Brace) {
            let content;
            braced!(content in input);
            let entries = Punctuated::<DictEntry, Token![,]>::parse_terminated(&content)?;

            return Ok(Self::Dict(entries.into_iter().collect()));
        }

        if input.peek(token::Bracket) {
            let content;
            bracketed!(content in input);
            let items = Punctuated::<Self, Token![,]>::parse_terminated(&content)?;

            return Ok(Self::Seq(items.into_iter().collect()));
        }

        let expr: Expr = input.parse()?;
        if let Expr::Macro(mac) = &expr
            && mac.mac.path.is_ident("vec")
            && let Ok(items) = mac
                .mac
                .parse_body_with(Punctuated::<Self, Token![,]>::parse_terminated)
        {
            return Ok(Self::Seq(items.into_iter().collect()));
        }

        let shape = classify(&expr);

        Ok(Self::Expr { expr, shape })
    }
}

///
/// DictEntry
///

pub struct DictEntry {
    pub key: String,
    pub value: ClassArg,
}

impl Parse for DictEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        let key = if lookahead.peek(LitStr) {
            input.parse::<LitStr>()?.value()
        } else if lookahead.peek(LitInt) {
            input.parse::<LitInt>()?.base10_digits().to_string()
        } else if lookahead.peek(Ident::peek_any) {
            Ident::parse_any(input)?.unraw().to_string()
        } else {
            return Err(lookahead.error());
        };

        input.parse::<Token![:]>()?;
        let value = input.parse()?;

        Ok(Self { key, value })
    }
}

///
/// Classification
///

/// Static shape of one Rust expression.
pub fn classify(expr: &Expr) -> ClassType {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => classify_lit(lit),

        Expr::Paren(inner) => classify(&inner.expr),
        Expr::Group(inner) => classify(&inner.expr),
        Expr::Reference(inner) => classify(&inner.expr),

        Expr::Tuple(tuple) if tuple.elems.is_empty() => ClassType::unit(),

        Expr::Block(block) => classify_block(&block.block),
        Expr::If(expr_if) => classify_if(expr_if),
        Expr::Match(expr_match) => {
            ClassType::union(expr_match.arms.iter().map(|arm| classify(&arm.body)))
        }
        Expr::Index(index) => classify_index(&index.expr, &index.index),

        Expr::Unary(ExprUnary { op, expr, .. }) => match op {
            UnOp::Neg(_) => negate(classify(expr)),
            UnOp::Not(_) => ClassType::Widened(Widened::Bool),
            _ => ClassType::Unknown,
        },

        Expr::Binary(binary) => match binary.op {
            BinOp::Eq(_)
            | BinOp::Ne(_)
            | BinOp::Lt(_)
            | BinOp::Le(_)
            | BinOp::Gt(_)
            | BinOp::Ge(_)
            | BinOp::And(_)
            | BinOp::Or(_) => ClassType::Widened(Widened::Bool),
            _ => ClassType::Unknown,
        },

        Expr::Path(path) => {
            let segments: Vec<String> = path
                .path
                .segments
                .iter()
                .map(|segment| segment.ident.to_string())
                .collect();

            match segments.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
                ["None"] => ClassType::null(),
                ["f32" | "f64", "NAN" | "INFINITY" | "NEG_INFINITY"] => {
                    ClassType::Widened(Widened::Number)
                }
                _ => ClassType::Unknown,
            }
        }

        Expr::Call(call) => match call.func.as_ref() {
            Expr::Path(func) if func.path.is_ident("Some") && call.args.len() == 1 => {
                call.args.first().map_or(ClassType::Unknown, classify)
            }
            Expr::Path(func) if path_is(&func.path, &["String", "from"]) => {
                ClassType::Widened(Widened::Text)
            }
            _ => ClassType::Unknown,
        },

        Expr::Cast(cast) => classify_cast(&cast.ty),

        Expr::Macro(ExprMacro { mac, .. }) => {
            if mac.path.is_ident("format") {
                ClassType::Widened(Widened::Text)
            } else if mac.path.is_ident("matches") {
                ClassType::Widened(Widened::Bool)
            } else {
                ClassType::Unknown
            }
        }

        Expr::MethodCall(call)
            if call.args.is_empty() && (call.method == "to_string" || call.method == "to_owned") =>
        {
            ClassType::Widened(Widened::Text)
        }

        _ => ClassType::Unknown,
    }
}

fn classify_lit(lit: &Lit) -> ClassType {
    match lit {
        Lit::Str(s) => ClassType::text(s.value()),
        Lit::Char(c) => ClassType::text(c.value().to_string()),
        Lit::Bool(b) => ClassType::bool(b.value),
        Lit::Int(int) if BIG_SUFFIXES.contains(&int.suffix()) => int
            .base10_parse::<u128>()
            .map_or(ClassType::Unknown, ClassType::bigint),
        Lit::Int(int) => int
            .base10_digits()
            .parse::<f64>()
            .map_or(ClassType::Unknown, ClassType::number),
        // out-of-range float literals parse as infinity
        Lit::Float(float) => float
            .base10_digits()
            .parse::<f64>()
            .map_or(ClassType::Unknown, ClassType::number),
        _ => ClassType::Unknown,
    }
}

// `if` without `else` may evaluate to `()`, which is not a class value.
fn classify_if(expr_if: &ExprIf) -> ClassType {
    let Some((_, else_branch)) = &expr_if.else_branch else {
        return ClassType::Unknown;
    };

    ClassType::union([classify_block(&expr_if.then_branch), classify(else_branch)])
}

fn classify_block(block: &Block) -> ClassType {
    match block.stmts.as_slice() {
        [Stmt::Expr(tail, None)] => classify(tail),
        _ => ClassType::Unknown,
    }
}

// Indexing an array literal: a literal index picks its element, any other
// index may pick any of them.
fn classify_index(base: &Expr, index: &Expr) -> ClassType {
    let base = match base {
        Expr::Paren(inner) => inner.expr.as_ref(),
        other => other,
    };
    let Expr::Array(array) = base else {
        return ClassType::Unknown;
    };

    if let Expr::Lit(ExprLit {
        lit: Lit::Int(int), ..
    }) = index
    {
        return int
            .base10_parse::<usize>()
            .ok()
            .and_then(|i| array.elems.iter().nth(i))
            .map_or(ClassType::Unknown, classify);
    }

    ClassType::union(array.elems.iter().map(classify))
}

fn classify_cast(ty: &Type) -> ClassType {
    let Type::Path(path) = ty else {
        return ClassType::Unknown;
    };
    let Some(ident) = path.path.get_ident().map(ToString::to_string) else {
        return ClassType::Unknown;
    };

    if NUMBER_TYPES.contains(&ident.as_str()) {
        ClassType::Widened(Widened::Number)
    } else if BIG_SUFFIXES.contains(&ident.as_str()) {
        ClassType::Widened(Widened::BigInt)
    } else {
        ClassType::Unknown
    }
}

fn negate(shape: ClassType) -> ClassType {
    match shape {
        ClassType::Literal(Literal::Number(n)) => ClassType::number(-n),
        ClassType::Literal(Literal::BigInt(n)) => ClassType::bigint(-n),
        widened @ ClassType::Widened(Widened::Number | Widened::BigInt) => widened,
        _ => ClassType::Unknown,
    }
}

fn path_is(path: &syn::Path, expected: &[&str]) -> bool {
    path.segments.len() == expected.len()
        && path
            .segments
            .iter()
            .zip(expected)
            .all(|(segment, name)| segment.ident == name)
}

///
/// TESTS
///
