use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

fn env_path(name: &str) -> Option<TokenStream> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .and_then(|value| syn::parse_str::<Path>(&value).ok())
        .map(|path| quote!(#path))
}

///
/// CratePaths
///
/// Resolves the runtime crate root for generated code. Consumers reach the
/// runtime through the public `clsx` facade; crates that rename or re-export
/// it can set `CLSX_CRATE` to the path to use instead.
///

#[derive(Clone, Debug)]
pub struct CratePaths {
    pub root: TokenStream,
}

impl CratePaths {
    /// Resolve the runtime path, honoring the environment override.
    #[must_use]
    pub fn new() -> Self {
        let pkg = std::env::var("CARGO_PKG_NAME").unwrap_or_default();

        // the core crate cannot name the facade that depends on it
        let root = if pkg == "clsx-core" {
            quote!(crate)
        } else {
            quote!(::clsx)
        };

        Self {
            root: env_path("CLSX_CRATE").unwrap_or(root),
        }
    }
}

impl Default for CratePaths {
    fn default() -> Self {
        Self::new()
    }
}

/// Singleton accessor for proc-macro contexts.
#[must_use]
pub fn paths() -> CratePaths {
    CratePaths::new()
}

///
/// TESTS
///
