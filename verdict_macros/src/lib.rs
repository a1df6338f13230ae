//! Procedural macros for the `verdict` crate.
//!
//! Provides the [`ErrorCode`] derive, which implements the `verdict`
//! error-code trait for a fieldless enum whose zero-valued member is the
//! success code.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod error_code;


/// Derives `verdict::ErrorCode` for a fieldless enum.
///
/// Exactly one member must have discriminant zero; that member becomes the
/// `SUCCESS` constant. Discriminants must be integer literals fitting in
/// `i32`, with implicit values counted from the previous member as usual.
/// Enums with fields or generic parameters, and enums without a zero-valued
/// member, are rejected at compile time.
#[proc_macro_derive(ErrorCode)]
pub fn derive_error_code(input: TokenStream) -> TokenStream {
    let parsed = parse_macro_input!(input as DeriveInput);
    error_code::expand(&parsed)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
