//! Expansion logic for the `ErrorCode` derive.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Expr, ExprLit, ExprUnary, Fields, Ident, Lit, UnOp};

/// Expands the derive input into an `ErrorCode` implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            ident,
            "ErrorCode can only be derived for enums",
        ));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "ErrorCode cannot be derived for generic enums",
        ));
    }

    let success = success_variant(ident, data)?;

    Ok(quote! {
        #[automatically_derived]
        impl ::verdict::ErrorCode for #ident {
            const SUCCESS: Self = Self::#success;

            fn raw(self) -> i32 {
                self as i32
            }
        }
    })
}

/// Finds the zero-valued member while validating every variant.
fn success_variant<'a>(ident: &Ident, data: &'a DataEnum) -> syn::Result<&'a Ident> {
    let mut success = None;
    // Counted in i64 so an implicit value following `i32::MAX` cannot wrap.
    let mut next = 0_i64;
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "ErrorCode variants must be fieldless",
            ));
        }
        let value = match &variant.discriminant {
            Some((_, expr)) => discriminant_value(expr)?,
            None => next,
        };
        if i32::try_from(value).is_err() {
            return Err(syn::Error::new_spanned(
                variant,
                "ErrorCode discriminants must fit in i32",
            ));
        }
        if value == 0 && success.is_none() {
            success = Some(&variant.ident);
        }
        next = value + 1;
    }
    success.ok_or_else(|| {
        syn::Error::new_spanned(
            ident,
            "ErrorCode requires a variant with discriminant zero to act as the success code",
        )
    })
}

fn discriminant_value(expr: &Expr) -> syn::Result<i64> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => lit.base10_parse(),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => Ok(-discriminant_value(expr)?),
        other => Err(syn::Error::new_spanned(
            other,
            "ErrorCode discriminants must be integer literals",
        )),
    }
}
