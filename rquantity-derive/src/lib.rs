//! Procedural macro implementation used by `rquantity-core`.
//!
//! `rquantity-derive` is an implementation detail of this workspace. The `quantity_type!` macro expands in terms of
//! `crate::Quantity`, `crate::Dim` and `crate::typenum`, so it is intended to be used by `rquantity-core` (or by crates
//! that expose an identical crate-root API).
//!
//! Most users should depend on `rquantity` instead and use the predefined named quantities.
//!
//! # Generated items
//!
//! ```text
//! quantity_type! {
//!     /// Angular acceleration.
//!     0, 0, -2, 1, QAngularAcceleration
//! }
//! ```
//!
//! expands to
//!
//! ```text
//! /// Angular acceleration.
//! pub type QAngularAcceleration =
//!     crate::Quantity<crate::Dim<crate::typenum::Z0, crate::typenum::Z0, crate::typenum::N24, crate::typenum::P12>>;
//! ```
//!
//! The four exponents are mass, length, time and angle. Each may be an integer (`-2`) or a fraction (`1/2`); it is
//! stored scaled by 12, so the result must be a whole multiple of `1/12`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, Ident, LitInt, Token,
};

/// Denominator every exponent is scaled by. Must match `rquantity_core::EXPONENT_SCALE`.
const EXPONENT_SCALE: i64 = 12;

/// Largest magnitude with a predefined `typenum` alias (`P1024` / `N1024`).
const MAX_SCALED: i64 = 1024;

/// Define a named quantity as a type alias of `crate::Quantity` at a fixed exponent tuple.
///
/// Input: optional outer attributes (doc comments), then `mass, length, time, angle, Name`.
///
/// This macro is intended for use by `rquantity-core`.
#[proc_macro]
pub fn quantity_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as QuantityType);

    match quantity_type_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn quantity_type_impl(input: QuantityType) -> syn::Result<TokenStream2> {
    let attrs = &input.attrs;
    let name = &input.name;

    let [mass, length, time, angle] = &input.exponents;
    let mass = mass.to_typenum()?;
    let length = length.to_typenum()?;
    let time = time.to_typenum()?;
    let angle = angle.to_typenum()?;

    let expanded = quote! {
        #(#attrs)*
        pub type #name = crate::Quantity<crate::Dim<
            crate::typenum::#mass,
            crate::typenum::#length,
            crate::typenum::#time,
            crate::typenum::#angle,
        >>;
    };

    Ok(expanded)
}

/// One exponent literal: `[-]numerator[/denominator]`.
struct Exponent {
    numerator: i64,
    denominator: i64,
    span: Span,
}

impl Exponent {
    /// Scaled numerator (`exponent * EXPONENT_SCALE`), rejected when not integral.
    fn scaled(&self) -> syn::Result<i64> {
        let out_of_range = || {
            syn::Error::new(
                self.span,
                format!(
                    "exponent {}/{} is out of range",
                    self.numerator, self.denominator
                ),
            )
        };
        let product = self
            .numerator
            .checked_mul(EXPONENT_SCALE)
            .ok_or_else(out_of_range)?;
        if product % self.denominator != 0 {
            return Err(syn::Error::new(
                self.span,
                format!(
                    "exponent {}/{} is not a multiple of 1/{}",
                    self.numerator, self.denominator, EXPONENT_SCALE
                ),
            ));
        }
        let scaled = product / self.denominator;
        if scaled.abs() > MAX_SCALED {
            return Err(out_of_range());
        }
        Ok(scaled)
    }

    /// Name of the `typenum` integer alias for the scaled exponent.
    fn to_typenum(&self) -> syn::Result<Ident> {
        let scaled = self.scaled()?;
        let ident = match scaled {
            0 => format_ident!("Z0"),
            n if n > 0 => format_ident!("P{}", n.unsigned_abs()),
            n => format_ident!("N{}", n.unsigned_abs()),
        };
        Ok(ident)
    }
}

impl Parse for Exponent {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let span = input.span();
        let negative = input.parse::<Option<Token![-]>>()?.is_some();
        let numerator: i64 = input.parse::<LitInt>()?.base10_parse()?;

        let mut denominator = 1;
        if input.peek(Token![/]) {
            input.parse::<Token![/]>()?;
            let lit: LitInt = input.parse()?;
            denominator = lit.base10_parse()?;
            if denominator == 0 {
                return Err(syn::Error::new(lit.span(), "exponent denominator is zero"));
            }
        }

        Ok(Exponent {
            numerator: if negative { -numerator } else { numerator },
            denominator,
            span,
        })
    }
}

/// Parsed contents of a `quantity_type!` invocation.
struct QuantityType {
    attrs: Vec<Attribute>,
    exponents: [Exponent; 4],
    name: Ident,
}

impl Parse for QuantityType {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;

        let mass: Exponent = input.parse()?;
        input.parse::<Token![,]>()?;
        let length: Exponent = input.parse()?;
        input.parse::<Token![,]>()?;
        let time: Exponent = input.parse()?;
        input.parse::<Token![,]>()?;
        let angle: Exponent = input.parse()?;
        input.parse::<Token![,]>()?;
        let name: Ident = input.parse()?;

        // Consume trailing comma if present
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after quantity name"));
        }

        Ok(QuantityType {
            attrs,
            exponents: [mass, length, time, angle],
            name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::{quote, ToTokens};

    fn expand(tokens: TokenStream2) -> syn::Result<String> {
        let parsed: QuantityType = syn::parse2(tokens)?;
        quantity_type_impl(parsed).map(|t| t.to_string())
    }

    #[test]
    fn test_parse_integer_exponents() {
        let tokens = quote! { 0, 1, -2, 0, QAcceleration };
        let parsed: QuantityType = syn::parse2(tokens).unwrap();
        assert_eq!(parsed.name, "QAcceleration");
        assert_eq!(parsed.exponents[1].numerator, 1);
        assert_eq!(parsed.exponents[2].numerator, -2);
        assert_eq!(parsed.exponents[2].denominator, 1);
    }

    #[test]
    fn test_parse_fractional_exponent() {
        let tokens = quote! { 0, 1/2, -3/4, 0, QOdd };
        let parsed: QuantityType = syn::parse2(tokens).unwrap();
        assert_eq!(parsed.exponents[1].numerator, 1);
        assert_eq!(parsed.exponents[1].denominator, 2);
        assert_eq!(parsed.exponents[2].numerator, -3);
        assert_eq!(parsed.exponents[2].denominator, 4);
    }

    #[test]
    fn test_parse_keeps_doc_attributes() {
        let tokens = quote! {
            /// Jerk.
            0, 1, -3, 0, QJerk
        };
        let parsed: QuantityType = syn::parse2(tokens).unwrap();
        assert_eq!(parsed.attrs.len(), 1);
        assert!(parsed.attrs[0].path().is_ident("doc"));
    }

    #[test]
    fn test_parse_with_trailing_comma() {
        let tokens = quote! { 1, 0, 0, 0, QMass, };
        assert!(syn::parse2::<QuantityType>(tokens).is_ok());
    }

    #[test]
    fn test_parse_missing_name() {
        let tokens = quote! { 1, 0, 0, 0 };
        assert!(syn::parse2::<QuantityType>(tokens).is_err());
    }

    #[test]
    fn test_parse_too_many_exponents() {
        let tokens = quote! { 1, 0, 0, 0, 0, QMass };
        assert!(syn::parse2::<QuantityType>(tokens).is_err());
    }

    #[test]
    fn test_parse_zero_denominator() {
        let tokens = quote! { 1/0, 0, 0, 0, QBad };
        let err = syn::parse2::<QuantityType>(tokens).err().unwrap();
        assert!(err.to_string().contains("denominator is zero"));
    }

    #[test]
    fn test_parse_empty_input() {
        let tokens = quote! {};
        assert!(syn::parse2::<QuantityType>(tokens).is_err());
    }

    #[test]
    fn test_expand_scales_exponents() {
        let code = expand(quote! { 0, 0, -2, 1, QAngularAcceleration }).unwrap();
        assert!(code.contains("pub type QAngularAcceleration"));
        assert!(code.contains("crate :: Quantity < crate :: Dim <"));
        assert!(code.contains("crate :: typenum :: Z0"));
        assert!(code.contains("crate :: typenum :: N24"));
        assert!(code.contains("crate :: typenum :: P12"));
    }

    #[test]
    fn test_expand_fractional_exponent() {
        let code = expand(quote! { 0, 1/2, 0, 0, QRootLength }).unwrap();
        assert!(code.contains("crate :: typenum :: P6"));
    }

    #[test]
    fn test_expand_rejects_unrepresentable_fraction() {
        let err = expand(quote! { 0, 1/5, 0, 0, QFifth }).err().unwrap();
        assert!(err.to_string().contains("is not a multiple of 1/12"));
    }

    #[test]
    fn test_expand_rejects_out_of_range() {
        let err = expand(quote! { 0, 90, 0, 0, QHuge }).err().unwrap();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_expand_rejects_overflowing_literal() {
        let err = expand(quote! { 0, 1000000000000000000, 0, 0, QHuge }).err().unwrap();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_expand_is_valid_type_alias() {
        let parsed: QuantityType =
            syn::parse2(quote! { -1, 1/3, -2, 1, QMixed }).unwrap();
        let item: syn::ItemType = syn::parse2(quantity_type_impl(parsed).unwrap()).unwrap();
        assert_eq!(item.ident, "QMixed");

        let ty = item.ty.to_token_stream().to_string();
        let parsed_ty = syn::parse_str::<syn::Type>(&ty).unwrap();
        let code = parsed_ty.to_token_stream().to_string();
        assert!(code.contains("crate :: typenum :: N12"));
        assert!(code.contains("crate :: typenum :: P4"));
        assert!(code.contains("crate :: typenum :: N24"));
        assert!(code.contains("crate :: typenum :: P12"));
    }

    #[test]
    fn test_expand_error_path_is_compile_error() {
        let parsed: QuantityType = syn::parse2(quote! { 0, 1/7, 0, 0, QSeventh }).unwrap();
        let err = quantity_type_impl(parsed).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
