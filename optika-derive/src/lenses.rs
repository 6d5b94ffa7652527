//! Implementation of the `#[derive(Lenses)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, Generics, Ident, parse_macro_input};

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input))
}

fn expand(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;
    match &input.data {
        Data::Struct(data_struct) => generate_struct_lenses(name, &input.generics, &data_struct.fields),
        Data::Enum(_) => syn::Error::new_spanned(name, "Lenses can only be derived for structs, not enums.")
            .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(name, "Lenses cannot be derived for unions.").to_compile_error()
        }
    }
}

/// Generates one lens constructor per named field.
fn generate_struct_lenses(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let mut errors = Vec::new();
            let included: Vec<&Field> = named_fields
                .named
                .iter()
                .filter(|field| match is_skipped(field) {
                    Ok(skipped) => !skipped,
                    Err(error) => {
                        errors.push(error.to_compile_error());
                        false
                    }
                })
                .collect();
            if !errors.is_empty() {
                return quote! { #(#errors)* };
            }

            let lens_methods = included.into_iter().filter_map(|field| {
                let field_name = field.ident.as_ref()?;
                let field_type = &field.ty;
                let method_name = format_ident!("{}_lens", field_name);
                let documentation = format!("Returns a lens focusing on the `{field_name}` field.");

                Some(quote! {
                    #[doc = #documentation]
                    #[inline]
                    #[must_use]
                    pub fn #method_name() -> ::optika::optics::FieldLens<Self, #field_type>
                    where
                        #field_type: ::core::clone::Clone,
                    {
                        ::optika::optics::Lens::from_fns(
                            |source: &Self| ::core::clone::Clone::clone(&source.#field_name),
                            |mut source: Self, value: #field_type| {
                                source.#field_name = value;
                                source
                            },
                        )
                    }
                })
            });

            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#lens_methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs with named fields, not tuple structs.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "Lenses cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}

/// Reads `#[lens(skip)]`, which leaves a field without a lens. Fields whose
/// type is not `Clone` must be skipped.
fn is_skipped(field: &Field) -> syn::Result<bool> {
    let mut skipped = false;
    for attribute in field.attrs.iter().filter(|attribute| attribute.path().is_ident("lens")) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skipped = true;
                Ok(())
            } else {
                Err(meta.error("unsupported lens attribute; expected `skip`"))
            }
        })?;
    }
    Ok(skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use syn::parse_quote;

    fn expanded(input: &DeriveInput) -> String {
        expand(input).to_string()
    }

    #[rstest]
    fn generates_one_method_per_field() {
        let input: DeriveInput = parse_quote! {
            struct Point { x: i32, y: i32 }
        };
        let output = expanded(&input);
        assert!(output.contains("fn x_lens"));
        assert!(output.contains("fn y_lens"));
        assert!(output.contains(":: optika :: optics :: FieldLens < Self , i32 >"));
    }

    #[rstest]
    fn requires_clone_only_on_the_field_type() {
        let input: DeriveInput = parse_quote! {
            struct Tagged<T> { value: T, tag: String }
        };
        let output = expanded(&input);
        assert!(output.contains("impl < T > Tagged < T >"));
        assert!(output.contains("where T : :: core :: clone :: Clone"));
    }

    #[rstest]
    fn skipped_fields_get_no_lens() {
        let input: DeriveInput = parse_quote! {
            struct Session { user: String, #[lens(skip)] connection: Socket }
        };
        let output = expanded(&input);
        assert!(output.contains("fn user_lens"));
        assert!(!output.contains("connection_lens"));
        assert!(!output.contains("Socket : :: core :: clone :: Clone"));
    }

    #[rstest]
    fn unknown_lens_attribute_is_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Session { #[lens(rename)] user: String }
        };
        let output = expanded(&input);
        assert!(output.contains("compile_error"));
        assert!(output.contains("expected `skip`"));
    }

    #[rstest]
    fn keeps_generics_on_the_impl() {
        let input: DeriveInput = parse_quote! {
            struct Wrapper<T: Clone> where T: Default { inner: T }
        };
        let output = expanded(&input);
        assert!(output.contains("impl < T : Clone > Wrapper < T > where T : Default"));
    }

    #[rstest]
    #[case(parse_quote! { enum Shape { Circle(f64) } }, "not enums")]
    #[case(parse_quote! { struct Pair(i32, i32); }, "not tuple structs")]
    #[case(parse_quote! { struct Marker; }, "unit structs")]
    #[case(parse_quote! { union Bits { a: u32, b: f32 } }, "unions")]
    fn rejects_unsupported_items(#[case] input: DeriveInput, #[case] message: &str) {
        let output = expanded(&input);
        assert!(output.contains("compile_error"));
        assert!(output.contains(message));
    }
}
