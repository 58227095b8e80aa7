//! Expansion entry points for the `FlagBind` and `Bindable` derives.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_quote};

pub(crate) mod generate;
pub(crate) mod parse;

/// Expands `#[derive(FlagBind)]`.
///
/// Generic structs get a `Bindable` bound on every bound field type.
pub(crate) fn flag_bind(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    let krate = parsed.attrs.runtime_path();

    let mut generics = parsed.generics.clone();
    if generics.type_params().next().is_some() {
        let predicates = &mut generics.make_where_clause().predicates;
        for field in &parsed.fields {
            let ty = &field.ty;
            predicates.push(parse_quote!(#ty: #krate::Bindable));
        }
    }

    let flag_bind = generate::flag_bind_impl(&parsed, &generics, &krate);
    let bindable = generate::bindable_impl(&parsed.ident, &generics, &krate);
    Ok(quote! {
        #flag_bind
        #bindable
    })
}

/// Expands `#[derive(Bindable)]`.
pub(crate) fn bindable(input: &DeriveInput) -> syn::Result<TokenStream> {
    let attrs = parse::parse_struct_attrs(&input.attrs)?;
    let krate = attrs.runtime_path();

    let ident = &input.ident;
    let mut generics = input.generics.clone();
    if generics.type_params().next().is_some() {
        let (_, ty_generics, _) = input.generics.split_for_impl();
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#ident #ty_generics: #krate::FlagBind));
    }
    Ok(generate::bindable_impl(ident, &generics, &krate))
}
