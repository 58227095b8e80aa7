//! Token generation for the derives.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;

use super::parse::{BoundField, FlagBindInput, OverrideAttr};

/// Builds the `FieldSpec` expression describing `field`.
pub(crate) fn field_spec(field: &BoundField, krate: &TokenStream) -> TokenStream {
    let ident = field.ident.unraw().to_string();
    let name = &field.name;
    let mut spec = quote! { #krate::FieldSpec::new(#ident, #name) };
    if let Some(tag) = &field.attrs.tag {
        spec = quote! { #spec.with_tag(#tag) };
    }
    if !field.attrs.usage.is_empty() {
        let usage = &field.attrs.usage;
        spec = quote! { #spec.with_usage(&[#(#usage),*]) };
    }
    if field.attrs.embed {
        spec = quote! { #spec.embedded() };
    }
    spec
}

fn override_call(entry: &OverrideAttr) -> TokenStream {
    let tag = &entry.tag;
    let usage = &entry.usage;
    quote! {
        __flagbind_walker.override_flag(#tag, &[#(#usage),*] as &[&str])?;
    }
}

/// Generates the `FlagBind` impl: one `Walker::field` call per bound field
/// in declaration order, then the struct-level overrides.
pub(crate) fn flag_bind_impl(
    input: &FlagBindInput,
    generics: &syn::Generics,
    krate: &TokenStream,
) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let members: Vec<_> = input.fields.iter().map(|field| &field.ident).collect();
    let bindings: Vec<_> = (0..input.fields.len())
        .map(|index| format_ident!("__flagbind_{}", index))
        .collect();
    let destructure = if members.is_empty() {
        quote! {}
    } else {
        quote! { let Self { #(#members: #bindings,)* .. } = self; }
    };
    let specs = input.fields.iter().map(|field| field_spec(field, krate));
    let overrides = input.attrs.overrides.iter().map(override_call);

    quote! {
        impl #impl_generics #krate::FlagBind for #ident #ty_generics #where_clause {
            fn flag_bind<'__flagbind>(
                &'__flagbind mut self,
                __flagbind_walker: &mut #krate::Walker<'_, '__flagbind>,
            ) -> ::core::result::Result<(), #krate::BindError> {
                #destructure
                #( __flagbind_walker.field(&#specs, #bindings)?; )*
                #( #overrides )*
                ::core::result::Result::Ok(())
            }
        }
    }
}

/// Generates a `Bindable` impl classifying the type as a nested struct.
pub(crate) fn bindable_impl(
    ident: &syn::Ident,
    generics: &syn::Generics,
    krate: &TokenStream,
) -> TokenStream {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    quote! {
        impl #impl_generics #krate::Bindable for #ident #ty_generics #where_clause {
            fn is_zero(&self) -> bool {
                false
            }

            fn target(&mut self) -> #krate::Target<'_> {
                #krate::Target::Struct(self)
            }
        }
    }
}
