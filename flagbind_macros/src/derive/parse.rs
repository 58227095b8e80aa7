//! Parsing of `#[flag(...)]` attributes and struct input.

use heck::ToUpperCamelCase;
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    Attribute, Data, DeriveInput, Expr, ExprLit, Fields, GenericArgument, Lit, LitStr, Meta,
    PathArguments, Token, Type, Visibility, parenthesized,
};

/// Struct-level `#[flag(...)]` metadata.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    pub crate_path: Option<syn::Path>,
    pub overrides: Vec<OverrideAttr>,
}

impl StructAttrs {
    /// Path of the runtime crate in generated code; `#[flag(crate = "...")]`
    /// renames it for callers that depend on `flagbind` under another name.
    pub(crate) fn runtime_path(&self) -> TokenStream {
        self.crate_path
            .as_ref()
            .map_or_else(|| quote! { flagbind }, |path| quote! { #path })
    }
}

/// One `#[flag(override = "...", use = "...")]` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct OverrideAttr {
    pub tag: String,
    pub usage: Vec<String>,
}

/// Field-level `#[flag ...]` metadata.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FieldAttrs {
    pub tag: Option<String>,
    pub usage: Vec<String>,
    pub embed: bool,
}

/// A public field handed to the walker.
#[derive(Clone)]
pub(crate) struct BoundField {
    pub ident: syn::Ident,
    pub ty: Type,
    /// `CamelCase` source of the derived flag name.
    pub name: String,
    pub attrs: FieldAttrs,
}

/// Everything the `FlagBind` derive needs from its input.
pub(crate) struct FlagBindInput {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub attrs: StructAttrs,
    pub fields: Vec<BoundField>,
}

/// Gathers the struct identifier, its public fields and all attribute
/// metadata in one pass.
///
/// Unit structs are accepted and bind nothing. Fields without `pub`
/// visibility are left out.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<FlagBindInput> {
    let attrs = parse_struct_attrs(&input.attrs)?;
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "FlagBind requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "FlagBind can only be derived for structs",
            ));
        }
    };

    let mut bound = Vec::new();
    for field in fields {
        let field_attrs = parse_field_attrs(&field.attrs)?;
        if !matches!(field.vis, Visibility::Public(_)) {
            continue;
        }
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        let name = name_source(&ident, &field.ty, field_attrs.embed);
        bound.push(BoundField {
            ident,
            ty: field.ty.clone(),
            name,
            attrs: field_attrs,
        });
    }

    Ok(FlagBindInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        attrs,
        fields: bound,
    })
}

/// Extracts struct-level `#[flag(...)]` metadata.
///
/// Recognised keys are `crate`, `override` and `use`. Each attribute holding
/// an `override` produces one entry; `use` values in the same attribute
/// extend that entry's usage. Unknown keys are discarded.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("flag")) {
        let mut override_tag = None;
        let mut usage = Vec::new();
        attr.parse_nested_meta(|meta| {
            match meta.path.get_ident().map(ToString::to_string).as_deref() {
                Some("crate") => {
                    let s = lit_str(&meta, "crate")?;
                    let path: syn::Path =
                        syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                    out.crate_path = Some(path);
                }
                Some("override") => override_tag = Some(lit_str(&meta, "override")?.value()),
                Some("use") => usage.push(lit_str(&meta, "use")?.value()),
                _ => discard_unknown(&meta)?,
            }
            Ok(())
        })?;
        match override_tag {
            Some(tag) => out.overrides.push(OverrideAttr { tag, usage }),
            None if !usage.is_empty() => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "`use` on a struct requires `override`",
                ));
            }
            None => {}
        }
    }
    Ok(out)
}

/// Extracts field-level metadata from `#[flag = "..."]` and
/// `#[flag(tag = "...", use = "...", embed)]`.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("flag")) {
        match &attr.meta {
            Meta::NameValue(pair) => {
                let Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) = &pair.value
                else {
                    return Err(syn::Error::new_spanned(&pair.value, "flag tag must be a string"));
                };
                set_tag(&mut out, s)?;
            }
            Meta::List(_) => attr.parse_nested_meta(|meta| {
                match meta.path.get_ident().map(ToString::to_string).as_deref() {
                    Some("tag") => set_tag(&mut out, &lit_str(&meta, "tag")?)?,
                    Some("use") => out.usage.push(lit_str(&meta, "use")?.value()),
                    Some("embed") => out.embed = true,
                    _ => discard_unknown(&meta)?,
                }
                Ok(())
            })?,
            Meta::Path(_) => {}
        }
    }
    Ok(out)
}

fn set_tag(out: &mut FieldAttrs, tag: &LitStr) -> syn::Result<()> {
    if out.tag.is_some() {
        return Err(syn::Error::new(tag.span(), "duplicate flag tag"));
    }
    out.tag = Some(tag.value());
    Ok(())
}

fn lit_str(meta: &syn::meta::ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    let literal = meta.value()?.parse::<Lit>()?;
    match literal {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(other.span(), format!("{key} must be a string"))),
    }
}

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &syn::meta::ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<proc_macro2::TokenStream>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// `CamelCase` name source: the field identifier, or the type name for
/// embedded fields.
fn name_source(ident: &syn::Ident, ty: &Type, embed: bool) -> String {
    if embed && let Some(type_name) = base_type_name(ty) {
        return type_name;
    }
    ident.unraw().to_string().to_upper_camel_case()
}

/// Last path segment of `ty`, looking through `Option` and `Box`.
fn base_type_name(ty: &Type) -> Option<String> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident == "Option" || segment.ident == "Box" {
        if let PathArguments::AngleBracketed(args) = &segment.arguments
            && let Some(GenericArgument::Type(inner)) = args.args.first()
        {
            return base_type_name(inner);
        }
        return None;
    }
    Some(segment.ident.unraw().to_string())
}
