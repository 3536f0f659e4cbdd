//! Parsed model shared by the pipeline stages.

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};

/// A data member that carries the `#[state_field]` marker.
///
/// One per physical field declaration, immutable once discovered.
#[derive(Debug, Clone)]
pub struct CandidateMember {
    /// Logical identity of the type declaring the field.
    pub owner: OwningType,
    /// The field identifier exactly as declared, marker underscores included.
    pub ident: syn::Ident,
    /// The field's declared type; spliced into generated code unchanged.
    pub ty: syn::Type,
    /// The declaration site, used to span diagnostics.
    pub span: Span,
}

/// Logical identity of a type owning marked members: the module path the
/// declaration was found under plus the type name.
///
/// Two physical declarations with the same identity belong to the same
/// group, no matter which compilation unit they came from.
#[derive(Debug, Clone)]
pub struct OwningType {
    /// Enclosing module idents, outermost first. Empty at unit root.
    pub modules: Vec<syn::Ident>,
    /// The type name itself.
    pub name: syn::Ident,
    /// Generic parameters of the declaration, spliced back onto the
    /// emitted impl block. Not part of the grouping identity; fragments of
    /// one logical type must agree on them.
    pub generics: syn::Generics,
}

impl OwningType {
    /// The grouping key, e.g. `ui::panel::Widget`.
    pub fn key(&self) -> String {
        let mut key = String::new();
        for module in &self.modules {
            key.push_str(&module.to_string());
            key.push_str("::");
        }
        key.push_str(&self.name.to_string());
        key
    }
}

impl ToTokens for OwningType {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        for module in &self.modules {
            tokens.extend(quote! { #module :: });
        }
        let name = &self.name;
        tokens.extend(quote! { #name });
    }
}

impl std::fmt::Display for OwningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.key())
    }
}

/// All marked members of one owning type, in discovery order.
#[derive(Debug, Clone)]
pub struct OwningTypeGroup {
    /// The shared owning type.
    pub owner: OwningType,
    /// The members contributed by every physical declaration of the type.
    pub members: Vec<CandidateMember>,
}
