//! Emission stage: synthesize one type-extension fragment per group.

use indexmap::IndexMap;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote, quote_spanned};

use crate::member::OwningTypeGroup;
use crate::name::accessor_names;

/// The synthesized source for one owning type: a single `impl` block with
/// one accessor pair per marked member.
///
/// Fragments are regenerated from scratch every pass and have no identity
/// beyond the owning type's name.
#[derive(Debug, Clone)]
pub struct GeneratedFragment {
    /// Name of the owning type, without module path.
    pub type_name: String,
    /// The fragment's source tokens.
    pub tokens: TokenStream,
}

impl GeneratedFragment {
    /// Conventional name for hosts that write fragments out as files.
    pub fn file_name(&self) -> String {
        format!("{}.generated", self.type_name)
    }
}

impl ToTokens for GeneratedFragment {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(self.tokens.clone());
    }
}

/// Emits the fragment for one group.
///
/// Accessor pairs appear in member order. The setter assigns first and then
/// calls the notification hook with the derived property name, on every
/// write, equal value or not. The member's declared type is used unchanged:
/// the getter borrows it, the setter takes it by value.
///
/// When two members derive the same property name, both pairs are still
/// emitted (the host compiler rejects the duplicate methods either way) and
/// a `compile_error!` naming both fields is placed ahead of the impl block
/// so the failure explains itself.
pub fn emit_group(group: &OwningTypeGroup) -> GeneratedFragment {
    let mut accessors = TokenStream::new();
    let mut errors = TokenStream::new();
    let mut seen: IndexMap<String, &syn::Ident> = IndexMap::new();

    for member in &group.members {
        let names = accessor_names(&member.ident);
        if let Some(first) = seen.get(&names.property) {
            let message = format!(
                "fields `{}` and `{}` of `{}` both derive the accessor name `{}`",
                first, member.ident, group.owner, names.property,
            );
            let span = member.span;
            errors.extend(quote_spanned! {span=>
                compile_error!(#message);
            });
        } else {
            seen.insert(names.property.clone(), &member.ident);
        }

        let field = &member.ident;
        let ty = &member.ty;
        let getter = &names.getter;
        let setter = &names.setter;
        let property = &names.property;
        accessors.extend(quote! {
            pub fn #getter(&self) -> &#ty {
                &self.#field
            }

            pub fn #setter(&mut self, value: #ty) {
                self.#field = value;
                ::state_containers::StateContainer::notify_value_changed(self, #property);
            }
        });
    }

    let owner = &group.owner;
    let (impl_generics, ty_generics, where_clause) = group.owner.generics.split_for_impl();
    GeneratedFragment {
        type_name: group.owner.name.to_string(),
        tokens: quote! {
            #errors
            impl #impl_generics #owner #ty_generics #where_clause {
                #accessors
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discover::discover;
    use crate::group::group_by_owner;
    use quote::quote;

    fn emit_one(unit: TokenStream) -> GeneratedFragment {
        let groups = group_by_owner(discover(&[unit]));
        assert_eq!(groups.len(), 1);
        emit_group(&groups[0])
    }

    // Token-spacing in `to_string` depends on where the tokens came from
    // (`>>` vs `> >`), so expected output is compared structurally.
    fn assert_same_items(actual: &TokenStream, expected: TokenStream) {
        let actual: syn::File = syn::parse2(actual.clone()).expect("fragment parses");
        let expected: syn::File = syn::parse2(expected).expect("expectation parses");
        assert_eq!(actual, expected);
    }

    #[test]
    fn emits_accessor_pair_with_declared_type() {
        let frag = emit_one(quote! {
            struct Widget {
                #[state_field]
                _width: Option<Vec<u32>>,
            }
        });
        let expected = quote! {
            impl Widget {
                pub fn width(&self) -> &Option<Vec<u32>> {
                    &self._width
                }

                pub fn set_width(&mut self, value: Option<Vec<u32>>) {
                    self._width = value;
                    ::state_containers::StateContainer::notify_value_changed(self, "Width");
                }
            }
        };
        assert_same_items(&frag.tokens, expected);
    }

    #[test]
    fn owner_path_is_fully_qualified() {
        let frag = emit_one(quote! {
            mod ui {
                struct Gauge {
                    #[state_field]
                    level: f32,
                }
            }
        });
        assert_eq!(frag.type_name, "Gauge");
        assert!(frag.tokens.to_string().contains("impl ui :: Gauge"));
    }

    #[test]
    fn generics_are_carried_onto_the_impl() {
        let frag = emit_one(quote! {
            struct Holder<T: Clone> {
                #[state_field]
                _inner: T,
            }
        });
        let expected = quote! {
            impl<T: Clone> Holder<T> {
                pub fn inner(&self) -> &T {
                    &self._inner
                }

                pub fn set_inner(&mut self, value: T) {
                    self._inner = value;
                    ::state_containers::StateContainer::notify_value_changed(self, "Inner");
                }
            }
        };
        assert_same_items(&frag.tokens, expected);
    }

    #[test]
    fn file_name_follows_convention() {
        let frag = emit_one(quote! {
            struct Widget {
                #[state_field]
                _width: u32,
            }
        });
        assert_eq!(frag.file_name(), "Widget.generated");
    }

    #[test]
    fn colliding_names_emit_both_pairs_and_a_diagnostic() {
        let frag = emit_one(quote! {
            struct Widget {
                #[state_field]
                _value: i32,
                #[state_field]
                value: i32,
            }
        });
        let rendered = frag.tokens.to_string();
        assert_eq!(rendered.matches("fn set_value").count(), 2);
        assert!(rendered.contains("compile_error"));
        assert!(rendered.contains("`_value` and `value`"));
    }

    #[test]
    fn emission_is_deterministic() {
        let unit = quote! {
            struct Widget {
                #[state_field]
                _width: u32,
                #[state_field]
                _height: u32,
            }
        };
        let first = emit_one(unit.clone());
        let second = emit_one(unit);
        assert_eq!(first.tokens.to_string(), second.tokens.to_string());
    }
}
