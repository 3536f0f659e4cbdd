//! Discovery pass: walk the syntax of each compilation unit and collect
//! every named struct field carrying the `#[state_field]` marker.

use proc_macro2::TokenStream;
use syn::visit::{self, Visit};

use crate::member::{CandidateMember, OwningType};

/// Bare marker attribute name.
pub const MARKER_NAME: &str = "state_field";
/// Crate segment of the fully qualified marker path.
pub const MARKER_CRATE: &str = "state_containers";

/// Scans a set of compilation units and returns the flat candidate list.
///
/// A unit that does not parse as a file of items contributes zero members;
/// the pass never fails as a whole over one bad unit.
pub fn discover(units: &[TokenStream]) -> Vec<CandidateMember> {
    let mut members = Vec::new();
    for unit in units {
        if let Ok(file) = syn::parse2::<syn::File>(unit.clone()) {
            scan_file(&file, &mut members);
        }
    }
    members
}

/// Scans one already-parsed unit, appending candidates in declaration order.
pub fn scan_file(file: &syn::File, members: &mut Vec<CandidateMember>) {
    let mut collector = MarkedFieldCollector {
        modules: Vec::new(),
        members,
    };
    collector.visit_file(file);
}

/// Does this attribute resolve to the marker?
///
/// Exact path comparison only: `state_field` or the fully qualified
/// `state_containers::state_field`.
fn is_marker(attr: &syn::Attribute) -> bool {
    let path = attr.path();
    if path.is_ident(MARKER_NAME) {
        return true;
    }
    path.segments.len() == 2
        && path.segments[0].ident == MARKER_CRATE
        && path.segments[1].ident == MARKER_NAME
}

struct MarkedFieldCollector<'a> {
    modules: Vec<syn::Ident>,
    members: &'a mut Vec<CandidateMember>,
}

impl<'ast> Visit<'ast> for MarkedFieldCollector<'_> {
    fn visit_item_mod(&mut self, node: &'ast syn::ItemMod) {
        self.modules.push(node.ident.clone());
        visit::visit_item_mod(self, node);
        self.modules.pop();
    }

    fn visit_item_struct(&mut self, node: &'ast syn::ItemStruct) {
        // Only named fields can own an accessor pair; tuple and unit
        // structs have no data member names to derive from.
        let syn::Fields::Named(fields) = &node.fields else {
            return;
        };
        for field in &fields.named {
            // Fast path: most fields carry no attributes at all.
            if field.attrs.is_empty() {
                continue;
            }
            if !field.attrs.iter().any(is_marker) {
                continue;
            }
            let Some(ident) = field.ident.clone() else {
                continue;
            };
            self.members.push(CandidateMember {
                owner: OwningType {
                    modules: self.modules.clone(),
                    name: node.ident.clone(),
                    generics: node.generics.clone(),
                },
                span: ident.span(),
                ty: field.ty.clone(),
                ident,
            });
        }
    }
}
