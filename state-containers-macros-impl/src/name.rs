//! Name derivation: field name to accessor names, deterministic and
//! stateless.

use proc_macro2::{Ident, Span};
use quote::format_ident;

/// Property name used when a field name is nothing but marker characters.
pub const PLACEHOLDER: &str = "Prop";

/// The names derived for one accessor pair.
#[derive(Debug, Clone)]
pub struct AccessorNames {
    /// The public property name passed to the notification hook, e.g.
    /// `IntValue` for a field `_int_value`.
    pub property: String,
    /// Read accessor method name, e.g. `int_value`.
    pub getter: Ident,
    /// Write accessor method name, e.g. `set_int_value`.
    pub setter: Ident,
}

/// Derives the accessor names for a field.
///
/// Leading and trailing underscores are stripped (a leading `r#` as well).
/// A name that strips to nothing usable — empty, a leading digit, or a
/// keyword no raw identifier can carry — falls back to [`PLACEHOLDER`].
/// Otherwise the property name is the PascalCase rendering of the stripped
/// name and the method names keep the stripped name as-is.
pub fn accessor_names(field: &Ident) -> AccessorNames {
    let raw = field.to_string();
    let stripped = raw.trim_start_matches("r#").trim_matches('_');
    let Some(getter) = method_ident(stripped, field.span()) else {
        return AccessorNames {
            property: PLACEHOLDER.to_string(),
            getter: Ident::new("prop", field.span()),
            setter: Ident::new("set_prop", field.span()),
        };
    };
    AccessorNames {
        property: pascal_case(stripped),
        getter,
        setter: format_ident!("set_{}", stripped, span = field.span()),
    }
}

/// Stripping can expose a keyword (`_type` -> `type`), which becomes a raw
/// identifier, or something no identifier can carry at all (`2` from `_2`,
/// `self` from `_self`), which yields `None`.
fn method_ident(base: &str, span: Span) -> Option<Ident> {
    if syn::parse_str::<Ident>(base).is_ok() {
        return Some(Ident::new(base, span));
    }
    let rawable = !base.is_empty()
        && !base.starts_with(|c: char| c.is_ascii_digit())
        && !matches!(base, "self" | "Self" | "super" | "crate" | "_");
    rawable.then(|| Ident::new_raw(base, span))
}

/// PascalCase rendering: underscores removed, first character of each
/// underscore-separated word upper-cased, the rest of each word left
/// unchanged.
fn pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut start_of_word = true;
    for ch in name.chars() {
        if ch == '_' {
            start_of_word = true;
        } else if start_of_word {
            out.extend(ch.to_uppercase());
            start_of_word = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::format_ident;

    fn property(name: &str) -> String {
        accessor_names(&format_ident!("{}", name)).property
    }

    #[test]
    fn strips_marker_characters_from_both_ends() {
        assert_eq!(property("_x"), "X");
        assert_eq!(property("__x"), "X");
        assert_eq!(property("x_"), "X");
    }

    #[test]
    fn all_marker_name_falls_back_to_placeholder() {
        let names = accessor_names(&format_ident!("__"));
        assert_eq!(names.property, "Prop");
        assert_eq!(names.getter, "prop");
        assert_eq!(names.setter, "set_prop");
    }

    #[test]
    fn unusable_stripped_names_fall_back_to_placeholder() {
        // Stripping leaves a digit or a keyword that cannot even be raw;
        // these are all valid field names and must not panic.
        for field in ["_2", "_self", "_super", "_crate", "_Self"] {
            let names = accessor_names(&format_ident!("{}", field));
            assert_eq!(names.property, "Prop", "for field `{field}`");
            assert_eq!(names.getter, "prop");
            assert_eq!(names.setter, "set_prop");
        }
    }

    #[test]
    fn already_capitalized_name_is_unchanged() {
        assert_eq!(property("Value"), "Value");
    }

    #[test]
    fn property_names() {
        insta::assert_snapshot!(property("_int_value"), @"IntValue");
        insta::assert_snapshot!(property("string_value"), @"StringValue");
        insta::assert_snapshot!(property("_intValue"), @"IntValue");
        insta::assert_snapshot!(property("stringValue"), @"StringValue");
    }

    #[test]
    fn method_names_keep_stripped_form() {
        let names = accessor_names(&format_ident!("_int_value"));
        assert_eq!(names.getter, "int_value");
        assert_eq!(names.setter, "set_int_value");
    }

    #[test]
    fn keyword_after_stripping_becomes_raw() {
        let names = accessor_names(&format_ident!("_type"));
        assert_eq!(names.property, "Type");
        assert_eq!(names.getter.to_string(), "r#type");
        assert_eq!(names.setter, "set_type");
    }
}
