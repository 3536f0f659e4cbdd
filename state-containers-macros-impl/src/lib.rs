//! Generation pipeline behind the `StateContainer` derive macro.
//!
//! The pipeline is a pure, single-pass transformation: discovery walks the
//! syntax of the supplied compilation units and collects `#[state_field]`
//! marked fields, grouping joins them by owning-type logical identity, and
//! emission renders one `impl` fragment per owning type with an accessor
//! pair per member. Nothing is cached between invocations; the same input
//! always renders the same text.
//!
//! It lives outside the proc-macro crate so every stage can be exercised as
//! a plain library, including the multi-unit case a single derive
//! invocation never sees.

#![warn(missing_docs)]

use proc_macro2::TokenStream;

mod member;
pub use member::*;

mod discover;
pub use discover::*;

mod group;
pub use group::*;

mod name;
pub use name::*;

mod emit;
pub use emit::*;

/// Runs the full pipeline over a set of compilation units.
///
/// Returns one fragment per owning type with at least one marked member.
/// Units that fail to parse contribute nothing; the pass never aborts.
pub fn generate(units: &[TokenStream]) -> Vec<GeneratedFragment> {
    group_by_owner(discover(units))
        .iter()
        .map(emit_group)
        .collect()
}

/// Derive-macro entry point: the single-unit case.
///
/// The item under expansion must parse; a parse failure here is surfaced as
/// a `compile_error!` rather than swallowed, since the input is exactly the
/// item the user wrote. A struct with no marked fields expands to nothing.
pub fn expand_derive(input: TokenStream) -> TokenStream {
    let file = match syn::parse2::<syn::File>(input) {
        Ok(file) => file,
        Err(err) => return err.to_compile_error(),
    };
    let mut members = Vec::new();
    scan_file(&file, &mut members);

    let mut output = TokenStream::new();
    for group in group_by_owner(members) {
        output.extend(emit_group(&group).tokens);
    }
    output
}
