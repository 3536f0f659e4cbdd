//! Proc-macro entry points for state containers.
//!
//! The actual pipeline lives in `state-containers-macros-impl` so it can be
//! tested as a plain library; this crate only crosses the proc-macro
//! boundary.

/// Generates one accessor pair per `#[state_field]`-marked field.
///
/// Each marked field `_foo: T` gets `foo(&self) -> &T` and
/// `set_foo(&mut self, value: T)`; the setter assigns and then calls
/// `StateContainer::notify_value_changed(self, "Foo")`. The containing type
/// must implement the `StateContainer` trait from the `state-containers`
/// crate.
#[proc_macro_derive(StateContainer, attributes(state_field))]
pub fn derive_state_container(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    state_containers_macros_impl::expand_derive(input.into()).into()
}
