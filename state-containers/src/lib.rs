//! Observable state containers.
//!
//! A state container is an ordinary struct whose marked fields get a
//! generated accessor pair: a borrowing getter and a setter that assigns the
//! new value and then reports the change to [`StateContainer::notify_value_changed`].
//!
//! ```
//! use state_containers::StateContainer;
//!
//! #[derive(Default, StateContainer)]
//! struct Settings {
//!     #[state_field]
//!     _volume: u32,
//!     dirty: Vec<String>,
//! }
//!
//! impl StateContainer for Settings {
//!     fn notify_value_changed(&mut self, changed: &str) {
//!         self.dirty.push(changed.to_string());
//!     }
//! }
//!
//! let mut settings = Settings::default();
//! settings.set_volume(11);
//! assert_eq!(*settings.volume(), 11);
//! assert_eq!(settings.dirty, ["Volume"]);
//! ```
//!
//! The `#[state_field]` marker is only meaningful on named struct fields;
//! generation is driven entirely by its presence. A container with no marked
//! fields gets no generated code at all.

#![warn(missing_docs)]

pub use state_containers_macros::StateContainer;

/// The notification hook every state container must supply.
///
/// Generated setters call [`notify_value_changed`](Self::notify_value_changed)
/// once per write, after the underlying field has been assigned, passing the
/// derived accessor name (`"Volume"` for a field `_volume`). The call is
/// unconditional: writing a value equal to the current one still notifies.
///
/// There is deliberately no default body. What a change notification *means*
/// (publishing an event, flipping a dirty flag, scheduling a re-render) is
/// the consumer's business, not this crate's.
pub trait StateContainer {
    /// Called by every generated setter with the changed accessor's name.
    fn notify_value_changed(&mut self, changed: &str);
}
