//! Runtime layer of the sidebar menu: selection, keyboard traversal, locale
//! binding, and the stock menu layout.
//!
//! The [`core`] crate holds the passive data model (trees, sections, items).
//! This crate drives it: a [`MenuController`] owns the named trees, consumes
//! [`Notification`]s, and emits [`Command`]s into a host-provided
//! [`CommandSink`].

pub use sidebar_core as core;

pub mod binder;
pub mod builtin;
pub mod controller;
pub mod error;
pub mod event;


pub use binder::LocaleBinder;
pub use controller::{MenuController, Selection};
pub use error::SelectError;
pub use event::{Command, CommandSink, Notification};
