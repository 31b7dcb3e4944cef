//! The menu tree data model of `sidebar`.
//!
//! This crate defines the building blocks of a hierarchical application
//! menu: [`MenuItem`]s grouped into [`MenuSection`]s grouped into
//! [`MenuTree`]s, with stable [`MenuId`]s, locale-aware titles, and a
//! uniform [`Selectable`] traversal capability.
//!
//! It contains no behavior beyond ordered storage and traversal; selection
//! semantics and command emission live in `sidebar_runtime`.

pub mod filter;
pub mod id;
pub mod item;
pub mod locale;
pub mod section;
pub mod tree;

pub use filter::FilterValue;
pub use id::MenuId;
pub use item::{DisabledHint, MenuItem, MenuOption};
pub use locale::{Locale, LocaleText, capitalize_first};
pub use section::{MenuSection, SectionFlags};
pub use tree::{MenuTree, Selectable, TreeKind};
