//! Sidebar is a navigation menu core: hierarchical menu trees, a single
//! active path per tree, keyboard traversal, and locale-aware titles.
//!
//! The crate is split in two layers, re-exported here:
//!
//! * [`core`] holds the passive data model: [`MenuTree`]s made of
//!   [`MenuSection`]s and [`MenuItem`]s, addressed by stable [`MenuId`]s.
//! * [`runtime`] drives it: a [`MenuController`] owns the named trees,
//!   consumes [`Notification`]s, and translates selections into
//!   [`Command`]s delivered to a host-provided [`CommandSink`].
//!
//! # Example
//!
//! ```
//! use sidebar::runtime::builtin;
//! use sidebar::{Command, Locale, Selection};
//!
//! let locale = Locale::from_pairs([("menuAllItems", "all items")]);
//! let mut controller =
//!     builtin::standard_controller(Vec::new(), locale, &["red".into()]);
//!
//! controller
//!     .select(Selection::item(builtin::ids::TRASH))
//!     .expect("trash is part of the stock menu");
//!
//! let commands = controller.into_sink();
//! assert!(matches!(commands[0], Command::SetFilter { .. }));
//! ```

pub use sidebar_core as core;
pub use sidebar_runtime as runtime;

pub use sidebar_core::{
    DisabledHint, FilterValue, Locale, LocaleText, MenuId, MenuItem, MenuOption, MenuSection,
    MenuTree, SectionFlags, Selectable, TreeKind,
};
pub use sidebar_runtime::{
    Command, CommandSink, LocaleBinder, MenuController, Notification, SelectError, Selection,
};
