//! Errors reported for caller misuse.
//!
//! None of these are fatal: the menu core never panics on bad input, and a
//! failed selection leaves the trees untouched.

use smol_str::SmolStr;

use crate::core::MenuId;

/// Error type for selection and tree-management operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// No tree is registered under the given name.
    #[error("unknown menu tree `{0}`")]
    UnknownTree(SmolStr),

    /// No tree has been made current yet.
    #[error("no menu tree is current")]
    NoCurrentTree,

    /// The current tree has no visible node with the given id.
    #[error("no visible menu node {0:?} in the current tree")]
    ItemNotFound(MenuId),

    /// The target item has no option with the given value.
    #[error("menu item {item:?} has no option `{value}`")]
    OptionNotFound {
        /// The item whose options were searched.
        item: MenuId,
        /// The requested option value.
        value: SmolStr,
    },

    /// The target node carries no command payload for the current tree
    /// (no filter criterion on the filter tree, no page on the settings
    /// tree).
    #[error("menu node {0:?} carries no command payload for the current tree")]
    NotSelectable(MenuId),
}
