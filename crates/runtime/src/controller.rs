//! Selection and traversal over named menu trees.

use std::ops::ControlFlow;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::binder::LocaleBinder;
use crate::core::locale::Locale;
use crate::core::{MenuId, MenuItem, MenuTree, TreeKind};
use crate::error::SelectError;
use crate::event::{Command, CommandSink, Notification};

/// A selection request: a target node and, for items with mutually-exclusive
/// options, the chosen option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The node to activate.
    pub target: MenuId,
    /// Value of the option to activate on the target, if any.
    pub option: Option<SmolStr>,
}

impl Selection {
    /// Selects a node without an option.
    #[must_use]
    pub fn item(target: MenuId) -> Self {
        Self {
            target,
            option: None,
        }
    }

    /// Selects a node together with one of its options.
    #[must_use]
    pub fn with_option(target: MenuId, option: impl Into<SmolStr>) -> Self {
        Self {
            target,
            option: Some(option.into()),
        }
    }
}

/// Owns the named menu trees, tracks which one is displayed, and translates
/// selections into outward commands.
///
/// All operations are synchronous and run to completion on the calling
/// thread; a selection's active-path cleanup and re-activation are one
/// atomic step from the caller's point of view. Hosts that dispatch UI
/// events off the main thread must serialize calls into the controller.
#[derive(Debug)]
pub struct MenuController<S> {
    trees: FxHashMap<SmolStr, MenuTree>,
    current: Option<SmolStr>,
    binder: LocaleBinder,
    swatch_item: Option<MenuId>,
    sink: S,
}

impl<S: CommandSink> MenuController<S> {
    /// Creates a controller with no trees and an empty locale.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            trees: FxHashMap::default(),
            current: None,
            binder: LocaleBinder::default(),
            swatch_item: None,
            sink,
        }
    }

    /// Registers a tree under a name, rebinding its locale-derived titles.
    ///
    /// The first registered tree becomes current.
    pub fn insert_tree(&mut self, name: impl Into<SmolStr>, mut tree: MenuTree) {
        let name = name.into();
        self.binder.rebind(&mut tree);
        if self.current.is_none() {
            self.current = Some(name.clone());
        }
        let _ = self.trees.insert(name, tree);
    }

    /// Swaps which named tree is current.
    ///
    /// Selection state of the newly current tree is whatever it was last
    /// left at; no command is emitted.
    pub fn set_current_tree(&mut self, name: &str) -> Result<(), SelectError> {
        if !self.trees.contains_key(name) {
            return Err(SelectError::UnknownTree(name.into()));
        }
        log::debug!("menu tree `{name}` is now current");
        self.current = Some(name.into());
        Ok(())
    }

    /// The currently displayed tree.
    #[must_use]
    pub fn current_tree(&self) -> Option<&MenuTree> {
        self.trees.get(self.current.as_ref()?)
    }

    /// The tree registered under the given name.
    #[must_use]
    pub fn tree(&self, name: &str) -> Option<&MenuTree> {
        self.trees.get(name)
    }

    /// Declares which item carries the color swatch options.
    ///
    /// The controller keeps only the id and resolves it through the tree on
    /// each selection; there is no second copy of the item.
    pub fn set_swatch_item(&mut self, id: MenuId) {
        self.swatch_item = Some(id);
    }

    /// Replaces the locale table and rebinds every tree.
    pub fn set_locale(&mut self, locale: Locale) {
        self.binder.set_locale(locale);
        self.rebind_all();
    }

    /// The current locale table.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        self.binder.locale()
    }

    /// Dispatches an inbound notification.
    pub fn handle(&mut self, notification: Notification) -> Result<(), SelectError> {
        match notification {
            Notification::SetLocale => {
                self.rebind_all();
                Ok(())
            }
            Notification::SelectNextMenuItem => self.select_next(),
            Notification::SelectPreviousMenuItem => self.select_previous(),
        }
    }

    /// Activates a node of the current tree and emits the matching command.
    ///
    /// The entire current tree's active path is cleared first (recursive,
    /// depth-first), then the target becomes active. On the filter tree the
    /// selected option (if any) becomes the active one among its siblings,
    /// the swatch item's derived display class is recomputed, and exactly
    /// one `set-filter` command is emitted. On the settings tree exactly one
    /// `set-page` command is emitted.
    ///
    /// Other trees are never touched: selecting in one tree cannot change
    /// active state in another.
    pub fn select(&mut self, selection: Selection) -> Result<(), SelectError> {
        let swatch_item = self.swatch_item;
        let tree = current_tree_mut(&mut self.trees, self.current.as_ref())?;
        let kind = tree.kind();

        let command = match kind {
            TreeKind::Filter => prepare_filter_command(tree, &selection)?,
            TreeKind::Settings => prepare_page_command(tree, &selection)?,
        };

        // All fallible checks passed; mutate in one step.
        tree.clear_active();
        let activated = tree.set_active(selection.target);
        debug_assert!(activated, "validated target must activate");

        if kind == TreeKind::Filter {
            apply_option(tree, &selection);
            apply_swatch_class(tree, &selection, swatch_item);
        }

        log::debug!("selected {:?}: emitting {command:?}", selection.target);
        self.sink.emit(command);
        Ok(())
    }

    /// Moves the selection to the next selectable node in document order.
    ///
    /// The whole hierarchy (sections, items, nested items) is treated as one
    /// flattened sequence; hidden sections are absent from it. When the
    /// active node has no successor the selection stays put: there is no
    /// wrap-around.
    pub fn select_next(&mut self) -> Result<(), SelectError> {
        let tree = self.require_current()?;

        let mut seen_active: Option<MenuId> = None;
        let mut target: Option<MenuId> = None;
        let _ = tree.visit(&mut |node| {
            if node.is_selectable() {
                if let Some(active) = seen_active {
                    if node.menu_id() != active {
                        target = Some(node.menu_id());
                        return ControlFlow::Break(());
                    }
                }
            }
            if node.is_active() {
                seen_active = Some(node.menu_id());
            }
            ControlFlow::Continue(())
        });

        match target {
            Some(id) => self.select(Selection::item(id)),
            None => Ok(()),
        }
    }

    /// Moves the selection to the previous selectable node in document
    /// order.
    ///
    /// Symmetric to [`MenuController::select_next`]: hidden sections are
    /// absent, and an active node without a predecessor stays selected.
    pub fn select_previous(&mut self) -> Result<(), SelectError> {
        let tree = self.require_current()?;

        let mut previous: Option<MenuId> = None;
        let mut target: Option<MenuId> = None;
        let _ = tree.visit(&mut |node| {
            if node.is_active() {
                target = previous;
                return ControlFlow::Break(());
            }
            if node.is_selectable() {
                previous = Some(node.menu_id());
            }
            ControlFlow::Continue(())
        });

        match target {
            Some(id) => self.select(Selection::item(id)),
            None => Ok(()),
        }
    }

    /// Replaces the item list of a dynamic section.
    ///
    /// An empty list puts the section's placeholder back in; new items get
    /// their locale-derived titles bound immediately.
    pub fn set_section_items(
        &mut self,
        tree_name: &str,
        section: MenuId,
        items: Vec<MenuItem>,
    ) -> Result<(), SelectError> {
        let tree = self
            .trees
            .get_mut(tree_name)
            .ok_or_else(|| SelectError::UnknownTree(tree_name.into()))?;
        let target = tree
            .find_section_mut(section)
            .ok_or(SelectError::ItemNotFound(section))?;
        target.set_items(items);
        self.binder.rebind(tree);
        Ok(())
    }

    /// Consumes the controller, returning the command sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn require_current(&self) -> Result<&MenuTree, SelectError> {
        let name = self.current.as_ref().ok_or(SelectError::NoCurrentTree)?;
        self.trees
            .get(name)
            .ok_or_else(|| SelectError::UnknownTree(name.clone()))
    }

    fn rebind_all(&mut self) {
        let binder = &self.binder;
        for tree in self.trees.values_mut() {
            binder.rebind(tree);
        }
    }
}

fn current_tree_mut<'a>(
    trees: &'a mut FxHashMap<SmolStr, MenuTree>,
    current: Option<&SmolStr>,
) -> Result<&'a mut MenuTree, SelectError> {
    let name = current.ok_or(SelectError::NoCurrentTree)?;
    trees
        .get_mut(name)
        .ok_or_else(|| SelectError::UnknownTree(name.clone()))
}

/// Validates a filter-tree selection and builds its command.
///
/// Runs before any mutation so a failed selection leaves the tree as it
/// was.
fn prepare_filter_command(
    tree: &MenuTree,
    selection: &Selection,
) -> Result<Command, SelectError> {
    let node = tree
        .find(selection.target)
        .ok_or(SelectError::ItemNotFound(selection.target))?;
    let key = node
        .filter_key()
        .cloned()
        .ok_or(SelectError::NotSelectable(selection.target))?;

    let value = match &selection.option {
        Some(option_value) => {
            let item = tree
                .find_item(selection.target)
                .ok_or(SelectError::ItemNotFound(selection.target))?;
            let option = item
                .options
                .iter()
                .find(|option| option.value == *option_value)
                .ok_or_else(|| SelectError::OptionNotFound {
                    item: selection.target,
                    value: option_value.clone(),
                })?;
            Some(option.filter_value.clone())
        }
        None => node.filter_value().cloned(),
    };

    Ok(Command::SetFilter { key, value })
}

/// Validates a settings-tree selection and builds its command.
fn prepare_page_command(tree: &MenuTree, selection: &Selection) -> Result<Command, SelectError> {
    let node = tree
        .find(selection.target)
        .ok_or(SelectError::ItemNotFound(selection.target))?;
    let page = node
        .page()
        .cloned()
        .ok_or(SelectError::NotSelectable(selection.target))?;

    Ok(Command::SetPage {
        page,
        file: node.file().cloned(),
    })
}

/// Marks the selected option active and clears its siblings.
fn apply_option(tree: &mut MenuTree, selection: &Selection) {
    if let Some(option_value) = &selection.option {
        if let Some(item) = tree.find_item_mut(selection.target) {
            let _ = item.activate_option(option_value);
        }
    }
}

/// Recomputes the swatch item's derived display class.
///
/// Selecting the swatch item with an option paints the class after that
/// option; any other filter-tree selection clears both the class and the
/// option flags.
fn apply_swatch_class(tree: &mut MenuTree, selection: &Selection, swatch_item: Option<MenuId>) {
    let Some(swatch_id) = swatch_item else {
        return;
    };
    let Some(swatch) = tree.find_item_mut(swatch_id) else {
        return;
    };

    match &selection.option {
        Some(value) if selection.target == swatch_id => {
            swatch.style_class = Some(SmolStr::from(format!("{value}-color")));
        }
        _ => {
            swatch.style_class = None;
            swatch.clear_options();
        }
    }
}
