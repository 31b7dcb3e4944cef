//! Menu trees and uniform depth-first traversal.
//!
//! A [`MenuTree`] is one addressable menu context (the filter menu or the
//! settings menu): an ordered sequence of sections, each holding items that
//! may nest arbitrarily deep. Sections and items both implement
//! [`Selectable`], so traversal code is written once against the capability
//! instead of against two node shapes.
//!
//! Traversal is an explicit depth-first walk with [`ControlFlow`] early
//! exit. Sections without [`SectionFlags::VISIBLE`](crate::section::SectionFlags::VISIBLE)
//! are treated as absent: the walk, the active-path cleanup, and id lookups
//! all skip their entire subtree.

use std::ops::ControlFlow;

use smol_str::SmolStr;

use crate::filter::FilterValue;
use crate::id::MenuId;
use crate::item::MenuItem;
use crate::section::MenuSection;

/// Which command protocol a tree's selections translate into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeKind {
    /// Selections emit `set-filter` commands.
    Filter,
    /// Selections emit `set-page` commands.
    Settings,
}

/// Common capability of sections and items.
///
/// Everything traversal needs to know about a node: its identity, whether it
/// lies on the active path, whether keyboard navigation may stop on it, and
/// the command payload it carries.
pub trait Selectable {
    /// Stable identifier of the node.
    fn menu_id(&self) -> MenuId;

    /// Whether the node lies on the active path.
    fn is_active(&self) -> bool;

    /// Whether keyboard traversal may land on the node.
    fn is_selectable(&self) -> bool;

    /// Filter criterion key carried by the node, if any.
    fn filter_key(&self) -> Option<&SmolStr>;

    /// Filter criterion value carried by the node, if any.
    fn filter_value(&self) -> Option<&FilterValue>;

    /// Settings page carried by the node, if any.
    fn page(&self) -> Option<&SmolStr>;

    /// File argument carried by the node, if any.
    fn file(&self) -> Option<&SmolStr>;
}

impl Selectable for MenuItem {
    fn menu_id(&self) -> MenuId {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn is_selectable(&self) -> bool {
        MenuItem::is_selectable(self)
    }

    fn filter_key(&self) -> Option<&SmolStr> {
        self.filter_key.as_ref()
    }

    fn filter_value(&self) -> Option<&FilterValue> {
        self.filter_value.as_ref()
    }

    fn page(&self) -> Option<&SmolStr> {
        self.page.as_ref()
    }

    fn file(&self) -> Option<&SmolStr> {
        self.file.as_ref()
    }
}

impl Selectable for MenuSection {
    fn menu_id(&self) -> MenuId {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn is_selectable(&self) -> bool {
        self.filter_key.is_some()
    }

    fn filter_key(&self) -> Option<&SmolStr> {
        self.filter_key.as_ref()
    }

    fn filter_value(&self) -> Option<&FilterValue> {
        self.filter_value.as_ref()
    }

    fn page(&self) -> Option<&SmolStr> {
        None
    }

    fn file(&self) -> Option<&SmolStr> {
        None
    }
}

/// One addressable menu context: an ordered sequence of [`MenuSection`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    kind: TreeKind,
    sections: Vec<MenuSection>,
}

impl MenuTree {
    /// Creates a new empty [`MenuTree`].
    #[must_use]
    pub fn new(kind: TreeKind) -> Self {
        Self {
            kind,
            sections: Vec::new(),
        }
    }

    /// Creates a [`MenuTree`] from sections.
    #[must_use]
    pub fn with_sections(kind: TreeKind, sections: Vec<MenuSection>) -> Self {
        Self { kind, sections }
    }

    /// The command protocol of this tree.
    #[must_use]
    pub fn kind(&self) -> TreeKind {
        self.kind
    }

    /// The sections of this tree, in document order.
    #[must_use]
    pub fn sections(&self) -> &[MenuSection] {
        &self.sections
    }

    /// Mutable access to the sections.
    pub fn sections_mut(&mut self) -> &mut Vec<MenuSection> {
        &mut self.sections
    }

    /// Appends a section.
    pub fn push_section(&mut self, section: MenuSection) {
        self.sections.push(section);
    }

    /// Walks every visible node depth-first in document order.
    ///
    /// Each section is visited before its items; each item before its nested
    /// children. Returning [`ControlFlow::Break`] from the visitor stops the
    /// walk immediately.
    pub fn visit<'a>(
        &'a self,
        visitor: &mut dyn FnMut(&'a dyn Selectable) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        for section in &self.sections {
            if !section.is_visible() {
                continue;
            }
            if visitor(section).is_break() {
                return ControlFlow::Break(());
            }
            for item in &section.items {
                if Self::visit_item(item, visitor).is_break() {
                    return ControlFlow::Break(());
                }
            }
        }
        ControlFlow::Continue(())
    }

    fn visit_item<'a>(
        item: &'a MenuItem,
        visitor: &mut dyn FnMut(&'a dyn Selectable) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        if visitor(item).is_break() {
            return ControlFlow::Break(());
        }
        for child in &item.items {
            if Self::visit_item(child, visitor).is_break() {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    /// Clears the active flag on every visible node, depth-first.
    pub fn clear_active(&mut self) {
        for section in &mut self.sections {
            if !section.is_visible() {
                continue;
            }
            section.active = false;
            for item in &mut section.items {
                Self::clear_item(item);
            }
        }
    }

    fn clear_item(item: &mut MenuItem) {
        item.active = false;
        for child in &mut item.items {
            Self::clear_item(child);
        }
    }

    /// Sets the active flag on the visible node with the given id.
    ///
    /// Returns `false` when no visible node carries the id. Callers clear
    /// the tree first; this only flips the one flag.
    pub fn set_active(&mut self, id: MenuId) -> bool {
        for section in &mut self.sections {
            if !section.is_visible() {
                continue;
            }
            if section.id == id {
                section.active = true;
                return true;
            }
            for item in &mut section.items {
                if Self::set_item_active(item, id) {
                    return true;
                }
            }
        }
        false
    }

    fn set_item_active(item: &mut MenuItem, id: MenuId) -> bool {
        if item.id == id {
            item.active = true;
            return true;
        }
        item.items
            .iter_mut()
            .any(|child| Self::set_item_active(child, id))
    }

    /// Finds the visible node with the given id.
    #[must_use]
    pub fn find(&self, id: MenuId) -> Option<&dyn Selectable> {
        for section in &self.sections {
            if !section.is_visible() {
                continue;
            }
            if section.id == id {
                return Some(section);
            }
            for item in &section.items {
                if let Some(found) = Self::find_in_item(item, id) {
                    return Some(found);
                }
            }
        }
        None
    }

    fn find_in_item(item: &MenuItem, id: MenuId) -> Option<&dyn Selectable> {
        if item.id == id {
            return Some(item);
        }
        item.items
            .iter()
            .find_map(|child| Self::find_in_item(child, id))
    }

    /// Finds the visible item with the given id.
    ///
    /// Unlike [`MenuTree::find`], this skips section nodes and yields the
    /// concrete item with its options and children.
    #[must_use]
    pub fn find_item(&self, id: MenuId) -> Option<&MenuItem> {
        self.sections
            .iter()
            .filter(|section| section.is_visible())
            .find_map(|section| {
                section
                    .items
                    .iter()
                    .find_map(|item| Self::find_item_in(item, id))
            })
    }

    fn find_item_in(item: &MenuItem, id: MenuId) -> Option<&MenuItem> {
        if item.id == id {
            return Some(item);
        }
        item.items
            .iter()
            .find_map(|child| Self::find_item_in(child, id))
    }

    /// Finds the visible item with the given id, mutably.
    ///
    /// Only items are returned; use [`MenuTree::find_section_mut`] for
    /// sections.
    pub fn find_item_mut(&mut self, id: MenuId) -> Option<&mut MenuItem> {
        self.sections
            .iter_mut()
            .filter(|section| section.is_visible())
            .find_map(|section| {
                section
                    .items
                    .iter_mut()
                    .find_map(|item| Self::find_item_in_mut(item, id))
            })
    }

    fn find_item_in_mut(item: &mut MenuItem, id: MenuId) -> Option<&mut MenuItem> {
        if item.id == id {
            return Some(item);
        }
        item.items
            .iter_mut()
            .find_map(|child| Self::find_item_in_mut(child, id))
    }

    /// Finds the section with the given id, visible or not.
    ///
    /// Dynamic list feeds address sections directly and must keep working
    /// while a section is hidden.
    pub fn find_section_mut(&mut self, id: MenuId) -> Option<&mut MenuSection> {
        self.sections.iter_mut().find(|section| section.id == id)
    }

    /// Whether a visible node with the given id exists.
    #[must_use]
    pub fn contains(&self, id: MenuId) -> bool {
        self.find(id).is_some()
    }

    /// The id of the active node closest to the front in document order.
    #[must_use]
    pub fn active_id(&self) -> Option<MenuId> {
        let mut active = None;
        let _ = self.visit(&mut |node| {
            if node.is_active() {
                active = Some(node.menu_id());
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        });
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleText;
    use crate::section::SectionFlags;

    fn item(key: &str) -> MenuItem {
        MenuItem::new(MenuId::from_str(key), LocaleText::literal(key), "icon")
            .with_filter("tag", Some(FilterValue::text(key)))
    }

    fn sample_tree() -> MenuTree {
        let nested = item("a").with_items(vec![item("a1"), item("a2")]);
        let first = MenuSection::new(MenuId::from_str("s1")).with_items(vec![nested, item("b")]);
        let second = MenuSection::new(MenuId::from_str("s2")).with_items(vec![item("c")]);
        MenuTree::with_sections(TreeKind::Filter, vec![first, second])
    }

    fn visit_order(tree: &MenuTree) -> Vec<MenuId> {
        let mut order = Vec::new();
        let _ = tree.visit(&mut |node| {
            order.push(node.menu_id());
            ControlFlow::Continue(())
        });
        order
    }

    #[test]
    fn test_visit_is_document_order() {
        let tree = sample_tree();
        let order = visit_order(&tree);
        let expected: Vec<MenuId> = ["s1", "a", "a1", "a2", "b", "s2", "c"]
            .iter()
            .map(|key| MenuId::from_str(key))
            .collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_visit_skips_hidden_sections() {
        let mut tree = sample_tree();
        tree.sections_mut()[0].set_visible(false);
        let order = visit_order(&tree);
        let expected: Vec<MenuId> = ["s2", "c"].iter().map(|key| MenuId::from_str(key)).collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_visit_early_exit() {
        let tree = sample_tree();
        let mut visited = 0;
        let result = tree.visit(&mut |_| {
            visited += 1;
            if visited == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert!(result.is_break());
        assert_eq!(visited, 3);
    }

    #[test]
    fn test_set_active_is_exclusive_after_clear() {
        let mut tree = sample_tree();
        assert!(tree.set_active(MenuId::from_str("a2")));
        tree.clear_active();
        assert!(tree.set_active(MenuId::from_str("c")));

        let mut actives = Vec::new();
        let _ = tree.visit(&mut |node| {
            if node.is_active() {
                actives.push(node.menu_id());
            }
            ControlFlow::Continue(())
        });
        assert_eq!(actives, vec![MenuId::from_str("c")]);
    }

    #[test]
    fn test_hidden_nodes_are_not_found() {
        let mut tree = sample_tree();
        assert!(tree.contains(MenuId::from_str("a1")));
        tree.sections_mut()[0].set_visible(false);
        assert!(!tree.contains(MenuId::from_str("a1")));
        // Dynamic feeds still reach the hidden section.
        assert!(tree.find_section_mut(MenuId::from_str("s1")).is_some());
    }

    #[test]
    fn test_section_with_filter_is_selectable() {
        let section = MenuSection::new(MenuId::from_str("s"))
            .with_filter("trash", Some(FilterValue::Flag(true)));
        assert!(Selectable::is_selectable(&section));
        assert!(
            !Selectable::is_selectable(
                &MenuSection::new(MenuId::from_str("plain")).with_flags(SectionFlags::GROW)
            )
        );
    }
}
