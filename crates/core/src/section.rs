//! Menu sections: ordered groups of items with layout/behavior flags.

use smol_str::SmolStr;

use crate::filter::FilterValue;
use crate::id::MenuId;
use crate::item::MenuItem;

bitflags::bitflags! {
    /// Behavior flags of a [`MenuSection`].
    ///
    /// Flags other than [`VISIBLE`](Self::VISIBLE) are read by the rendering
    /// collaborator; the core only interprets visibility.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SectionFlags: u8 {
        /// The section scrolls when its items overflow.
        const SCROLLABLE = 1 << 0;
        /// The section grows to fill leftover space.
        const GROW = 1 << 1;
        /// Items of the section may be reordered by dragging.
        const DRAG = 1 << 2;
        /// The section accepts drag-dropped items.
        const DROP = 1 << 3;
        /// The section takes part in rendering and traversal.
        const VISIBLE = 1 << 4;
    }
}

impl Default for SectionFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// An ordered collection of [`MenuItem`]s.
///
/// Sections double as selectable nodes when they carry their own filter
/// payload (see [`MenuSection::with_filter`]); traversal then treats them
/// uniformly with items.
///
/// A *dynamic* section (one with a placeholder template) has its item list
/// replaced at runtime by an external feed; [`MenuSection::set_items`]
/// maintains the invariant that an empty feed shows exactly the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    /// Stable identifier of this section.
    pub id: MenuId,
    /// The items of this section, in document order.
    pub items: Vec<MenuItem>,
    /// Behavior flags; [`SectionFlags::VISIBLE`] is set by default.
    pub flags: SectionFlags,
    /// Whether the section itself lies on the active path.
    pub active: bool,
    /// Filter criterion key carried by the section itself, if any.
    pub filter_key: Option<SmolStr>,
    /// Filter criterion value carried by the section itself, if any.
    pub filter_value: Option<FilterValue>,
    /// Placeholder template shown while a dynamic section is empty.
    pub default_item: Option<MenuItem>,
}

impl MenuSection {
    /// Creates a new empty, visible [`MenuSection`].
    #[must_use]
    pub fn new(id: MenuId) -> Self {
        Self {
            id,
            items: Vec::new(),
            flags: SectionFlags::default(),
            active: false,
            filter_key: None,
            filter_value: None,
            default_item: None,
        }
    }

    /// Sets the initial items.
    #[must_use]
    pub fn with_items(mut self, items: Vec<MenuItem>) -> Self {
        self.items = items;
        self
    }

    /// Adds the given flags on top of the defaults.
    #[must_use]
    pub fn with_flags(mut self, flags: SectionFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Gives the section its own filter payload, making it selectable.
    #[must_use]
    pub fn with_filter(
        mut self,
        key: impl Into<SmolStr>,
        value: Option<FilterValue>,
    ) -> Self {
        self.filter_key = Some(key.into());
        self.filter_value = value;
        self
    }

    /// Makes the section dynamic: the template is shown whenever the fed
    /// item list is empty, starting now if no items are set yet.
    #[must_use]
    pub fn with_default_item(mut self, template: MenuItem) -> Self {
        if self.items.is_empty() {
            self.items = vec![template.clone()];
        }
        self.default_item = Some(template);
        self
    }

    /// Whether the section (and its subtree) takes part in traversal.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.flags.contains(SectionFlags::VISIBLE)
    }

    /// Shows or hides the section.
    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(SectionFlags::VISIBLE, visible);
    }

    /// Whether the section is currently showing its placeholder.
    #[must_use]
    pub fn shows_placeholder(&self) -> bool {
        self.items.len() == 1 && self.items[0].default_item
    }

    /// Replaces the item list of a dynamic section.
    ///
    /// An empty list puts the placeholder template back in; a non-empty list
    /// replaces the placeholder entirely. Sections without a template simply
    /// take the list as given.
    pub fn set_items(&mut self, items: Vec<MenuItem>) {
        if items.is_empty() {
            if let Some(template) = &self.default_item {
                self.items = vec![template.clone()];
                return;
            }
        }
        self.items = items;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleText;

    fn dynamic_section() -> MenuSection {
        let template = MenuItem::new(
            MenuId::from_str("app.tags.default"),
            LocaleText::localized("tags"),
            "tags",
        )
        .as_placeholder(crate::item::DisabledHint {
            header: LocaleText::localized("menuAlertNoTags"),
            body: LocaleText::localized("menuAlertNoTagsBody"),
            icon: "tags".into(),
        });
        MenuSection::new(MenuId::from_str("app.tags"))
            .with_flags(SectionFlags::SCROLLABLE | SectionFlags::DRAG)
            .with_default_item(template)
    }

    #[test]
    fn test_default_flags_are_visible() {
        let section = MenuSection::new(MenuId::from_str("s"));
        assert!(section.is_visible());
        assert!(!section.flags.contains(SectionFlags::SCROLLABLE));
    }

    #[test]
    fn test_dynamic_section_placeholder_roundtrip() {
        let mut section = dynamic_section();
        assert!(section.shows_placeholder());

        let tag = MenuItem::new(
            MenuId::from_str("app.tags").child_str("work"),
            LocaleText::literal("work"),
            "tag",
        )
        .with_filter("tag", Some(FilterValue::text("work")));
        section.set_items(vec![tag]);
        assert!(!section.shows_placeholder());
        assert_eq!(section.items.len(), 1);

        section.set_items(Vec::new());
        assert!(section.shows_placeholder());
    }

    #[test]
    fn test_with_default_item_keeps_preset_items() {
        let tag = MenuItem::new(
            MenuId::from_str("app.tags").child_str("work"),
            LocaleText::literal("work"),
            "tag",
        )
        .with_filter("tag", Some(FilterValue::text("work")));
        let template = MenuItem::new(
            MenuId::from_str("app.tags.default"),
            LocaleText::localized("tags"),
            "tags",
        )
        .as_placeholder(crate::item::DisabledHint {
            header: LocaleText::localized("menuAlertNoTags"),
            body: LocaleText::localized("menuAlertNoTagsBody"),
            icon: "tags".into(),
        });

        let mut section = MenuSection::new(MenuId::from_str("app.tags"))
            .with_items(vec![tag])
            .with_default_item(template);
        assert!(!section.shows_placeholder());
        assert_eq!(section.items[0].title.as_str(), "work");

        // The template still takes over once the real list empties.
        section.set_items(Vec::new());
        assert!(section.shows_placeholder());
    }

    #[test]
    fn test_set_items_without_template() {
        let mut section = MenuSection::new(MenuId::from_str("s"));
        section.set_items(Vec::new());
        assert!(section.items.is_empty());
        assert!(!section.shows_placeholder());
    }
}
