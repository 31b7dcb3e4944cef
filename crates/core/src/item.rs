//! Menu items and their mutually-exclusive sub-options.

use smol_str::SmolStr;

use crate::filter::FilterValue;
use crate::id::MenuId;
use crate::locale::LocaleText;

/// A mutually-exclusive sub-choice of a [`MenuItem`], e.g. one color swatch.
///
/// At most one option of an item is active at a time; activating one clears
/// its siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    /// The option's own value, e.g. the color name.
    pub value: SmolStr,
    /// The value carried by the `set-filter` command when this option is
    /// selected.
    pub filter_value: FilterValue,
    /// Whether this option is the active one.
    pub active: bool,
}

impl MenuOption {
    /// Creates a new inactive [`MenuOption`].
    #[must_use]
    pub fn new(value: impl Into<SmolStr>, filter_value: FilterValue) -> Self {
        Self {
            value: value.into(),
            filter_value,
            active: false,
        }
    }
}

/// Explanation shown in place of a dynamic list that has no usable entries
/// (e.g. no tags exist yet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisabledHint {
    /// Short headline; locale-derived.
    pub header: LocaleText,
    /// Longer explanation; locale-derived.
    pub body: LocaleText,
    /// Icon identifier, opaque to the core.
    pub icon: SmolStr,
}

/// A single node of a menu tree: a leaf entry or a branch with nested items.
///
/// Items are plain mutable records. Construction uses the builder-style
/// `with_*` methods; invariants (e.g. filter items never carrying a page)
/// are the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Stable identifier of this item.
    pub id: MenuId,
    /// Display title, either literal or derived from a locale key.
    pub title: LocaleText,
    /// Icon identifier, opaque to the core.
    pub icon: SmolStr,
    /// Whether this item lies on the active path of its tree.
    pub active: bool,
    /// Accelerator character bound to this item, if any.
    pub shortcut: Option<char>,
    /// Key of the filter criterion this item selects (filter tree only).
    pub filter_key: Option<SmolStr>,
    /// Value of the filter criterion, when the item itself carries one.
    pub filter_value: Option<FilterValue>,
    /// Settings page opened by this item (settings tree only).
    pub page: Option<SmolStr>,
    /// File argument passed along with [`page`](Self::page), if any.
    pub file: Option<SmolStr>,
    /// Mutually-exclusive sub-choices, e.g. color swatches.
    pub options: Vec<MenuOption>,
    /// Nested child items (dynamic lists nest here).
    pub items: Vec<MenuItem>,
    /// Populated when the item stands in for an empty dynamic list.
    pub disabled: Option<DisabledHint>,
    /// Marks the synthetic placeholder of a dynamic section.
    pub default_item: bool,
    /// Derived display class, e.g. the selected color swatch.
    pub style_class: Option<SmolStr>,
}

impl MenuItem {
    /// Creates a new [`MenuItem`] with the given id, title, and icon.
    #[must_use]
    pub fn new(id: MenuId, title: LocaleText, icon: impl Into<SmolStr>) -> Self {
        Self {
            id,
            title,
            icon: icon.into(),
            active: false,
            shortcut: None,
            filter_key: None,
            filter_value: None,
            page: None,
            file: None,
            options: Vec::new(),
            items: Vec::new(),
            disabled: None,
            default_item: false,
            style_class: None,
        }
    }

    /// Sets the accelerator character.
    #[must_use]
    pub fn with_shortcut(mut self, shortcut: char) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    /// Sets the filter criterion this item selects.
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

    /// Sets the settings page this item opens.
    #[must_use]
    pub fn with_page(mut self, page: impl Into<SmolStr>, file: Option<SmolStr>) -> Self {
        self.page = Some(page.into());
        self.file = file;
        self
    }

    /// Replaces the nested child items.
    #[must_use]
    pub fn with_items(mut self, items: Vec<MenuItem>) -> Self {
        self.items = items;
        self
    }

    /// Marks the item active.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Attaches a disabled-state hint and marks the item as the synthetic
    /// placeholder of a dynamic section.
    #[must_use]
    pub fn as_placeholder(mut self, disabled: DisabledHint) -> Self {
        self.disabled = Some(disabled);
        self.default_item = true;
        self
    }

    /// Appends a [`MenuOption`].
    ///
    /// Used once at construction to populate the color swatch list from an
    /// external color enumeration.
    pub fn add_option(&mut self, option: MenuOption) {
        self.options.push(option);
    }

    /// Marks the option with the given value active and clears its siblings.
    ///
    /// Returns `false` if no option carries that value.
    pub fn activate_option(&mut self, value: &str) -> bool {
        let mut found = false;
        for option in &mut self.options {
            option.active = option.value == value;
            found |= option.active;
        }
        found
    }

    /// Clears the active flag on every option.
    pub fn clear_options(&mut self) {
        for option in &mut self.options {
            option.active = false;
        }
    }

    /// Returns the active option, if any.
    #[must_use]
    pub fn active_option(&self) -> Option<&MenuOption> {
        self.options.iter().find(|option| option.active)
    }

    /// Whether keyboard traversal may land on this item.
    ///
    /// Placeholders are skipped; everything that carries a command payload
    /// (a filter criterion or a settings page) is a traversal stop.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.default_item && (self.filter_key.is_some() || self.page.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swatches() -> MenuItem {
        let mut item = MenuItem::new(
            MenuId::from_str("app.colors"),
            LocaleText::localized("menuColors"),
            "bookmark",
        )
        .with_filter("color", Some(FilterValue::Flag(true)));
        item.add_option(MenuOption::new("red", FilterValue::text("red")));
        item.add_option(MenuOption::new("blue", FilterValue::text("blue")));
        item
    }

    #[test]
    fn test_activate_option_is_exclusive() {
        let mut item = swatches();
        assert!(item.activate_option("red"));
        assert!(item.activate_option("blue"));
        assert_eq!(item.active_option().map(|o| o.value.as_str()), Some("blue"));
        assert!(!item.options[0].active);
    }

    #[test]
    fn test_activate_unknown_option() {
        let mut item = swatches();
        assert!(!item.activate_option("chartreuse"));
        assert!(item.active_option().is_none());
    }

    #[test]
    fn test_placeholder_is_not_selectable() {
        let hint = DisabledHint {
            header: LocaleText::localized("menuAlertNoTags"),
            body: LocaleText::localized("menuAlertNoTagsBody"),
            icon: "tags".into(),
        };
        let item = MenuItem::new(
            MenuId::from_str("app.tags.default"),
            LocaleText::localized("tags"),
            "tags",
        )
        .as_placeholder(hint);
        assert!(item.default_item);
        assert!(!item.is_selectable());
    }
}
