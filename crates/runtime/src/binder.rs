//! Locale binding for menu trees.
//!
//! The binder re-applies translated titles to every node whose title is
//! locale-derived: item titles get the capitalize-first transform, the
//! disabled-state hints of placeholders keep their raw translation. Literal
//! titles (e.g. tag or color names) are never touched. Rebinding runs once
//! at startup and again on every locale-change notification; running it
//! twice with unchanged data is a no-op.

use crate::core::locale::{Locale, capitalize_first};
use crate::core::{MenuItem, MenuTree};

/// Applies a [`Locale`] to the locale-derived texts of menu trees.
#[derive(Debug, Clone, Default)]
pub struct LocaleBinder {
    locale: Locale,
}

impl LocaleBinder {
    /// Creates a binder over the given locale table.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// The current locale table.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Replaces the locale table.
    ///
    /// Callers rebind afterwards; swapping the table alone changes nothing.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Recomputes every locale-derived text in the tree.
    ///
    /// Hidden sections are included: they must carry correct titles the
    /// moment they become visible again. Placeholder templates of dynamic
    /// sections are rebound too, so a later empty feed shows translated
    /// text.
    pub fn rebind(&self, tree: &mut MenuTree) {
        for section in tree.sections_mut() {
            for item in &mut section.items {
                self.rebind_item(item);
            }
            if let Some(template) = &mut section.default_item {
                self.rebind_item(template);
            }
        }
    }

    fn rebind_item(&self, item: &mut MenuItem) {
        if let Some(key) = item.title.key.clone() {
            item.title.text = capitalize_first(self.locale.display(&key));
        }
        if let Some(hint) = &mut item.disabled {
            if let Some(key) = hint.header.key.clone() {
                hint.header.text = self.locale.display(&key).to_string();
            }
            if let Some(key) = hint.body.key.clone() {
                hint.body.text = self.locale.display(&key).to_string();
            }
        }
        for child in &mut item.items {
            self.rebind_item(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locale::LocaleText;
    use crate::core::{DisabledHint, MenuId, MenuSection, MenuTree, TreeKind};

    fn tree_with_items() -> MenuTree {
        let localized = MenuItem::new(
            MenuId::from_str("all"),
            LocaleText::localized("menuAllItems"),
            "th-large",
        );
        let literal = MenuItem::new(
            MenuId::from_str("tag.work"),
            LocaleText::literal("work"),
            "tag",
        );
        let template = MenuItem::new(
            MenuId::from_str("tags.default"),
            LocaleText::localized("tags"),
            "tags",
        )
        .as_placeholder(DisabledHint {
            header: LocaleText::localized("menuAlertNoTags"),
            body: LocaleText::localized("menuAlertNoTagsBody"),
            icon: "tags".into(),
        });

        let section = MenuSection::new(MenuId::from_str("s"))
            .with_items(vec![localized, literal])
            .with_default_item(template);
        MenuTree::with_sections(TreeKind::Filter, vec![section])
    }

    fn locale() -> Locale {
        Locale::from_pairs([
            ("menuAllItems", "all items"),
            ("tags", "tags"),
            ("menuAlertNoTags", "You have no tags"),
            ("menuAlertNoTagsBody", "Add a tag to see it here"),
        ])
    }

    #[test]
    fn test_rebind_translates_and_capitalizes() {
        let mut tree = tree_with_items();
        let binder = LocaleBinder::new(locale());
        binder.rebind(&mut tree);

        let section = &tree.sections()[0];
        assert_eq!(section.items[0].title.as_str(), "All items");
        // Literal titles stay untouched.
        assert_eq!(section.items[1].title.as_str(), "work");
    }

    #[test]
    fn test_rebind_is_idempotent() {
        let mut tree = tree_with_items();
        let binder = LocaleBinder::new(locale());
        binder.rebind(&mut tree);
        let once = tree.clone();
        binder.rebind(&mut tree);
        assert_eq!(tree, once);
    }

    #[test]
    fn test_rebind_covers_placeholder_template() {
        let mut tree = tree_with_items();
        let binder = LocaleBinder::new(locale());
        binder.rebind(&mut tree);

        let template = tree.sections()[0]
            .default_item
            .as_ref()
            .expect("dynamic section keeps its template");
        assert_eq!(template.title.as_str(), "Tags");
        let hint = template.disabled.as_ref().expect("placeholder has a hint");
        assert_eq!(hint.header.as_str(), "You have no tags");
    }

    #[test]
    fn test_missing_key_degrades_to_raw_key() {
        let mut tree = tree_with_items();
        let binder = LocaleBinder::new(Locale::new());
        binder.rebind(&mut tree);
        assert_eq!(tree.sections()[0].items[0].title.as_str(), "MenuAllItems");
    }
}
