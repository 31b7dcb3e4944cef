//! The stock menu layout: the app (filter) tree and the settings tree.
//!
//! Hosts that want the standard sidebar call [`standard_controller`] and get
//! a fully-wired [`MenuController`] with both trees registered, the app tree
//! current, and the color swatch item declared. The tag, group, and file
//! sections start empty and are populated through
//! [`MenuController::set_section_items`].

use smol_str::SmolStr;

use crate::controller::MenuController;
use crate::core::locale::{Locale, LocaleText};
use crate::core::{
    DisabledHint, FilterValue, MenuId, MenuItem, MenuOption, MenuSection, MenuTree, SectionFlags,
    TreeKind,
};
use crate::event::CommandSink;

/// Name of the filter tree.
pub const APP_TREE: &str = "app";
/// Name of the settings tree.
pub const SETTINGS_TREE: &str = "settings";

/// Ids of the stock menu nodes.
pub mod ids {
    use super::MenuId;

    /// The "all items" entry.
    pub const ALL_ITEMS: MenuId = MenuId::from_str("app.all-items");
    /// Section hosting [`ALL_ITEMS`].
    pub const ALL_ITEMS_SECTION: MenuId = MenuId::from_str("app.all-items.section");
    /// The color swatch entry.
    pub const COLORS: MenuId = MenuId::from_str("app.colors");
    /// Section hosting [`COLORS`].
    pub const COLORS_SECTION: MenuId = MenuId::from_str("app.colors.section");
    /// The dynamic tag section.
    pub const TAGS: MenuId = MenuId::from_str("app.tags");
    /// Placeholder shown while no tags exist.
    pub const TAGS_PLACEHOLDER: MenuId = MenuId::from_str("app.tags.default");
    /// The dynamic group section.
    pub const GROUPS: MenuId = MenuId::from_str("app.groups");
    /// The trash entry.
    pub const TRASH: MenuId = MenuId::from_str("app.trash");
    /// Section hosting [`TRASH`]; accepts drag-dropped items.
    pub const TRASH_SECTION: MenuId = MenuId::from_str("app.trash.section");
    /// The general settings page entry.
    pub const GENERAL: MenuId = MenuId::from_str("settings.general");
    /// The shortcuts settings page entry.
    pub const SHORTCUTS: MenuId = MenuId::from_str("settings.shortcuts");
    /// The plugins settings page entry.
    pub const PLUGINS: MenuId = MenuId::from_str("settings.plugins");
    /// The about settings page entry.
    pub const ABOUT: MenuId = MenuId::from_str("settings.about");
    /// The help settings page entry.
    pub const HELP: MenuId = MenuId::from_str("settings.help");
    /// The dynamic per-file settings section.
    pub const FILES: MenuId = MenuId::from_str("settings.files");
    /// Section hosting the fixed settings pages.
    pub const PAGES_SECTION: MenuId = MenuId::from_str("settings.pages");
}

/// Builds the filter tree: all items, colors, tags, groups, trash.
///
/// `colors` is the host's color enumeration; each entry becomes one swatch
/// option on the colors item.
#[must_use]
pub fn app_tree(colors: &[SmolStr]) -> MenuTree {
    let all_items = MenuItem::new(ids::ALL_ITEMS, LocaleText::localized("menuAllItems"), "th-large")
        .with_shortcut('a')
        .with_filter("*", None)
        .with_active(true);

    let mut swatches =
        MenuItem::new(ids::COLORS, LocaleText::localized("menuColors"), "bookmark")
            .with_shortcut('c')
            .with_filter("color", Some(FilterValue::Flag(true)));
    for color in colors {
        swatches.add_option(MenuOption::new(
            color.clone(),
            FilterValue::Text(color.clone()),
        ));
    }

    let tags_placeholder =
        MenuItem::new(ids::TAGS_PLACEHOLDER, LocaleText::localized("tags"), "tags").as_placeholder(
            DisabledHint {
                header: LocaleText::localized("menuAlertNoTags"),
                body: LocaleText::localized("menuAlertNoTagsBody"),
                icon: "tags".into(),
            },
        );

    MenuTree::with_sections(
        TreeKind::Filter,
        vec![
            MenuSection::new(ids::ALL_ITEMS_SECTION).with_items(vec![all_items]),
            MenuSection::new(ids::COLORS_SECTION).with_items(vec![swatches]),
            MenuSection::new(ids::TAGS)
                .with_flags(SectionFlags::SCROLLABLE | SectionFlags::DRAG)
                .with_default_item(tags_placeholder),
            MenuSection::new(ids::GROUPS).with_flags(SectionFlags::SCROLLABLE | SectionFlags::GROW),
            MenuSection::new(ids::TRASH_SECTION)
                .with_flags(SectionFlags::DROP)
                .with_items(vec![
                    MenuItem::new(ids::TRASH, LocaleText::localized("menuTrash"), "trash")
                        .with_shortcut('d')
                        .with_filter("trash", Some(FilterValue::Flag(true))),
                ]),
        ],
    )
}

/// Builds the settings tree: the fixed pages plus the per-file section.
#[must_use]
pub fn settings_tree() -> MenuTree {
    let page = |id, key, icon: &str, page: &str| {
        MenuItem::new(id, LocaleText::localized(key), icon).with_page(page, None)
    };

    let pages = MenuSection::new(ids::PAGES_SECTION).with_items(vec![
        page(ids::GENERAL, "menuSetGeneral", "cog", "general").with_active(true),
        page(ids::SHORTCUTS, "shortcuts", "keyboard-o", "shortcuts"),
        page(ids::PLUGINS, "plugins", "puzzle-piece", "plugins"),
        page(ids::ABOUT, "menuSetAbout", "info", "about"),
        page(ids::HELP, "help", "question", "help"),
    ]);

    MenuTree::with_sections(
        TreeKind::Settings,
        vec![
            pages,
            MenuSection::new(ids::FILES)
                .with_flags(SectionFlags::SCROLLABLE | SectionFlags::GROW),
        ],
    )
}

/// Wires up a controller with the stock trees.
///
/// The app tree is current, the colors item is declared as the swatch item,
/// and both trees carry titles bound from `locale`.
#[must_use]
pub fn standard_controller<S: CommandSink>(
    sink: S,
    locale: Locale,
    colors: &[SmolStr],
) -> MenuController<S> {
    let mut controller = MenuController::new(sink);
    controller.set_locale(locale);
    controller.insert_tree(APP_TREE, app_tree(colors));
    controller.insert_tree(SETTINGS_TREE, settings_tree());
    controller.set_swatch_item(ids::COLORS);
    controller
}
