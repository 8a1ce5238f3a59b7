//! Context menu generation and visibility.
//!
//! Menu content is a pure function of the target item and the expansion
//! state. Visibility is a two-state machine: hidden, or visible at a clamped
//! position for one target item.

use std::collections::HashSet;

use super::store::ItemStore;
use crate::config::{PROTECTED_ITEM_IDS, RECYCLE_BIN_ID, menu as geometry};
use crate::models::{Item, MenuAction, MenuEntry, MenuOption, Point, Size};

// =============================================================================
// Option Generation
// =============================================================================

fn is_protected(item: &Item) -> bool {
    PROTECTED_ITEM_IDS.contains(&item.id.as_str())
}

fn is_recycle_bin(item: &Item) -> bool {
    item.id == RECYCLE_BIN_ID
}

/// Build the context menu for `item`.
///
/// Order: Open, Expand/Collapse (folders), separator, Empty Recycle Bin and
/// separator (recycle bin only), Rename, Download, Delete, Properties.
/// The result is always separator-normalized.
pub fn options_for(store: &ItemStore, item: &Item, expanded: &HashSet<String>) -> Vec<MenuEntry> {
    let mut entries = vec![MenuEntry::Action(
        MenuOption::new(MenuAction::Open, "Open").bold(),
    )];

    if item.is_folder() {
        let label = if expanded.contains(&item.id) {
            "Collapse"
        } else {
            "Expand"
        };
        entries.push(MenuEntry::Action(MenuOption::new(MenuAction::ToggleExpand, label)));
    }

    entries.push(MenuEntry::Separator);

    if is_recycle_bin(item) {
        let empty = store.children_of(&item.id).is_empty();
        entries.push(MenuEntry::Action(
            MenuOption::new(MenuAction::EmptyRecycleBin, "Empty Recycle Bin").disabled(empty),
        ));
        entries.push(MenuEntry::Separator);
    }

    if !is_protected(item) && !is_recycle_bin(item) {
        entries.push(MenuEntry::Action(MenuOption::new(MenuAction::Rename, "Rename")));
    }

    if !item.is_folder() && !item.is_shortcut() {
        entries.push(MenuEntry::Action(MenuOption::new(MenuAction::Download, "Download")));
    }

    if !is_protected(item) && !is_recycle_bin(item) {
        entries.push(MenuEntry::Action(MenuOption::new(MenuAction::Delete, "Delete")));
    }

    entries.push(MenuEntry::Action(MenuOption::new(
        MenuAction::Properties,
        "Properties",
    )));

    normalize_separators(entries)
}

/// Drop leading, trailing, and repeated separators.
pub fn normalize_separators(entries: Vec<MenuEntry>) -> Vec<MenuEntry> {
    let mut out: Vec<MenuEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.is_separator() && out.last().is_none_or(MenuEntry::is_separator) {
            continue;
        }
        out.push(entry);
    }
    if out.last().is_some_and(MenuEntry::is_separator) {
        out.pop();
    }
    out
}

/// Rendered size of a menu with the given entries.
pub fn menu_size(entries: &[MenuEntry]) -> Size {
    let separators = entries.iter().filter(|e| e.is_separator()).count() as f64;
    let actions = entries.len() as f64 - separators;
    Size::new(
        geometry::WIDTH,
        geometry::VERTICAL_PADDING
            + actions * geometry::ITEM_HEIGHT
            + separators * geometry::SEPARATOR_HEIGHT,
    )
}

/// Clamp one axis so `[pos, pos + extent]` stays inside `[0, limit]`.
fn clamp_axis(pos: f64, extent: f64, limit: f64) -> f64 {
    let margin = geometry::VIEWPORT_MARGIN;
    let pos = if pos + extent > limit {
        limit - extent - margin
    } else {
        pos
    };
    if pos < 0.0 { margin } else { pos }
}

/// Position a menu of `menu` size opened at `pointer` inside `viewport`.
///
/// If the menu would overflow the right/bottom edge it is shifted back inside
/// with a margin; a coordinate pushed negative is floored to the margin.
pub fn clamp_position(pointer: Point, menu: Size, viewport: Size) -> Point {
    Point::new(
        clamp_axis(pointer.x, menu.width, viewport.width),
        clamp_axis(pointer.y, menu.height, viewport.height),
    )
}

// =============================================================================
// Visibility State
// =============================================================================

/// Context menu visibility.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ContextMenu {
    #[default]
    Hidden,
    Visible {
        /// Item the menu was opened on
        target: Item,
        /// Clamped top-left corner
        position: Point,
    },
}

impl ContextMenu {
    /// Show the menu for `target` at `position`.
    pub fn show(&mut self, target: Item, position: Point) {
        *self = ContextMenu::Visible { target, position };
    }

    pub fn hide(&mut self) {
        *self = ContextMenu::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, ContextMenu::Visible { .. })
    }

    pub fn target(&self) -> Option<&Item> {
        match self {
            ContextMenu::Visible { target, .. } => Some(target),
            ContextMenu::Hidden => None,
        }
    }

    pub fn position(&self) -> Option<Point> {
        match self {
            ContextMenu::Visible { position, .. } => Some(*position),
            ContextMenu::Hidden => None,
        }
    }

    /// Escape dismisses; other keys are ignored.
    pub fn handle_key(&mut self, key: &str) {
        if key == "Escape" {
            self.hide();
        }
    }

    /// A pointer press outside the menu dismisses it.
    pub fn handle_pointer_down(&mut self, inside_menu: bool) {
        if !inside_menu {
            self.hide();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemIcon;

    fn labels(entries: &[MenuEntry]) -> Vec<&'static str> {
        entries.iter().map(|e| e.label().unwrap_or("---")).collect()
    }

    fn assert_normalized(entries: &[MenuEntry]) {
        assert!(!entries.first().is_some_and(MenuEntry::is_separator));
        assert!(!entries.last().is_some_and(MenuEntry::is_separator));
        for pair in entries.windows(2) {
            assert!(!(pair[0].is_separator() && pair[1].is_separator()));
        }
    }

    fn option(action: MenuAction) -> MenuEntry {
        MenuEntry::Action(MenuOption::new(action, "x"))
    }

    #[test]
    fn test_normalize_separators() {
        let raw = vec![
            MenuEntry::Separator,
            option(MenuAction::Open),
            MenuEntry::Separator,
            MenuEntry::Separator,
            option(MenuAction::Rename),
            MenuEntry::Separator,
        ];
        let normalized = normalize_separators(raw);
        assert_eq!(labels(&normalized), vec!["x", "---", "x"]);
        assert!(normalize_separators(vec![MenuEntry::Separator]).is_empty());
        assert!(normalize_separators(Vec::new()).is_empty());
    }

    #[test]
    fn test_every_resume_item_menu_is_normalized() {
        let store = ItemStore::resume();
        let collapsed = HashSet::new();
        let expanded: HashSet<String> = store.items().iter().map(|i| i.id.clone()).collect();
        for item in store.items() {
            assert_normalized(&options_for(&store, item, &collapsed));
            assert_normalized(&options_for(&store, item, &expanded));
        }
    }

    #[test]
    fn test_folder_menu() {
        let store = ItemStore::resume();
        let folder = store.item_by_id("experience").unwrap();

        let menu = options_for(&store, folder, &HashSet::new());
        assert_eq!(
            labels(&menu),
            vec!["Open", "Expand", "---", "Rename", "Delete", "Properties"]
        );

        let expanded = HashSet::from(["experience".to_string()]);
        let menu = options_for(&store, folder, &expanded);
        assert_eq!(menu[1].label(), Some("Collapse"));
    }

    #[test]
    fn test_open_is_bold() {
        let store = ItemStore::resume();
        let item = store.item_by_id("summary").unwrap();
        let menu = options_for(&store, item, &HashSet::new());
        match &menu[0] {
            MenuEntry::Action(option) => {
                assert_eq!(option.action, MenuAction::Open);
                assert!(option.bold);
            }
            MenuEntry::Separator => panic!("menu should start with Open"),
        }
    }

    #[test]
    fn test_file_menu() {
        let store = ItemStore::resume();
        let file = store.item_by_id("summary").unwrap();
        let menu = options_for(&store, file, &HashSet::new());
        assert_eq!(
            labels(&menu),
            vec!["Open", "---", "Rename", "Download", "Delete", "Properties"]
        );
    }

    #[test]
    fn test_shortcut_cannot_be_downloaded() {
        let store = ItemStore::resume();
        let shortcut = store.item_by_id("resumeShortcut").unwrap();
        let menu = options_for(&store, shortcut, &HashSet::new());
        assert!(!labels(&menu).contains(&"Download"));
        assert!(labels(&menu).contains(&"Rename"));
    }

    #[test]
    fn test_recycle_bin_menu() {
        let store = ItemStore::resume();
        let bin = store.item_by_id(RECYCLE_BIN_ID).unwrap();
        let menu = options_for(&store, bin, &HashSet::new());
        assert_eq!(
            labels(&menu),
            vec![
                "Open",
                "Expand",
                "---",
                "Empty Recycle Bin",
                "---",
                "Properties"
            ]
        );
        assert!(!labels(&menu).contains(&"Rename"));
        assert!(!labels(&menu).contains(&"Delete"));

        // Nothing to empty in the bundled tree
        match &menu[3] {
            MenuEntry::Action(option) => assert!(option.disabled),
            MenuEntry::Separator => panic!("expected Empty Recycle Bin"),
        }
    }

    #[test]
    fn test_full_recycle_bin_can_be_emptied() {
        let store = ItemStore::new(vec![
            Item::folder(RECYCLE_BIN_ID, "Recycle Bin", None, ItemIcon::RecycleBin, ""),
            Item::file("old", "old.txt", RECYCLE_BIN_ID, ItemIcon::Text, "", ""),
        ]);
        let bin = store.item_by_id(RECYCLE_BIN_ID).unwrap();
        let menu = options_for(&store, bin, &HashSet::new());
        match &menu[3] {
            MenuEntry::Action(option) => {
                assert_eq!(option.action, MenuAction::EmptyRecycleBin);
                assert!(!option.disabled);
            }
            MenuEntry::Separator => panic!("expected Empty Recycle Bin"),
        }
    }

    #[test]
    fn test_protected_root_menu() {
        let store = ItemStore::resume();
        for id in PROTECTED_ITEM_IDS {
            let item = store.item_by_id(id).unwrap();
            let menu = options_for(&store, item, &HashSet::new());
            let labels = labels(&menu);
            assert!(!labels.contains(&"Rename"), "{id}");
            assert!(!labels.contains(&"Delete"), "{id}");
            assert_eq!(labels.last(), Some(&"Properties"));
        }
    }

    #[test]
    fn test_protected_file_menu_stays_normalized() {
        // A protected file leaves only Download between the separator and Properties
        let store = ItemStore::new(vec![Item::file(
            "myComputer", "odd.txt", "nowhere", ItemIcon::Text, "", "",
        )]);
        let item = store.item_by_id("myComputer").unwrap();
        let menu = options_for(&store, item, &HashSet::new());
        assert_eq!(labels(&menu), vec!["Open", "---", "Download", "Properties"]);
    }

    #[test]
    fn test_menu_size() {
        let entries = vec![
            option(MenuAction::Open),
            MenuEntry::Separator,
            option(MenuAction::Properties),
        ];
        let size = menu_size(&entries);
        assert_eq!(size.width, geometry::WIDTH);
        assert_eq!(
            size.height,
            geometry::VERTICAL_PADDING + 2.0 * geometry::ITEM_HEIGHT + geometry::SEPARATOR_HEIGHT
        );
    }

    #[test]
    fn test_clamp_inside_viewport_unchanged() {
        let pos = clamp_position(
            Point::new(100.0, 50.0),
            Size::new(180.0, 200.0),
            Size::new(1024.0, 768.0),
        );
        assert_eq!(pos, Point::new(100.0, 50.0));
    }

    #[test]
    fn test_clamp_right_and_bottom_edges() {
        let pos = clamp_position(
            Point::new(1000.0, 700.0),
            Size::new(180.0, 200.0),
            Size::new(1024.0, 768.0),
        );
        let margin = geometry::VIEWPORT_MARGIN;
        assert_eq!(pos, Point::new(1024.0 - 180.0 - margin, 768.0 - 200.0 - margin));
    }

    #[test]
    fn test_clamp_tiny_viewport_floors_to_margin() {
        let pos = clamp_position(
            Point::new(50.0, 50.0),
            Size::new(180.0, 200.0),
            Size::new(120.0, 100.0),
        );
        let margin = geometry::VIEWPORT_MARGIN;
        assert_eq!(pos, Point::new(margin, margin));
    }

    #[test]
    fn test_visibility_transitions() {
        let store = ItemStore::resume();
        let item = store.item_by_id("summary").unwrap().clone();
        let mut menu = ContextMenu::default();
        assert!(!menu.is_visible());

        menu.show(item.clone(), Point::new(10.0, 20.0));
        assert_eq!(menu.target().map(|i| i.id.as_str()), Some("summary"));
        assert_eq!(menu.position(), Some(Point::new(10.0, 20.0)));

        menu.handle_pointer_down(true);
        assert!(menu.is_visible());
        menu.handle_key("Enter");
        assert!(menu.is_visible());

        menu.handle_key("Escape");
        assert!(!menu.is_visible());
        assert!(menu.target().is_none());

        menu.show(item, Point::default());
        menu.handle_pointer_down(false);
        assert!(!menu.is_visible());
    }
}
