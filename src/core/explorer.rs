//! Explorer selection, expansion, and context menu state.
//!
//! [`ExplorerState`] is the only mutable state of the explorer. It is owned by
//! the app context (wrapped in a signal) and changed only through the methods
//! below, each of which runs to completion synchronously.

use std::collections::HashSet;
use std::sync::Arc;

use super::menu::{self, ContextMenu};
use super::store::ItemStore;
use crate::config::{INITIALLY_EXPANDED, RECYCLE_BIN_ID};
use crate::models::{Item, MenuAction, MenuEntry, Notice, Point, Size};

/// Selection, expansion, and menu state over a shared item store.
#[derive(Clone, Debug)]
pub struct ExplorerState {
    store: Arc<ItemStore>,
    /// Selected item id (None = nothing selected)
    selected: Option<String>,
    /// Ids from the topmost ancestor down to the selection
    current_path: Vec<String>,
    /// Folder ids shown expanded in the sidebar
    expanded: HashSet<String>,
    menu: ContextMenu,
}

impl ExplorerState {
    /// Create state with nothing selected and the default folders expanded.
    pub fn new(store: Arc<ItemStore>) -> Self {
        let expanded = INITIALLY_EXPANDED
            .iter()
            .filter(|id| store.item_by_id(id).is_some_and(Item::is_folder))
            .map(|id| id.to_string())
            .collect();

        Self {
            store,
            selected: None,
            current_path: Vec::new(),
            expanded,
            menu: ContextMenu::Hidden,
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected
            .as_deref()
            .and_then(|id| self.store.item_by_id(id))
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id() == Some(id)
    }

    /// Breadcrumb items from the root down to the selection.
    pub fn current_path(&self) -> Vec<&Item> {
        self.current_path
            .iter()
            .filter_map(|id| self.store.item_by_id(id))
            .collect()
    }

    pub fn expanded_ids(&self) -> &HashSet<String> {
        &self.expanded
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn menu(&self) -> &ContextMenu {
        &self.menu
    }

    // =========================================================================
    // Selection / expansion
    // =========================================================================

    /// Select an item and reveal it.
    ///
    /// Every folder on the path (including the item itself when it is a
    /// folder) becomes expanded; nothing is ever collapsed, so repeating the
    /// call changes nothing. Unknown or empty ids clear the selection.
    /// Any open context menu is closed.
    pub fn select(&mut self, id: &str) {
        self.menu.hide();

        let path: Vec<(String, bool)> = self
            .store
            .path_to(id)
            .into_iter()
            .map(|item| (item.id.clone(), item.is_folder()))
            .collect();

        if path.is_empty() {
            self.selected = None;
            self.current_path.clear();
            return;
        }

        for (folder_id, _) in path.iter().filter(|(_, is_folder)| *is_folder) {
            self.expanded.insert(folder_id.clone());
        }

        self.selected = Some(id.to_string());
        self.current_path = path.into_iter().map(|(id, _)| id).collect();
    }

    pub fn clear_selection(&mut self) {
        self.menu.hide();
        self.selected = None;
        self.current_path.clear();
    }

    /// Flip a folder between expanded and collapsed.
    ///
    /// Unknown ids and files are ignored.
    pub fn toggle_expand(&mut self, id: &str) {
        if !self.store.item_by_id(id).is_some_and(Item::is_folder) {
            return;
        }
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    // =========================================================================
    // Context menu
    // =========================================================================

    /// Open the context menu for `id` at the pointer, clamped to `viewport`.
    ///
    /// Unknown ids leave the menu hidden.
    pub fn open_menu(&mut self, id: &str, pointer: Point, viewport: Size) {
        let Some(target) = self.store.item_by_id(id).cloned() else {
            self.menu.hide();
            return;
        };
        let size = menu::menu_size(&menu::options_for(&self.store, &target, self.expanded_ids()));
        let position = menu::clamp_position(pointer, size, viewport);
        self.menu.show(target, position);
    }

    pub fn dismiss_menu(&mut self) {
        self.menu.hide();
    }

    pub fn handle_key(&mut self, key: &str) {
        self.menu.handle_key(key);
    }

    pub fn handle_pointer_down(&mut self, inside_menu: bool) {
        self.menu.handle_pointer_down(inside_menu);
    }

    /// Options for the open menu (None when hidden).
    pub fn menu_options(&self) -> Option<Vec<MenuEntry>> {
        self.menu
            .target()
            .map(|target| menu::options_for(&self.store, target, self.expanded_ids()))
    }

    /// Run a menu action against the menu's target, then hide the menu.
    ///
    /// Actions without an implementation return a placeholder [`Notice`].
    /// Invoking with the menu hidden does nothing.
    pub fn invoke(&mut self, action: MenuAction) -> Option<Notice> {
        let target = self.menu.target()?.clone();

        let notice = match action {
            MenuAction::Open => {
                self.select(&target.id);
                None
            }
            MenuAction::ToggleExpand => {
                self.toggle_expand(&target.id);
                None
            }
            MenuAction::EmptyRecycleBin => {
                if self.store.children_of(RECYCLE_BIN_ID).is_empty() {
                    Some(Notice::new("The Recycle Bin is already empty"))
                } else {
                    Some(Notice::new("Empty Recycle Bin functionality coming soon"))
                }
            }
            MenuAction::Rename => Some(Notice::new("Rename functionality coming soon")),
            MenuAction::Download => Some(Notice::new("Download functionality coming soon")),
            MenuAction::Delete => Some(Notice::new("Delete functionality coming soon")),
            MenuAction::Properties => Some(Notice::new("Properties functionality coming soon")),
        };

        self.menu.hide();
        notice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::menu::VIEWPORT_MARGIN;

    const VIEWPORT: Size = Size {
        width: 1280.0,
        height: 800.0,
    };

    fn create_state() -> ExplorerState {
        ExplorerState::new(Arc::new(ItemStore::resume()))
    }

    fn path_names(state: &ExplorerState) -> Vec<&str> {
        state
            .current_path()
            .into_iter()
            .map(|item| item.name.as_str())
            .collect()
    }

    fn path_ids(state: &ExplorerState) -> Vec<String> {
        state
            .current_path()
            .into_iter()
            .map(|item| item.id.clone())
            .collect()
    }

    fn labels(entries: &[MenuEntry]) -> Vec<&'static str> {
        entries.iter().filter_map(MenuEntry::label).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = create_state();
        assert_eq!(state.selected_id(), None);
        assert!(state.current_path().is_empty());
        assert!(state.is_expanded("myComputer"));
        assert_eq!(state.expanded_ids().len(), 1);
        assert!(!state.menu().is_visible());
    }

    #[test]
    fn test_select_file_builds_path() {
        let mut state = create_state();
        state.select("summary");

        assert_eq!(state.selected_id(), Some("summary"));
        assert_eq!(
            path_names(&state),
            vec!["My Computer", "Resume (C:)", "Windows Resume", "Summary.exe"]
        );
        assert!(state.is_expanded("resumeDriveC"));
        assert!(state.is_expanded("windowsResume"));
        // Files are never expanded
        assert!(!state.is_expanded("summary"));
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut state = create_state();
        state.select("job1");
        let first_path = path_ids(&state);
        let first_expanded = state.expanded_ids().clone();

        state.select("job1");
        assert_eq!(state.selected_id(), Some("job1"));
        assert_eq!(path_ids(&state), first_path);
        assert_eq!(state.expanded_ids(), &first_expanded);
    }

    #[test]
    fn test_select_folder_expands_it() {
        let mut state = create_state();
        assert!(!state.is_expanded("education"));

        state.select("education");
        assert!(state.is_expanded("education"));

        // Selecting again keeps it expanded
        state.select("education");
        assert!(state.is_expanded("education"));
    }

    #[test]
    fn test_select_does_not_collapse_user_expanded_folder() {
        let mut state = create_state();
        state.toggle_expand("projects");
        state.select("projects");
        assert!(state.is_expanded("projects"));
    }

    #[test]
    fn test_select_unknown_clears_selection() {
        let mut state = create_state();
        state.select("summary");
        state.select("stale-id");
        assert_eq!(state.selected_id(), None);
        assert!(state.current_path().is_empty());

        state.select("summary");
        state.select("");
        assert_eq!(state.selected_id(), None);
        assert!(path_ids(&state).is_empty());
    }

    #[test]
    fn test_path_always_ends_at_selection() {
        let mut state = create_state();
        let ids: Vec<String> = state.store().items().iter().map(|i| i.id.clone()).collect();
        for id in ids {
            state.select(&id);
            assert_eq!(path_ids(&state).last(), Some(&id));
        }
    }

    #[test]
    fn test_clear_selection() {
        let mut state = create_state();
        state.select("skills");
        state.clear_selection();
        assert_eq!(state.selected_item(), None);
        assert!(state.current_path().is_empty());
        // Expansion survives
        assert!(state.is_expanded("windowsResume"));
    }

    #[test]
    fn test_toggle_expand_twice_restores() {
        let mut state = create_state();
        let before = state.is_expanded("documents");
        state.toggle_expand("documents");
        assert_ne!(state.is_expanded("documents"), before);
        state.toggle_expand("documents");
        assert_eq!(state.is_expanded("documents"), before);

        state.toggle_expand("myComputer");
        assert!(!state.is_expanded("myComputer"));
    }

    #[test]
    fn test_toggle_expand_ignores_files_and_unknown_ids() {
        let mut state = create_state();
        let before = state.expanded_ids().clone();
        state.toggle_expand("summary");
        state.toggle_expand("missing");
        assert_eq!(state.expanded_ids(), &before);
    }

    #[test]
    fn test_select_closes_menu() {
        let mut state = create_state();
        state.open_menu("summary", Point::new(10.0, 10.0), VIEWPORT);
        assert!(state.menu().is_visible());

        state.select("skills");
        assert!(!state.menu().is_visible());
    }

    #[test]
    fn test_open_menu_clamps_position() {
        let mut state = create_state();
        state.open_menu("summary", Point::new(1270.0, 790.0), VIEWPORT);
        let position = state.menu().position().unwrap();
        let size = menu::menu_size(&state.menu_options().unwrap());
        assert!(position.x + size.width <= VIEWPORT.width);
        assert!(position.y + size.height <= VIEWPORT.height);
        assert!(position.x >= VIEWPORT_MARGIN);
        assert!(position.y >= VIEWPORT_MARGIN);
    }

    #[test]
    fn test_open_menu_unknown_item_stays_hidden() {
        let mut state = create_state();
        state.open_menu("missing", Point::new(5.0, 5.0), VIEWPORT);
        assert!(!state.menu().is_visible());
        assert!(state.menu_options().is_none());
    }

    #[test]
    fn test_escape_and_outside_click_dismiss() {
        let mut state = create_state();
        state.open_menu("skills", Point::new(5.0, 5.0), VIEWPORT);
        state.handle_pointer_down(true);
        assert!(state.menu().is_visible());
        state.handle_key("Escape");
        assert!(!state.menu().is_visible());

        state.open_menu("skills", Point::new(5.0, 5.0), VIEWPORT);
        state.handle_pointer_down(false);
        assert!(!state.menu().is_visible());
    }

    #[test]
    fn test_invoke_open_selects_target() {
        let mut state = create_state();
        state.open_menu("job2", Point::new(5.0, 5.0), VIEWPORT);
        assert_eq!(state.invoke(MenuAction::Open), None);
        assert_eq!(state.selected_id(), Some("job2"));
        assert!(!state.menu().is_visible());
    }

    #[test]
    fn test_invoke_toggle_expand() {
        let mut state = create_state();
        state.open_menu("downloads", Point::new(5.0, 5.0), VIEWPORT);
        assert_eq!(labels(&state.menu_options().unwrap())[1], "Expand");

        state.invoke(MenuAction::ToggleExpand);
        assert!(state.is_expanded("downloads"));
        assert!(!state.menu().is_visible());

        state.open_menu("downloads", Point::new(5.0, 5.0), VIEWPORT);
        assert_eq!(labels(&state.menu_options().unwrap())[1], "Collapse");
    }

    #[test]
    fn test_placeholder_actions_notify_and_dismiss() {
        let cases = [
            (MenuAction::Rename, "Rename functionality coming soon"),
            (MenuAction::Download, "Download functionality coming soon"),
            (MenuAction::Delete, "Delete functionality coming soon"),
            (MenuAction::Properties, "Properties functionality coming soon"),
        ];
        let mut state = create_state();
        for (action, message) in cases {
            state.open_menu("project1", Point::new(5.0, 5.0), VIEWPORT);
            let notice = state.invoke(action);
            assert_eq!(notice.as_ref().map(Notice::message), Some(message));
            assert!(!state.menu().is_visible());
            assert_eq!(state.selected_id(), None);
        }
    }

    #[test]
    fn test_empty_recycle_bin_notice() {
        let mut state = create_state();
        state.open_menu(RECYCLE_BIN_ID, Point::new(5.0, 5.0), VIEWPORT);
        let notice = state.invoke(MenuAction::EmptyRecycleBin);
        assert_eq!(notice, Some(Notice::new("The Recycle Bin is already empty")));
        assert!(!state.menu().is_visible());
    }

    #[test]
    fn test_invoke_with_hidden_menu_is_noop() {
        let mut state = create_state();
        assert_eq!(state.invoke(MenuAction::Open), None);
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn test_recycle_bin_menu_end_to_end() {
        let mut state = create_state();
        state.open_menu(RECYCLE_BIN_ID, Point::new(40.0, 40.0), VIEWPORT);
        let options = state.menu_options().unwrap();

        // After the Open/Expand/separator block
        let separator = options.iter().position(MenuEntry::is_separator).unwrap();
        assert_eq!(options[separator + 1].label(), Some("Empty Recycle Bin"));
        assert!(options[separator + 2].is_separator());

        let labels = labels(&options);
        assert!(!labels.contains(&"Rename"));
        assert!(!labels.contains(&"Delete"));
        assert_eq!(labels.last(), Some(&"Properties"));
    }

    #[test]
    fn test_protected_root_menu_end_to_end() {
        let mut state = create_state();
        state.open_menu("myComputer", Point::new(40.0, 40.0), VIEWPORT);
        let options = state.menu_options().unwrap();
        let labels = labels(&options);
        assert!(!labels.contains(&"Rename"));
        assert!(!labels.contains(&"Delete"));
        assert_eq!(labels.last(), Some(&"Properties"));
    }
}
