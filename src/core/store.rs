use std::collections::{HashMap, HashSet};

use crate::config::MAX_TREE_DEPTH;
use crate::core::error::TreeError;
use crate::models::Item;

/// Read-only table of explorer items.
///
/// Items are kept in insertion order, which is the only ordering signal:
/// children and roots are always returned in the order they were inserted.
///
/// # Hierarchy
///
/// - Roots have `parent_id == None` (there may be several)
/// - A folder's children are exactly the items whose `parent_id` is its id
/// - No child-id lists are stored, so there is nothing to keep in sync
#[derive(Clone, Debug, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    /// id -> index into `items` (first occurrence wins)
    index: HashMap<String, usize>,
}

impl ItemStore {
    /// Build a store from items in display order.
    pub fn new(items: Vec<Item>) -> Self {
        let mut index = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            index.entry(item.id.clone()).or_insert(i);
        }
        Self { items, index }
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Look up an item. Stale or unknown ids simply return `None`.
    pub fn item_by_id(&self, id: &str) -> Option<&Item> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// Top-level items (no parent), in insertion order.
    pub fn roots(&self) -> Vec<&Item> {
        self.items().iter().filter(|item| item.is_root()).collect()
    }

    /// Items whose parent is `parent_id`, in insertion order.
    pub fn children_of(&self, parent_id: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.parent_id.as_deref() == Some(parent_id))
            .collect()
    }

    /// Ordered path from the topmost ancestor down to `id` (inclusive).
    ///
    /// Returns an empty path if `id` does not resolve. A dangling parent ends
    /// the walk at the last item that resolved. Walks longer than
    /// [`MAX_TREE_DEPTH`] indicate a cycle and also yield an empty path.
    pub fn path_to(&self, id: &str) -> Vec<&Item> {
        let mut path = Vec::new();
        let mut current = self.item_by_id(id);

        while let Some(item) = current {
            if path.len() >= MAX_TREE_DEPTH {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(
                    &format!("path_to('{}') exceeded maximum depth", id).into(),
                );
                return Vec::new();
            }
            path.push(item);
            current = item
                .parent_id
                .as_deref()
                .and_then(|parent| self.item_by_id(parent));
        }

        path.reverse();
        path
    }

    /// Every item transitively below `folder_id`, in pre-order.
    ///
    /// Each child is followed by its own descendants before the next sibling.
    /// Fails with [`TreeError::DepthExceeded`] when nesting goes past
    /// [`MAX_TREE_DEPTH`], which can only happen with a cyclic store.
    pub fn descendants_of(&self, folder_id: &str) -> Result<Vec<&Item>, TreeError> {
        let mut out = Vec::new();
        // Stack of (item, depth below folder_id), children pushed in reverse
        // so they pop in insertion order.
        let mut stack: Vec<(&Item, usize)> = self
            .children_of(folder_id)
            .into_iter()
            .rev()
            .map(|child| (child, 1))
            .collect();

        while let Some((item, depth)) = stack.pop() {
            if depth > MAX_TREE_DEPTH {
                return Err(TreeError::DepthExceeded {
                    id: folder_id.to_string(),
                    max_depth: MAX_TREE_DEPTH,
                });
            }
            out.push(item);
            if item.is_folder() {
                stack.extend(
                    self.children_of(&item.id)
                        .into_iter()
                        .rev()
                        .map(|child| (child, depth + 1)),
                );
            }
        }

        Ok(out)
    }

    /// Check the structural invariants of the table.
    ///
    /// Reports the first violation found: duplicate ids, parents that do
    /// not exist, then parent cycles.
    pub fn validate(&self) -> Result<(), TreeError> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                return Err(TreeError::DuplicateId(item.id.clone()));
            }
        }

        for item in &self.items {
            if let Some(parent) = &item.parent_id
                && self.item_by_id(parent).is_none()
            {
                return Err(TreeError::DanglingParent {
                    id: item.id.clone(),
                    parent: parent.clone(),
                });
            }
        }

        for item in &self.items {
            let mut visited = HashSet::new();
            let mut current = Some(item);
            while let Some(node) = current {
                if !visited.insert(node.id.as_str()) {
                    return Err(TreeError::Cycle(item.id.clone()));
                }
                current = node
                    .parent_id
                    .as_deref()
                    .and_then(|parent| self.item_by_id(parent));
            }
        }

        Ok(())
    }
}
