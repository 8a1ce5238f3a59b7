//! Explorer item types.
//!
//! Items form a flat table; hierarchy is expressed only through `parent_id`.
//! A folder's children are derived by filtering on that pointer, never stored.

/// Icon hint attached to an item.
///
/// Hints drive icon selection in the UI. [`ItemIcon::Shortcut`] additionally
/// marks shortcut files, which cannot be downloaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItemIcon {
    Computer,
    UserProfile,
    Drive,
    RecycleBin,
    #[default]
    Folder,
    SecureFolder,
    Text,
    WordDocument,
    Executable,
    Data,
    Certificate,
    Settings,
    Url,
    Shortcut,
}

/// Folder/file variant of an item.
///
/// Content only exists on files, so a folder can never carry a payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Folder,
    File {
        /// Markdown body shown in the content view.
        content: String,
    },
}

/// A node in the explorer tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Unique id across the whole store
    pub id: String,
    /// Display name
    pub name: String,
    /// Parent id (None for roots)
    pub parent_id: Option<String>,
    /// Icon hint
    pub icon: ItemIcon,
    /// Short type description ("File folder", "Text Document", ...)
    pub details: String,
    /// Folder or file payload
    pub kind: ItemKind,
}

impl Item {
    /// Create a folder item.
    pub fn folder(
        id: &str,
        name: &str,
        parent_id: Option<&str>,
        icon: ItemIcon,
        details: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            parent_id: parent_id.map(str::to_string),
            icon,
            details: details.to_string(),
            kind: ItemKind::Folder,
        }
    }

    /// Create a file item with Markdown content.
    pub fn file(
        id: &str,
        name: &str,
        parent_id: &str,
        icon: ItemIcon,
        details: &str,
        content: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            parent_id: Some(parent_id.to_string()),
            icon,
            details: details.to_string(),
            kind: ItemKind::File {
                content: content.to_string(),
            },
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, ItemKind::Folder)
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Shortcut files (`.lnk`) point elsewhere and have nothing to download.
    pub fn is_shortcut(&self) -> bool {
        !self.is_folder() && self.icon == ItemIcon::Shortcut
    }

    /// File content (files only).
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::File { content } => Some(content),
            ItemKind::Folder => None,
        }
    }
}
