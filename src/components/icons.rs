//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::{Item, ItemIcon};

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as Back, LuAward as Certificate, LuChevronDown as ChevronDown,
        LuChevronRight as ChevronRight, LuDatabase as Data, LuDownload as Download,
        LuFileCode as Executable, LuFileText as Text, LuFolder as Folder,
        LuFolderLock as SecureFolder, LuFolderOpen as FolderOpen, LuHardDrive as Drive,
        LuLink as Url, LuMonitor as Computer, LuMoon as Moon, LuPencil as Edit, LuPlus as Plus,
        LuSave as Save, LuSettings as Settings, LuShare2 as Shortcut, LuSun as Sun,
        LuTrash2 as RecycleBin, LuUser as UserProfile, LuFileType as WordDocument,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowLeft as Back, BsAward as Certificate, BsBoxArrowUpRight as Shortcut,
        BsChevronDown as ChevronDown, BsChevronRight as ChevronRight, BsDatabase as Data,
        BsDownload as Download, BsFileEarmarkCode as Executable, BsFileEarmarkText as Text,
        BsFileEarmarkWord as WordDocument, BsSave as Save, BsFolder2Open as FolderOpen,
        BsFolderFill as Folder, BsFolderSymlink as SecureFolder, BsGear as Settings,
        BsHddFill as Drive, BsLink45deg as Url, BsMoonFill as Moon, BsPcDisplay as Computer,
        BsPencil as Edit, BsPersonCircle as UserProfile, BsPlusLg as Plus, BsSunFill as Sun,
        BsTrash as RecycleBin, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(COMPUTER, Computer);
themed_icon!(USER_PROFILE, UserProfile);
themed_icon!(DRIVE, Drive);
themed_icon!(RECYCLE_BIN, RecycleBin);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_OPEN, FolderOpen);
themed_icon!(SECURE_FOLDER, SecureFolder);
themed_icon!(TEXT, Text);
themed_icon!(WORD_DOCUMENT, WordDocument);
themed_icon!(EXECUTABLE, Executable);
themed_icon!(DATA, Data);
themed_icon!(CERTIFICATE, Certificate);
themed_icon!(SETTINGS, Settings);
themed_icon!(URL, Url);
themed_icon!(SHORTCUT, Shortcut);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(MOON, Moon);
themed_icon!(SUN, Sun);
themed_icon!(BACK, Back);
themed_icon!(PLUS, Plus);
themed_icon!(EDIT, Edit);
themed_icon!(CLOSE, Close);
themed_icon!(SAVE, Save);
themed_icon!(DOWNLOAD, Download);

/// Icon for an explorer item. Plain folders switch to an open folder while expanded.
pub fn for_item(item: &Item, expanded: bool) -> Icon {
    match item.icon {
        ItemIcon::Computer => COMPUTER,
        ItemIcon::UserProfile => USER_PROFILE,
        ItemIcon::Drive => DRIVE,
        ItemIcon::RecycleBin => RECYCLE_BIN,
        ItemIcon::Folder if expanded => FOLDER_OPEN,
        ItemIcon::Folder => FOLDER,
        ItemIcon::SecureFolder => SECURE_FOLDER,
        ItemIcon::Text => TEXT,
        ItemIcon::WordDocument => WORD_DOCUMENT,
        ItemIcon::Executable => EXECUTABLE,
        ItemIcon::Data => DATA,
        ItemIcon::Certificate => CERTIFICATE,
        ItemIcon::Settings => SETTINGS,
        ItemIcon::Url => URL,
        ItemIcon::Shortcut => SHORTCUT,
    }
}
