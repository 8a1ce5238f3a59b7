//! Context menu data types.

/// Action a context menu option dispatches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Open,
    ToggleExpand,
    EmptyRecycleBin,
    Rename,
    Download,
    Delete,
    Properties,
}

/// A clickable menu option.
///
/// `bold` and `disabled` only affect rendering; dispatch ignores them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuOption {
    pub action: MenuAction,
    pub label: &'static str,
    pub bold: bool,
    pub disabled: bool,
}

impl MenuOption {
    pub fn new(action: MenuAction, label: &'static str) -> Self {
        Self {
            action,
            label,
            bold: false,
            disabled: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// One row of a context menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    Action(MenuOption),
    Separator,
}

impl MenuEntry {
    pub fn is_separator(&self) -> bool {
        matches!(self, MenuEntry::Separator)
    }

    /// Label of an action row (None for separators).
    pub fn label(&self) -> Option<&'static str> {
        match self {
            MenuEntry::Action(option) => Some(option.label),
            MenuEntry::Separator => None,
        }
    }
}

/// Pointer position in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width/height pair in CSS pixels, used for both the viewport and the menu.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// User-visible message produced by a menu action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice(pub String);

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// The toast currently on screen, tagged with a generation.
///
/// Every [`NoticeSlot::show`] bumps the generation, so an expiry timer started
/// for an earlier notice never clears a later one, even with the same text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    generation: u64,
}

impl NoticeSlot {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the shown notice; returns the generation to expire it with.
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(notice);
        self.generation
    }

    /// Clear the notice if it is still the one shown at `generation`.
    pub fn expire(&mut self, generation: u64) {
        if self.generation == generation {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_clears_current_notice() {
        let mut slot = NoticeSlot::default();
        let generation = slot.show(Notice::new("Saved"));
        slot.expire(generation);
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn test_stale_expiry_keeps_repeated_notice() {
        let mut slot = NoticeSlot::default();
        let first = slot.show(Notice::new("Rename functionality coming soon"));
        let second = slot.show(Notice::new("Rename functionality coming soon"));
        assert_ne!(first, second);

        slot.expire(first);
        assert_eq!(
            slot.current().map(Notice::message),
            Some("Rename functionality coming soon")
        );

        slot.expire(second);
        assert_eq!(slot.current(), None);
    }
}
