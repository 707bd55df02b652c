//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s. The map lives
//! in Rust so the browser bridge and native hosts share it.

use crate::input::Modifiers;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── Tool switching ──
    ToolPan,
    ToolSelect,

    // ── Selection ──
    Deselect,

    // ── View ──
    ResetView,
}

/// Resolves key events into shortcut actions.
///
/// Uses platform-aware modifier detection: on macOS `meta` is ⌘,
/// on other platforms `ctrl` serves the same role.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value. Returns `None` if the combo
    /// has no binding.
    pub fn resolve(key: &str, modifiers: Modifiers) -> Option<ShortcutAction> {
        if modifiers.command() {
            return match key {
                "0" => Some(ShortcutAction::ResetView),
                _ => None,
            };
        }

        match key {
            "h" | "H" => Some(ShortcutAction::ToolPan),
            "v" | "V" => Some(ShortcutAction::ToolSelect),
            "Escape" => Some(ShortcutAction::Deselect),
            _ => None,
        }
    }

    /// Like [`resolve`](Self::resolve), but nothing fires while a text
    /// field has focus.
    pub fn resolve_for_canvas(
        key: &str,
        modifiers: Modifiers,
        text_input_focused: bool,
    ) -> Option<ShortcutAction> {
        if text_input_focused {
            return None;
        }
        Self::resolve(key, modifiers)
    }
}
