//! Input abstraction layer.
//!
//! Normalizes host pointer, wheel, and keyboard events into a unified
//! `InputEvent` consumed by the canvas controller. Coordinates are in
//! container pixels (screen space).

use mf_core::Point;
use mf_render::HitTarget;

/// Which mouse button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

impl PointerButton {
    /// From a DOM `MouseEvent.button` index.
    pub fn from_index(index: i16) -> Self {
        match index {
            1 => PointerButton::Middle,
            2 => PointerButton::Secondary,
            _ => PointerButton::Primary,
        }
    }
}

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Extends the selection instead of replacing it.
    pub fn additive(self) -> bool {
        self.shift || self.ctrl || self.meta
    }

    /// Platform command key: ⌘ on macOS, Ctrl elsewhere.
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// A normalized input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Button pressed. `target` is what the host resolved under the
    /// pointer (DOM lookup in the browser, [`mf_render::hit_test`] elsewhere).
    PointerDown {
        point: Point,
        button: PointerButton,
        modifiers: Modifiers,
        target: Option<HitTarget>,
    },
    PointerMove {
        point: Point,
    },
    PointerUp {
        point: Point,
    },
    /// Pointer left the container; ends any gesture at the last position.
    PointerLeave,
    /// Wheel notch at `point`; positive `delta_y` scrolls out.
    Wheel {
        point: Point,
        delta_y: f64,
    },
    DoubleClick {
        point: Point,
        target: Option<HitTarget>,
    },
    Key {
        /// `KeyboardEvent.key` value (e.g. `"h"`, `"Escape"`).
        key: String,
        modifiers: Modifiers,
        /// A text field has focus; canvas shortcuts stand down.
        text_input_focused: bool,
    },
}

impl InputEvent {
    /// Extract position if this is a positioned event.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { point, .. }
            | Self::PointerMove { point }
            | Self::PointerUp { point }
            | Self::Wheel { point, .. }
            | Self::DoubleClick { point, .. } => Some(*point),
            Self::PointerLeave | Self::Key { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additive_and_command_modifiers() {
        let shift = Modifiers {
            shift: true,
            ..Modifiers::NONE
        };
        let meta = Modifiers {
            meta: true,
            ..Modifiers::NONE
        };
        let alt = Modifiers {
            alt: true,
            ..Modifiers::NONE
        };
        assert!(shift.additive() && !shift.command());
        assert!(meta.additive() && meta.command());
        assert!(!alt.additive() && !alt.command());
    }

    #[test]
    fn button_from_dom_index() {
        assert_eq!(PointerButton::from_index(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_index(1), PointerButton::Middle);
        assert_eq!(PointerButton::from_index(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_index(7), PointerButton::Primary);
    }

    #[test]
    fn position_of_events() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(InputEvent::PointerMove { point: p }.position(), Some(p));
        assert_eq!(InputEvent::PointerLeave.position(), None);
    }
}
