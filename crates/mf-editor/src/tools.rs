//! Canvas tools.
//!
//! The active tool decides what a press on empty canvas starts:
//!
//! | Press                     | Pan tool | Select tool |
//! |---------------------------|----------|-------------|
//! | Primary                   | pan      | lasso       |
//! | Primary + Alt             | pan      | pan         |
//! | Middle                    | pan      | pan         |
//! | Secondary                 | —        | —           |
//!
//! Presses that land on a screen or element are selection clicks
//! regardless of tool.

use crate::input::{Modifiers, PointerButton};

/// The active tool determines how background presses are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    Pan,
    #[default]
    Select,
}

/// Drag gesture a background press starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Pan,
    Lasso,
}

impl ToolKind {
    /// Parse a tool name; unknown names select the select tool.
    pub fn from_name(name: &str) -> Self {
        match name {
            "pan" | "hand" => ToolKind::Pan,
            _ => ToolKind::Select,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pan => "pan",
            ToolKind::Select => "select",
        }
    }

    /// CSS cursor while idle.
    pub fn cursor(self) -> &'static str {
        match self {
            ToolKind::Pan => "grab",
            ToolKind::Select => "crosshair",
        }
    }

    /// What a press on empty canvas starts, if anything.
    pub fn drag_for(self, button: PointerButton, modifiers: Modifiers) -> Option<DragKind> {
        match button {
            PointerButton::Secondary => None,
            PointerButton::Middle => Some(DragKind::Pan),
            PointerButton::Primary if self == ToolKind::Pan || modifiers.alt => Some(DragKind::Pan),
            PointerButton::Primary => Some(DragKind::Lasso),
        }
    }
}
