//! Canvas controller: the pointer gesture state machine.
//!
//! ```text
//!            press on background            move: pan += delta
//!   Idle ───────────────────────────▶ Panning ─────┐
//!    ▲  │                                 │  ◀─────┘
//!    │  │                                 │ up / leave
//!    │  └───────────────▶ Selecting ──────┴──────────▶ Idle
//!    │   press (select)      │ move: redraw lasso
//!    └───────────────────────┘ up / leave: finalize lasso
//! ```
//!
//! Presses that land on a screen or element are selection clicks and never
//! start a drag. All handlers run to completion; the store notifies its
//! subscribers synchronously from inside each handler.

use crate::input::{InputEvent, Modifiers, PointerButton};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::store::DocumentStore;
use crate::tools::{DragKind, ToolKind};
use mf_core::{CanvasConfig, Point, Size, Vec2};
use mf_render::{HitTarget, Lasso, hit_test, lasso_select};

/// Current gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Idle,
    Panning { last: Point },
    Selecting { start: Point, current: Point },
}

/// What the host should do after an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Response {
    /// Store state changed; re-render the canvas and/or transform.
    pub repaint: bool,
    /// The lasso overlay appeared, moved, or disappeared.
    pub overlay_changed: bool,
    /// The event was fully handled (host should stop propagation).
    pub consumed: bool,
}

pub struct CanvasController {
    config: CanvasConfig,
    viewport: Size,
    gesture: Gesture,
}

impl CanvasController {
    pub fn new(config: CanvasConfig, viewport: Size) -> Self {
        Self {
            config,
            viewport,
            gesture: Gesture::Idle,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Geometric hit lookup for hosts that cannot resolve targets themselves.
    pub fn hit_at(&self, point: Point, store: &DocumentStore) -> Option<HitTarget> {
        let doc = store.mockup()?;
        hit_test(doc, &store.view(), point, &self.config)
    }

    /// The in-progress lasso, if selecting.
    pub fn lasso_overlay(&self) -> Option<Lasso> {
        match self.gesture {
            Gesture::Selecting { start, current } => Some(Lasso::from_drag(start, current)),
            _ => None,
        }
    }

    /// Overlay SVG content; empty when no lasso is active.
    pub fn lasso_overlay_svg(&self) -> String {
        self.lasso_overlay()
            .map(|lasso| lasso.to_svg())
            .unwrap_or_default()
    }

    /// CSS cursor for the container.
    pub fn cursor(&self, tool: ToolKind) -> &'static str {
        match self.gesture {
            Gesture::Panning { .. } => "grabbing",
            _ => tool.cursor(),
        }
    }

    /// Dispatch one input event.
    pub fn handle(&mut self, event: &InputEvent, store: &mut DocumentStore) -> Response {
        let revision = store.revision();
        let had_overlay = self.lasso_overlay();

        let consumed = match event {
            InputEvent::PointerDown {
                point,
                button,
                modifiers,
                target,
            } => self.pointer_down(*point, *button, *modifiers, *target, store),
            InputEvent::PointerMove { point } => self.pointer_move(*point, store),
            InputEvent::PointerUp { point } => self.pointer_up(Some(*point), store),
            InputEvent::PointerLeave => self.pointer_up(None, store),
            InputEvent::Wheel { point, delta_y } => {
                let mut view = store.view();
                view.wheel(*point, *delta_y, &self.config);
                store.set_view(view);
                true
            }
            InputEvent::DoubleClick { target, .. } => {
                // Double-click on a screen is reserved.
                if target.is_none() {
                    self.fit_view(store);
                }
                target.is_none()
            }
            InputEvent::Key {
                key,
                modifiers,
                text_input_focused,
            } => self.key(key, *modifiers, *text_input_focused, store),
        };

        Response {
            repaint: store.revision() != revision,
            overlay_changed: self.lasso_overlay() != had_overlay,
            consumed,
        }
    }

    fn pointer_down(
        &mut self,
        point: Point,
        button: PointerButton,
        modifiers: Modifiers,
        target: Option<HitTarget>,
        store: &mut DocumentStore,
    ) -> bool {
        if let Some(target) = target {
            let additive = modifiers.additive();
            log::debug!("selection click on {target:?} (additive: {additive})");
            match target {
                HitTarget::Screen(id) => store.select_screen(id, additive),
                HitTarget::Element { screen_id, id } => {
                    store.select_element(screen_id, id, additive)
                }
            }
            return true;
        }

        match store.tool().drag_for(button, modifiers) {
            Some(DragKind::Pan) => {
                log::debug!("gesture: idle -> panning at {point:?}");
                self.gesture = Gesture::Panning { last: point };
                true
            }
            Some(DragKind::Lasso) => {
                log::debug!("gesture: idle -> selecting at {point:?}");
                self.gesture = Gesture::Selecting {
                    start: point,
                    current: point,
                };
                true
            }
            None => false,
        }
    }

    fn pointer_move(&mut self, point: Point, store: &mut DocumentStore) -> bool {
        match &mut self.gesture {
            Gesture::Idle => false,
            Gesture::Panning { last } => {
                let delta: Vec2 = point - *last;
                *last = point;
                store.set_pan(store.pan() + delta);
                true
            }
            Gesture::Selecting { current, .. } => {
                *current = point;
                true
            }
        }
    }

    /// Finish the current gesture. `point` is `None` when the pointer left
    /// the container; the lasso then finalizes at its last position.
    fn pointer_up(&mut self, point: Option<Point>, store: &mut DocumentStore) -> bool {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Idle => false,
            Gesture::Panning { .. } => {
                log::debug!("gesture: panning -> idle");
                true
            }
            Gesture::Selecting { start, current } => {
                let end = point.unwrap_or(current);
                self.finish_lasso(Lasso::from_drag(start, end), store);
                true
            }
        }
    }

    fn finish_lasso(&self, lasso: Lasso, store: &mut DocumentStore) {
        let Some(doc) = store.mockup() else {
            log::debug!("gesture: selecting -> idle (no document)");
            return;
        };
        let items = lasso_select(doc, &store.view(), &lasso, &self.config);
        log::debug!(
            "gesture: selecting -> idle (radius {:.1}, {} hits)",
            lasso.radius,
            items.len()
        );
        // An empty lasso leaves the previous selection in place.
        if !items.is_empty() {
            store.select_multiple(items);
        }
    }

    fn key(
        &mut self,
        key: &str,
        modifiers: Modifiers,
        text_input_focused: bool,
        store: &mut DocumentStore,
    ) -> bool {
        let Some(action) = ShortcutMap::resolve_for_canvas(key, modifiers, text_input_focused)
        else {
            return false;
        };
        log::debug!("shortcut {key:?} -> {action:?}");
        match action {
            ShortcutAction::ToolPan => store.set_tool(ToolKind::Pan),
            ShortcutAction::ToolSelect => store.set_tool(ToolKind::Select),
            ShortcutAction::Deselect => store.clear_selection(),
            ShortcutAction::ResetView => store.reset_view(),
        }
        true
    }

    /// Frame every screen in the viewport; resets when there is nothing to frame.
    pub fn fit_view(&self, store: &mut DocumentStore) {
        let mut view = store.view();
        let screens = store.mockup().map(|doc| doc.screens.as_slice()).unwrap_or(&[]);
        view.fit_to_content(screens, self.viewport, &self.config);
        store.set_view(view);
    }
}
