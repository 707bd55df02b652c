//! WASM bridge for Mockflow — exposes the canvas engine to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The host owns the DOM: it
//! resolves hit targets (`closest('.screen-wrapper')` / `closest('.ui-element')`),
//! forwards events here, and writes back the returned markup.

use mf_core::{
    CanvasConfig, DocumentError, Id, Point, Size, parse_mockup_response, selection_context,
};
use mf_editor::{CanvasController, DocumentStore, InputEvent, Modifiers, PointerButton};
use mf_render::{HitTarget, StyleRegistry, render_canvas};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// What changed since the host last asked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Changes {
    content: bool,
    transform: bool,
    tool: bool,
}

/// The main WASM-facing canvas.
///
/// Holds the document store, the gesture controller, and the style
/// registry. All interaction from the page goes through this struct.
#[wasm_bindgen]
pub struct MockupCanvas {
    store: DocumentStore,
    controller: CanvasController,
    styles: StyleRegistry,
    changes: Rc<Cell<Changes>>,
}

#[wasm_bindgen]
impl MockupCanvas {
    /// Create a canvas for a container of the given pixel size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();
        Self::with_config(CanvasConfig::default(), width, height)
    }

    /// Create a canvas with a JSON `CanvasConfig` override.
    pub fn with_config_json(json: &str, width: f64, height: f64) -> Result<MockupCanvas, JsValue> {
        console_error_panic_hook_setup();
        let config = CanvasConfig::from_json(json).map_err(|err| {
            log::warn!("invalid canvas config: {err}");
            to_js(err)
        })?;
        Ok(Self::with_config(config, width, height))
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.controller.resize(Size::new(width, height));
    }

    // ─── Document ────────────────────────────────────────────────────────

    /// Load a document from raw model output or plain JSON.
    /// On failure the current document is left untouched.
    pub fn load_document(&mut self, text: &str) -> Result<(), JsValue> {
        self.try_load(text).map_err(to_js)
    }

    /// The current document as pretty JSON, or `""` if there is none.
    pub fn document_json(&self) -> String {
        self.store
            .mockup()
            .map(|doc| doc.to_json_pretty())
            .unwrap_or_default()
    }

    pub fn has_document(&self) -> bool {
        self.store.mockup().is_some()
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Handle pointer down. Returns true if state changed.
    #[allow(clippy::too_many_arguments)]
    pub fn handle_pointer_down(
        &mut self,
        x: f64,
        y: f64,
        button: i16,
        screen_id: &str,
        element_id: &str,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> bool {
        let event = InputEvent::PointerDown {
            point: Point::new(x, y),
            button: PointerButton::from_index(button),
            modifiers: Modifiers {
                shift,
                ctrl,
                alt,
                meta,
            },
            target: hit_target(screen_id, element_id),
        };
        self.dispatch(&event)
    }

    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.dispatch(&InputEvent::PointerMove {
            point: Point::new(x, y),
        })
    }

    pub fn handle_pointer_up(&mut self, x: f64, y: f64) -> bool {
        self.dispatch(&InputEvent::PointerUp {
            point: Point::new(x, y),
        })
    }

    pub fn handle_pointer_leave(&mut self) -> bool {
        self.dispatch(&InputEvent::PointerLeave)
    }

    pub fn handle_wheel(&mut self, x: f64, y: f64, delta_y: f64) -> bool {
        self.dispatch(&InputEvent::Wheel {
            point: Point::new(x, y),
            delta_y,
        })
    }

    pub fn handle_double_click(
        &mut self,
        x: f64,
        y: f64,
        screen_id: &str,
        element_id: &str,
    ) -> bool {
        self.dispatch(&InputEvent::DoubleClick {
            point: Point::new(x, y),
            target: hit_target(screen_id, element_id),
        })
    }

    /// Handle a keydown. Returns true if a shortcut fired (host should
    /// `preventDefault`).
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
        text_input_focused: bool,
    ) -> bool {
        let event = InputEvent::Key {
            key: key.to_string(),
            modifiers: Modifiers {
                shift,
                ctrl,
                alt,
                meta,
            },
            text_input_focused,
        };
        let consumed = self.controller.handle(&event, &mut self.store).consumed;
        if consumed {
            log::debug!("key {key:?} handled by canvas");
        }
        consumed
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Full canvas markup for the current document and selection.
    pub fn render_html(&mut self) -> String {
        render_canvas(self.store.mockup(), self.store.selection(), &mut self.styles)
    }

    /// Style blocks registered since the last call:
    /// `[{"id": "css-s1-e1", "css": "..."}]`.
    pub fn style_blocks_json(&mut self) -> String {
        let blocks: Vec<serde_json::Value> = self
            .styles
            .take_new()
            .iter()
            .map(|b| serde_json::json!({ "id": b.key, "css": b.css }))
            .collect();
        serde_json::Value::Array(blocks).to_string()
    }

    /// CSS `transform` for the canvas layer.
    pub fn transform_css(&self) -> String {
        self.store.view().css_transform()
    }

    pub fn zoom_label(&self) -> String {
        format!("{}%", self.store.view().zoom_percent())
    }

    /// Lasso overlay SVG content; empty when no lasso is active.
    pub fn overlay_svg(&self) -> String {
        self.controller.lasso_overlay_svg()
    }

    pub fn cursor(&self) -> String {
        self.controller.cursor(self.store.tool()).to_string()
    }

    /// Which parts of the page need refreshing since the last call:
    /// `{"content": bool, "transform": bool, "tool": bool}`.
    pub fn take_changes(&mut self) -> String {
        let changes = self.changes.replace(Changes::default());
        serde_json::json!({
            "content": changes.content,
            "transform": changes.transform,
            "tool": changes.tool,
        })
        .to_string()
    }

    // ─── Tools, view, selection ──────────────────────────────────────────

    /// Set the active tool by name (`"pan"` or `"select"`).
    pub fn set_tool(&mut self, name: &str) {
        self.store.set_tool_name(name);
    }

    pub fn tool_name(&self) -> String {
        self.store.tool().name().to_string()
    }

    pub fn fit_view(&mut self) {
        self.controller.fit_view(&mut self.store);
    }

    pub fn reset_view(&mut self) {
        self.store.reset_view();
    }

    pub fn clear_selection(&mut self) {
        self.store.clear_selection();
    }

    /// Current selection as JSON: `[{"type":"screen","id":..}, ...]`.
    pub fn selection_json(&self) -> String {
        serde_json::to_string(self.store.selection()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Selection summary for an edit request.
    pub fn edit_context(&self) -> String {
        selection_context(self.store.selection().items())
    }
}

impl MockupCanvas {
    fn with_config(config: CanvasConfig, width: f64, height: f64) -> Self {
        let mut store = DocumentStore::new(&config);
        let changes = Rc::new(Cell::new(Changes::default()));
        let sink = Rc::clone(&changes);
        store.subscribe(move |new, old| {
            let mut c = sink.get();
            c.content |= new.mockup_changed(old) || new.selection != old.selection;
            c.transform |= new.view_changed(old);
            c.tool |= new.tool != old.tool;
            sink.set(c);
        });

        Self {
            store,
            controller: CanvasController::new(config, Size::new(width, height)),
            styles: StyleRegistry::new(),
            changes,
        }
    }

    fn try_load(&mut self, text: &str) -> Result<(), DocumentError> {
        let doc = match parse_mockup_response(text) {
            Ok(doc) => doc,
            Err(err) => {
                log::warn!("rejected document, keeping the current one: {err}");
                return Err(err);
            }
        };
        log::info!(
            "loaded {:?}: {} screens, {} flows",
            doc.app_name,
            doc.screens.len(),
            doc.flows.len()
        );
        self.store.set_mockup(doc);
        Ok(())
    }

    fn dispatch(&mut self, event: &InputEvent) -> bool {
        self.controller.handle(event, &mut self.store).repaint
    }
}

/// Host-resolved ids → hit target. An empty screen id means background.
fn hit_target(screen_id: &str, element_id: &str) -> Option<HitTarget> {
    if screen_id.is_empty() {
        return None;
    }
    let screen_id = Id::intern(screen_id);
    Some(if element_id.is_empty() {
        HitTarget::Screen(screen_id)
    } else {
        HitTarget::Element {
            screen_id,
            id: Id::intern(element_id),
        }
    })
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Mockflow WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = r#"{
        "appName": "Notes",
        "screens": [
            { "id": "list", "name": "List", "position": { "x": 0, "y": 0 },
              "elements": [{ "id": "t", "type": "text", "content": "Notes" }] },
            { "id": "note", "name": "Note", "position": { "x": 400, "y": 0 }, "elements": [] }
        ],
        "flows": [{ "from": "list", "to": "note", "label": "Open", "type": "tap" }]
    }"#;

    fn canvas() -> MockupCanvas {
        let mut c = MockupCanvas::new(1280.0, 800.0);
        c.try_load(DOC).unwrap();
        c
    }

    #[test]
    fn hit_target_from_ids() {
        assert_eq!(hit_target("", "x"), None);
        assert_eq!(hit_target("s", ""), Some(HitTarget::Screen(Id::intern("s"))));
        assert_eq!(
            hit_target("s", "e"),
            Some(HitTarget::Element {
                screen_id: Id::intern("s"),
                id: Id::intern("e")
            })
        );
    }

    #[test]
    fn click_selects_and_reports_content_change() {
        let mut c = canvas();
        c.take_changes();
        assert!(c.handle_pointer_down(10.0, 10.0, 0, "list", "t", false, false, false, false));
        assert_eq!(
            c.selection_json(),
            r#"[{"type":"element","screenId":"list","id":"t"}]"#
        );
        assert_eq!(
            c.take_changes(),
            r#"{"content":true,"tool":false,"transform":false}"#
        );
        assert_eq!(c.edit_context(), "Selected elements: list/t");
        assert!(c.render_html().contains("selected\" data-element-id=\"t\""));
    }

    #[test]
    fn bad_document_keeps_previous() {
        let mut c = canvas();
        assert!(matches!(c.try_load("no json here"), Err(DocumentError::NoJson)));
        assert!(c.document_json().contains("\"appName\": \"Notes\""));
    }

    #[test]
    fn rejected_document_reports_no_changes() {
        let mut c = canvas();
        c.take_changes();
        assert!(c.try_load("```json\n{\"screens\": [ }\n```").is_err());
        assert_eq!(
            c.take_changes(),
            r#"{"content":false,"tool":false,"transform":false}"#
        );
    }

    #[test]
    fn wheel_updates_zoom_label_and_transform() {
        let mut c = canvas();
        assert_eq!(c.zoom_label(), "100%");
        assert!(c.handle_wheel(0.0, 0.0, -1.0));
        assert_eq!(c.zoom_label(), "110%");
        assert_eq!(c.transform_css(), "translate(0px, 0px) scale(1.1)");
    }

    #[test]
    fn tool_switch_by_key_and_name() {
        let mut c = canvas();
        assert!(c.handle_key("h", false, false, false, false, false));
        assert_eq!(c.tool_name(), "pan");
        assert_eq!(c.cursor(), "grab");
        c.set_tool("select");
        assert_eq!(c.cursor(), "crosshair");
    }

    #[test]
    fn lasso_overlay_while_dragging() {
        let mut c = canvas();
        c.handle_pointer_down(0.0, 0.0, 0, "", "", false, false, false, false);
        c.handle_pointer_move(40.0, 0.0);
        assert_eq!(
            c.overlay_svg(),
            r#"<ellipse class="selection-circle" cx="20" cy="0" rx="20" ry="20"/>"#
        );
        c.handle_pointer_up(40.0, 0.0);
        assert_eq!(c.overlay_svg(), "");
    }
}
