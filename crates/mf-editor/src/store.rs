//! Observable editor state.
//!
//! `DocumentStore` is the single writer of the document, tool, view, and
//! selection. Every mutation snapshots the old state, applies the change,
//! and synchronously notifies subscribers with `(new, old)`. Writes that
//! leave the state unchanged notify nobody.

use crate::tools::ToolKind;
use mf_core::{
    CanvasConfig, Id, MockupDocument, SelectionItem, SelectionSet, Vec2, ViewTransform,
};
use std::rc::Rc;

/// Snapshot of everything the canvas renders from.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Shared so snapshots stay cheap; replaced wholesale, never mutated.
    pub mockup: Option<Rc<MockupDocument>>,
    pub tool: ToolKind,
    pub zoom: f64,
    pub pan: Vec2,
    pub selection: SelectionSet,
}

impl EditorState {
    pub fn view(&self) -> ViewTransform {
        ViewTransform::new(self.pan, self.zoom)
    }

    /// Documents compare by identity: a reload is a change even if equal.
    fn same_as(&self, other: &EditorState) -> bool {
        let same_doc = match (&self.mockup, &other.mockup) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_doc
            && self.tool == other.tool
            && self.zoom == other.zoom
            && self.pan == other.pan
            && self.selection == other.selection
    }

    /// Whether the document changed between two snapshots.
    pub fn mockup_changed(&self, old: &EditorState) -> bool {
        match (&self.mockup, &old.mockup) {
            (Some(a), Some(b)) => !Rc::ptr_eq(a, b),
            (None, None) => false,
            _ => true,
        }
    }

    pub fn view_changed(&self, old: &EditorState) -> bool {
        self.zoom != old.zoom || self.pan != old.pan
    }
}

/// Handle returned by [`DocumentStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&EditorState, &EditorState)>;

pub struct DocumentStore {
    state: EditorState,
    neutral: ViewTransform,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    /// Bumped on every notifying change.
    revision: u64,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new(&CanvasConfig::default())
    }
}

impl DocumentStore {
    pub fn new(config: &CanvasConfig) -> Self {
        let neutral = ViewTransform::from_config(config);
        Self {
            state: EditorState {
                mockup: None,
                tool: ToolKind::default(),
                zoom: neutral.zoom,
                pan: neutral.pan,
                selection: SelectionSet::new(),
            },
            neutral,
            listeners: Vec::new(),
            next_subscription: 0,
            revision: 0,
        }
    }

    // ─── Reads ───────────────────────────────────────────────────────────

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn mockup(&self) -> Option<&MockupDocument> {
        self.state.mockup.as_deref()
    }

    pub fn tool(&self) -> ToolKind {
        self.state.tool
    }

    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    pub fn pan(&self) -> Vec2 {
        self.state.pan
    }

    pub fn view(&self) -> ViewTransform {
        self.state.view()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.state.selection
    }

    pub fn is_screen_selected(&self, id: Id) -> bool {
        self.state.selection.is_screen_selected(id)
    }

    pub fn is_element_selected(&self, screen_id: Id, id: Id) -> bool {
        self.state.selection.is_element_selected(screen_id, id)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ─── Subscriptions ───────────────────────────────────────────────────

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&EditorState, &EditorState) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn update(&mut self, what: &str, apply: impl FnOnce(&mut EditorState)) {
        let old = self.state.clone();
        apply(&mut self.state);
        if self.state.same_as(&old) {
            return;
        }
        self.revision += 1;
        log::debug!(
            "store: {what} (rev {}, {} listeners)",
            self.revision,
            self.listeners.len()
        );
        for (_, listener) in &mut self.listeners {
            listener(&self.state, &old);
        }
    }

    // ─── Writes ──────────────────────────────────────────────────────────

    /// Replace the document.
    ///
    /// The selection outlives the swap: every item whose screen (and element)
    /// still exists stays selected, in its original order. Items pointing at
    /// ids the new document no longer has are dropped, so an edit request
    /// never names something that is gone.
    pub fn set_mockup(&mut self, doc: MockupDocument) {
        let doc = Rc::new(doc);
        self.update("set mockup", |state| {
            let kept: Vec<SelectionItem> = state
                .selection
                .items()
                .iter()
                .copied()
                .filter(|item| match *item {
                    SelectionItem::Screen { id } => doc.screen(id).is_some(),
                    SelectionItem::Element { screen_id, id } => doc
                        .screen(screen_id)
                        .is_some_and(|s| s.find_element(id).is_some()),
                })
                .collect();
            state.selection.select_multiple(kept);
            state.mockup = Some(doc);
        });
    }

    pub fn clear_mockup(&mut self) {
        self.update("clear mockup", |state| {
            state.mockup = None;
            state.selection.clear();
        });
    }

    /// Set the zoom. Non-finite or non-positive values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !(zoom.is_finite() && zoom > 0.0) {
            log::warn!("ignoring invalid zoom {zoom}");
            return;
        }
        self.update("set zoom", |state| state.zoom = zoom);
    }

    pub fn set_pan(&mut self, pan: Vec2) {
        self.update("set pan", |state| state.pan = pan);
    }

    /// Set zoom and pan together, with a single notification.
    pub fn set_view(&mut self, view: ViewTransform) {
        if !(view.zoom.is_finite() && view.zoom > 0.0) {
            log::warn!("ignoring invalid zoom {}", view.zoom);
            return;
        }
        self.update("set view", |state| {
            state.zoom = view.zoom;
            state.pan = view.pan;
        });
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.update("set tool", |state| state.tool = tool);
    }

    pub fn set_tool_name(&mut self, name: &str) {
        self.set_tool(ToolKind::from_name(name));
    }

    /// Restore the neutral view.
    pub fn reset_view(&mut self) {
        let neutral = self.neutral;
        self.set_view(neutral);
    }

    pub fn select_screen(&mut self, id: Id, additive: bool) {
        self.update("select screen", |state| {
            state.selection.select_screen(id, additive)
        });
    }

    pub fn select_element(&mut self, screen_id: Id, id: Id, additive: bool) {
        self.update("select element", |state| {
            state.selection.select_element(screen_id, id, additive)
        });
    }

    pub fn select_multiple(&mut self, items: Vec<SelectionItem>) {
        self.update("select multiple", |state| {
            state.selection.select_multiple(items)
        });
    }

    pub fn clear_selection(&mut self) {
        self.update("clear selection", |state| state.selection.clear());
    }
}
