//! Selection state: which screens and elements are selected.

use crate::id::Id;
use serde::{Deserialize, Serialize};

/// One selected thing. Serialized as `{type: "screen", id}` or
/// `{type: "element", screenId, id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SelectionItem {
    Screen {
        id: Id,
    },
    Element {
        #[serde(rename = "screenId")]
        screen_id: Id,
        id: Id,
    },
}

impl SelectionItem {
    pub fn screen(id: impl Into<Id>) -> Self {
        SelectionItem::Screen { id: id.into() }
    }

    pub fn element(screen_id: impl Into<Id>, id: impl Into<Id>) -> Self {
        SelectionItem::Element {
            screen_id: screen_id.into(),
            id: id.into(),
        }
    }
}

/// Insertion-ordered, duplicate-free set of selected items.
///
/// Only mutated through the explicit operations below; the store wraps each
/// call with change notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    items: Vec<SelectionItem>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a screen, replacing the selection unless `additive`.
    pub fn select_screen(&mut self, id: Id, additive: bool) {
        self.select(SelectionItem::Screen { id }, additive);
    }

    /// Select an element, replacing the selection unless `additive`.
    pub fn select_element(&mut self, screen_id: Id, id: Id, additive: bool) {
        self.select(SelectionItem::Element { screen_id, id }, additive);
    }

    /// Replace the selection with a batch (e.g. a lasso result).
    pub fn select_multiple(&mut self, items: impl IntoIterator<Item = SelectionItem>) {
        self.items.clear();
        for item in items {
            self.insert(item);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn select(&mut self, item: SelectionItem, additive: bool) {
        if !additive {
            self.items.clear();
        }
        self.insert(item);
    }

    fn insert(&mut self, item: SelectionItem) {
        if !self.items.contains(&item) {
            self.items.push(item);
        }
    }

    pub fn contains(&self, item: &SelectionItem) -> bool {
        self.items.contains(item)
    }

    pub fn is_screen_selected(&self, id: Id) -> bool {
        self.contains(&SelectionItem::Screen { id })
    }

    pub fn is_element_selected(&self, screen_id: Id, id: Id) -> bool {
        self.contains(&SelectionItem::Element { screen_id, id })
    }

    pub fn items(&self) -> &[SelectionItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Selected screen ids, in selection order.
    pub fn screens(&self) -> impl Iterator<Item = Id> + '_ {
        self.items.iter().filter_map(|item| match item {
            SelectionItem::Screen { id } => Some(*id),
            SelectionItem::Element { .. } => None,
        })
    }

    /// Selected `(screen, element)` pairs, in selection order.
    pub fn elements(&self) -> impl Iterator<Item = (Id, Id)> + '_ {
        self.items.iter().filter_map(|item| match item {
            SelectionItem::Element { screen_id, id } => Some((*screen_id, *id)),
            SelectionItem::Screen { .. } => None,
        })
    }
}

/// Human-readable summary of a selection, sent along with edit requests.
///
/// Screens are listed on their own line; elements as `screen/element`.
pub fn selection_context(items: &[SelectionItem]) -> String {
    if items.is_empty() {
        return "No specific items selected (apply changes globally)".to_string();
    }

    let mut screens = Vec::new();
    let mut elements = Vec::new();
    for item in items {
        match item {
            SelectionItem::Screen { id } => screens.push(id.to_string()),
            SelectionItem::Element { screen_id, id } => elements.push(format!("{screen_id}/{id}")),
        }
    }

    let mut context = String::new();
    if !screens.is_empty() {
        context.push_str(&format!("Selected screens: {}\n", screens.join(", ")));
    }
    if !elements.is_empty() {
        context.push_str(&format!("Selected elements: {}", elements.join(", ")));
    }
    context
}
