//! Chat messages and the prompts that steer the model toward the mockup schema.

use mf_core::{MockupDocument, SelectionItem, selection_context};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

// ─── System prompts ──────────────────────────────────────────────────────

pub const GENERATE_SYSTEM_PROMPT: &str = r#"You are a wireframe designer. Generate JSON specifications for mobile app wireframes using simple primitives.

RESPOND ONLY WITH VALID JSON. No markdown, no explanations.

=== JSON STRUCTURE ===
{
  "appName": "App Name",
  "screens": [
    {
      "id": "screen-1",
      "name": "Screen Name",
      "position": { "x": 0, "y": 0 },
      "elements": [ /* array of elements */ ]
    }
  ],
  "flows": [{ "from": "screen-1", "to": "screen-2", "label": "Tap button", "type": "tap" }]
}

=== WIREFRAME ELEMENTS (only use these) ===

1. TEXT - Any text content
   { "id": "t1", "type": "text", "content": "Hello World", "style": "heading|subheading|body|muted|label" }

2. BUTTON - Clickable button
   { "id": "b1", "type": "button", "content": "Click Me", "variant": "primary|secondary|outline" }

3. INPUT - Text input field
   { "id": "i1", "type": "input", "placeholder": "Enter text...", "icon": "search|user|mail|lock" }

4. IMAGE - Image placeholder
   { "id": "img1", "type": "image", "label": "Profile Photo", "size": "small|medium|large|banner" }

5. ICON - Icon with optional label
   { "id": "ic1", "type": "icon", "name": "heart|star|cart|user|settings|bell|home|search|menu|back|send|plus|trash|edit|check", "label": "Favorites" }

6. BOX - Container for grouping elements (can be nested)
   { "id": "box1", "type": "box", "variant": "card|row|column|highlight", "children": [ /* nested elements */ ] }

7. DIVIDER - Horizontal separator
   { "id": "d1", "type": "divider" }

8. SPACER - Vertical space
   { "id": "s1", "type": "spacer", "size": "small|medium|large" }

9. NAVBAR - Bottom navigation (use once per screen, at the end)
   { "id": "nav", "type": "navbar", "items": ["Home", "Search", "Cart", "Profile"] }

=== BOX VARIANTS ===
- "card": Rounded container with background
- "row": Horizontal layout (items side by side)
- "column": Vertical layout (items stacked)
- "highlight": Accent-colored container

=== EXAMPLES ===

Product card:
{ "type": "box", "variant": "card", "children": [
  { "type": "box", "variant": "row", "children": [
    { "type": "image", "label": "Product", "size": "medium" },
    { "type": "box", "variant": "column", "children": [
      { "type": "text", "content": "Pizza Margherita", "style": "subheading" },
      { "type": "text", "content": "Classic Italian pizza", "style": "muted" },
      { "type": "text", "content": "$12.99", "style": "heading" }
    ]},
    { "type": "button", "content": "Add", "variant": "primary" }
  ]}
]}

=== QUALITY RULES ===
1. Each screen should have 6-15 elements
2. Use realistic content (actual names, text, prices)
3. Nest boxes to create complex layouts
4. Use "row" for horizontal layouts, "column" for vertical
5. Include navbar on main screens
6. End each screen's elements with the navbar

=== SCREEN POSITIONS ===
First: {x:100, y:100}, then x+400 for columns, y+750 for rows

Generate 4-6 screens with nested elements for any app type."#;

pub const EDIT_SYSTEM_PROMPT: &str = r#"You are a wireframe designer. Modify the wireframe based on user request.

ELEMENT TYPES: text, button, input, image, icon, box, divider, spacer, navbar
BOX VARIANTS: card, row, column, highlight
Use nested "box" elements with "children" arrays for complex layouts.

Return the COMPLETE updated mockup JSON. Only valid JSON, no explanations."#;

// ─── Message builders ────────────────────────────────────────────────────

/// Conversation that asks for a brand-new mockup.
pub fn generate_messages(prompt: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(GENERATE_SYSTEM_PROMPT),
        ChatMessage::user(format!("Create a mobile app mockup for: {prompt}")),
    ]
}

/// Conversation that asks for a revised copy of `doc`.
pub fn edit_messages(
    doc: &MockupDocument,
    selection: &[SelectionItem],
    request: &str,
) -> Vec<ChatMessage> {
    let user = format!(
        "Current mockup:\n{}\n\nSelected items:\n{}\n\nUser request: {request}\n\nPlease provide the updated mockup JSON.",
        doc.to_json_pretty(),
        selection_context(selection),
    );
    vec![ChatMessage::system(EDIT_SYSTEM_PROMPT), ChatMessage::user(user)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn generate_wraps_prompt() {
        let messages = generate_messages("a pizza delivery app");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.starts_with("You are a wireframe designer."));
        assert_eq!(
            messages[1],
            ChatMessage::user("Create a mobile app mockup for: a pizza delivery app")
        );
    }

    #[test]
    fn edit_embeds_document_selection_and_request() {
        let doc = MockupDocument::from_json(
            r#"{"appName":"Notes","screens":[{"id":"s1","name":"List","elements":[]}]}"#,
        )
        .unwrap();
        let messages = edit_messages(
            &doc,
            &[SelectionItem::element("s1", "title")],
            "make it blue",
        );
        assert_eq!(messages[0].content, EDIT_SYSTEM_PROMPT);

        let user = &messages[1].content;
        assert!(user.starts_with("Current mockup:\n{"));
        assert!(user.contains("\"appName\": \"Notes\""));
        assert!(user.contains("Selected items:\nSelected elements: s1/title\n\n"));
        assert!(
            user.ends_with("User request: make it blue\n\nPlease provide the updated mockup JSON.")
        );
    }

    #[test]
    fn edit_without_selection_applies_globally() {
        let doc = MockupDocument::default();
        let messages = edit_messages(&doc, &[], "add a settings screen");
        assert!(messages[1]
            .content
            .contains("No specific items selected (apply changes globally)"));
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_value(ChatMessage::assistant("hi")).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "assistant", "content": "hi" }));
    }
}
