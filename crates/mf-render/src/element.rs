//! Element markup.
//!
//! Selectable nodes carry the `ui-element` class and a `data-element-id`;
//! the parts produced by template lowering carry neither, so clicks and
//! selection resolve to the element the model actually contains.

use crate::compose;
use crate::icons;
use crate::markup::{escape, or_default};
use crate::styles::StyleRegistry;
use mf_core::{Element, ElementKind, Id, SelectionSet};

/// Per-screen state threaded through element rendering.
pub struct ElementContext<'a> {
    pub screen_id: Id,
    pub selection: &'a SelectionSet,
    pub styles: &'a mut StyleRegistry,
}

/// Identity of the node being opened: a model element, or an anonymous part.
#[derive(Clone, Copy)]
enum Node {
    Element { id: Id, selected: bool },
    Part,
}

impl Node {
    /// Opening tag with classes and, for elements, the id attribute.
    fn open(self, tag: &str, classes: &str, style: Option<&str>) -> String {
        let style = style
            .map(|s| format!(" style=\"{s}\""))
            .unwrap_or_default();
        match self {
            Node::Element { id, selected } => format!(
                "<{tag} class=\"ui-element {classes}{}\" data-element-id=\"{}\"{style}>",
                if selected { " selected" } else { "" },
                escape(id.as_str()),
            ),
            Node::Part => format!("<{tag} class=\"part {classes}\"{style}>"),
        }
    }
}

/// Render one top-level or nested element.
///
/// A `navbar` renders nothing here; the screen composes it separately.
pub fn render_element(element: &Element, cx: &mut ElementContext<'_>) -> String {
    if matches!(element.kind, ElementKind::Navbar { .. }) {
        return String::new();
    }
    let node = Node::Element {
        id: element.id,
        selected: cx.selection.is_element_selected(cx.screen_id, element.id),
    };

    if let ElementKind::Markup { css: Some(css), .. } = &element.kind
        && !css.is_empty()
    {
        cx.styles.register(cx.screen_id, element.id, css);
    }
    render_kind(&element.kind, node, cx)
}

fn render_kind(kind: &ElementKind, node: Node, cx: &mut ElementContext<'_>) -> String {
    match kind {
        ElementKind::Text { content, style } => format!(
            "{}{}</div>",
            node.open("div", &format!("text text-{}", style.name()), None),
            escape(or_default(content.as_deref(), "Text")),
        ),
        ElementKind::Button { content, variant } => format!(
            "{}{}</div>",
            node.open("div", &format!("button button-{}", variant.name()), None),
            escape(or_default(content.as_deref(), "Button")),
        ),
        ElementKind::Input { placeholder, icon } => {
            let glyph = icon
                .as_deref()
                .and_then(icons::icon_svg)
                .or_else(|| icons::icon_svg("search"))
                .unwrap_or_default();
            format!(
                "{}<span class=\"input-icon\">{glyph}</span><span class=\"input-placeholder\">{}</span></div>",
                node.open("div", "input", None),
                escape(or_default(placeholder.as_deref(), "Enter text...")),
            )
        }
        ElementKind::Image { label, size } => {
            let mut out = node.open("div", &format!("image image-{}", size.name()), None);
            out.push_str(&icons::icon_or_generic("image"));
            if let Some(label) = label.as_deref().filter(|l| !l.is_empty()) {
                out.push_str(&format!("<span class=\"image-label\">{}</span>", escape(label)));
            }
            out.push_str("</div>");
            out
        }
        ElementKind::Icon { name, label } => {
            let mut out = node.open("div", "icon", None);
            out.push_str(&icons::icon_or_generic(or_default(name.as_deref(), "star")));
            if let Some(label) = label.as_deref().filter(|l| !l.is_empty()) {
                out.push_str(&format!("<span class=\"icon-label\">{}</span>", escape(label)));
            }
            out.push_str("</div>");
            out
        }
        ElementKind::Box { variant, children } => {
            let mut out = node.open("div", &format!("box box-{}", variant.name()), None);
            for child in children {
                // Nested model elements stay selectable; parts stay parts.
                let rendered = match node {
                    Node::Element { .. } => render_element(child, cx),
                    Node::Part => render_kind(&child.kind, Node::Part, cx),
                };
                out.push_str(&rendered);
            }
            out.push_str("</div>");
            out
        }
        ElementKind::Divider => format!("{}</div>", node.open("div", "divider", None)),
        ElementKind::Spacer { size } => format!(
            "{}</div>",
            node.open(
                "div",
                "spacer",
                Some(&format!("height: {}px;", size.height_px()))
            )
        ),
        ElementKind::Unknown { type_name, text } => {
            log::debug!("rendering unknown element type {type_name:?} as text");
            format!(
                "{}{}</div>",
                node.open("div", "text text-body", None),
                escape(or_default(text.as_deref(), type_name)),
            )
        }
        ElementKind::Navbar { .. } => String::new(),
        ElementKind::Template { template, content } => {
            let lowered = compose::lower(*template, content);
            let classes = format!("{} box box-{}", template.name(), lowered.variant.name());
            let mut out = node.open("div", &classes, None);
            for child in &lowered.children {
                out.push_str(&render_kind(&child.kind, Node::Part, cx));
            }
            out.push_str("</div>");
            out
        }
        ElementKind::Markup { html, .. } => {
            format!("{}{html}</div>", node.open("div", "dynamic-element", None))
        }
    }
}
