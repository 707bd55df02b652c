//! Whole-canvas markup.
//!
//! Rendering is total: every call re-derives the full canvas from the
//! document and selection. The view transform is not baked in; the host
//! applies [`ViewTransform::css_transform`] to the canvas layer.

use crate::flow::render_flow_arrows;
use crate::markup::escape;
use crate::screen::render_screen;
use crate::styles::StyleRegistry;
use mf_core::{MockupDocument, SelectionSet, ViewTransform};

/// Text shown before any document exists.
pub const EMPTY_CANVAS_TEXT: &str = "Describe your app to generate mockups";

/// Render the canvas layer contents: every screen, then the arrow overlay.
pub fn render_canvas(
    doc: Option<&MockupDocument>,
    selection: &SelectionSet,
    styles: &mut StyleRegistry,
) -> String {
    let Some(doc) = doc else {
        return format!("<div class=\"canvas-empty\"><p>{EMPTY_CANVAS_TEXT}</p></div>");
    };
    log::trace!(
        "render canvas: {} screens, {} flows, {} selected",
        doc.screens.len(),
        doc.flows.len(),
        selection.len()
    );

    let mut out = String::new();
    for screen in &doc.screens {
        out.push_str(&render_screen(screen, selection, styles));
    }
    out.push_str(&render_flow_arrows(doc));
    out
}

/// A self-contained HTML page showing the document through `view`.
///
/// Used for static exports; the page carries the registered style blocks
/// and positions the canvas layer with the view's CSS transform.
pub fn render_page(doc: &MockupDocument, view: &ViewTransform) -> String {
    let mut styles = StyleRegistry::new();
    let body = render_canvas(Some(doc), &SelectionSet::new(), &mut styles);
    format!(
        concat!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n",
            "<title>{title}</title>\n{styles}\n</head>\n<body>\n",
            "<div class=\"canvas-container\">",
            "<div class=\"canvas\" style=\"position: absolute; transform-origin: 0 0; transform: {transform};\">",
            "{body}</div></div>\n</body>\n</html>\n"
        ),
        title = escape(&doc.app_name),
        styles = styles.to_html(),
        transform = view.css_transform(),
        body = body,
    )
}
