//! Device-frame markup for one screen.

use crate::element::{ElementContext, render_element};
use crate::icons;
use crate::markup::{escape, or_default};
use crate::styles::StyleRegistry;
use mf_core::{Element, ElementKind, Screen, SelectionSet};

/// Tabs shown when a navbar lists none.
pub const DEFAULT_NAV_ITEMS: [&str; 4] = ["Home", "Search", "Cart", "Profile"];

const STATUS_ICONS: &str = concat!(
    r#"<svg width="17" height="10" viewBox="0 0 17 10" fill="currentColor">"#,
    r#"<path d="M1 4.5C1 3.67 1.67 3 2.5 3h1C4.33 3 5 3.67 5 4.5v4c0 .83-.67 1.5-1.5 1.5h-1C1.67 10 1 9.33 1 8.5v-4z"/>"#,
    r#"<path d="M6 3.5C6 2.67 6.67 2 7.5 2h1C9.33 2 10 2.67 10 3.5v5c0 .83-.67 1.5-1.5 1.5h-1C6.67 10 6 9.33 6 8.5v-5z"/>"#,
    r#"<path d="M11 2.5c0-.83.67-1.5 1.5-1.5h1c.83 0 1.5.67 1.5 1.5v6c0 .83-.67 1.5-1.5 1.5h-1c-.83 0-1.5-.67-1.5-1.5v-6z"/>"#,
    r#"</svg>"#,
    r#"<svg width="15" height="10" viewBox="0 0 15 10" fill="currentColor">"#,
    r#"<path d="M7.5 2C4.5 2 2 4 0 7c2 3 4.5 5 7.5 5S13 10 15 7c-2-3-4.5-5-7.5-5zm0 8C5.5 10 4 8.5 4 7s1.5-3 3.5-3S11 5.5 11 7s-1.5 3-3.5 3z"/>"#,
    r#"</svg>"#,
    r#"<svg width="25" height="10" viewBox="0 0 25 10" fill="currentColor">"#,
    r#"<rect x="0" y="2" width="21" height="7" rx="2" stroke="currentColor" stroke-width="1" fill="none"/>"#,
    r#"<rect x="2" y="4" width="17" height="3" rx="1" fill="currentColor"/>"#,
    r#"<path d="M23 4v3c1 0 2-0.5 2-1.5S24 4 23 4z"/>"#,
    r#"</svg>"#,
);

/// Render a screen: frame, status bar, content, navbar, and label.
pub fn render_screen(
    screen: &Screen,
    selection: &SelectionSet,
    styles: &mut StyleRegistry,
) -> String {
    let selected = if selection.is_screen_selected(screen.id) {
        " selected"
    } else {
        ""
    };

    let mut cx = ElementContext {
        screen_id: screen.id,
        selection,
        styles,
    };
    let content: String = screen
        .elements
        .iter()
        .map(|el| render_element(el, &mut cx))
        .collect();
    let navbar = screen
        .navbar()
        .map(|nav| render_navbar(nav, selection, screen))
        .unwrap_or_default();

    let mut out = String::new();
    out.push_str(&format!(
        "<div class=\"screen-wrapper{selected}\" data-screen-id=\"{}\" style=\"left: {}px; top: {}px;\">",
        escape(screen.id.as_str()),
        screen.position.x,
        screen.position.y,
    ));
    out.push_str("<div class=\"device-frame iphone\"><div class=\"device-screen\">");
    out.push_str("<div class=\"dynamic-island\"></div>");
    out.push_str(&format!(
        "<div class=\"status-bar\"><span class=\"time\">9:41</span><span class=\"icons\">{STATUS_ICONS}</span></div>"
    ));
    out.push_str(&format!("<div class=\"screen-content\">{content}</div>"));
    out.push_str(&navbar);
    out.push_str("</div></div>");
    out.push_str(&format!(
        "<div class=\"screen-label\">{}</div>",
        escape(or_default(Some(&screen.name), "Untitled Screen"))
    ));
    out.push_str("</div>");
    out
}

fn render_navbar(nav: &Element, selection: &SelectionSet, screen: &Screen) -> String {
    let ElementKind::Navbar { items } = &nav.kind else {
        return String::new();
    };
    let labels: Vec<&str> = match items {
        Some(items) => items.iter().map(String::as_str).collect(),
        None => DEFAULT_NAV_ITEMS.to_vec(),
    };
    let selected = if selection.is_element_selected(screen.id, nav.id) {
        " selected"
    } else {
        ""
    };

    let mut out = format!(
        "<div class=\"ui-element navbar{selected}\" data-element-id=\"{}\">",
        escape(nav.id.as_str())
    );
    for (i, label) in labels.iter().enumerate() {
        let active = if i == 0 { " active" } else { "" };
        out.push_str(&format!(
            "<div class=\"nav-item{active}\">{}<span>{}</span></div>",
            icons::nav_icon(label),
            escape(label)
        ));
    }
    out.push_str("</div>");
    out
}
