//! Inline SVG glyphs for elements, the navbar, and flow labels.
//!
//! Glyph bodies are stored without their `<svg>` wrapper so the same path
//! data can be emitted at element size (18px) and navbar size (24px).

use mf_core::FlowKind;

/// Pixel size of element glyphs.
pub const ELEMENT_ICON_PX: u32 = 18;
/// Pixel size of navbar glyphs.
pub const NAV_ICON_PX: u32 = 24;

struct Glyph {
    body: &'static str,
    filled: bool,
}

const fn outline(body: &'static str) -> Glyph {
    Glyph {
        body,
        filled: false,
    }
}

const STAR_POINTS: &str = r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#;
const SETTINGS_BODY: &str = r#"<circle cx="12" cy="12" r="3"/><path d="M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 0 1 0 2.83 2 2 0 0 1-2.83 0l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 0 1-2 2 2 2 0 0 1-2-2v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 0 1-2.83 0 2 2 0 0 1 0-2.83l.06-.06a1.65 1.65 0 0 0 .33-1.82 1.65 1.65 0 0 0-1.51-1H3a2 2 0 0 1-2-2 2 2 0 0 1 2-2h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 0 1 0-2.83 2 2 0 0 1 2.83 0l.06.06a1.65 1.65 0 0 0 1.82.33H9a1.65 1.65 0 0 0 1-1.51V3a2 2 0 0 1 2-2 2 2 0 0 1 2 2v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 0 1 2.83 0 2 2 0 0 1 0 2.83l-.06.06a1.65 1.65 0 0 0-.33 1.82V9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 0 1 2 2 2 2 0 0 1-2 2h-.09a1.65 1.65 0 0 0-1.51 1z"/>"#;
const HEART_BODY: &str = r#"<path d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"/>"#;
const SEARCH_BODY: &str = r#"<circle cx="11" cy="11" r="8"/><path d="M21 21l-4.35-4.35"/>"#;
const USER_BODY: &str = r#"<path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#;
const CART_BODY: &str = r#"<circle cx="9" cy="21" r="1"/><circle cx="20" cy="21" r="1"/><path d="M1 1h4l2.68 13.39a2 2 0 0 0 2 1.61h9.72a2 2 0 0 0 2-1.61L23 6H6"/>"#;
const COMMENT_BODY: &str = r#"<path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/>"#;
const BELL_BODY: &str = r#"<path d="M18 8A6 6 0 0 0 6 8c0 7-3 9-3 9h18s-3-2-3-9"/><path d="M13.73 21a2 2 0 0 1-3.46 0"/>"#;
const GENERIC_BODY: &str = r#"<circle cx="12" cy="12" r="10"/>"#;

fn glyph(name: &str) -> Option<Glyph> {
    let glyph = match name {
        "search" => outline(SEARCH_BODY),
        "user" => outline(USER_BODY),
        "cart" => outline(CART_BODY),
        "home" => outline(r#"<path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/>"#),
        "menu" => outline(
            r#"<line x1="3" y1="12" x2="21" y2="12"/><line x1="3" y1="6" x2="21" y2="6"/><line x1="3" y1="18" x2="21" y2="18"/>"#,
        ),
        "back" => outline(r#"<polyline points="15 18 9 12 15 6"/>"#),
        "heart" => outline(HEART_BODY),
        "star" => Glyph {
            body: STAR_POINTS,
            filled: true,
        },
        "star-empty" => outline(STAR_POINTS),
        "settings" => outline(SETTINGS_BODY),
        "bell" => outline(BELL_BODY),
        "camera" => outline(
            r#"<path d="M23 19a2 2 0 0 1-2 2H3a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h4l2-3h6l2 3h4a2 2 0 0 1 2 2z"/><circle cx="12" cy="13" r="4"/>"#,
        ),
        "share" => outline(
            r#"<circle cx="18" cy="5" r="3"/><circle cx="6" cy="12" r="3"/><circle cx="18" cy="19" r="3"/><line x1="8.59" y1="13.51" x2="15.42" y2="17.49"/><line x1="15.41" y1="6.51" x2="8.59" y2="10.49"/>"#,
        ),
        "edit" => outline(
            r#"<path d="M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"/><path d="M18.5 2.5a2.121 2.121 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z"/>"#,
        ),
        "trash" => outline(
            r#"<polyline points="3 6 5 6 21 6"/><path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/>"#,
        ),
        "plus" => outline(
            r#"<line x1="12" y1="5" x2="12" y2="19"/><line x1="5" y1="12" x2="19" y2="12"/>"#,
        ),
        "minus" => outline(r#"<line x1="5" y1="12" x2="19" y2="12"/>"#),
        "check" => outline(r#"<polyline points="20 6 9 17 4 12"/>"#),
        "arrow-right" => outline(
            r#"<line x1="5" y1="12" x2="19" y2="12"/><polyline points="12 5 19 12 12 19"/>"#,
        ),
        "image" => outline(
            r#"<rect x="3" y="3" width="18" height="18" rx="2" ry="2"/><circle cx="8.5" cy="8.5" r="1.5"/><polyline points="21 15 16 10 5 21"/>"#,
        ),
        "comment" => outline(COMMENT_BODY),
        "bookmark" => outline(r#"<path d="M19 21l-7-5-7 5V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2z"/>"#),
        "send" => outline(
            r#"<line x1="22" y1="2" x2="11" y2="13"/><polygon points="22 2 15 22 11 13 2 9 22 2"/>"#,
        ),
        "chevron" => outline(r#"<polyline points="9 18 15 12 9 6"/>"#),
        "mail" => outline(
            r#"<path d="M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z"/><polyline points="22 6 12 13 2 6"/>"#,
        ),
        "lock" => outline(
            r#"<rect x="3" y="11" width="18" height="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#,
        ),
        "toggle" => Glyph {
            body: r#"<rect x="1" y="6" width="22" height="12" rx="6" ry="6"/><circle cx="17" cy="12" r="4" fill="white"/>"#,
            filled: true,
        },
        _ => return None,
    };
    Some(glyph)
}

fn wrap(glyph: &Glyph, px: u32) -> String {
    if glyph.filled {
        format!(
            r#"<svg width="{px}" height="{px}" viewBox="0 0 24 24" fill="currentColor" stroke="currentColor" stroke-width="1">{}</svg>"#,
            glyph.body
        )
    } else {
        format!(
            r#"<svg width="{px}" height="{px}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">{}</svg>"#,
            glyph.body
        )
    }
}

/// Whether `name` is a known element glyph.
pub fn is_known(name: &str) -> bool {
    glyph(name).is_some()
}

/// An element glyph by name, or `None` if the name is unknown.
pub fn icon_svg(name: &str) -> Option<String> {
    glyph(name).map(|g| wrap(&g, ELEMENT_ICON_PX))
}

/// An element glyph, falling back to a plain circle for unknown names.
pub fn icon_or_generic(name: &str) -> String {
    icon_svg(name).unwrap_or_else(|| wrap(&outline(GENERIC_BODY), ELEMENT_ICON_PX))
}

/// Navbar glyph for a tab label; unknown labels get a plain circle.
pub fn nav_icon(label: &str) -> String {
    let glyph = match label {
        "Home" => outline(
            r#"<path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><polyline points="9 22 9 12 15 12 15 22"/>"#,
        ),
        "Search" => outline(SEARCH_BODY),
        "Cart" => outline(CART_BODY),
        "Profile" => outline(USER_BODY),
        "Favorites" => outline(HEART_BODY),
        "Settings" => outline(SETTINGS_BODY),
        "Messages" => outline(COMMENT_BODY),
        "Notifications" => outline(BELL_BODY),
        _ => outline(GENERIC_BODY),
    };
    wrap(&glyph, NAV_ICON_PX)
}

/// Glyph shown in a flow label badge.
pub fn flow_glyph(kind: FlowKind) -> &'static str {
    match kind {
        FlowKind::Tap => "👆",
        FlowKind::Swipe => "👉",
        FlowKind::Submit => "✓",
        FlowKind::Navigate => "→",
    }
}
