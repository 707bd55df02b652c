//! Lowering of the older rich element types into primitive trees.
//!
//! Every [`Template`] becomes a root [`BoxVariant`] plus primitive children.
//! The element renderer draws the root with the template's class and draws
//! the children as non-selectable parts, so only the template element
//! itself participates in selection.

use crate::icons;
use crate::markup::or_default;
use mf_core::{
    BoxVariant, ButtonVariant, Element, ElementKind, Id, ImageSize, Template, TemplateContent,
    TextStyle,
};

/// A template lowered to a root container and its parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Lowered {
    pub variant: BoxVariant,
    pub children: Vec<Element>,
}

/// Star fill for a numeric rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarFill {
    /// Fully filled stars, `0..=5`.
    pub filled: usize,
    /// The fractional part reaches one half. No distinct half glyph is
    /// drawn; the star renders empty.
    pub half: bool,
}

pub const DEFAULT_RATING: f64 = 4.5;
const STAR_COUNT: usize = 5;

/// Parse a rating value. Missing, unparsable, and zero values use the default.
pub fn rating_value(value: Option<&str>) -> f64 {
    match value.and_then(|v| v.trim().parse::<f64>().ok()) {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => DEFAULT_RATING,
    }
}

pub fn star_fill(value: f64) -> StarFill {
    let filled = value.floor().clamp(0.0, STAR_COUNT as f64) as usize;
    StarFill {
        filled,
        half: value.fract() >= 0.5,
    }
}

// ─── Primitive builders ──────────────────────────────────────────────────

fn part(kind: ElementKind) -> Element {
    Element::new(Id::default(), kind)
}

fn text(content: &str, style: TextStyle) -> Element {
    part(ElementKind::Text {
        content: Some(content.to_string()),
        style,
    })
}

fn button(content: &str, variant: ButtonVariant) -> Element {
    part(ElementKind::Button {
        content: Some(content.to_string()),
        variant,
    })
}

fn icon(name: &str, label: Option<&str>) -> Element {
    part(ElementKind::Icon {
        name: Some(name.to_string()),
        label: label.map(str::to_string),
    })
}

fn image(label: Option<&str>, size: ImageSize) -> Element {
    part(ElementKind::Image {
        label: label.map(str::to_string),
        size,
    })
}

fn column(children: Vec<Element>) -> Element {
    part(ElementKind::Box {
        variant: BoxVariant::Column,
        children,
    })
}

fn row(children: Vec<Element>) -> Element {
    part(ElementKind::Box {
        variant: BoxVariant::Row,
        children,
    })
}

fn or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    or_default(value.as_deref(), fallback)
}

fn lowered(variant: BoxVariant, children: Vec<Element>) -> Lowered {
    Lowered { variant, children }
}

fn items_or<'a>(items: &'a Option<Vec<String>>, fallback: &'a [&'a str]) -> Vec<&'a str> {
    match items {
        Some(items) => items.iter().map(String::as_str).collect(),
        None => fallback.to_vec(),
    }
}

// ─── Lowering ────────────────────────────────────────────────────────────

/// Lower a template element into primitives, filling in placeholder text.
pub fn lower(template: Template, c: &TemplateContent) -> Lowered {
    use BoxVariant::{Card, Column, Highlight, Row};

    match template {
        Template::HeaderText => lowered(
            Column,
            vec![text(or(&c.text, "Header Text"), TextStyle::Heading)],
        ),
        Template::SubheaderText => lowered(
            Column,
            vec![text(or(&c.text, "Subheader"), TextStyle::Subheading)],
        ),
        Template::BodyText => lowered(
            Column,
            vec![text(or(&c.text, "Body text content goes here."), TextStyle::Body)],
        ),
        Template::InputField => {
            let placeholder = or(&c.placeholder, or(&c.text, "Search..."));
            lowered(
                Column,
                vec![part(ElementKind::Input {
                    placeholder: Some(placeholder.to_string()),
                    icon: Some(or(&c.icon, "search").to_string()),
                })],
            )
        }
        Template::ButtonPrimary => lowered(
            Column,
            vec![button(or(&c.text, "Button"), ButtonVariant::Primary)],
        ),
        Template::ButtonSecondary => lowered(
            Column,
            vec![button(or(&c.text, "Secondary"), ButtonVariant::Secondary)],
        ),
        Template::Card => {
            let mut children = vec![
                image(None, ImageSize::Banner),
                text(or(&c.title, "Card Title"), TextStyle::Subheading),
                text(or(&c.subtitle, "Card subtitle"), TextStyle::Muted),
            ];
            if let Some(price) = c.value.as_deref().filter(|v| !v.is_empty()) {
                children.push(text(price, TextStyle::Heading));
            }
            lowered(Card, children)
        }
        Template::ListItem => lowered(
            Row,
            vec![
                image(None, ImageSize::Small),
                column(vec![
                    text(or(&c.title, "List Item"), TextStyle::Subheading),
                    text(or(&c.subtitle, "Item description"), TextStyle::Muted),
                ]),
                icon("chevron", None),
            ],
        ),
        Template::ImagePlaceholder => lowered(
            Column,
            vec![image(Some(or(&c.text, "Image")), ImageSize::Medium)],
        ),
        Template::IconRow => lowered(
            Row,
            vec![
                icon("heart", Some("Like")),
                icon("comment", Some("Comment")),
                icon("share", Some("Share")),
                icon("bookmark", Some("Save")),
            ],
        ),
        Template::StatsRow => {
            let stats = items_or(&c.items, &["128 Posts", "14.2K Followers", "892 Following"]);
            let children = stats
                .into_iter()
                .map(|stat| {
                    let (value, label) = stat.split_once(' ').unwrap_or((stat, ""));
                    column(vec![text(value, TextStyle::Heading), text(label, TextStyle::Muted)])
                })
                .collect();
            lowered(Row, children)
        }
        Template::AvatarHeader => lowered(
            Row,
            vec![
                image(None, ImageSize::Large),
                column(vec![
                    text(or(&c.title, "User Name"), TextStyle::Heading),
                    text(or(&c.subtitle, "User bio goes here"), TextStyle::Muted),
                ]),
            ],
        ),
        Template::TabBar => {
            let tabs = items_or(&c.items, &["All", "Popular", "Recent", "Nearby"]);
            let children = tabs
                .into_iter()
                .enumerate()
                .map(|(i, tab)| {
                    let variant = if i == 0 {
                        ButtonVariant::Primary
                    } else {
                        ButtonVariant::Outline
                    };
                    button(tab, variant)
                })
                .collect();
            lowered(Row, children)
        }
        Template::ToggleItem => lowered(
            Row,
            vec![
                column(vec![
                    text(or(&c.title, "Setting"), TextStyle::Subheading),
                    text(or(&c.subtitle, "Description"), TextStyle::Muted),
                ]),
                icon("toggle", None),
            ],
        ),
        Template::PriceTag => {
            let mut children = vec![text(or(&c.value, "$99.00"), TextStyle::Heading)];
            if let Some(original) = c.subtitle.as_deref().filter(|s| !s.is_empty()) {
                children.push(text(original, TextStyle::Muted));
            }
            lowered(Row, children)
        }
        Template::Rating => {
            let value = rating_value(c.value.as_deref());
            let fill = star_fill(value);
            let mut children: Vec<Element> = (0..STAR_COUNT)
                .map(|i| icon(if i < fill.filled { "star" } else { "star-empty" }, None))
                .collect();
            children.push(text(&value.to_string(), TextStyle::Label));
            children.push(text(
                &format!("({})", or(&c.subtitle, "128 reviews")),
                TextStyle::Muted,
            ));
            lowered(Row, children)
        }
        Template::Badge => lowered(Highlight, vec![text(or(&c.text, "New"), TextStyle::Label)]),
        Template::SearchBar => lowered(
            Row,
            vec![
                icon("search", None),
                text(
                    or(&c.placeholder, "Search..."),
                    TextStyle::Muted,
                ),
                icon("menu", None),
            ],
        ),
        Template::CategoryPills => {
            let pills = items_or(&c.items, &["Food", "Drinks", "Desserts", "Snacks"]);
            let children = pills
                .into_iter()
                .enumerate()
                .map(|(i, pill)| {
                    let variant = if i == 0 {
                        ButtonVariant::Primary
                    } else {
                        ButtonVariant::Secondary
                    };
                    button(pill, variant)
                })
                .collect();
            lowered(Row, children)
        }
        Template::ProductCard => lowered(
            Card,
            vec![
                image(None, ImageSize::Medium),
                column(vec![
                    text(or(&c.title, "Product Name"), TextStyle::Subheading),
                    text(or(&c.subtitle, "Short description"), TextStyle::Muted),
                    text(or(&c.value, "$29.99"), TextStyle::Heading),
                ]),
                icon("plus", None),
            ],
        ),
        Template::MessageBubble => {
            let variant = if c.kind.as_deref() == Some("sent") {
                Highlight
            } else {
                Card
            };
            lowered(
                variant,
                vec![
                    text(or(&c.text, "Message text"), TextStyle::Body),
                    text(or(&c.subtitle, "2:34 PM"), TextStyle::Muted),
                ],
            )
        }
        Template::CartItem => lowered(
            Row,
            vec![
                image(None, ImageSize::Small),
                column(vec![
                    text(or(&c.title, "Item Name"), TextStyle::Subheading),
                    text(or(&c.subtitle, "Size: M"), TextStyle::Muted),
                    text(or(&c.value, "$19.99"), TextStyle::Heading),
                ]),
                row(vec![
                    icon("minus", None),
                    text(or(&c.quantity, "1"), TextStyle::Label),
                    icon("plus", None),
                ]),
                icon("trash", None),
            ],
        ),
        Template::MenuItem => {
            let glyph = c
                .icon
                .as_deref()
                .filter(|name| icons::is_known(name))
                .unwrap_or("settings");
            lowered(
                Row,
                vec![
                    icon(glyph, None),
                    text(or(&c.title, "Menu Item"), TextStyle::Body),
                    icon("chevron", None),
                ],
            )
        }
        Template::PriceRow => lowered(
            Row,
            vec![
                text(or(&c.title, "Subtotal"), TextStyle::Body),
                text(or(&c.value, "$0.00"), TextStyle::Heading),
            ],
        ),
        Template::NotificationItem => lowered(
            Row,
            vec![
                icon("bell", None),
                column(vec![
                    text(or(&c.title, "Notification"), TextStyle::Subheading),
                    text(or(&c.subtitle, "Notification description"), TextStyle::Muted),
                ]),
                text(or(&c.value, "2h"), TextStyle::Muted),
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(elements: &[Element], out: &mut Vec<String>) {
        for el in elements {
            match &el.kind {
                ElementKind::Text {
                    content: Some(t), ..
                } => out.push(t.clone()),
                ElementKind::Box { children, .. } => texts(children, out),
                _ => {}
            }
        }
    }

    fn all_text(l: &Lowered) -> Vec<String> {
        let mut out = Vec::new();
        texts(&l.children, &mut out);
        out
    }

    #[test]
    fn rating_value_defaults() {
        assert_eq!(rating_value(None), 4.5);
        assert_eq!(rating_value(Some("abc")), 4.5);
        assert_eq!(rating_value(Some("0")), 4.5);
        assert_eq!(rating_value(Some("3.2")), 3.2);
    }

    #[test]
    fn star_fill_floors_and_flags_half() {
        assert_eq!(star_fill(4.5), StarFill { filled: 4, half: true });
        assert_eq!(star_fill(3.2), StarFill { filled: 3, half: false });
        assert_eq!(star_fill(9.0).filled, 5);
        assert_eq!(star_fill(-1.0).filled, 0);
    }

    #[test]
    fn rating_lowers_to_stars_and_value() {
        let c = TemplateContent {
            value: Some("4.5".into()),
            ..Default::default()
        };
        let l = lower(Template::Rating, &c);
        let stars: Vec<_> = l
            .children
            .iter()
            .filter_map(|el| match &el.kind {
                ElementKind::Icon { name: Some(n), .. } => Some(n.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(stars, vec!["star", "star", "star", "star", "star-empty"]);
        assert_eq!(all_text(&l), vec!["4.5", "(128 reviews)"]);
    }

    #[test]
    fn empty_content_uses_placeholders() {
        let c = TemplateContent::default();
        assert_eq!(all_text(&lower(Template::HeaderText, &c)), vec!["Header Text"]);
        assert_eq!(all_text(&lower(Template::PriceRow, &c)), vec!["Subtotal", "$0.00"]);
        assert_eq!(
            all_text(&lower(Template::StatsRow, &c)),
            vec!["128", "Posts", "14.2K", "Followers", "892", "Following"]
        );
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let c = TemplateContent {
            text: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(all_text(&lower(Template::Badge, &c)), vec!["New"]);
    }

    #[test]
    fn stat_without_space_has_empty_label() {
        let c = TemplateContent {
            items: Some(vec!["42".into(), "7 Big Wins".into()]),
            ..Default::default()
        };
        assert_eq!(
            all_text(&lower(Template::StatsRow, &c)),
            vec!["42", "", "7", "Big Wins"]
        );
    }

    #[test]
    fn first_tab_is_active() {
        let l = lower(Template::TabBar, &TemplateContent::default());
        let variants: Vec<_> = l
            .children
            .iter()
            .filter_map(|el| match &el.kind {
                ElementKind::Button { variant, .. } => Some(*variant),
                _ => None,
            })
            .collect();
        assert_eq!(
            variants,
            vec![
                ButtonVariant::Primary,
                ButtonVariant::Outline,
                ButtonVariant::Outline,
                ButtonVariant::Outline
            ]
        );
    }

    #[test]
    fn sent_bubble_is_highlighted() {
        let sent = TemplateContent {
            kind: Some("sent".into()),
            ..Default::default()
        };
        assert_eq!(lower(Template::MessageBubble, &sent).variant, BoxVariant::Highlight);
        assert_eq!(
            lower(Template::MessageBubble, &TemplateContent::default()).variant,
            BoxVariant::Card
        );
    }

    #[test]
    fn menu_item_unknown_icon_falls_back_to_settings() {
        let c = TemplateContent {
            icon: Some("rocket".into()),
            ..Default::default()
        };
        let l = lower(Template::MenuItem, &c);
        assert!(matches!(
            &l.children[0].kind,
            ElementKind::Icon { name: Some(n), .. } if n == "settings"
        ));
    }

    #[test]
    fn every_template_lowers_to_children() {
        for t in Template::ALL {
            assert!(!lower(t, &TemplateContent::default()).children.is_empty(), "{t:?}");
        }
    }
}
