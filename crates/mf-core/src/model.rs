//! Mockup document model.
//!
//! A document is a flat list of screens plus a list of directed flows between
//! them. Each screen owns an ordered tree of elements: `Box` containers own
//! their children directly, so there are no back-references and no arena.
//!
//! The JSON comes from an LLM and is trusted at render time. Parsing is
//! lenient (every field optional, strings or numbers where either is
//! plausible); defaults are applied by the renderer, not here.

use crate::error::DocumentError;
use crate::id::Id;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use smallvec::SmallVec;
use std::collections::HashSet;

// ─── Document ────────────────────────────────────────────────────────────

/// The whole mockup: replaced wholesale on every generation or edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockupDocument {
    #[serde(default)]
    pub app_name: String,
    #[serde(default)]
    pub screens: Vec<Screen>,
    #[serde(default)]
    pub flows: Vec<Flow>,
}

impl MockupDocument {
    /// Parse a JSON document and normalize its ids.
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        let mut doc: Self = serde_json::from_str(text)?;
        doc.normalize();
        Ok(doc)
    }

    /// Serialize back to the wire schema (pretty-printed, as sent in edit requests).
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Look up a screen by id.
    pub fn screen(&self, id: Id) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id == id)
    }

    /// Mint ids for screens and elements that arrived without one, and make
    /// element ids unique within each screen (nested elements included).
    ///
    /// Minted ids are positional (`screen-2`, `screen-2-el-3`, `screen-2-el-3.1`)
    /// so repeated loads of the same JSON produce the same ids.
    pub fn normalize(&mut self) {
        let mut screen_ids = HashSet::new();
        for (i, screen) in self.screens.iter_mut().enumerate() {
            if screen.id.is_empty() || !screen_ids.insert(screen.id) {
                let minted = unique_id(&format!("screen-{}", i + 1), &mut screen_ids);
                log::warn!("screen #{i} has a missing or duplicate id; using {minted}");
                screen.id = minted;
            }
            let mut seen = HashSet::new();
            let prefix = format!("{}-el", screen.id);
            normalize_elements(&mut screen.elements, &prefix, false, &mut seen);
        }
    }
}

fn normalize_elements(
    elements: &mut [Element],
    prefix: &str,
    nested: bool,
    seen: &mut HashSet<Id>,
) {
    for (i, element) in elements.iter_mut().enumerate() {
        let path = if nested {
            format!("{prefix}.{}", i + 1)
        } else {
            format!("{prefix}-{}", i + 1)
        };
        if element.id.is_empty() {
            element.id = unique_id(&path, seen);
        } else if !seen.insert(element.id) {
            let minted = unique_id(&format!("{}~{path}", element.id), seen);
            log::warn!("duplicate element id {}; renamed to {minted}", element.id);
            element.id = minted;
        }
        if let ElementKind::Box { children, .. } = &mut element.kind {
            normalize_elements(children, &path, true, seen);
        }
    }
}

fn unique_id(base: &str, seen: &mut HashSet<Id>) -> Id {
    let mut candidate = Id::intern(base);
    let mut n = 2;
    while !seen.insert(candidate) {
        candidate = Id::intern(&format!("{base}-{n}"));
        n += 1;
    }
    candidate
}

// ─── Screens & flows ─────────────────────────────────────────────────────

/// Top-left corner of a screen in world coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub x: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One device-framed screen on the canvas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Screen {
    /// The navigation bar composed at the bottom of the frame.
    /// With several navbar elements, the first one wins.
    pub fn navbar(&self) -> Option<&Element> {
        self.elements
            .iter()
            .find(|el| matches!(el.kind, ElementKind::Navbar { .. }))
    }

    /// Find an element anywhere in this screen's tree.
    pub fn find_element(&self, id: Id) -> Option<&Element> {
        fn walk(elements: &[Element], id: Id) -> Option<&Element> {
            for el in elements {
                if el.id == id {
                    return Some(el);
                }
                if let ElementKind::Box { children, .. } = &el.kind
                    && let Some(found) = walk(children, id)
                {
                    return Some(found);
                }
            }
            None
        }
        walk(&self.elements, id)
    }
}

/// How the user triggers a flow transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FlowKind {
    #[default]
    Tap,
    Swipe,
    Submit,
    Navigate,
}

impl FlowKind {
    /// Unknown names degrade to `Navigate`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "tap" => FlowKind::Tap,
            "swipe" => FlowKind::Swipe,
            "submit" => FlowKind::Submit,
            _ => FlowKind::Navigate,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FlowKind::Tap => "tap",
            FlowKind::Swipe => "swipe",
            FlowKind::Submit => "submit",
            FlowKind::Navigate => "navigate",
        }
    }
}

impl Serialize for FlowKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for FlowKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(name.as_deref().map(FlowKind::from_name).unwrap_or_default())
    }
}

/// A directed, labelled navigation edge between two screens.
/// Endpoints are not validated: dangling ids are skipped at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    #[serde(default)]
    pub from: Id,
    #[serde(default)]
    pub to: Id,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: FlowKind,
}

// ─── Element enums ───────────────────────────────────────────────────────

macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident => $default_text:literal,
        { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub enum $name {
            #[default]
            $default,
            $($variant),+
        }

        impl $name {
            /// Parse a wire name; unknown names fall back to the default variant.
            pub fn from_name(name: &str) -> Self {
                match name {
                    $($text => $name::$variant,)+
                    _ => $name::$default,
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $name::$default => $default_text,
                    $($name::$variant => $text,)+
                }
            }
        }
    };
}

named_enum!(
    /// Typography role of a `text` element.
    TextStyle, default = Body => "body", {
        Heading => "heading",
        Subheading => "subheading",
        Muted => "muted",
        Label => "label",
    }
);

named_enum!(
    ButtonVariant, default = Primary => "primary", {
        Secondary => "secondary",
        Outline => "outline",
    }
);

named_enum!(
    ImageSize, default = Medium => "medium", {
        Small => "small",
        Large => "large",
        Banner => "banner",
    }
);

named_enum!(
    /// Layout/appearance of a `box` container.
    BoxVariant, default = Column => "column", {
        Card => "card",
        Row => "row",
        Highlight => "highlight",
    }
);

named_enum!(
    SpacerSize, default = Medium => "medium", {
        Small => "small",
        Large => "large",
    }
);

impl SpacerSize {
    /// Fixed pixel height for each named size.
    pub fn height_px(self) -> u32 {
        match self {
            SpacerSize::Small => 8,
            SpacerSize::Medium => 16,
            SpacerSize::Large => 24,
        }
    }
}

/// The rich composed element types of the older schema.
///
/// They are kept as data and rendered by lowering into primitive trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    HeaderText,
    SubheaderText,
    BodyText,
    InputField,
    ButtonPrimary,
    ButtonSecondary,
    Card,
    ListItem,
    ImagePlaceholder,
    IconRow,
    StatsRow,
    AvatarHeader,
    TabBar,
    ToggleItem,
    PriceTag,
    Rating,
    Badge,
    SearchBar,
    CategoryPills,
    ProductCard,
    MessageBubble,
    CartItem,
    MenuItem,
    PriceRow,
    NotificationItem,
}

impl Template {
    pub const ALL: [Template; 25] = [
        Template::HeaderText,
        Template::SubheaderText,
        Template::BodyText,
        Template::InputField,
        Template::ButtonPrimary,
        Template::ButtonSecondary,
        Template::Card,
        Template::ListItem,
        Template::ImagePlaceholder,
        Template::IconRow,
        Template::StatsRow,
        Template::AvatarHeader,
        Template::TabBar,
        Template::ToggleItem,
        Template::PriceTag,
        Template::Rating,
        Template::Badge,
        Template::SearchBar,
        Template::CategoryPills,
        Template::ProductCard,
        Template::MessageBubble,
        Template::CartItem,
        Template::MenuItem,
        Template::PriceRow,
        Template::NotificationItem,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Wire name, also used as the CSS class of the rendered root.
    pub fn name(self) -> &'static str {
        match self {
            Template::HeaderText => "header-text",
            Template::SubheaderText => "subheader-text",
            Template::BodyText => "body-text",
            Template::InputField => "input-field",
            Template::ButtonPrimary => "button-primary",
            Template::ButtonSecondary => "button-secondary",
            Template::Card => "card",
            Template::ListItem => "list-item",
            Template::ImagePlaceholder => "image-placeholder",
            Template::IconRow => "icon-row",
            Template::StatsRow => "stats-row",
            Template::AvatarHeader => "avatar-header",
            Template::TabBar => "tab-bar",
            Template::ToggleItem => "toggle-item",
            Template::PriceTag => "price-tag",
            Template::Rating => "rating",
            Template::Badge => "badge",
            Template::SearchBar => "search-bar",
            Template::CategoryPills => "category-pills",
            Template::ProductCard => "product-card",
            Template::MessageBubble => "message-bubble",
            Template::CartItem => "cart-item",
            Template::MenuItem => "menu-item",
            Template::PriceRow => "price-row",
            Template::NotificationItem => "notification-item",
        }
    }
}

/// The `content` object of the older schema. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub quantity: Option<String>,
    /// `sent` marks an outgoing message bubble.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

// ─── Elements ────────────────────────────────────────────────────────────

/// One node of a screen's element tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawElement", into = "RawElement")]
pub struct Element {
    pub id: Id,
    pub kind: ElementKind,
}

impl Element {
    pub fn new(id: impl Into<Id>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    /// The wire `type` tag of this element.
    pub fn type_name(&self) -> &str {
        self.kind.type_name()
    }
}

/// Closed set of element variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Text {
        content: Option<String>,
        style: TextStyle,
    },
    Button {
        content: Option<String>,
        variant: ButtonVariant,
    },
    Input {
        placeholder: Option<String>,
        icon: Option<String>,
    },
    Image {
        label: Option<String>,
        size: ImageSize,
    },
    Icon {
        name: Option<String>,
        label: Option<String>,
    },
    Box {
        variant: BoxVariant,
        children: Vec<Element>,
    },
    Divider,
    Spacer {
        size: SpacerSize,
    },
    Navbar {
        items: Option<SmallVec<[String; 5]>>,
    },
    /// A rich element of the older schema, rendered by composition.
    Template {
        template: Template,
        content: TemplateContent,
    },
    /// Raw markup rendered verbatim; `css` is registered once per element.
    Markup {
        html: String,
        css: Option<String>,
    },
    /// An unrecognized `type` tag.
    Unknown {
        type_name: String,
        text: Option<String>,
    },
}

impl ElementKind {
    pub fn type_name(&self) -> &str {
        match self {
            ElementKind::Text { .. } => "text",
            ElementKind::Button { .. } => "button",
            ElementKind::Input { .. } => "input",
            ElementKind::Image { .. } => "image",
            ElementKind::Icon { .. } => "icon",
            ElementKind::Box { .. } => "box",
            ElementKind::Divider => "divider",
            ElementKind::Spacer { .. } => "spacer",
            ElementKind::Navbar { .. } => "navbar",
            ElementKind::Template { template, .. } => template.name(),
            ElementKind::Markup { .. } => "html",
            ElementKind::Unknown { type_name, .. } => type_name,
        }
    }
}

// ─── Wire form ───────────────────────────────────────────────────────────

/// `content` is a plain string in the primitive schema and an object in the
/// older one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum RawContent {
    Text(String),
    Fields(TemplateContent),
    Other(Value),
}

impl RawContent {
    fn text(&self) -> Option<String> {
        match self {
            RawContent::Text(s) => Some(s.clone()),
            RawContent::Fields(f) => f.text.clone(),
            RawContent::Other(Value::Number(n)) => Some(n.to_string()),
            RawContent::Other(_) => None,
        }
    }

    fn fields(&self) -> TemplateContent {
        match self {
            RawContent::Fields(f) => f.clone(),
            RawContent::Text(s) => TemplateContent {
                text: Some(s.clone()),
                ..Default::default()
            },
            RawContent::Other(_) => TemplateContent::default(),
        }
    }
}

/// Flat wire shape shared by both schemas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawElement {
    #[serde(default, skip_serializing_if = "Id::is_empty")]
    id: Id,
    #[serde(rename = "type", default)]
    type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<RawContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<Element>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    css: Option<String>,
}

impl From<RawElement> for Element {
    fn from(raw: RawElement) -> Self {
        let content_text = raw.content.as_ref().and_then(RawContent::text);
        let content_fields = raw.content.as_ref().map(RawContent::fields).unwrap_or_default();

        let kind = match raw.type_name.as_str() {
            "navbar" => ElementKind::Navbar {
                items: raw
                    .items
                    .or(content_fields.items)
                    .map(SmallVec::from_vec),
            },
            _ if raw.html.is_some() => ElementKind::Markup {
                html: raw.html.unwrap_or_default(),
                css: raw.css,
            },
            "text" => ElementKind::Text {
                content: content_text,
                style: raw.style.as_deref().map(TextStyle::from_name).unwrap_or_default(),
            },
            "button" => ElementKind::Button {
                content: content_text,
                variant: raw
                    .variant
                    .as_deref()
                    .map(ButtonVariant::from_name)
                    .unwrap_or_default(),
            },
            "input" => ElementKind::Input {
                placeholder: raw.placeholder.or(content_fields.placeholder),
                icon: raw.icon.or(content_fields.icon),
            },
            "image" => ElementKind::Image {
                label: raw.label.or(content_text),
                size: raw.size.as_deref().map(ImageSize::from_name).unwrap_or_default(),
            },
            "icon" => ElementKind::Icon {
                name: raw.name.or(raw.icon),
                label: raw.label.or(content_text),
            },
            "box" => ElementKind::Box {
                variant: raw
                    .variant
                    .as_deref()
                    .map(BoxVariant::from_name)
                    .unwrap_or_default(),
                children: raw.children.unwrap_or_default(),
            },
            "divider" => ElementKind::Divider,
            "spacer" => ElementKind::Spacer {
                size: raw
                    .size
                    .or(content_fields.size)
                    .as_deref()
                    .map(SpacerSize::from_name)
                    .unwrap_or_default(),
            },
            other => match Template::from_name(other) {
                Some(template) => ElementKind::Template {
                    template,
                    content: content_fields,
                },
                None => ElementKind::Unknown {
                    type_name: other.to_string(),
                    text: content_text,
                },
            },
        };

        Element { id: raw.id, kind }
    }
}

impl From<Element> for RawElement {
    fn from(el: Element) -> Self {
        let mut raw = RawElement {
            id: el.id,
            type_name: el.kind.type_name().to_string(),
            ..Default::default()
        };
        match el.kind {
            ElementKind::Text { content, style } => {
                raw.content = content.map(RawContent::Text);
                raw.style = Some(style.name().to_string());
            }
            ElementKind::Button { content, variant } => {
                raw.content = content.map(RawContent::Text);
                raw.variant = Some(variant.name().to_string());
            }
            ElementKind::Input { placeholder, icon } => {
                raw.placeholder = placeholder;
                raw.icon = icon;
            }
            ElementKind::Image { label, size } => {
                raw.label = label;
                raw.size = Some(size.name().to_string());
            }
            ElementKind::Icon { name, label } => {
                raw.name = name;
                raw.label = label;
            }
            ElementKind::Box { variant, children } => {
                raw.variant = Some(variant.name().to_string());
                raw.children = Some(children);
            }
            ElementKind::Divider => {}
            ElementKind::Spacer { size } => raw.size = Some(size.name().to_string()),
            ElementKind::Navbar { items } => raw.items = items.map(SmallVec::into_vec),
            ElementKind::Template { content, .. } => {
                raw.content = Some(RawContent::Fields(content))
            }
            ElementKind::Markup { html, css } => {
                raw.type_name = "html".to_string();
                raw.html = Some(html);
                raw.css = css;
            }
            ElementKind::Unknown { text, .. } => raw.content = text.map(RawContent::Text),
        }
        raw
    }
}

// ─── Lenient scalars ─────────────────────────────────────────────────────

/// Accept a string, number, or bool where the schema expects text.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Accept a number or a numeric string; anything else is 0.
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}
