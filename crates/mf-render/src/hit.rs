//! Hit testing: lasso selection and point → screen/element lookup.
//!
//! Element positions are approximated by a fixed vertical rhythm
//! (`row_offset + index * row_pitch` below the frame top, on the frame's
//! centre line), not by true layout. Boundaries are inclusive.

use kurbo::{Point, Rect};
use mf_core::{
    CanvasConfig, ElementKind, Id, MockupDocument, SCREEN_SIZE, Screen, SelectionItem,
    ViewTransform, screen_center, screen_rect,
};

/// Height of the navbar strip at the bottom of a frame, in world units.
pub const NAVBAR_HEIGHT: f64 = 84.0;

/// What a point on the canvas lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Screen(Id),
    Element { screen_id: Id, id: Id },
}

impl HitTarget {
    pub fn to_selection(self) -> SelectionItem {
        match self {
            HitTarget::Screen(id) => SelectionItem::Screen { id },
            HitTarget::Element { screen_id, id } => SelectionItem::Element { screen_id, id },
        }
    }
}

/// Circular lasso in screen space whose drag vector is a diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lasso {
    pub center: Point,
    pub radius: f64,
}

impl Lasso {
    pub fn from_drag(start: Point, end: Point) -> Self {
        Self {
            center: start.midpoint(end),
            radius: start.distance(end) / 2.0,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.center.distance(p) <= self.radius
    }

    /// Overlay ellipse for the in-progress gesture.
    pub fn to_svg(&self) -> String {
        format!(
            r#"<ellipse class="selection-circle" cx="{}" cy="{}" rx="{}" ry="{}"/>"#,
            self.center.x, self.center.y, self.radius, self.radius
        )
    }
}

/// World-space anchor of the element at `index` on `screen`.
pub fn element_anchor(screen: &Screen, index: usize, config: &CanvasConfig) -> Point {
    Point::new(
        screen.position.x + SCREEN_SIZE.width / 2.0,
        screen.position.y + config.row_offset + index as f64 * config.row_pitch,
    )
}

/// Everything a finished lasso encloses, as one batch.
///
/// Lassos smaller than `lasso_min_radius` count as a misclick and select
/// nothing. Only elements directly on a screen are candidates.
pub fn lasso_select(
    doc: &MockupDocument,
    view: &ViewTransform,
    lasso: &Lasso,
    config: &CanvasConfig,
) -> Vec<SelectionItem> {
    if lasso.radius < config.lasso_min_radius {
        return Vec::new();
    }

    let mut items = Vec::new();
    for screen in &doc.screens {
        let center = view.world_to_screen(screen_center(screen.position));
        if lasso.contains(center) {
            items.push(SelectionItem::Screen { id: screen.id });
        }
        for (index, element) in screen.elements.iter().enumerate() {
            let anchor = view.world_to_screen(element_anchor(screen, index, config));
            if lasso.contains(anchor) {
                items.push(SelectionItem::Element {
                    screen_id: screen.id,
                    id: element.id,
                });
            }
        }
    }
    items
}

fn contains_inclusive(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}

/// Find what a screen-space point lands on.
///
/// Screens are tested topmost first (last rendered). Inside a frame the
/// navbar strip wins, then the element whose row band (one `row_pitch`
/// centred on its anchor) contains the point, lowest index first; otherwise
/// the screen itself.
pub fn hit_test(
    doc: &MockupDocument,
    view: &ViewTransform,
    point: Point,
    config: &CanvasConfig,
) -> Option<HitTarget> {
    let world = view.screen_to_world(point);
    let screen = doc
        .screens
        .iter()
        .rev()
        .find(|s| contains_inclusive(screen_rect(s.position), world))?;

    if let Some(nav) = screen.navbar()
        && world.y >= screen_rect(screen.position).y1 - NAVBAR_HEIGHT
    {
        return Some(HitTarget::Element {
            screen_id: screen.id,
            id: nav.id,
        });
    }

    let half_band = config.row_pitch / 2.0;
    let row = screen
        .elements
        .iter()
        .enumerate()
        .filter(|(_, el)| !matches!(el.kind, ElementKind::Navbar { .. }))
        .find(|(index, _)| (world.y - element_anchor(screen, *index, config).y).abs() <= half_band);

    Some(match row {
        Some((_, el)) => HitTarget::Element {
            screen_id: screen.id,
            id: el.id,
        },
        None => HitTarget::Screen(screen.id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_core::{Element, Position, TextStyle, Vec2};
    use pretty_assertions::assert_eq;

    fn text(id: &str) -> Element {
        Element::new(
            id,
            ElementKind::Text {
                content: Some(id.into()),
                style: TextStyle::Body,
            },
        )
    }

    fn doc() -> MockupDocument {
        MockupDocument {
            app_name: "T".into(),
            screens: vec![
                Screen {
                    id: Id::intern("a"),
                    name: "A".into(),
                    position: Position::new(0.0, 0.0),
                    elements: vec![text("a0"), text("a1")],
                },
                Screen {
                    id: Id::intern("b"),
                    name: "B".into(),
                    position: Position::new(400.0, 0.0),
                    elements: vec![
                        text("b0"),
                        Element::new("nav", ElementKind::Navbar { items: None }),
                    ],
                },
            ],
            flows: vec![],
        }
    }

    #[test]
    fn lasso_from_drag_uses_diameter() {
        let l = Lasso::from_drag(Point::new(0.0, 0.0), Point::new(60.0, 80.0));
        assert_eq!(l.center, Point::new(30.0, 40.0));
        assert_eq!(l.radius, 50.0);
    }

    #[test]
    fn tiny_lasso_is_a_misclick() {
        let config = CanvasConfig::default();
        let l = Lasso {
            center: Point::new(140.0, 300.0),
            radius: 5.0,
        };
        assert!(lasso_select(&doc(), &ViewTransform::default(), &l, &config).is_empty());
    }

    #[test]
    fn lasso_around_screen_center_selects_only_that_screen() {
        let config = CanvasConfig::default();
        // Screen a centre is (140, 300); its rows sit at y = 80 and 140.
        let l = Lasso {
            center: Point::new(140.0, 300.0),
            radius: 20.0,
        };
        assert_eq!(
            lasso_select(&doc(), &ViewTransform::default(), &l, &config),
            vec![SelectionItem::screen("a")]
        );
    }

    #[test]
    fn lasso_mixes_screens_and_elements() {
        let config = CanvasConfig::default();
        let l = Lasso {
            center: Point::new(140.0, 200.0),
            radius: 120.0,
        };
        assert_eq!(
            lasso_select(&doc(), &ViewTransform::default(), &l, &config),
            vec![
                SelectionItem::screen("a"),
                SelectionItem::element("a", "a0"),
                SelectionItem::element("a", "a1"),
            ]
        );
    }

    #[test]
    fn lasso_boundary_is_inclusive() {
        let config = CanvasConfig::default();
        let l = Lasso {
            center: Point::new(140.0, 320.0),
            radius: 20.0,
        };
        assert_eq!(
            lasso_select(&doc(), &ViewTransform::default(), &l, &config),
            vec![SelectionItem::screen("a")]
        );
    }

    #[test]
    fn lasso_respects_view_transform() {
        let config = CanvasConfig::default();
        let view = ViewTransform::new(Vec2::new(100.0, 50.0), 0.5);
        // Screen b centre: (540, 300) * 0.5 + (100, 50) = (370, 200).
        let l = Lasso {
            center: Point::new(370.0, 200.0),
            radius: 15.0,
        };
        assert_eq!(
            lasso_select(&doc(), &view, &l, &config),
            vec![SelectionItem::screen("b")]
        );
    }

    #[test]
    fn click_hits_rows_screen_and_navbar() {
        let config = CanvasConfig::default();
        let view = ViewTransform::default();
        let d = doc();
        assert_eq!(
            hit_test(&d, &view, Point::new(140.0, 85.0), &config),
            Some(HitTarget::Element {
                screen_id: Id::intern("a"),
                id: Id::intern("a0")
            })
        );
        // Shared band edge at y = 110 resolves to the lower index.
        assert_eq!(
            hit_test(&d, &view, Point::new(140.0, 110.0), &config),
            Some(HitTarget::Element {
                screen_id: Id::intern("a"),
                id: Id::intern("a0")
            })
        );
        assert_eq!(
            hit_test(&d, &view, Point::new(140.0, 400.0), &config),
            Some(HitTarget::Screen(Id::intern("a")))
        );
        assert_eq!(
            hit_test(&d, &view, Point::new(500.0, 590.0), &config),
            Some(HitTarget::Element {
                screen_id: Id::intern("b"),
                id: Id::intern("nav")
            })
        );
        assert_eq!(hit_test(&d, &view, Point::new(340.0, 300.0), &config), None);
    }

    #[test]
    fn click_on_frame_edge_counts() {
        let config = CanvasConfig::default();
        assert_eq!(
            hit_test(&doc(), &ViewTransform::default(), Point::new(280.0, 600.0), &config),
            Some(HitTarget::Screen(Id::intern("a")))
        );
    }

    #[test]
    fn overlay_ellipse() {
        let l = Lasso {
            center: Point::new(1.0, 2.0),
            radius: 3.0,
        };
        assert_eq!(
            l.to_svg(),
            r#"<ellipse class="selection-circle" cx="1" cy="2" rx="3" ry="3"/>"#
        );
    }
}
