//! Flow arrows between screens.
//!
//! Each flow becomes one cubic bezier in world space, leaving the source
//! frame on the side facing the target. The dominant axis of the centre
//! delta picks the side; ties go vertical.

use crate::icons::flow_glyph;
use crate::markup::escape;
use kurbo::Point;
use mf_core::{Flow, MockupDocument, screen_rect};

/// Which side of the source frame an arrow leaves from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    Right,
    Left,
    Down,
    Up,
}

impl FlowDirection {
    pub fn name(self) -> &'static str {
        match self {
            FlowDirection::Right => "right",
            FlowDirection::Left => "left",
            FlowDirection::Down => "down",
            FlowDirection::Up => "up",
        }
    }
}

/// Geometry of one arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowRoute {
    pub direction: FlowDirection,
    pub start: Point,
    pub c1: Point,
    pub c2: Point,
    pub end: Point,
}

// Gaps between the frame edge and the arrow ends.
const SIDE_START_GAP: f64 = 10.0;
const VERTICAL_START_GAP: f64 = 40.0;
const END_GAP: f64 = 20.0;
const LABEL_LIFT: f64 = 15.0;

/// Route an arrow between two screens given their top-left corners.
pub fn route_flow(from: mf_core::Position, to: mf_core::Position) -> FlowRoute {
    let a = screen_rect(from);
    let b = screen_rect(to);
    let delta = b.center() - a.center();

    let (direction, start, end) = if delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 {
            (
                FlowDirection::Right,
                Point::new(a.x1 + SIDE_START_GAP, a.center().y),
                Point::new(b.x0 - END_GAP, b.center().y),
            )
        } else {
            (
                FlowDirection::Left,
                Point::new(a.x0 - SIDE_START_GAP, a.center().y),
                Point::new(b.x1 + END_GAP, b.center().y),
            )
        }
    } else if delta.y > 0.0 {
        (
            FlowDirection::Down,
            Point::new(a.center().x, a.y1 + VERTICAL_START_GAP),
            Point::new(b.center().x, b.y0 - END_GAP),
        )
    } else {
        (
            FlowDirection::Up,
            Point::new(a.center().x, a.y0 - VERTICAL_START_GAP),
            Point::new(b.center().x, b.y1 + END_GAP),
        )
    };

    let (c1, c2) = match direction {
        FlowDirection::Right | FlowDirection::Left => {
            let mid_x = (start.x + end.x) / 2.0;
            (Point::new(mid_x, start.y), Point::new(mid_x, end.y))
        }
        FlowDirection::Down | FlowDirection::Up => {
            let mid_y = (start.y + end.y) / 2.0;
            (Point::new(start.x, mid_y), Point::new(end.x, mid_y))
        }
    };

    FlowRoute {
        direction,
        start,
        c1,
        c2,
        end,
    }
}

impl FlowRoute {
    /// SVG path data, `M s C c1, c2, e`.
    pub fn path_data(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x,
            self.start.y,
            self.c1.x,
            self.c1.y,
            self.c2.x,
            self.c2.y,
            self.end.x,
            self.end.y
        )
    }

    /// Where the label badge is centred: the chord midpoint, lifted.
    pub fn label_anchor(&self) -> Point {
        let mid = self.start.midpoint(self.end);
        Point::new(mid.x, mid.y - LABEL_LIFT)
    }
}

const DEFS: &str = concat!(
    "<defs>",
    r##"<marker id="arrowhead" markerWidth="12" markerHeight="12" refX="10" refY="6" orient="auto" markerUnits="userSpaceOnUse"><path d="M 0 0 L 12 6 L 0 12 L 3 6 Z" fill="#8B5CF6"/></marker>"##,
    r##"<marker id="arrowhead-glow" markerWidth="16" markerHeight="16" refX="12" refY="8" orient="auto" markerUnits="userSpaceOnUse"><path d="M 0 0 L 16 8 L 0 16 L 4 8 Z" fill="#8B5CF6" opacity="0.3" filter="blur(2px)"/></marker>"##,
    r##"<linearGradient id="arrow-gradient" x1="0%" y1="0%" x2="100%" y2="0%"><stop offset="0%" stop-color="#8B5CF6"/><stop offset="100%" stop-color="#06B6D4"/></linearGradient>"##,
    r##"<filter id="glow" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="3" result="coloredBlur"/><feMerge><feMergeNode in="coloredBlur"/><feMergeNode in="SourceGraphic"/></feMerge></filter>"##,
    "</defs>",
);

/// One arrow group, or `None` when either endpoint is not a screen.
pub fn render_flow(doc: &MockupDocument, flow: &Flow) -> Option<String> {
    let (Some(from), Some(to)) = (doc.screen(flow.from), doc.screen(flow.to)) else {
        log::debug!("skipping flow {} -> {}: missing endpoint", flow.from, flow.to);
        return None;
    };
    let route = route_flow(from.position, to.position);
    let d = route.path_data();

    let mut out = format!(
        "<g class=\"flow-arrow\" data-from=\"{}\" data-to=\"{}\" data-direction=\"{}\">",
        escape(flow.from.as_str()),
        escape(flow.to.as_str()),
        route.direction.name()
    );
    out.push_str(&format!(
        r#"<path d="{d}" stroke="url(#arrow-gradient)" stroke-width="8" fill="none" opacity="0.15" stroke-linecap="round"/>"#
    ));
    out.push_str(&format!(
        r#"<path d="{d}" stroke="url(#arrow-gradient)" stroke-width="3" fill="none" stroke-dasharray="12,6" stroke-linecap="round" marker-end="url(#arrowhead)" filter="url(#glow)"><animate attributeName="stroke-dashoffset" from="0" to="-18" dur="1s" repeatCount="indefinite"/></path>"#
    ));

    if !flow.label.is_empty() {
        let anchor = route.label_anchor();
        let len = flow.label.chars().count() as f64;
        out.push_str(&format!(
            r##"<rect x="{}" y="{}" width="{}" height="22" rx="11" fill="#1a1a25" stroke="#8B5CF6" stroke-width="1" opacity="0.95"/>"##,
            anchor.x - len * 3.5 - 16.0,
            anchor.y - 10.0,
            len * 7.0 + 32.0,
        ));
        out.push_str(&format!(
            r##"<text x="{}" y="{}" fill="#a1a1aa" font-size="11" font-family="Inter, sans-serif" text-anchor="middle" font-weight="500">{} {}</text>"##,
            anchor.x,
            anchor.y + 4.0,
            flow_glyph(flow.kind),
            escape(&flow.label)
        ));
    }
    out.push_str("</g>");
    Some(out)
}

/// The whole arrow overlay. Empty when there are no flows.
pub fn render_flow_arrows(doc: &MockupDocument) -> String {
    if doc.flows.is_empty() {
        return String::new();
    }
    let mut out = String::from(
        r#"<svg class="flow-arrows" style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; overflow: visible;">"#,
    );
    out.push_str(DEFS);
    for flow in &doc.flows {
        if let Some(group) = render_flow(doc, flow) {
            out.push_str(&group);
        }
    }
    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_core::{FlowKind, Id, Position, Screen};
    use pretty_assertions::assert_eq;

    fn doc(positions: &[(&str, f64, f64)], flows: Vec<Flow>) -> MockupDocument {
        MockupDocument {
            app_name: "Test".into(),
            screens: positions
                .iter()
                .map(|(id, x, y)| Screen {
                    id: Id::intern(id),
                    name: id.to_string(),
                    position: Position::new(*x, *y),
                    elements: vec![],
                })
                .collect(),
            flows,
        }
    }

    fn flow(from: &str, to: &str, label: &str, kind: FlowKind) -> Flow {
        Flow {
            from: Id::intern(from),
            to: Id::intern(to),
            label: label.into(),
            kind,
        }
    }

    #[test]
    fn right_branch_geometry() {
        let r = route_flow(Position::new(0.0, 0.0), Position::new(400.0, 0.0));
        assert_eq!(r.direction, FlowDirection::Right);
        assert_eq!(r.start, Point::new(290.0, 300.0));
        assert_eq!(r.end, Point::new(380.0, 300.0));
        assert_eq!(r.c1, Point::new(335.0, 300.0));
        assert_eq!(r.c2, Point::new(335.0, 300.0));
        assert_eq!(r.path_data(), "M 290 300 C 335 300, 335 300, 380 300");
        assert_eq!(r.label_anchor(), Point::new(335.0, 285.0));
    }

    #[test]
    fn left_branch_geometry() {
        let r = route_flow(Position::new(400.0, 0.0), Position::new(0.0, 50.0));
        assert_eq!(r.direction, FlowDirection::Left);
        assert_eq!(r.start, Point::new(390.0, 300.0));
        assert_eq!(r.end, Point::new(300.0, 350.0));
        assert_eq!(r.c1, Point::new(345.0, 300.0));
        assert_eq!(r.c2, Point::new(345.0, 350.0));
    }

    #[test]
    fn down_and_up_branches() {
        let down = route_flow(Position::new(0.0, 0.0), Position::new(0.0, 800.0));
        assert_eq!(down.direction, FlowDirection::Down);
        assert_eq!(down.start, Point::new(140.0, 640.0));
        assert_eq!(down.end, Point::new(140.0, 780.0));
        assert_eq!(down.c1, Point::new(140.0, 710.0));

        let up = route_flow(Position::new(0.0, 800.0), Position::new(0.0, 0.0));
        assert_eq!(up.direction, FlowDirection::Up);
        assert_eq!(up.start, Point::new(140.0, 760.0));
        assert_eq!(up.end, Point::new(140.0, 620.0));
    }

    #[test]
    fn diagonal_tie_goes_vertical() {
        let r = route_flow(Position::new(0.0, 0.0), Position::new(100.0, 100.0));
        assert_eq!(r.direction, FlowDirection::Down);
    }

    #[test]
    fn dangling_flow_is_skipped() {
        let d = doc(&[("s1", 0.0, 0.0)], vec![flow("s1", "ghost", "x", FlowKind::Tap)]);
        assert!(render_flow(&d, &d.flows[0]).is_none());
        let svg = render_flow_arrows(&d);
        assert!(!svg.contains("flow-arrow\""));
    }

    #[test]
    fn no_flows_no_overlay() {
        assert_eq!(render_flow_arrows(&doc(&[("s1", 0.0, 0.0)], vec![])), "");
    }

    #[test]
    fn label_badge_geometry_and_glyph() {
        let d = doc(
            &[("s1", 0.0, 0.0), ("s2", 400.0, 0.0)],
            vec![flow("s1", "s2", "Login", FlowKind::Submit)],
        );
        let g = render_flow(&d, &d.flows[0]).unwrap();
        // anchor (335, 285); 5 chars → width 67, x = 335 - 17.5 - 16
        assert!(g.contains(r#"<rect x="301.5" y="275" width="67" height="22""#));
        assert!(g.contains(">✓ Login</text>"));
        assert!(g.contains(r#"data-direction="right""#));
    }

    #[test]
    fn unlabeled_flow_has_no_badge() {
        let d = doc(
            &[("s1", 0.0, 0.0), ("s2", 400.0, 0.0)],
            vec![flow("s1", "s2", "", FlowKind::Tap)],
        );
        let g = render_flow(&d, &d.flows[0]).unwrap();
        assert!(!g.contains("<rect"));
        assert!(!g.contains("<text"));
    }
}
