//! Property-based invariant tests for the view transform.
//!
//! 1. world → screen → world is the identity (within tolerance).
//! 2. A wheel notch keeps the world point under the cursor fixed.
//! 3. Fit-to-content never enlarges and keeps every screen inside the container.

use mf_core::{CanvasConfig, Point, Position, Screen, Size, Vec2, ViewTransform, screen_rect};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn view_strategy() -> impl Strategy<Value = ViewTransform> {
    (-5000.0f64..5000.0, -5000.0f64..5000.0, 0.05f64..8.0)
        .prop_map(|(x, y, zoom)| ViewTransform::new(Vec2::new(x, y), zoom))
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (-10_000.0f64..10_000.0, -10_000.0f64..10_000.0).prop_map(|(x, y)| Point::new(x, y))
}

fn screens_strategy() -> impl Strategy<Value = Vec<Screen>> {
    prop::collection::vec((-3000.0f64..3000.0, -3000.0f64..3000.0), 1..8).prop_map(|positions| {
        positions
            .into_iter()
            .map(|(x, y)| Screen {
                position: Position::new(x, y),
                ..Default::default()
            })
            .collect()
    })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs()))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Round-trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn screen_world_round_trip(view in view_strategy(), p in point_strategy()) {
        let back = view.world_to_screen(view.screen_to_world(p));
        prop_assert!(close(back.x, p.x) && close(back.y, p.y), "{:?} -> {:?}", p, back);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Zoom-to-cursor invariance
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn wheel_keeps_cursor_anchor(
        view in view_strategy(),
        cursor in (0.0f64..2000.0, 0.0f64..2000.0),
        delta in prop_oneof![Just(-100.0f64), Just(100.0f64)],
    ) {
        let config = CanvasConfig::default();
        let cursor = Point::new(cursor.0, cursor.1);
        let anchor = view.screen_to_world(cursor);

        let mut zoomed = view;
        zoomed.wheel(cursor, delta, &config);

        let after = zoomed.world_to_screen(anchor);
        prop_assert!(close(after.x, cursor.x) && close(after.y, cursor.y));
        prop_assert!(zoomed.zoom >= config.min_zoom && zoomed.zoom <= config.max_zoom);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Fit-to-content
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fit_keeps_screens_inside_container(
        screens in screens_strategy(),
        w in 200.0f64..3000.0,
        h in 200.0f64..3000.0,
    ) {
        let config = CanvasConfig::default();
        let mut view = ViewTransform::default();
        view.fit_to_content(&screens, Size::new(w, h), &config);

        let bounds = mf_core::content_bounds(&screens).unwrap();
        let scale_x = w / (bounds.width() + 2.0 * config.fit_margin);
        let scale_y = h / (bounds.height() + 2.0 * config.fit_margin);

        prop_assert!(view.zoom <= 1.0);
        prop_assert!(view.zoom <= scale_x.min(scale_y) * config.fit_scale + 1e-12);

        let margin_px = config.fit_margin * view.zoom;
        for screen in &screens {
            let r = screen_rect(screen.position);
            let tl = view.world_to_screen(Point::new(r.x0, r.y0));
            let br = view.world_to_screen(Point::new(r.x1, r.y1));
            prop_assert!(tl.x >= margin_px - 1e-6 && tl.y >= margin_px - 1e-6);
            prop_assert!(br.x <= w - margin_px + 1e-6 && br.y <= h - margin_px + 1e-6);
        }
    }
}
