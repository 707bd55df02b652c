//! End-to-end: JSON document → canvas markup → hit testing.

use mf_core::*;
use mf_render::*;
use pretty_assertions::assert_eq;

const CHECKOUT: &str = include_str!("fixtures/checkout.json");

fn load() -> MockupDocument {
    MockupDocument::from_json(CHECKOUT).unwrap()
}

#[test]
fn renders_both_frames_and_one_arrow() {
    let doc = load();
    let mut styles = StyleRegistry::new();
    let html = render_canvas(Some(&doc), &SelectionSet::new(), &mut styles);

    assert_eq!(html.matches("class=\"screen-wrapper").count(), 2);
    assert_eq!(html.matches(r#"data-from="s1" data-to="s2""#).count(), 1);
    assert!(html.contains(r#"data-direction="right""#));
    // Dangling s2 → ghost flow is skipped without failing the render.
    assert!(!html.contains(r#"data-to="ghost""#));
    assert!(html.contains(">✓ Submit form</text>"));
}

#[test]
fn rating_renders_four_filled_stars_and_value() {
    let doc = load();
    let html = render_canvas(Some(&doc), &SelectionSet::new(), &mut StyleRegistry::new());
    let start = html.find(r#"data-element-id="stars""#).unwrap();
    let rating = &html[start..];
    let end = rating.find("</div></div>").unwrap();
    let rating = &rating[..end];

    assert_eq!(
        rating
            .matches(r#"fill="currentColor" stroke="currentColor""#)
            .count(),
        4
    );
    assert!(rating.contains(">4.5<"));
    assert!(html.contains("(212 reviews)"));
}

#[test]
fn navbar_composed_once_per_screen() {
    let doc = load();
    let html = render_canvas(Some(&doc), &SelectionSet::new(), &mut StyleRegistry::new());
    assert_eq!(html.matches("ui-element navbar").count(), 1);
}

#[test]
fn markup_css_registered_once_across_renders() {
    let doc = load();
    let mut styles = StyleRegistry::new();
    let sel = SelectionSet::new();
    render_canvas(Some(&doc), &sel, &mut styles);
    render_canvas(Some(&doc), &sel, &mut styles);
    assert_eq!(styles.len(), 1);
    assert_eq!(styles.blocks()[0].key, "css-s2-promo");
    assert!(
        render_canvas(Some(&doc), &sel, &mut styles).contains(r#"<div class="promo">20% off</div>"#)
    );
}

#[test]
fn selection_marks_only_selected_nodes() {
    let doc = load();
    let mut sel = SelectionSet::new();
    sel.select_screen(Id::intern("s2"), false);
    sel.select_element(Id::intern("s1"), Id::intern("pizza-name"), true);
    let html = render_canvas(Some(&doc), &sel, &mut StyleRegistry::new());

    assert!(html.contains(r#"<div class="screen-wrapper selected" data-screen-id="s2""#));
    assert!(html.contains(r#"<div class="screen-wrapper" data-screen-id="s1""#));
    assert!(html.contains(
        r#"<div class="ui-element text text-subheading selected" data-element-id="pizza-name">"#
    ));
    assert_eq!(html.matches(" selected\"").count(), 2);
}

#[test]
fn lasso_over_fitted_view_selects_checkout_screen() {
    let doc = load();
    let config = CanvasConfig::default();
    let mut view = ViewTransform::default();
    view.fit_to_content(&doc.screens, Size::new(1280.0, 800.0), &config);

    let center = view.world_to_screen(screen_center(Position::new(400.0, 0.0)));
    let lasso = Lasso::from_drag(center - Vec2::new(12.0, 0.0), center + Vec2::new(12.0, 0.0));
    assert_eq!(
        lasso_select(&doc, &view, &lasso, &config),
        vec![SelectionItem::screen("s2")]
    );

    let tiny = Lasso::from_drag(center, center + Vec2::new(10.0, 0.0));
    assert!(lasso_select(&doc, &view, &tiny, &config).is_empty());
}

#[test]
fn click_through_fitted_view() {
    let doc = load();
    let config = CanvasConfig::default();
    let mut view = ViewTransform::default();
    view.fit_to_content(&doc.screens, Size::new(1280.0, 800.0), &config);

    // Row 1 of the menu screen is the search input.
    let p = view.world_to_screen(Point::new(140.0, 140.0));
    assert_eq!(
        hit_test(&doc, &view, p, &config),
        Some(HitTarget::Element {
            screen_id: Id::intern("s1"),
            id: Id::intern("search")
        })
    );
}
