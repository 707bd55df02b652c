//! Markup renderer for Mockflow documents.
//!
//! Turns a [`mf_core::MockupDocument`] plus selection state into HTML:
//! device frames, element trees, and an SVG flow-arrow overlay. Also owns
//! the hit-testing used by the canvas controller.

pub mod canvas;
pub mod compose;
pub mod element;
pub mod flow;
pub mod hit;
pub mod icons;
pub mod markup;
pub mod screen;
pub mod styles;

pub use canvas::{EMPTY_CANVAS_TEXT, render_canvas, render_page};
pub use element::{ElementContext, render_element};
pub use flow::{FlowDirection, FlowRoute, render_flow_arrows, route_flow};
pub use hit::{HitTarget, Lasso, hit_test, lasso_select};
pub use screen::render_screen;
pub use styles::{StyleBlock, StyleRegistry};
