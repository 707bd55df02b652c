//! View transform for pan/zoom.
//!
//! Screens and elements live in world space. The whole canvas is drawn
//! through one transform, `screen = world * zoom + pan`, applied once as a
//! single CSS transform on the canvas layer.

use crate::config::CanvasConfig;
use crate::model::{Position, Screen};
use kurbo::{Affine, Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Fixed world-space size of every device frame.
pub const SCREEN_SIZE: Size = Size::new(280.0, 600.0);

/// World-space rectangle occupied by a screen.
pub fn screen_rect(position: Position) -> Rect {
    Rect::from_origin_size(Point::new(position.x, position.y), SCREEN_SIZE)
}

/// World-space centre of a screen.
pub fn screen_center(position: Position) -> Point {
    screen_rect(position).center()
}

/// Union of all screen rectangles, or `None` for an empty list.
pub fn content_bounds(screens: &[Screen]) -> Option<Rect> {
    screens
        .iter()
        .map(|s| screen_rect(s.position))
        .reduce(|acc, r| acc.union(r))
}

/// Pan offset + uniform zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Translation applied after scaling (screen pixels).
    pub pan: Vec2,
    /// Uniform scale factor, always > 0.
    pub zoom: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl ViewTransform {
    pub fn new(pan: Vec2, zoom: f64) -> Self {
        Self { pan, zoom }
    }

    /// The neutral view described by `config`.
    pub fn from_config(config: &CanvasConfig) -> Self {
        Self {
            pan: Vec2::new(config.default_pan.0, config.default_pan.1),
            zoom: config.default_zoom,
        }
    }

    /// World → screen affine.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }

    /// Screen → world affine.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.pan)
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        self.transform() * world
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        self.inverse_transform() * screen
    }

    /// Pan by a delta in screen pixels.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Multiply the zoom by `factor`, keeping the world point under `cursor` fixed.
    ///
    /// The result is clamped to the configured bounds in the direction of
    /// travel only: a view fitted below `min_zoom` never jumps inward on a
    /// zoom-out. The pan correction uses the clamped ratio so the cursor
    /// invariant still holds at the limits.
    pub fn zoom_at(&mut self, cursor: Point, factor: f64, config: &CanvasConfig) {
        let scaled = self.zoom * factor;
        let new_zoom = if factor < 1.0 {
            scaled.max(config.min_zoom.min(self.zoom))
        } else {
            scaled.min(config.max_zoom.max(self.zoom))
        };
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }
        let ratio = new_zoom / self.zoom;
        let c = cursor.to_vec2();
        self.pan = c - (c - self.pan) * ratio;
        self.zoom = new_zoom;
    }

    /// Apply one wheel notch: positive `delta_y` scrolls out.
    pub fn wheel(&mut self, cursor: Point, delta_y: f64, config: &CanvasConfig) {
        let factor = if delta_y > 0.0 {
            config.zoom_out_factor
        } else {
            config.zoom_in_factor
        };
        self.zoom_at(cursor, factor, config);
    }

    /// Restore the neutral view.
    pub fn reset(&mut self, config: &CanvasConfig) {
        *self = Self::from_config(config);
    }

    /// Frame every screen inside a `viewport`-sized container.
    ///
    /// The content box is the union of the screen rectangles padded by
    /// `fit_margin` on each side. The zoom never exceeds 1 (content is not
    /// enlarged) and is then scaled by `fit_scale`; the padded box is centred.
    /// With no screens or a degenerate viewport this falls back to `reset`.
    pub fn fit_to_content(&mut self, screens: &[Screen], viewport: Size, config: &CanvasConfig) {
        let Some(bounds) = content_bounds(screens) else {
            self.reset(config);
            return;
        };
        if !(viewport.width > 0.0 && viewport.height > 0.0) {
            self.reset(config);
            return;
        }

        let margin = config.fit_margin;
        let content_w = bounds.width() + margin * 2.0;
        let content_h = bounds.height() + margin * 2.0;

        let scale_x = viewport.width / content_w;
        let scale_y = viewport.height / content_h;
        let zoom = scale_x.min(scale_y).min(1.0) * config.fit_scale;

        self.zoom = zoom;
        self.pan = Vec2::new(
            (viewport.width - content_w * zoom) / 2.0 - bounds.x0 * zoom + margin * zoom,
            (viewport.height - content_h * zoom) / 2.0 - bounds.y0 * zoom + margin * zoom,
        );
    }

    /// CSS value for the canvas layer.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.pan.x, self.pan.y, self.zoom
        )
    }

    /// Zoom as a rounded percentage, for the toolbar label.
    pub fn zoom_percent(&self) -> i64 {
        (self.zoom * 100.0).round() as i64
    }
}
