pub mod config;
pub mod error;
pub mod extract;
pub mod id;
pub mod model;
pub mod selection;
pub mod transform;

pub use config::CanvasConfig;
pub use error::DocumentError;
pub use extract::{extract_json, parse_mockup_response};
pub use id::Id;
pub use model::*;
pub use selection::{SelectionItem, SelectionSet, selection_context};
pub use transform::{SCREEN_SIZE, ViewTransform, content_bounds, screen_center, screen_rect};

// Re-export kurbo geometry so downstream crates share one version.
pub use kurbo::{Point, Rect, Size, Vec2};
