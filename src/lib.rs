//! polycheck - Render a lat/lng polygon and test points for containment

pub mod config;
pub mod domain;
pub mod geometry;
pub mod input;
pub mod render;

pub use domain::{GeoPoint, PixelPoint, Polygon};
pub use geometry::{Bounds, CoordinateMapper, Viewport, compute_bounds, contains};
pub use input::{ParseError, parse_polygon};
pub use render::Scene;
