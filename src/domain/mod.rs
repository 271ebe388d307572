pub mod point;
pub mod polygon;

pub use point::{GeoPoint, PixelPoint};
pub use polygon::{MIN_VERTICES, Polygon, edges};
