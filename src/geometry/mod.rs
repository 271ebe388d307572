pub mod bounds;
pub mod containment;
pub mod mapper;

pub use bounds::{Bounds, PADDING_RATIO, compute_bounds};
pub use containment::contains;
pub use mapper::{CoordinateMapper, Viewport};
