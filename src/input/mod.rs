pub mod error;
pub mod parser;

pub use error::ParseError;
pub use parser::{parse_pixel, parse_point, parse_points, parse_polygon};
