use geo::{Area, LineString};

use super::GeoPoint;

/// Minimum number of vertices for a polygon
pub const MIN_VERTICES: usize = 3;

/// A closed polygon given by its vertices in order.
///
/// The last vertex is implicitly joined back to the first one, so callers never
/// repeat the starting point.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<GeoPoint>,
}

impl Polygon {
    /// Build a polygon, returning `None` when fewer than three vertices are given.
    ///
    /// Duplicate or collinear vertices are accepted.
    pub fn new(vertices: Vec<GeoPoint>) -> Option<Self> {
        if vertices.len() < MIN_VERTICES {
            return None;
        }
        Some(Self { vertices })
    }

    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn edges(&self) -> impl Iterator<Item = (GeoPoint, GeoPoint)> + '_ {
        edges(&self.vertices)
    }

    /// Convert to a `geo` polygon with x = longitude, y = latitude
    pub fn to_geo(&self) -> geo::Polygon<f64> {
        let exterior: LineString<f64> = self
            .vertices
            .iter()
            .map(|p| geo::coord! { x: p.lng, y: p.lat })
            .collect();
        geo::Polygon::new(exterior, vec![])
    }

    /// Planar area in square degrees
    pub fn area(&self) -> f64 {
        self.to_geo().unsigned_area()
    }

    /// True when the ring has zero net area: collinear or coincident vertices, or
    /// a self-intersecting ring whose lobes cancel out
    pub fn is_degenerate(&self) -> bool {
        self.area() == 0.0
    }
}

/// Edges of an implicitly closed ring as `(previous, current)` pairs, starting
/// with the closing edge `last -> first`. Yields nothing for an empty slice.
pub fn edges(vertices: &[GeoPoint]) -> impl Iterator<Item = (GeoPoint, GeoPoint)> + '_ {
    let closing = vertices.last().copied();
    closing
        .into_iter()
        .chain(vertices.iter().copied())
        .zip(vertices.iter().copied())
}
