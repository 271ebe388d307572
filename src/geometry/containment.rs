use crate::domain::{GeoPoint, Polygon, edges};

/// Even-odd ray casting test.
///
/// A ray is cast from `point` towards increasing longitude and every edge it
/// crosses toggles the result. Latitude is the sweep axis and longitude the
/// comparison axis. The polygon is closed implicitly: the first edge visited
/// is `last -> first`.
///
/// Points exactly on an edge or vertex get whatever the floating point
/// comparison yields. An empty slice contains nothing.
pub fn contains(point: GeoPoint, vertices: &[GeoPoint]) -> bool {
    let mut inside = false;
    for (prev, current) in edges(vertices) {
        if crosses(point, current, prev) {
            inside = !inside;
        }
    }
    inside
}

/// Whether the edge `a -> b` crosses the eastward ray from `q`.
///
/// The division only happens once the endpoints straddle `q.lat`, which
/// excludes edges with `a.lat == b.lat`.
fn crosses(q: GeoPoint, a: GeoPoint, b: GeoPoint) -> bool {
    if (a.lat > q.lat) == (b.lat > q.lat) {
        return false;
    }
    let crossing_lng = (b.lng - a.lng) * (q.lat - a.lat) / (b.lat - a.lat) + a.lng;
    q.lng < crossing_lng
}

impl Polygon {
    /// Even-odd containment, see [`contains`]
    pub fn contains(&self, point: GeoPoint) -> bool {
        contains(point, self.vertices())
    }
}
