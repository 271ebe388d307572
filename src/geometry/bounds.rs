use serde::Serialize;

use crate::domain::{GeoPoint, Polygon};

/// Fraction of each axis span added on both sides of the raw extent
pub const PADDING_RATIO: f64 = 0.1;

/// Axis-aligned bounding box in degrees, padded around the polygon
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Create padded bounds from a set of points.
    ///
    /// Returns `None` for an empty slice. Each axis is widened by
    /// `PADDING_RATIO * span` at both ends; a zero span stays zero.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;

        let mut bounds = Self {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lng: first.lng,
            max_lng: first.lng,
        };

        for p in rest {
            bounds.min_lat = bounds.min_lat.min(p.lat);
            bounds.max_lat = bounds.max_lat.max(p.lat);
            bounds.min_lng = bounds.min_lng.min(p.lng);
            bounds.max_lng = bounds.max_lng.max(p.lng);
        }

        let lat_padding = bounds.lat_span() * PADDING_RATIO;
        let lng_padding = bounds.lng_span() * PADDING_RATIO;

        bounds.min_lat -= lat_padding;
        bounds.max_lat += lat_padding;
        bounds.min_lng -= lng_padding;
        bounds.max_lng += lng_padding;

        Some(bounds)
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lng_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            self.min_lat + self.lat_span() / 2.0,
            self.min_lng + self.lng_span() / 2.0,
        )
    }

    /// Whether the point lies in the (closed) rectangle
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.lat >= self.min_lat
            && point.lat <= self.max_lat
            && point.lng >= self.min_lng
            && point.lng <= self.max_lng
    }
}

/// Padded bounds of a validated polygon
pub fn compute_bounds(polygon: &Polygon) -> Bounds {
    // Polygon::new guarantees at least three vertices
    Bounds::from_points(polygon.vertices()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_bounds_square_padding() {
        let polygon = Polygon::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 4.0),
            GeoPoint::new(4.0, 4.0),
            GeoPoint::new(4.0, 0.0),
        ])
        .unwrap();
        let bounds = compute_bounds(&polygon);

        assert!(approx(bounds.min_lat, -0.4));
        assert!(approx(bounds.max_lat, 4.4));
        assert!(approx(bounds.min_lng, -0.4));
        assert!(approx(bounds.max_lng, 4.4));
    }

    #[test]
    fn test_bounds_axes_are_independent() {
        let points = vec![
            GeoPoint::new(10.0, -20.0),
            GeoPoint::new(30.0, 80.0),
            GeoPoint::new(20.0, 0.0),
        ];
        let bounds = Bounds::from_points(&points).unwrap();

        assert!(approx(bounds.min_lat, 8.0));
        assert!(approx(bounds.max_lat, 32.0));
        assert!(approx(bounds.min_lng, -30.0));
        assert!(approx(bounds.max_lng, 90.0));
    }

    #[test]
    fn test_bounds_empty() {
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn test_bounds_zero_span_is_not_padded() {
        let points = vec![
            GeoPoint::new(5.0, 1.0),
            GeoPoint::new(5.0, 2.0),
            GeoPoint::new(5.0, 3.0),
        ];
        let bounds = Bounds::from_points(&points).unwrap();

        assert_eq!(bounds.min_lat, 5.0);
        assert_eq!(bounds.max_lat, 5.0);
        assert_eq!(bounds.lat_span(), 0.0);
        assert!(bounds.lng_span() > 0.0);
    }

    #[test]
    fn test_bounds_accepts_out_of_range_coordinates() {
        let points = vec![GeoPoint::new(-120.0, 200.0), GeoPoint::new(95.0, -190.0)];
        let bounds = Bounds::from_points(&points).unwrap();

        assert!(bounds.min_lat < -120.0);
        assert!(bounds.max_lng > 200.0);
        assert!(bounds.min_lat <= bounds.max_lat);
        assert!(bounds.min_lng <= bounds.max_lng);
    }

    #[test]
    fn test_bounds_contains_polygon() {
        let points = vec![
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(2.0, 3.0),
            GeoPoint::new(-1.0, 2.0),
        ];
        let bounds = Bounds::from_points(&points).unwrap();

        assert!(points.iter().all(|&p| bounds.contains(p)));
        assert!(bounds.contains(bounds.center()));
        assert!(!bounds.contains(GeoPoint::new(10.0, 10.0)));
    }
}
