use serde::Serialize;

use super::Bounds;
use crate::domain::{GeoPoint, PixelPoint};

/// Size of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Linear transform between geographic bounds and a pixel viewport
///
/// Longitude runs left to right across `[min_lng, max_lng] -> [0, width]`.
/// Latitude is inverted so north is up: `[max_lat, min_lat] -> [0, height]`.
///
/// An axis with zero span (all vertices on one parallel or meridian) has no
/// scale. Every value on that axis is placed at the middle of the viewport, and
/// mapping back returns the single bound value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    bounds: Bounds,
    viewport: Viewport,
}

impl CoordinateMapper {
    pub fn new(bounds: Bounds, viewport: Viewport) -> Self {
        Self { bounds, viewport }
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Project a geographic point onto the viewport
    pub fn to_pixel(&self, point: GeoPoint) -> PixelPoint {
        let b = &self.bounds;
        let x = axis_fraction(point.lng - b.min_lng, b.lng_span()) * self.viewport.width;
        let y = axis_fraction(b.max_lat - point.lat, b.lat_span()) * self.viewport.height;
        PixelPoint::new(x, y)
    }

    /// Map a pixel position back to geographic coordinates
    pub fn to_geo(&self, pixel: PixelPoint) -> GeoPoint {
        let b = &self.bounds;
        let lng = b.min_lng + axis_fraction(pixel.x, self.viewport.width) * b.lng_span();
        let lat = b.max_lat - axis_fraction(pixel.y, self.viewport.height) * b.lat_span();
        GeoPoint::new(lat, lng)
    }

    /// Project a slice of points
    pub fn project_points(&self, points: &[GeoPoint]) -> Vec<PixelPoint> {
        points.iter().map(|&p| self.to_pixel(p)).collect()
    }
}

/// `offset / span`, or the midpoint when the span gives no usable scale
fn axis_fraction(offset: f64, span: f64) -> f64 {
    if span == 0.0 {
        return 0.5;
    }
    let fraction = offset / span;
    if fraction.is_finite() { fraction } else { 0.5 }
}
