use log::{debug, warn};
use serde::Serialize;

use crate::domain::{GeoPoint, PixelPoint, Polygon};
use crate::geometry::{Bounds, CoordinateMapper, Viewport, compute_bounds};

/// Immutable snapshot of what is on screen.
///
/// The bounds are always derived from the polygon held in the same snapshot, so
/// projections and containment tests can never mix a new polygon with stale
/// bounds. Changing anything means building a new `Scene`.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    polygon: Polygon,
    bounds: Bounds,
    viewport: Viewport,
}

/// Outcome of testing one point against the scene's polygon
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Probe {
    pub point: GeoPoint,
    pub pixel: PixelPoint,
    pub inside: bool,
}

impl Scene {
    pub fn new(polygon: Polygon, viewport: Viewport) -> Self {
        let bounds = compute_bounds(&polygon);
        debug!(
            "Scene: {} vertices, lat [{:.6}, {:.6}], lng [{:.6}, {:.6}], viewport {}x{}",
            polygon.len(),
            bounds.min_lat,
            bounds.max_lat,
            bounds.min_lng,
            bounds.max_lng,
            viewport.width,
            viewport.height
        );
        if polygon.is_degenerate() {
            warn!("Polygon has zero net area; check for collinear or repeated vertices");
        }

        Self {
            polygon,
            bounds,
            viewport,
        }
    }

    /// Same polygon and bounds on a differently sized surface
    pub fn resized(&self, viewport: Viewport) -> Self {
        Self {
            polygon: self.polygon.clone(),
            bounds: self.bounds,
            viewport,
        }
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.bounds, self.viewport)
    }

    /// Vertex positions in pixels, in polygon order
    pub fn outline(&self) -> Vec<PixelPoint> {
        self.mapper().project_points(self.polygon.vertices())
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        self.polygon.contains(point)
    }

    /// Test a geographic point and locate it on the surface
    pub fn probe(&self, point: GeoPoint) -> Probe {
        Probe {
            point,
            pixel: self.mapper().to_pixel(point),
            inside: self.contains(point),
        }
    }

    /// Test the geographic position under a pixel, e.g. a click
    pub fn probe_pixel(&self, pixel: PixelPoint) -> Probe {
        let point = self.mapper().to_geo(pixel);
        Probe {
            point,
            pixel,
            inside: self.contains(point),
        }
    }
}
