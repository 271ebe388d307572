use serde::Serialize;

use super::{Probe, Scene};
use crate::geometry::{Bounds, Viewport};

/// Human-readable verdict for one probe
pub fn describe(probe: &Probe) -> String {
    let (mark, verdict) = if probe.inside {
        ('✓', "INSIDE")
    } else {
        ('✗', "OUTSIDE")
    };
    format!(
        "{} Point ({:.6}, {:.6}) is {} the polygon",
        mark, probe.point.lat, probe.point.lng, verdict
    )
}

/// Machine-readable summary of a run
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub vertices: usize,
    pub area: f64,
    pub bounds: &'a Bounds,
    pub viewport: &'a Viewport,
    pub probes: &'a [Probe],
}

impl<'a> Report<'a> {
    pub fn new(scene: &'a Scene, probes: &'a [Probe]) -> Self {
        Self {
            vertices: scene.polygon().len(),
            area: scene.polygon().area(),
            bounds: scene.bounds(),
            viewport: scene.viewport(),
            probes,
        }
    }
}
