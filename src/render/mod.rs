pub mod canvas;
pub mod report;
pub mod scene;
pub mod svg;

pub use canvas::DrawCommand;
pub use report::{Report, describe};
pub use scene::{Probe, Scene};
pub use svg::{to_svg, write_svg};

/// Everything to draw for a scene: grid, polygon, then each probe on top
pub fn draw(scene: &Scene, grid_divisions: u32, probes: &[Probe]) -> Vec<DrawCommand> {
    let mut commands = canvas::grid(scene, grid_divisions);
    commands.extend(canvas::polygon(scene));
    for probe in probes {
        commands.extend(canvas::probe_marker(probe.pixel, probe.inside));
    }
    commands
}
