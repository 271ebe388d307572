use crate::domain::PixelPoint;

use super::Scene;

pub const GRID_COLOR: &str = "#ddd";
pub const POLYGON_FILL: &str = "rgba(52, 152, 219, 0.2)";
pub const POLYGON_STROKE: &str = "#3498db";
pub const VERTEX_COLOR: &str = "#2c3e50";
pub const INSIDE_COLOR: &str = "#27ae60";
pub const OUTSIDE_COLOR: &str = "#e74c3c";
pub const CROSSHAIR_COLOR: &str = "#fff";

pub const VERTEX_RADIUS: f64 = 5.0;
pub const PROBE_RADIUS: f64 = 7.0;
pub const CROSSHAIR_HALF: f64 = 10.0;

/// A single drawing primitive in pixel space
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: PixelPoint,
        to: PixelPoint,
        stroke: &'static str,
        width: f64,
    },
    /// Closed polygon outline
    Polygon {
        points: Vec<PixelPoint>,
        fill: &'static str,
        stroke: &'static str,
        width: f64,
    },
    Circle {
        center: PixelPoint,
        radius: f64,
        fill: &'static str,
    },
}

/// Background grid with `divisions` equal columns and rows
pub fn grid(scene: &Scene, divisions: u32) -> Vec<DrawCommand> {
    let viewport = scene.viewport();
    let mut commands = Vec::with_capacity(2 * (divisions as usize + 1));
    if divisions == 0 {
        return commands;
    }

    for i in 0..=divisions {
        let x = viewport.width / divisions as f64 * i as f64;
        commands.push(DrawCommand::Line {
            from: PixelPoint::new(x, 0.0),
            to: PixelPoint::new(x, viewport.height),
            stroke: GRID_COLOR,
            width: 1.0,
        });
    }

    for i in 0..=divisions {
        let y = viewport.height / divisions as f64 * i as f64;
        commands.push(DrawCommand::Line {
            from: PixelPoint::new(0.0, y),
            to: PixelPoint::new(viewport.width, y),
            stroke: GRID_COLOR,
            width: 1.0,
        });
    }

    commands
}

/// Filled outline followed by one marker per vertex
pub fn polygon(scene: &Scene) -> Vec<DrawCommand> {
    let outline = scene.outline();
    let mut commands = Vec::with_capacity(outline.len() + 1);

    commands.push(DrawCommand::Polygon {
        points: outline.clone(),
        fill: POLYGON_FILL,
        stroke: POLYGON_STROKE,
        width: 2.0,
    });

    commands.extend(outline.into_iter().map(|center| DrawCommand::Circle {
        center,
        radius: VERTEX_RADIUS,
        fill: VERTEX_COLOR,
    }));

    commands
}

/// Coloured dot with a crosshair at a probed position
pub fn probe_marker(pixel: PixelPoint, inside: bool) -> Vec<DrawCommand> {
    let PixelPoint { x, y } = pixel;
    vec![
        DrawCommand::Circle {
            center: pixel,
            radius: PROBE_RADIUS,
            fill: if inside { INSIDE_COLOR } else { OUTSIDE_COLOR },
        },
        DrawCommand::Line {
            from: PixelPoint::new(x - CROSSHAIR_HALF, y),
            to: PixelPoint::new(x + CROSSHAIR_HALF, y),
            stroke: CROSSHAIR_COLOR,
            width: 2.0,
        },
        DrawCommand::Line {
            from: PixelPoint::new(x, y - CROSSHAIR_HALF),
            to: PixelPoint::new(x, y + CROSSHAIR_HALF),
            stroke: CROSSHAIR_COLOR,
            width: 2.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoPoint, Polygon};
    use crate::geometry::Viewport;

    fn scene() -> Scene {
        let polygon = Polygon::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 4.0),
            GeoPoint::new(4.0, 2.0),
        ])
        .unwrap();
        Scene::new(polygon, Viewport::new(200.0, 100.0))
    }

    #[test]
    fn test_grid_lines() {
        let commands = grid(&scene(), 10);
        assert_eq!(commands.len(), 22);

        let DrawCommand::Line { from, to, .. } = &commands[10] else {
            panic!("expected a line");
        };
        assert_eq!(*from, PixelPoint::new(200.0, 0.0));
        assert_eq!(*to, PixelPoint::new(200.0, 100.0));
    }

    #[test]
    fn test_grid_without_divisions() {
        assert!(grid(&scene(), 0).is_empty());
    }

    #[test]
    fn test_polygon_commands() {
        let commands = polygon(&scene());
        assert_eq!(commands.len(), 4);
        let DrawCommand::Polygon { points, .. } = &commands[0] else {
            panic!("expected the outline first");
        };
        assert_eq!(points.len(), 3);

        for command in &commands[1..] {
            let DrawCommand::Circle { radius, fill, .. } = command else {
                panic!("expected a vertex marker");
            };
            assert_eq!(*radius, VERTEX_RADIUS);
            assert_eq!(*fill, VERTEX_COLOR);
        }
    }

    #[test]
    fn test_probe_marker_colour() {
        let inside = probe_marker(PixelPoint::new(50.0, 50.0), true);
        let outside = probe_marker(PixelPoint::new(50.0, 50.0), false);

        assert_eq!(inside.len(), 3);
        assert_eq!(inside[1..], outside[1..]);

        let DrawCommand::Circle { fill, .. } = inside[0] else {
            panic!("expected a dot");
        };
        assert_eq!(fill, INSIDE_COLOR);

        let DrawCommand::Circle { fill, .. } = outside[0] else {
            panic!("expected a dot");
        };
        assert_eq!(fill, OUTSIDE_COLOR);
    }
}
