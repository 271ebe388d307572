use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::DrawCommand;
use crate::geometry::Viewport;

/// Serialise drawing commands into a standalone SVG document.
///
/// Commands are emitted in order, so later commands paint over earlier ones.
pub fn to_svg(viewport: &Viewport, commands: &[DrawCommand]) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_num(viewport.width),
        h = fmt_num(viewport.height),
    );
    svg.push('\n');
    svg += &format!(
        r#"  <rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        fmt_num(viewport.width),
        fmt_num(viewport.height)
    );
    svg.push('\n');

    for command in commands {
        svg += "  ";
        svg += &command_to_svg(command);
        svg.push('\n');
    }

    svg += "</svg>\n";
    svg
}

fn command_to_svg(command: &DrawCommand) -> String {
    match command {
        DrawCommand::Line {
            from,
            to,
            stroke,
            width,
        } => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            stroke,
            fmt_num(*width)
        ),
        DrawCommand::Polygon {
            points,
            fill,
            stroke,
            width,
        } => {
            let mut d = String::new();
            for (i, p) in points.iter().enumerate() {
                let op = if i == 0 { "M" } else { " L" };
                d += &format!("{} {} {}", op, fmt_num(p.x), fmt_num(p.y));
            }
            if !points.is_empty() {
                d += " Z";
            }
            format!(
                r#"<path d="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                d,
                fill,
                stroke,
                fmt_num(*width)
            )
        }
        DrawCommand::Circle {
            center,
            radius,
            fill,
        } => format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(*radius),
            fill
        ),
    }
}

/// Up to three decimals, without trailing zeros
fn fmt_num(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Write an SVG rendering to disk
pub fn write_svg(path: &Path, viewport: &Viewport, commands: &[DrawCommand]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create SVG file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writer.write_all(to_svg(viewport, commands).as_bytes())?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PixelPoint;
    use std::fs;
    use tempfile::tempdir;

    fn triangle() -> DrawCommand {
        DrawCommand::Polygon {
            points: vec![
                PixelPoint::new(0.0, 0.0),
                PixelPoint::new(10.5, 0.0),
                PixelPoint::new(5.25, 8.125),
            ],
            fill: "none",
            stroke: "black",
            width: 2.0,
        }
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(10.5), "10.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.333");
        assert_eq!(fmt_num(-0.0001), "0");
    }

    #[test]
    fn test_path_is_closed() {
        let svg = command_to_svg(&triangle());
        assert!(svg.contains(r#"d="M 0 0 L 10.5 0 L 5.25 8.125 Z""#));
    }

    #[test]
    fn test_document() {
        let viewport = Viewport::new(200.0, 100.0);
        let svg = to_svg(
            &viewport,
            &[DrawCommand::Circle {
                center: PixelPoint::new(20.0, 30.0),
                radius: 7.0,
                fill: "red",
            }],
        );

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 200 100""#));
        assert!(svg.contains(r#"<circle cx="20" cy="30" r="7" fill="red"/>"#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_write_svg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.svg");
        let viewport = Viewport::new(50.0, 50.0);

        write_svg(&path, &viewport, &[triangle()]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, to_svg(&viewport, &[triangle()]));
    }

    #[test]
    fn test_write_svg_bad_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("test.svg");
        assert!(write_svg(&path, &Viewport::new(1.0, 1.0), &[]).is_err());
    }
}
