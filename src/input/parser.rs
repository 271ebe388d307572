use super::ParseError;
use crate::domain::{GeoPoint, MIN_VERTICES, PixelPoint, Polygon};

/// Parse polygon text, one `lat,lng` pair per line.
///
/// The whole input is rejected on the first failure:
/// 1. blank text -> `MissingInput`
/// 2. fewer than three lines -> `InsufficientVertices`
/// 3. any line that is not two finite numbers -> `MalformedCoordinate`
pub fn parse_polygon(text: &str) -> Result<Polygon, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::MissingInput);
    }

    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < MIN_VERTICES {
        return Err(ParseError::InsufficientVertices { found: lines.len() });
    }

    let found = lines.len();
    let vertices = lines
        .into_iter()
        .map(|line| parse_pair(line).map(|(lat, lng)| GeoPoint::new(lat, lng)))
        .collect::<Result<Vec<_>, _>>()?;

    Polygon::new(vertices).ok_or(ParseError::InsufficientVertices { found })
}

/// Parse a single `lat,lng` query point
pub fn parse_point(text: &str) -> Result<GeoPoint, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::MissingInput);
    }
    let (lat, lng) = parse_pair(text)?;
    Ok(GeoPoint::new(lat, lng))
}

/// Parse an `x,y` pixel position
pub fn parse_pixel(text: &str) -> Result<PixelPoint, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::MissingInput);
    }
    let (x, y) = parse_pair(text)?;
    Ok(PixelPoint::new(x, y))
}

/// Parse a batch of query points.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_points(text: &str) -> Result<Vec<GeoPoint>, ParseError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parse_point)
        .collect()
}

fn parse_pair(text: &str) -> Result<(f64, f64), ParseError> {
    let line = text.trim();
    let malformed = || ParseError::MalformedCoordinate {
        line: line.to_string(),
    };

    let mut tokens = line.split(',');
    let (Some(first), Some(second), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(malformed());
    };

    let a = parse_number(first).ok_or_else(malformed)?;
    let b = parse_number(second).ok_or_else(malformed)?;
    Ok((a, b))
}

fn parse_number(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
