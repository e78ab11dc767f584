//! Input Files
//!
//! JSON documents accepted by the `classify` and `replay` commands.

use crate::geometry::Point;
use crate::gesture::Frame;
use std::path::Path;

fn check_point(index: usize, point: &Point) -> crate::Result<()> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(crate::Error::InvalidInput(format!(
            "point {} has non-finite coordinates ({}, {})",
            index, point.x, point.y
        )))
    }
}

/// Parse a JSON array of `{x, y}` points
pub fn parse_points(json: &str) -> crate::Result<Vec<Point>> {
    let points: Vec<Point> = serde_json::from_str(json)?;
    if points.is_empty() {
        return Err(crate::Error::InvalidInput("path contains no points".to_string()));
    }
    for (i, point) in points.iter().enumerate() {
        check_point(i, point)?;
    }
    Ok(points)
}

/// Parse a JSON array of tracker frames
pub fn parse_frames(json: &str) -> crate::Result<Vec<Frame>> {
    let frames: Vec<Frame> = serde_json::from_str(json)?;
    for (i, frame) in frames.iter().enumerate() {
        if let Some(point) = &frame.point {
            check_point(i, point)?;
        }
    }
    Ok(frames)
}

pub fn read_points(path: &Path) -> crate::Result<Vec<Point>> {
    parse_points(&std::fs::read_to_string(path)?)
}

pub fn read_frames(path: &Path) -> crate::Result<Vec<Frame>> {
    parse_frames(&std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::TempDir;

    #[test]
    fn test_parse_points() {
        let points = parse_points(r#"[{"x": 1.0, "y": 2.0}, {"x": 3.5, "y": -4.0}]"#).unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.5, -4.0)]);
    }

    #[test]
    fn test_parse_points_rejects_empty() {
        assert!(matches!(parse_points("[]"), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_parse_points_rejects_malformed() {
        assert!(matches!(parse_points(r#"[{"x": 1.0}]"#), Err(Error::Serialization(_))));
        assert!(matches!(parse_points("not json"), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_parse_frames() {
        let frames = parse_frames(
            r#"[
                {"point": {"x": 0.1, "y": 0.2}, "active": true},
                {"point": null, "active": false},
                {"active": false}
            ]"#,
        )
        .unwrap();

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], Frame::tracked(0.1, 0.2, true));
        assert_eq!(frames[1], Frame::lost());
        assert_eq!(frames[2], Frame::lost());
    }

    #[test]
    fn test_read_points_from_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("stroke.json");
        std::fs::write(&path, r#"[{"x": 0.0, "y": 0.0}, {"x": 10.0, "y": 0.0}]"#).unwrap();

        assert_eq!(read_points(&path).unwrap().len(), 2);
        assert!(matches!(
            read_points(&dir.path().join("missing.json")),
            Err(Error::Io(_))
        ));
    }
}
