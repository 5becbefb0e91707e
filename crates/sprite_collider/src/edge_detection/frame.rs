//! Segment construction and local-frame centering

use crate::foundation::math::Vec2;
use crate::physics::collision::LineSegment;
use super::trace::LatticePoint;

/// Connect consecutive contour points into segments
///
/// Contours with fewer than three points produce nothing. Open contours
/// are closed with a final segment from the last point back to the first.
pub fn build_segments(contour: &[LatticePoint]) -> Vec<LineSegment> {
    if contour.len() < 3 {
        return Vec::new();
    }
    
    let mut segments: Vec<LineSegment> = contour
        .windows(2)
        .map(|pair| LineSegment::new(pair[0].to_point(), pair[1].to_point()))
        .collect();
    
    let (first, last) = (contour[0], contour[contour.len() - 1]);
    if first != last {
        segments.push(LineSegment::new(last.to_point(), first.to_point()));
    }
    
    segments
}

/// Geometric center of a sprite, (width / 2, height / 2)
pub fn sprite_center(width: u32, height: u32) -> Vec2 {
    Vec2::new(width as f32 / 2.0, height as f32 / 2.0)
}

/// Shift segments so the sprite center becomes the origin
pub fn center_segments(segments: &mut [LineSegment], width: u32, height: u32) {
    let center = sprite_center(width, height);
    for segment in segments {
        segment.p1 -= center;
        segment.p2 -= center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(i32, i32)]) -> Vec<LatticePoint> {
        coords.iter().map(|&(x, y)| LatticePoint::new(x, y)).collect()
    }

    #[test]
    fn test_short_contours_have_no_segments() {
        assert!(build_segments(&[]).is_empty());
        assert!(build_segments(&pts(&[(0, 0)])).is_empty());
        assert!(build_segments(&pts(&[(0, 0), (4, 0)])).is_empty());
    }

    #[test]
    fn test_open_contour_is_closed() {
        let segments = build_segments(&pts(&[(0, 0), (4, 0), (4, 3)]));
        
        assert_eq!(segments, vec![
            LineSegment::from_coords(0.0, 0.0, 4.0, 0.0),
            LineSegment::from_coords(4.0, 0.0, 4.0, 3.0),
            LineSegment::from_coords(4.0, 3.0, 0.0, 0.0),
        ]);
    }

    #[test]
    fn test_already_closed_contour_gets_no_degenerate_segment() {
        let segments = build_segments(&pts(&[(0, 0), (3, 0), (3, 2), (0, 2), (0, 0)]));
        
        assert_eq!(segments.len(), 4);
        assert!(segments.iter().all(|segment| segment.length() > 0.0));
        assert_eq!(segments[3], LineSegment::from_coords(0.0, 2.0, 0.0, 0.0));
    }

    #[test]
    fn test_centering_subtracts_half_extent() {
        let mut segments = vec![LineSegment::from_coords(0.0, 0.0, 3.0, 2.0)];
        center_segments(&mut segments, 4, 3);
        
        assert_relative_eq!(segments[0], LineSegment::from_coords(-2.0, -1.5, 1.0, 0.5));
    }
}
