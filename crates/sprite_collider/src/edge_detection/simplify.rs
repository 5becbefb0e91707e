//! Collinear point removal for traced contours

use crate::foundation::math::Vec2;
use super::trace::{Contour, LatticePoint};

fn unit_direction(from: LatticePoint, to: LatticePoint) -> Option<Vec2> {
    (to.to_point() - from.to_point()).try_normalize(f32::EPSILON)
}

/// Drop interior points that do not change the walking direction
///
/// The first and last points always survive. An interior point is dropped
/// when the unit direction from the last kept point to it and the unit
/// direction from it to the next point have a dot product of at least
/// `min_cosine`. Contours shorter than three points are returned as-is.
pub fn simplify_contour(contour: &[LatticePoint], min_cosine: f32) -> Contour {
    if contour.len() < 3 {
        return contour.to_vec();
    }
    
    let mut kept = vec![contour[0]];
    for window in contour.windows(3) {
        let (point, next) = (window[1], window[2]);
        let last_kept = kept[kept.len() - 1];
        
        let collinear = match (unit_direction(last_kept, point), unit_direction(point, next)) {
            (Some(incoming), Some(outgoing)) => incoming.dot(&outgoing) >= min_cosine,
            _ => false,
        };
        if !collinear {
            kept.push(point);
        }
    }
    kept.push(contour[contour.len() - 1]);
    
    kept
}
