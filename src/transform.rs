//! Coordinate conversion between the anatomical source convention and the
//! renderer's display convention.

use crate::data::model::{DisplayPoint, RawPoint};

/// Millimeters to micrometers.
const MM_TO_UM: f64 = 1000.0;

/// Map a point from LPS millimeters to the display convention (PVL,
/// micrometers):
///
/// ```text
/// X = Posterior  =  y * 1000
/// Y = Ventral    = -z * 1000
/// Z = Left       = -x * 1000
/// ```
///
/// Pure and total over finite input; non-finite coordinates never reach this
/// function because the extractor only yields records with all three fields
/// present.
pub fn lps_to_pvl(raw: &RawPoint) -> DisplayPoint {
    DisplayPoint {
        x: raw.y * MM_TO_UM,
        y: -raw.z * MM_TO_UM,
        z: -raw.x * MM_TO_UM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(x: f64, y: f64, z: f64) -> RawPoint {
        RawPoint {
            x,
            y,
            z,
            region: None,
            id: None,
        }
    }

    #[test]
    fn maps_lps_millimeters_to_pvl_micrometers() {
        let p = lps_to_pvl(&raw(1.0, 2.0, 3.0));
        assert_eq!(p.to_array(), [2000.0, -3000.0, -1000.0]);
    }

    #[test]
    fn transform_is_invertible() {
        // Inverse of the axis permutation with the sign flips undone.
        fn pvl_to_lps(p: DisplayPoint) -> (f64, f64, f64) {
            (-p.z / MM_TO_UM, p.x / MM_TO_UM, -p.y / MM_TO_UM)
        }

        let inputs = [
            (0.0, 0.0, 0.0),
            (5.7, 5.3, 4.2),
            (-1.25, 0.004, 11.0),
            (1e-9, -1e9, 3.14159),
        ];
        for (x, y, z) in inputs {
            let (rx, ry, rz) = pvl_to_lps(lps_to_pvl(&raw(x, y, z)));
            assert!((rx - x).abs() <= 1e-9 * x.abs().max(1.0));
            assert!((ry - y).abs() <= 1e-9 * y.abs().max(1.0));
            assert!((rz - z).abs() <= 1e-9 * z.abs().max(1.0));
        }
    }
}
