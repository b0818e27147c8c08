//! Rigid rotation of projected geometry.
//!
//! Rotation preserves edge lengths, so it composes freely with interruption
//! repair: rotating before or after [`repair`](crate::InterruptionCutter::repair)
//! gives the same result.

use nalgebra::Rotation2;

use crate::feature::{Feature, PlanarLine};
use crate::point::PlanarPoint;

/// Rotation turning the map plane clockwise by the given angle in degrees.
pub(crate) fn planar_rotation(degrees: f64) -> Rotation2<f64> {
    Rotation2::new(-degrees.to_radians())
}

/// Rotates a point clockwise by the given angle (degrees) around the map
/// origin.
pub fn rotate_point(point: &PlanarPoint, degrees: f64) -> PlanarPoint {
    planar_rotation(degrees).transform_point(point)
}

/// Rotates every vertex of a line clockwise by the given angle (degrees)
/// around the map origin.
pub fn rotate_line(line: &PlanarLine, degrees: f64) -> PlanarLine {
    let rotation = planar_rotation(degrees);
    line.iter().map(|p| rotation.transform_point(p)).collect()
}

/// Rotates all geometry of the feature batch, preserving metadata and order.
pub fn rotate_features(features: &[Feature<PlanarLine>], degrees: f64) -> Vec<Feature<PlanarLine>> {
    features
        .iter()
        .map(|feature| {
            feature.with_lines(
                feature
                    .lines
                    .iter()
                    .map(|line| rotate_line(line, degrees))
                    .collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rotation_is_clockwise() {
        let rotated = rotate_point(&PlanarPoint::new(1.0, 0.0), 90.0);
        assert_abs_diff_eq!(rotated.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rotated.y, -1.0, epsilon = 1e-12);

        let rotated = rotate_point(&PlanarPoint::new(0.0, 2.0), 90.0);
        assert_abs_diff_eq!(rotated.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rotated.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_preserves_distances() {
        let a = PlanarPoint::new(3.0, -4.0);
        let b = PlanarPoint::new(-7.0, 12.5);
        let original = nalgebra::distance(&a, &b);

        for degrees in [0.0, 17.3, 90.0, 180.0, -45.0, 361.0] {
            let rotated = nalgebra::distance(
                &rotate_point(&a, degrees),
                &rotate_point(&b, degrees),
            );
            assert_abs_diff_eq!(rotated, original, epsilon = 1e-9);
        }
    }

    #[test]
    fn features_keep_metadata() {
        let features = vec![Feature::new(
            7,
            2.5,
            vec![vec![PlanarPoint::new(1.0, 1.0)]],
        )];
        let rotated = rotate_features(&features, 30.0);
        assert_eq!(rotated.len(), 1);
        assert_eq!(rotated[0].category, 7);
        assert_eq!(rotated[0].width, 2.5);
        assert_eq!(rotated[0].lines.len(), 1);
    }
}
