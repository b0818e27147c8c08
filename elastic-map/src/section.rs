//! One lobe of an Elastic projection.

use crate::boundary::SectionBoundary;
use crate::error::ElasticError;
use crate::grid::GridInterpolator;
use crate::point::{GeoPoint2d, PlanarPoint};

/// A region of the sphere with its own smooth mapping onto the map plane.
///
/// The boundary decides which points the section owns; the grid provides their
/// planar coordinates. The grid must cover the whole extent of the boundary;
/// that is a property of the projection definition and is not re-checked on
/// every query.
#[derive(Debug, Clone)]
pub struct Section {
    grid: GridInterpolator,
    boundary: SectionBoundary,
}

impl Section {
    /// Creates a section from its grid axes (degrees), the projected node
    /// positions aligned to them (row-major by latitude) and its boundary
    /// curve.
    pub fn new(
        lats: Vec<f64>,
        lons: Vec<f64>,
        values: Vec<PlanarPoint>,
        boundary: Vec<GeoPoint2d>,
    ) -> Result<Self, ElasticError> {
        Ok(Self {
            grid: GridInterpolator::new(lats, lons, values)?,
            boundary: SectionBoundary::new(boundary)?,
        })
    }

    /// Whether the given point is within this section's boundary.
    pub fn owns(&self, point: &GeoPoint2d) -> bool {
        self.boundary.contains(point)
    }

    /// Boundary of the section.
    pub fn boundary(&self) -> &SectionBoundary {
        &self.boundary
    }

    /// Smoothly interpolates the planar position of a point on the sphere.
    ///
    /// The caller must have established ownership with [`Section::owns`]; it
    /// is not re-checked here.
    pub fn project(&self, point: &GeoPoint2d) -> Result<PlanarPoint, ElasticError> {
        self.grid.evaluate(point.lat(), point.lon())
    }

    /// Projects every owned point of the batch into the matching `output`
    /// slot. Slots already filled by an earlier section are left untouched.
    pub fn project_batch(
        &self,
        points: &[GeoPoint2d],
        output: &mut [Option<PlanarPoint>],
    ) -> Result<(), ElasticError> {
        for (point, slot) in points.iter().zip(output.iter_mut()) {
            if slot.is_none() && self.owns(point) {
                *slot = Some(self.project(point)?);
            }
        }

        Ok(())
    }

    /// Same section with its grid values rotated clockwise by the given angle
    /// (degrees) around the map origin. The boundary is geographic and does
    /// not change.
    pub(crate) fn rotated(&self, degrees: f64) -> Self {
        Self {
            grid: self.grid.rotated(degrees),
            boundary: self.boundary.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlon;
    use approx::assert_abs_diff_eq;

    fn section() -> Section {
        // equirectangular mapping of the [0, 30] × [0, 40] rectangle
        Section::new(
            vec![0.0, 30.0],
            vec![0.0, 40.0],
            vec![
                PlanarPoint::new(0.0, 0.0),
                PlanarPoint::new(40.0, 0.0),
                PlanarPoint::new(0.0, 30.0),
                PlanarPoint::new(40.0, 30.0),
            ],
            vec![
                latlon!(0.0, 0.0),
                latlon!(0.0, 40.0),
                latlon!(30.0, 40.0),
                latlon!(30.0, 0.0),
            ],
        )
        .expect("valid section")
    }

    #[test]
    fn owns_delegates_to_boundary() {
        let section = section();
        assert!(section.owns(&latlon!(15.0, 20.0)));
        assert!(!section.owns(&latlon!(-15.0, 20.0)));
    }

    #[test]
    fn project_interpolates() {
        let section = section();
        let projected = section.project(&latlon!(7.5, 10.0)).expect("point is owned");
        assert_abs_diff_eq!(projected.x, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(projected.y, 7.5, epsilon = 1e-12);
    }

    #[test]
    fn project_batch_respects_earlier_results() {
        let section = section();
        let points = vec![latlon!(10.0, 10.0), latlon!(-10.0, 10.0), latlon!(5.0, 5.0)];
        let sentinel = PlanarPoint::new(-1.0, -1.0);
        let mut output = vec![Some(sentinel), None, None];

        section
            .project_batch(&points, &mut output)
            .expect("all owned points are inside the grid");

        assert_eq!(output[0], Some(sentinel), "filled slot must not be overwritten");
        assert_eq!(output[1], None, "unowned point stays empty");
        assert_eq!(output[2], Some(PlanarPoint::new(5.0, 5.0)));
    }
}
