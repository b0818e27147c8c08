//! Projection definition and batch projection of geographic geometry.

use log::debug;

use crate::error::ElasticError;
use crate::feature::{Feature, GeoLine, PlanarLine};
use crate::point::{GeoPoint2d, PlanarPoint};
use crate::rect::Rect;
use crate::rotate;
use crate::section::Section;

/// A loaded Elastic projection definition: an ordered list of sections that
/// together tile the sphere, with the projected outline of the whole map.
///
/// The definition is immutable once constructed and can be shared freely
/// between threads running projection queries.
#[derive(Debug, Clone)]
pub struct ElasticProjection {
    sections: Vec<Section>,
    projected_boundary: PlanarLine,
    bounding_box: Rect,
}

impl ElasticProjection {
    /// Creates a projection definition from its parts: the sections in
    /// ownership priority order, the projected outer boundary of the map, and
    /// the bounding box of the projected map.
    pub fn new(sections: Vec<Section>, projected_boundary: PlanarLine, bounding_box: Rect) -> Self {
        Self {
            sections,
            projected_boundary,
            bounding_box,
        }
    }

    /// Sections of the projection.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Projected outline of the full map.
    pub fn projected_boundary(&self) -> &[PlanarPoint] {
        &self.projected_boundary
    }

    /// Bounding box of the projected map.
    pub fn bounding_box(&self) -> Rect {
        self.bounding_box
    }

    /// Width-to-height ratio of the projected map.
    pub fn aspect_ratio(&self) -> f64 {
        self.bounding_box.width() / self.bounding_box.height()
    }

    /// Projects a batch of points on the sphere onto the map plane.
    ///
    /// Each point is projected by the first section that owns it. Every point
    /// must be owned by some section: a point no section claims means the
    /// definition does not cover the queried domain, and the whole batch is
    /// aborted with [`ElasticError::Coverage`].
    pub fn project_points(&self, points: &[GeoPoint2d]) -> Result<Vec<PlanarPoint>, ElasticError> {
        let mut output: Vec<Option<PlanarPoint>> = vec![None; points.len()];
        for section in &self.sections {
            section.project_batch(points, &mut output)?;
        }

        output
            .into_iter()
            .zip(points)
            .enumerate()
            .map(|(index, (slot, point))| {
                slot.ok_or(ElasticError::Coverage {
                    index,
                    lat: point.lat(),
                    lon: point.lon(),
                })
            })
            .collect()
    }

    /// Projects a batch of features, preserving feature order, line order and
    /// metadata.
    pub fn project_features(
        &self,
        features: &[Feature<GeoLine>],
    ) -> Result<Vec<Feature<PlanarLine>>, ElasticError> {
        debug!("projecting {} features", features.len());

        features
            .iter()
            .enumerate()
            .map(|(feature_index, feature)| {
                let lines = feature
                    .lines
                    .iter()
                    .enumerate()
                    .map(|(line_index, line)| {
                        self.project_points(line).map_err(|source| ElasticError::Feature {
                            feature: feature_index,
                            line: line_index,
                            source: Box::new(source),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(feature.with_lines(lines))
            })
            .collect()
    }

    /// Returns a copy of the definition rotated clockwise by the given angle
    /// (degrees) around the map origin.
    ///
    /// The projected boundary and every section's grid values are rotated and
    /// the bounding box is recomputed from the rotated boundary.
    pub fn rotated(&self, degrees: f64) -> Self {
        let projected_boundary = rotate::rotate_line(&self.projected_boundary, degrees);
        let bounding_box =
            Rect::from_points(projected_boundary.iter()).unwrap_or(self.bounding_box);
        let sections = self
            .sections
            .iter()
            .map(|section| section.rotated(degrees))
            .collect();

        Self {
            sections,
            projected_boundary,
            bounding_box,
        }
    }
}
