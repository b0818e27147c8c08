//! Geographic features: geometry with styling metadata attached.

use serde::{Deserialize, Serialize};

use crate::point::{GeoPoint2d, PlanarPoint};

/// Ordered sequence of geographic vertices. Adjacent vertices are connected
/// edges; closed lines implicitly connect the last vertex back to the first.
pub type GeoLine = Vec<GeoPoint2d>;

/// Ordered sequence of projected vertices. Adjacent vertices are connected
/// edges; closed lines implicitly connect the last vertex back to the first.
pub type PlanarLine = Vec<PlanarPoint>;

/// A set of lines with the styling metadata attached to them.
///
/// The metadata is opaque to the engine: projection and repair transform the
/// geometry but carry `category` and `width` through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature<Line> {
    /// Categorical classifier of the feature (e.g. a biome index). Loaders
    /// that have no such field in the source data use the feature index.
    pub category: i32,
    /// Stroke width weight of the feature. Loaders use `1.0` when the source
    /// data has no width field.
    pub width: f64,
    /// Geometry of the feature.
    pub lines: Vec<Line>,
}

impl<Line> Feature<Line> {
    /// Creates a new feature.
    pub fn new(category: i32, width: f64, lines: Vec<Line>) -> Self {
        Self {
            category,
            width,
            lines,
        }
    }

    /// Returns a feature with the same metadata but new geometry.
    pub fn with_lines<T>(&self, lines: Vec<T>) -> Feature<T> {
        Feature {
            category: self.category,
            width: self.width,
            lines,
        }
    }
}
