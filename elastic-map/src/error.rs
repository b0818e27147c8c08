//! Error types used by the crate.

use thiserror::Error;

/// Elastic map error type.
#[derive(Debug, Error)]
pub enum ElasticError {
    /// A queried point is not owned by any section of the projection
    /// definition. The definition does not fully tile the queried domain, so
    /// the projection run is aborted.
    #[error("no section owns point {index} at ({lat}°, {lon}°)")]
    Coverage {
        /// Position of the point in the queried batch.
        index: usize,
        /// Latitude of the point in degrees.
        lat: f64,
        /// Longitude of the point in degrees.
        lon: f64,
    },
    /// Locates an error raised while projecting a feature batch.
    #[error("feature {feature}, line {line}: {source}")]
    Feature {
        /// Index of the feature in the input batch.
        feature: usize,
        /// Index of the line within the feature.
        line: usize,
        /// Error raised for the line.
        source: Box<ElasticError>,
    },
    /// The projection definition is malformed. Details are inside.
    #[error("invalid projection definition: {0}")]
    Configuration(String),
}
