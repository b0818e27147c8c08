//! Engine for the Elastic family of piecewise map projections.
//!
//! An Elastic projection splits the sphere into disjoint [`Section`]s, each of
//! which is interpolated onto the map plane from its own sampled grid of
//! latitudes and longitudes. This crate implements the projection machinery:
//!
//! * [`ElasticProjection`] assigns every queried point to the section that
//!   owns it and smoothly interpolates its planar coordinates;
//! * [`InterruptionCutter`] cuts projected lines at the interruptions of the
//!   map and stitches polygon rings back into closed loops;
//! * [`rotate`] rigidly rotates projected geometry to produce rotated
//!   variants of a projection.
//!
//! Reading projection definitions and geographic data from files, as well as
//! rendering, is left to the callers: the engine operates on plain point,
//! line and [`Feature`] batches and returns them in the same order.
//!
//! ```
//! use elastic_map::{ElasticProjection, GeoPoint2d, PlanarPoint, Rect, Section};
//!
//! # fn main() -> Result<(), elastic_map::error::ElasticError> {
//! // a single section covering the whole sphere with an equirectangular grid
//! let section = Section::new(
//!     vec![-90.0, 90.0],
//!     vec![-180.0, 180.0],
//!     vec![
//!         PlanarPoint::new(-180.0, -90.0),
//!         PlanarPoint::new(180.0, -90.0),
//!         PlanarPoint::new(-180.0, 90.0),
//!         PlanarPoint::new(180.0, 90.0),
//!     ],
//!     vec![
//!         GeoPoint2d::latlon(-90.0, -180.0),
//!         GeoPoint2d::latlon(-90.0, 180.0),
//!         GeoPoint2d::latlon(90.0, 180.0),
//!         GeoPoint2d::latlon(90.0, -180.0),
//!     ],
//! )?;
//!
//! let projection = ElasticProjection::new(
//!     vec![section],
//!     vec![],
//!     Rect::new(-180.0, -90.0, 180.0, 90.0),
//! );
//! let projected = projection.project_points(&[GeoPoint2d::latlon(45.0, 90.0)])?;
//! assert_eq!(projected[0], PlanarPoint::new(90.0, 45.0));
//! # Ok(())
//! # }
//! ```

pub mod error;

mod boundary;
pub use boundary::*;

mod feature;
pub use feature::*;

mod grid;
pub use grid::*;

mod point;
pub use point::*;

mod projection;
pub use projection::*;

mod rect;
pub use rect::*;

mod repair;
pub use repair::*;

pub mod rotate;

mod section;
pub use section::*;
