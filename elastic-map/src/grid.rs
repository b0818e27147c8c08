//! Bilinear interpolation over a sampled latitude × longitude grid.

use crate::error::ElasticError;
use crate::point::PlanarPoint;

/// Piecewise-bilinear interpolator of planar coordinates over a regular
/// latitude × longitude grid.
///
/// The axes may be unevenly spaced but must be strictly monotonic. Both planar
/// coordinates are stored at every grid node and interpolated together, so one
/// cell lookup serves the x and the y value of a point.
#[derive(Debug, Clone)]
pub struct GridInterpolator {
    lats: Vec<f64>,
    lons: Vec<f64>,
    /// Node values in row-major order: `values[lat_index * lons.len() + lon_index]`.
    values: Vec<PlanarPoint>,
}

impl GridInterpolator {
    /// Creates an interpolator from the axis samples (degrees) and the planar
    /// node values aligned to them in row-major order (latitude rows).
    ///
    /// Descending axes are normalized to ascending order together with the
    /// node values.
    pub fn new(
        mut lats: Vec<f64>,
        mut lons: Vec<f64>,
        mut values: Vec<PlanarPoint>,
    ) -> Result<Self, ElasticError> {
        if lats.is_empty() || lons.is_empty() {
            return Err(ElasticError::Configuration(
                "grid axes must not be empty".into(),
            ));
        }

        if values.len() != lats.len() * lons.len() {
            return Err(ElasticError::Configuration(format!(
                "grid has {} values for {}×{} axes",
                values.len(),
                lats.len(),
                lons.len()
            )));
        }

        let width = lons.len();
        if is_strictly_descending(&lats) {
            lats.reverse();
            let mut reordered = Vec::with_capacity(values.len());
            for row in (0..lats.len()).rev() {
                reordered.extend_from_slice(&values[row * width..(row + 1) * width]);
            }
            values = reordered;
        }

        if is_strictly_descending(&lons) {
            lons.reverse();
            for row in values.chunks_mut(width) {
                row.reverse();
            }
        }

        if !is_strictly_ascending(&lats) || !is_strictly_ascending(&lons) {
            return Err(ElasticError::Configuration(
                "grid axes must be strictly monotonic".into(),
            ));
        }

        Ok(Self { lats, lons, values })
    }

    /// Interpolates the planar position of the given geographic point.
    ///
    /// The point must lie within the grid domain on both axes; the grid is
    /// expected to cover the whole boundary of its section, so a violation
    /// means the projection definition is malformed.
    pub fn evaluate(&self, lat: f64, lon: f64) -> Result<PlanarPoint, ElasticError> {
        let out_of_domain = || {
            ElasticError::Configuration(format!(
                "point ({lat}°, {lon}°) is outside the grid domain"
            ))
        };

        let (i0, i1, t) = locate(&self.lats, lat).ok_or_else(out_of_domain)?;
        let (j0, j1, u) = locate(&self.lons, lon).ok_or_else(out_of_domain)?;

        let width = self.lons.len();
        let v00 = self.values[i0 * width + j0].coords;
        let v01 = self.values[i0 * width + j1].coords;
        let v10 = self.values[i1 * width + j0].coords;
        let v11 = self.values[i1 * width + j1].coords;

        let low = v00.lerp(&v01, u);
        let high = v10.lerp(&v11, u);
        Ok(PlanarPoint::from(low.lerp(&high, t)))
    }

    /// Same interpolator with every node value rotated clockwise by the given
    /// angle (degrees) around the map origin.
    pub(crate) fn rotated(&self, degrees: f64) -> Self {
        let rotation = crate::rotate::planar_rotation(degrees);
        Self {
            lats: self.lats.clone(),
            lons: self.lons.clone(),
            values: self
                .values
                .iter()
                .map(|v| rotation.transform_point(v))
                .collect(),
        }
    }
}

/// Finds the axis cell containing `value` and the interpolation factor within
/// it. A single-sample axis degenerates to the lone index with factor 0, which
/// turns the bilinear blend into a 1-d linear one along the other axis.
fn locate(axis: &[f64], value: f64) -> Option<(usize, usize, f64)> {
    let last = axis.len() - 1;
    if value < axis[0] || value > axis[last] {
        return None;
    }

    if last == 0 {
        return Some((0, 0, 0.0));
    }

    let i1 = axis.partition_point(|v| *v <= value).clamp(1, last);
    let i0 = i1 - 1;
    let t = (value - axis[i0]) / (axis[i1] - axis[i0]);
    Some((i0, i1, t))
}

fn is_strictly_ascending(axis: &[f64]) -> bool {
    axis.windows(2).all(|pair| pair[0] < pair[1])
}

fn is_strictly_descending(axis: &[f64]) -> bool {
    axis.len() > 1 && axis.windows(2).all(|pair| pair[0] > pair[1])
}
