//! Axis-aligned bounding rectangles on the map plane.

use nalgebra::{Point2, Scalar};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    /// Left boundary.
    pub x_min: N,
    /// Bottom boundary.
    pub y_min: N,
    /// Right boundary.
    pub x_max: N,
    /// Top boundary.
    pub y_max: N,
}

impl<N: Float + Scalar> Rect<N> {
    /// Creates a new rectangle.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Height of the rectangle.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// Smallest rectangle containing all the given points.
    ///
    /// Points with non-finite coordinates are skipped (a persisted projected
    /// boundary may carry not-a-number separator vertices). Returns `None` if
    /// there is not a single finite point.
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point2<N>>) -> Option<Self>
    where
        N: 'a,
    {
        let mut rect: Option<Self> = None;
        for p in points {
            if !p.x.is_finite() || !p.y.is_finite() {
                continue;
            }

            rect = Some(match rect {
                None => Self::new(p.x, p.y, p.x, p.y),
                Some(r) => Self::new(
                    if r.x_min < p.x { r.x_min } else { p.x },
                    if r.y_min < p.y { r.y_min } else { p.y },
                    if r.x_max > p.x { r.x_max } else { p.x },
                    if r.y_max > p.y { r.y_max } else { p.y },
                ),
            });
        }

        rect
    }
}
