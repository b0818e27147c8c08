//! Ownership testing of geographic points against a closed section boundary.

use crate::error::ElasticError;
use crate::point::GeoPoint2d;

/// Tolerance (in degrees) within which a point counts as lying on a boundary
/// edge. Tuned for degree-scale coordinates: wide enough to absorb floating
/// point slop on shared section edges, narrow enough not to swallow real
/// geometry.
const EDGE_TOLERANCE: f64 = 1e-9;

/// Closed boundary curve of a section with a precomputed orientation.
///
/// The curve is implicitly closed: the last vertex connects back to the first.
/// Orientation is computed once at construction and decides which side of the
/// curve the section lies on: a counterclockwise curve delimits its enclosed
/// region, a clockwise curve delimits everything outside of it. This is how
/// Elastic definitions tile the sphere: one section is a counterclockwise
/// region and its neighbor owns the rest via the same curve traversed
/// clockwise.
#[derive(Debug, Clone)]
pub struct SectionBoundary {
    vertices: Vec<GeoPoint2d>,
    counterclockwise: bool,
}

impl SectionBoundary {
    /// Creates a boundary from the vertices of a closed curve.
    pub fn new(vertices: Vec<GeoPoint2d>) -> Result<Self, ElasticError> {
        if vertices.len() < 3 {
            return Err(ElasticError::Configuration(format!(
                "section boundary has {} vertices, at least 3 are required",
                vertices.len()
            )));
        }

        let counterclockwise = signed_area(&vertices) > 0.0;
        Ok(Self {
            vertices,
            counterclockwise,
        })
    }

    /// Whether the boundary vertices proceed counterclockwise.
    pub fn is_counterclockwise(&self) -> bool {
        self.counterclockwise
    }

    /// Vertices of the boundary curve.
    pub fn vertices(&self) -> &[GeoPoint2d] {
        &self.vertices
    }

    /// Whether the given point belongs to the region this boundary delimits.
    ///
    /// A counterclockwise boundary owns the region enclosed by the curve,
    /// edge points included; a clockwise boundary owns the complement of the
    /// enclosed region, edge points excluded. A point on a curve shared by
    /// two sections that traverse it in opposite directions is therefore
    /// claimed by exactly one of them, with no gap between the two regions.
    pub fn contains(&self, point: &GeoPoint2d) -> bool {
        let inside = self.winding_number(point) != 0;
        if self.counterclockwise {
            inside || self.touches_edge(point)
        } else {
            !inside && !self.touches_edge(point)
        }
    }

    /// Winding number of the closed curve around the point, in the
    /// (latitude, longitude) plane.
    fn winding_number(&self, point: &GeoPoint2d) -> i32 {
        let mut wn = 0i32;
        for (a, b) in self.edges() {
            if a.lon() <= point.lon() {
                if b.lon() > point.lon() && is_left(a, b, point) > 0.0 {
                    wn += 1;
                }
            } else if b.lon() <= point.lon() && is_left(a, b, point) < 0.0 {
                wn -= 1;
            }
        }

        wn
    }

    fn touches_edge(&self, point: &GeoPoint2d) -> bool {
        self.edges()
            .any(|(a, b)| segment_distance_sq(a, b, point) <= EDGE_TOLERANCE * EDGE_TOLERANCE)
    }

    /// Edges of the curve, including the closing one.
    fn edges(&self) -> impl Iterator<Item = (&GeoPoint2d, &GeoPoint2d)> {
        let count = self.vertices.len();
        (0..count).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % count]))
    }
}

/// Signed area of an implicitly closed curve by the shoelace formula, in the
/// (latitude, longitude) plane. Positive for counterclockwise vertex order.
pub fn signed_area(vertices: &[GeoPoint2d]) -> f64 {
    let mut area = 0.0;
    for (i, current) in vertices.iter().enumerate() {
        let previous = &vertices[if i == 0 { vertices.len() - 1 } else { i - 1 }];
        area += previous.lon() * current.lat() - previous.lat() * current.lon();
    }

    area
}

/// Positive if `p` is to the left of the directed edge `a -> b`, negative if
/// to the right, zero if collinear.
fn is_left(a: &GeoPoint2d, b: &GeoPoint2d, p: &GeoPoint2d) -> f64 {
    (b.lat() - a.lat()) * (p.lon() - a.lon()) - (p.lat() - a.lat()) * (b.lon() - a.lon())
}

/// Shortest squared distance between a point and the segment `a -> b` in the
/// (latitude, longitude) plane.
fn segment_distance_sq(a: &GeoPoint2d, b: &GeoPoint2d, p: &GeoPoint2d) -> f64 {
    let ds = (b.lat() - a.lat(), b.lon() - a.lon());
    let dp = (p.lat() - a.lat(), p.lon() - a.lon());
    let ds_len = ds.0 * ds.0 + ds.1 * ds.1;
    if ds_len == 0.0 {
        return dp.0 * dp.0 + dp.1 * dp.1;
    }

    let r = (dp.0 * ds.0 + dp.1 * ds.1) / ds_len;
    if r <= 0.0 {
        dp.0 * dp.0 + dp.1 * dp.1
    } else if r >= 1.0 {
        let de = (p.lat() - b.lat(), p.lon() - b.lon());
        de.0 * de.0 + de.1 * de.1
    } else {
        let s = dp.1 * ds.0 - dp.0 * ds.1;
        (s * s) / ds_len
    }
}
