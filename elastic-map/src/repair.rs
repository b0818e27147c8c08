//! Post-projection repair of lines that cross map interruptions.
//!
//! A line whose vertices straddle an interruption of the projection comes out
//! of projection with spurious long edges jumping across the map: two
//! geographically adjacent vertices were assigned to sections on opposite
//! sides of a cut. This module finds such edges, splits the lines there and,
//! for polygon rings, stitches the resulting open fragments back into maximal
//! closed loops.

use log::{debug, trace};

use crate::feature::{Feature, PlanarLine};
use crate::point::PlanarPoint;

/// Default edge length above which an edge is considered to cross an
/// interruption, in the map's linear units (kilometers for the standard
/// Elastic definitions).
pub const DEFAULT_SNIPPING_LENGTH: f64 = 1000.0;

/// Cuts projected lines at map interruptions and re-stitches polygon rings.
#[derive(Debug, Clone)]
pub struct InterruptionCutter {
    snipping_length: f64,
}

impl Default for InterruptionCutter {
    fn default() -> Self {
        Self::new(DEFAULT_SNIPPING_LENGTH)
    }
}

impl InterruptionCutter {
    /// Creates a cutter treating edges longer than `snipping_length` as
    /// projection artifacts.
    pub fn new(snipping_length: f64) -> Self {
        Self { snipping_length }
    }

    /// Repairs every line of the feature batch.
    ///
    /// `closed` says whether the batch consists of polygon rings rather than
    /// open paths (the flag is per batch, matching the granularity of the
    /// geographic data sources). Rings get their fragments stitched back into
    /// closed loops; open paths are only cut. Feature order and metadata are
    /// preserved; lines without overlong edges pass through untouched, while
    /// repaired lines are generally renumbered within their feature.
    pub fn repair(&self, features: Vec<Feature<PlanarLine>>, closed: bool) -> Vec<Feature<PlanarLine>> {
        features
            .into_iter()
            .map(|feature| self.repair_feature(feature, closed))
            .collect()
    }

    fn repair_feature(&self, feature: Feature<PlanarLine>, closed: bool) -> Feature<PlanarLine> {
        let Feature {
            category,
            width,
            lines,
        } = feature;

        let mut finished: Vec<PlanarLine> = Vec::new();
        let mut pending: Vec<PlanarLine> = Vec::new();
        for line in lines {
            let cuts = self.find_cuts(&line, closed);
            if cuts.is_empty() {
                finished.push(line);
                continue;
            }

            debug!("cutting a {}-point line at {} interruptions", line.len(), cuts.len());
            let fragments = cut_at(line, cuts, closed);
            if closed {
                pending.extend(fragments);
            } else {
                finished.extend(fragments);
            }
        }

        if !pending.is_empty() {
            // deterministic seeding: chains start from the end of the
            // length-sorted list
            pending.sort_by_key(Vec::len);
            stitch_loops(pending, &mut finished);
        }

        Feature {
            category,
            width,
            lines: finished,
        }
    }

    /// Indices `j` such that the edge between vertices `j - 1` and `j` is
    /// longer than the snipping length. For closed lines `j = 0` denotes the
    /// wrap-around edge between the last vertex and the first.
    fn find_cuts(&self, line: &[PlanarPoint], closed: bool) -> Vec<usize> {
        let start = if closed { 0 } else { 1 };
        (start..line.len())
            .filter(|&j| {
                let prev = if j == 0 { line.len() - 1 } else { j - 1 };
                nalgebra::distance(&line[prev], &line[j]) > self.snipping_length
            })
            .collect()
    }
}

/// Splits the line at the given cut indices into open fragments, dropping
/// degenerate single-vertex fragments.
///
/// Closed lines are first rotated to start right at the first cut, which turns
/// the wrap-around edge into the implicit cut at the end of the vertex array.
fn cut_at(mut line: PlanarLine, mut cuts: Vec<usize>, closed: bool) -> Vec<PlanarLine> {
    if closed {
        let offset = cuts[0];
        line.rotate_left(offset);
        for cut in &mut cuts {
            *cut -= offset;
        }
    } else {
        cuts.insert(0, 0);
    }
    cuts.push(line.len());

    let mut fragments = Vec::with_capacity(cuts.len() - 1);
    for bounds in cuts.windows(2) {
        let fragment = &line[bounds[0]..bounds[1]];
        if fragment.len() > 1 {
            fragments.push(fragment.to_vec());
        } else {
            trace!("dropping a degenerate {}-vertex fragment", fragment.len());
        }
    }

    fragments
}

/// Greedily chains fragments into closed loops by nearest startpoint.
///
/// While a chain is in progress, the candidate startpoints are those of all
/// pending fragments plus the chain's own: when the chain's own start is the
/// nearest, the loop is complete. Exact ties go to the pending fragment with
/// the lowest index, so the result is deterministic.
fn stitch_loops(mut pending: Vec<PlanarLine>, finished: &mut Vec<PlanarLine>) {
    let mut chain: Option<PlanarLine> = None;
    loop {
        let Some(mut current) = chain.take() else {
            match pending.pop() {
                Some(fragment) => chain = Some(fragment),
                None => break,
            }
            continue;
        };

        // fragments are never empty: single-vertex ones were dropped
        let end = current[current.len() - 1];
        let mut nearest: Option<(usize, f64)> = None;
        for (index, fragment) in pending.iter().enumerate() {
            let distance = nalgebra::distance(&end, &fragment[0]);
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((index, distance));
            }
        }

        let closing_distance = nalgebra::distance(&end, &current[0]);
        match nearest {
            Some((index, best)) if best <= closing_distance => {
                let fragment = pending.remove(index);
                current.extend(fragment);
                chain = Some(current);
            }
            _ => {
                // the nearest startpoint is the chain's own: close the loop
                finished.push(current);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn feature(lines: Vec<PlanarLine>) -> Feature<PlanarLine> {
        Feature::new(4, 1.5, lines)
    }

    #[test]
    fn short_lines_pass_through_unchanged() {
        init_logging();
        let line = vec![
            PlanarPoint::new(0.0, 0.0),
            PlanarPoint::new(10.0, 0.0),
            PlanarPoint::new(20.0, 5.0),
        ];
        let cutter = InterruptionCutter::default();

        for closed in [false, true] {
            let repaired = cutter.repair(vec![feature(vec![line.clone()])], closed);
            assert_eq!(repaired.len(), 1);
            assert_eq!(repaired[0].lines, vec![line.clone()]);
            assert_eq!(repaired[0].category, 4);
            assert_eq!(repaired[0].width, 1.5);
        }
    }

    #[test]
    fn open_line_is_cut_at_the_long_edge() {
        init_logging();
        let line = vec![
            PlanarPoint::new(0.0, 0.0),
            PlanarPoint::new(1.0, 0.0),
            PlanarPoint::new(2.0, 0.0),
            PlanarPoint::new(2000.0, 0.0),
            PlanarPoint::new(2001.0, 0.0),
        ];
        let cutter = InterruptionCutter::default();

        let repaired = cutter.repair(vec![feature(vec![line.clone()])], false);
        assert_eq!(repaired[0].lines.len(), 2);
        assert_eq!(repaired[0].lines[0], line[0..3].to_vec());
        assert_eq!(repaired[0].lines[1], line[3..5].to_vec());
    }

    /// Nine points on a circle interleaved with three distant spike vertices.
    /// Cutting drops the degenerate spike fragments and leaves three arcs that
    /// must be stitched back into one loop.
    #[test]
    fn spiked_ring_is_stitched_into_one_loop() {
        init_logging();
        let circle: Vec<PlanarPoint> = (0..9)
            .map(|k| {
                let angle = f64::to_radians(40.0 * k as f64);
                PlanarPoint::new(10.0 * angle.cos(), 10.0 * angle.sin())
            })
            .collect();
        let spike = |k: usize| PlanarPoint::new(10_000.0 + k as f64, 10_000.0);

        let mut ring = Vec::new();
        ring.extend_from_slice(&circle[0..3]);
        ring.push(spike(0));
        ring.extend_from_slice(&circle[3..6]);
        ring.push(spike(1));
        ring.extend_from_slice(&circle[6..9]);
        ring.push(spike(2));

        let cutter = InterruptionCutter::new(100.0);
        let repaired = cutter.repair(vec![feature(vec![ring])], true);

        assert_eq!(repaired[0].lines.len(), 1, "arcs must merge into one loop");
        let loop_line = &repaired[0].lines[0];
        assert_eq!(loop_line.len(), circle.len(), "no vertex duplicated or dropped");

        // the loop is a rotation of the original circle
        let start = circle
            .iter()
            .position(|p| p == &loop_line[0])
            .expect("loop starts at one of the circle points");
        for (offset, point) in loop_line.iter().enumerate() {
            assert_eq!(point, &circle[(start + offset) % circle.len()]);
        }
    }

    #[test]
    fn distant_ring_parts_become_separate_loops() {
        init_logging();
        // a square ring whose second half was displaced far away by the
        // projection artifact
        let near = [
            PlanarPoint::new(0.0, 0.0),
            PlanarPoint::new(10.0, 0.0),
            PlanarPoint::new(10.0, 10.0),
        ];
        let far = [
            PlanarPoint::new(5000.0, 10.0),
            PlanarPoint::new(5000.0, 0.0),
            PlanarPoint::new(4990.0, 0.0),
        ];
        let ring: PlanarLine = near.iter().chain(far.iter()).copied().collect();

        let cutter = InterruptionCutter::default();
        let repaired = cutter.repair(vec![feature(vec![ring])], true);

        let mut lines = repaired[0].lines.clone();
        lines.sort_by_key(Vec::len);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 3);
        assert_eq!(lines[1].len(), 3);
    }

    #[test]
    fn degenerate_fragments_are_dropped_from_open_lines() {
        init_logging();
        // both edges around the middle vertex are overlong, so it forms a
        // single-vertex fragment and disappears
        let line = vec![
            PlanarPoint::new(0.0, 0.0),
            PlanarPoint::new(1.0, 0.0),
            PlanarPoint::new(5000.0, 0.0),
            PlanarPoint::new(9000.0, 0.0),
            PlanarPoint::new(9001.0, 0.0),
        ];
        let cutter = InterruptionCutter::default();

        let repaired = cutter.repair(vec![feature(vec![line.clone()])], false);
        assert_eq!(repaired[0].lines.len(), 2);
        assert_eq!(repaired[0].lines[0], line[0..2].to_vec());
        assert_eq!(repaired[0].lines[1], line[3..5].to_vec());
    }
}
