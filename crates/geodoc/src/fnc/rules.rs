//! Per-kind validity rules.
//!
//! The aggregator in [`crate::vld`] only decides where rules apply and how their results are
//! wrapped. The rules themselves sit behind [`ValidityRules`] so a caller can swap in their own.

use crate::fnc;
use crate::val::{LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Segment};
use crate::vld::{LineViolation, MultiPointViolation, PolygonViolation};

/// Validity rules for every kind that can be invalid. `tolerance` is a distance in metres.
pub trait ValidityRules {
	fn multi_point(&self, v: &MultiPoint, tolerance: f64) -> Vec<MultiPointViolation>;

	fn line(&self, v: &LineString, tolerance: f64) -> Vec<LineViolation>;

	fn polygon(&self, v: &Polygon, tolerance: f64) -> Vec<PolygonViolation>;

	/// One result per member line string, in member order. A valid member has an empty result.
	fn multi_line(&self, v: &MultiLineString, tolerance: f64) -> Vec<Vec<LineViolation>> {
		v.lines().iter().map(|l| self.line(l, tolerance)).collect()
	}

	/// One result per member polygon, in member order. A valid member has an empty result.
	fn multi_polygon(&self, v: &MultiPolygon, tolerance: f64) -> Vec<Vec<PolygonViolation>> {
		v.polygons().iter().map(|p| self.polygon(p, tolerance)).collect()
	}
}

/// The default rules, measuring distances on the sphere.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeodesicRules;

/// Indices `i` where point `i` and point `i + 1` lie within `tolerance` of each other.
fn repeated(points: &[Point], tolerance: f64) -> Vec<usize> {
	points
		.windows(2)
		.enumerate()
		.filter(|(_, w)| fnc::geo::distance(&w[0], &w[1]) <= tolerance)
		.map(|(i, _)| i)
		.collect()
}

fn degenerate(v: &Segment) -> bool {
	v.start == v.end
}

/// Pairs of non-adjacent segments of the path that share a point. Zero-length segments left by
/// repeated points are ignored, and do not separate their neighbours.
fn self_intersections(v: &LineString) -> Vec<(usize, usize)> {
	let segments = v.segments();
	let closed = v.is_closed();
	let mut out = Vec::new();
	for i in 0..segments.len() {
		if degenerate(&segments[i]) {
			continue;
		}
		for j in (i + 2)..segments.len() {
			if degenerate(&segments[j]) || segments[i + 1..j].iter().all(degenerate) {
				continue;
			}
			// The first and last segments of a ring meet at the closing point
			if closed && segments[..i].iter().all(degenerate) && segments[j + 1..].iter().all(degenerate)
			{
				continue;
			}
			if fnc::geo::segments_touch(&segments[i], &segments[j]) {
				out.push((i, j));
			}
		}
	}
	out
}

fn rings_cross(a: &[Segment], b: &[Segment]) -> bool {
	a.iter().any(|x| b.iter().any(|y| fnc::geo::segments_cross(x, y)))
}

impl ValidityRules for GeodesicRules {
	fn multi_point(&self, v: &MultiPoint, tolerance: f64) -> Vec<MultiPointViolation> {
		let points = v.points();
		let mut out = Vec::new();
		for (first, a) in points.iter().enumerate() {
			for (offset, b) in points[first + 1..].iter().enumerate() {
				if fnc::geo::distance(a, b) <= tolerance {
					out.push(MultiPointViolation::Duplicate {
						first,
						second: first + 1 + offset,
					});
				}
			}
		}
		out
	}

	fn line(&self, v: &LineString, tolerance: f64) -> Vec<LineViolation> {
		if v.len() < 2 {
			return vec![LineViolation::TooFewPoints {
				count: v.len(),
			}];
		}
		let mut out: Vec<_> = repeated(v.points(), tolerance)
			.into_iter()
			.map(|index| LineViolation::DuplicatePoints {
				index,
			})
			.collect();
		out.extend(self_intersections(v).into_iter().map(|(first, second)| {
			LineViolation::SelfIntersection {
				first,
				second,
			}
		}));
		out
	}

	fn polygon(&self, v: &Polygon, tolerance: f64) -> Vec<PolygonViolation> {
		let mut out = Vec::new();
		let mut well_formed = true;
		for (ring, points) in v.rings().enumerate() {
			if points.len() < 4 {
				out.push(PolygonViolation::RingTooShort {
					ring,
					count: points.len(),
				});
				well_formed = false;
				continue;
			}
			if !points.is_closed() {
				out.push(PolygonViolation::RingNotClosed {
					ring,
				});
				well_formed = false;
			}
			for index in repeated(points.points(), tolerance) {
				out.push(PolygonViolation::DuplicatePoints {
					ring,
					index,
				});
			}
			for (first, second) in self_intersections(points) {
				out.push(PolygonViolation::SelfIntersection {
					ring,
					first,
					second,
				});
			}
		}
		// Relations between rings only mean something once every ring is a ring
		if !well_formed {
			return out;
		}
		let exterior = v.exterior();
		let shell = Polygon::new(exterior.clone(), Vec::new());
		for (index, hole) in v.interiors().iter().enumerate() {
			let outside = hole.points().iter().any(|p| {
				!fnc::geo::contains(&shell, p) && !fnc::geo::on_ring(exterior.points(), p)
			});
			if outside {
				out.push(PolygonViolation::NegativeRingOutside {
					ring: index + 1,
				});
			}
		}
		let segments: Vec<Vec<Segment>> = v.rings().map(LineString::segments).collect();
		for first in 0..segments.len() {
			for second in (first + 1)..segments.len() {
				if rings_cross(&segments[first], &segments[second]) {
					out.push(PolygonViolation::RingsIntersect {
						first,
						second,
					});
				}
			}
		}
		out
	}
}
