//! Geodesic math over geographic coordinates, backed by the `geo` crate.
//!
//! Everything here is a pure function of its inputs. Distances and lengths are in metres, areas
//! in square metres. Planar predicates (containment, segment intersection) treat longitude and
//! latitude as x and y.

use geo::algorithm::bounding_rect::BoundingRect;
use geo::algorithm::chamberlain_duquette_area::ChamberlainDuquetteArea;
use geo::algorithm::contains::Contains;
use geo::algorithm::haversine_closest_point::HaversineClosestPoint;
use geo::algorithm::haversine_distance::HaversineDistance;
use geo::algorithm::haversine_length::HaversineLength;
use geo::algorithm::intersects::Intersects;
use geo::algorithm::line_intersection::{LineIntersection, line_intersection};
use geo::Closest;

use crate::val::{BoundingBox, Point, Polygon, Segment};

fn line_string(points: &[Point]) -> geo::LineString<f64> {
	points.iter().map(|p| geo::Coord::from(*p)).collect()
}

fn polygon(v: &Polygon) -> geo::Polygon<f64> {
	geo::Polygon::new(
		line_string(v.exterior().points()),
		v.interiors().iter().map(|ring| line_string(ring.points())).collect(),
	)
}

/// The great-circle distance between two points.
pub fn distance(a: &Point, b: &Point) -> f64 {
	geo::Point::from(*a).haversine_distance(&geo::Point::from(*b))
}

/// The great-circle length of a path through the given points.
pub fn length(points: &[Point]) -> f64 {
	line_string(points).haversine_length()
}

/// The unsigned area of a polygon, with its negative rings removed.
pub fn area(v: &Polygon) -> f64 {
	polygon(v).chamberlain_duquette_unsigned_area()
}

/// The envelope of every given point, or `None` when there are none.
pub fn bounding_box<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<BoundingBox> {
	let points: geo::MultiPoint<f64> = points.into_iter().map(|p| geo::Point::from(*p)).collect();
	points.bounding_rect().map(BoundingBox::from)
}

/// Whether the point lies strictly inside the polygon and outside all of its negative rings.
pub fn contains(v: &Polygon, point: &Point) -> bool {
	polygon(v).contains(&geo::Point::from(*point))
}

/// Whether the point lies on the ring itself.
pub fn on_ring(points: &[Point], point: &Point) -> bool {
	line_string(points).intersects(&geo::Point::from(*point))
}

/// The great-circle distance from the point to the closest point of the path.
///
/// Returns `None` for an empty path.
pub fn distance_to_path(points: &[Point], point: &Point) -> Option<f64> {
	let from = geo::Point::from(*point);
	match points {
		[] => None,
		[only] => Some(distance(only, point)),
		_ => match line_string(points).haversine_closest_point(&from) {
			Closest::Intersection(_) => Some(0.0),
			Closest::SinglePoint(closest) => Some(from.haversine_distance(&closest)),
			// Antipodal inputs have no single closest point, fall back to the vertices
			Closest::Indeterminate => {
				points.iter().map(|p| distance(p, point)).min_by(|a, b| a.total_cmp(b))
			}
		},
	}
}

/// Whether two segments share at least one point.
pub fn segments_touch(a: &Segment, b: &Segment) -> bool {
	line_intersection(geo::Line::from(*a), geo::Line::from(*b)).is_some()
}

/// Whether two segments cross in their interiors or overlap along a stretch.
pub fn segments_cross(a: &Segment, b: &Segment) -> bool {
	match line_intersection(geo::Line::from(*a), geo::Line::from(*b)) {
		Some(LineIntersection::SinglePoint {
			is_proper,
			..
		}) => is_proper,
		Some(LineIntersection::Collinear {
			..
		}) => true,
		None => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::val::LineString;

	fn square(size: f64) -> Polygon {
		Polygon::new(
			LineString::from(vec![(0.0, 0.0), (size, 0.0), (size, size), (0.0, size), (0.0, 0.0)]),
			vec![],
		)
	}

	#[test]
	fn distance_along_equator() {
		let d = distance(&Point::new(0.0, 0.0), &Point::new(1.0, 0.0));
		assert!((d - 111_195.0).abs() < 100.0, "got {d}");
	}

	#[test]
	fn length_sums_segments() {
		let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
		let whole = length(&points);
		let half = length(&points[..2]);
		assert!((whole - 2.0 * half).abs() < 1.0);
	}

	#[test]
	fn contains_respects_negative_rings() {
		let outer = LineString::from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]);
		let hole = LineString::from(vec![(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0), (1.0, 1.0)]);
		let v = Polygon::new(outer, vec![hole]);
		assert!(contains(&v, &Point::new(0.5, 0.5)));
		assert!(!contains(&v, &Point::new(2.0, 2.0)));
		assert!(!contains(&v, &Point::new(5.0, 5.0)));
	}

	#[test]
	fn bounding_box_of_nothing() {
		assert!(bounding_box(std::iter::empty()).is_none());
	}

	#[test]
	fn bounding_box_of_square() {
		let v = square(2.0);
		let bbox = bounding_box(v.exterior().points()).unwrap();
		assert_eq!(bbox.min, Point::new(0.0, 0.0));
		assert_eq!(bbox.max, Point::new(2.0, 2.0));
	}

	#[test]
	fn distance_to_path_of_single_point() {
		let d = distance_to_path(&[Point::new(0.0, 0.0)], &Point::new(0.0, 1.0)).unwrap();
		assert!((d - 111_195.0).abs() < 100.0);
		assert!(distance_to_path(&[], &Point::new(0.0, 0.0)).is_none());
	}

	#[test]
	fn crossing_and_touching_segments() {
		let a = Segment::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
		let b = Segment::new(Point::new(0.0, 2.0), Point::new(2.0, 0.0));
		let c = Segment::new(Point::new(2.0, 2.0), Point::new(3.0, 2.0));
		assert!(segments_cross(&a, &b));
		assert!(segments_touch(&a, &c));
		assert!(!segments_cross(&a, &c));
	}
}
