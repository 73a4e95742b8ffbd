//! Structural equality between documents.
//!
//! Kinds must match, then every member is compared under the [`MatchPolicy`] declared for it in
//! the kind table: paths and outer rings as ordered sequences, negative rings and the members
//! of multi and collection kinds as sets. Element equality is itself structural and not hashable,
//! so set matching compares every pair once and then requires a match for every element on
//! both sides.

use tracing::warn;

use crate::err::Error;
use crate::val::{
	Depth, Feature, FeatureCollection, Geometry, GeometryCollection, LineString, MatchPolicy,
	Member, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

const TARGET: &str = "geodoc::eq";

/// Compares two member lists under a policy. Lists of different length never match.
fn members<T>(
	policy: MatchPolicy,
	a: &[T],
	b: &[T],
	mut eq: impl FnMut(&T, &T) -> Result<bool, Error>,
) -> Result<bool, Error> {
	if a.len() != b.len() {
		return Ok(false);
	}
	match policy {
		MatchPolicy::Sequence => {
			for (x, y) in a.iter().zip(b) {
				if !eq(x, y)? {
					return Ok(false);
				}
			}
			Ok(true)
		}
		MatchPolicy::Set => {
			// Each pair is compared once, matches are then checked from both sides
			let mut matched = vec![false; b.len()];
			for x in a {
				let mut found = false;
				for (y, seen) in b.iter().zip(matched.iter_mut()) {
					if eq(x, y)? {
						found = true;
						*seen = true;
					}
				}
				if !found {
					return Ok(false);
				}
			}
			Ok(matched.into_iter().all(|v| v))
		}
	}
}

fn point_eq(a: &Point, b: &Point) -> Result<bool, Error> {
	Ok(a == b)
}

fn multi_point_eq(a: &MultiPoint, b: &MultiPoint) -> Result<bool, Error> {
	members(Member::Points.policy(), a.points(), b.points(), point_eq)
}

fn line_eq(a: &LineString, b: &LineString) -> Result<bool, Error> {
	members(Member::Path.policy(), a.points(), b.points(), point_eq)
}

fn multi_line_eq(a: &MultiLineString, b: &MultiLineString) -> Result<bool, Error> {
	members(Member::Lines.policy(), a.lines(), b.lines(), line_eq)
}

fn polygon_eq(a: &Polygon, b: &Polygon) -> Result<bool, Error> {
	Ok(members(Member::Interiors.policy(), a.interiors(), b.interiors(), line_eq)?
		&& members(Member::Exterior.policy(), a.exterior().points(), b.exterior().points(), point_eq)?)
}

fn multi_polygon_eq(a: &MultiPolygon, b: &MultiPolygon) -> Result<bool, Error> {
	members(Member::Polygons.policy(), a.polygons(), b.polygons(), polygon_eq)
}

fn collection_eq(
	a: &GeometryCollection,
	b: &GeometryCollection,
	depth: Depth,
) -> Result<bool, Error> {
	match (&a.0, &b.0) {
		(None, None) => Ok(true),
		(Some(a), Some(b)) => {
			let depth = depth.dive()?;
			members(Member::Geometries.policy(), a, b, |x, y| geometry_eq(x, y, depth))
		}
		(None, Some(_)) | (Some(_), None) => Ok(false),
	}
}

fn feature_eq(a: &Feature, b: &Feature, depth: Depth) -> Result<bool, Error> {
	let geometry = match (a.geometry(), b.geometry()) {
		(None, None) => true,
		(Some(x), Some(y)) => geometry_eq(x, y, depth.dive()?)?,
		(None, Some(_)) | (Some(_), None) => false,
	};
	Ok(geometry && a.id_string() == b.id_string() && a.properties == b.properties)
}

fn feature_collection_eq(
	a: &FeatureCollection,
	b: &FeatureCollection,
	depth: Depth,
) -> Result<bool, Error> {
	let depth = depth.dive()?;
	members(Member::Features.policy(), a.features(), b.features(), |x, y| feature_eq(x, y, depth))
}

fn geometry_eq(a: &Geometry, b: &Geometry, depth: Depth) -> Result<bool, Error> {
	match (a, b) {
		(Geometry::Point(a), Geometry::Point(b)) => point_eq(a, b),
		(Geometry::MultiPoint(a), Geometry::MultiPoint(b)) => multi_point_eq(a, b),
		(Geometry::Line(a), Geometry::Line(b)) => line_eq(a, b),
		(Geometry::MultiLine(a), Geometry::MultiLine(b)) => multi_line_eq(a, b),
		(Geometry::Polygon(a), Geometry::Polygon(b)) => polygon_eq(a, b),
		(Geometry::MultiPolygon(a), Geometry::MultiPolygon(b)) => multi_polygon_eq(a, b),
		(Geometry::Collection(a), Geometry::Collection(b)) => collection_eq(a, b, depth),
		(Geometry::Feature(a), Geometry::Feature(b)) => feature_eq(a, b, depth),
		(Geometry::FeatureCollection(a), Geometry::FeatureCollection(b)) => {
			feature_collection_eq(a, b, depth)
		}
		// Kinds differ
		(
			Geometry::Point(_)
			| Geometry::MultiPoint(_)
			| Geometry::Line(_)
			| Geometry::MultiLine(_)
			| Geometry::Polygon(_)
			| Geometry::MultiPolygon(_)
			| Geometry::Collection(_)
			| Geometry::Feature(_)
			| Geometry::FeatureCollection(_),
			_,
		) => Ok(false),
	}
}

fn fail_closed(result: Result<bool, Error>) -> bool {
	match result {
		Ok(v) => v,
		Err(e) => {
			warn!(target: TARGET, "Treating documents as unequal: {e}");
			false
		}
	}
}

pub(crate) fn multi_point(a: &MultiPoint, b: &MultiPoint) -> bool {
	fail_closed(multi_point_eq(a, b))
}

pub(crate) fn line(a: &LineString, b: &LineString) -> bool {
	fail_closed(line_eq(a, b))
}

pub(crate) fn multi_line(a: &MultiLineString, b: &MultiLineString) -> bool {
	fail_closed(multi_line_eq(a, b))
}

pub(crate) fn polygon(a: &Polygon, b: &Polygon) -> bool {
	fail_closed(polygon_eq(a, b))
}

pub(crate) fn multi_polygon(a: &MultiPolygon, b: &MultiPolygon) -> bool {
	fail_closed(multi_polygon_eq(a, b))
}

pub(crate) fn collection(a: &GeometryCollection, b: &GeometryCollection) -> bool {
	fail_closed(collection_eq(a, b, Depth::default()))
}

pub(crate) fn feature(a: &Feature, b: &Feature) -> bool {
	fail_closed(feature_eq(a, b, Depth::default()))
}

pub(crate) fn feature_collection(a: &FeatureCollection, b: &FeatureCollection) -> bool {
	fail_closed(feature_collection_eq(a, b, Depth::default()))
}

/// Compares two possibly absent documents. Two absent documents are equal, an absent document
/// never equals a present one.
pub fn documents_equal(a: Option<&Geometry>, b: Option<&Geometry>) -> bool {
	match (a, b) {
		(None, None) => true,
		(Some(a), Some(b)) => a == b,
		(None, Some(_)) | (Some(_), None) => false,
	}
}

impl Geometry {
	/// Structural equality that reports running out of nesting budget instead of answering
	/// `false`.
	pub fn try_eq(&self, other: &Geometry, depth: Depth) -> Result<bool, Error> {
		geometry_eq(self, other, depth)
	}
}

impl PartialEq for Geometry {
	fn eq(&self, other: &Self) -> bool {
		fail_closed(self.try_eq(other, Depth::default()))
	}
}
