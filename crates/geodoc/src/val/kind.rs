//! The closed set of document kinds, and the per-kind table every traversal dispatches through.

use std::fmt;

/// The kind tag of a document node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum GeometryKind {
	Point,
	MultiPoint,
	LineString,
	MultiLineString,
	Polygon,
	MultiPolygon,
	GeometryCollection,
	Feature,
	FeatureCollection,
}

/// A trait a document kind may or may not satisfy.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Capability {
	/// Holds raw coordinates rather than further typed geometries.
	Coordinates,
	/// A path with segments and a length.
	Linear,
	/// A ring-bearing shape.
	Closed,
}

/// The capabilities of one kind.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Capabilities {
	pub coordinates: bool,
	pub linear: bool,
	pub closed: bool,
	/// Whether a whole document of this kind is a single simple shape.
	pub simple: bool,
}

impl Capabilities {
	const NONE: Self = Self {
		coordinates: false,
		linear: false,
		closed: false,
		simple: false,
	};

	const COORDINATES: Self = Self {
		coordinates: true,
		..Self::NONE
	};

	pub const fn has(self, capability: Capability) -> bool {
		match capability {
			Capability::Coordinates => self.coordinates,
			Capability::Linear => self.linear,
			Capability::Closed => self.closed,
		}
	}
}

/// How the elements of a member are matched against another document's.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatchPolicy {
	/// Same length, pairwise equal at every index.
	Sequence,
	/// Same length, every element matches some element of the other side and vice versa.
	Set,
}

/// A list-valued member of a document kind, compared element by element under its policy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Member {
	/// The points of a multi point.
	Points,
	/// The points of a line string.
	Path,
	/// The line strings of a multi line string.
	Lines,
	/// The points of a polygon's outer ring.
	Exterior,
	/// The negative rings of a polygon.
	Interiors,
	/// The polygons of a multi polygon.
	Polygons,
	/// The members of a geometry collection.
	Geometries,
	/// The features of a feature collection.
	Features,
}

impl Member {
	/// The comparison policy of this member.
	pub const fn policy(self) -> MatchPolicy {
		match self {
			Member::Points => MatchPolicy::Set,
			Member::Path => MatchPolicy::Sequence,
			Member::Lines => MatchPolicy::Set,
			Member::Exterior => MatchPolicy::Sequence,
			Member::Interiors => MatchPolicy::Set,
			Member::Polygons => MatchPolicy::Set,
			Member::Geometries => MatchPolicy::Set,
			Member::Features => MatchPolicy::Set,
		}
	}
}

impl GeometryKind {
	pub const ALL: [GeometryKind; 9] = [
		GeometryKind::Point,
		GeometryKind::MultiPoint,
		GeometryKind::LineString,
		GeometryKind::MultiLineString,
		GeometryKind::Polygon,
		GeometryKind::MultiPolygon,
		GeometryKind::GeometryCollection,
		GeometryKind::Feature,
		GeometryKind::FeatureCollection,
	];

	pub const fn capabilities(self) -> Capabilities {
		match self {
			GeometryKind::Point => Capabilities {
				simple: true,
				..Capabilities::COORDINATES
			},
			GeometryKind::MultiPoint => Capabilities::COORDINATES,
			GeometryKind::LineString => Capabilities {
				linear: true,
				simple: true,
				..Capabilities::COORDINATES
			},
			GeometryKind::MultiLineString => Capabilities {
				linear: true,
				..Capabilities::COORDINATES
			},
			GeometryKind::Polygon => Capabilities {
				closed: true,
				simple: true,
				..Capabilities::COORDINATES
			},
			GeometryKind::MultiPolygon => Capabilities {
				closed: true,
				..Capabilities::COORDINATES
			},
			GeometryKind::GeometryCollection
			| GeometryKind::Feature
			| GeometryKind::FeatureCollection => Capabilities::NONE,
		}
	}

	/// Whether this kind wraps further typed documents instead of raw coordinates.
	pub const fn is_collection(self) -> bool {
		!self.capabilities().coordinates
	}

	/// The GeoJSON `type` name of this kind.
	pub const fn as_str(self) -> &'static str {
		match self {
			GeometryKind::Point => "Point",
			GeometryKind::MultiPoint => "MultiPoint",
			GeometryKind::LineString => "LineString",
			GeometryKind::MultiLineString => "MultiLineString",
			GeometryKind::Polygon => "Polygon",
			GeometryKind::MultiPolygon => "MultiPolygon",
			GeometryKind::GeometryCollection => "GeometryCollection",
			GeometryKind::Feature => "Feature",
			GeometryKind::FeatureCollection => "FeatureCollection",
		}
	}

	/// Looks up a kind by its GeoJSON `type` name.
	pub fn from_type_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.as_str() == name)
	}
}

impl fmt::Display for GeometryKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case::point(GeometryKind::Point, true, false, false, true)]
	#[case::multi_point(GeometryKind::MultiPoint, true, false, false, false)]
	#[case::line(GeometryKind::LineString, true, true, false, true)]
	#[case::multi_line(GeometryKind::MultiLineString, true, true, false, false)]
	#[case::polygon(GeometryKind::Polygon, true, false, true, true)]
	#[case::multi_polygon(GeometryKind::MultiPolygon, true, false, true, false)]
	#[case::collection(GeometryKind::GeometryCollection, false, false, false, false)]
	#[case::feature(GeometryKind::Feature, false, false, false, false)]
	#[case::feature_collection(GeometryKind::FeatureCollection, false, false, false, false)]
	fn capability_table(
		#[case] kind: GeometryKind,
		#[case] coordinates: bool,
		#[case] linear: bool,
		#[case] closed: bool,
		#[case] simple: bool,
	) {
		let caps = kind.capabilities();
		assert_eq!(caps.has(Capability::Coordinates), coordinates);
		assert_eq!(caps.has(Capability::Linear), linear);
		assert_eq!(caps.has(Capability::Closed), closed);
		assert_eq!(caps.simple, simple);
	}

	#[test]
	fn linear_and_closed_kinds_carry_coordinates() {
		for kind in GeometryKind::ALL {
			let caps = kind.capabilities();
			if caps.linear || caps.closed {
				assert!(caps.coordinates, "{kind} is linear or closed without coordinates");
			}
			assert!(!(caps.linear && caps.closed), "{kind} is both linear and closed");
		}
	}

	#[rstest]
	#[case::points(Member::Points, MatchPolicy::Set)]
	#[case::path(Member::Path, MatchPolicy::Sequence)]
	#[case::lines(Member::Lines, MatchPolicy::Set)]
	#[case::exterior(Member::Exterior, MatchPolicy::Sequence)]
	#[case::interiors(Member::Interiors, MatchPolicy::Set)]
	#[case::polygons(Member::Polygons, MatchPolicy::Set)]
	#[case::geometries(Member::Geometries, MatchPolicy::Set)]
	#[case::features(Member::Features, MatchPolicy::Set)]
	fn member_policies(#[case] member: Member, #[case] policy: MatchPolicy) {
		assert_eq!(member.policy(), policy);
	}

	#[test]
	fn type_names_round_trip() {
		for kind in GeometryKind::ALL {
			assert_eq!(GeometryKind::from_type_name(kind.as_str()), Some(kind));
		}
		assert_eq!(GeometryKind::from_type_name("Circle"), None);
		assert_eq!(GeometryKind::from_type_name("point"), None);
	}
}
