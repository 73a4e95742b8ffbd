//! The document model: a closed set of nine geometry kinds that nest through collections and
//! features.

use tracing::warn;

use crate::err::Error;

pub mod bbox;
pub mod closed;
pub mod collection;
pub mod depth;
pub mod feature;
pub mod kind;
pub mod line;
pub mod linear;
pub mod point;
pub mod polygon;

pub use self::bbox::BoundingBox;
pub use self::closed::Closed;
pub use self::collection::GeometryCollection;
pub use self::depth::Depth;
pub use self::feature::{Feature, FeatureCollection, FeatureId};
pub use self::kind::{Capabilities, Capability, GeometryKind, MatchPolicy, Member};
pub use self::line::{LineString, MultiLineString, Segment};
pub use self::linear::Linear;
pub use self::point::{MultiPoint, Point};
pub use self::polygon::{MultiPolygon, Polygon};

const TARGET: &str = "geodoc::val";

/// A node of a geometry document.
#[derive(Clone, Debug)]
pub enum Geometry {
	Point(Point),
	MultiPoint(MultiPoint),
	Line(LineString),
	MultiLine(MultiLineString),
	Polygon(Polygon),
	MultiPolygon(MultiPolygon),
	Collection(GeometryCollection),
	Feature(Feature),
	FeatureCollection(FeatureCollection),
	// Add new variants here
}

impl Geometry {
	pub fn kind(&self) -> GeometryKind {
		match self {
			Geometry::Point(_) => GeometryKind::Point,
			Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
			Geometry::Line(_) => GeometryKind::LineString,
			Geometry::MultiLine(_) => GeometryKind::MultiLineString,
			Geometry::Polygon(_) => GeometryKind::Polygon,
			Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
			Geometry::Collection(_) => GeometryKind::GeometryCollection,
			Geometry::Feature(_) => GeometryKind::Feature,
			Geometry::FeatureCollection(_) => GeometryKind::FeatureCollection,
		}
	}

	/// Whether the whole document is a single point, line string, or polygon.
	pub fn is_simple(&self) -> bool {
		self.kind().capabilities().simple
	}

	/// The object geometries of this node: a coordinate geometry is its own only member, a
	/// feature yields its geometry, and the collection kinds yield their members.
	pub fn geometries(&self) -> Vec<Node<'_>> {
		Node::Geometry(self).geometries()
	}

	pub fn as_linear(&self) -> Option<Linear<'_>> {
		match self {
			Geometry::Line(v) => Some(Linear::Line(v)),
			Geometry::MultiLine(v) => Some(Linear::MultiLine(v)),
			_ => None,
		}
	}

	pub fn as_closed(&self) -> Option<Closed<'_>> {
		match self {
			Geometry::Polygon(v) => Some(Closed::Polygon(v)),
			Geometry::MultiPolygon(v) => Some(Closed::MultiPolygon(v)),
			_ => None,
		}
	}

	/// Every position of the document, depth first in declaration order.
	pub fn points(&self) -> Result<Vec<Point>, Error> {
		let mut out = Vec::new();
		for geometry in self.coordinates_geometries()? {
			match geometry {
				Geometry::Point(v) => out.push(*v),
				Geometry::MultiPoint(v) => out.extend_from_slice(v.points()),
				Geometry::Line(v) => out.extend_from_slice(v.points()),
				Geometry::MultiLine(v) => {
					out.extend(v.lines().iter().flat_map(|l| l.points().iter().copied()))
				}
				Geometry::Polygon(v) => {
					out.extend(v.rings().flat_map(|r| r.points().iter().copied()))
				}
				Geometry::MultiPolygon(v) => out.extend(
					v.polygons().iter().flat_map(Polygon::rings).flat_map(|r| r.points().iter().copied()),
				),
				Geometry::Collection(_) | Geometry::Feature(_) | Geometry::FeatureCollection(_) => {
					warn!(target: TARGET, kind = %geometry.kind(), "Extractor yielded a collection kind");
				}
			}
		}
		Ok(out)
	}

	/// The longitude/latitude envelope of every position, or `None` for a document without any.
	pub fn bounding_box(&self) -> Result<Option<BoundingBox>, Error> {
		Ok(crate::fnc::geo::bounding_box(&self.points()?))
	}

	/// The distance from the point to the nearest coordinate geometry of the document, in metres.
	///
	/// A point inside a polygon is at distance zero. Returns `None` for a document without
	/// positions.
	pub fn distance(&self, point: &Point) -> Result<Option<f64>, Error> {
		let mut best: Option<f64> = None;
		for geometry in self.coordinates_geometries()? {
			let d = match geometry {
				Geometry::Point(v) => Some(v.distance(point)),
				Geometry::MultiPoint(v) => {
					v.points().iter().map(|p| p.distance(point)).min_by(|a, b| a.total_cmp(b))
				}
				Geometry::Line(v) => Linear::Line(v).distance(point),
				Geometry::MultiLine(v) => Linear::MultiLine(v).distance(point),
				Geometry::Polygon(v) => Closed::Polygon(v).distance(point),
				Geometry::MultiPolygon(v) => Closed::MultiPolygon(v).distance(point),
				Geometry::Collection(_) | Geometry::Feature(_) | Geometry::FeatureCollection(_) => {
					None
				}
			};
			best = match (best, d) {
				(Some(a), Some(b)) => Some(a.min(b)),
				(a, b) => a.or(b),
			};
		}
		Ok(best)
	}
}

/// A borrowed node of a document tree.
///
/// Features inside a feature collection are not stored as [`Geometry`] values, so traversals
/// walk this view instead.
#[derive(Clone, Copy, Debug)]
pub enum Node<'a> {
	Geometry(&'a Geometry),
	Feature(&'a Feature),
}

impl<'a> Node<'a> {
	pub fn kind(self) -> GeometryKind {
		match self {
			Node::Geometry(v) => v.kind(),
			Node::Feature(_) => GeometryKind::Feature,
		}
	}

	/// See [`Geometry::geometries`].
	pub fn geometries(self) -> Vec<Node<'a>> {
		match self {
			Node::Geometry(geometry) => match geometry {
				Geometry::Point(_)
				| Geometry::MultiPoint(_)
				| Geometry::Line(_)
				| Geometry::MultiLine(_)
				| Geometry::Polygon(_)
				| Geometry::MultiPolygon(_) => vec![self],
				Geometry::Collection(v) => v.geometries().iter().map(Node::Geometry).collect(),
				Geometry::Feature(v) => Node::Feature(v).geometries(),
				Geometry::FeatureCollection(v) => v.features().iter().map(Node::Feature).collect(),
			},
			Node::Feature(v) => v.geometry().map(Node::Geometry).into_iter().collect(),
		}
	}
}

impl<'a> From<&'a Geometry> for Node<'a> {
	fn from(v: &'a Geometry) -> Self {
		Node::Geometry(v)
	}
}

impl<'a> From<&'a Feature> for Node<'a> {
	fn from(v: &'a Feature) -> Self {
		Node::Feature(v)
	}
}

impl From<Point> for Geometry {
	fn from(v: Point) -> Self {
		Geometry::Point(v)
	}
}

impl From<MultiPoint> for Geometry {
	fn from(v: MultiPoint) -> Self {
		Geometry::MultiPoint(v)
	}
}

impl From<LineString> for Geometry {
	fn from(v: LineString) -> Self {
		Geometry::Line(v)
	}
}

impl From<MultiLineString> for Geometry {
	fn from(v: MultiLineString) -> Self {
		Geometry::MultiLine(v)
	}
}

impl From<Polygon> for Geometry {
	fn from(v: Polygon) -> Self {
		Geometry::Polygon(v)
	}
}

impl From<MultiPolygon> for Geometry {
	fn from(v: MultiPolygon) -> Self {
		Geometry::MultiPolygon(v)
	}
}

impl From<GeometryCollection> for Geometry {
	fn from(v: GeometryCollection) -> Self {
		Geometry::Collection(v)
	}
}

impl From<Feature> for Geometry {
	fn from(v: Feature) -> Self {
		Geometry::Feature(v)
	}
}

impl From<FeatureCollection> for Geometry {
	fn from(v: FeatureCollection) -> Self {
		Geometry::FeatureCollection(v)
	}
}
