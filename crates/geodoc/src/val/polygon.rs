use crate::eq;
use crate::fnc;
use crate::val::{LineString, Point};

/// A shape bounded by one outer ring, with zero or more negative rings cut out of it.
///
/// The outer ring is compared as an ordered path, the negative rings as an unordered set.
#[derive(Clone, Debug, Default)]
pub struct Polygon {
	exterior: LineString,
	interiors: Vec<LineString>,
}

impl Polygon {
	pub fn new(exterior: LineString, interiors: Vec<LineString>) -> Self {
		Self {
			exterior,
			interiors,
		}
	}

	/// The outer ring.
	pub fn exterior(&self) -> &LineString {
		&self.exterior
	}

	/// The negative rings, in declaration order.
	pub fn interiors(&self) -> &[LineString] {
		&self.interiors
	}

	/// Every ring, the outer ring first.
	pub fn rings(&self) -> impl Iterator<Item = &LineString> {
		std::iter::once(&self.exterior).chain(self.interiors.iter())
	}

	/// The area enclosed by the outer ring minus the negative rings, in square metres.
	pub fn area(&self) -> f64 {
		fnc::geo::area(self)
	}

	/// Whether the point lies inside the shape, or within `tolerance` metres of its edge.
	pub fn contains(&self, point: &Point, tolerance: f64) -> bool {
		if fnc::geo::contains(self, point) {
			return true;
		}
		self.edge_distance(point).is_some_and(|d| d <= tolerance)
	}

	/// The distance from the point to the nearest ring, in metres.
	pub fn edge_distance(&self, point: &Point) -> Option<f64> {
		self.rings()
			.filter_map(|ring| fnc::geo::distance_to_path(ring.points(), point))
			.min_by(|a, b| a.total_cmp(b))
	}

	/// The distance from the point to the shape, zero when the point lies inside it.
	pub fn distance(&self, point: &Point) -> Option<f64> {
		if fnc::geo::contains(self, point) {
			return Some(0.0);
		}
		self.edge_distance(point)
	}
}

impl PartialEq for Polygon {
	fn eq(&self, other: &Self) -> bool {
		eq::polygon(self, other)
	}
}

/// An unordered group of polygons.
#[derive(Clone, Debug, Default)]
pub struct MultiPolygon(pub Vec<Polygon>);

impl MultiPolygon {
	pub fn new(polygons: Vec<Polygon>) -> Self {
		Self(polygons)
	}

	pub fn polygons(&self) -> &[Polygon] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl PartialEq for MultiPolygon {
	fn eq(&self, other: &Self) -> bool {
		eq::multi_polygon(self, other)
	}
}

impl From<Vec<Polygon>> for MultiPolygon {
	fn from(v: Vec<Polygon>) -> Self {
		Self(v)
	}
}
