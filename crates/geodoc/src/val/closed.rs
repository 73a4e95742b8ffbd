use crate::val::{Geometry, MultiPolygon, Point, Polygon};

/// A borrowed view of a ring-bearing geometry: a polygon or a multi polygon.
#[derive(Clone, Copy, Debug)]
pub enum Closed<'a> {
	Polygon(&'a Polygon),
	MultiPolygon(&'a MultiPolygon),
}

impl<'a> Closed<'a> {
	/// The polygons making up this geometry.
	pub fn polygons(&self) -> &'a [Polygon] {
		match *self {
			Closed::Polygon(v) => std::slice::from_ref(v),
			Closed::MultiPolygon(v) => v.polygons(),
		}
	}

	/// The total enclosed area, in square metres.
	pub fn area(&self) -> f64 {
		self.polygons().iter().map(Polygon::area).sum()
	}

	/// Whether any polygon contains the point, allowing `tolerance` metres outside the edge.
	pub fn contains(&self, point: &Point, tolerance: f64) -> bool {
		self.polygons().iter().any(|v| v.contains(point, tolerance))
	}

	/// The distance from the point to the nearest ring of any polygon, in metres.
	pub fn edge_distance(&self, point: &Point) -> Option<f64> {
		self.polygons()
			.iter()
			.filter_map(|v| v.edge_distance(point))
			.min_by(|a, b| a.total_cmp(b))
	}

	/// The distance from the point to the shape, zero when the point lies inside it.
	pub fn distance(&self, point: &Point) -> Option<f64> {
		self.polygons().iter().filter_map(|v| v.distance(point)).min_by(|a, b| a.total_cmp(b))
	}

	pub fn to_geometry(&self) -> Geometry {
		match *self {
			Closed::Polygon(v) => Geometry::Polygon(v.clone()),
			Closed::MultiPolygon(v) => Geometry::MultiPolygon(v.clone()),
		}
	}
}
