use crate::val::{Geometry, LineString, MultiLineString, Point, Segment};

/// A borrowed view of a geometry that is a path: a line string or a multi line string.
#[derive(Clone, Copy, Debug)]
pub enum Linear<'a> {
	Line(&'a LineString),
	MultiLine(&'a MultiLineString),
}

impl<'a> Linear<'a> {
	/// The line strings making up this geometry.
	pub fn line_strings(&self) -> &'a [LineString] {
		match *self {
			Linear::Line(v) => std::slice::from_ref(v),
			Linear::MultiLine(v) => v.lines(),
		}
	}

	/// The consecutive-point segments of every line string, in declaration order.
	pub fn lines(&self) -> Vec<Segment> {
		self.line_strings().iter().flat_map(LineString::segments).collect()
	}

	/// The total great-circle length, in metres.
	pub fn length(&self) -> f64 {
		self.line_strings().iter().map(LineString::length).sum()
	}

	/// The distance from the point to the nearest line string, in metres.
	pub fn distance(&self, point: &Point) -> Option<f64> {
		self.line_strings()
			.iter()
			.filter_map(|v| crate::fnc::geo::distance_to_path(v.points(), point))
			.min_by(|a, b| a.total_cmp(b))
	}

	pub fn to_geometry(&self) -> Geometry {
		match *self {
			Linear::Line(v) => Geometry::Line(v.clone()),
			Linear::MultiLine(v) => Geometry::MultiLine(v.clone()),
		}
	}
}
