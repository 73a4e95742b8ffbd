use crate::eq;
use crate::fnc;
use crate::val::Point;

/// A straight piece between two consecutive points of a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
	pub start: Point,
	pub end: Point,
}

impl Segment {
	pub fn new(start: Point, end: Point) -> Self {
		Self {
			start,
			end,
		}
	}

	/// The great-circle length of the segment, in metres.
	pub fn length(&self) -> f64 {
		fnc::geo::distance(&self.start, &self.end)
	}
}

impl From<Segment> for geo_types::Line<f64> {
	fn from(v: Segment) -> Self {
		geo_types::Line::new(v.start, v.end)
	}
}

/// An ordered path of points. The order defines the path, so it is significant for equality.
#[derive(Clone, Debug, Default)]
pub struct LineString(pub Vec<Point>);

impl LineString {
	pub fn new(points: Vec<Point>) -> Self {
		Self(points)
	}

	pub fn points(&self) -> &[Point] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Whether the path ends where it starts.
	pub fn is_closed(&self) -> bool {
		match (self.0.first(), self.0.last()) {
			(Some(first), Some(last)) => self.0.len() > 1 && first == last,
			_ => false,
		}
	}

	/// The consecutive-point segments of the path.
	pub fn segments(&self) -> Vec<Segment> {
		self.0.windows(2).map(|w| Segment::new(w[0], w[1])).collect()
	}

	/// The great-circle length of the path, in metres.
	pub fn length(&self) -> f64 {
		fnc::geo::length(&self.0)
	}
}

impl PartialEq for LineString {
	fn eq(&self, other: &Self) -> bool {
		eq::line(self, other)
	}
}

impl<P: Into<Point>> From<Vec<P>> for LineString {
	fn from(v: Vec<P>) -> Self {
		Self(v.into_iter().map(Into::into).collect())
	}
}

/// An unordered group of line strings.
#[derive(Clone, Debug, Default)]
pub struct MultiLineString(pub Vec<LineString>);

impl MultiLineString {
	pub fn new(lines: Vec<LineString>) -> Self {
		Self(lines)
	}

	pub fn lines(&self) -> &[LineString] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl PartialEq for MultiLineString {
	fn eq(&self, other: &Self) -> bool {
		eq::multi_line(self, other)
	}
}

impl From<Vec<LineString>> for MultiLineString {
	fn from(v: Vec<LineString>) -> Self {
		Self(v)
	}
}
