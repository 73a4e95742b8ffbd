use std::fmt;

use crate::eq;
use crate::fnc;

/// A single geographic position.
///
/// Equality compares longitude, latitude and altitude directly, treating NaN as equal to NaN so
/// that every point equals itself. An absent altitude is not equal to an altitude of zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
	pub longitude: f64,
	pub latitude: f64,
	pub altitude: Option<f64>,
}

impl Point {
	pub fn new(longitude: f64, latitude: f64) -> Self {
		Self {
			longitude,
			latitude,
			altitude: None,
		}
	}

	pub fn with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Self {
		Self {
			longitude,
			latitude,
			altitude: Some(altitude),
		}
	}

	/// The great-circle distance to another point, in metres.
	pub fn distance(&self, other: &Point) -> f64 {
		fnc::geo::distance(self, other)
	}
}

fn same(a: f64, b: f64) -> bool {
	a == b || (a.is_nan() && b.is_nan())
}

impl PartialEq for Point {
	fn eq(&self, other: &Self) -> bool {
		same(self.longitude, other.longitude)
			&& same(self.latitude, other.latitude)
			&& match (self.altitude, other.altitude) {
				(None, None) => true,
				(Some(a), Some(b)) => same(a, b),
				(None, Some(_)) | (Some(_), None) => false,
			}
	}
}

impl From<(f64, f64)> for Point {
	fn from((longitude, latitude): (f64, f64)) -> Self {
		Self::new(longitude, latitude)
	}
}

impl From<(f64, f64, f64)> for Point {
	fn from((longitude, latitude, altitude): (f64, f64, f64)) -> Self {
		Self::with_altitude(longitude, latitude, altitude)
	}
}

impl From<geo_types::Point<f64>> for Point {
	fn from(v: geo_types::Point<f64>) -> Self {
		Self::new(v.x(), v.y())
	}
}

impl From<geo_types::Coord<f64>> for Point {
	fn from(v: geo_types::Coord<f64>) -> Self {
		Self::new(v.x, v.y)
	}
}

impl From<Point> for geo_types::Coord<f64> {
	fn from(v: Point) -> Self {
		geo_types::Coord {
			x: v.longitude,
			y: v.latitude,
		}
	}
}

impl From<Point> for geo_types::Point<f64> {
	fn from(v: Point) -> Self {
		geo_types::Point::new(v.longitude, v.latitude)
	}
}

impl fmt::Display for Point {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.altitude {
			Some(altitude) => write!(f, "({}, {}, {})", self.longitude, self.latitude, altitude),
			None => write!(f, "({}, {})", self.longitude, self.latitude),
		}
	}
}

/// An unordered group of points. Declaration order is kept for encoding only.
#[derive(Clone, Debug, Default)]
pub struct MultiPoint(pub Vec<Point>);

impl MultiPoint {
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
}

impl PartialEq for MultiPoint {
	fn eq(&self, other: &Self) -> bool {
		eq::multi_point(self, other)
	}
}

impl<P: Into<Point>> From<Vec<P>> for MultiPoint {
	fn from(v: Vec<P>) -> Self {
		Self(v.into_iter().map(Into::into).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn altitude_is_significant() {
		assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
		assert_ne!(Point::new(1.0, 2.0), Point::with_altitude(1.0, 2.0, 0.0));
		assert_ne!(Point::new(1.0, 2.0), Point::new(2.0, 1.0));
	}

	#[test]
	fn not_a_number_equals_itself() {
		let v = Point::new(f64::NAN, 0.0);
		assert_eq!(v, v);
		assert_eq!(v, Point::new(f64::NAN, 0.0));
		assert_ne!(v, Point::new(0.0, 0.0));
		let v = Point::with_altitude(1.0, 2.0, f64::NAN);
		assert_eq!(v, v);
		assert_ne!(v, Point::new(1.0, 2.0));
		assert_eq!(Point::new(0.0, 0.0), Point::new(-0.0, 0.0));
		let line = crate::val::LineString::from(vec![(f64::NAN, 0.0), (1.0, 1.0)]);
		assert_eq!(line, line.clone());
	}

	#[test]
	fn display() {
		assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5, -2)");
		assert_eq!(Point::with_altitude(1.0, 2.0, 3.0).to_string(), "(1, 2, 3)");
	}

	#[test]
	fn geo_conversion_keeps_axis_order() {
		let v: geo_types::Point<f64> = Point::new(10.0, 20.0).into();
		assert_eq!(v.x(), 10.0);
		assert_eq!(v.y(), 20.0);
		assert_eq!(Point::from(v), Point::new(10.0, 20.0));
	}
}
