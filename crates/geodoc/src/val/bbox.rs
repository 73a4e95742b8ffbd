use crate::val::Point;

/// The longitude/latitude envelope of a document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
	/// The south-west corner.
	pub min: Point,
	/// The north-east corner.
	pub max: Point,
}

impl BoundingBox {
	pub fn new(min: Point, max: Point) -> Self {
		Self {
			min,
			max,
		}
	}

	/// Whether the point lies inside or on the edge of the envelope.
	pub fn contains(&self, point: &Point) -> bool {
		(self.min.longitude..=self.max.longitude).contains(&point.longitude)
			&& (self.min.latitude..=self.max.latitude).contains(&point.latitude)
	}

	/// Whether two envelopes share at least one point.
	pub fn overlaps(&self, other: &BoundingBox) -> bool {
		self.min.longitude <= other.max.longitude
			&& other.min.longitude <= self.max.longitude
			&& self.min.latitude <= other.max.latitude
			&& other.min.latitude <= self.max.latitude
	}
}

impl From<geo_types::Rect<f64>> for BoundingBox {
	fn from(v: geo_types::Rect<f64>) -> Self {
		Self::new(v.min().into(), v.max().into())
	}
}
