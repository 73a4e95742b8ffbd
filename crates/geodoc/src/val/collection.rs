use crate::eq;
use crate::val::Geometry;

/// A heterogeneous group of documents, which may include further collections.
///
/// The member list may be absent, which is distinct from an empty list: two absent lists are
/// equal, two empty lists are equal, but an absent list never equals a present one.
#[derive(Clone, Debug, Default)]
pub struct GeometryCollection(pub Option<Vec<Geometry>>);

impl GeometryCollection {
	pub fn new(geometries: Vec<Geometry>) -> Self {
		Self(Some(geometries))
	}

	/// A collection without a member list.
	pub fn absent() -> Self {
		Self(None)
	}

	pub fn is_absent(&self) -> bool {
		self.0.is_none()
	}

	/// The members, or an empty slice when the list is absent.
	pub fn geometries(&self) -> &[Geometry] {
		self.0.as_deref().unwrap_or(&[])
	}

	pub fn len(&self) -> usize {
		self.geometries().len()
	}

	pub fn is_empty(&self) -> bool {
		self.geometries().is_empty()
	}
}

impl PartialEq for GeometryCollection {
	fn eq(&self, other: &Self) -> bool {
		eq::collection(self, other)
	}
}

impl FromIterator<Geometry> for GeometryCollection {
	fn from_iter<I: IntoIterator<Item = Geometry>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl From<Vec<Geometry>> for GeometryCollection {
	fn from(v: Vec<Geometry>) -> Self {
		Self::new(v)
	}
}
