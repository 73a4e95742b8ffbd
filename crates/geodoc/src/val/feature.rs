use std::fmt;

use serde_json::{Map, Number, Value as JsonValue};

use crate::eq;
use crate::val::Geometry;

/// The identifier of a feature. Identifiers are compared by their string form, so the string
/// `"1"` and the number `1` identify the same feature.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum FeatureId {
	String(String),
	Number(Number),
}

impl fmt::Display for FeatureId {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			FeatureId::String(v) => f.write_str(v),
			FeatureId::Number(v) => write!(f, "{v}"),
		}
	}
}

impl From<&str> for FeatureId {
	fn from(v: &str) -> Self {
		FeatureId::String(v.to_owned())
	}
}

impl From<String> for FeatureId {
	fn from(v: String) -> Self {
		FeatureId::String(v)
	}
}

impl From<i64> for FeatureId {
	fn from(v: i64) -> Self {
		FeatureId::Number(v.into())
	}
}

impl From<u64> for FeatureId {
	fn from(v: u64) -> Self {
		FeatureId::Number(v.into())
	}
}

/// A geometry wrapped with an identifier and an opaque property mapping.
#[derive(Clone, Debug, Default)]
pub struct Feature {
	pub geometry: Option<Box<Geometry>>,
	pub id: Option<FeatureId>,
	pub properties: Option<Map<String, JsonValue>>,
}

impl Feature {
	pub fn new(geometry: impl Into<Geometry>) -> Self {
		Self {
			geometry: Some(Box::new(geometry.into())),
			..Self::default()
		}
	}

	pub fn with_id(mut self, id: impl Into<FeatureId>) -> Self {
		self.id = Some(id.into());
		self
	}

	pub fn with_properties(mut self, properties: Map<String, JsonValue>) -> Self {
		self.properties = Some(properties);
		self
	}

	pub fn geometry(&self) -> Option<&Geometry> {
		self.geometry.as_deref()
	}

	/// The identifier in the string form used for comparison.
	pub fn id_string(&self) -> Option<String> {
		self.id.as_ref().map(FeatureId::to_string)
	}
}

impl PartialEq for Feature {
	fn eq(&self, other: &Self) -> bool {
		eq::feature(self, other)
	}
}

/// An unordered group of features.
#[derive(Clone, Debug, Default)]
pub struct FeatureCollection(pub Vec<Feature>);

impl FeatureCollection {
	pub fn new(features: Vec<Feature>) -> Self {
		Self(features)
	}

	pub fn features(&self) -> &[Feature] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl PartialEq for FeatureCollection {
	fn eq(&self, other: &Self) -> bool {
		eq::feature_collection(self, other)
	}
}

impl FromIterator<Feature> for FeatureCollection {
	fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}
