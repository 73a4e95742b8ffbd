//! GeoJSON encoding and decoding of documents.
//!
//! Positions are `[longitude, latitude]` or `[longitude, latitude, altitude]`. Members other than
//! the ones a kind needs, such as `bbox`, are ignored on input. A geometry collection without a
//! `geometries` member decodes to an absent member list and encodes back without it.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value as JsonValue, json};
use tracing::debug;

use crate::err::Error;
use crate::val::{
	Depth, Feature, FeatureCollection, FeatureId, Geometry, GeometryCollection, GeometryKind,
	LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

const TARGET: &str = "geodoc::json";

type Object = Map<String, JsonValue>;

// --------------------------------------------------
// Decoding
// --------------------------------------------------

fn array<'a>(value: &'a JsonValue, what: &str) -> Result<&'a Vec<JsonValue>, Error> {
	value.as_array().ok_or_else(|| Error::InvalidCoordinates(format!("expected an array of {what}")))
}

fn member<'a>(
	object: &'a Object,
	kind: GeometryKind,
	member: &'static str,
) -> Result<&'a JsonValue, Error> {
	object.get(member).ok_or(Error::MissingMember {
		kind: kind.as_str(),
		member,
	})
}

fn position(value: &JsonValue) -> Result<Point, Error> {
	let numbers = array(value, "numbers")?
		.iter()
		.map(|v| v.as_f64().filter(|n| n.is_finite()))
		.collect::<Option<Vec<f64>>>()
		.ok_or_else(|| Error::InvalidCoordinates(format!("{value} is not a list of numbers")))?;
	match numbers.as_slice() {
		[longitude, latitude] => Ok(Point::new(*longitude, *latitude)),
		[longitude, latitude, altitude] => Ok(Point::with_altitude(*longitude, *latitude, *altitude)),
		_ => Err(Error::InvalidCoordinates(format!(
			"a position has two or three numbers, found {}",
			numbers.len()
		))),
	}
}

fn positions(value: &JsonValue) -> Result<Vec<Point>, Error> {
	array(value, "positions")?.iter().map(position).collect()
}

fn line(value: &JsonValue) -> Result<LineString, Error> {
	positions(value).map(LineString::new)
}

fn polygon(value: &JsonValue) -> Result<Polygon, Error> {
	let mut rings = array(value, "rings")?.iter().map(line);
	let exterior = match rings.next() {
		Some(ring) => ring?,
		None => return Err(Error::InvalidCoordinates("a polygon needs an outer ring".into())),
	};
	Ok(Polygon::new(exterior, rings.collect::<Result<_, _>>()?))
}

fn feature_id(value: &JsonValue) -> Result<Option<FeatureId>, Error> {
	match value {
		JsonValue::Null => Ok(None),
		JsonValue::String(v) => Ok(Some(FeatureId::String(v.clone()))),
		JsonValue::Number(v) => Ok(Some(FeatureId::Number(v.clone()))),
		v => Err(Error::InvalidGeoJson(format!("a feature id is a string or a number, found {v}"))),
	}
}

fn feature(object: &Object, depth: Depth) -> Result<Feature, Error> {
	let geometry = match member(object, GeometryKind::Feature, "geometry")? {
		JsonValue::Null => None,
		v => Some(Box::new(geometry(v, depth.dive()?)?)),
	};
	let id = object.get("id").map(feature_id).transpose()?.flatten();
	let properties = match object.get("properties") {
		None | Some(JsonValue::Null) => None,
		Some(JsonValue::Object(v)) => Some(v.clone()),
		Some(v) => {
			return Err(Error::InvalidGeoJson(format!(
				"feature properties are an object or null, found {v}"
			)));
		}
	};
	Ok(Feature {
		geometry,
		id,
		properties,
	})
}

fn object(value: &JsonValue) -> Result<(&Object, GeometryKind), Error> {
	let object = value
		.as_object()
		.ok_or_else(|| Error::InvalidGeoJson(format!("expected an object, found {value}")))?;
	let name = object.get("type").and_then(JsonValue::as_str).ok_or(Error::MissingMember {
		kind: "GeoJSON",
		member: "type",
	})?;
	let kind =
		GeometryKind::from_type_name(name).ok_or_else(|| Error::UnknownGeometryType(name.to_owned()))?;
	Ok((object, kind))
}

fn geometry(value: &JsonValue, depth: Depth) -> Result<Geometry, Error> {
	let (object, kind) = object(value)?;
	let coordinates = || member(object, kind, "coordinates");
	Ok(match kind {
		GeometryKind::Point => Geometry::Point(position(coordinates()?)?),
		GeometryKind::MultiPoint => Geometry::MultiPoint(MultiPoint::new(positions(coordinates()?)?)),
		GeometryKind::LineString => Geometry::Line(line(coordinates()?)?),
		GeometryKind::MultiLineString => Geometry::MultiLine(MultiLineString::new(
			array(coordinates()?, "line strings")?.iter().map(line).collect::<Result<_, _>>()?,
		)),
		GeometryKind::Polygon => Geometry::Polygon(polygon(coordinates()?)?),
		GeometryKind::MultiPolygon => Geometry::MultiPolygon(MultiPolygon::new(
			array(coordinates()?, "polygons")?.iter().map(polygon).collect::<Result<_, _>>()?,
		)),
		GeometryKind::GeometryCollection => match object.get("geometries") {
			None | Some(JsonValue::Null) => Geometry::Collection(GeometryCollection::absent()),
			Some(JsonValue::Array(members)) => {
				let depth = depth.dive()?;
				Geometry::Collection(GeometryCollection::new(
					members.iter().map(|v| geometry(v, depth)).collect::<Result<_, _>>()?,
				))
			}
			Some(v) => {
				return Err(Error::InvalidGeoJson(format!(
					"collection geometries are an array, found {v}"
				)));
			}
		},
		GeometryKind::Feature => Geometry::Feature(feature(object, depth)?),
		GeometryKind::FeatureCollection => {
			let members = member(object, kind, "features")?
				.as_array()
				.ok_or_else(|| Error::InvalidGeoJson("features are an array".into()))?;
			let depth = depth.dive()?;
			let features = members
				.iter()
				.map(|v| match self::object(v)? {
					(object, GeometryKind::Feature) => feature(object, depth),
					(_, other) => Err(Error::InvalidGeoJson(format!(
						"a feature collection holds features, found {other}"
					))),
				})
				.collect::<Result<_, _>>()?;
			Geometry::FeatureCollection(FeatureCollection::new(features))
		}
	})
}

/// Decodes a GeoJSON value, failing once nesting runs past the depth budget.
pub fn decode_with(value: &JsonValue, depth: Depth) -> Result<Geometry, Error> {
	geometry(value, depth).inspect_err(|e| debug!(target: TARGET, "Unable to decode GeoJSON: {e}"))
}

/// Decodes a GeoJSON value.
pub fn decode(value: &JsonValue) -> Result<Geometry, Error> {
	decode_with(value, Depth::default())
}

// --------------------------------------------------
// Encoding
// --------------------------------------------------

fn encode_position(v: &Point) -> JsonValue {
	match v.altitude {
		Some(altitude) => json!([v.longitude, v.latitude, altitude]),
		None => json!([v.longitude, v.latitude]),
	}
}

fn encode_positions(v: &[Point]) -> JsonValue {
	v.iter().map(encode_position).collect()
}

fn encode_polygon(v: &Polygon) -> JsonValue {
	v.rings().map(|ring| encode_positions(ring.points())).collect()
}

fn encode_feature(v: &Feature) -> JsonValue {
	let mut object = Object::new();
	object.insert("type".into(), GeometryKind::Feature.as_str().into());
	if let Some(id) = &v.id {
		let id = match id {
			FeatureId::String(v) => JsonValue::String(v.clone()),
			FeatureId::Number(v) => JsonValue::Number(v.clone()),
		};
		object.insert("id".into(), id);
	}
	object.insert("geometry".into(), v.geometry().map_or(JsonValue::Null, encode));
	object.insert(
		"properties".into(),
		v.properties.clone().map_or(JsonValue::Null, JsonValue::Object),
	);
	JsonValue::Object(object)
}

fn coordinates(kind: GeometryKind, coordinates: JsonValue) -> JsonValue {
	json!({ "type": kind.as_str(), "coordinates": coordinates })
}

/// Encodes a document as a GeoJSON value.
pub fn encode(v: &Geometry) -> JsonValue {
	match v {
		Geometry::Point(v) => coordinates(GeometryKind::Point, encode_position(v)),
		Geometry::MultiPoint(v) => coordinates(GeometryKind::MultiPoint, encode_positions(v.points())),
		Geometry::Line(v) => coordinates(GeometryKind::LineString, encode_positions(v.points())),
		Geometry::MultiLine(v) => coordinates(
			GeometryKind::MultiLineString,
			v.lines().iter().map(|l| encode_positions(l.points())).collect(),
		),
		Geometry::Polygon(v) => coordinates(GeometryKind::Polygon, encode_polygon(v)),
		Geometry::MultiPolygon(v) => coordinates(
			GeometryKind::MultiPolygon,
			v.polygons().iter().map(encode_polygon).collect(),
		),
		Geometry::Collection(v) => match &v.0 {
			Some(members) => json!({
				"type": GeometryKind::GeometryCollection.as_str(),
				"geometries": members.iter().map(encode).collect::<Vec<_>>(),
			}),
			None => json!({ "type": GeometryKind::GeometryCollection.as_str() }),
		},
		Geometry::Feature(v) => encode_feature(v),
		Geometry::FeatureCollection(v) => json!({
			"type": GeometryKind::FeatureCollection.as_str(),
			"features": v.features().iter().map(encode_feature).collect::<Vec<_>>(),
		}),
	}
}

impl Geometry {
	pub fn from_geojson(value: &JsonValue) -> Result<Self, Error> {
		decode(value)
	}

	pub fn to_geojson(&self) -> JsonValue {
		encode(self)
	}
}

impl From<&Geometry> for JsonValue {
	fn from(v: &Geometry) -> Self {
		encode(v)
	}
}

impl TryFrom<&JsonValue> for Geometry {
	type Error = Error;

	fn try_from(v: &JsonValue) -> Result<Self, Self::Error> {
		decode(v)
	}
}

impl FromStr for Geometry {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		decode(&serde_json::from_str(s)?)
	}
}

impl fmt::Display for Geometry {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", encode(self))
	}
}

impl Serialize for Geometry {
	fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		encode(self).serialize(s)
	}
}

impl<'de> Deserialize<'de> for Geometry {
	fn deserialize<D>(d: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = JsonValue::deserialize(d)?;
		decode(&value).map_err(D::Error::custom)
	}
}
