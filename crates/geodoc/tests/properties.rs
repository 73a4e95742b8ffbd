use geodoc::val::Node;
use geodoc::vld::LineViolation;
use geodoc::{Depth, Error, Geometry, GeometryKind, InvalidReason, Linear};
use serde_json::{Value as JsonValue, json};
use test_log::test;

fn parse(value: JsonValue) -> Geometry {
	Geometry::from_geojson(&value).unwrap()
}

fn point(x: f64, y: f64) -> JsonValue {
	json!({ "type": "Point", "coordinates": [x, y] })
}

fn line(points: &[[f64; 2]]) -> JsonValue {
	json!({ "type": "LineString", "coordinates": points })
}

fn ring(x: f64, y: f64, size: f64) -> JsonValue {
	json!([[x, y], [x + size, y], [x + size, y + size], [x, y + size], [x, y]])
}

fn polygon(rings: Vec<JsonValue>) -> JsonValue {
	json!({ "type": "Polygon", "coordinates": rings })
}

fn collection(members: Vec<JsonValue>) -> JsonValue {
	json!({ "type": "GeometryCollection", "geometries": members })
}

fn feature(id: JsonValue, geometry: JsonValue) -> JsonValue {
	json!({ "type": "Feature", "id": id, "geometry": geometry, "properties": { "source": "survey" } })
}

fn feature_collection(features: Vec<JsonValue>) -> JsonValue {
	json!({ "type": "FeatureCollection", "features": features })
}

fn documents() -> Vec<Geometry> {
	vec![
		parse(point(1.0, 2.0)),
		parse(json!({ "type": "MultiPoint", "coordinates": [[1.0, 2.0], [3.0, 4.0]] })),
		parse(line(&[[0.0, 0.0], [1.0, 1.0]])),
		parse(json!({ "type": "MultiLineString", "coordinates": [[[0.0, 0.0], [1.0, 1.0]]] })),
		parse(polygon(vec![ring(0.0, 0.0, 4.0), ring(1.0, 1.0, 1.0)])),
		parse(json!({ "type": "MultiPolygon", "coordinates": [[ring(0.0, 0.0, 1.0)]] })),
		parse(collection(vec![point(1.0, 2.0), line(&[[0.0, 0.0], [1.0, 1.0]])])),
		parse(feature(json!(1), point(1.0, 2.0))),
		parse(feature_collection(vec![feature(json!("a"), point(1.0, 2.0))])),
		parse(collection(vec![])),
		parse(json!({ "type": "GeometryCollection" })),
	]
}

#[test]
fn documents_cover_every_kind() {
	let kinds: Vec<_> = documents().iter().map(Geometry::kind).collect();
	for kind in GeometryKind::ALL {
		assert!(kinds.contains(&kind), "{kind} is not covered");
	}
}

#[test]
fn equality_is_reflexive_and_symmetric() {
	let documents = documents();
	for a in &documents {
		assert_eq!(a, a);
		for b in &documents {
			assert_eq!(a == b, b == a, "{a} and {b}");
		}
	}
}

#[test]
fn line_order_matters_but_multi_point_order_does_not() {
	let forward = parse(line(&[[0.0, 0.0], [1.0, 1.0]]));
	let backward = parse(line(&[[1.0, 1.0], [0.0, 0.0]]));
	assert_ne!(forward, backward);
	let a = parse(json!({ "type": "MultiPoint", "coordinates": [[0.0, 0.0], [1.0, 1.0]] }));
	let b = parse(json!({ "type": "MultiPoint", "coordinates": [[1.0, 1.0], [0.0, 0.0]] }));
	assert_eq!(a, b);
}

#[test]
fn polygon_ring_policies() {
	let outer = ring(0.0, 0.0, 10.0);
	let reversed: Vec<JsonValue> = outer.as_array().unwrap().iter().rev().cloned().collect();
	let holes = [ring(1.0, 1.0, 1.0), ring(5.0, 5.0, 1.0)];
	let a = parse(polygon(vec![outer.clone(), holes[0].clone(), holes[1].clone()]));
	let swapped = parse(polygon(vec![outer.clone(), holes[1].clone(), holes[0].clone()]));
	let turned = parse(polygon(vec![json!(reversed), holes[0].clone(), holes[1].clone()]));
	assert_eq!(a, swapped);
	assert_ne!(a, turned);
}

#[test]
fn absent_and_empty_collections() {
	let absent = parse(json!({ "type": "GeometryCollection" }));
	let empty = parse(collection(vec![]));
	let one = parse(collection(vec![point(0.0, 0.0)]));
	assert_eq!(absent, parse(json!({ "type": "GeometryCollection", "geometries": null })));
	assert_eq!(empty, parse(collection(vec![])));
	assert_ne!(absent, empty);
	assert_ne!(absent, one);
	assert_ne!(empty, one);
	assert!(geodoc::eq::documents_equal(None, None));
	assert!(!geodoc::eq::documents_equal(Some(&absent), None));
}

#[test]
fn linear_extraction() {
	let bare = parse(point(0.0, 0.0));
	assert!(bare.linear_geometries().unwrap().is_empty());

	let single = parse(line(&[[0.0, 0.0], [1.0, 1.0]]));
	let found = single.linear_geometries().unwrap();
	assert_eq!(found.len(), 1);
	assert_eq!(found[0].to_geometry(), single);

	let mixed = parse(collection(vec![
		line(&[[0.0, 0.0], [1.0, 1.0]]),
		polygon(vec![ring(0.0, 0.0, 1.0)]),
	]));
	let found = mixed.linear_geometries().unwrap();
	assert_eq!(found.len(), 1);
	assert!(matches!(found[0], Linear::Line(_)));
	assert_eq!(found[0].lines().len(), 1);
	assert!(found[0].length() > 0.0);

	let closed = mixed.closed_geometries().unwrap();
	assert_eq!(closed.len(), 1);
	assert!(closed[0].contains(&geodoc::Point::new(0.5, 0.5), 0.0));
}

#[test]
fn valid_documents_have_no_diagnostics() {
	let document = parse(collection(vec![
		point(0.0, 0.0),
		line(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]]),
		polygon(vec![ring(0.0, 0.0, 4.0), ring(1.0, 1.0, 1.0)]),
	]));
	assert!(document.invalid_reasons(0.0).unwrap().is_empty());
	assert!(document.is_valid());
}

#[test]
fn diagnostics_are_spliced_in_feature_order() {
	let document = parse(feature_collection(vec![
		feature(json!(1), line(&[[0.0, 0.0]])),
		feature(json!(2), line(&[[0.0, 0.0], [1.0, 1.0], [1.0, 1.0], [2.0, 0.0]])),
	]));
	let records = document.invalid_reasons(0.0).unwrap();
	assert_eq!(
		records,
		vec![
			InvalidReason::Line(vec![LineViolation::TooFewPoints {
				count: 1
			}]),
			InvalidReason::Line(vec![LineViolation::DuplicatePoints {
				index: 1
			}]),
		]
	);
}

#[test]
fn fifty_levels_resolve_under_the_default_budget() {
	let mut value = line(&[[0.0, 0.0], [1.0, 1.0]]);
	for _ in 0..50 {
		value = collection(vec![value]);
	}
	let document = parse(value);
	assert_eq!(document.linear_geometries().unwrap().len(), 1);
	assert!(document.invalid_reasons(0.0).unwrap().is_empty());
	assert_eq!(document, document.clone());

	let shallow = Depth::new(25);
	assert!(matches!(
		Node::Geometry(&document).closed_geometries(shallow),
		Err(Error::NestingDepthExceeded {
			limit: 25
		})
	));
	assert!(matches!(
		document.try_eq(&document, shallow),
		Err(Error::NestingDepthExceeded { .. })
	));
}

#[test]
fn geojson_round_trip_through_serde() {
	for document in documents() {
		let text = serde_json::to_string(&document).unwrap();
		let back: Geometry = serde_json::from_str(&text).unwrap();
		assert_eq!(back, document);
		assert_eq!(back.to_geojson(), document.to_geojson());
	}
}
