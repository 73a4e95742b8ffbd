//! Capability-based extraction of the leaf geometries of a document.
//!
//! Each extractor walks the object geometries of a node. A member with the wanted capability is
//! kept and never decomposed. A member that carries coordinates without the capability is
//! skipped. Any other member is a collection kind and is walked in turn. Results keep
//! declaration order, depth first.

use tracing::trace;

use crate::err::Error;
use crate::val::{Capability, Closed, Depth, Geometry, Linear, Node};

const TARGET: &str = "geodoc::ext";

fn extract<'a>(
	node: Node<'a>,
	capability: Capability,
	depth: Depth,
	out: &mut Vec<&'a Geometry>,
) -> Result<(), Error> {
	for member in node.geometries() {
		let caps = member.kind().capabilities();
		match member {
			Node::Geometry(geometry) if caps.has(capability) => out.push(geometry),
			_ if caps.coordinates => {}
			_ => extract(member, capability, depth.dive()?, out)?,
		}
	}
	Ok(())
}

fn run<'a>(
	node: Node<'a>,
	capability: Capability,
	depth: Depth,
) -> Result<Vec<&'a Geometry>, Error> {
	trace!(target: TARGET, kind = %node.kind(), ?capability, "Extracting geometries");
	let mut out = Vec::new();
	extract(node, capability, depth, &mut out)?;
	Ok(out)
}

impl<'a> Node<'a> {
	/// Every geometry holding raw coordinates, see [`Geometry::coordinates_geometries`].
	pub fn coordinates_geometries(self, depth: Depth) -> Result<Vec<&'a Geometry>, Error> {
		run(self, Capability::Coordinates, depth)
	}

	/// Every line string and multi line string, see [`Geometry::linear_geometries`].
	pub fn linear_geometries(self, depth: Depth) -> Result<Vec<Linear<'a>>, Error> {
		Ok(run(self, Capability::Linear, depth)?.into_iter().filter_map(Geometry::as_linear).collect())
	}

	/// Every polygon and multi polygon, see [`Geometry::closed_geometries`].
	pub fn closed_geometries(self, depth: Depth) -> Result<Vec<Closed<'a>>, Error> {
		Ok(run(self, Capability::Closed, depth)?.into_iter().filter_map(Geometry::as_closed).collect())
	}
}

impl Geometry {
	/// Every geometry of the document that holds raw coordinates.
	///
	/// A coordinate geometry yields itself. Fails only when the document nests deeper than
	/// [`MAX_NESTING_DEPTH`](crate::cnf::MAX_NESTING_DEPTH).
	pub fn coordinates_geometries(&self) -> Result<Vec<&Geometry>, Error> {
		Node::Geometry(self).coordinates_geometries(Depth::default())
	}

	/// Every line string and multi line string of the document.
	pub fn linear_geometries(&self) -> Result<Vec<Linear<'_>>, Error> {
		Node::Geometry(self).linear_geometries(Depth::default())
	}

	/// Every polygon and multi polygon of the document.
	pub fn closed_geometries(&self) -> Result<Vec<Closed<'_>>, Error> {
		Node::Geometry(self).closed_geometries(Depth::default())
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;
	use crate::val::tests::sample;
	use crate::val::{
		Feature, FeatureCollection, GeometryCollection, GeometryKind, LineString, Point, Polygon,
	};

	fn kinds(v: &[&Geometry]) -> Vec<GeometryKind> {
		v.iter().map(|g| g.kind()).collect()
	}

	#[rstest]
	#[case::point(GeometryKind::Point, 1, 0, 0)]
	#[case::multi_point(GeometryKind::MultiPoint, 1, 0, 0)]
	#[case::line(GeometryKind::LineString, 1, 1, 0)]
	#[case::multi_line(GeometryKind::MultiLineString, 1, 1, 0)]
	#[case::polygon(GeometryKind::Polygon, 1, 0, 1)]
	#[case::multi_polygon(GeometryKind::MultiPolygon, 1, 0, 1)]
	#[case::collection(GeometryKind::GeometryCollection, 2, 1, 0)]
	#[case::feature(GeometryKind::Feature, 1, 1, 0)]
	#[case::feature_collection(GeometryKind::FeatureCollection, 2, 0, 1)]
	fn extraction_per_kind(
		#[case] kind: GeometryKind,
		#[case] coordinates: usize,
		#[case] linear: usize,
		#[case] closed: usize,
	) {
		let geometry = sample(kind);
		assert_eq!(geometry.coordinates_geometries().unwrap().len(), coordinates);
		assert_eq!(geometry.linear_geometries().unwrap().len(), linear);
		assert_eq!(geometry.closed_geometries().unwrap().len(), closed);
	}

	#[test]
	fn line_string_yields_itself() {
		let geometry = sample(GeometryKind::LineString);
		let linear = geometry.linear_geometries().unwrap();
		assert_eq!(linear.len(), 1);
		let Geometry::Line(expected) = &geometry else {
			unreachable!()
		};
		assert!(matches!(linear[0], Linear::Line(v) if std::ptr::eq(v, expected)));
	}

	#[test]
	fn collection_keeps_only_linear_members() {
		let square = Polygon::new(
			LineString::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
			vec![],
		);
		let line = LineString::from(vec![(5.0, 5.0), (6.0, 6.0)]);
		let geometry = Geometry::from(GeometryCollection::new(vec![line.clone().into(), square.into()]));
		let linear = geometry.linear_geometries().unwrap();
		assert_eq!(linear.len(), 1);
		assert!(matches!(linear[0], Linear::Line(v) if *v == line));
	}

	#[test]
	fn nested_members_keep_declaration_order() {
		let inner = GeometryCollection::new(vec![
			Point::new(2.0, 2.0).into(),
			Feature::new(Point::new(3.0, 3.0)).into(),
		]);
		let geometry = Geometry::from(GeometryCollection::new(vec![
			Point::new(1.0, 1.0).into(),
			inner.into(),
			FeatureCollection::new(vec![Feature::new(Point::new(4.0, 4.0)), Feature::default()]).into(),
			Point::new(5.0, 5.0).into(),
		]));
		let found = geometry.coordinates_geometries().unwrap();
		assert_eq!(kinds(&found), vec![GeometryKind::Point; 5]);
		let xs: Vec<f64> = found
			.iter()
			.map(|g| match g {
				Geometry::Point(p) => p.longitude,
				_ => unreachable!(),
			})
			.collect();
		assert_eq!(xs, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
	}

	#[test]
	fn absent_members_yield_nothing() {
		let geometry = Geometry::from(GeometryCollection::absent());
		assert!(geometry.coordinates_geometries().unwrap().is_empty());
		assert!(geometry.linear_geometries().unwrap().is_empty());
		assert!(geometry.closed_geometries().unwrap().is_empty());
	}

	#[test]
	fn deep_nesting_fails_closed() {
		let mut geometry = Geometry::from(Point::new(0.0, 0.0));
		for _ in 0..50 {
			geometry = GeometryCollection::new(vec![geometry]).into();
		}
		let found = Node::Geometry(&geometry).coordinates_geometries(Depth::new(64)).unwrap();
		assert_eq!(found.len(), 1);
		let result = Node::Geometry(&geometry).linear_geometries(Depth::new(10));
		assert!(matches!(
			result,
			Err(Error::NestingDepthExceeded {
				limit: 10
			})
		));
	}
}
