//! Validity diagnostics collected from every leaf geometry of a document.
//!
//! Points are always valid. Multi points, line strings and polygons are checked by the rules and
//! wrapped when they report anything. Multi line strings and multi polygons always produce one
//! record holding a result per member, even when every member is valid. Collections and features
//! are transparent: their members' records are spliced in place.

use serde::Serialize;
use tracing::{trace, warn};

use crate::cnf::DEFAULT_TOLERANCE;
use crate::err::Error;
use crate::fnc::rules::{GeodesicRules, ValidityRules};
use crate::val::{Depth, Geometry, Node};

const TARGET: &str = "geodoc::vld";

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum MultiPointViolation {
	/// Two points lie within the tolerance of each other.
	Duplicate {
		first: usize,
		second: usize,
	},
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum LineViolation {
	/// A path needs at least two points.
	TooFewPoints {
		count: usize,
	},
	/// Point `index` and the next one lie within the tolerance of each other.
	DuplicatePoints {
		index: usize,
	},
	/// Two non-adjacent segments share a point.
	SelfIntersection {
		first: usize,
		second: usize,
	},
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum PolygonViolation {
	/// A ring needs at least four points. Ring 0 is the outer ring.
	RingTooShort {
		ring: usize,
		count: usize,
	},
	RingNotClosed {
		ring: usize,
	},
	DuplicatePoints {
		ring: usize,
		index: usize,
	},
	SelfIntersection {
		ring: usize,
		first: usize,
		second: usize,
	},
	/// A negative ring reaches outside the outer ring.
	NegativeRingOutside {
		ring: usize,
	},
	/// Two rings cross each other.
	RingsIntersect {
		first: usize,
		second: usize,
	},
}

/// A diagnostic record for one invalid leaf geometry.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "type", content = "reasons")]
pub enum InvalidReason {
	MultiPoint(Vec<MultiPointViolation>),
	#[serde(rename = "LineString")]
	Line(Vec<LineViolation>),
	/// One inner sequence per member line string.
	#[serde(rename = "MultiLineString")]
	MultiLine(Vec<Vec<LineViolation>>),
	Polygon(Vec<PolygonViolation>),
	/// One inner sequence per member polygon.
	MultiPolygon(Vec<Vec<PolygonViolation>>),
}

impl InvalidReason {
	/// Whether the record carries at least one violation. A multi kind record may hold only
	/// empty member results.
	pub fn has_violations(&self) -> bool {
		match self {
			InvalidReason::MultiPoint(v) => !v.is_empty(),
			InvalidReason::Line(v) => !v.is_empty(),
			InvalidReason::MultiLine(v) => v.iter().any(|m| !m.is_empty()),
			InvalidReason::Polygon(v) => !v.is_empty(),
			InvalidReason::MultiPolygon(v) => v.iter().any(|m| !m.is_empty()),
		}
	}
}

fn wrap<T>(reasons: Vec<T>, f: impl FnOnce(Vec<T>) -> InvalidReason) -> Option<InvalidReason> {
	(!reasons.is_empty()).then(|| f(reasons))
}

fn collect<R: ValidityRules + ?Sized>(
	node: Node,
	rules: &R,
	tolerance: f64,
	depth: Depth,
	out: &mut Vec<InvalidReason>,
) -> Result<(), Error> {
	for member in node.geometries() {
		let record = match member {
			Node::Geometry(Geometry::Point(_)) => None,
			Node::Geometry(Geometry::MultiPoint(v)) => {
				wrap(rules.multi_point(v, tolerance), InvalidReason::MultiPoint)
			}
			Node::Geometry(Geometry::Line(v)) => wrap(rules.line(v, tolerance), InvalidReason::Line),
			Node::Geometry(Geometry::MultiLine(v)) => {
				Some(InvalidReason::MultiLine(rules.multi_line(v, tolerance)))
			}
			Node::Geometry(Geometry::Polygon(v)) => {
				wrap(rules.polygon(v, tolerance), InvalidReason::Polygon)
			}
			Node::Geometry(Geometry::MultiPolygon(v)) => {
				Some(InvalidReason::MultiPolygon(rules.multi_polygon(v, tolerance)))
			}
			Node::Geometry(
				Geometry::Collection(_) | Geometry::Feature(_) | Geometry::FeatureCollection(_),
			)
			| Node::Feature(_) => {
				collect(member, rules, tolerance, depth.dive()?, out)?;
				None
			}
		};
		out.extend(record);
	}
	Ok(())
}

impl Node<'_> {
	/// Every diagnostic record of the document, checked by the given rules.
	pub fn invalid_reasons_with<R: ValidityRules + ?Sized>(
		self,
		rules: &R,
		tolerance: f64,
		depth: Depth,
	) -> Result<Vec<InvalidReason>, Error> {
		trace!(target: TARGET, kind = %self.kind(), tolerance, "Collecting invalid reasons");
		let mut out = Vec::new();
		collect(self, rules, tolerance, depth, &mut out)?;
		Ok(out)
	}
}

impl Geometry {
	/// Every diagnostic record of the document, checked by [`GeodesicRules`], in document order.
	/// A valid document yields nothing beyond the per-member records of its multi line strings
	/// and multi polygons.
	pub fn invalid_reasons(&self, tolerance: f64) -> Result<Vec<InvalidReason>, Error> {
		Node::Geometry(self).invalid_reasons_with(&GeodesicRules, tolerance, Depth::default())
	}

	/// Whether no record of the document carries a violation at the
	/// [default tolerance](crate::cnf::DEFAULT_TOLERANCE). A document too deep to check is
	/// reported as invalid.
	pub fn is_valid(&self) -> bool {
		match self.invalid_reasons(*DEFAULT_TOLERANCE) {
			Ok(reasons) => !reasons.iter().any(InvalidReason::has_violations),
			Err(e) => {
				warn!(target: TARGET, "Unable to check validity: {e}");
				false
			}
		}
	}
}
