//! Typed geometry documents: points, line strings, polygons, their multi variants, collections
//! and features, nested to any depth.
//!
//! Three read-only traversals work over a document:
//!
//! - extraction of every leaf geometry with a given capability, see
//!   [`Geometry::coordinates_geometries`], [`Geometry::linear_geometries`] and
//!   [`Geometry::closed_geometries`];
//! - structural equality, see [`Geometry::try_eq`] and the [`PartialEq`] impls;
//! - validity diagnostics, see [`Geometry::invalid_reasons`].
//!
//! Every traversal is bounded by a nesting [`Depth`] budget, configured through
//! `GEODOC_MAX_NESTING_DEPTH`.

#[macro_use]
mod mac;

pub mod cnf;
pub mod eq;
pub mod err;
mod ext;
pub mod fnc;
pub mod json;
pub mod val;
pub mod vld;

pub use self::err::Error;
pub use self::fnc::rules::{GeodesicRules, ValidityRules};
pub use self::val::{
	BoundingBox, Capability, Closed, Depth, Feature, FeatureCollection, FeatureId, Geometry,
	GeometryCollection, GeometryKind, LineString, Linear, MultiLineString, MultiPoint,
	MultiPolygon, Node, Point, Polygon, Segment,
};
pub use self::vld::InvalidReason;
