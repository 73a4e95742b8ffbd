use thiserror::Error;

/// An error originating from walking, decoding, or encoding a geometry document.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
	/// Reached excessive nesting depth due to collections, features, or feature collections
	#[error("Reached excessive nesting depth of {limit} while walking the document")]
	NestingDepthExceeded {
		limit: u32,
	},

	/// The GeoJSON document has an unexpected shape
	#[error("Invalid GeoJSON: {0}")]
	InvalidGeoJson(String),

	/// The GeoJSON `type` member names a kind outside the supported set
	#[error("Unknown GeoJSON type '{0}'")]
	UnknownGeometryType(String),

	/// A required GeoJSON member is missing
	#[error("The {kind} object is missing its '{member}' member")]
	MissingMember {
		kind: &'static str,
		member: &'static str,
	},

	/// A position is not an array of two or three finite numbers
	#[error("Invalid coordinates: {0}")]
	InvalidCoordinates(String),

	/// The document text could not be parsed as JSON
	#[error("There was a problem parsing the JSON text: {0}")]
	Json(#[from] serde_json::Error),
}
