use std::sync::LazyLock;

/// Specifies how many nested collections, features and feature collections a traversal will
/// walk through before a [`NestingDepthExceeded`](crate::err::Error::NestingDepthExceeded) error
/// is returned.
pub static MAX_NESTING_DEPTH: LazyLock<u32> = lazy_env_parse!("GEODOC_MAX_NESTING_DEPTH", u32, 120);

/// The tolerance, in metres, used by [`Geometry::is_valid`](crate::val::Geometry::is_valid).
pub static DEFAULT_TOLERANCE: LazyLock<f64> = lazy_env_parse!("GEODOC_DEFAULT_TOLERANCE", f64, 0.0);
