//! Pure collaborators consumed by the document model: the geodesic math package and the per-kind
//! validity rules.

pub mod geo;
pub mod rules;
