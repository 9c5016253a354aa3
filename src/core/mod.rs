//! Core building blocks: icon parameters, the fixed platform size tables,
//! and the RGBA resize/padding pipeline. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
pub mod tables;
