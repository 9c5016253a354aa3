//! I/O layer: the source logo reader and PNG writers for icon outputs.
pub mod source;
pub use source::load_rgba;

pub mod writers;
