//! Public library API for marshalling records to and from nvlist containers.

/// Record/value model, nvlist containers, and the encode/decode codecs.
pub mod nv;
