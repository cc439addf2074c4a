mod container;
mod decode;
mod encode;
mod error;
mod json;
mod scope;
mod tag;
mod value;
mod width;

/// Container, entry, and wire payload types.
pub use container::{Container, Entry, NvData};
/// Container decoding entry points and options.
pub use decode::{DecodeOptions, decode_into, decode_record};
/// Record encoding entry points and options.
pub use encode::{EncodeOptions, encode_field, encode_record};
/// Error and result aliases.
pub use error::{NvError, Result};
/// JSON record notation.
pub use json::{record_from_json, record_to_json};
/// Scoped encode/output helpers.
pub use scope::{with_encoded, with_output};
/// Wire type tags.
pub use tag::Tag;
/// Record and value types.
pub use value::{Pair, Record, Value};
/// Integer width selection and the key-width table.
pub use width::{IntWidth, KeyWidths};
