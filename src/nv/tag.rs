/// Wire type tag carried by every container entry.
///
/// The set is closed: it mirrors the native property subsystem's data types,
/// one scalar tag per storage shape plus an array variant for each payload
///-carrying scalar. `Boolean` is the presence-only marker and has no scalar
/// payload; `BooleanArray` elements are full boolean values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
	/// Presence-only marker, no payload.
	Boolean,
	/// Boolean with an explicit true/false payload.
	BooleanValue,
	/// Unsigned 8-bit byte, distinct from `Int8`/`Uint8`.
	Byte,
	/// Signed 8-bit integer.
	Int8,
	/// Unsigned 8-bit integer.
	Uint8,
	/// Signed 16-bit integer.
	Int16,
	/// Unsigned 16-bit integer.
	Uint16,
	/// Signed 32-bit integer.
	Int32,
	/// Unsigned 32-bit integer.
	Uint32,
	/// Signed 64-bit integer.
	Int64,
	/// Unsigned 64-bit integer.
	Uint64,
	/// NUL-free string.
	Str,
	/// Nested container.
	List,
	/// Array of boolean values.
	BooleanArray,
	/// Array of bytes.
	ByteArray,
	/// Array of signed 8-bit integers.
	Int8Array,
	/// Array of unsigned 8-bit integers.
	Uint8Array,
	/// Array of signed 16-bit integers.
	Int16Array,
	/// Array of unsigned 16-bit integers.
	Uint16Array,
	/// Array of signed 32-bit integers.
	Int32Array,
	/// Array of unsigned 32-bit integers.
	Uint32Array,
	/// Array of signed 64-bit integers.
	Int64Array,
	/// Array of unsigned 64-bit integers.
	Uint64Array,
	/// Array of NUL-free strings.
	StrArray,
	/// Array of nested containers.
	ListArray,
}

impl Tag {
	/// Wire-encoding suffix, matching the native accessor/mutator naming.
	pub fn suffix(self) -> &'static str {
		match self {
			Tag::Boolean => "boolean",
			Tag::BooleanValue => "boolean_value",
			Tag::Byte => "byte",
			Tag::Int8 => "int8",
			Tag::Uint8 => "uint8",
			Tag::Int16 => "int16",
			Tag::Uint16 => "uint16",
			Tag::Int32 => "int32",
			Tag::Uint32 => "uint32",
			Tag::Int64 => "int64",
			Tag::Uint64 => "uint64",
			Tag::Str => "string",
			Tag::List => "nvlist",
			Tag::BooleanArray => "boolean_array",
			Tag::ByteArray => "byte_array",
			Tag::Int8Array => "int8_array",
			Tag::Uint8Array => "uint8_array",
			Tag::Int16Array => "int16_array",
			Tag::Uint16Array => "uint16_array",
			Tag::Int32Array => "int32_array",
			Tag::Uint32Array => "uint32_array",
			Tag::Int64Array => "int64_array",
			Tag::Uint64Array => "uint64_array",
			Tag::StrArray => "string_array",
			Tag::ListArray => "nvlist_array",
		}
	}

	/// Whether the tag's storage shape is an array.
	pub fn is_array(self) -> bool {
		matches!(
			self,
			Tag::BooleanArray
				| Tag::ByteArray
				| Tag::Int8Array
				| Tag::Uint8Array
				| Tag::Int16Array
				| Tag::Uint16Array
				| Tag::Int32Array
				| Tag::Uint32Array
				| Tag::Int64Array
				| Tag::Uint64Array
				| Tag::StrArray
				| Tag::ListArray
		)
	}

	/// Scalar tag corresponding to an array tag, or the tag itself.
	pub fn element(self) -> Tag {
		match self {
			Tag::BooleanArray => Tag::BooleanValue,
			Tag::ByteArray => Tag::Byte,
			Tag::Int8Array => Tag::Int8,
			Tag::Uint8Array => Tag::Uint8,
			Tag::Int16Array => Tag::Int16,
			Tag::Uint16Array => Tag::Uint16,
			Tag::Int32Array => Tag::Int32,
			Tag::Uint32Array => Tag::Uint32,
			Tag::Int64Array => Tag::Int64,
			Tag::Uint64Array => Tag::Uint64,
			Tag::StrArray => Tag::Str,
			Tag::ListArray => Tag::List,
			other => other,
		}
	}
}
