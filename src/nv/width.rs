use crate::nv::container::NvData;
use crate::nv::value::Value;
use crate::nv::{NvError, Result};

/// Integer wire width and signedness.
///
/// Selected from a value's explicit tag when it has one, otherwise from the
/// key-width table. `Byte` is the native unsigned-char shape, distinct from
/// `Int8`/`Uint8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
	/// Unsigned 8-bit byte.
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
}

impl IntWidth {
	/// Wire-encoding suffix for the width.
	pub fn suffix(self) -> &'static str {
		match self {
			IntWidth::Byte => "byte",
			IntWidth::Int8 => "int8",
			IntWidth::Uint8 => "uint8",
			IntWidth::Int16 => "int16",
			IntWidth::Uint16 => "uint16",
			IntWidth::Int32 => "int32",
			IntWidth::Uint32 => "uint32",
			IntWidth::Int64 => "int64",
			IntWidth::Uint64 => "uint64",
		}
	}

	/// Explicit width carried by a value's tag, if any.
	///
	/// Plain `Int` carries none; its width comes from the key-width table.
	pub fn of_value(value: &Value) -> Option<IntWidth> {
		match value {
			Value::Byte(_) => Some(IntWidth::Byte),
			Value::Int8(_) => Some(IntWidth::Int8),
			Value::Uint8(_) => Some(IntWidth::Uint8),
			Value::Int16(_) => Some(IntWidth::Int16),
			Value::Uint16(_) => Some(IntWidth::Uint16),
			Value::Int32(_) => Some(IntWidth::Int32),
			Value::Uint32(_) => Some(IntWidth::Uint32),
			Value::Int64(_) => Some(IntWidth::Int64),
			Value::Uint64(_) => Some(IntWidth::Uint64),
			_ => None,
		}
	}

	/// Convert a widened integer into a scalar payload of this width.
	pub fn scalar(self, key: &str, value: i128) -> Result<NvData> {
		let out_of_range = |width: &'static str| NvError::IntOutOfRange {
			key: key.to_owned(),
			value,
			width,
		};
		Ok(match self {
			IntWidth::Byte => NvData::Byte(u8::try_from(value).map_err(|_| out_of_range("byte"))?),
			IntWidth::Int8 => NvData::Int8(i8::try_from(value).map_err(|_| out_of_range("int8"))?),
			IntWidth::Uint8 => NvData::Uint8(u8::try_from(value).map_err(|_| out_of_range("uint8"))?),
			IntWidth::Int16 => NvData::Int16(i16::try_from(value).map_err(|_| out_of_range("int16"))?),
			IntWidth::Uint16 => NvData::Uint16(u16::try_from(value).map_err(|_| out_of_range("uint16"))?),
			IntWidth::Int32 => NvData::Int32(i32::try_from(value).map_err(|_| out_of_range("int32"))?),
			IntWidth::Uint32 => NvData::Uint32(u32::try_from(value).map_err(|_| out_of_range("uint32"))?),
			IntWidth::Int64 => NvData::Int64(i64::try_from(value).map_err(|_| out_of_range("int64"))?),
			IntWidth::Uint64 => NvData::Uint64(u64::try_from(value).map_err(|_| out_of_range("uint64"))?),
		})
	}

	/// Convert widened integers into an array payload of this width.
	pub fn array(self, key: &str, values: &[i128]) -> Result<NvData> {
		fn collect<T: TryFrom<i128>>(key: &str, values: &[i128], width: &'static str) -> Result<Vec<T>> {
			values
				.iter()
				.map(|value| {
					T::try_from(*value).map_err(|_| NvError::IntOutOfRange {
						key: key.to_owned(),
						value: *value,
						width,
					})
				})
				.collect()
		}

		Ok(match self {
			IntWidth::Byte => NvData::ByteArray(collect(key, values, "byte")?),
			IntWidth::Int8 => NvData::Int8Array(collect(key, values, "int8")?),
			IntWidth::Uint8 => NvData::Uint8Array(collect(key, values, "uint8")?),
			IntWidth::Int16 => NvData::Int16Array(collect(key, values, "int16")?),
			IntWidth::Uint16 => NvData::Uint16Array(collect(key, values, "uint16")?),
			IntWidth::Int32 => NvData::Int32Array(collect(key, values, "int32")?),
			IntWidth::Uint32 => NvData::Uint32Array(collect(key, values, "uint32")?),
			IntWidth::Int64 => NvData::Int64Array(collect(key, values, "int64")?),
			IntWidth::Uint64 => NvData::Uint64Array(collect(key, values, "uint64")?),
		})
	}
}

/// Immutable key-to-width table for plain (untagged) integers.
///
/// The fixed set of well-known property names that require a non-default
/// wire width; any key not listed encodes as unsigned 64-bit.
#[derive(Debug, Clone)]
pub struct KeyWidths {
	entries: Vec<(String, IntWidth)>,
}

impl Default for KeyWidths {
	fn default() -> Self {
		Self::from_pairs([
			("rewind-request", IntWidth::Uint32),
			("type", IntWidth::Uint32),
			("N_MORE_ERRORS", IntWidth::Int32),
			("pool_context", IntWidth::Int32),
		])
	}
}

impl KeyWidths {
	/// Table with no entries; every key resolves to the default width.
	pub fn empty() -> Self {
		Self { entries: Vec::new() }
	}

	/// Build a table from explicit (key, width) pairs.
	pub fn from_pairs<K: Into<String>>(pairs: impl IntoIterator<Item = (K, IntWidth)>) -> Self {
		Self {
			entries: pairs.into_iter().map(|(key, width)| (key.into(), width)).collect(),
		}
	}

	/// Width for `key`, defaulting to unsigned 64-bit.
	pub fn resolve(&self, key: &str) -> IntWidth {
		self.entries
			.iter()
			.find(|(name, _)| name == key)
			.map(|(_, width)| *width)
			.unwrap_or(IntWidth::Uint64)
	}
}
