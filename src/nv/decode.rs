use crate::nv::container::{Container, Entry, NvData};
use crate::nv::value::{Record, Value};
use crate::nv::{NvError, Result, Tag};

/// Runtime limits for container decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum recursive container nesting depth.
	pub max_depth: u32,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self { max_depth: 32 }
	}
}

/// Decode a container into a fresh record.
///
/// Walks entries in storage order, classifies each as array or scalar by its
/// tag, and converts the payload into the value domain. On any failure
/// nothing is handed to the caller (discard-all-on-error).
pub fn decode_record(list: &Container, opt: &DecodeOptions) -> Result<Record> {
	decode_record_impl(list, opt, 0)
}

/// Decode a container into `record`, fully replacing its contents.
///
/// Decode always replaces, never merges. On error the target record is left
/// untouched.
pub fn decode_into(record: &mut Record, list: &Container, opt: &DecodeOptions) -> Result<()> {
	*record = decode_record_impl(list, opt, 0)?;
	Ok(())
}

fn decode_record_impl(list: &Container, opt: &DecodeOptions, depth: u32) -> Result<Record> {
	if depth >= opt.max_depth {
		return Err(NvError::DepthExceeded { max_depth: opt.max_depth });
	}

	let mut record = Record::new();
	for entry in list.entries() {
		let value = if entry.tag().is_array() {
			decode_array_entry(entry, opt, depth)?
		} else {
			decode_scalar_entry(entry, opt, depth)?
		};
		record.insert(entry.name(), value);
	}
	Ok(record)
}

fn decode_scalar_entry(entry: &Entry, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	match (entry.tag(), entry.data()) {
		// A plain boolean tag is the presence marker: present but valueless,
		// deliberately distinct from BooleanValue's explicit payload.
		(Tag::Boolean, NvData::Boolean) => Ok(Value::Absent),
		(Tag::BooleanValue, NvData::BooleanValue(flag)) => Ok(Value::Bool(*flag)),
		(Tag::Byte, NvData::Byte(v)) => Ok(Value::Byte(*v)),
		(Tag::Int8, NvData::Int8(v)) => Ok(Value::Int8(*v)),
		(Tag::Uint8, NvData::Uint8(v)) => Ok(Value::Uint8(*v)),
		(Tag::Int16, NvData::Int16(v)) => Ok(Value::Int16(*v)),
		(Tag::Uint16, NvData::Uint16(v)) => Ok(Value::Uint16(*v)),
		(Tag::Int32, NvData::Int32(v)) => Ok(Value::Int32(*v)),
		(Tag::Uint32, NvData::Uint32(v)) => Ok(Value::Uint32(*v)),
		(Tag::Int64, NvData::Int64(v)) => Ok(Value::Int64(*v)),
		(Tag::Uint64, NvData::Uint64(v)) => Ok(Value::Uint64(*v)),
		(Tag::Str, NvData::Str(text)) => Ok(Value::Str(text.clone())),
		(Tag::List, NvData::List(sub)) => Ok(Value::Record(decode_record_impl(sub, opt, depth + 1)?)),
		(_, data) => Err(corrupt(entry, data)),
	}
}

fn decode_array_entry(entry: &Entry, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	let elems = match (entry.tag(), entry.data()) {
		(Tag::BooleanArray, NvData::BooleanArray(v)) => v.iter().map(|flag| Value::Bool(*flag)).collect(),
		(Tag::ByteArray, NvData::ByteArray(v)) => v.iter().map(|item| Value::Byte(*item)).collect(),
		(Tag::Int8Array, NvData::Int8Array(v)) => v.iter().map(|item| Value::Int8(*item)).collect(),
		(Tag::Uint8Array, NvData::Uint8Array(v)) => v.iter().map(|item| Value::Uint8(*item)).collect(),
		(Tag::Int16Array, NvData::Int16Array(v)) => v.iter().map(|item| Value::Int16(*item)).collect(),
		(Tag::Uint16Array, NvData::Uint16Array(v)) => v.iter().map(|item| Value::Uint16(*item)).collect(),
		(Tag::Int32Array, NvData::Int32Array(v)) => v.iter().map(|item| Value::Int32(*item)).collect(),
		(Tag::Uint32Array, NvData::Uint32Array(v)) => v.iter().map(|item| Value::Uint32(*item)).collect(),
		(Tag::Int64Array, NvData::Int64Array(v)) => v.iter().map(|item| Value::Int64(*item)).collect(),
		(Tag::Uint64Array, NvData::Uint64Array(v)) => v.iter().map(|item| Value::Uint64(*item)).collect(),
		(Tag::StrArray, NvData::StrArray(v)) => v.iter().map(|text| Value::Str(text.clone())).collect(),
		(Tag::ListArray, NvData::ListArray(lists)) => {
			let mut out = Vec::with_capacity(lists.len());
			for sub in lists {
				out.push(Value::Record(decode_record_impl(sub, opt, depth + 1)?));
			}
			out
		}
		(_, data) => return Err(corrupt(entry, data)),
	};
	Ok(Value::Array(elems))
}

fn corrupt(entry: &Entry, stored: &NvData) -> NvError {
	NvError::WireCorruption {
		name: entry.name().to_owned(),
		claimed: entry.tag().suffix(),
		stored: stored.tag().suffix(),
	}
}
