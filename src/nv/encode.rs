use crate::nv::container::{Container, NvData};
use crate::nv::value::{Record, Value};
use crate::nv::width::{IntWidth, KeyWidths};
use crate::nv::{NvError, Result};

/// Runtime limits and width configuration for record encoding.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
	/// Maximum recursive record nesting depth.
	pub max_depth: u32,
	/// Key-to-width table consulted for plain integers.
	pub widths: KeyWidths,
}

impl Default for EncodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 32,
			widths: KeyWidths::default(),
		}
	}
}

/// Encode a record into a freshly allocated container.
///
/// Walks pairs in insertion order and dispatches each to the scalar, array,
/// or nested-record path. Any failure aborts the whole encode; everything
/// built so far is released when the partial container drops.
pub fn encode_record(record: &Record, opt: &EncodeOptions) -> Result<Container> {
	encode_record_impl(record, opt, 0)
}

/// Encode a single (key, value) pair into an existing container.
pub fn encode_field(list: &mut Container, key: &str, value: &Value, opt: &EncodeOptions) -> Result<()> {
	encode_field_impl(list, key, value, opt, 0)
}

fn encode_record_impl(record: &Record, opt: &EncodeOptions, depth: u32) -> Result<Container> {
	if depth >= opt.max_depth {
		return Err(NvError::DepthExceeded { max_depth: opt.max_depth });
	}

	let mut list = Container::new();
	for pair in record.iter() {
		encode_field_impl(&mut list, &pair.key, &pair.value, opt, depth)?;
	}
	Ok(list)
}

fn encode_field_impl(list: &mut Container, key: &str, value: &Value, opt: &EncodeOptions, depth: u32) -> Result<()> {
	// Reject bad keys before building any payload for the field.
	if key.is_empty() || key.contains('\0') {
		return Err(NvError::InvalidKey { key: key.to_owned() });
	}

	let data = match value {
		Value::Record(child) => NvData::List(encode_record_impl(child, opt, depth + 1)?),
		Value::Array(elems) => encode_array(key, elems, opt, depth)?,
		Value::Absent => NvData::Boolean,
		Value::Bool(flag) => NvData::BooleanValue(*flag),
		Value::Str(text) => NvData::Str(text.clone()),
		Value::Int(plain) => opt.widths.resolve(key).scalar(key, *plain)?,
		Value::Byte(v) => NvData::Byte(*v),
		Value::Int8(v) => NvData::Int8(*v),
		Value::Uint8(v) => NvData::Uint8(*v),
		Value::Int16(v) => NvData::Int16(*v),
		Value::Uint16(v) => NvData::Uint16(*v),
		Value::Int32(v) => NvData::Int32(*v),
		Value::Uint32(v) => NvData::Uint32(*v),
		Value::Int64(v) => NvData::Int64(*v),
		Value::Uint64(v) => NvData::Uint64(*v),
	};
	list.push(key, data)
}

fn encode_array(key: &str, elems: &[Value], opt: &EncodeOptions, depth: u32) -> Result<NvData> {
	let Some(specimen) = elems.first() else {
		return Err(NvError::EmptyArray { key: key.to_owned() });
	};

	check_homogeneity(key, specimen, elems)?;

	if specimen.is_int() {
		// Explicit tag on the specimen wins over the key-width table.
		let width = IntWidth::of_value(specimen).unwrap_or_else(|| opt.widths.resolve(key));
		let mut ints = Vec::with_capacity(elems.len());
		for (index, elem) in elems.iter().enumerate() {
			let Some(plain) = elem.as_int() else {
				return Err(mismatch(key, specimen, elem, index));
			};
			ints.push(plain);
		}
		return width.array(key, &ints);
	}

	match specimen {
		Value::Record(_) => {
			let mut children = Vec::with_capacity(elems.len());
			for (index, elem) in elems.iter().enumerate() {
				let Value::Record(child) = elem else {
					return Err(mismatch(key, specimen, elem, index));
				};
				children.push(encode_record_impl(child, opt, depth + 1)?);
			}
			Ok(NvData::ListArray(children))
		}
		Value::Str(_) => {
			let mut texts = Vec::with_capacity(elems.len());
			for (index, elem) in elems.iter().enumerate() {
				let Value::Str(text) = elem else {
					return Err(mismatch(key, specimen, elem, index));
				};
				texts.push(text.clone());
			}
			Ok(NvData::StrArray(texts))
		}
		Value::Bool(_) => {
			let mut flags = Vec::with_capacity(elems.len());
			for (index, elem) in elems.iter().enumerate() {
				let Value::Bool(flag) = elem else {
					return Err(mismatch(key, specimen, elem, index));
				};
				flags.push(*flag);
			}
			Ok(NvData::BooleanArray(flags))
		}
		// Absent has no array form; nested arrays are not representable.
		_ => Err(NvError::UnsupportedArrayElem {
			key: key.to_owned(),
			kind: specimen.kind(),
		}),
	}
}

/// Validate element kinds against the specimen before anything is built.
///
/// Any two integer-family widths are interchangeable; every other kind must
/// match the specimen exactly.
fn check_homogeneity(key: &str, specimen: &Value, elems: &[Value]) -> Result<()> {
	for (index, elem) in elems.iter().enumerate().skip(1) {
		let compatible = if specimen.is_int() {
			elem.is_int()
		} else {
			elem.kind() == specimen.kind()
		};
		if !compatible {
			return Err(mismatch(key, specimen, elem, index));
		}
	}
	Ok(())
}

fn mismatch(key: &str, specimen: &Value, elem: &Value, index: usize) -> NvError {
	NvError::HeterogeneousArray {
		key: key.to_owned(),
		specimen: specimen.kind(),
		offending: elem.kind(),
		index,
	}
}
