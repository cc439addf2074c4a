use crate::nv::{NvError, Result, Tag};

/// Wire payload union with exact-width storage.
///
/// One variant per payload-carrying tag, plus `Boolean` which carries
/// nothing. This is the container-side twin of [`crate::nv::Value`]: it
/// stores wire shapes (exact widths, no plain integers, no heterogeneity),
/// never domain shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum NvData {
	/// Presence-only marker, no payload.
	Boolean,
	/// Boolean payload.
	BooleanValue(bool),
	/// Unsigned 8-bit byte.
	Byte(u8),
	/// Signed 8-bit integer.
	Int8(i8),
	/// Unsigned 8-bit integer.
	Uint8(u8),
	/// Signed 16-bit integer.
	Int16(i16),
	/// Unsigned 16-bit integer.
	Uint16(u16),
	/// Signed 32-bit integer.
	Int32(i32),
	/// Unsigned 32-bit integer.
	Uint32(u32),
	/// Signed 64-bit integer.
	Int64(i64),
	/// Unsigned 64-bit integer.
	Uint64(u64),
	/// NUL-free string.
	Str(String),
	/// Nested container.
	List(Container),
	/// Boolean array.
	BooleanArray(Vec<bool>),
	/// Byte array.
	ByteArray(Vec<u8>),
	/// Signed 8-bit integer array.
	Int8Array(Vec<i8>),
	/// Unsigned 8-bit integer array.
	Uint8Array(Vec<u8>),
	/// Signed 16-bit integer array.
	Int16Array(Vec<i16>),
	/// Unsigned 16-bit integer array.
	Uint16Array(Vec<u16>),
	/// Signed 32-bit integer array.
	Int32Array(Vec<i32>),
	/// Unsigned 32-bit integer array.
	Uint32Array(Vec<u32>),
	/// Signed 64-bit integer array.
	Int64Array(Vec<i64>),
	/// Unsigned 64-bit integer array.
	Uint64Array(Vec<u64>),
	/// Array of NUL-free strings.
	StrArray(Vec<String>),
	/// Array of nested containers.
	ListArray(Vec<Container>),
}

impl NvData {
	/// Type tag matching the stored payload shape.
	pub fn tag(&self) -> Tag {
		match self {
			NvData::Boolean => Tag::Boolean,
			NvData::BooleanValue(_) => Tag::BooleanValue,
			NvData::Byte(_) => Tag::Byte,
			NvData::Int8(_) => Tag::Int8,
			NvData::Uint8(_) => Tag::Uint8,
			NvData::Int16(_) => Tag::Int16,
			NvData::Uint16(_) => Tag::Uint16,
			NvData::Int32(_) => Tag::Int32,
			NvData::Uint32(_) => Tag::Uint32,
			NvData::Int64(_) => Tag::Int64,
			NvData::Uint64(_) => Tag::Uint64,
			NvData::Str(_) => Tag::Str,
			NvData::List(_) => Tag::List,
			NvData::BooleanArray(_) => Tag::BooleanArray,
			NvData::ByteArray(_) => Tag::ByteArray,
			NvData::Int8Array(_) => Tag::Int8Array,
			NvData::Uint8Array(_) => Tag::Uint8Array,
			NvData::Int16Array(_) => Tag::Int16Array,
			NvData::Uint16Array(_) => Tag::Uint16Array,
			NvData::Int32Array(_) => Tag::Int32Array,
			NvData::Uint32Array(_) => Tag::Uint32Array,
			NvData::Int64Array(_) => Tag::Int64Array,
			NvData::Uint64Array(_) => Tag::Uint64Array,
			NvData::StrArray(_) => Tag::StrArray,
			NvData::ListArray(_) => Tag::ListArray,
		}
	}

	/// Element count for array payloads.
	pub fn array_len(&self) -> Option<usize> {
		match self {
			NvData::BooleanArray(v) => Some(v.len()),
			NvData::ByteArray(v) => Some(v.len()),
			NvData::Int8Array(v) => Some(v.len()),
			NvData::Uint8Array(v) => Some(v.len()),
			NvData::Int16Array(v) => Some(v.len()),
			NvData::Uint16Array(v) => Some(v.len()),
			NvData::Int32Array(v) => Some(v.len()),
			NvData::Uint32Array(v) => Some(v.len()),
			NvData::Int64Array(v) => Some(v.len()),
			NvData::Uint64Array(v) => Some(v.len()),
			NvData::StrArray(v) => Some(v.len()),
			NvData::ListArray(v) => Some(v.len()),
			_ => None,
		}
	}
}

/// One (name, type-tag, payload) triple inside a container.
///
/// The tag is stored separately from the payload so a corrupt producer can
/// be modelled: entries built through [`Container::push`] always agree, but
/// decode never assumes they do.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
	name: String,
	tag: Tag,
	data: NvData,
}

impl Entry {
	/// Entry name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Declared type tag.
	pub fn tag(&self) -> Tag {
		self.tag
	}

	/// Stored payload.
	pub fn data(&self) -> &NvData {
		&self.data
	}
}

/// Append-only ordered sequence of named, type-tagged entries.
///
/// The in-memory stand-in for the native nvlist: entries are appended during
/// encode, walked in storage order during decode, and released when the
/// owning value drops. Attaching a nested container moves it in, so every
/// container has exactly one owner and is released exactly once on every
/// path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
	entries: Vec<Entry>,
}

impl Container {
	/// Create an empty container.
	pub fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the container holds no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Append an entry, replacing any existing entry with the same name.
	///
	/// Validates the name (non-empty, NUL-free) and string payloads
	/// (NUL-free). Nested containers inside `data` are moved in: on success
	/// the parent owns them, on failure they are dropped here. Either way
	/// they are released exactly once.
	pub fn push(&mut self, name: &str, data: NvData) -> Result<()> {
		validate_name(name)?;
		validate_payload(name, &data)?;

		let entry = Entry {
			name: name.to_owned(),
			tag: data.tag(),
			data,
		};
		if let Some(slot) = self.entries.iter_mut().find(|existing| existing.name == name) {
			*slot = entry;
		} else {
			self.entries.push(entry);
		}
		Ok(())
	}

	/// Append an entry with an arbitrary declared tag, skipping validation.
	///
	/// Lets tests model a corrupt producer whose declared tag disagrees with
	/// the stored payload.
	pub fn push_raw_for_test(&mut self, name: &str, tag: Tag, data: NvData) {
		self.entries.push(Entry {
			name: name.to_owned(),
			tag,
			data,
		});
	}

	/// Walk entries in storage order.
	pub fn entries(&self) -> impl Iterator<Item = &Entry> {
		self.entries.iter()
	}

	/// Look up an entry by name.
	pub fn get(&self, name: &str) -> Option<&Entry> {
		self.entries.iter().find(|entry| entry.name == name)
	}
}

fn validate_name(name: &str) -> Result<()> {
	if name.is_empty() || name.contains('\0') {
		return Err(NvError::InvalidKey { key: name.to_owned() });
	}
	Ok(())
}

fn validate_payload(name: &str, data: &NvData) -> Result<()> {
	match data {
		NvData::Str(text) => {
			if text.contains('\0') {
				return Err(NvError::NulInString { key: name.to_owned() });
			}
		}
		NvData::StrArray(texts) => {
			for (index, text) in texts.iter().enumerate() {
				if text.contains('\0') {
					return Err(NvError::NulInStringElem {
						key: name.to_owned(),
						index,
					});
				}
			}
		}
		_ => {}
	}
	Ok(())
}
