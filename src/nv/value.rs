/// Typed value stored under a record key.
///
/// `Int` is a plain integer whose wire width is resolved through the
/// key-width table at encode time; the width-tagged variants pin the wire
/// width explicitly. `Absent` is the presence marker: its mere existence
/// under a key signals boolean truth, with no stored payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Presence-only boolean marker.
	Absent,
	/// Boolean with an explicit payload.
	Bool(bool),
	/// Unsigned 8-bit byte, distinct from `Int8`/`Uint8`.
	Byte(u8),
	/// Plain integer; wire width resolved via the key-width table.
	Int(i128),
	/// Width-tagged signed 8-bit integer.
	Int8(i8),
	/// Width-tagged unsigned 8-bit integer.
	Uint8(u8),
	/// Width-tagged signed 16-bit integer.
	Int16(i16),
	/// Width-tagged unsigned 16-bit integer.
	Uint16(u16),
	/// Width-tagged signed 32-bit integer.
	Int32(i32),
	/// Width-tagged unsigned 32-bit integer.
	Uint32(u32),
	/// Width-tagged signed 64-bit integer.
	Int64(i64),
	/// Width-tagged unsigned 64-bit integer.
	Uint64(u64),
	/// NUL-free string.
	Str(String),
	/// Nested record.
	Record(Record),
	/// Homogeneous ordered sequence of non-array values.
	Array(Vec<Value>),
}

impl Value {
	/// Logical kind label used in error values and homogeneity checks.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Absent => "absent",
			Value::Bool(_) => "bool",
			Value::Byte(_) => "byte",
			Value::Int(_) => "int",
			Value::Int8(_) => "int8",
			Value::Uint8(_) => "uint8",
			Value::Int16(_) => "int16",
			Value::Uint16(_) => "uint16",
			Value::Int32(_) => "int32",
			Value::Uint32(_) => "uint32",
			Value::Int64(_) => "int64",
			Value::Uint64(_) => "uint64",
			Value::Str(_) => "string",
			Value::Record(_) => "record",
			Value::Array(_) => "array",
		}
	}

	/// Whether the value belongs to the integer family.
	///
	/// All integer widths (plain, width-tagged, and `Byte`) are
	/// interchangeable for the array homogeneity rule; only the specimen's
	/// width governs the wire encoding.
	pub fn is_int(&self) -> bool {
		matches!(
			self,
			Value::Byte(_)
				| Value::Int(_)
				| Value::Int8(_)
				| Value::Uint8(_)
				| Value::Int16(_)
				| Value::Uint16(_)
				| Value::Int32(_)
				| Value::Uint32(_)
				| Value::Int64(_)
				| Value::Uint64(_)
		)
	}

	/// Widened integer payload, if the value is in the integer family.
	pub fn as_int(&self) -> Option<i128> {
		match self {
			Value::Byte(v) => Some(i128::from(*v)),
			Value::Int(v) => Some(*v),
			Value::Int8(v) => Some(i128::from(*v)),
			Value::Uint8(v) => Some(i128::from(*v)),
			Value::Int16(v) => Some(i128::from(*v)),
			Value::Uint16(v) => Some(i128::from(*v)),
			Value::Int32(v) => Some(i128::from(*v)),
			Value::Uint32(v) => Some(i128::from(*v)),
			Value::Int64(v) => Some(i128::from(*v)),
			Value::Uint64(v) => Some(i128::from(*v)),
			_ => None,
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Str(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Str(value)
	}
}

impl From<i128> for Value {
	fn from(value: i128) -> Self {
		Value::Int(value)
	}
}

impl From<Record> for Value {
	fn from(value: Record) -> Self {
		Value::Record(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Value::Array(value)
	}
}

/// One (key, value) pair inside a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
	/// Non-empty key, unique within its record.
	pub key: String,
	/// Typed value stored under the key.
	pub value: Value,
}

/// Ordered-insertion mapping from string keys to typed values.
///
/// Keys are unique; inserting under an existing key replaces the value in
/// place without disturbing insertion order. Equality is order-independent
/// over keys (array element order inside values stays significant).
#[derive(Debug, Clone, Default)]
pub struct Record {
	pairs: Vec<Pair>,
}

impl Record {
	/// Create an empty record.
	pub fn new() -> Self {
		Self { pairs: Vec::new() }
	}

	/// Number of pairs.
	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	/// Whether the record holds no pairs.
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	/// Insert or replace the value under `key`, preserving insertion order.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		let key = key.into();
		let value = value.into();
		if let Some(pair) = self.pairs.iter_mut().find(|pair| pair.key == key) {
			pair.value = value;
		} else {
			self.pairs.push(Pair { key, value });
		}
	}

	/// Look up the value under `key`.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.pairs.iter().find(|pair| pair.key == key).map(|pair| &pair.value)
	}

	/// Remove and return the value under `key`.
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		let idx = self.pairs.iter().position(|pair| pair.key == key)?;
		Some(self.pairs.remove(idx).value)
	}

	/// Drop all pairs.
	pub fn clear(&mut self) {
		self.pairs.clear();
	}

	/// Iterate pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &Pair> {
		self.pairs.iter()
	}
}

impl PartialEq for Record {
	fn eq(&self, other: &Self) -> bool {
		self.pairs.len() == other.pairs.len()
			&& self.pairs.iter().all(|pair| other.get(&pair.key) == Some(&pair.value))
	}
}

impl FromIterator<(String, Value)> for Record {
	fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
		let mut record = Record::new();
		for (key, value) in iter {
			record.insert(key, value);
		}
		record
	}
}

#[cfg(test)]
mod tests {
	use super::{Record, Value};

	#[test]
	fn insert_replaces_in_place() {
		let mut record = Record::new();
		record.insert("a", 1_i128);
		record.insert("b", 2_i128);
		record.insert("a", 3_i128);

		assert_eq!(record.len(), 2);
		assert_eq!(record.get("a"), Some(&Value::Int(3)));

		let keys: Vec<_> = record.iter().map(|pair| pair.key.as_str()).collect();
		assert_eq!(keys, ["a", "b"]);
	}

	#[test]
	fn equality_ignores_key_order() {
		let mut left = Record::new();
		left.insert("a", 1_i128);
		left.insert("b", "x");

		let mut right = Record::new();
		right.insert("b", "x");
		right.insert("a", 1_i128);

		assert_eq!(left, right);

		right.insert("a", 2_i128);
		assert_ne!(left, right);
	}

	#[test]
	fn integer_family_classification() {
		assert!(Value::Byte(1).is_int());
		assert!(Value::Int(-4).is_int());
		assert!(Value::Uint64(u64::MAX).is_int());
		assert!(!Value::Bool(true).is_int());
		assert!(!Value::Absent.is_int());
		assert_eq!(Value::Uint64(u64::MAX).as_int(), Some(i128::from(u64::MAX)));
		assert_eq!(Value::Str(String::new()).as_int(), None);
	}
}
