use serde_json::Value as Json;

use crate::nv::value::{Record, Value};
use crate::nv::{NvError, Result};

/// Build a record from its JSON notation.
///
/// The root must be an object. `null` maps to the presence marker, integer
/// numbers map to plain integers (width resolved later by the key-width
/// table), and width-tagged integers are written as single-key objects such
/// as `{"$uint32": 5}` or `{"$byte": 7}`. Floats have no value-domain
/// counterpart and are rejected.
pub fn record_from_json(json: &Json) -> Result<Record> {
	let Json::Object(map) = json else {
		return Err(invalid(format!("top level must be an object, got {}", json_kind(json))));
	};
	object_to_record(map)
}

/// Render a record in its JSON notation.
///
/// Inverse of [`record_from_json`]: the presence marker renders as `null`
/// and width-tagged integers as their `$suffix` object form. Plain integers
/// outside the JSON number range render as decimal strings.
pub fn record_to_json(record: &Record) -> Json {
	Json::Object(
		record
			.iter()
			.map(|pair| (pair.key.clone(), value_to_json(&pair.value)))
			.collect(),
	)
}

fn object_to_record(map: &serde_json::Map<String, Json>) -> Result<Record> {
	let mut record = Record::new();
	for (key, value) in map {
		record.insert(key.clone(), json_to_value(key, value)?);
	}
	Ok(record)
}

fn json_to_value(key: &str, json: &Json) -> Result<Value> {
	match json {
		Json::Null => Ok(Value::Absent),
		Json::Bool(flag) => Ok(Value::Bool(*flag)),
		Json::String(text) => Ok(Value::Str(text.clone())),
		Json::Number(_) => Ok(Value::Int(json_int(key, json)?)),
		Json::Array(items) => {
			let mut elems = Vec::with_capacity(items.len());
			for item in items {
				elems.push(json_to_value(key, item)?);
			}
			Ok(Value::Array(elems))
		}
		Json::Object(map) => {
			if map.len() == 1 {
				if let Some((tag, payload)) = map.iter().next() {
					if tag.starts_with('$') {
						return tagged_int(key, tag, payload);
					}
				}
			}
			Ok(Value::Record(object_to_record(map)?))
		}
	}
}

fn tagged_int(key: &str, tag: &str, json: &Json) -> Result<Value> {
	let plain = json_int(key, json)?;
	let out_of_range = || invalid(format!("value {plain} for key {key:?} does not fit {tag}"));
	match tag {
		"$byte" => Ok(Value::Byte(u8::try_from(plain).map_err(|_| out_of_range())?)),
		"$int8" => Ok(Value::Int8(i8::try_from(plain).map_err(|_| out_of_range())?)),
		"$uint8" => Ok(Value::Uint8(u8::try_from(plain).map_err(|_| out_of_range())?)),
		"$int16" => Ok(Value::Int16(i16::try_from(plain).map_err(|_| out_of_range())?)),
		"$uint16" => Ok(Value::Uint16(u16::try_from(plain).map_err(|_| out_of_range())?)),
		"$int32" => Ok(Value::Int32(i32::try_from(plain).map_err(|_| out_of_range())?)),
		"$uint32" => Ok(Value::Uint32(u32::try_from(plain).map_err(|_| out_of_range())?)),
		"$int64" => Ok(Value::Int64(i64::try_from(plain).map_err(|_| out_of_range())?)),
		"$uint64" => Ok(Value::Uint64(u64::try_from(plain).map_err(|_| out_of_range())?)),
		_ => Err(invalid(format!("unknown integer tag {tag:?} for key {key:?}"))),
	}
}

fn json_int(key: &str, json: &Json) -> Result<i128> {
	let Json::Number(number) = json else {
		return Err(invalid(format!("expected an integer for key {key:?}, got {}", json_kind(json))));
	};
	if let Some(value) = number.as_i64() {
		return Ok(i128::from(value));
	}
	if let Some(value) = number.as_u64() {
		return Ok(i128::from(value));
	}
	Err(invalid(format!("number {number} for key {key:?} is not an integer")))
}

fn value_to_json(value: &Value) -> Json {
	match value {
		Value::Absent => Json::Null,
		Value::Bool(flag) => Json::from(*flag),
		Value::Byte(v) => tagged("$byte", Json::from(*v)),
		Value::Int(v) => plain_int_to_json(*v),
		Value::Int8(v) => tagged("$int8", Json::from(*v)),
		Value::Uint8(v) => tagged("$uint8", Json::from(*v)),
		Value::Int16(v) => tagged("$int16", Json::from(*v)),
		Value::Uint16(v) => tagged("$uint16", Json::from(*v)),
		Value::Int32(v) => tagged("$int32", Json::from(*v)),
		Value::Uint32(v) => tagged("$uint32", Json::from(*v)),
		Value::Int64(v) => tagged("$int64", Json::from(*v)),
		Value::Uint64(v) => tagged("$uint64", Json::from(*v)),
		Value::Str(text) => Json::from(text.clone()),
		Value::Record(record) => record_to_json(record),
		Value::Array(items) => Json::Array(items.iter().map(value_to_json).collect()),
	}
}

fn plain_int_to_json(value: i128) -> Json {
	if let Ok(small) = i64::try_from(value) {
		return Json::from(small);
	}
	if let Ok(big) = u64::try_from(value) {
		return Json::from(big);
	}
	Json::from(value.to_string())
}

fn tagged(tag: &str, payload: Json) -> Json {
	let mut map = serde_json::Map::with_capacity(1);
	map.insert(tag.to_owned(), payload);
	Json::Object(map)
}

fn json_kind(json: &Json) -> &'static str {
	match json {
		Json::Null => "null",
		Json::Bool(_) => "bool",
		Json::Number(_) => "number",
		Json::String(_) => "string",
		Json::Array(_) => "array",
		Json::Object(_) => "object",
	}
}

fn invalid(detail: String) -> NvError {
	NvError::InvalidJson { detail }
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::{record_from_json, record_to_json};
	use crate::nv::{NvError, Value};

	#[test]
	fn notation_covers_the_value_grammar() {
		let record = record_from_json(&json!({
			"debug": null,
			"force": true,
			"name": "tank/fs",
			"count": 3,
			"type": {"$uint32": 5},
			"child": {"x": 1},
			"hosts": ["a", "b"],
		}))
		.expect("notation parses");

		assert_eq!(record.get("debug"), Some(&Value::Absent));
		assert_eq!(record.get("force"), Some(&Value::Bool(true)));
		assert_eq!(record.get("count"), Some(&Value::Int(3)));
		assert_eq!(record.get("type"), Some(&Value::Uint32(5)));
		assert!(matches!(record.get("child"), Some(Value::Record(_))));
		assert!(matches!(record.get("hosts"), Some(Value::Array(items)) if items.len() == 2));
	}

	#[test]
	fn notation_round_trips() {
		let source = json!({
			"debug": null,
			"count": {"$int32": -7},
			"bytes": [{"$byte": 1}, {"$byte": 2}],
			"child": {"deep": {"x": 1}},
		});

		let record = record_from_json(&source).expect("notation parses");
		let rendered = record_to_json(&record);
		let again = record_from_json(&rendered).expect("rendered notation parses");
		assert_eq!(record, again);
	}

	#[test]
	fn rejects_floats_and_non_object_roots() {
		assert!(matches!(
			record_from_json(&json!({"ratio": 1.5})),
			Err(NvError::InvalidJson { .. })
		));
		assert!(matches!(record_from_json(&json!([1, 2])), Err(NvError::InvalidJson { .. })));
	}

	#[test]
	fn rejects_unknown_and_overflowing_integer_tags() {
		assert!(matches!(
			record_from_json(&json!({"x": {"$float32": 1}})),
			Err(NvError::InvalidJson { .. })
		));
		assert!(matches!(
			record_from_json(&json!({"x": {"$uint8": 300}})),
			Err(NvError::InvalidJson { .. })
		));
	}
}
