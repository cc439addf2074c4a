use std::fmt::Display;
use std::path::Path;

use nvrec::nv::{NvData, NvError, Record, Result, record_from_json};

const PREVIEW_ELEMS: usize = 8;

/// Read and parse a JSON record file.
pub(crate) fn load_record(path: &Path) -> Result<Record> {
	let text = std::fs::read_to_string(path)?;
	let json: serde_json::Value = serde_json::from_str(&text).map_err(|err| NvError::InvalidJson {
		detail: format!("{}: {err}", path.display()),
	})?;
	record_from_json(&json)
}

/// Pretty-print a serializable payload to stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: {err}"),
	}
}

/// Short single-line preview of an entry payload.
pub(crate) fn render_data(data: &NvData) -> String {
	match data {
		NvData::Boolean => "-".to_owned(),
		NvData::BooleanValue(flag) => flag.to_string(),
		NvData::Byte(v) => v.to_string(),
		NvData::Int8(v) => v.to_string(),
		NvData::Uint8(v) => v.to_string(),
		NvData::Int16(v) => v.to_string(),
		NvData::Uint16(v) => v.to_string(),
		NvData::Int32(v) => v.to_string(),
		NvData::Uint32(v) => v.to_string(),
		NvData::Int64(v) => v.to_string(),
		NvData::Uint64(v) => v.to_string(),
		NvData::Str(text) => format!("{text:?}"),
		NvData::List(sub) => format!("({} entries)", sub.len()),
		NvData::BooleanArray(v) => join_preview(v),
		NvData::ByteArray(v) => join_preview(v),
		NvData::Int8Array(v) => join_preview(v),
		NvData::Uint8Array(v) => join_preview(v),
		NvData::Int16Array(v) => join_preview(v),
		NvData::Uint16Array(v) => join_preview(v),
		NvData::Int32Array(v) => join_preview(v),
		NvData::Uint32Array(v) => join_preview(v),
		NvData::Int64Array(v) => join_preview(v),
		NvData::Uint64Array(v) => join_preview(v),
		NvData::StrArray(v) => {
			let quoted: Vec<String> = v.iter().map(|text| format!("{text:?}")).collect();
			join_preview(&quoted)
		}
		NvData::ListArray(lists) => format!("[{} containers]", lists.len()),
	}
}

fn join_preview<T: Display>(items: &[T]) -> String {
	let mut out = String::from("[");
	for (index, item) in items.iter().take(PREVIEW_ELEMS).enumerate() {
		if index > 0 {
			out.push_str(", ");
		}
		out.push_str(&item.to_string());
	}
	if items.len() > PREVIEW_ELEMS {
		out.push_str(", ..");
	}
	out.push(']');
	out
}
