use crate::nv::Result;
use crate::nv::container::Container;
use crate::nv::decode::{DecodeOptions, decode_into};
use crate::nv::encode::{EncodeOptions, encode_record};
use crate::nv::value::Record;

/// Encode `record` and lend the finished container to `f` for a bounded
/// scope.
///
/// The container lives exactly as long as the scope: it is released when
/// this function returns, whether `f` succeeded or failed. Nested containers
/// built during the encode are owned by their parent and released with it.
pub fn with_encoded<T>(record: &Record, opt: &EncodeOptions, f: impl FnOnce(&Container) -> Result<T>) -> Result<T> {
	let list = encode_record(record, opt)?;
	f(&list)
}

/// Lend an empty output slot to `f` and decode whatever it produced into
/// `record`.
///
/// The slot starts unfilled; an external producer running inside `f` may
/// fill it with a container. On normal exit with a filled slot the record is
/// cleared and repopulated from the container, which is then released. If
/// `f` fails, or never fills the slot, the record is left untouched;
/// whatever did end up in the slot is still released exactly once.
pub fn with_output<T>(
	record: &mut Record,
	opt: &DecodeOptions,
	f: impl FnOnce(&mut Option<Container>) -> Result<T>,
) -> Result<T> {
	let mut slot: Option<Container> = None;
	let out = f(&mut slot)?;
	if let Some(list) = slot {
		decode_into(record, &list, opt)?;
	}
	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::{with_encoded, with_output};
	use crate::nv::container::NvData;
	use crate::nv::decode::DecodeOptions;
	use crate::nv::encode::{EncodeOptions, encode_record};
	use crate::nv::{NvError, Record, Tag, Value};

	#[test]
	fn encoded_scope_lends_finished_container() {
		let mut record = Record::new();
		record.insert("name", "tank/fs");
		record.insert("debug", Value::Absent);

		let seen = with_encoded(&record, &EncodeOptions::default(), |list| {
			assert_eq!(list.get("debug").map(|entry| entry.tag()), Some(Tag::Boolean));
			Ok(list.len())
		})
		.expect("scope succeeds");
		assert_eq!(seen, 2);
	}

	#[test]
	fn encoded_scope_propagates_scope_body_error() {
		let record = Record::new();
		let result: crate::nv::Result<()> = with_encoded(&record, &EncodeOptions::default(), |_| {
			Err(NvError::InvalidJson {
				detail: "scope body failed".to_owned(),
			})
		});
		assert!(matches!(result, Err(NvError::InvalidJson { .. })));
	}

	#[test]
	fn output_scope_replaces_prior_record_contents() {
		let mut produced = Record::new();
		produced.insert("x", 1_i128);
		let list = encode_record(&produced, &EncodeOptions::default()).expect("encode fixture");

		let mut target = Record::new();
		target.insert("stale", "gone");

		with_output(&mut target, &DecodeOptions::default(), |slot| {
			*slot = Some(list);
			Ok(())
		})
		.expect("scope succeeds");

		assert_eq!(target.get("stale"), None);
		assert_eq!(target.get("x"), Some(&Value::Uint64(1)));
	}

	#[test]
	fn output_scope_with_unfilled_slot_leaves_record_alone() {
		let mut target = Record::new();
		target.insert("kept", true);

		with_output(&mut target, &DecodeOptions::default(), |_| Ok(())).expect("scope succeeds");
		assert_eq!(target.get("kept"), Some(&Value::Bool(true)));
	}

	#[test]
	fn output_scope_error_leaves_record_alone() {
		let mut target = Record::new();
		target.insert("kept", true);

		let mut filled = crate::nv::Container::new();
		filled.push("x", NvData::Uint64(1)).expect("push");

		let result: crate::nv::Result<()> = with_output(&mut target, &DecodeOptions::default(), |slot| {
			*slot = Some(filled);
			Err(NvError::InvalidJson {
				detail: "producer failed".to_owned(),
			})
		});

		assert!(result.is_err());
		assert_eq!(target.get("kept"), Some(&Value::Bool(true)));
		assert_eq!(target.len(), 1);
	}
}
