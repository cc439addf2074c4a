use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, NvError>;

/// Errors produced while encoding records into nvlist containers and
/// decoding containers back into records.
#[derive(Debug, Error)]
pub enum NvError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Record key is empty or contains a NUL byte.
	#[error("invalid key {key:?}")]
	InvalidKey {
		/// Offending key text.
		key: String,
	},
	/// String value contains an interior NUL byte.
	#[error("string value for key {key:?} contains NUL")]
	NulInString {
		/// Key whose value was rejected.
		key: String,
	},
	/// String array element contains an interior NUL byte.
	#[error("string array element {index} for key {key:?} contains NUL")]
	NulInStringElem {
		/// Key whose value was rejected.
		key: String,
		/// Offending element index.
		index: usize,
	},
	/// Zero-length arrays have no wire representation.
	#[error("empty array for key {key:?}: omit the key instead")]
	EmptyArray {
		/// Key whose value was rejected.
		key: String,
	},
	/// Array specimen kind has no array wire form.
	#[error("array for key {key:?} has unsupported element kind {kind}")]
	UnsupportedArrayElem {
		/// Key whose value was rejected.
		key: String,
		/// Logical kind of the specimen.
		kind: &'static str,
	},
	/// Array elements have incompatible concrete kinds.
	#[error("array for key {key:?} mixes {specimen} and {offending} (element {index})")]
	HeterogeneousArray {
		/// Key whose value was rejected.
		key: String,
		/// Logical kind of the first element.
		specimen: &'static str,
		/// Logical kind of the first mismatching element.
		offending: &'static str,
		/// Index of the first mismatching element.
		index: usize,
	},
	/// Integer does not fit the resolved wire width.
	#[error("integer {value} for key {key:?} does not fit {width}")]
	IntOutOfRange {
		/// Key whose value was rejected.
		key: String,
		/// Integer value that failed the range check.
		value: i128,
		/// Wire width suffix the value was coerced to.
		width: &'static str,
	},
	/// Record nesting exceeded the configured limit.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Entry payload does not match its declared type tag.
	#[error("corrupt entry {name:?}: tag claims {claimed}, payload is {stored}")]
	WireCorruption {
		/// Entry name as stored in the container.
		name: String,
		/// Wire suffix of the declared tag.
		claimed: &'static str,
		/// Wire suffix of the stored payload.
		stored: &'static str,
	},
	/// JSON record notation was malformed.
	#[error("invalid record json: {detail}")]
	InvalidJson {
		/// Human-readable rejection reason.
		detail: String,
	},
}
