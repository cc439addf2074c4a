/// Container entry dump command.
pub mod inspect;
/// Encode-then-decode command.
pub mod roundtrip;
/// Shared CLI helpers.
pub mod util;
/// Key-width resolution command.
pub mod width;
