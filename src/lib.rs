mod error;
mod features;
mod generator;
mod gregorian;
mod helpers;
mod implementations;
mod methods;
mod node_id;
mod state;
mod variant;

pub use error::{
    error_string, DurationToTicksError, ErrorCode, UuidConstructionError, UuidError,
    UuidParseError,
};
pub use generator::{Generate, Generator, Namespace};
pub use gregorian::Gregorian;
pub use helpers::{md5, to_hex, Md5, ToHex};
pub use node_id::{NodeId, NODE_ID_BYTES};
pub use state::{State, UUIDS_PER_TICK};
pub use variant::Variant;

pub const UUID_BYTES: usize = 16;

/// A 128-bit identifier conforming to DCE 1.1 / ISO/IEC 11578:1996 / RFC 4122.
///
/// Only the octet layout is stored; versions 1, 3 and 4 are the only
/// generators this crate implements (see [`Generator`]), but any
/// well-formed 128-bit value can be packed, unpacked, parsed, formatted,
/// compared and described regardless of which implementation minted it.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UUID {
    bytes: [u8; UUID_BYTES],
}
