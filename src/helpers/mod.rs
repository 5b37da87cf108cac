mod md5;
mod to_hex;

pub use md5::{md5, Md5};
pub use to_hex::{to_hex, ToHex};
