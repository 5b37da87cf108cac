use std::str::FromStr;

use crate::{error::UuidParseError, UUID};

const HYPHEN_POS: [usize; 4] = [8, 13, 18, 23];

impl FromStr for UUID {
    type Err = UuidParseError;

    /// Parses the single canonical DCE 1.1 spelling:
    /// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, 36 bytes, hyphens only at
    /// positions 8, 13, 18 and 23. Braces, `urn:uuid:` prefixes and the
    /// 32-hex no-hyphen spelling are deliberately not accepted: this is a
    /// strict grammar, not a lenient one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 36 {
            return Err(UuidParseError::InvalidLength);
        }

        let mut bytes = [0u8; 16];
        let mut byte_i = 0;
        let mut high_nibble: Option<u8> = None;

        for (idx, ch) in s.char_indices() {
            if HYPHEN_POS.contains(&idx) {
                if ch != '-' {
                    return Err(UuidParseError::InvalidHyphenPlacement);
                }
                continue;
            }

            if ch == '-' {
                return Err(UuidParseError::InvalidHyphenPlacement);
            }

            let nibble = match ch {
                '0'..='9' => ch as u8 - b'0',
                'a'..='f' => ch as u8 - b'a' + 10,
                'A'..='F' => ch as u8 - b'A' + 10,
                _ => return Err(UuidParseError::InvalidCharacter { ch, idx }),
            };

            match high_nibble.take() {
                None => high_nibble = Some(nibble),
                Some(hi) => {
                    bytes[byte_i] = (hi << 4) | nibble;
                    byte_i += 1;
                }
            }
        }

        Ok(Self { bytes })
    }
}
