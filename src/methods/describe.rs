use std::fmt::Write as _;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::{Gregorian, NodeId, Variant, UUID};

impl UUID {
    /// Renders a multi-line, human-readable description of this identifier.
    ///
    /// Every UUID gets its canonical string, variant and (if recognizable)
    /// version. Version 1 identifiers additionally get their embedded
    /// timestamp decoded back to a UTC instant, their clock sequence, and
    /// their node id annotated as local/global and unicast/multicast.
    /// Version 3 reports `[not decipherable]` (the name is one-way hashed
    /// away); version 4 reports `[no semantics]`. Identifiers with an
    /// unrecognized variant or version get only the header lines — this
    /// never panics, regardless of what bytes the UUID holds.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "uuid    = {self}");
        let _ = writeln!(out, "variant = {}", describe_variant(self.variant()));

        if self.variant() != Variant::OSF {
            return out;
        }

        match self.version() {
            Some(1) => {
                let _ = writeln!(out, "version = 1 (time-based)");
                describe_v1(self, &mut out);
            }
            Some(3) => {
                let _ = writeln!(out, "version = 3 (name-based, MD5)");
                let _ = writeln!(out, "content = [not decipherable]");
            }
            Some(4) => {
                let _ = writeln!(out, "version = 4 (random)");
                let _ = writeln!(out, "content = [no semantics]");
            }
            Some(other) => {
                let _ = writeln!(out, "version = {other} (unrecognized)");
            }
            None => {}
        }

        out
    }
}

const fn describe_variant(variant: Variant) -> &'static str {
    match variant {
        Variant::Ncs => "0.. (reserved, NCS backward compatibility)",
        Variant::OSF => "10. (DCE 1.1, ISO/IEC 11578:1996)",
        Variant::DCOM => "110 (reserved, Microsoft Corporation backward compatibility)",
        Variant::Reserved => "111 (reserved for future definition)",
    }
}

/// Rebuilds the 60-bit tick count embedded in a version-1 UUID's timestamp
/// fields, masking away the version nibble stored in the high bits.
const fn reconstruct_ticks(bytes: &[u8; 16]) -> u64 {
    let time_low = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as u64;
    let time_mid = u16::from_be_bytes([bytes[4], bytes[5]]) as u64;
    let time_hi = (u16::from_be_bytes([bytes[6], bytes[7]]) & 0x0FFF) as u64;

    time_low | (time_mid << 32) | (time_hi << 48)
}

fn describe_v1(uuid: &UUID, out: &mut String) {
    let ticks = reconstruct_ticks(&uuid.bytes);
    let secs = ticks / 10_000_000;
    let nanos = (ticks % 10_000_000) * 100;

    let timestamp = Gregorian::epoch() + Duration::new(secs, u32::try_from(nanos).unwrap_or(0));
    let utc: DateTime<Utc> = timestamp.into();

    let _ = writeln!(out, "time    = {}", utc.to_rfc3339());

    if let Some(clock_seq) = uuid.clock_seq() {
        let _ = writeln!(out, "clkseq  = 0x{clock_seq:04x}");
    }

    let node = NodeId::from_bytes([
        uuid.bytes[10],
        uuid.bytes[11],
        uuid.bytes[12],
        uuid.bytes[13],
        uuid.bytes[14],
        uuid.bytes[15],
    ]);

    let scope = if node.is_multicast() {
        "multicast"
    } else {
        "unicast"
    };
    let origin = if node.is_local() {
        "locally administered"
    } else {
        "globally unique"
    };

    let _ = writeln!(
        out,
        "node    = {node:02x?} ({scope}, {origin})",
        node = node.bytes
    );
}
