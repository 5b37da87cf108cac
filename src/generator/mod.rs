mod namespace;

use std::str::FromStr;

pub use namespace::Namespace;

use crate::{NodeId, State, UuidError, UUID};

/// What to build via [`Generator::generate`].
///
/// Versions 2, 5 and beyond are out of scope for this crate; only the
/// time-based, name-based-MD5 and random algorithms are offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generate<'a> {
    /// Time-based (version 1). When `multicast_random` is set, a fresh
    /// synthetic node id is drawn for this call instead of the generator's
    /// discovered (or previously synthesized) one.
    V1 { multicast_random: bool },
    /// Name-based, MD5 (version 3).
    V3 { namespace: Namespace, name: &'a str },
    /// Random (version 4).
    V4,
}

/// Owns the mutable state a version-1 generator needs between calls: the
/// last sampled tick, the running clock sequence and the node id this
/// generator presents.
///
/// There is no global, process-wide generator: callers construct their own
/// and are responsible for its lifetime. `Generator` is `Send` but not
/// `Sync` — it holds its state by value rather than behind a lock, so two
/// threads sharing one instance would race on `last_ticks`/`seq`. Give each
/// thread, or each logical producer, its own `Generator`.
#[derive(Debug, Clone)]
pub struct Generator {
    state: State,
}

impl Generator {
    /// Creates a generator, preferring a real IEEE 802 address for its node
    /// id and falling back to a synthetic, randomly-generated one when none
    /// can be discovered (no `mac-address` feature, or no network
    /// interface).
    #[must_use]
    pub fn new() -> Self {
        let node_id = NodeId::discover().unwrap_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!("no IEEE 802 address discovered; synthesizing a random node id");

            NodeId::random()
        });

        Self {
            state: State {
                node_id,
                ..State::default()
            },
        }
    }

    /// The node id this generator presents in version-1 identifiers, unless
    /// overridden per-call via [`Generate::V1::multicast_random`].
    #[must_use]
    pub const fn node_id(&self) -> NodeId {
        self.state.node_id
    }

    /// Mints a new UUID according to `what`.
    ///
    /// # Errors
    ///
    /// Version 1 propagates [`UuidError::SystemError`] if the system clock
    /// cannot be converted to an RFC 4122 timestamp or refuses to advance
    /// within the generator's retry budget (see [`State::next`]).
    #[allow(clippy::cast_possible_truncation)]
    pub fn generate(&mut self, what: Generate<'_>) -> Result<UUID, UuidError> {
        match what {
            Generate::V1 { multicast_random } => {
                let node_id = if multicast_random {
                    NodeId::random()
                } else {
                    self.state.node_id
                };

                let (ticks, clock_seq) = self.state.next()?;

                let time_low = (ticks & 0xFFFF_FFFF) as u32;
                let time_mid = ((ticks >> 32) & 0xFFFF) as u16;
                let time_hi = ((ticks >> 48) & 0x0FFF) as u16;

                Ok(UUID::from_parts_v1(
                    time_low,
                    time_mid,
                    time_hi,
                    clock_seq,
                    node_id.bytes,
                ))
            }
            Generate::V3 { namespace, name } => Ok(UUID::new_v3(&namespace.uuid(), name)),
            Generate::V4 => Ok(UUID::gen_v4()),
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Namespace {
    type Err = crate::UuidParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dns" => Ok(Self::Dns),
            "url" => Ok(Self::Url),
            "oid" => Ok(Self::Oid),
            "x500" | "x.500" => Ok(Self::X500),
            _ => UUID::from_str(s).map(Self::Custom),
        }
    }
}
