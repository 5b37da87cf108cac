mod implementations;
mod methods;

use crate::NodeId;

/// The mutable state a version-1 generator carries between calls: the last
/// sampled timestamp, the per-tick sequence counter used to spread several
/// generations within one clock tick, the running clock sequence, and the
/// node id this generator presents.
///
/// This is owned directly by [`crate::Generator`] rather than shared
/// through a global singleton: a generator instance is not safe for
/// concurrent mutation (see the crate's concurrency notes), so its state
/// lives behind `&mut self`, not behind a lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State {
    pub last_ticks: u64,
    pub node_id: NodeId,
    pub seq: u16,
    pub per_tick: u8,
}

/// Number of version-1 identifiers that may be minted within a single
/// 100 ns tick before the generator must stall and resample the clock.
/// Derived from the ratio between the UUID time unit (100 ns) and the
/// typical wall-clock sampling resolution (1 us).
pub const UUIDS_PER_TICK: u8 = 10;
