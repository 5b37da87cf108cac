use rand::random;

use crate::{NodeId, State};

impl Default for State {
    fn default() -> Self {
        Self {
            last_ticks: 0,
            node_id: NodeId::random(),
            seq: random(),
            per_tick: 0,
        }
    }
}
