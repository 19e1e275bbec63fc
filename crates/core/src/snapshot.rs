use arrayvec::ArrayVec;

use crate::types::{Piece, QUEUE_CAPACITY, STACK_CAPACITY};

/// Copy of both containers, for renderers and JSON output.
///
/// `queue` is front to back, `stack` is top to base.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SupplySnapshot {
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    pub stack: ArrayVec<Piece, STACK_CAPACITY>,
    pub next_id: u32,
}

impl SupplySnapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.stack.clear();
        self.next_id = 0;
    }

    pub fn queue_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.queue.iter().map(|p| p.id)
    }

    pub fn stack_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.stack.iter().map(|p| p.id)
    }
}
