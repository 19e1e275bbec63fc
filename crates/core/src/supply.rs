//! Piece supply - the upcoming queue, the reserve stack, and the moves between them.
//!
//! This module ties together the ring queue, the reserve stack, the id counter
//! and the kind selector. Every operation is a single synchronous transition
//! that either completes or is rejected before touching state.

use std::mem;

use arrayvec::ArrayVec;
use tracing::{debug, warn};

use crate::error::SupplyError;
use crate::ring::RingQueue;
use crate::rng::{KindSelector, SimpleRng};
use crate::snapshot::SupplySnapshot;
use crate::stack::ReserveStack;
use crate::types::{
    Piece, SupplyCommand, QUEUE_CAPACITY, QUEUE_FILL, STACK_CAPACITY, TRIPLE_SWAP_WIDTH,
};

/// Result of the automatic refill that follows a queue removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replenish {
    /// A new piece was generated and appended at the back of the queue.
    Enqueued(Piece),
    /// The queue was already full when the operation started; nothing was generated.
    Rejected(SupplyError),
}

impl Replenish {
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Replenish::Enqueued(piece) => Some(*piece),
            Replenish::Rejected(_) => None,
        }
    }

    pub fn is_enqueued(&self) -> bool {
        matches!(self, Replenish::Enqueued(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Piece removed from the front of the queue.
    pub played: Piece,
    pub replenish: Replenish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveOutcome {
    /// Piece moved from the queue front to the stack top.
    pub reserved: Piece,
    pub replenish: Replenish,
}

/// Pieces at their new locations after a front/top exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapFront {
    pub queue_front: Piece,
    pub stack_top: Piece,
}

/// Pieces at their new locations after a triple exchange.
///
/// `queue_front[i]` is queue position `i` (0 = front) and `stack_top[i]` is
/// stack depth `i` (0 = top).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapReport {
    pub queue_front: [Piece; TRIPLE_SWAP_WIDTH],
    pub stack_top: [Piece; TRIPLE_SWAP_WIDTH],
}

/// Outcome of [`PieceSupply::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Played(PlayOutcome),
    Reserved(ReserveOutcome),
    Used(Piece),
    SwappedFront(SwapFront),
    SwappedTriple(SwapReport),
}

/// Upcoming-piece queue plus reserve stack.
///
/// The id counter is owned by the supply: two supplies never share ids, and
/// [`PieceSupply::initialize`] restarts numbering at 0.
#[derive(Debug, Clone)]
pub struct PieceSupply<S = SimpleRng> {
    queue: RingQueue<Piece, QUEUE_CAPACITY>,
    stack: ReserveStack<Piece, STACK_CAPACITY>,
    next_id: u32,
    selector: S,
}

impl PieceSupply<SimpleRng> {
    /// Create a supply drawing kinds from a seeded [`SimpleRng`].
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<S: KindSelector> PieceSupply<S> {
    /// Create an initialized supply: 5 queued pieces, empty stack.
    pub fn new(selector: S) -> Self {
        let mut supply = Self {
            queue: RingQueue::new(),
            stack: ReserveStack::new(),
            next_id: 0,
            selector,
        };
        supply.initialize();
        supply
    }

    /// Full reset: ids restart at 0, the stack is emptied and the queue is
    /// refilled with [`QUEUE_FILL`] fresh pieces.
    ///
    /// The kind selector is not reset; a reseeded session needs a new supply.
    pub fn initialize(&mut self) {
        self.next_id = 0;
        self.queue.clear();
        self.stack.clear();
        self.top_up(QUEUE_FILL);
        debug!(queue_len = self.queue.len(), "supply initialized");
    }

    /// Generate the next piece. Advances the id counter.
    ///
    /// # Panics
    ///
    /// Ids are `u32`: a supply hands out at most `u32::MAX` pieces between
    /// resets. Generating past that bound would reuse ids, so it panics instead.
    pub fn generate(&mut self) -> Piece {
        let kind = self.selector.select();
        let piece = Piece::new(kind, self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .expect("piece id space exhausted; call initialize() to reset");
        piece
    }

    /// Generate pieces until the queue holds `target` entries (capped at
    /// [`QUEUE_CAPACITY`]). Returns how many pieces were added.
    pub fn top_up(&mut self, target: usize) -> usize {
        let target = target.min(QUEUE_CAPACITY);
        let mut added = 0;
        while self.queue.len() < target {
            let piece = self.generate();
            if self.queue.push_back(piece).is_err() {
                break;
            }
            added += 1;
        }
        added
    }

    /// Remove and return the front piece, then refill the queue.
    ///
    /// The refill is skipped (and reported as [`SupplyError::Full`]) when the
    /// queue was at capacity before the removal; the removal still happens.
    pub fn play(&mut self) -> Result<PlayOutcome, SupplyError> {
        let had_room = !self.queue.is_full();
        let played = self.queue.pop_front().ok_or(SupplyError::Empty)?;
        let replenish = self.replenish(had_room);
        debug!(played = played.id, refill = ?replenish.piece().map(|p| p.id), "play");
        Ok(PlayOutcome { played, replenish })
    }

    /// Move the front piece onto the reserve stack, then refill the queue.
    pub fn reserve(&mut self) -> Result<ReserveOutcome, SupplyError> {
        let reserved = *self.queue.front().ok_or(SupplyError::QueueEmpty)?;
        if self.stack.is_full() {
            return Err(SupplyError::StackFull);
        }

        let had_room = !self.queue.is_full();
        self.stack
            .push(reserved)
            .map_err(|_| SupplyError::StackFull)?;
        self.queue.pop_front();

        let replenish = self.replenish(had_room);
        debug!(reserved = reserved.id, refill = ?replenish.piece().map(|p| p.id), "reserve");
        Ok(ReserveOutcome {
            reserved,
            replenish,
        })
    }

    /// Pop and return the top reserved piece. The stack is not refilled.
    pub fn use_reserved(&mut self) -> Result<Piece, SupplyError> {
        let used = self.stack.pop().ok_or(SupplyError::StackEmpty)?;
        debug!(used = used.id, "use reserved");
        Ok(used)
    }

    /// Exchange the queue front with the stack top in place.
    pub fn swap_front(&mut self) -> Result<SwapFront, SupplyError> {
        let front = self.queue.front_mut().ok_or(SupplyError::QueueEmpty)?;
        let top = self.stack.top_mut().ok_or(SupplyError::StackEmpty)?;
        mem::swap(front, top);

        let report = SwapFront {
            queue_front: *front,
            stack_top: *top,
        };
        debug!(
            queue_front = report.queue_front.id,
            stack_top = report.stack_top.id,
            "swap front"
        );
        Ok(report)
    }

    /// Exchange queue positions 0..3 with stack depths 0..3, index for index.
    ///
    /// The queue length is checked first, so a supply short on both sides
    /// reports [`SupplyError::QueueTooShort`].
    pub fn swap_triple(&mut self) -> Result<SwapReport, SupplyError> {
        let queue_front = self.queue_front_three().ok_or(SupplyError::QueueTooShort)?;
        let stack_top = self.stack_top_three().ok_or(SupplyError::StackTooShort)?;

        for (i, (to_queue, to_stack)) in stack_top.iter().zip(queue_front.iter()).enumerate() {
            if let Some(slot) = self.queue.get_mut(i) {
                *slot = *to_queue;
            }
            if let Some(slot) = self.stack.get_from_top_mut(i) {
                *slot = *to_stack;
            }
        }

        let report = SwapReport {
            queue_front: stack_top,
            stack_top: queue_front,
        };
        debug!(
            queue_front = ?report.queue_front.map(|p| p.id),
            stack_top = ?report.stack_top.map(|p| p.id),
            "swap triple"
        );
        Ok(report)
    }

    /// Dispatch a driver command to the matching operation.
    pub fn apply(&mut self, command: SupplyCommand) -> Result<CommandOutcome, SupplyError> {
        let outcome = match command {
            SupplyCommand::Play => self.play().map(CommandOutcome::Played),
            SupplyCommand::Reserve => self.reserve().map(CommandOutcome::Reserved),
            SupplyCommand::UseReserved => self.use_reserved().map(CommandOutcome::Used),
            SupplyCommand::SwapFront => self.swap_front().map(CommandOutcome::SwappedFront),
            SupplyCommand::SwapTriple => self.swap_triple().map(CommandOutcome::SwappedTriple),
        };
        if let Err(err) = &outcome {
            debug!(command = command.as_str(), %err, "command rejected");
        }
        debug_assert!(self.ids_unique());
        outcome
    }

    fn queue_front_three(&self) -> Option<[Piece; TRIPLE_SWAP_WIDTH]> {
        Some([*self.queue.get(0)?, *self.queue.get(1)?, *self.queue.get(2)?])
    }

    fn stack_top_three(&self) -> Option<[Piece; TRIPLE_SWAP_WIDTH]> {
        Some([
            *self.stack.get_from_top(0)?,
            *self.stack.get_from_top(1)?,
            *self.stack.get_from_top(2)?,
        ])
    }

    fn replenish(&mut self, had_room: bool) -> Replenish {
        if !had_room || self.queue.is_full() {
            warn!(
                queue_len = self.queue.len(),
                "queue saturated, replacement piece not generated"
            );
            return Replenish::Rejected(SupplyError::Full);
        }
        let piece = self.generate();
        match self.queue.push_back(piece) {
            Ok(()) => Replenish::Enqueued(piece),
            Err(_) => Replenish::Rejected(SupplyError::Full),
        }
    }
}

impl<S> PieceSupply<S> {
    /// Queue contents, front to back.
    pub fn queue(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.queue.iter()
    }

    /// Stack contents, top to base.
    pub fn stack(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.stack.iter()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    /// Next piece [`PieceSupply::play`] would remove.
    pub fn front(&self) -> Option<&Piece> {
        self.queue.front()
    }

    /// Next piece [`PieceSupply::use_reserved`] would pop.
    pub fn top(&self) -> Option<&Piece> {
        self.stack.top()
    }

    /// Id the next generated piece will receive.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// True when no id appears twice across queue and stack.
    pub fn ids_unique(&self) -> bool {
        let ids: ArrayVec<u32, { QUEUE_CAPACITY + STACK_CAPACITY }> =
            self.queue().chain(self.stack()).map(|p| p.id).collect();
        ids.iter()
            .enumerate()
            .all(|(i, id)| !ids[i + 1..].contains(id))
    }

    /// Fill a caller-owned snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut SupplySnapshot) {
        out.clear();
        out.queue.extend(self.queue.iter().copied());
        out.stack.extend(self.stack.iter().copied());
        out.next_id = self.next_id;
    }

    pub fn snapshot(&self) -> SupplySnapshot {
        let mut snap = SupplySnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for PieceSupply<SimpleRng> {
    fn default() -> Self {
        Self::new(SimpleRng::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedKinds;
    use crate::types::PieceKind;

    fn scripted() -> PieceSupply<ScriptedKinds> {
        PieceSupply::new(ScriptedKinds::from_letters("IOTL"))
    }

    fn queue_ids<S>(supply: &PieceSupply<S>) -> Vec<u32> {
        supply.queue().map(|p| p.id).collect()
    }

    fn stack_ids<S>(supply: &PieceSupply<S>) -> Vec<u32> {
        supply.stack().map(|p| p.id).collect()
    }

    #[test]
    fn test_initialize() {
        let supply = scripted();
        assert_eq!(supply.queue_len(), 5);
        assert_eq!(supply.stack_len(), 0);
        assert_eq!(queue_ids(&supply), vec![0, 1, 2, 3, 4]);
        assert_eq!(supply.next_id(), 5);

        let kinds: Vec<PieceKind> = supply.queue().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L, PieceKind::I]
        );
    }

    #[test]
    fn test_initialize_again_is_full_reset() {
        let mut supply = scripted();
        supply.play().unwrap();
        supply.reserve().unwrap();
        supply.initialize();

        assert_eq!(queue_ids(&supply), vec![0, 1, 2, 3, 4]);
        assert_eq!(supply.stack_len(), 0);
        assert_eq!(supply.next_id(), 5);
    }

    #[test]
    fn test_generate_advances_ids() {
        let mut supply = scripted();
        let a = supply.generate();
        let b = supply.generate();
        assert_eq!(a.id, 5);
        assert_eq!(b.id, 6);
        assert_eq!(supply.next_id(), 7);
        // Generated pieces are not enqueued.
        assert_eq!(supply.queue_len(), 5);
    }

    #[test]
    fn test_play_replenishes() {
        let mut supply = scripted();
        let outcome = supply.play().unwrap();
        assert_eq!(outcome.played.id, 0);
        assert_eq!(outcome.played.kind, PieceKind::I);
        assert_eq!(outcome.replenish.piece().map(|p| p.id), Some(5));
        assert_eq!(queue_ids(&supply), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_play_on_empty_queue() {
        let mut supply = scripted();
        // No operation drains the queue, so empty the ring directly.
        supply.queue.clear();
        assert_eq!(supply.play(), Err(SupplyError::Empty));
        assert_eq!(supply.next_id(), 5);
    }

    #[test]
    fn test_play_at_capacity_skips_refill() {
        let mut supply = scripted();
        assert_eq!(supply.top_up(QUEUE_CAPACITY), 5);
        assert_eq!(supply.queue_len(), 10);
        let next_id = supply.next_id();

        let outcome = supply.play().unwrap();
        assert_eq!(outcome.played.id, 0);
        assert_eq!(outcome.replenish, Replenish::Rejected(SupplyError::Full));
        assert_eq!(supply.queue_len(), 9);
        assert_eq!(supply.next_id(), next_id);

        // One below capacity the refill works again.
        let outcome = supply.play().unwrap();
        assert!(outcome.replenish.is_enqueued());
        assert_eq!(supply.queue_len(), 9);
    }

    #[test]
    fn test_top_up_is_capped() {
        let mut supply = scripted();
        assert_eq!(supply.top_up(50), 5);
        assert_eq!(supply.queue_len(), QUEUE_CAPACITY);
        assert_eq!(supply.top_up(3), 0);
    }

    #[test]
    fn test_reserve_moves_front_to_stack() {
        let mut supply = scripted();
        supply.play().unwrap();
        let outcome = supply.reserve().unwrap();
        assert_eq!(outcome.reserved.id, 1);
        assert_eq!(outcome.replenish.piece().map(|p| p.id), Some(6));
        assert_eq!(queue_ids(&supply), vec![2, 3, 4, 5, 6]);
        assert_eq!(stack_ids(&supply), vec![1]);
    }

    #[test]
    fn test_reserve_rejects_when_stack_full() {
        let mut supply = scripted();
        for _ in 0..STACK_CAPACITY {
            supply.reserve().unwrap();
        }
        let queue_before = queue_ids(&supply);
        let stack_before = stack_ids(&supply);
        let next_id = supply.next_id();

        assert_eq!(supply.reserve(), Err(SupplyError::StackFull));
        assert_eq!(queue_ids(&supply), queue_before);
        assert_eq!(stack_ids(&supply), stack_before);
        assert_eq!(supply.next_id(), next_id);
    }

    #[test]
    fn test_reserve_reports_queue_empty_first() {
        let mut supply = scripted();
        for _ in 0..STACK_CAPACITY {
            supply.reserve().unwrap();
        }
        supply.queue.clear();
        assert_eq!(supply.reserve(), Err(SupplyError::QueueEmpty));
    }

    #[test]
    fn test_use_reserved_pops_top() {
        let mut supply = scripted();
        assert_eq!(supply.use_reserved(), Err(SupplyError::StackEmpty));

        supply.reserve().unwrap();
        supply.reserve().unwrap();
        assert_eq!(supply.use_reserved().map(|p| p.id), Ok(1));
        assert_eq!(supply.use_reserved().map(|p| p.id), Ok(0));
        assert_eq!(supply.use_reserved(), Err(SupplyError::StackEmpty));
        // Using reserved pieces never touches the queue.
        assert_eq!(supply.queue_len(), 5);
    }

    #[test]
    fn test_swap_front() {
        let mut supply = scripted();
        assert_eq!(supply.swap_front(), Err(SupplyError::StackEmpty));

        supply.reserve().unwrap();
        let before_queue = queue_ids(&supply);
        let report = supply.swap_front().unwrap();
        assert_eq!(report.queue_front.id, 0);
        assert_eq!(report.stack_top.id, before_queue[0]);
        assert_eq!(supply.front().map(|p| p.id), Some(0));
        assert_eq!(supply.queue_len(), 5);
        assert_eq!(supply.stack_len(), 1);

        supply.swap_front().unwrap();
        assert_eq!(queue_ids(&supply), before_queue);
        assert_eq!(stack_ids(&supply), vec![0]);
    }

    #[test]
    fn test_swap_front_on_empty_queue() {
        let mut supply = scripted();
        supply.reserve().unwrap();
        supply.queue.clear();
        assert_eq!(supply.swap_front(), Err(SupplyError::QueueEmpty));
    }

    #[test]
    fn test_swap_triple_preconditions() {
        let mut supply = scripted();
        assert_eq!(supply.swap_triple(), Err(SupplyError::StackTooShort));

        supply.queue.clear();
        assert_eq!(supply.swap_triple(), Err(SupplyError::QueueTooShort));
    }

    #[test]
    fn test_swap_triple_exchanges_index_for_index() {
        let mut supply = scripted();
        for _ in 0..3 {
            supply.reserve().unwrap();
        }
        // queue [3 4 5 6 7], stack top->base [2 1 0]
        assert_eq!(queue_ids(&supply), vec![3, 4, 5, 6, 7]);
        assert_eq!(stack_ids(&supply), vec![2, 1, 0]);

        let report = supply.swap_triple().unwrap();
        assert_eq!(report.queue_front.map(|p| p.id), [2, 1, 0]);
        assert_eq!(report.stack_top.map(|p| p.id), [3, 4, 5]);
        assert_eq!(queue_ids(&supply), vec![2, 1, 0, 6, 7]);
        assert_eq!(stack_ids(&supply), vec![3, 4, 5]);

        supply.swap_triple().unwrap();
        assert_eq!(queue_ids(&supply), vec![3, 4, 5, 6, 7]);
        assert_eq!(stack_ids(&supply), vec![2, 1, 0]);
    }

    #[test]
    fn test_swap_triple_rejection_leaves_state_untouched() {
        let mut supply = scripted();
        supply.reserve().unwrap();
        supply.reserve().unwrap();
        let before = supply.snapshot();
        assert_eq!(supply.swap_triple(), Err(SupplyError::StackTooShort));
        assert_eq!(supply.snapshot(), before);

        supply.queue.clear();
        supply.top_up(2);
        let before = supply.snapshot();
        assert_eq!(supply.swap_triple(), Err(SupplyError::QueueTooShort));
        assert_eq!(supply.snapshot(), before);
    }

    #[test]
    fn test_generate_up_to_last_id() {
        let mut supply = scripted();
        supply.next_id = u32::MAX - 1;
        assert_eq!(supply.generate().id, u32::MAX - 1);
        assert_eq!(supply.next_id(), u32::MAX);
    }

    #[test]
    #[should_panic(expected = "piece id space exhausted")]
    fn test_generate_past_id_space_panics() {
        let mut supply = scripted();
        supply.next_id = u32::MAX;
        supply.generate();
    }

    #[test]
    fn test_swap_triple_across_wraparound() {
        let mut supply = scripted();
        // Advance the ring head so the three front slots straddle the end.
        for _ in 0..6 {
            supply.play().unwrap();
        }
        for _ in 0..3 {
            supply.reserve().unwrap();
        }
        let queue_before = queue_ids(&supply);
        let stack_before = stack_ids(&supply);

        supply.swap_triple().unwrap();
        assert_eq!(&queue_ids(&supply)[..3], &stack_before[..]);
        assert_eq!(stack_ids(&supply), queue_before[..3].to_vec());
        assert!(supply.ids_unique());
    }

    #[test]
    fn test_apply_dispatches() {
        let mut supply = scripted();
        match supply.apply(SupplyCommand::Play) {
            Ok(CommandOutcome::Played(outcome)) => assert_eq!(outcome.played.id, 0),
            other => panic!("unexpected outcome: {:?}", other),
        }
        match supply.apply(SupplyCommand::Reserve) {
            Ok(CommandOutcome::Reserved(outcome)) => assert_eq!(outcome.reserved.id, 1),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(matches!(
            supply.apply(SupplyCommand::SwapFront),
            Ok(CommandOutcome::SwappedFront(_))
        ));
        assert_eq!(
            supply.apply(SupplyCommand::SwapTriple),
            Err(SupplyError::StackTooShort)
        );
        assert!(matches!(
            supply.apply(SupplyCommand::UseReserved),
            Ok(CommandOutcome::Used(_))
        ));
    }

    #[test]
    fn test_seeded_supplies_match() {
        let a = PieceSupply::with_seed(42);
        let b = PieceSupply::with_seed(42);
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_snapshot_lists_stack_top_first() {
        let mut supply = scripted();
        supply.reserve().unwrap();
        supply.reserve().unwrap();

        let snap = supply.snapshot();
        assert_eq!(snap.queue.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3, 4, 5, 6]);
        assert_eq!(snap.stack.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 0]);
        assert_eq!(snap.next_id, 7);
    }
}
