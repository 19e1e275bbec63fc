//! Fixed-capacity LIFO stack for reserved pieces.
//!
//! Depth 0 is the top (most recently pushed item).

use arrayvec::ArrayVec;

#[derive(Debug, Clone)]
pub struct ReserveStack<T, const N: usize> {
    items: ArrayVec<T, N>,
}

impl<T, const N: usize> ReserveStack<T, N> {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Push onto the top. Hands the item back if the stack is full.
    pub fn push(&mut self, item: T) -> Result<(), T> {
        self.items.try_push(item).map_err(|e| e.element())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Item `depth` positions below the top.
    pub fn get_from_top(&self, depth: usize) -> Option<&T> {
        let idx = self.items.len().checked_sub(depth + 1)?;
        self.items.get(idx)
    }

    pub fn get_from_top_mut(&mut self, depth: usize) -> Option<&mut T> {
        let idx = self.items.len().checked_sub(depth + 1)?;
        self.items.get_mut(idx)
    }

    /// Top-to-base iterator.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T, const N: usize> Default for ReserveStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
