//! Fixed-capacity slot storage with an explicit length.
//!
//! All slots are allocated up front. `clear` only resets the length, so
//! stale values stay in their slots but are never exposed.

use labkit_core::{LabError, LabResult};

#[derive(Debug, Clone)]
pub struct FixedArena<T> {
    slots: Box<[T]>,
    len: usize,
}

impl<T: Clone + Default> FixedArena<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![T::default(); capacity].into_boxed_slice(),
            len: 0,
        }
    }
}

impl<T> FixedArena<T> {
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots[..self.len]
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Append at the end; fails when full.
    pub fn push(&mut self, value: T) -> LabResult<()> {
        if self.is_full() {
            return Err(LabError::TableFull(self.capacity()));
        }
        self.slots[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Append at the end. When full, shift every slot one place toward the
    /// front first, dropping the oldest value, and return it.
    pub fn push_evicting(&mut self, value: T) -> Option<T> {
        let cap = self.capacity();
        if cap == 0 {
            return None;
        }
        if self.len < cap {
            self.slots[self.len] = value;
            self.len += 1;
            return None;
        }
        self.slots.rotate_left(1);
        Some(std::mem::replace(&mut self.slots[cap - 1], value))
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut arena: FixedArena<u8> = FixedArena::new(2);
        arena.push(1).unwrap();
        arena.push(2).unwrap();
        assert!(arena.is_full());
        assert_eq!(arena.push(3), Err(LabError::TableFull(2)));
        assert_eq!(arena.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_push_evicting_drops_oldest() {
        let mut arena: FixedArena<u8> = FixedArena::new(3);
        for v in 1..=3 {
            assert_eq!(arena.push_evicting(v), None);
        }
        assert_eq!(arena.push_evicting(4), Some(1));
        assert_eq!(arena.as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut arena: FixedArena<u8> = FixedArena::new(4);
        arena.push(9).unwrap();
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.capacity(), 4);
        assert_eq!(arena.get(0), None);
        arena.push(7).unwrap();
        assert_eq!(arena.as_slice(), &[7]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut arena: FixedArena<u8> = FixedArena::new(0);
        assert_eq!(arena.push_evicting(1), None);
        assert!(arena.is_empty());
        assert!(arena.push(1).is_err());
    }
}
