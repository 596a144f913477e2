// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::err::OutOfRangeError;
use crate::index::NodeIndex;

/// An ordered, mutable sequence backed by a doubly linked chain of
/// arena slots.
///
/// Nodes live in parallel columns (`values`, `next`, `prev`) addressed
/// by [`NodeIndex`]; links are optional slot indices rather than owning
/// pointers, so relinking is plain index surgery. Unlinked slots are
/// recycled through a free list before the arena grows.
///
/// Chain invariants, maintained by every mutating operation:
/// - `head`/`tail` are `None` exactly when `len == 0`.
/// - Walking `next` from `head` visits `len` nodes and ends at `tail`;
///   walking `prev` from `tail` visits them in reverse and ends at `head`.
/// - For every linked node `n`: `prev(n).next == n` and `next(n).prev == n`
///   where the neighbor exists.
/// - The chain is cycle-free and never shares slots between sequences.
#[derive(Clone)]
pub struct DoublyLinkedSequence<T> {
    values: Vec<Option<T>>,
    next: Vec<Option<NodeIndex>>,
    prev: Vec<Option<NodeIndex>>,
    free: Vec<NodeIndex>,
    head: Option<NodeIndex>,
    tail: Option<NodeIndex>,
    len: usize,
}

impl<T> DoublyLinkedSequence<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            next: Vec::new(),
            prev: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            next: Vec::with_capacity(capacity),
            prev: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|n| self.value_of(n))
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|n| self.value_of(n))
    }

    /// Appends `value` at the tail. O(1).
    pub fn push_back(&mut self, value: T) {
        let node = self.alloc(value);
        match self.tail {
            Some(tail) => {
                self.prev[node.get()] = Some(tail);
                self.next[tail.get()] = Some(node);
                self.tail = Some(node);
            }
            None => {
                self.head = Some(node);
                self.tail = Some(node);
            }
        }
        self.len += 1;
    }

    /// Prepends `value` at the head. O(1).
    pub fn push_front(&mut self, value: T) {
        let node = self.alloc(value);
        match self.head {
            Some(head) => {
                self.next[node.get()] = Some(head);
                self.prev[head.get()] = Some(node);
                self.head = Some(node);
            }
            None => {
                self.head = Some(node);
                self.tail = Some(node);
            }
        }
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// Valid indices are `0..=len`; `index == len` appends. An out of
    /// range index fails before any mutation. O(index).
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRangeError> {
        if index > self.len {
            return Err(OutOfRangeError::new(index, self.len));
        }
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        if index == self.len {
            self.push_back(value);
            return Ok(());
        }

        let Some(at) = self.node_at(index) else {
            return Err(OutOfRangeError::new(index, self.len));
        };
        let node = self.alloc(value);
        self.link_before(node, at);
        self.len += 1;
        Ok(())
    }

    /// Removes the first node whose element equals `value`.
    ///
    /// Returns `false` when no element matches; absence is an expected
    /// outcome, not an error. O(len).
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut cur = self.head;
        while let Some(node) = cur {
            if self.value_of(node) == value {
                self.unlink(node);
                return true;
            }
            cur = self.next[node.get()];
        }
        false
    }

    /// Removes the node at `index` and returns its element.
    ///
    /// Valid indices are `0..len`. O(index).
    pub fn remove_at(&mut self, index: usize) -> Result<T, OutOfRangeError> {
        match self.node_at(index) {
            Some(node) => Ok(self.unlink(node)),
            None => Err(OutOfRangeError::new(index, self.len)),
        }
    }

    /// Index of the first element equal to `value`, or `None`. O(len).
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Element at `index`. Valid indices are `0..len`. O(index).
    pub fn get(&self, index: usize) -> Result<&T, OutOfRangeError> {
        match self.node_at(index) {
            Some(node) => Ok(self.value_of(node)),
            None => Err(OutOfRangeError::new(index, self.len)),
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRangeError> {
        match self.node_at(index) {
            Some(node) => Ok(self.value_of_mut(node)),
            None => Err(OutOfRangeError::new(index, self.len)),
        }
    }

    /// Reverses traversal order in place. O(1) in the arena encoding:
    /// swapping the `next` and `prev` columns wholesale writes exactly
    /// the cells a per-node field swap would, and detached slots carry
    /// `None` in both columns so the free list is unaffected.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.next, &mut self.prev);
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Drops all elements and slot bookkeeping.
    pub fn clear(&mut self) {
        self.values.clear();
        self.next.clear();
        self.prev.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Head-to-tail iterator; reversible via [`DoubleEndedIterator`].
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            seq: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Textual head-to-tail rendering.
    ///
    /// An empty sequence renders as `"Empty list"` rather than an empty
    /// join; renderers must be able to distinguish the two.
    pub fn display_forward(&self) -> String
    where
        T: std::fmt::Display,
    {
        Self::render(self.iter())
    }

    /// Textual tail-to-head rendering, with the same empty-case contract
    /// as [`DoublyLinkedSequence::display_forward`].
    pub fn display_reverse(&self) -> String
    where
        T: std::fmt::Display,
    {
        Self::render(self.iter().rev())
    }

    fn render<'a, I>(values: I) -> String
    where
        T: std::fmt::Display + 'a,
        I: Iterator<Item = &'a T>,
    {
        let mut out = String::from("None");
        let mut any = false;
        for value in values {
            any = true;
            out.push_str(" <-> ");
            out.push_str(&value.to_string());
        }
        if !any {
            return String::from("Empty list");
        }
        out.push_str(" <-> None");
        out
    }

    /// Slot of the node at `index`, or `None` when `index >= len`.
    ///
    /// Forward traversal from head; doubles as the bounds check since
    /// the chain holds exactly `len` nodes.
    fn node_at(&self, index: usize) -> Option<NodeIndex> {
        let mut cur = self.head;
        for _ in 0..index {
            cur = self.next[cur?.get()];
        }
        cur
    }

    /// Takes a slot for `value`, recycling the free list before growing
    /// the columns. The slot starts detached (`None` in both columns).
    fn alloc(&mut self, value: T) -> NodeIndex {
        match self.free.pop() {
            Some(node) => {
                debug_assert!(self.values[node.get()].is_none());
                debug_assert!(self.next[node.get()].is_none());
                debug_assert!(self.prev[node.get()].is_none());
                self.values[node.get()] = Some(value);
                node
            }
            None => {
                let node = NodeIndex::new(self.values.len());
                self.values.push(Some(value));
                self.next.push(None);
                self.prev.push(None);
                node
            }
        }
    }

    /// Splices a detached `node` immediately before `at`, repairing both
    /// neighbor links. `at` must be linked.
    fn link_before(&mut self, node: NodeIndex, at: NodeIndex) {
        debug_assert!(self.next[node.get()].is_none() && self.prev[node.get()].is_none());
        let before = self.prev[at.get()];
        self.prev[node.get()] = before;
        self.next[node.get()] = Some(at);
        match before {
            Some(before) => self.next[before.get()] = Some(node),
            None => self.head = Some(node),
        }
        self.prev[at.get()] = Some(node);
    }

    /// Unlinks `node` from the chain, repairs its neighbors' links,
    /// returns the slot to the free list and yields the element.
    ///
    /// Covers all four head/tail combinations; for a lone node both
    /// `head` and `tail` fall back to `None`.
    fn unlink(&mut self, node: NodeIndex) -> T {
        let i = node.get();
        let prev = self.prev[i];
        let next = self.next[i];

        match prev {
            Some(prev) => self.next[prev.get()] = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.prev[next.get()] = prev,
            None => self.tail = prev,
        }

        self.next[i] = None;
        self.prev[i] = None;
        self.free.push(node);
        self.len -= 1;
        self.values[i].take().expect("unlinked a vacant slot")
    }

    #[inline]
    fn value_of(&self, node: NodeIndex) -> &T {
        self.values[node.get()].as_ref().expect("linked slot is vacant")
    }

    #[inline]
    fn value_of_mut(&mut self, node: NodeIndex) -> &mut T {
        self.values[node.get()].as_mut().expect("linked slot is vacant")
    }
}

impl<T> Default for DoublyLinkedSequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for DoublyLinkedSequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedSequence<T> {}

impl<T> FromIterator<T> for DoublyLinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for DoublyLinkedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    seq: &'a DoublyLinkedSequence<T>,
    front: Option<NodeIndex>,
    back: Option<NodeIndex>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        self.front = self.seq.next[node.get()];
        self.remaining -= 1;
        Some(self.seq.value_of(node))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?;
        self.back = self.seq.prev[node.get()];
        self.remaining -= 1;
        Some(self.seq.value_of(node))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> std::iter::FusedIterator for Iter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    // Helpers
    fn seq_from(values: &[i32]) -> DoublyLinkedSequence<i32> {
        values.iter().copied().collect()
    }

    fn assert_chain_eq(seq: &DoublyLinkedSequence<i32>, expected: &[i32]) {
        let forward: Vec<i32> = seq.iter().copied().collect();
        assert_eq!(forward, expected, "forward content mismatch");
        assert_eq!(seq.len(), expected.len());
        assert_eq!(seq.is_empty(), expected.is_empty());

        if expected.is_empty() {
            assert!(seq.head.is_none());
            assert!(seq.tail.is_none());
            return;
        }

        // Walk forward from head exactly len times and end at tail.
        let head = seq.head.expect("non-empty sequence has a head");
        let tail = seq.tail.expect("non-empty sequence has a tail");
        assert!(seq.prev[head.get()].is_none());
        assert!(seq.next[tail.get()].is_none());

        let mut cur = head;
        for step in 0..expected.len() {
            assert_eq!(*seq.value_of(cur), expected[step]);
            if step + 1 == expected.len() {
                assert_eq!(cur, tail);
            } else {
                let next = seq.next[cur.get()].expect("chain ended early");
                assert_eq!(seq.prev[next.get()], Some(cur), "broken back-link");
                cur = next;
            }
        }

        // Walk backward from tail through the same nodes reversed.
        let mut cur = tail;
        for step in 0..expected.len() {
            assert_eq!(*seq.value_of(cur), expected[expected.len() - 1 - step]);
            if step + 1 == expected.len() {
                assert_eq!(cur, head);
            } else {
                let prev = seq.prev[cur.get()].expect("chain ended early");
                assert_eq!(seq.next[prev.get()], Some(cur), "broken forward-link");
                cur = prev;
            }
        }
    }

    #[test]
    fn test_empty_sequence_contract() {
        let seq: DoublyLinkedSequence<i32> = DoublyLinkedSequence::new();
        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());
        assert!(seq.front().is_none());
        assert!(seq.back().is_none());
        assert_eq!(seq.display_forward(), "Empty list");
        assert_eq!(seq.display_reverse(), "Empty list");

        let mut seq = seq;
        assert!(!seq.remove(&10));
        assert_chain_eq(&seq, &[]);
    }

    #[test]
    fn test_push_back_and_front_ordering() {
        let mut seq = DoublyLinkedSequence::new();
        seq.push_back(10);
        seq.push_back(20);
        seq.push_back(30);
        seq.push_front(5);
        assert_chain_eq(&seq, &[5, 10, 20, 30]);
        assert_eq!(seq.front(), Some(&5));
        assert_eq!(seq.back(), Some(&30));
    }

    #[test]
    fn test_insert_middle_find_and_get() {
        let mut seq = seq_from(&[5, 10, 20, 30]);
        seq.insert(2, 15).unwrap();
        assert_chain_eq(&seq, &[5, 10, 15, 20, 30]);

        assert_eq!(seq.find(&15), Some(2));
        assert_eq!(seq.find(&100), None);
        assert_eq!(seq.get(3), Ok(&20));
    }

    #[test]
    fn test_insert_at_bounds_delegates() {
        let mut seq = seq_from(&[10, 20]);
        seq.insert(0, 1).unwrap();
        assert_chain_eq(&seq, &[1, 10, 20]);
        seq.insert(3, 30).unwrap();
        assert_chain_eq(&seq, &[1, 10, 20, 30]);
    }

    #[test]
    fn test_insert_get_consistency_at_every_index() {
        for index in 0..=4 {
            let mut seq = seq_from(&[0, 1, 2, 3]);
            seq.insert(index, 99).unwrap();
            assert_eq!(seq.get(index), Ok(&99));
            assert_eq!(seq.len(), 5);
        }
    }

    #[test]
    fn test_insert_out_of_range_is_atomic() {
        let mut seq = seq_from(&[1, 2, 3]);
        let err = seq.insert(4, 99).unwrap_err();
        assert_eq!(err, OutOfRangeError::new(4, 3));
        assert_chain_eq(&seq, &[1, 2, 3]);
    }

    #[test]
    fn test_remove_by_value_then_remove_at_head() {
        let mut seq = seq_from(&[1, 5, 10, 15, 20, 30]);
        assert!(seq.remove(&15));
        assert_chain_eq(&seq, &[1, 5, 10, 20, 30]);

        assert_eq!(seq.remove_at(0), Ok(1));
        assert_chain_eq(&seq, &[5, 10, 20, 30]);
    }

    #[test]
    fn test_remove_first_match_only_among_duplicates() {
        let mut seq = seq_from(&[7, 3, 7, 9, 7]);
        assert!(seq.remove(&7));
        assert_chain_eq(&seq, &[3, 7, 9, 7]);
        // Remaining equal occurrence is still findable.
        assert_eq!(seq.find(&7), Some(1));
    }

    #[test]
    fn test_remove_head_tail_and_only_node() {
        let mut seq = seq_from(&[1, 2, 3]);
        assert!(seq.remove(&1));
        assert_chain_eq(&seq, &[2, 3]);
        assert!(seq.remove(&3));
        assert_chain_eq(&seq, &[2]);
        assert!(seq.remove(&2));
        assert_chain_eq(&seq, &[]);
        assert!(seq.head.is_none() && seq.tail.is_none());
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut seq = seq_from(&[1, 2]);
        assert_eq!(seq.remove_at(2), Err(OutOfRangeError::new(2, 2)));
        assert_chain_eq(&seq, &[1, 2]);

        let mut empty: DoublyLinkedSequence<i32> = DoublyLinkedSequence::new();
        assert_eq!(empty.remove_at(0), Err(OutOfRangeError::new(0, 0)));
    }

    #[test]
    fn test_get_out_of_range() {
        let seq = seq_from(&[1, 2]);
        assert_eq!(seq.get(2), Err(OutOfRangeError::new(2, 2)));
        assert_eq!(seq.get(usize::MAX), Err(OutOfRangeError::new(usize::MAX, 2)));
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut seq = seq_from(&[1, 2, 3]);
        *seq.get_mut(1).unwrap() = 20;
        assert_chain_eq(&seq, &[1, 20, 3]);
    }

    #[test]
    fn test_slot_reuse_after_unlink() {
        let mut seq = seq_from(&[1, 2, 3]);
        let slots = seq.values.len();
        assert!(seq.remove(&2));
        seq.push_back(4);
        // The freed slot is recycled; the arena does not grow.
        assert_eq!(seq.values.len(), slots);
        assert_chain_eq(&seq, &[1, 3, 4]);
    }

    #[test]
    fn test_reverse_basic_and_round_trip() {
        let mut seq = seq_from(&[1, 2, 3, 4, 5]);
        seq.reverse();
        assert_chain_eq(&seq, &[5, 4, 3, 2, 1]);
        seq.reverse();
        assert_chain_eq(&seq, &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reverse_empty_and_single() {
        let mut empty: DoublyLinkedSequence<i32> = DoublyLinkedSequence::new();
        empty.reverse();
        assert_chain_eq(&empty, &[]);

        let mut single = seq_from(&[42]);
        let node = single.head;
        single.reverse();
        assert_chain_eq(&single, &[42]);
        // Same lone node stays head and tail, links still none.
        assert_eq!(single.head, node);
        assert_eq!(single.tail, node);
    }

    #[test]
    fn test_reverse_then_mutate_keeps_invariants() {
        let mut seq = seq_from(&[1, 2, 3, 4]);
        seq.reverse();
        seq.push_back(0);
        seq.push_front(5);
        assert_chain_eq(&seq, &[5, 4, 3, 2, 1, 0]);
        assert!(seq.remove(&3));
        seq.insert(2, 9).unwrap();
        assert_chain_eq(&seq, &[5, 4, 9, 2, 1, 0]);
    }

    #[test]
    fn test_display_forward_and_reverse() {
        let seq = seq_from(&[5, 10, 20, 30]);
        assert_eq!(seq.display_forward(), "None <-> 5 <-> 10 <-> 20 <-> 30 <-> None");
        assert_eq!(seq.display_reverse(), "None <-> 30 <-> 20 <-> 10 <-> 5 <-> None");
    }

    #[test]
    fn test_forward_backward_symmetry() {
        let seq = seq_from(&[2, 4, 6, 8]);
        let forward: Vec<i32> = seq.iter().copied().collect();
        let mut backward: Vec<i32> = seq.iter().rev().copied().collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_iterator_exact_size_and_meet_in_middle() {
        let seq = seq_from(&[1, 2, 3, 4]);
        let mut iter = seq.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut seq = seq_from(&[1, 2, 3]);
        seq.clear();
        assert_chain_eq(&seq, &[]);
        seq.push_back(7);
        assert_chain_eq(&seq, &[7]);
    }

    #[test]
    fn test_eq_and_debug() {
        let a = seq_from(&[1, 2, 3]);
        let b = seq_from(&[1, 2, 3]);
        let c = seq_from(&[1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(format!("{:?}", a), "[1, 2, 3]");
    }

    #[test]
    fn test_length_tracks_inserts_and_removals() {
        let mut seq = DoublyLinkedSequence::new();
        for i in 0..10 {
            seq.push_back(i);
        }
        assert_eq!(seq.len(), 10);
        for i in 0..5 {
            assert!(seq.remove(&i));
        }
        assert_eq!(seq.len(), 5);
        seq.insert(0, 100).unwrap();
        assert_eq!(seq.len(), 6);
        assert_eq!(seq.remove_at(5), Ok(9));
        assert_eq!(seq.len(), 5);
    }

    #[test]
    fn test_mixed_workout_preserves_invariants() {
        let mut seq = DoublyLinkedSequence::new();
        let mut model: Vec<i32> = Vec::new();

        for i in 0..20 {
            if i % 3 == 0 {
                seq.push_front(i);
                model.insert(0, i);
            } else {
                seq.push_back(i);
                model.push(i);
            }
            if i % 4 == 0 && !model.is_empty() {
                let at = model.len() / 2;
                let expected = model.remove(at);
                assert_eq!(seq.remove_at(at), Ok(expected));
            }
            if i % 5 == 0 {
                seq.reverse();
                model.reverse();
            }
            assert_chain_eq(&seq, &model);
        }
    }
}
