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

/// Forward-chain counterpart of
/// [`DoublyLinkedSequence`](crate::seq::doubly::DoublyLinkedSequence).
///
/// Same arena layout and operation set, but with a single `next` column;
/// removal repairs the predecessor's link found by forward traversal,
/// and backward rendering materializes the forward walk.
#[derive(Clone)]
pub struct SinglyLinkedSequence<T> {
    values: Vec<Option<T>>,
    next: Vec<Option<NodeIndex>>,
    free: Vec<NodeIndex>,
    head: Option<NodeIndex>,
    tail: Option<NodeIndex>,
    len: usize,
}

impl<T> SinglyLinkedSequence<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            next: Vec::new(),
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

    /// Appends `value` at the tail. O(1) thanks to the tail reference.
    pub fn push_back(&mut self, value: T) {
        let node = self.alloc(value);
        match self.tail {
            Some(tail) => {
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
                self.head = Some(node);
            }
            None => {
                self.head = Some(node);
                self.tail = Some(node);
            }
        }
        self.len += 1;
    }

    /// Inserts `value` at position `index`; `0..=len` is valid and
    /// `index == len` appends. Fails before any mutation. O(index).
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

        let Some(before) = self.node_at(index - 1) else {
            return Err(OutOfRangeError::new(index, self.len));
        };
        let node = self.alloc(value);
        self.next[node.get()] = self.next[before.get()];
        self.next[before.get()] = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Removes the first element equal to `value`; `false` when absent.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut pred: Option<NodeIndex> = None;
        let mut cur = self.head;
        while let Some(node) = cur {
            if self.value_of(node) == value {
                self.unlink_after(pred, node);
                return true;
            }
            pred = cur;
            cur = self.next[node.get()];
        }
        false
    }

    /// Removes the node at `index` and returns its element.
    pub fn remove_at(&mut self, index: usize) -> Result<T, OutOfRangeError> {
        if index >= self.len {
            return Err(OutOfRangeError::new(index, self.len));
        }
        let pred = if index == 0 {
            None
        } else {
            self.node_at(index - 1)
        };
        let node = match pred {
            Some(pred) => self.next[pred.get()],
            None => self.head,
        };
        let Some(node) = node else {
            return Err(OutOfRangeError::new(index, self.len));
        };
        Ok(self.unlink_after(pred, node))
    }

    /// Index of the first element equal to `value`, or `None`.
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Element at `index`; valid indices are `0..len`.
    pub fn get(&self, index: usize) -> Result<&T, OutOfRangeError> {
        match self.node_at(index) {
            Some(node) => Ok(self.value_of(node)),
            None => Err(OutOfRangeError::new(index, self.len)),
        }
    }

    /// Reverses the chain in place by re-pointing every `next` link at
    /// the predecessor in one pass, then swapping head and tail.
    pub fn reverse(&mut self) {
        let mut pred: Option<NodeIndex> = None;
        let mut cur = self.head;
        while let Some(node) = cur {
            let next = self.next[node.get()];
            self.next[node.get()] = pred;
            pred = cur;
            cur = next;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            seq: self,
            cur: self.head,
        }
    }

    /// Head-to-tail rendering; `"Empty list"` for zero elements.
    pub fn display_forward(&self) -> String
    where
        T: std::fmt::Display,
    {
        if self.is_empty() {
            return String::from("Empty list");
        }
        let mut out = String::from("None");
        for value in self.iter() {
            out.push_str(" -> ");
            out.push_str(&value.to_string());
        }
        out.push_str(" -> None");
        out
    }

    /// Tail-to-head rendering. The forward walk is materialized first;
    /// there is no backward chain to follow.
    pub fn display_reverse(&self) -> String
    where
        T: std::fmt::Display,
    {
        if self.is_empty() {
            return String::from("Empty list");
        }
        let mut out = String::from("None");
        let values: Vec<&T> = self.iter().collect();
        for value in values.into_iter().rev() {
            out.push_str(" -> ");
            out.push_str(&value.to_string());
        }
        out.push_str(" -> None");
        out
    }

    fn node_at(&self, index: usize) -> Option<NodeIndex> {
        let mut cur = self.head;
        for _ in 0..index {
            cur = self.next[cur?.get()];
        }
        cur
    }

    fn alloc(&mut self, value: T) -> NodeIndex {
        match self.free.pop() {
            Some(node) => {
                debug_assert!(self.values[node.get()].is_none());
                debug_assert!(self.next[node.get()].is_none());
                self.values[node.get()] = Some(value);
                node
            }
            None => {
                let node = NodeIndex::new(self.values.len());
                self.values.push(Some(value));
                self.next.push(None);
                node
            }
        }
    }

    /// Unlinks `node`, whose predecessor is `pred` (`None` at the head),
    /// and yields its element.
    fn unlink_after(&mut self, pred: Option<NodeIndex>, node: NodeIndex) -> T {
        let i = node.get();
        let next = self.next[i];
        match pred {
            Some(pred) => self.next[pred.get()] = next,
            None => self.head = next,
        }
        if next.is_none() {
            self.tail = pred;
        }
        self.next[i] = None;
        self.free.push(node);
        self.len -= 1;
        self.values[i].take().expect("unlinked a vacant slot")
    }

    #[inline]
    fn value_of(&self, node: NodeIndex) -> &T {
        self.values[node.get()].as_ref().expect("linked slot is vacant")
    }
}

impl<T> Default for SinglyLinkedSequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SinglyLinkedSequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for SinglyLinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        for value in iter {
            seq.push_back(value);
        }
        seq
    }
}

#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    seq: &'a SinglyLinkedSequence<T>,
    cur: Option<NodeIndex>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cur?;
        self.cur = self.seq.next[node.get()];
        Some(self.seq.value_of(node))
    }
}

impl<'a, T> std::iter::FusedIterator for Iter<'a, T> {}
