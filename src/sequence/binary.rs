//! Queue-driven enumeration of binary counting strings
//!
//! Simulates the textbook breadth-first construction: seed a queue with
//! "1", then repeatedly emit the front and enqueue it with "0" and "1"
//! appended. The k-th emitted string (1-based) is the binary
//! representation of k.

use std::collections::VecDeque;

/// Lazy iterator over the first `count` binary counting strings
///
/// Produces `"1", "10", "11", "100", ...` on demand. The stream is
/// finite and cannot be resumed mid-way; restarting means constructing
/// a new iterator.
#[derive(Clone, Debug)]
pub struct BinaryCounting {
    queue: VecDeque<String>,
    remaining: usize,
}

impl BinaryCounting {
    /// Create an enumeration bounded to `count` strings
    pub fn new(count: usize) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(String::from("1"));
        Self {
            queue,
            remaining: count,
        }
    }

    /// Number of strings still to be produced
    pub const fn remaining(&self) -> usize {
        self.remaining
    }
}

impl Iterator for BinaryCounting {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let current = self.queue.pop_front()?;
        self.queue.push_back(format!("{current}0"));
        self.queue.push_back(format!("{current}1"));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for BinaryCounting {}
