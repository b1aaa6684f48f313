//! Recently selected emojis
//!
//! Most-recent-first, bounded, and free of duplicates: recording an emoji
//! that is already present moves it to the front instead of adding it
//! again. Identity is the exact glyph, so `👍` and `👍🏽` are tracked
//! separately.

use std::collections::VecDeque;

use crate::types::Emoji;

/// Default capacity: one full 10 x 4 grid page
pub const DEFAULT_CAPACITY: usize = 40;

#[derive(Debug, Clone)]
pub struct RecencyList {
    entries: VecDeque<Emoji>,
    capacity: usize,
}

impl RecencyList {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Restore a list from a stored snapshot (most recent first).
    ///
    /// Later duplicates are dropped and the result is cut to `capacity`.
    pub fn from_snapshot(capacity: usize, snapshot: Vec<Emoji>) -> Self {
        let mut list = Self::new(capacity);
        for emoji in snapshot {
            if list.entries.len() >= capacity {
                break;
            }
            if !list.contains(emoji.identity()) {
                list.entries.push_back(emoji);
            }
        }
        list
    }

    /// Move or insert `emoji` at the front, evicting the oldest entries
    /// beyond capacity.
    pub fn record(&mut self, emoji: Emoji) {
        if let Some(pos) = self
            .entries
            .iter()
            .position(|e| e.identity() == emoji.identity())
        {
            self.entries.remove(pos);
        }
        self.entries.push_front(emoji);
        self.entries.truncate(self.capacity);
    }

    /// Current contents, most recent first
    pub fn snapshot(&self) -> Vec<Emoji> {
        self.entries.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Emoji> {
        self.entries.iter()
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.entries.iter().any(|e| e.identity() == identity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RecencyList {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
