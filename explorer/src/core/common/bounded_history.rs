// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A fixed capacity, insertion ordered log. Adding to a full log evicts the oldest item.
//! The capacity is a runtime value (it comes from [`crate::EngineConfig`]), which is why
//! this is backed by a [`VecDeque`] rather than a const generic array.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundedHistory<T> {
    internal_storage: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedHistory<T> {
    /// A capacity of zero is bumped to one, so that the newest item is always kept.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            internal_storage: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert the newest item. Returns the evicted (oldest) item, if the log was full.
    pub fn add(&mut self, value: T) -> Option<T> {
        let evicted = if self.internal_storage.len() == self.capacity {
            self.internal_storage.pop_front()
        } else {
            None
        };
        self.internal_storage.push_back(value);
        evicted
    }

    #[must_use]
    pub fn len(&self) -> usize { self.internal_storage.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.internal_storage.is_empty() }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> { self.internal_storage.iter() }
}

impl<'a, T> IntoIterator for &'a BoundedHistory<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.internal_storage.iter() }
}
