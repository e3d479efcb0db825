// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::{BoundedHistory, HexAddress};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub address: Option<HexAddress>,
    pub value: String,
    pub stored_at: DateTime<Local>,
}

/// Simulated RAM. There are two kinds of entries:
/// 1. Addressed: keyed by [`HexAddress`]. Writing to an address that is already in use
///    **replaces** that entry, so reusing addresses never grows the bank.
/// 2. Unaddressed: appended to a bounded history, and the oldest is evicted once the
///    capacity is exceeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryBank {
    /// Ordered by most recent write, last is newest.
    addressed: Vec<MemoryEntry>,
    recent: BoundedHistory<MemoryEntry>,
}

impl MemoryBank {
    #[must_use]
    pub fn new(history_capacity: usize) -> Self {
        Self {
            addressed: Vec::new(),
            recent: BoundedHistory::new(history_capacity),
        }
    }

    /// Returns the entry that this store displaced, if any: the previous value at the
    /// same address, or the evicted oldest history entry.
    pub fn store(
        &mut self,
        value: String,
        address: Option<HexAddress>,
        stored_at: DateTime<Local>,
    ) -> Option<MemoryEntry> {
        match address {
            Some(address) => {
                let displaced = self
                    .addressed
                    .iter()
                    .position(|it| it.address.as_ref() == Some(&address))
                    .map(|index| self.addressed.remove(index));
                self.addressed.push(MemoryEntry {
                    address: Some(address),
                    value,
                    stored_at,
                });
                displaced
            }
            None => self.recent.add(MemoryEntry {
                address: None,
                value,
                stored_at,
            }),
        }
    }

    #[must_use]
    pub fn get(&self, address: &HexAddress) -> Option<&MemoryEntry> {
        self.addressed
            .iter()
            .find(|it| it.address.as_ref() == Some(address))
    }

    /// Addressed entries first (in write order), then the unaddressed history (oldest
    /// first).
    pub fn entries(&self) -> impl Iterator<Item = &MemoryEntry> {
        self.addressed.iter().chain(self.recent.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize { self.addressed.len() + self.recent.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    #[must_use]
    pub fn history_capacity(&self) -> usize { self.recent.capacity() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    fn values(bank: &MemoryBank) -> Vec<&str> {
        bank.entries().map(|it| it.value.as_str()).collect()
    }

    #[test]
    fn test_addressed_store_replaces() {
        let mut bank = MemoryBank::new(5);
        let a1 = HexAddress::from_digits("A1");
        let b2 = HexAddress::from_digits("B2");

        assert!(bank.store("HELLO".into(), Some(a1.clone()), Local::now()).is_none());
        assert!(bank.store("WORLD".into(), Some(b2.clone()), Local::now()).is_none());
        assert_eq2!(bank.len(), 2);

        let displaced = bank.store("AGAIN".into(), Some(a1.clone()), Local::now());
        assert_eq2!(displaced.map(|it| it.value), Some("HELLO".to_string()));
        assert_eq2!(bank.len(), 2);
        assert_eq2!(values(&bank), vec!["WORLD", "AGAIN"]);
        assert_eq2!(bank.get(&a1).map(|it| it.value.as_str()), Some("AGAIN"));
    }

    #[test]
    fn test_repeated_identical_write_is_idempotent() {
        let mut bank = MemoryBank::new(5);
        let a1 = HexAddress::from_digits("a1");
        for _ in 0..10 {
            bank.store("DATA".into(), Some(a1.clone()), Local::now());
        }
        assert_eq2!(bank.len(), 1);
        assert_eq2!(values(&bank), vec!["DATA"]);
    }

    #[test]
    fn test_unaddressed_history_evicts_oldest() {
        let mut bank = MemoryBank::new(5);
        for it in 0..7 {
            bank.store(format!("item {it}"), None, Local::now());
        }
        assert_eq2!(bank.len(), 5);
        assert_eq2!(
            values(&bank),
            vec!["item 2", "item 3", "item 4", "item 5", "item 6"]
        );
    }
}
