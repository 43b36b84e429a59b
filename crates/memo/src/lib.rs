//! Content-addressed memoization for derived view payloads.
//!
//! Every engine in this workspace is a pure function, so a derivation is
//! fully identified by the engine's tag plus its serialized input. Hashing
//! that pair gives a key that is stable across processes and releases of
//! the same engine, which lets rendered payloads be cached, compared, and
//! invalidated by content rather than by timestamps.

use std::collections::BTreeMap;

use serde::Serialize;

/// Hex digest identifying one derivation (engine tag + canonical input).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemoKey(String);

impl MemoKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MemoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoError {
    /// The input could not be serialized into canonical JSON.
    Key(String),
}

impl std::fmt::Display for MemoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemoError::Key(reason) => write!(f, "memo key derivation failed: {reason}"),
        }
    }
}

impl std::error::Error for MemoError {}

/// Derive the memo key for `input` as computed by the engine named `tag`.
///
/// The digest covers the tag, a zero separator, and the input's JSON bytes,
/// so `("wheel", 12)` and `("wheel1", 2)` cannot collide.
pub fn memo_key<T: Serialize>(tag: &str, input: &T) -> Result<MemoKey, MemoError> {
    let payload = serde_json::to_vec(input).map_err(|e| MemoError::Key(e.to_string()))?;
    let mut hasher = blake3::Hasher::new();
    hasher.update(tag.as_bytes());
    hasher.update(&[0]);
    hasher.update(&payload);
    Ok(MemoKey(hasher.finalize().to_hex().to_string()))
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    last_used_tick: u64,
}

/// Lifetime counters for one store, snapshotted for logging or debug UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoStats {
    pub len: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Deterministic bounded memo store.
///
/// Notes on determinism:
/// - Entries are keyed in a `BTreeMap` for stable traversal order.
/// - Eviction is LRU by `last_used_tick`, with a tie-break by key ordering.
///
/// A store with capacity zero retains nothing; every insert comes straight
/// back as evicted.
#[derive(Debug)]
pub struct MemoStore<V> {
    capacity: usize,
    tick: u64,
    entries: BTreeMap<MemoKey, Entry<V>>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl<V> MemoStore<V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            tick: 0,
            entries: BTreeMap::new(),
            hits: 0,
            misses: 0,
            evictions: 0,
        }
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

    /// Look up a memoized value, refreshing its recency and counting the
    /// hit or miss.
    pub fn get(&mut self, key: &MemoKey) -> Option<&V> {
        self.tick += 1;
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.last_used_tick = self.tick;
                self.hits += 1;
                Some(&entry.value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Look without touching recency or counters.
    pub fn peek(&self, key: &MemoKey) -> Option<&V> {
        self.entries.get(key).map(|e| &e.value)
    }

    /// Insert (or replace) a value, returning the keys evicted to stay
    /// within capacity.
    pub fn insert(&mut self, key: MemoKey, value: V) -> Vec<MemoKey> {
        self.tick += 1;
        self.entries.insert(
            key,
            Entry {
                value,
                last_used_tick: self.tick,
            },
        );

        let mut evicted: Vec<MemoKey> = Vec::new();
        while self.entries.len() > self.capacity {
            let victim = self
                .entries
                .iter()
                .min_by(|(ka, ea), (kb, eb)| {
                    ea.last_used_tick
                        .cmp(&eb.last_used_tick)
                        .then_with(|| ka.cmp(kb))
                })
                .map(|(k, _)| k.clone());
            let Some(victim) = victim else {
                break;
            };
            self.entries.remove(&victim);
            self.evictions += 1;
            evicted.push(victim);
        }
        evicted
    }

    /// Drop all entries. Lifetime counters keep counting.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> MemoStats {
        MemoStats {
            len: self.entries.len(),
            capacity: self.capacity,
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
        }
    }
}
