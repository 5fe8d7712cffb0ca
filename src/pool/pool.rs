//! Per-kind canonicalization pool.
//!
//! Maps identifiers to the single live instance of each distinct name.
//! Entries are never evicted. The map is split into independently locked
//! shards so unrelated identifiers rarely contend.

use std::collections::hash_map::Entry;
use std::hash::{Hash, Hasher};

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};
use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::base::NameResult;
use crate::names::NameKind;

use super::context::{Names, NamesConfig};
use super::interned::Interned;

type Shard<T> = RwLock<FxHashMap<SmolStr, Interned<T>>>;

/// Flyweight cache for one kind of name.
///
/// Besides the canonical identifier of every instance, the pool remembers
/// the raw spellings it has already parsed (e.g. `" A , 1.2.3.4"`) so a
/// repeated request never re-parses.
pub struct NamePool<T> {
    shards: Box<[Shard<T>]>,
    remember_aliases: bool,
}

impl<T: NameKind> NamePool<T> {
    pub fn new(config: &NamesConfig) -> Self {
        let shards = (0..config.shards.max(1))
            .map(|_| RwLock::new(FxHashMap::default()))
            .collect();
        Self {
            shards,
            remember_aliases: config.remember_aliases,
        }
    }

    fn shard(&self, identifier: &str) -> &Shard<T> {
        let mut hasher = FxHasher::default();
        identifier.hash(&mut hasher);
        &self.shards[(hasher.finish() as usize) % self.shards.len()]
    }

    /// Cached instance for `identifier`, without parsing.
    pub fn lookup(&self, identifier: &str) -> Option<Interned<T>> {
        if let Some(sentinel) = T::sentinel(identifier.trim()) {
            return Some(sentinel);
        }
        self.shard(identifier).read().get(identifier).cloned()
    }

    /// Return the canonical instance for `identifier`, parsing and inserting
    /// it on first request.
    ///
    /// No lock is held while parsing, since parsing re-enters the pools for
    /// nested names. Concurrent first requests may both parse, but only one
    /// result is inserted and every caller receives that one.
    pub fn get_or_create(&self, identifier: &str, names: &Names) -> NameResult<Interned<T>> {
        if let Some(hit) = self.lookup(identifier) {
            return Ok(hit);
        }

        trace!(kind = %T::KIND, identifier, "pool miss");
        let parsed = T::parse(identifier, names).inspect_err(|error| {
            debug!(kind = %T::KIND, identifier, %error, "rejected identifier");
        })?;

        let canonical = self.insert(Interned::new(parsed));
        if self.remember_aliases && canonical.identifier() != identifier {
            self.shard(identifier)
                .write()
                .entry(SmolStr::new(identifier))
                .or_insert_with(|| canonical.clone());
        }
        Ok(canonical)
    }

    /// Insert an already validated value, returning the live instance if
    /// another caller got there first.
    pub(crate) fn intern(&self, value: T) -> Interned<T> {
        self.insert(Interned::new(value))
    }

    /// Insert-or-return under the shard's write lock.
    fn insert(&self, candidate: Interned<T>) -> Interned<T> {
        let key = SmolStr::new(candidate.identifier());
        let mut shard = self.shard(&key).write();
        match shard.entry(key) {
            Entry::Occupied(existing) => {
                trace!(
                    kind = %T::KIND,
                    identifier = candidate.identifier(),
                    "lost insert race, returning existing instance"
                );
                existing.get().clone()
            }
            Entry::Vacant(slot) => {
                trace!(kind = %T::KIND, identifier = candidate.identifier(), "interned");
                slot.insert(candidate.clone());
                candidate
            }
        }
    }

    /// Whether `identifier` (canonical or a remembered spelling) is cached.
    pub fn contains(&self, identifier: &str) -> bool {
        self.shard(identifier).read().contains_key(identifier)
    }

    /// Number of distinct instances, excluding remembered spellings.
    pub fn len(&self) -> usize {
        self.shards
            .iter()
            .map(|shard| {
                shard
                    .read()
                    .iter()
                    .filter(|(key, name)| key.as_str() == name.identifier())
                    .count()
            })
            .sum()
    }

    /// Returns true if nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.read().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::AssemblyName;

    #[test]
    fn test_get_or_create_returns_same_instance() {
        let names = Names::new();
        let pool = AssemblyName::pool(&names);
        let a = pool.get_or_create("A, 1.2.3.4", &names).unwrap();
        let b = pool.get_or_create("A, 1.2.3.4", &names).unwrap();
        assert!(Interned::ptr_eq(&a, &b));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_spelling_is_remembered() {
        let names = Names::new();
        let pool = AssemblyName::pool(&names);
        let spaced = pool.get_or_create(" A , 1.2.3.4", &names).unwrap();
        assert!(pool.contains(" A , 1.2.3.4"));
        assert!(pool.contains("A, 1.2.3.4"));
        let canonical = pool.lookup("A, 1.2.3.4").unwrap();
        assert!(Interned::ptr_eq(&spaced, &canonical));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_spelling_not_remembered_when_disabled() {
        let names = Names::with_config(NamesConfig::default().with_aliases(false));
        let pool = AssemblyName::pool(&names);
        pool.get_or_create("A,1.2.3.4", &names).unwrap();
        assert!(!pool.contains("A,1.2.3.4"));
        assert!(pool.contains("A, 1.2.3.4"));
    }

    #[test]
    fn test_unknown_is_never_stored() {
        let names = Names::new();
        let pool = AssemblyName::pool(&names);
        let unknown = pool.get_or_create("???", &names).unwrap();
        assert!(Interned::ptr_eq(&unknown, &AssemblyName::unknown()));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_rejected_identifier_is_not_cached() {
        let names = Names::new();
        let pool = AssemblyName::pool(&names);
        assert!(pool.get_or_create("A, 1.2", &names).is_err());
        assert!(pool.is_empty());
    }

    #[test]
    fn test_single_shard() {
        let names = Names::with_config(NamesConfig::default().with_shards(1));
        let pool = AssemblyName::pool(&names);
        for i in 0..10 {
            pool.get_or_create(&format!("A{i}"), &names).unwrap();
        }
        assert_eq!(pool.len(), 10);
    }
}
