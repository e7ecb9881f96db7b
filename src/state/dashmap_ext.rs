use dashmap::DashMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// Extension helpers for `DashMap` that avoid holding shard locks across `.await`.
///
/// `DashMap::get()` and `DashMap::iter()` return guard types that hold a shard lock.
/// Awaiting while those guards are alive can deadlock or cause severe contention.
///
/// These helpers clone values so the guard drops immediately.
pub trait DashMapExt<K, V> {
    /// Clone the value for `key` (dropping the DashMap guard immediately).
    fn get_cloned<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone;

    /// Clone the value for `key`, inserting `V::default()` first if absent.
    fn get_or_default_cloned(&self, key: &K) -> V
    where
        K: Clone,
        V: Clone + Default;

    /// Collect all values by cloning them (dropping guards immediately).
    fn values_cloned(&self) -> Vec<V>
    where
        V: Clone;
}

impl<K, V> DashMapExt<K, V> for DashMap<K, V>
where
    K: Eq + Hash,
{
    fn get_cloned<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.get(key).map(|r| r.value().clone())
    }

    fn get_or_default_cloned(&self, key: &K) -> V
    where
        K: Clone,
        V: Clone + Default,
    {
        if let Some(existing) = self.get_cloned(key) {
            return existing;
        }
        self.entry(key.clone()).or_default().value().clone()
    }

    fn values_cloned(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|e| e.value().clone()).collect()
    }
}
