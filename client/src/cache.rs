use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

use typedex_protocol::{
    AbilityResource, EvolutionChainResource, MoveResource, PokemonResource, SpeciesResource,
    TypeResource,
};

/// Key-value store for fetched API resources
///
/// Implementations must be shareable across concurrent fetches.
pub trait ResourceCache<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;
    fn put(&self, key: K, value: V);
}

/// Unbounded cache that lives as long as the client
pub struct SessionCache<K, V> {
    entries: RwLock<HashMap<K, V>>,
}

impl<K, V> SessionCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Default for SessionCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ResourceCache<K, V> for SessionCache<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn get(&self, key: &K) -> Option<V> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn put(&self, key: K, value: V) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key, value);
        }
    }
}

type Shared<V> = Arc<dyn ResourceCache<String, V>>;

/// The caches a client reads through, keyed by the name or id used in the request
#[derive(Clone)]
pub struct Caches {
    pub types: Shared<TypeResource>,
    pub pokemon: Shared<PokemonResource>,
    pub species: Shared<SpeciesResource>,
    pub evolution_chains: Shared<EvolutionChainResource>,
    pub moves: Shared<MoveResource>,
    pub abilities: Shared<AbilityResource>,
}

impl Default for Caches {
    fn default() -> Self {
        Self {
            types: Arc::new(SessionCache::new()),
            pokemon: Arc::new(SessionCache::new()),
            species: Arc::new(SessionCache::new()),
            evolution_chains: Arc::new(SessionCache::new()),
            moves: Arc::new(SessionCache::new()),
            abilities: Arc::new(SessionCache::new()),
        }
    }
}
