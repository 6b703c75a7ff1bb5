use anyhow::Result;
use futures_util::future::join_all;
use typedex_matchup::TypeName;
use typedex_protocol::{PokemonResource, ResourceList};

use crate::api::PokeApiClient;

/// Order for search results and pokedex listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Id,
    Name,
}

/// One row of the pokedex listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokedexEntry {
    pub id: u32,
    pub name: String,
    pub url: String,
}

impl PokeApiClient {
    /// Fetch a pokemon by name or id
    ///
    /// Cached under the requested key, the id and the name.
    pub async fn fetch_pokemon(&self, name_or_id: &str) -> Result<PokemonResource> {
        let cache = self.caches.pokemon.as_ref();
        let pokemon = self
            .cached(cache, name_or_id, &format!("pokemon/{name_or_id}"))
            .await?;

        cache.put(pokemon.id.to_string(), pokemon.clone());
        cache.put(pokemon.name.clone(), pokemon.clone());
        Ok(pokemon)
    }

    /// Pokemon having `primary`, and also `secondary` when given
    ///
    /// Individual pokemon that fail to load are dropped. Results are sorted by id.
    pub async fn search_by_types(
        &self,
        primary: TypeName,
        secondary: Option<TypeName>,
    ) -> Result<Vec<PokemonResource>> {
        let primary_resource = self.fetch_type(primary.as_api()).await?;
        let secondary_resource = match secondary {
            Some(t) => Some(self.fetch_type(t.as_api()).await?),
            None => None,
        };

        let names = intersect_names(
            &primary_resource.pokemon_names(),
            secondary_resource.as_ref().map(|r| r.pokemon_names()).as_deref(),
        );

        let fetches = names.iter().map(|name| self.fetch_pokemon(name));
        let mut results: Vec<PokemonResource> = join_all(fetches)
            .await
            .into_iter()
            .zip(&names)
            .filter_map(|(result, name)| match result {
                Ok(pokemon) => Some(pokemon),
                Err(e) => {
                    tracing::warn!(pokemon = %name, error = %e, "Skipping pokemon in search results");
                    None
                }
            })
            .collect();

        sort_results(&mut results, SortOrder::Id);
        tracing::debug!(count = results.len(), primary = %primary, "Type search finished");
        Ok(results)
    }

    /// Pokedex listing of the first `limit` pokemon
    pub async fn fetch_pokedex(&self, limit: u32) -> Result<Vec<PokedexEntry>> {
        let list: ResourceList = self.get(&format!("pokemon?limit={limit}")).await?;

        Ok(list
            .results
            .into_iter()
            .enumerate()
            .map(|(index, entry)| PokedexEntry {
                id: entry.id().unwrap_or(index as u32 + 1),
                name: entry.name,
                url: entry.url,
            })
            .collect())
    }
}

/// Names in `primary`, restricted to those also in `secondary` when given
///
/// Keeps the order of `primary`.
pub fn intersect_names(primary: &[&str], secondary: Option<&[&str]>) -> Vec<String> {
    primary
        .iter()
        .filter(|name| secondary.is_none_or(|other| other.contains(*name)))
        .map(|name| name.to_string())
        .collect()
}

pub fn sort_results(results: &mut [PokemonResource], order: SortOrder) {
    match order {
        SortOrder::Id => results.sort_by_key(|p| p.id),
        SortOrder::Name => results.sort_by(|a, b| a.name.cmp(&b.name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use typedex_protocol::TypeResource;

    use crate::cache::{Caches, ResourceCache, SessionCache};
    use crate::config::ClientConfig;

    fn pokemon(id: u32, name: &str) -> PokemonResource {
        serde_json::from_value(json!({
            "id": id,
            "name": name,
            "types": [{"slot": 1, "type": {"name": "water", "url": ""}}]
        }))
        .unwrap()
    }

    #[test]
    fn test_intersect_single_type() {
        let names = intersect_names(&["squirtle", "psyduck"], None);
        assert_eq!(names, vec!["squirtle", "psyduck"]);
    }

    #[test]
    fn test_intersect_two_types() {
        let water = ["squirtle", "wooper", "quagsire", "psyduck"];
        let ground = ["sandshrew", "quagsire", "wooper"];

        let names = intersect_names(&water, Some(&ground[..]));
        assert_eq!(names, vec!["wooper", "quagsire"]);
    }

    #[test]
    fn test_intersect_disjoint() {
        let names = intersect_names(&["charmander"], Some(&["bulbasaur"][..]));
        assert!(names.is_empty());
    }

    #[test]
    fn test_sort_results() {
        let mut results = vec![pokemon(7, "squirtle"), pokemon(54, "psyduck"), pokemon(1, "bulbasaur")];

        sort_results(&mut results, SortOrder::Id);
        let ids: Vec<u32> = results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 7, 54]);

        sort_results(&mut results, SortOrder::Name);
        let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "psyduck", "squirtle"]);
    }

    fn type_with_members(id: u32, name: &str, members: &[&str]) -> TypeResource {
        let pokemon: Vec<serde_json::Value> = members
            .iter()
            .map(|m| json!({"pokemon": {"name": m, "url": ""}, "slot": 1}))
            .collect();
        serde_json::from_value(json!({
            "id": id,
            "name": name,
            "damage_relations": {},
            "pokemon": pokemon
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_search_drops_unloadable_pokemon() {
        let types: Arc<SessionCache<String, TypeResource>> = Arc::new(SessionCache::new());
        types.put(
            "water".to_string(),
            type_with_members(11, "water", &["quagsire", "marshtomp", "wooper", "squirtle"]),
        );
        types.put(
            "ground".to_string(),
            type_with_members(5, "ground", &["marshtomp", "wooper", "quagsire", "sandshrew"]),
        );

        // marshtomp is not cached and the server is unreachable
        let cached: Arc<SessionCache<String, PokemonResource>> = Arc::new(SessionCache::new());
        cached.put("quagsire".to_string(), pokemon(195, "quagsire"));
        cached.put("wooper".to_string(), pokemon(194, "wooper"));

        let config = ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..ClientConfig::default()
        };
        let caches = Caches {
            types,
            pokemon: cached,
            ..Caches::default()
        };
        let client = PokeApiClient::with_caches(config, caches).unwrap();

        let results = client
            .search_by_types(TypeName::Water, Some(TypeName::Ground))
            .await
            .unwrap();

        let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["wooper", "quagsire"]);
    }

    #[tokio::test]
    async fn test_search_fails_when_type_unavailable() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..ClientConfig::default()
        };
        let client = PokeApiClient::new(config).unwrap();

        assert!(client.search_by_types(TypeName::Fire, None).await.is_err());
    }
}
