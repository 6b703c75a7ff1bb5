use anyhow::{Context, Result};
use futures_util::future::join_all;
use serde::de::DeserializeOwned;
use typedex_protocol::{
    AbilityResource, BerryResource, EvolutionChainResource, ItemResource, MoveResource,
    NamedResource, NatureResource, ParseError, ResourceList, SpeciesResource,
};
use typedex_team::{Learnset, MoveFilter, SelectedMove};

use crate::api::PokeApiClient;

/// Natures in the games; the list endpoint is fetched in one page
const NATURE_COUNT: u32 = 25;

impl PokeApiClient {
    pub async fn fetch_species(&self, name_or_id: &str) -> Result<SpeciesResource> {
        self.cached(
            self.caches.species.as_ref(),
            name_or_id,
            &format!("pokemon-species/{name_or_id}"),
        )
        .await
    }

    /// Fetch an evolution chain by its absolute URL, cached by URL
    pub async fn fetch_evolution_chain(&self, url: &str) -> Result<EvolutionChainResource> {
        let cache = self.caches.evolution_chains.as_ref();
        if let Some(hit) = cache.get(&url.to_string()) {
            tracing::debug!(url = %url, "Cache hit");
            return Ok(hit);
        }

        let chain: EvolutionChainResource = self.get_url(url).await?;
        cache.put(url.to_string(), chain.clone());
        Ok(chain)
    }

    /// Species lookup followed by its evolution chain
    pub async fn fetch_evolution_for(&self, name_or_id: &str) -> Result<EvolutionChainResource> {
        let species = self.fetch_species(name_or_id).await?;
        let chain = species
            .evolution_chain
            .ok_or_else(|| ParseError::MissingField("evolution_chain".to_string()))
            .with_context(|| format!("Species {} has no evolution chain", species.name))?;

        self.fetch_evolution_chain(&chain.url).await
    }

    pub async fn fetch_move(&self, name_or_id: &str) -> Result<MoveResource> {
        self.cached(
            self.caches.moves.as_ref(),
            name_or_id,
            &format!("move/{name_or_id}"),
        )
        .await
    }

    /// Details for the moves a picker shows under `filter`
    ///
    /// At most the first 50 moves are fetched. Moves that fail to load are
    /// dropped.
    pub async fn fetch_moves_for(
        &self,
        learnset: &Learnset,
        filter: MoveFilter,
    ) -> Vec<SelectedMove> {
        let to_load = learnset.to_load(filter);
        let fetches = to_load.iter().map(|mv| self.fetch_move(&mv.name));

        join_all(fetches)
            .await
            .into_iter()
            .zip(&to_load)
            .filter_map(|(result, mv)| match result {
                Ok(resource) => Some(SelectedMove::from_resource(&resource)),
                Err(e) => {
                    tracing::warn!(move_name = %mv.name, error = %e, "Failed to load move");
                    None
                }
            })
            .collect()
    }

    pub async fn fetch_ability_list(&self, limit: u32) -> Result<Vec<NamedResource>> {
        let list: ResourceList = self.get(&format!("ability?limit={limit}")).await?;
        Ok(list.results)
    }

    pub async fn fetch_ability(&self, name_or_id: &str) -> Result<AbilityResource> {
        self.cached(
            self.caches.abilities.as_ref(),
            name_or_id,
            &format!("ability/{name_or_id}"),
        )
        .await
    }

    pub async fn fetch_item_list(&self, limit: u32) -> Result<Vec<NamedResource>> {
        let list: ResourceList = self.get(&format!("item?limit={limit}")).await?;
        Ok(list.results)
    }

    pub async fn fetch_item(&self, name_or_id: &str) -> Result<ItemResource> {
        self.get(&format!("item/{name_or_id}")).await
    }

    /// First `limit` berries with full details, in list order
    pub async fn fetch_berries(&self, limit: u32) -> Result<Vec<BerryResource>> {
        self.fetch_listed(&format!("berry?limit={limit}")).await
    }

    pub async fn fetch_natures(&self) -> Result<Vec<NatureResource>> {
        self.fetch_listed(&format!("nature?limit={NATURE_COUNT}")).await
    }

    /// Fetch a list endpoint, then every entry's URL concurrently
    ///
    /// The list itself must load. Entries that fail are logged and skipped.
    async fn fetch_listed<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let list: ResourceList = self.get(path).await?;
        let fetches = list.results.iter().map(|entry| self.get_url::<T>(&entry.url));

        Ok(join_all(fetches)
            .await
            .into_iter()
            .zip(&list.results)
            .filter_map(|(result, entry)| match result {
                Ok(resource) => Some(resource),
                Err(e) => {
                    tracing::warn!(resource = %entry.name, error = %e, "Skipping list entry");
                    None
                }
            })
            .collect())
    }
}
