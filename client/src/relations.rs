use anyhow::Result;
use futures_util::future::join_all;
use typedex_matchup::{
    MatchupResult, RelationTable, TypeCombination, TypeName, calculate_matchups,
};
use typedex_protocol::{NamedResource, ResourceList, TypeResource};
use typedex_team::{Team, TeamAnalysis};

use crate::api::PokeApiClient;

/// Outcome of [`PokeApiClient::preload_relations`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreloadReport {
    pub loaded: Vec<TypeName>,
    pub failed: Vec<TypeName>,
}

impl PreloadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl PokeApiClient {
    /// List the elemental types, dropping `unknown`, `shadow` and `stellar`
    pub async fn fetch_types(&self) -> Result<Vec<NamedResource>> {
        let list: ResourceList = self.get("type").await?;

        Ok(list
            .results
            .into_iter()
            .filter(|t| !self.config.is_excluded_type(&t.name))
            .collect())
    }

    /// Fetch one type and make its relations resident
    pub async fn fetch_type(&self, name: &str) -> Result<TypeResource> {
        let resource = self
            .cached(self.caches.types.as_ref(), name, &format!("type/{name}"))
            .await?;
        self.store_relations(&resource);
        Ok(resource)
    }

    /// Fetch all 18 canonical types concurrently
    ///
    /// Failures are logged and reported, never fatal: the matchup queries
    /// treat missing types as neutral.
    pub async fn preload_relations(&self) -> PreloadReport {
        let fetches = TypeName::all()
            .iter()
            .map(|t| async move { (*t, self.fetch_type(t.as_api()).await) });

        let mut report = PreloadReport::default();
        for (type_name, result) in join_all(fetches).await {
            match result {
                Ok(_) => report.loaded.push(type_name),
                Err(e) => {
                    tracing::warn!(type_name = %type_name, error = %e, "Failed to load type relations");
                    report.failed.push(type_name);
                }
            }
        }

        tracing::info!(
            loaded = report.loaded.len(),
            failed = report.failed.len(),
            "Type relations preloaded"
        );
        report
    }

    /// Insert a type's relations into the resident table
    ///
    /// Returns `false` for non-canonical types.
    pub fn store_relations(&self, resource: &TypeResource) -> bool {
        match self.relations.write() {
            Ok(mut table) => table.insert_resource(resource).is_some(),
            Err(_) => false,
        }
    }

    /// Snapshot of the resident relations
    pub fn relations(&self) -> RelationTable {
        self.relations
            .read()
            .map(|table| table.clone())
            .unwrap_or_default()
    }

    /// Matchups for a typing against whatever relations are resident now
    pub fn matchups(&self, types: &TypeCombination) -> MatchupResult {
        self.relations
            .read()
            .map(|table| calculate_matchups(types, &*table))
            .unwrap_or_default()
    }

    /// Team summary against whatever relations are resident now
    pub fn analyze_team(&self, team: &Team) -> TeamAnalysis {
        match self.relations.read() {
            Ok(table) => team.analyze(&*table),
            Err(_) => TeamAnalysis {
                member_count: team.len(),
                ..TeamAnalysis::default()
            },
        }
    }
}
