//! Wiki Lookup Example
//!
//! Prints a pokemon's evolution line and its first machine moves with
//! Portuguese descriptions when a catalog is available.
//!
//!     TYPEDEX_MOVES_PT=data/moves-pt.json cargo run --example wiki_lookup -- pikachu

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use typedex_client::{ClientConfig, DescriptionCatalog, Learnset, MoveFilter, PokeApiClient};
use typedex_matchup::format_name;
use typedex_team::LearnMethod;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "typedex_client=info".into()),
        )
        .init();

    let name = std::env::args()
        .nth(1)
        .context("usage: wiki_lookup <pokemon>")?
        .to_lowercase();
    let catalog_path =
        std::env::var("TYPEDEX_MOVES_PT").unwrap_or_else(|_| "moves-pt.json".to_string());

    let client = PokeApiClient::new(ClientConfig::from_env()?)?;
    let catalog = DescriptionCatalog::load(&catalog_path).await;

    let pokemon = client.fetch_pokemon(&name).await?;
    println!("{} (BST {})", format_name(&pokemon.name), pokemon.base_stat_total());

    match client.fetch_evolution_for(&pokemon.name).await {
        Ok(chain) => {
            for (depth, species) in chain.chain.flatten() {
                println!("{}{}", "  ".repeat(depth + 1), format_name(species));
            }
        }
        Err(e) => tracing::warn!(error = %e, "No evolution line"),
    }

    let learnset = Learnset::from_pokemon(&pokemon);
    let filter = MoveFilter::Method(LearnMethod::Machine);
    println!("\n{} moves", LearnMethod::Machine.display_name());

    for selected in client.fetch_moves_for(&learnset, filter).await.iter().take(10) {
        let resource = client.fetch_move(&selected.name).await?;
        println!(
            "  {:<16} {:>3}  {}",
            selected.display_name,
            selected.power.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string()),
            catalog.move_description(&resource)
        );
    }

    Ok(())
}
