//! Type Search Example
//!
//! Lists every pokemon with the given type, or both types when two are
//! given, along with the matchups of that typing.
//!
//!     cargo run --example type_search -- water ground

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use typedex_client::{ClientConfig, PokeApiClient, SortOrder, TypeCombination, TypeName, sort_results};
use typedex_matchup::{dex_number, format_name};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "typedex_client=info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let primary: TypeName = args
        .next()
        .context("usage: type_search <type> [type]")?
        .parse()
        .map_err(anyhow::Error::msg)?;
    let secondary: Option<TypeName> = args
        .next()
        .map(|s| s.parse::<TypeName>().map_err(anyhow::Error::msg))
        .transpose()?;
    let by_name = std::env::var("TYPEDEX_SORT").is_ok_and(|v| v == "name");

    let client = PokeApiClient::new(ClientConfig::from_env()?)?;
    let mut results = client.search_by_types(primary, secondary).await?;
    if by_name {
        sort_results(&mut results, SortOrder::Name);
    }

    println!("{} pokemon found", results.len());
    for pokemon in &results {
        let types: Vec<String> = pokemon
            .type_names()
            .iter()
            .map(|t| format_name(t))
            .collect();
        println!(
            "  {} {:<16} {}",
            dex_number(pokemon.id),
            format_name(&pokemon.name),
            types.join("/")
        );
    }

    client.preload_relations().await;
    let typing = match secondary {
        Some(s) => TypeCombination::dual(primary, s),
        None => TypeCombination::single(primary),
    };
    let result = client.matchups(&typing);

    let names = |types: &[TypeName]| {
        types
            .iter()
            .map(|t| t.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("\n{typing}");
    println!("  Fraco contra:  {}", names(&result.weaknesses));
    println!("  Resiste a:     {}", names(&result.resistances));
    println!("  Imune a:       {}", names(&result.immunities));
    println!("  Forte contra:  {}", names(&result.strengths));
    Ok(())
}
