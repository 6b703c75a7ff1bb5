//! Team Report Example
//!
//! Builds a team from the pokemon named on the command line, preloads type
//! relations and prints the team's shared weaknesses, resistances and
//! immunities.
//!
//!     cargo run --example team_report -- gyarados ferrothorn quagsire

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use typedex_client::{ClientConfig, PokeApiClient, Team, TeamMember};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "typedex_client=info".into()),
        )
        .init();

    let names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        anyhow::bail!("usage: team_report <pokemon>...");
    }

    let client = PokeApiClient::new(ClientConfig::from_env()?)?;
    let report = client.preload_relations().await;
    if !report.is_complete() {
        tracing::warn!(failed = ?report.failed, "Some type relations are missing");
    }

    let mut team = Team::new();
    for name in &names {
        let pokemon = match client.fetch_pokemon(&name.to_lowercase()).await {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(pokemon = %name, error = %e, "Skipping");
                continue;
            }
        };

        if let Err(e) = TeamMember::from_pokemon(&pokemon).and_then(|m| team.add(m)) {
            tracing::warn!(pokemon = %name, error = %e, "Not added to team");
        }
    }

    println!("Time ({}/6)", team.len());
    for member in team.members() {
        println!("  {} [{}]", member.display_name(), member.types);
    }

    let analysis = client.analyze_team(&team);
    if analysis.is_empty_team() {
        println!("Nenhum Pokémon no time");
        return Ok(());
    }

    println!("\nFraquezas:");
    for (t, count) in &analysis.weaknesses {
        println!("  {:<10} x{}", t.display_name(), count);
    }

    println!("\nResistências:");
    for (t, count) in &analysis.resistances {
        println!("  {:<10} x{}", t.display_name(), count);
    }

    println!("\nImunidades:");
    for t in &analysis.immunities {
        println!("  {}", t.display_name());
    }

    println!("\n{}", team.to_json()?);
    Ok(())
}
