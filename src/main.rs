//! CLARP Terminal - one-shot scan
//!
//! Resolves a query, looks it up in the catalog and prints the LARP report.
//!
//! Usage:
//!   clarp_terminal '$MOONRUG'
//!   clarp_terminal x.com/shillmaxi

use clarp_terminal::core::entity::{format_entity, resolve_entity, suggest_alternatives};
use clarp_terminal::utils::constants::{APP_NAME, APP_VERSION};
use clarp_terminal::{calculate_larp_score, AppError, InMemoryCatalog, ProjectCatalog};

use eyre::{bail, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query.trim().is_empty() {
        bail!("usage: clarp_terminal <query>  (e.g. '$CLARP', @handle, 0x..., site.xyz)");
    }

    println!("{} v{}", APP_NAME, APP_VERSION);
    println!();

    let Some(entity) = resolve_entity(&query) else {
        let suggestions = suggest_alternatives(&query);
        if !suggestions.is_empty() {
            println!("Did you mean: {}", suggestions.join(", "));
        }
        return Err(AppError::unresolved(&query).into());
    };

    let shown = format_entity(&entity);
    info!(kind = entity.kind.as_str(), entity = %shown, "Resolved query");
    println!("Resolved {} as {}", shown, entity.kind.as_str());

    let catalog = InMemoryCatalog::seeded();
    let project = catalog.find_project(&entity);
    let profile = catalog.find_profile(&entity);

    if project.is_none() && profile.is_none() {
        return Err(AppError::project_not_found(&shown).into());
    }

    if let Some(project) = project {
        debug!(id = %project.id, "Scoring project");
        println!();
        println!("Project: {} (${}, {})", project.name, project.ticker, project.chain.as_str());
        println!("{}", calculate_larp_score(&project.signals).summary());
    }

    if let Some(profile) = profile {
        debug!(handle = %profile.handle, "Scoring profile");
        println!();
        println!(
            "Profile: {} (@{}, {} followers)",
            profile.display_name, profile.handle, profile.followers
        );
        println!("{}", calculate_larp_score(&profile.signals).summary());
    }

    Ok(())
}
