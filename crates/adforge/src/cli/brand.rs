//! Handlers for brand profile commands.

use crate::cli::commands::BrandCommands;
use crate::cli::run::{open_store, resolve_brand};
use adforge::{AdforgeConfig, ProfileStore};
use adforge_error::{AdforgeResult, StorageError, StorageErrorKind};
use std::path::Path;
use tracing::info;

/// Dispatch a brand subcommand.
pub async fn handle_brand_command(command: BrandCommands) -> AdforgeResult<()> {
    let config = AdforgeConfig::load()?;
    let store = open_store(&config)?;

    match command {
        BrandCommands::List => list(&store).await,
        BrandCommands::Show { id } => show(&store, id).await,
        BrandCommands::Import { file, activate } => import(&store, &file, activate).await,
        BrandCommands::Export { id, output } => export(&store, id, output.as_deref()).await,
        BrandCommands::Delete { id } => {
            store.delete_brand(id).await?;
            println!("Deleted brand {id}");
            Ok(())
        }
        BrandCommands::Activate { id } => activate_brand(&store, id).await,
    }
}

async fn list(store: &ProfileStore) -> AdforgeResult<()> {
    let brands = store.brands().await?;
    if brands.is_empty() {
        println!("No brand profiles. Import one with `adforge brand import <file>`.");
        return Ok(());
    }

    let active = store.active_brand_id().await?;
    for brand in brands {
        let marker = if active == Some(*brand.id()) { "*" } else { " " };
        println!("{} {}  {}", marker, brand.id(), brand.name());
    }
    Ok(())
}

async fn show(store: &ProfileStore, id: Option<uuid::Uuid>) -> AdforgeResult<()> {
    let brand = resolve_brand(store, id).await?;
    println!("{}", ProfileStore::export_brand(&brand)?);
    Ok(())
}

async fn import(store: &ProfileStore, file: &Path, activate: bool) -> AdforgeResult<()> {
    let json = std::fs::read_to_string(file).map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!(
            "{}: {}",
            file.display(),
            e
        )))
    })?;
    let brand = store.import_brand(&json).await?;
    info!(brand_id = %brand.id(), name = %brand.name(), "Imported brand profile");
    println!("Imported {} ({})", brand.name(), brand.id());

    if activate || store.active_brand_id().await?.is_none() {
        store.set_active_brand(Some(*brand.id())).await?;
        println!("Active brand: {}", brand.name());
    }
    Ok(())
}

async fn export(
    store: &ProfileStore,
    id: Option<uuid::Uuid>,
    output: Option<&Path>,
) -> AdforgeResult<()> {
    let brand = resolve_brand(store, id).await?;
    let json = ProfileStore::export_brand(&brand)?;
    match output {
        Some(path) => {
            std::fs::write(path, &json).map_err(|e| {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            println!("Exported {} to {}", brand.name(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

async fn activate_brand(store: &ProfileStore, id: uuid::Uuid) -> AdforgeResult<()> {
    let brand = store.brand(id).await?.ok_or_else(|| {
        StorageError::new(StorageErrorKind::NotFound(format!("brand {id}")))
    })?;
    store.set_active_brand(Some(id)).await?;
    println!("Active brand: {}", brand.name());
    Ok(())
}
