//! Handlers for saved campaign commands.

use crate::cli::commands::CampaignCommands;
use crate::cli::run::{open_store, print_package, resolve_brand};
use adforge::AdforgeConfig;
use adforge_error::AdforgeResult;

/// Dispatch a campaign subcommand.
pub async fn handle_campaign_command(command: CampaignCommands) -> AdforgeResult<()> {
    let config = AdforgeConfig::load()?;
    let store = open_store(&config)?;

    match command {
        CampaignCommands::Show { brand, format } => {
            let brand = resolve_brand(&store, brand).await?;
            match store.campaign(*brand.id()).await? {
                Some(campaign) => {
                    println!(
                        "Campaign for {} — {} ({}, saved {})",
                        brand.name(),
                        campaign.brief().product_name(),
                        campaign.brief().platform(),
                        campaign.saved_at()
                    );
                    print_package(campaign.package(), format)?;
                }
                None => println!("No saved campaign for {}.", brand.name()),
            }
            Ok(())
        }
        CampaignCommands::Clear { brand } => {
            let brand = resolve_brand(&store, brand).await?;
            store.clear_campaign(*brand.id()).await?;
            println!("Cleared campaign for {}.", brand.name());
            Ok(())
        }
    }
}
