//! adforge CLI binary.
//!
//! This binary provides command-line access to the creative workflow:
//! - Generate and refine creative packages from a campaign brief
//! - Render approved image prompts on a chosen provider
//! - Manage brand profiles and saved campaigns

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{handle_brand_command, handle_campaign_command, run_generate, run_refine, run_render};
    use cli::{Cli, Commands};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Load .env before anything reads API keys
    dotenvy::dotenv().ok();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Generate {
            brief,
            brand,
            ref_model,
            ref_product,
            format,
        } => {
            run_generate(&brief, brand, ref_model.as_ref(), ref_product.as_ref(), format).await?;
        }

        Commands::Refine {
            feedback,
            brand,
            format,
        } => {
            run_refine(&feedback, brand, format).await?;
        }

        Commands::Render {
            index,
            provider,
            reference,
            strength,
            brand,
            format,
        } => {
            run_render(index, provider, reference.as_deref(), strength, brand, format).await?;
        }

        Commands::Brand(brand_cmd) => {
            handle_brand_command(brand_cmd).await?;
        }

        Commands::Campaign(campaign_cmd) => {
            handle_campaign_command(campaign_cmd).await?;
        }
    }

    Ok(())
}
