//! CLI command definitions.

use adforge_core::ImageProvider;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uuid::Uuid;

/// adforge - ad creative package generation over multi-provider model APIs
#[derive(Parser, Debug)]
#[command(name = "adforge")]
#[command(about = "Generate and refine ad creative packages for a brand", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a creative package from a campaign brief
    Generate {
        /// Path to the campaign brief TOML file
        #[arg(long)]
        brief: PathBuf,

        /// Brand profile id (defaults to the active brand)
        #[arg(long)]
        brand: Option<Uuid>,

        /// Path to a model/person reference image
        #[arg(long)]
        ref_model: Option<PathBuf>,

        /// Path to a product variant reference image
        #[arg(long)]
        ref_product: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Regenerate the saved package with section feedback
    Refine {
        /// Path to the section feedback TOML file
        #[arg(long)]
        feedback: PathBuf,

        /// Brand profile id (defaults to the active brand)
        #[arg(long)]
        brand: Option<Uuid>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Render one of the package's image prompts on a provider
    Render {
        /// Image prompt index within the saved package
        #[arg(long)]
        index: usize,

        /// Image generation provider
        #[arg(long)]
        provider: ProviderArg,

        /// Reference image: a local file path or a public URL
        #[arg(long)]
        reference: Option<String>,

        /// Influence strength for image-to-image rendering (0.0-1.0)
        #[arg(long)]
        strength: Option<f32>,

        /// Brand profile id (defaults to the active brand)
        #[arg(long)]
        brand: Option<Uuid>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Brand profile management
    #[command(subcommand)]
    Brand(BrandCommands),

    /// Saved campaign management
    #[command(subcommand)]
    Campaign(CampaignCommands),
}

/// Brand profile subcommands
#[derive(Subcommand, Debug)]
pub enum BrandCommands {
    /// List stored brand profiles
    List,

    /// Show a brand profile as JSON
    Show {
        /// Brand profile id (defaults to the active brand)
        id: Option<Uuid>,
    },

    /// Import a brand profile from a JSON file
    Import {
        /// Path to the profile JSON file
        file: PathBuf,

        /// Make the imported brand active
        #[arg(long)]
        activate: bool,
    },

    /// Export a brand profile to a JSON file
    Export {
        /// Brand profile id (defaults to the active brand)
        id: Option<Uuid>,

        /// Output path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Delete a brand profile and its saved campaign
    Delete {
        /// Brand profile id
        id: Uuid,
    },

    /// Mark a brand profile as active
    Activate {
        /// Brand profile id
        id: Uuid,
    },
}

/// Saved campaign subcommands
#[derive(Subcommand, Debug)]
pub enum CampaignCommands {
    /// Show the saved campaign
    Show {
        /// Brand profile id (defaults to the active brand)
        #[arg(long)]
        brand: Option<Uuid>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Clear the saved campaign
    Clear {
        /// Brand profile id (defaults to the active brand)
        #[arg(long)]
        brand: Option<Uuid>,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

/// Image provider argument
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderArg {
    /// Google Gemini image generation
    Gemini,
    /// Ideogram
    Ideogram,
    /// Flux via fal.ai
    Flux,
}

impl From<ProviderArg> for ImageProvider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Gemini => ImageProvider::Gemini,
            ProviderArg::Ideogram => ImageProvider::Ideogram,
            ProviderArg::Flux => ImageProvider::Flux,
        }
    }
}
