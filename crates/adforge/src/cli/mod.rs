//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! adforge binary.

mod brand;
mod campaign;
mod commands;
mod run;

pub use brand::handle_brand_command;
pub use campaign::handle_campaign_command;
pub use commands::{Cli, Commands};
pub use run::{run_generate, run_refine, run_render};
