//! Command-line interface.
//!
//! | Command  | Purpose                                              |
//! |----------|------------------------------------------------------|
//! | `init`   | Configuration wizard, `--delete` removes the config  |
//! | `render` | SVG log chart per day                                |
//! | `days`   | Table of day summaries with resolved locations       |
//! | `export` | Day summaries as CSV or JSON                         |

pub mod days;
pub mod export;
pub mod init;
pub mod render;
pub mod source;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Render log charts as SVG")]
    Render(render::RenderArgs),
    #[command(about = "Show the daily log sheet")]
    Days(days::DaysArgs),
    #[command(about = "Export the daily log sheet")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Render(args) => render::cmd(args).await,
            Commands::Days(args) => days::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}
