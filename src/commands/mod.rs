pub mod category;
pub mod init;
pub mod migrations;
pub mod quote;
pub mod task;

use crate::libs::app::App;
use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the quote service")]
    Init,
    #[command(about = "Create, list, edit and complete tasks")]
    Task(task::TaskArgs),
    #[command(about = "Manage categories")]
    Category(category::CategoryArgs),
    #[command(about = "Show a motivational quote")]
    Quote,
    #[command(about = "Inspect the database schema version")]
    Migrations(migrations::MigrationsArgs),
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
            Commands::Init => init::cmd(),
            Commands::Task(args) => task::cmd(&Self::app()?, args).await,
            Commands::Category(args) => category::cmd(&Self::app()?, args).await,
            Commands::Quote => quote::cmd(&Self::app()?).await,
            Commands::Migrations(args) => migrations::cmd(&Self::app()?, args),
        }
    }

    fn app() -> Result<App> {
        let config = Config::read()?.with_env_overrides();
        App::new(&config)
    }
}
