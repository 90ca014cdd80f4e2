use crate::db::migrations::{get_db_version, needs_migration, MigrationManager};
use crate::libs::app::App;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    #[command(about = "Show current and latest schema version")]
    Status,
    #[command(about = "List applied migrations")]
    History,
}

pub fn cmd(app: &App, args: MigrationsArgs) -> Result<()> {
    let manager = MigrationManager::new();

    match args.command {
        MigrationsCommand::Status => {
            let (current, pending) = app.db.read(|conn| Ok((get_db_version(conn)?, needs_migration(conn)?)))?;
            msg_print!(Message::DatabaseVersion(current, manager.latest_version()));
            if pending {
                msg_warning!(Message::MigrationsPending);
            } else {
                msg_info!(Message::DatabaseUpToDate);
            }
        }
        MigrationsCommand::History => {
            let history = app.db.read(|conn| manager.get_migration_history(conn))?;
            View::migrations(&history);
        }
    }

    Ok(())
}
