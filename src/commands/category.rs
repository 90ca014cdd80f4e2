use crate::libs::app::App;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    command: CategoryCommand,
}

#[derive(Debug, Subcommand)]
enum CategoryCommand {
    #[command(about = "List categories, including those only used by tasks")]
    List,
    #[command(about = "Register a category")]
    Add { name: String },
    #[command(about = "Remove a registered category; tasks keep their label")]
    Delete {
        name: String,
        #[arg(short = 'y', long, help = "Skip confirmation")]
        yes: bool,
    },
    #[command(about = "Rename a category and move its tasks")]
    Rename { old: String, new: String },
}

pub async fn cmd(app: &App, args: CategoryArgs) -> Result<()> {
    let use_cases = &app.use_cases;

    match args.command {
        CategoryCommand::List => {
            let categories = use_cases.get_categories.execute().await?;
            if categories.is_empty() {
                msg_info!(Message::CategoriesNotFound);
            } else {
                View::categories(&categories);
            }
        }
        CategoryCommand::Add { name } => {
            let name = normalize_category(&name)?;
            use_cases.add_category.execute(&name).await?;
            msg_success!(Message::CategoryAdded(name));
        }
        CategoryCommand::Delete { name, yes } => {
            let name = normalize_category(&name)?;
            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteCategory(name.clone()).to_string())
                    .default(false)
                    .interact()?;
            if !confirmed {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }

            use_cases.delete_category.execute(&name).await?;
            msg_success!(Message::CategoryDeleted(name));
        }
        CategoryCommand::Rename { old, new } => {
            let old = normalize_category(&old)?;
            let new = normalize_category(&new)?;
            use_cases.update_category.execute(&old, &new).await?;
            msg_success!(Message::CategoryRenamed(old, new));
        }
    }

    Ok(())
}

/// Trimmed category name; blank input is rejected.
pub(crate) fn normalize_category(input: &str) -> Result<String> {
    let name = input.trim();
    if name.is_empty() {
        msg_bail_anyhow!(Message::CategoryRequired);
    }
    Ok(name.to_string())
}
