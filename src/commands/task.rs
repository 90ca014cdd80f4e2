use super::category::normalize_category;
use crate::libs::app::App;
use crate::libs::formatter::parse_due_date;
use crate::libs::messages::Message;
use crate::libs::task::{Priority, Task, TaskQuery};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    #[command(about = "Create a task")]
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(long, help = "Due date as YYYY-MM-DD")]
        due: Option<String>,
        #[arg(short, long, default_value = "medium", help = "low, medium or high")]
        priority: Priority,
        #[arg(short, long, default_value = "General")]
        category: String,
    },
    #[command(about = "List tasks ordered by due date")]
    List {
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        priority: Option<Priority>,
        #[arg(long, conflicts_with = "pending")]
        completed: bool,
        #[arg(long)]
        pending: bool,
        #[arg(long, help = "Only pending high priority tasks", conflicts_with_all = ["priority", "completed", "pending"])]
        urgent: bool,
    },
    #[command(about = "Show a single task")]
    Show { id: i64 },
    #[command(about = "Change fields of a task")]
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long, help = "Due date as YYYY-MM-DD")]
        due: Option<String>,
        #[arg(short, long)]
        priority: Option<Priority>,
        #[arg(short, long)]
        category: Option<String>,
    },
    #[command(about = "Mark a task as done")]
    Done { id: i64 },
    #[command(about = "Reopen a completed task")]
    Undo { id: i64 },
    #[command(about = "Delete a task")]
    Delete {
        id: i64,
        #[arg(short = 'y', long, help = "Skip confirmation")]
        yes: bool,
    },
}

pub async fn cmd(app: &App, args: TaskArgs) -> Result<()> {
    let use_cases = &app.use_cases;

    match args.command {
        TaskCommand::Add {
            title,
            description,
            due,
            priority,
            category,
        } => {
            let due_date = due.as_deref().map(parse_due_date).transpose()?.unwrap_or(0);
            let task = Task::new(&required_title(&title)?, description.trim(), due_date, priority, &normalize_category(&category)?);
            let id = use_cases.add_task.execute(&task).await?;
            msg_success!(Message::TaskCreated(id));
        }
        TaskCommand::List {
            category,
            priority,
            completed,
            pending,
            urgent,
        } => {
            let query = TaskQuery {
                category,
                priority,
                completed: match (completed, pending) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                },
            };
            let live = match (urgent, query.is_empty()) {
                (true, _) => use_cases.filter_tasks.high_priority_pending(),
                (false, true) => use_cases.get_all_tasks.execute(),
                (false, false) => use_cases.filter_tasks.matching(query),
            };

            let tasks = live.snapshot()?;
            if tasks.is_empty() {
                msg_info!(Message::TasksNotFound);
                return Ok(());
            }
            msg_print!(Message::TasksHeader(tasks.len()));
            View::tasks(&tasks);
        }
        TaskCommand::Show { id } => match use_cases.get_task_by_id.execute(id).await? {
            Some(task) => View::task(&task),
            None => msg_bail_anyhow!(Message::TaskNotFound(id)),
        },
        TaskCommand::Edit {
            id,
            title,
            description,
            due,
            priority,
            category,
        } => {
            let Some(mut task) = use_cases.get_task_by_id.execute(id).await? else {
                msg_bail_anyhow!(Message::TaskNotFound(id));
            };
            if title.is_none() && description.is_none() && due.is_none() && priority.is_none() && category.is_none() {
                msg_warning!(Message::NothingToUpdate);
                return Ok(());
            }

            if let Some(title) = title {
                task.title = required_title(&title)?;
            }
            if let Some(description) = description {
                task.description = description.trim().to_string();
            }
            if let Some(due) = due {
                task.due_date = parse_due_date(&due)?;
            }
            if let Some(priority) = priority {
                task.priority = priority;
            }
            if let Some(category) = category {
                task.category = normalize_category(&category)?;
            }

            use_cases.update_task.execute(&task).await?;
            msg_success!(Message::TaskUpdated(id));
        }
        TaskCommand::Done { id } => match use_cases.set_task_completion.execute(id, true).await? {
            Some(_) => msg_success!(Message::TaskCompleted(id)),
            None => msg_bail_anyhow!(Message::TaskNotFound(id)),
        },
        TaskCommand::Undo { id } => match use_cases.set_task_completion.execute(id, false).await? {
            Some(_) => msg_success!(Message::TaskReopened(id)),
            None => msg_bail_anyhow!(Message::TaskNotFound(id)),
        },
        TaskCommand::Delete { id, yes } => {
            let Some(task) = use_cases.get_task_by_id.execute(id).await? else {
                msg_bail_anyhow!(Message::TaskNotFound(id));
            };
            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
                    .default(false)
                    .interact()?;
            if !confirmed {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }

            use_cases.delete_task.execute(&task).await?;
            msg_success!(Message::TaskDeleted(id));
        }
    }

    Ok(())
}

fn required_title(input: &str) -> Result<String> {
    let title = input.trim();
    if title.is_empty() {
        msg_bail_anyhow!(Message::TitleRequired);
    }
    Ok(title.to_string())
}
