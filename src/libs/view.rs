use super::formatter::{format_due_date, format_optional_date};
use super::quote::Quote;
use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DUE", "PRIORITY", "CATEGORY", "DONE"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                format_due_date(task.due_date),
                task.priority,
                task.category,
                if task.is_completed { "✔" } else { "" }
            ]);
        }
        table.printstd();
    }

    pub fn task(task: &Task) {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["TITLE", task.title]);
        table.add_row(row!["DESCRIPTION", task.description]);
        table.add_row(row!["DUE", format_due_date(task.due_date)]);
        table.add_row(row!["PRIORITY", task.priority]);
        table.add_row(row!["CATEGORY", task.category]);
        table.add_row(row!["DONE", if task.is_completed { "yes" } else { "no" }]);
        table.add_row(row!["COMPLETED", format_optional_date(task.completed_date)]);
        table.printstd();
    }

    pub fn categories(categories: &[String]) {
        let mut table = Table::new();

        table.add_row(row!["CATEGORY"]);
        for category in categories {
            table.add_row(row![category]);
        }
        table.printstd();
    }

    pub fn quote(quote: &Quote) {
        println!("\n“{}”", quote.content);
        if !quote.author.is_empty() {
            println!("    ~ {}", quote.author);
        }
        println!();
    }

    pub fn migrations(history: &[(u32, String, String)]) {
        let mut table = Table::new();

        table.add_row(row!["VERSION", "NAME", "APPLIED AT"]);
        for (version, name, applied_at) in history {
            table.add_row(row![version, name, applied_at]);
        }
        table.printstd();
    }
}
