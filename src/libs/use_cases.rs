//! Action-oriented wrappers around [`TaskRepository`].
//!
//! Each use case exposes exactly one repository operation. They add no
//! logic; front ends depend on the [`TaskUseCases`] bundle rather than on the
//! repository so every action they can take is listed in one place.

use super::quote::Quote;
use super::repository::TaskRepository;
use super::task::{Priority, Task, TaskQuery};
use crate::api::QuoteSource;
use crate::db::live::LiveQuery;
use anyhow::Result;
use std::sync::Arc;

pub struct AddTask<Q: QuoteSource> {
    repository: Arc<TaskRepository<Q>>,
}

impl<Q: QuoteSource> AddTask<Q> {
    pub async fn execute(&self, task: &Task) -> Result<i64> {
        self.repository.add_task(task).await
    }
}

pub struct UpdateTask<Q: QuoteSource> {
    repository: Arc<TaskRepository<Q>>,
}

impl<Q: QuoteSource> UpdateTask<Q> {
    pub async fn execute(&self, task: &Task) -> Result<()> {
        self.repository.update_task(task).await
    }
}

pub struct DeleteTask<Q: QuoteSource> {
    repository: Arc<TaskRepository<Q>>,
}

impl<Q: QuoteSource> DeleteTask<Q> {
    pub async fn execute(&self, task: &Task) -> Result<()> {
        self.repository.delete_task(task).await
    }
}

pub struct GetAllTasks<Q: QuoteSource> {
    repository: Arc<TaskRepository<Q>>,
}

impl<Q: QuoteSource> GetAllTasks<Q> {
    pub fn execute(&self) -> LiveQuery {
        self.repository.get_all_tasks()
    }
}

pub struct GetTaskById<Q: QuoteSource> {
    repository: Arc<TaskRepository<Q>>,
}

impl<Q: QuoteSource> GetTaskById<Q> {
    pub async fn execute(&self, id: i64) -> Result<Option<Task>> {
        self.repository.get_task_by_id(id).await
    }
}

pub struct SetTaskCompletion<Q: QuoteSource> {
    repository: Arc<TaskRepository<Q>>,
}

impl<Q: QuoteSource> SetTaskCompletion<Q> {
    pub async fn execute(&self, id: i64, completed: bool) -> Result<Option<Task>> {
        self.repository.set_completed(id, completed).await
    }
}

pub struct GetQuote<Q: QuoteSource> {
    repository: Arc<TaskRepository<Q>>,
}

impl<Q: QuoteSource> GetQuote<Q> {
    pub async fn execute(&self) -> Result<Quote> {
        self.repository.get_random_quote().await
    }
}

pub struct GetCategories<Q: QuoteSource> {
    repository: Arc<TaskRepository<Q>>,
}

impl<Q: QuoteSource> GetCategories<Q> {
    pub async fn execute(&self) -> Result<Vec<String>> {
        self.repository.get_all_categories().await
    }
}

pub struct FilterTasks<Q: QuoteSource> {
    repository: Arc<TaskRepository<Q>>,
}

impl<Q: QuoteSource> FilterTasks<Q> {
    pub fn by_category(&self, category: &str) -> LiveQuery {
        self.repository.get_tasks_by_category(category)
    }

    pub fn by_priority(&self, priority: Priority) -> LiveQuery {
        self.repository.get_tasks_by_priority(priority)
    }

    pub fn by_status(&self, completed: bool) -> LiveQuery {
        self.repository.get_tasks_by_status(completed)
    }

    pub fn matching(&self, query: TaskQuery) -> LiveQuery {
        self.repository.get_tasks_matching(query)
    }

    pub fn high_priority_pending(&self) -> LiveQuery {
        self.repository.get_high_priority_pending()
    }
}

pub struct AddCategory<Q: QuoteSource> {
    repository: Arc<TaskRepository<Q>>,
}

impl<Q: QuoteSource> AddCategory<Q> {
    pub async fn execute(&self, name: &str) -> Result<()> {
        self.repository.add_category(name).await
    }
}

pub struct DeleteCategory<Q: QuoteSource> {
    repository: Arc<TaskRepository<Q>>,
}

impl<Q: QuoteSource> DeleteCategory<Q> {
    pub async fn execute(&self, name: &str) -> Result<()> {
        self.repository.delete_category(name).await
    }
}

pub struct UpdateCategory<Q: QuoteSource> {
    repository: Arc<TaskRepository<Q>>,
}

impl<Q: QuoteSource> UpdateCategory<Q> {
    pub async fn execute(&self, old: &str, new: &str) -> Result<()> {
        self.repository.update_category(old, new).await
    }
}

/// All actions available to a front end.
pub struct TaskUseCases<Q: QuoteSource> {
    pub add_task: AddTask<Q>,
    pub update_task: UpdateTask<Q>,
    pub delete_task: DeleteTask<Q>,
    pub get_all_tasks: GetAllTasks<Q>,
    pub get_task_by_id: GetTaskById<Q>,
    pub set_task_completion: SetTaskCompletion<Q>,
    pub get_quote: GetQuote<Q>,
    pub get_categories: GetCategories<Q>,
    pub filter_tasks: FilterTasks<Q>,
    pub add_category: AddCategory<Q>,
    pub delete_category: DeleteCategory<Q>,
    pub update_category: UpdateCategory<Q>,
}

impl<Q: QuoteSource> TaskUseCases<Q> {
    pub fn new(repository: Arc<TaskRepository<Q>>) -> Self {
        Self {
            add_task: AddTask { repository: Arc::clone(&repository) },
            update_task: UpdateTask { repository: Arc::clone(&repository) },
            delete_task: DeleteTask { repository: Arc::clone(&repository) },
            get_all_tasks: GetAllTasks { repository: Arc::clone(&repository) },
            get_task_by_id: GetTaskById { repository: Arc::clone(&repository) },
            set_task_completion: SetTaskCompletion { repository: Arc::clone(&repository) },
            get_quote: GetQuote { repository: Arc::clone(&repository) },
            get_categories: GetCategories { repository: Arc::clone(&repository) },
            filter_tasks: FilterTasks { repository: Arc::clone(&repository) },
            add_category: AddCategory { repository: Arc::clone(&repository) },
            delete_category: DeleteCategory { repository: Arc::clone(&repository) },
            update_category: UpdateCategory { repository },
        }
    }
}
