use crate::config::Config;
use crate::db::Repository;
use crate::error::{AppError, Result};
use crate::models::{now_rfc3339, NewTodo, Todo};

pub struct App {
    pub repository: Repository,
}

impl App {
    /// Opens the store and makes sure the `todo` table exists.
    pub async fn new(config: &Config) -> Result<Self> {
        let repository = Repository::new(&config.db_path).await?;
        tracing::debug!(path = %config.db_path.display(), "opened todo store");
        Ok(Self { repository })
    }

    pub async fn close(self) -> Result<()> {
        self.repository.close().await
    }

    /// Adds a todo. The description is taken as-is, without trimming.
    pub async fn add(&self, description: &str) -> Result<i64> {
        if description.is_empty() {
            return Err(AppError::EmptyDescription);
        }
        let id = self.repository.insert_todo(NewTodo::new(description)).await?;
        tracing::debug!(id, "added todo");
        Ok(id)
    }

    /// Marks a todo completed. Completing an already completed todo
    /// succeeds and refreshes its completion time.
    pub async fn complete(&self, id: i64) -> Result<()> {
        let rows = self.repository.complete_todo(id, now_rfc3339()).await?;
        if rows == 0 {
            return Err(AppError::NotFound(id));
        }
        tracing::debug!(id, "completed todo");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let rows = self.repository.delete_todo(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound(id));
        }
        tracing::debug!(id, "deleted todo");
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Todo>> {
        let todos = self.repository.get_all_todos().await?;
        tracing::debug!(count = todos.len(), "listed todos");
        Ok(todos)
    }
}
