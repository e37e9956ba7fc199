use std::path::Path;

use rusqlite::{params, OptionalExtension, Row};
use tokio_rusqlite::Connection;

use crate::error::Result;
use crate::models::{NewTodo, Todo};

use super::schema::SCHEMA;

pub struct Repository {
    conn: Connection,
}

impl Repository {
    pub async fn new(db_path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(db_path.as_ref()).await?;
        let repository = Self { conn };
        repository.ensure_schema().await?;
        Ok(repository)
    }

    pub async fn ensure_schema(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.execute_batch(SCHEMA)?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    /// Closes the connection, surfacing any error SQLite reports on close.
    /// Dropping the repository also closes it.
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        Ok(())
    }

    // Todo operations

    pub async fn insert_todo(&self, todo: NewTodo) -> Result<i64> {
        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    r#"INSERT INTO todo (description, completed, date_created, date_completed)
                       VALUES (?1, ?2, ?3, ?4)"#,
                    params![todo.description, false, todo.date_created, ""],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await?;
        Ok(id)
    }

    pub async fn complete_todo(&self, id: i64, date_completed: String) -> Result<usize> {
        let rows = self
            .conn
            .call(move |conn| {
                let rows = conn.execute(
                    "UPDATE todo SET completed = 1, date_completed = ?1 WHERE id = ?2",
                    params![date_completed, id],
                )?;
                Ok(rows)
            })
            .await?;
        Ok(rows)
    }

    pub async fn delete_todo(&self, id: i64) -> Result<usize> {
        let rows = self
            .conn
            .call(move |conn| {
                let rows = conn.execute("DELETE FROM todo WHERE id = ?1", params![id])?;
                Ok(rows)
            })
            .await?;
        Ok(rows)
    }

    pub async fn get_all_todos(&self) -> Result<Vec<Todo>> {
        let todos = self
            .conn
            .call(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, description, completed, date_created, date_completed FROM todo ORDER BY id",
                )?;
                let todos = stmt
                    .query_map([], todo_from_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(todos)
            })
            .await?;
        Ok(todos)
    }

    #[allow(dead_code)]
    pub async fn get_todo(&self, id: i64) -> Result<Option<Todo>> {
        let todo = self
            .conn
            .call(move |conn| {
                let todo = conn
                    .query_row(
                        "SELECT id, description, completed, date_created, date_completed FROM todo WHERE id = ?1",
                        params![id],
                        todo_from_row,
                    )
                    .optional()?;
                Ok(todo)
            })
            .await?;
        Ok(todo)
    }

    #[cfg(test)]
    pub async fn drop_table(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.execute_batch("DROP TABLE todo")?;
                Ok(())
            })
            .await?;
        Ok(())
    }
}

fn todo_from_row(row: &Row) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        description: row.get(1)?,
        completed: row.get(2)?,
        date_created: row.get(3)?,
        date_completed: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}
