//! Todo repository
//!
//! Every mutation is a single auto-committed statement:
//! - add/edit: blank text is a silent no-op
//! - toggle: `UPDATE .. SET done = NOT done .. RETURNING` (no read-then-write)
//! - edit/toggle/delete on a missing id: silent no-op

use sqlx::{FromRow, SqliteConnection};

use todoctl_core::{TaskText, TodoItem};

use crate::db::DbError;

/// Todo record from database
#[derive(Debug, FromRow)]
struct TodoRow {
    id: i64,
    task: String,
    done: bool,
}

impl From<TodoRow> for TodoItem {
    fn from(row: TodoRow) -> Self {
        Self {
            id: row.id,
            task: row.task,
            done: row.done,
        }
    }
}

/// Todo repository bound to one request's connection
pub struct TodoRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> TodoRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// All items, ascending by id.
    pub async fn list_all(&mut self) -> Result<Vec<TodoItem>, DbError> {
        let rows: Vec<TodoRow> = sqlx::query_as("SELECT id, task, done FROM todos ORDER BY id")
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows.into_iter().map(TodoItem::from).collect())
    }

    /// Insert a new open item with the trimmed `task`.
    ///
    /// Returns the new id, or `None` when `task` is blank and nothing was
    /// written.
    pub async fn add(&mut self, task: &str) -> Result<Option<i64>, DbError> {
        let Ok(task) = TaskText::new(task) else {
            tracing::debug!("ignoring blank task on add");
            return Ok(None);
        };

        let result = sqlx::query("INSERT INTO todos (task, done) VALUES (?, ?)")
            .bind(task.as_str())
            .bind(false)
            .execute(&mut *self.conn)
            .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, "todo added");
        Ok(Some(id))
    }

    /// Get a single item by id.
    pub async fn get(&mut self, id: i64) -> Result<Option<TodoItem>, DbError> {
        let row: Option<TodoRow> = sqlx::query_as("SELECT id, task, done FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(row.map(TodoItem::from))
    }

    /// Replace the task text of an existing item. `done` is left alone.
    ///
    /// Returns whether a row changed; blank text or an unknown id is a no-op.
    pub async fn edit(&mut self, id: i64, new_task: &str) -> Result<bool, DbError> {
        let Ok(task) = TaskText::new(new_task) else {
            tracing::debug!(id, "ignoring blank task on edit");
            return Ok(false);
        };

        let result = sqlx::query("UPDATE todos SET task = ? WHERE id = ?")
            .bind(task.as_str())
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Flip `done` on an existing item.
    ///
    /// Returns the new value, or `None` if the id does not exist.
    pub async fn toggle(&mut self, id: i64) -> Result<Option<bool>, DbError> {
        let done: Option<bool> =
            sqlx::query_scalar("UPDATE todos SET done = NOT done WHERE id = ? RETURNING done")
                .bind(id)
                .fetch_optional(&mut *self.conn)
                .await?;

        if let Some(done) = done {
            tracing::debug!(id, done, "todo toggled");
        }
        Ok(done)
    }

    /// Remove an item. Returns whether a row was deleted.
    pub async fn delete(&mut self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ConnectionScope;
    use crate::test_support::temp_pool;

    #[tokio::test]
    async fn add_then_list() {
        let (_dir, pool) = temp_pool(1).await;
        let mut scope = ConnectionScope::new(pool);
        let mut repo = TodoRepo::new(scope.acquire().await.unwrap());

        let id = repo.add("Buy milk").await.unwrap().expect("inserted");
        let items = repo.list_all().await.unwrap();

        assert_eq!(
            items,
            vec![TodoItem {
                id,
                task: "Buy milk".into(),
                done: false,
            }]
        );
    }

    #[tokio::test]
    async fn add_stores_trimmed_text() {
        let (_dir, pool) = temp_pool(1).await;
        let mut scope = ConnectionScope::new(pool);
        let mut repo = TodoRepo::new(scope.acquire().await.unwrap());

        let id = repo.add("  Call mom \n").await.unwrap().unwrap();
        assert_eq!(repo.get(id).await.unwrap().unwrap().task, "Call mom");
    }

    #[tokio::test]
    async fn add_blank_is_noop() {
        let (_dir, pool) = temp_pool(1).await;
        let mut scope = ConnectionScope::new(pool);
        let mut repo = TodoRepo::new(scope.acquire().await.unwrap());
        repo.add("Existing").await.unwrap();
        let before = repo.list_all().await.unwrap();

        assert_eq!(repo.add("").await.unwrap(), None);
        assert_eq!(repo.add("   \t ").await.unwrap(), None);

        assert_eq!(repo.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn get_missing_is_none() {
        let (_dir, pool) = temp_pool(1).await;
        let mut scope = ConnectionScope::new(pool);
        let mut repo = TodoRepo::new(scope.acquire().await.unwrap());

        assert_eq!(repo.get(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn toggle_twice_restores_done() {
        let (_dir, pool) = temp_pool(1).await;
        let mut scope = ConnectionScope::new(pool);
        let mut repo = TodoRepo::new(scope.acquire().await.unwrap());
        let id = repo.add("Walk dog").await.unwrap().unwrap();

        assert_eq!(repo.toggle(id).await.unwrap(), Some(true));
        assert!(repo.get(id).await.unwrap().unwrap().done);

        assert_eq!(repo.toggle(id).await.unwrap(), Some(false));
        assert!(!repo.get(id).await.unwrap().unwrap().done);
    }

    #[tokio::test]
    async fn toggle_missing_is_noop() {
        let (_dir, pool) = temp_pool(1).await;
        let mut scope = ConnectionScope::new(pool);
        let mut repo = TodoRepo::new(scope.acquire().await.unwrap());
        repo.add("Only one").await.unwrap();
        let before = repo.list_all().await.unwrap();

        assert_eq!(repo.toggle(999).await.unwrap(), None);
        assert_eq!(repo.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn edit_updates_task_and_keeps_done() {
        let (_dir, pool) = temp_pool(1).await;
        let mut scope = ConnectionScope::new(pool);
        let mut repo = TodoRepo::new(scope.acquire().await.unwrap());
        let id = repo.add("Old Task").await.unwrap().unwrap();
        repo.toggle(id).await.unwrap();

        assert!(repo.edit(id, "  Updated Task ").await.unwrap());

        let item = repo.get(id).await.unwrap().unwrap();
        assert_eq!(item.task, "Updated Task");
        assert!(item.done);
    }

    #[tokio::test]
    async fn edit_blank_is_noop() {
        let (_dir, pool) = temp_pool(1).await;
        let mut scope = ConnectionScope::new(pool);
        let mut repo = TodoRepo::new(scope.acquire().await.unwrap());
        let id = repo.add("Keep me").await.unwrap().unwrap();

        assert!(!repo.edit(id, "   ").await.unwrap());
        assert_eq!(repo.get(id).await.unwrap().unwrap().task, "Keep me");
    }

    #[tokio::test]
    async fn edit_missing_is_noop() {
        let (_dir, pool) = temp_pool(1).await;
        let mut scope = ConnectionScope::new(pool);
        let mut repo = TodoRepo::new(scope.acquire().await.unwrap());
        repo.add("Untouched").await.unwrap();
        let before = repo.list_all().await.unwrap();

        assert!(!repo.edit(12345, "Ghost").await.unwrap());
        assert_eq!(repo.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn delete_twice() {
        let (_dir, pool) = temp_pool(1).await;
        let mut scope = ConnectionScope::new(pool);
        let mut repo = TodoRepo::new(scope.acquire().await.unwrap());
        let keep = repo.add("Keep").await.unwrap().unwrap();
        let gone = repo.add("Remove").await.unwrap().unwrap();

        assert!(repo.delete(gone).await.unwrap());
        let after_first = repo.list_all().await.unwrap();
        assert!(!repo.delete(gone).await.unwrap());

        assert_eq!(repo.list_all().await.unwrap(), after_first);
        assert_eq!(after_first.len(), 1);
        assert_eq!(after_first[0].id, keep);
    }

    #[tokio::test]
    async fn list_is_ordered_by_id_after_churn() {
        let (_dir, pool) = temp_pool(1).await;
        let mut scope = ConnectionScope::new(pool);
        let mut repo = TodoRepo::new(scope.acquire().await.unwrap());

        let a = repo.add("a").await.unwrap().unwrap();
        let b = repo.add("b").await.unwrap().unwrap();
        repo.delete(a).await.unwrap();
        let c = repo.add("c").await.unwrap().unwrap();
        repo.edit(b, "b2").await.unwrap();
        repo.toggle(b).await.unwrap();
        let d = repo.add("d").await.unwrap().unwrap();

        let ids: Vec<i64> = repo.list_all().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![b, c, d]);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let (_dir, pool) = temp_pool(1).await;
        let mut scope = ConnectionScope::new(pool);
        let mut repo = TodoRepo::new(scope.acquire().await.unwrap());

        let first = repo.add("first").await.unwrap().unwrap();
        repo.delete(first).await.unwrap();
        let second = repo.add("second").await.unwrap().unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn writes_are_visible_to_other_scopes() {
        let (_dir, pool) = temp_pool(2).await;
        let mut writer = ConnectionScope::new(pool.clone());
        let id = TodoRepo::new(writer.acquire().await.unwrap())
            .add("Shared")
            .await
            .unwrap()
            .unwrap();
        writer.release();

        let mut reader = ConnectionScope::new(pool);
        let item = TodoRepo::new(reader.acquire().await.unwrap())
            .get(id)
            .await
            .unwrap();
        assert_eq!(item.map(|t| t.task), Some("Shared".to_string()));
    }
}
