use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::crm::Task;
use crate::domain::repositories::TaskRepository;

/// PostgreSQL implementation of [`TaskRepository`].
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: Uuid,
    assignee_id: Uuid,
    title: Option<String>,
    done: Option<bool>,
    due_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            assignee_id: row.assignee_id,
            title: row.title.unwrap_or_default(),
            done: row.done.unwrap_or(false),
            due_at: row.due_at,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn find_by_assignee(&self, assignee_id: Uuid) -> Result<Vec<Task>, String> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, assignee_id, title, done, due_at, created_at
            FROM tasks
            WHERE assignee_id = $1
            ORDER BY due_at ASC NULLS LAST, created_at DESC
            "#,
        )
        .bind(assignee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("failed to load tasks: {e}"))?;

        Ok(rows.into_iter().map(Task::from).collect())
    }
}
