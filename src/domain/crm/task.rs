use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task owned by a single assignee.
///
/// Tasks are keyed by user rather than company; the dashboard carries
/// them through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub assignee_id: Uuid,
    pub title: String,
    pub done: bool,
    pub due_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
