use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::crm::Task;

/// Read-side repository for tasks.
///
/// Tasks are scoped to their assignee, not to a company.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All tasks assigned to a user.
    async fn find_by_assignee(&self, assignee_id: Uuid) -> Result<Vec<Task>, String>;
}
