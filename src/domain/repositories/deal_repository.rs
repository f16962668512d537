use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::crm::Deal;

/// Read-side repository for deals.
#[async_trait]
pub trait DealRepository: Send + Sync {
    /// All deals belonging to a company.
    async fn find_by_company(&self, company_id: Uuid) -> Result<Vec<Deal>, String>;
}
