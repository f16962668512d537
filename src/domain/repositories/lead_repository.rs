use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::crm::Lead;

/// Read-side repository for leads.
///
/// The dashboard never writes leads; ingestion happens elsewhere.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// All leads belonging to a company.
    async fn find_by_company(&self, company_id: Uuid) -> Result<Vec<Lead>, String>;
}
