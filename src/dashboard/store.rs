use std::sync::{Arc, RwLock};

use tracing::warn;
use uuid::Uuid;

use crate::dashboard::snapshot::DashboardSnapshot;
use crate::domain::repositories::{DealRepository, LeadRepository, TaskRepository};

/// Application-wide dashboard state with a single update entry point.
///
/// Holds the most recently published [`DashboardSnapshot`] and replaces
/// it wholesale on every [`refresh`](Self::refresh). Callers hold an
/// explicit handle; there is no ambient singleton.
pub struct DashboardStore {
    leads: Arc<dyn LeadRepository>,
    deals: Arc<dyn DealRepository>,
    tasks: Arc<dyn TaskRepository>,
    current: RwLock<Arc<DashboardSnapshot>>,
}

impl DashboardStore {
    /// Creates a store over the given repositories, starting from an
    /// empty snapshot.
    pub fn new(
        leads: Arc<dyn LeadRepository>,
        deals: Arc<dyn DealRepository>,
        tasks: Arc<dyn TaskRepository>,
    ) -> Self {
        Self {
            leads,
            deals,
            tasks,
            current: RwLock::new(Arc::new(DashboardSnapshot::empty())),
        }
    }

    /// The most recently published snapshot, readable at any time.
    pub fn snapshot(&self) -> Arc<DashboardSnapshot> {
        self.current.read().expect("snapshot lock poisoned").clone()
    }

    /// Runs the aggregation for one company/user scope and publishes
    /// the result.
    ///
    /// The three reads are independent and run concurrently. A failed
    /// read is substituted with an empty collection, so a snapshot is
    /// always published and no error surfaces to the caller.
    pub async fn refresh(&self, company_id: Uuid, user_id: Uuid) -> Arc<DashboardSnapshot> {
        let (leads, deals, tasks) = tokio::join!(
            self.leads.find_by_company(company_id),
            self.deals.find_by_company(company_id),
            self.tasks.find_by_assignee(user_id),
        );

        let leads = leads.unwrap_or_else(|e| {
            warn!(%company_id, error = %e, "lead query failed, substituting empty set");
            Vec::new()
        });
        let deals = deals.unwrap_or_else(|e| {
            warn!(%company_id, error = %e, "deal query failed, substituting empty set");
            Vec::new()
        });
        let tasks = tasks.unwrap_or_else(|e| {
            warn!(%user_id, error = %e, "task query failed, substituting empty set");
            Vec::new()
        });

        let next = Arc::new(DashboardSnapshot::assemble(leads, deals, tasks));
        *self.current.write().expect("snapshot lock poisoned") = Arc::clone(&next);
        next
    }
}
