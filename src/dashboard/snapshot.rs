use serde::Serialize;

use crate::dashboard::stats::DashboardStats;
use crate::domain::crm::{Deal, Lead, Task};

/// One full aggregation result.
///
/// # Invariants
/// - `stats` is a pure function of the `leads`/`deals` collections the
///   snapshot was assembled with
/// - Snapshots are replaced wholesale, never patched
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    leads: Vec<Lead>,
    deals: Vec<Deal>,
    tasks: Vec<Task>,
    stats: DashboardStats,
}

impl DashboardSnapshot {
    /// The snapshot shown before any fetch has run.
    pub fn empty() -> Self {
        Self::assemble(Vec::new(), Vec::new(), Vec::new())
    }

    /// Builds a snapshot, deriving `stats` from the collections.
    pub fn assemble(leads: Vec<Lead>, deals: Vec<Deal>, tasks: Vec<Task>) -> Self {
        let stats = DashboardStats::compute(&leads, &deals);
        Self {
            leads,
            deals,
            tasks,
            stats,
        }
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_has_zero_stats() {
        let snapshot = DashboardSnapshot::empty();

        assert!(snapshot.leads().is_empty());
        assert!(snapshot.deals().is_empty());
        assert!(snapshot.tasks().is_empty());
        assert_eq!(*snapshot.stats(), DashboardStats::zero());
    }

    #[test]
    fn stats_follow_assembled_collections() {
        use crate::domain::crm::Stage;
        use chrono::Utc;
        use rust_decimal::Decimal;
        use uuid::Uuid;

        let leads = vec![Lead {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            name: "Grace Hopper".to_string(),
            email: Some("grace@navy.mil".to_string()),
            created_at: Utc::now(),
        }];
        let deals = vec![Deal {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            title: "Compiler contract".to_string(),
            amount: Decimal::from(1200),
            stage: Stage::new("open"),
            created_at: Utc::now(),
        }];

        let snapshot = DashboardSnapshot::assemble(leads, deals, Vec::new());

        assert_eq!(snapshot.stats().total_leads, snapshot.leads().len());
        assert_eq!(snapshot.stats().revenue, Decimal::from(1200));
        assert_eq!(snapshot.stats().conversion_rate, 100);
    }
}
