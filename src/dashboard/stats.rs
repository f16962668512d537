use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::crm::{Deal, Lead};

/// Aggregate figures shown on the dashboard.
///
/// Always derived from a leads/deals pair in one shot; never updated
/// incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Sum of `amount` over every deal.
    pub revenue: Decimal,
    /// Deals whose stage is anything other than the literal `"closed"`.
    pub active_deals: usize,
    /// Percentage of leads converted into deals, rounded to the
    /// nearest integer.
    pub conversion_rate: u32,
    /// Number of leads.
    pub total_leads: usize,
}

impl DashboardStats {
    /// Stats for a dashboard with no data.
    pub fn zero() -> Self {
        Self {
            revenue: Decimal::ZERO,
            active_deals: 0,
            conversion_rate: 0,
            total_leads: 0,
        }
    }

    /// Computes the aggregate figures for one snapshot.
    ///
    /// The conversion rate counts every deal against every lead, not
    /// only closed ones.
    pub fn compute(leads: &[Lead], deals: &[Deal]) -> Self {
        let revenue = deals.iter().map(|d| d.amount).sum();
        let active_deals = deals.iter().filter(|d| !d.stage.is_closed()).count();
        let total_leads = leads.len();

        Self {
            revenue,
            active_deals,
            conversion_rate: conversion_rate(deals.len(), total_leads),
            total_leads,
        }
    }
}

/// Deal count as a percentage of lead count, rounded half-to-even.
/// Zero leads means a zero rate.
fn conversion_rate(deal_count: usize, lead_count: usize) -> u32 {
    if lead_count == 0 {
        return 0;
    }

    let percent = Decimal::from(deal_count as u64 * 100) / Decimal::from(lead_count as u64);
    percent.round().to_u32().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::crm::Stage;
    use chrono::Utc;
    use uuid::Uuid;

    fn lead() -> Lead {
        Lead {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            name: "Ada Lovelace".to_string(),
            email: None,
            created_at: Utc::now(),
        }
    }

    fn deal(amount: i64, stage: &str) -> Deal {
        Deal {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            title: "Renewal".to_string(),
            amount: Decimal::from(amount),
            stage: Stage::new(stage),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_inputs_yield_zero_stats() {
        assert_eq!(DashboardStats::compute(&[], &[]), DashboardStats::zero());
    }

    #[test]
    fn revenue_sums_all_deal_amounts() {
        let deals = vec![deal(100, "closed"), deal(50, "open")];
        let stats = DashboardStats::compute(&[], &deals);
        assert_eq!(stats.revenue, Decimal::from(150));
    }

    #[test]
    fn revenue_includes_closed_deals() {
        let deals = vec![deal(75, "closed")];
        let stats = DashboardStats::compute(&[], &deals);
        assert_eq!(stats.revenue, Decimal::from(75));
    }

    #[test]
    fn active_deals_excludes_only_literal_closed() {
        let deals = vec![
            deal(10, "closed"),
            deal(10, "open"),
            deal(10, "Closed"),
            deal(10, "negotiation"),
        ];
        let stats = DashboardStats::compute(&[], &deals);
        assert_eq!(stats.active_deals, 3);
    }

    #[test]
    fn total_leads_is_lead_count() {
        let leads = vec![lead(), lead(), lead()];
        let stats = DashboardStats::compute(&leads, &[]);
        assert_eq!(stats.total_leads, 3);
    }

    #[test]
    fn three_leads_two_deals_scenario() {
        let leads = vec![lead(), lead(), lead()];
        let deals = vec![deal(100, "closed"), deal(50, "open")];

        let stats = DashboardStats::compute(&leads, &deals);

        assert_eq!(stats.revenue, Decimal::from(150));
        assert_eq!(stats.active_deals, 1);
        assert_eq!(stats.total_leads, 3);
        // 2 / 3 * 100 = 66.67, rounds to 67
        assert_eq!(stats.conversion_rate, 67);
    }

    #[test]
    fn zero_leads_means_zero_conversion_rate() {
        let deals = vec![deal(10, "open")];

        let stats = DashboardStats::compute(&[], &deals);

        assert_eq!(stats.revenue, Decimal::from(10));
        assert_eq!(stats.active_deals, 1);
        assert_eq!(stats.total_leads, 0);
        assert_eq!(stats.conversion_rate, 0);
    }

    #[test]
    fn conversion_rate_counts_every_deal_not_only_closed() {
        let leads = vec![lead(), lead()];
        let deals = vec![deal(10, "open")];

        let stats = DashboardStats::compute(&leads, &deals);
        assert_eq!(stats.conversion_rate, 50);
    }

    #[test]
    fn conversion_rate_rounds_half_to_even() {
        // 1 / 8 * 100 = 12.5 -> 12
        assert_eq!(conversion_rate(1, 8), 12);
        // 3 / 8 * 100 = 37.5 -> 38
        assert_eq!(conversion_rate(3, 8), 38);
    }

    #[test]
    fn conversion_rate_can_exceed_one_hundred() {
        // More deals than leads is valid input, not an error.
        assert_eq!(conversion_rate(3, 2), 150);
    }

    #[test]
    fn identical_inputs_yield_identical_stats() {
        let leads = vec![lead(), lead(), lead()];
        let deals = vec![deal(100, "closed"), deal(50, "open")];

        let first = DashboardStats::compute(&leads, &deals);
        let second = DashboardStats::compute(&leads, &deals);

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
