use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::crm::{Deal, Stage};
use crate::domain::repositories::DealRepository;

/// PostgreSQL implementation of [`DealRepository`].
pub struct PostgresDealRepository {
    pool: PgPool,
}

impl PostgresDealRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw row shape. Amount and stage may be NULL in imported data and
/// are defaulted here so the aggregation never sees holes.
#[derive(sqlx::FromRow)]
struct DealRow {
    id: Uuid,
    company_id: Uuid,
    title: Option<String>,
    amount: Option<Decimal>,
    stage: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<DealRow> for Deal {
    fn from(row: DealRow) -> Self {
        Deal {
            id: row.id,
            company_id: row.company_id,
            title: row.title.unwrap_or_default(),
            amount: row.amount.unwrap_or(Decimal::ZERO),
            stage: Stage::new(row.stage.unwrap_or_default()),
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl DealRepository for PostgresDealRepository {
    async fn find_by_company(&self, company_id: Uuid) -> Result<Vec<Deal>, String> {
        let rows = sqlx::query_as::<_, DealRow>(
            r#"
            SELECT id, company_id, title, amount, stage, created_at
            FROM deals
            WHERE company_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("failed to load deals: {e}"))?;

        Ok(rows.into_iter().map(Deal::from).collect())
    }
}
