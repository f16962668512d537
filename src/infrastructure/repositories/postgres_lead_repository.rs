use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::crm::Lead;
use crate::domain::repositories::LeadRepository;

/// PostgreSQL implementation of [`LeadRepository`].
pub struct PostgresLeadRepository {
    pool: PgPool,
}

impl PostgresLeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw row shape; display fields may be NULL in imported data.
#[derive(sqlx::FromRow)]
struct LeadRow {
    id: Uuid,
    company_id: Uuid,
    name: Option<String>,
    email: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<LeadRow> for Lead {
    fn from(row: LeadRow) -> Self {
        Lead {
            id: row.id,
            company_id: row.company_id,
            name: row.name.unwrap_or_default(),
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl LeadRepository for PostgresLeadRepository {
    async fn find_by_company(&self, company_id: Uuid) -> Result<Vec<Lead>, String> {
        let rows = sqlx::query_as::<_, LeadRow>(
            r#"
            SELECT id, company_id, name, email, created_at
            FROM leads
            WHERE company_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("failed to load leads: {e}"))?;

        Ok(rows.into_iter().map(Lead::from).collect())
    }
}
