use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::{User, UserRepository};
use crate::domain::user::value_objects::Email;

/// PostgreSQL implementation of [`UserRepository`].
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    company_id: Uuid,
    email: String,
    password_hash: String,
    display_name: Option<String>,
    is_active: bool,
}

fn row_to_user(row: UserRow) -> Result<User, String> {
    let email = Email::parse(row.email).map_err(|e| format!("invalid email in database: {e}"))?;
    Ok(User {
        id: row.id,
        company_id: row.company_id,
        email,
        password_hash: row.password_hash,
        display_name: row.display_name.unwrap_or_default(),
        is_active: row.is_active,
    })
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: &User) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO users (id, company_id, email, password_hash, display_name, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id)
        .bind(user.company_id)
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(&user.display_name)
        .bind(user.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("failed to insert user: {e}"))?;

        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, String> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, company_id, email, password_hash, display_name, is_active
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("failed to find user by email: {e}"))?;

        row.map(row_to_user).transpose()
    }

    async fn touch_last_seen(&self, user_id: Uuid) -> Result<(), String> {
        sqlx::query("UPDATE users SET last_seen = NOW() WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("failed to update last seen: {e}"))?;

        Ok(())
    }
}
