use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::user::value_objects::Email;

/// Account record for the auth surface.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub company_id: Uuid,
    pub email: Email,
    pub password_hash: String,
    pub display_name: String,
    pub is_active: bool,
}

/// Repository trait for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user.
    async fn insert(&self, user: &User) -> Result<(), String>;

    /// Find a user by email address.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, String>;

    /// Record that the user was just seen (login).
    async fn touch_last_seen(&self, user_id: Uuid) -> Result<(), String>;
}
