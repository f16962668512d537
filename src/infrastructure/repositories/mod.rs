// PostgreSQL adapters for the domain repository traits.

pub mod postgres_deal_repository;
pub mod postgres_lead_repository;
pub mod postgres_task_repository;
pub mod postgres_user_repository;

pub use postgres_deal_repository::PostgresDealRepository;
pub use postgres_lead_repository::PostgresLeadRepository;
pub use postgres_task_repository::PostgresTaskRepository;
pub use postgres_user_repository::PostgresUserRepository;
