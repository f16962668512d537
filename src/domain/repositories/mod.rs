// Repository interfaces (ports) the application depends on.
// Implementations live in the infrastructure layer.

pub mod deal_repository;
pub mod lead_repository;
pub mod task_repository;
pub mod user_repository;

pub use deal_repository::DealRepository;
pub use lead_repository::LeadRepository;
pub use task_repository::TaskRepository;
pub use user_repository::{User, UserRepository};
